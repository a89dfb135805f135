use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::{
    Board, BoardGenerator, CellContent, CellCount, CellFace, Coord2, GameConfig, GameError,
    RandomBoardGenerator, Result,
};

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can be made anymore.
    pub const fn is_final(self) -> bool {
        match self {
            Self::InProgress => false,
            Self::Won | Self::Lost => true,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Outcome of a reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    Placed,
    Removed,
    NoChange,
}

impl FlagOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    /// Flag state of the cell after the toggle.
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Placed)
    }
}

/// How a reveal request left the game, plus every cell whose reveal state
/// flipped, in reveal order, so callers can redraw deltas instead of the
/// whole board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealReport {
    pub outcome: RevealOutcome,
    pub changed: Vec<Coord2>,
}

/// One game from first reveal to win or loss. Owns the board and all
/// per-game counters; dropped and rebuilt on restart or difficulty change.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    state: GameState,
    revealed_count: CellCount,
    flag_count: CellCount,
    move_count: u32,
    triggered_mine: Option<Coord2>,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            revealed_count: 0,
            flag_count: 0,
            move_count: 0,
            triggered_mine: None,
        }
    }

    /// Starts a session on a freshly generated random board.
    pub fn generate(config: GameConfig, seed: u64) -> Self {
        Self::new(RandomBoardGenerator::new(seed).generate(config))
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_final()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn cell_at(&self, coords: Coord2) -> crate::Cell {
        self.board.cell(coords)
    }

    /// Safe cells revealed through play so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// State-changing player actions so far, reveals and flag toggles alike.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// The mine whose reveal ended the game, if it ended in a loss.
    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Mines minus flags placed. Negative when the player over-flagged;
    /// display only, never consulted for win detection.
    pub fn mines_left(&self) -> isize {
        self.board.mine_count() as isize - self.flag_count as isize
    }

    /// Reveals a cell. Flagged and already-revealed cells are left alone; a
    /// flagged cell must be unflagged before it can be revealed. Panics when
    /// `coords` lies outside the board.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealReport> {
        let cell = self.board.cell(coords);
        self.check_in_progress()?;

        if !cell.is_untouched() {
            return Ok(RevealReport {
                outcome: RevealOutcome::NoChange,
                changed: Vec::new(),
            });
        }

        let mut changed = Vec::new();
        let outcome = match cell.content() {
            CellContent::Mine => {
                self.board.cell_mut(coords).revealed = true;
                changed.push(coords);
                self.triggered_mine = Some(coords);
                self.state = GameState::Lost;
                log::debug!("mine triggered at {:?}", coords);
                changed.extend(self.reveal_all());
                RevealOutcome::HitMine
            }
            CellContent::Safe(count) => {
                self.reveal_safe(coords, count, &mut changed);
                if self.revealed_count == self.board.safe_cell_count() {
                    self.state = GameState::Won;
                    changed.extend(self.reveal_all());
                    RevealOutcome::Won
                } else {
                    RevealOutcome::Revealed
                }
            }
        };

        self.move_count += 1;
        Ok(RevealReport { outcome, changed })
    }

    /// Opens one safe cell and flood-fills from it when its count is zero:
    /// every connected untouched cell is revealed, recursing only through
    /// zero-count cells. A zero cell has no mined neighbor, so the fill can
    /// never reach a mine, and the visited set keeps it bounded by the board
    /// area.
    fn reveal_safe(&mut self, coords: Coord2, count: u8, changed: &mut Vec<Coord2>) {
        self.board.cell_mut(coords).revealed = true;
        self.revealed_count += 1;
        changed.push(coords);
        log::debug!("revealed {:?}, adjacent mines: {}", coords, count);

        if count != 0 {
            return;
        }

        let mut visited = BTreeSet::from([coords]);
        let mut to_visit: VecDeque<Coord2> = self
            .board
            .iter_neighbors(coords)
            .filter(|&pos| self.board.cell(pos).is_untouched())
            .collect();
        log::trace!("flood fill from {:?}, frontier: {:?}", coords, to_visit);

        while let Some(visit) = to_visit.pop_front() {
            if !visited.insert(visit) {
                continue;
            }

            let cell = self.board.cell(visit);
            // flags survive the fill, revealed cells are final
            if !cell.is_untouched() {
                continue;
            }
            let CellContent::Safe(visit_count) = cell.content() else {
                continue;
            };

            self.board.cell_mut(visit).revealed = true;
            self.revealed_count += 1;
            changed.push(visit);
            log::trace!("flood revealed {:?}, adjacent mines: {}", visit, visit_count);

            if visit_count == 0 {
                to_visit.extend(
                    self.board
                        .iter_neighbors(visit)
                        .filter(|&pos| self.board.cell(pos).is_untouched())
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    /// Flips the flag on an unrevealed cell; revealed cells are left alone.
    /// Panics when `coords` lies outside the board.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<FlagOutcome> {
        let cell = self.board.cell(coords);
        self.check_in_progress()?;

        let outcome = if cell.is_revealed() {
            FlagOutcome::NoChange
        } else if cell.is_flagged() {
            self.board.cell_mut(coords).flagged = false;
            self.flag_count -= 1;
            FlagOutcome::Removed
        } else {
            self.board.cell_mut(coords).flagged = true;
            self.flag_count += 1;
            FlagOutcome::Placed
        };

        if outcome.has_update() {
            self.move_count += 1;
        }
        Ok(outcome)
    }

    /// Forces every cell face-up in a single pass, leaving mine and flag
    /// metadata untouched so renderers can distinguish correct flags, wrong
    /// flags, and missed mines. Runs automatically on both terminal
    /// transitions; returns the cells that were still hidden.
    pub fn reveal_all(&mut self) -> Vec<Coord2> {
        let (width, height) = self.board.size();
        let mut changed = Vec::new();

        for x in 0..width {
            for y in 0..height {
                let cell = self.board.cell_mut((x, y));
                if !cell.revealed {
                    cell.revealed = true;
                    changed.push((x, y));
                }
            }
        }

        changed
    }

    /// Projects one cell onto what a renderer should draw for it.
    pub fn face_at(&self, coords: Coord2) -> CellFace {
        let cell = self.board.cell(coords);

        if !cell.is_revealed() {
            return if cell.is_flagged() {
                CellFace::Flagged
            } else {
                CellFace::Hidden
            };
        }

        match (cell.content(), cell.is_flagged()) {
            (CellContent::Mine, _) if self.triggered_mine == Some(coords) => CellFace::Exploded,
            (CellContent::Mine, true) => CellFace::FlaggedMine,
            (CellContent::Mine, false) => CellFace::Mine,
            (CellContent::Safe(_), true) => CellFace::WrongFlag,
            (CellContent::Safe(count), false) => CellFace::Open(count),
        }
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_final() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
