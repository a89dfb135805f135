use serde::{Deserialize, Serialize};

/// What one square hides underneath: a mine, or a safe square annotated with
/// the number of mines among its up-to-8 neighbors. A mined square carries no
/// count at all, so the "count of a mine" cannot even be expressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellContent {
    Mine,
    Safe(u8),
}

/// One square of the board. `revealed` and `flagged` are never both set
/// through normal play; the end-of-game board clear forces `revealed` on
/// every cell while leaving `flagged` untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) content: CellContent,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
}

impl Cell {
    pub const fn content(self) -> CellContent {
        self.content
    }

    pub const fn has_mine(self) -> bool {
        matches!(self.content, CellContent::Mine)
    }

    /// Neighbor mine count, `None` for a mined cell.
    pub const fn adjacent_mines(self) -> Option<u8> {
        match self.content {
            CellContent::Mine => None,
            CellContent::Safe(count) => Some(count),
        }
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Still face-down and carrying no flag, so a reveal may touch it.
    pub const fn is_untouched(self) -> bool {
        !self.revealed && !self.flagged
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            content: CellContent::Safe(0),
            revealed: false,
            flagged: false,
        }
    }
}

/// What a renderer should draw for one cell. Computed on demand from the
/// cell and the session, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellFace {
    Hidden,
    Flagged,
    Open(u8),
    /// The mine the player revealed, drawn distinctly from the rest.
    Exploded,
    /// A mine shown by the end-of-game clear that carried no flag.
    Mine,
    /// A correctly flagged mine, shown once the game is over.
    FlaggedMine,
    /// A flag that turned out to cover a safe cell.
    WrongFlag,
}

impl CellFace {
    /// Whether the face still shows the unrevealed backside.
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}
