use serde::{Deserialize, Serialize};

/// A single grid position. Cells start inert and are only ever mutated by
/// bomb placement and by the engine's reveal and flag operations.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) is_bomb: bool,
    pub(crate) is_revealed: bool,
    pub(crate) is_flagged: bool,
    pub(crate) adjacent_bombs: u8,
}

impl Cell {
    pub(crate) const fn is_interactable(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    pub const fn view(self) -> CellView {
        if self.is_revealed {
            CellView::Revealed {
                bomb: self.is_bomb,
                adjacent_bombs: self.adjacent_bombs,
            }
        } else if self.is_flagged {
            CellView::Flagged
        } else {
            CellView::Hidden
        }
    }
}

/// Read-only per-cell state handed to the rendering shell. Whether a cell is
/// a bomb is only exposed once the cell has been revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed { bomb: bool, adjacent_bombs: u8 },
}

impl Default for CellView {
    fn default() -> Self {
        Self::Hidden
    }
}
