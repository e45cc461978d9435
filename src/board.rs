use std::{
    fmt::Display,
    ops::{Index, Not},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

pub const NUM_CELLS: u8 = 9;

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

// Row-major, top row first:
//   0 1 2
//   3 4 5
//   6 7 8
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Serialize, Deserialize)]
pub struct CellId(u8);

impl CellId {
    pub const CENTER: CellId = CellId(4);
    pub const CORNERS: [CellId; 4] = [CellId(0), CellId(2), CellId(6), CellId(8)];

    pub const fn new(index: u8) -> Option<Self> {
        if index >= NUM_CELLS {
            None
        } else {
            Some(Self(index))
        }
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

impl FromStr for CellId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u8>().ok().and_then(CellId::new).ok_or(())
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Player>; 9],
}

impl Board {
    // The session layer checks the cell is empty before calling; there is no
    // public path that can overwrite a placed mark.
    pub(crate) fn mark(&mut self, cell: CellId, player: Player) {
        self.cells[cell.0 as usize] = Some(player);
    }

    pub fn mark_count(&self) -> u8 {
        self.cells.iter().flatten().count() as u8
    }

    pub fn is_full(&self) -> bool {
        self.mark_count() == NUM_CELLS
    }

    /// Empty cells in ascending index order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, occupant)| occupant.is_none())
            .map(|(i, _)| CellId(i as u8))
    }
}

impl From<[Option<Player>; 9]> for Board {
    fn from(cells: [Option<Player>; 9]) -> Self {
        Self { cells }
    }
}

impl Index<CellId> for Board {
    type Output = Option<Player>;

    fn index(&self, cell: CellId) -> &Self::Output {
        &self.cells[cell.0 as usize]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.chunks_exact(3).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                match cell {
                    Some(player) => write!(f, "{player}")?,
                    None => write!(f, "-")?,
                };
            }
        }
        Ok(())
    }
}
