use alloc::collections::{BTreeSet, VecDeque};
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress (first reveal, also triggers bomb placement)
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameState {
    /// Indicates the game has ended and no moves can change it anymore.
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Outcome of a reveal request. Hitting a bomb is a signaled outcome, not an
/// error; no-op reveals report `Continued`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RevealOutcome {
    Continued,
    Exploded,
}

/// Represents a game from start to finish. The only type the rendering and
/// input shell talks to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    grid: Grid,
    bomb_count: CellCount,
    seed: u64,
    is_bombs_initialized: bool,
    has_exploded: bool,
    state: GameState,
}

impl Game {
    /// Builds a game with inert cells. Bombs are placed lazily on the first
    /// reveal so that the first-revealed cell and its neighbors stay clear.
    pub fn new(config: GameConfig) -> Result<Game> {
        let grid = Grid::build(config.rows, config.cols)?;
        let bomb_count = config.bomb_count();
        log::info!(
            "new game {}x{} with {} bombs",
            config.rows,
            config.cols,
            bomb_count
        );
        Ok(Self {
            grid,
            bomb_count,
            seed: config.seed,
            is_bombs_initialized: false,
            has_exploded: false,
            state: Default::default(),
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn rows(&self) -> Coord {
        self.grid.rows()
    }

    pub fn cols(&self) -> Coord {
        self.grid.cols()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.bomb_count
    }

    pub fn has_exploded(&self) -> bool {
        self.has_exploded
    }

    /// Read-only view of a cell for rendering.
    pub fn cell_view(&self, coords: Coord2) -> Result<CellView> {
        Ok(self.grid.get(coords)?.view())
    }

    /// True on a loss (a bomb was revealed) or a win (every non-bomb cell is
    /// revealed). Scans the whole grid; fine at interactive call rates.
    pub fn is_game_over(&self) -> bool {
        if self.has_exploded {
            return true;
        }
        self.grid
            .cells()
            .all(|cell| cell.is_bomb || cell.is_revealed)
    }

    /// Reveals a cell. Revealed and flagged cells are left untouched; a bomb
    /// ends the game with `Exploded`; a zero-count cell cascades through its
    /// connected zero region.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.grid.validate(coords)?;

        if self.state.is_final() {
            return Ok(RevealOutcome::Continued);
        }

        if !self.grid[coords].is_interactable() {
            return Ok(RevealOutcome::Continued);
        }

        if !self.is_bombs_initialized {
            self.place_bombs(coords)?;
        }

        if self.grid[coords].is_bomb {
            self.grid[coords].is_revealed = true;
            self.has_exploded = true;
            self.state = GameState::Lost;
            log::info!("bomb revealed at {:?}", coords);
            return Ok(RevealOutcome::Exploded);
        }

        self.reveal_cascade(coords);
        self.mark_started();
        if self.is_game_over() {
            self.state = GameState::Won;
            log::info!("all safe cells revealed");
        }
        Ok(RevealOutcome::Continued)
    }

    /// Flips a cell's flag. Revealed cells are left untouched.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<()> {
        let cell = self.grid.get_mut(coords)?;
        if self.state.is_final() || cell.is_revealed {
            return Ok(());
        }
        cell.is_flagged = !cell.is_flagged;
        Ok(())
    }

    /// One-shot bomb placement, keyed off the first revealed cell. The
    /// exclusion zone is that cell plus its up-to-8 neighbors.
    fn place_bombs(&mut self, first: Coord2) -> Result<()> {
        let mut excluded = BTreeSet::from([self.grid.index_of(first)]);
        excluded.extend(self.grid.neighbors(first).map(|pos| self.grid.index_of(pos)));

        let positions = RejectionPlacer::new(self.seed).place(
            self.grid.total_cells(),
            self.bomb_count,
            &excluded,
        )?;
        self.apply_bomb_positions(&positions);
        Ok(())
    }

    /// Marks each position as a bomb and bumps every resolved neighbor's
    /// adjacency count. Counting is commutative, so order does not matter.
    fn apply_bomb_positions(&mut self, positions: &[FlatIndex]) {
        for &index in positions {
            let coords = self.grid.coords_of(index);
            self.grid[coords].is_bomb = true;
            for neighbor in self.grid.neighbors(coords) {
                self.grid[neighbor].adjacent_bombs += 1;
            }
        }
        self.is_bombs_initialized = true;
    }

    /// Iterative flood-fill over the connected zero-count region. Bordering
    /// non-zero cells are revealed but not expanded; flagged cells stop the
    /// cascade. Each cell is visited at most once.
    fn reveal_cascade(&mut self, start: Coord2) {
        self.grid[start].is_revealed = true;

        if self.grid[start].adjacent_bombs != 0 {
            return;
        }

        let mut visited = BTreeSet::from([start]);
        let mut to_visit: VecDeque<_> = self.grid.neighbors(start).collect();

        while let Some(coords) = to_visit.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            if !self.grid[coords].is_interactable() {
                continue;
            }

            self.grid[coords].is_revealed = true;
            log::trace!(
                "flood revealed {:?}, bomb count: {}",
                coords,
                self.grid[coords].adjacent_bombs
            );

            if self.grid[coords].adjacent_bombs == 0 {
                to_visit.extend(
                    self.grid
                        .neighbors(coords)
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }

    fn mark_started(&mut self) {
        if matches!(self.state, GameState::NotStarted) {
            self.state = GameState::InProgress;
        }
    }
}
