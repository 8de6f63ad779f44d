//! Game state and core simulation types
//!
//! Everything the simulation touches lives in `GameState`, and the only thing
//! that mutates it during play is `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::hex::{Cell, HexLayout};
use super::rows::seed_rows;
use super::sphere::{Color, Sphere};
use crate::config::GameConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// A sphere reached the bottom edge; nothing updates until reset
    GameOver,
}

/// Things that happened during the last tick, for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Projectile launched with this velocity
    Fired { velocity: Vec2 },
    /// Projectile committed to the grid
    Placed { cell: Cell, color: Color },
    /// Same-colored group removed
    Burst { cells: Vec<Cell> },
    /// Unsupported spheres removed after a burst
    Dropped { cells: Vec<Cell> },
    /// A new row was pushed in from the top
    RowInjected { pushed_off: usize },
    /// Projectile vanished without joining the grid
    ShotDiscarded,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) config: GameConfig,
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    pub(crate) rng: Pcg32,
    pub(crate) layout: HexLayout,
    pub(crate) grid: Grid,
    /// The one sphere not yet in the grid
    pub(crate) projectile: Sphere,
    /// Last known pointer position (aim target)
    pub(crate) pointer: Vec2,
    /// Consecutive placements without a burst
    pub(crate) shot_counter: u32,
    pub(crate) phase: GamePhase,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
    /// Events from the most recent tick
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with the default config
    pub fn new(seed: u64) -> Self {
        Self::with_config(GameConfig::default(), seed)
    }

    /// Create a new game; the config is assumed valid
    pub fn with_config(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let layout = HexLayout::new(config.radius);
        let mut grid = Grid::new(config.rows, config.cols());
        seed_rows(&mut grid, &layout, config.initial_rows, &mut rng);

        let launch = config.launch_position();
        let projectile = Sphere::new(launch, config.radius, Color::random(&mut rng));

        log::info!(
            "New game: seed={} grid={}x{} spheres={}",
            seed,
            grid.rows(),
            grid.cols(),
            grid.len()
        );

        Self {
            config,
            seed,
            rng,
            layout,
            grid,
            projectile,
            pointer: launch,
            shot_counter: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Start over with fresh state and a seed drawn from this run
    pub fn reset(&mut self) {
        let seed = self.rng.random();
        self.reset_with_seed(seed);
    }

    /// Start over with fresh state and the given seed
    pub fn reset_with_seed(&mut self, seed: u64) {
        log::info!("Resetting game (seed {})", seed);
        *self = Self::with_config(self.config.clone(), seed);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn layout(&self) -> &HexLayout {
        &self.layout
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn projectile(&self) -> &Sphere {
        &self.projectile
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn shot_counter(&self) -> u32 {
        self.shot_counter
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Aim indicator from the projectile to the pointer, shown only at rest
    pub fn aim_line(&self) -> Option<(Vec2, Vec2)> {
        (self.phase == GamePhase::Playing && self.projectile.is_at_rest())
            .then_some((self.projectile.pos, self.pointer))
    }

    /// Seed a sphere directly into the grid (scripted boards)
    ///
    /// Returns false if the cell is out of bounds or taken.
    pub fn place_sphere(&mut self, cell: Cell, color: Color) -> bool {
        self.grid
            .place(Sphere::in_cell(&self.layout, cell, color))
            .is_ok()
    }

    /// Recolor the waiting projectile (scripted boards)
    ///
    /// Returns false if the projectile is already in flight.
    pub fn load_projectile(&mut self, color: Color) -> bool {
        if !self.projectile.is_at_rest() {
            return false;
        }
        self.projectile.color = color;
        true
    }

    /// Replace the projectile with a fresh one at the launch point
    pub(crate) fn spawn_projectile(&mut self) {
        let color = Color::random(&mut self.rng);
        self.projectile = Sphere::new(self.config.launch_position(), self.config.radius, color);
    }

    /// Serializable view of the board
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            phase: self.phase,
            time_ticks: self.time_ticks,
            shot_counter: self.shot_counter,
            projectile: self.projectile,
            spheres: self.grid.iter().copied().collect(),
        }
    }
}

/// Point-in-time copy of the visible state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub phase: GamePhase,
    pub time_ticks: u64,
    pub shot_counter: u32,
    pub projectile: Sphere,
    /// Grid spheres, row-major
    pub spheres: Vec<Sphere>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_seeds_initial_rows() {
        let state = GameState::new(42);
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.grid().len(), 5 * 12);
        assert_eq!(state.shot_counter(), 0);
        assert!(state.projectile().is_at_rest());
        assert_eq!(state.projectile().pos, state.config().launch_position());
        assert_eq!(state.projectile().cell, None);
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = GameState::new(7);
        let b = GameState::new(7);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_reset_rebuilds_from_scratch() {
        let mut state = GameState::new(9);
        state.place_sphere(Cell::new(10, 0), Color::Red);
        state.shot_counter = 3;
        state.phase = GamePhase::GameOver;

        state.reset_with_seed(9);
        assert_eq!(state.snapshot(), GameState::new(9).snapshot());

        state.reset();
        assert_eq!(state.phase(), GamePhase::Playing);
        assert_eq!(state.grid().len(), 60);
    }

    #[test]
    fn test_aim_line_only_at_rest() {
        let mut state = GameState::new(1);
        state.pointer = Vec2::new(100.0, 100.0);
        assert_eq!(
            state.aim_line(),
            Some((state.projectile().pos, Vec2::new(100.0, 100.0)))
        );

        state.projectile.vel = Vec2::new(0.0, -1200.0);
        assert_eq!(state.aim_line(), None);
    }

    #[test]
    fn test_place_sphere_refuses_taken_cells() {
        let mut state = GameState::new(3);
        assert!(!state.place_sphere(Cell::new(0, 0), Color::Red));
        assert!(state.place_sphere(Cell::new(6, 0), Color::Red));
        assert!(!state.place_sphere(Cell::new(6, 0), Color::Blue));
        assert!(!state.place_sphere(Cell::new(40, 0), Color::Blue));
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(5);
        let json = serde_json::to_string(&state.snapshot()).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.seed, 5);
        assert_eq!(back.phase, GamePhase::Playing);
        assert_eq!(back.spheres.len(), state.grid().len());
        assert_eq!(back.spheres[0].cell, Some(Cell::new(0, 0)));
    }
}
