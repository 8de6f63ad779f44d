//! Hex Popper - A hex-grid bubble shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (hex geometry, snapping, clusters, game state)
//! - `renderer`: Backend-agnostic draw list generation
//! - `config`: Playfield and tuning configuration

pub mod config;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per display frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions
    pub const PLAYFIELD_WIDTH: f32 = 480.0;
    pub const PLAYFIELD_HEIGHT: f32 = 640.0;

    /// Sphere defaults
    pub const SPHERE_RADIUS: f32 = 20.0;
    /// Projectile speed (pixels/s), 20 px per tick at 60 Hz
    pub const SHOT_SPEED: f32 = 1200.0;
    /// Launch point sits this far above the bottom edge
    pub const LAUNCH_OFFSET: f32 = 30.0;

    /// Grid defaults
    pub const GRID_ROWS: usize = 20;
    pub const INITIAL_ROWS: usize = 5;

    /// Non-matching placements before a new row is pushed in
    pub const SHOTS_PER_ROW: u32 = 5;
    /// Smallest same-color group that bursts
    pub const MIN_CLUSTER: usize = 3;
}
