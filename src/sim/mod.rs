//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (row-major over the grid)
//! - No rendering or platform dependencies

pub mod cluster;
pub mod collision;
pub mod grid;
pub mod hex;
mod physics;
pub mod rows;
pub mod sphere;
pub mod state;
pub mod tick;

pub use cluster::{find_matches, find_supported, remove_floating};
pub use collision::{find_collision, resolve_snap_cell, snap_projectile};
pub use grid::Grid;
pub use hex::{Cell, HexLayout};
pub use rows::{inject_row, reached_bottom};
pub use sphere::{Color, Sphere};
pub use state::{GameEvent, GamePhase, GameState, Snapshot};
pub use tick::{TickInput, tick};
