//! Fixed timestep simulation tick
//!
//! One tick runs the whole pipeline in order: aim/fire, projectile motion,
//! collision and snap, burst and drop, row injection, lose check.

use glam::Vec2;

use super::cluster::{find_matches, remove_cells, remove_floating};
use super::collision::{find_collision, snap_projectile};
use super::hex::Cell;
use super::rows::{inject_row, reached_bottom};
use super::sphere::Color;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::MIN_CLUSTER;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position in playfield coordinates
    pub pointer: Option<Vec2>,
    /// Fire the projectile toward the pointer (click/tap/space)
    pub fire: bool,
    /// Throw away the current game and start a new one
    pub reset: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.events.clear();

    if input.reset {
        state.reset();
        return;
    }

    if let Some(pointer) = input.pointer {
        state.pointer = pointer;
    }

    // Terminal until reset
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;

    if input.fire && state.projectile.fire(state.pointer, state.config.shot_speed) {
        state.events.push(GameEvent::Fired {
            velocity: state.projectile.vel,
        });
    }

    // A resting projectile never collides
    if !state.projectile.is_at_rest() {
        state.projectile.advance(dt, state.config.width);

        if let Some(hit) = find_collision(&state.grid, &state.projectile) {
            settle_projectile(state, hit);
        } else if state.projectile.hit_ceiling() {
            log::debug!("Shot reached the ceiling without touching the grid");
            state.events.push(GameEvent::ShotDiscarded);
            state.spawn_projectile();
        }
    }

    if reached_bottom(&state.grid, state.config.height) {
        log::info!("Game over after {} ticks", state.time_ticks);
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver);
    }
}

/// Commit the colliding projectile and resolve what the placement causes
fn settle_projectile(state: &mut GameState, hit: Cell) {
    let projectile = state.projectile;

    match snap_projectile(&mut state.grid, &state.layout, projectile) {
        Ok(cell) => {
            log::debug!(
                "Placed {} at ({}, {}) after hitting ({}, {})",
                projectile.color.as_str(),
                cell.row,
                cell.col,
                hit.row,
                hit.col
            );
            state.events.push(GameEvent::Placed {
                cell,
                color: projectile.color,
            });
            resolve_placement(state, cell, projectile.color);
        }
        Err(_) => {
            log::warn!("No free cell left for the projectile, discarding shot");
            state.events.push(GameEvent::ShotDiscarded);
        }
    }

    state.spawn_projectile();
}

/// Burst, drop and row injection for a sphere just placed at `cell`
pub(crate) fn resolve_placement(state: &mut GameState, cell: Cell, color: Color) {
    let matches = find_matches(&state.grid, &state.layout, cell, color);

    if matches.len() >= MIN_CLUSTER {
        remove_cells(&mut state.grid, &matches);
        log::debug!("Burst {} {} spheres", matches.len(), color.as_str());
        state.events.push(GameEvent::Burst { cells: matches });

        let dropped = remove_floating(&mut state.grid, &state.layout);
        if !dropped.is_empty() {
            log::debug!("Dropped {} unsupported spheres", dropped.len());
            state.events.push(GameEvent::Dropped {
                cells: dropped.iter().filter_map(|s| s.cell).collect(),
            });
        }

        state.shot_counter = 0;
        return;
    }

    state.shot_counter += 1;
    if state.shot_counter >= state.config.shots_per_row {
        let pushed_off = inject_row(&mut state.grid, &mut state.layout, &mut state.rng);
        log::debug!("Injected a new row after {} shots", state.shot_counter);
        state.events.push(GameEvent::RowInjected {
            pushed_off: pushed_off.len(),
        });
        state.shot_counter = 0;
    }
}
