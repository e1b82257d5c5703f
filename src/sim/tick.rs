//! Driver step
//!
//! Advances a level by one time step: move every actor, then resolve what the
//! player is touching. Also owns the post-outcome finish delay.

use super::level::{Level, LevelStatus};
use crate::consts::MAX_ADVANCE_TICKS;

/// Advance the level by `dt` and return the resulting status
pub fn tick(level: &mut Level, dt: f32) -> LevelStatus {
    if level.status != LevelStatus::InProgress {
        level.finish_delay -= dt;
    }

    for actor in &mut level.actors {
        actor.act(dt, &level.grid);
    }

    if level.status == LevelStatus::InProgress {
        resolve_player_contacts(level);
    }

    level.status
}

/// Terrain first, then the first overlapping actor
fn resolve_player_contacts(level: &mut Level) {
    let Some(player) = level.player() else {
        return;
    };

    if let Some(obstacle) = level.obstacle_at(player.pos, player.size) {
        level.player_touched(obstacle.into(), None);
    }

    let Some(player) = level.player() else {
        return;
    };
    if let Some(other) = level.actor_at(player).map(|a| a.handle()) {
        level.player_touched(other.actor_type.into(), Some(other));
    }
}

/// Run `elapsed` time in equal steps of at most `max_step`, stopping once the
/// level is finished. Returns the number of ticks run.
///
/// At most `MAX_ADVANCE_TICKS` ticks run per call; time beyond that is
/// dropped. Non-positive or non-finite inputs run nothing.
pub fn advance(level: &mut Level, elapsed: f32, max_step: f32) -> u32 {
    if !(elapsed.is_finite() && elapsed > 0.0 && max_step.is_finite() && max_step > 0.0) {
        return 0;
    }

    let wanted = (elapsed / max_step).ceil();
    let (steps, step) = if wanted > MAX_ADVANCE_TICKS as f32 {
        log::warn!(
            "Advancing {} in steps of {} exceeds {} ticks, truncating",
            elapsed,
            max_step,
            MAX_ADVANCE_TICKS
        );
        (MAX_ADVANCE_TICKS, max_step)
    } else {
        let steps = (wanted as u32).max(1);
        (steps, elapsed / steps as f32)
    };

    let mut ticks = 0;
    while ticks < steps && !level.is_finished() {
        let before = level.status;
        let after = tick(level, step);
        ticks += 1;
        if before != after {
            log::info!("Level {:?} after {} ticks", after, ticks);
        }
    }

    ticks
}
