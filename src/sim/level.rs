//! Level state: static terrain grid plus the live actor collection
//!
//! The grid never changes after construction. Actors are removed as they are
//! consumed, and the status only ever moves away from `InProgress`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorHandle, ActorId, ActorType};
use crate::consts::FINISH_DELAY;

/// Terrain kind of a grid cell or of the space outside the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Obstacle {
    Wall,
    Lava,
}

/// Overall outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LevelStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

/// Whatever the player has just touched: terrain or another actor's type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contact {
    Wall,
    Lava,
    Actor,
    Player,
    Coin,
    Fireball,
}

impl From<Obstacle> for Contact {
    fn from(obstacle: Obstacle) -> Self {
        match obstacle {
            Obstacle::Wall => Contact::Wall,
            Obstacle::Lava => Contact::Lava,
        }
    }
}

impl From<ActorType> for Contact {
    fn from(actor_type: ActorType) -> Self {
        match actor_type {
            ActorType::Actor => Contact::Actor,
            ActorType::Player => Contact::Player,
            ActorType::Coin => Contact::Coin,
            ActorType::Fireball => Contact::Fireball,
        }
    }
}

/// Row-major obstacle grid. Rows may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Vec<Vec<Option<Obstacle>>>,
    width: usize,
    height: usize,
}

impl Grid {
    pub fn new(cells: Vec<Vec<Option<Obstacle>>>) -> Self {
        let height = cells.len();
        let width = cells.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            cells,
            width,
            height,
        }
    }

    /// Longest row length
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> &[Vec<Option<Obstacle>>] {
        &self.cells
    }

    /// Cell at column `x`, row `y`; cells past the end of a short row are empty
    pub fn cell(&self, x: usize, y: usize) -> Option<Obstacle> {
        self.cells.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// Classify the box at `pos` with `size` against the terrain.
    ///
    /// Leaving the grid to the left, top or right reads as `Wall`; dropping
    /// below the bottom reads as `Lava`. Inside the grid, the whole cells the
    /// box touches are scanned row by row and the first non-empty one wins.
    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Obstacle> {
        let left = pos.x;
        let top = pos.y;
        let right = pos.x + size.x;
        let bottom = pos.y + size.y;

        if left < 0.0 || top < 0.0 || right > self.width as f32 {
            return Some(Obstacle::Wall);
        }
        if bottom > self.height as f32 {
            return Some(Obstacle::Lava);
        }

        let row_start = top.floor() as usize;
        let row_end = bottom.ceil() as usize;
        let col_start = left.floor() as usize;
        let col_end = right.ceil() as usize;

        (row_start..row_end)
            .flat_map(|y| (col_start..col_end).map(move |x| (x, y)))
            .find_map(|(x, y)| self.cell(x, y))
    }
}

/// A playable level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Static terrain
    pub grid: Grid,
    /// Live actors in discovery order
    pub actors: Vec<Actor>,
    /// Current outcome
    pub status: LevelStatus,
    /// Time left after a terminal status before the level counts as finished.
    /// Counted down by the driver.
    pub finish_delay: f32,
    player: Option<ActorId>,
}

impl Level {
    /// Take ownership of a grid and actors, numbering actors from 1
    pub fn new(grid: Grid, mut actors: Vec<Actor>) -> Self {
        for (index, actor) in actors.iter_mut().enumerate() {
            actor.id = ActorId(index as u32 + 1);
        }

        let mut players = actors
            .iter()
            .filter(|a| a.actor_type() == ActorType::Player);
        let player = players.next().map(Actor::id);
        let extra = players.count();
        if extra > 0 {
            log::warn!("Level has {} players, using the first", extra + 1);
        }

        Self {
            grid,
            actors,
            status: LevelStatus::InProgress,
            finish_delay: FINISH_DELAY,
            player,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// The level's player, if the schema placed one
    pub fn player(&self) -> Option<&Actor> {
        let id = self.player?;
        self.actors.iter().find(|a| a.id() == id)
    }

    /// Look up a live actor by id
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id() == id)
    }

    /// Won or lost, and the post-outcome delay has run out
    pub fn is_finished(&self) -> bool {
        self.status != LevelStatus::InProgress && self.finish_delay < 0.0
    }

    /// First live actor overlapping `item`
    pub fn actor_at(&self, item: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|a| a.is_intersect(item))
    }

    pub fn obstacle_at(&self, pos: Vec2, size: Vec2) -> Option<Obstacle> {
        self.grid.obstacle_at(pos, size)
    }

    /// Drop the first actor with this id; unknown ids are ignored
    pub fn remove_actor(&mut self, id: ActorId) {
        if let Some(index) = self.actors.iter().position(|a| a.id() == id) {
            self.actors.remove(index);
        }
    }

    pub fn no_more_actors(&self, actor_type: ActorType) -> bool {
        !self.actors.iter().any(|a| a.actor_type() == actor_type)
    }

    /// React to the player touching terrain or another actor.
    ///
    /// Lava and fireballs lose the level. A coin is collected when `actor`
    /// names a coin, and collecting the last one wins. Once won or lost the
    /// outcome is fixed.
    pub fn player_touched(&mut self, contact: Contact, actor: Option<ActorHandle>) {
        if self.status != LevelStatus::InProgress {
            return;
        }

        match contact {
            Contact::Lava | Contact::Fireball => {
                log::debug!("Player touched {:?}, level lost", contact);
                self.status = LevelStatus::Lost;
            }
            Contact::Coin => {
                let Some(coin) = actor.filter(|h| h.actor_type == ActorType::Coin) else {
                    return;
                };
                self.remove_actor(coin.id);
                log::debug!("Coin {:?} collected", coin.id);
                if self.no_more_actors(ActorType::Coin) {
                    log::debug!("All coins collected, level won");
                    self.status = LevelStatus::Won;
                }
            }
            _ => {}
        }
    }
}
