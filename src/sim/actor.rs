//! Actors: axis-aligned boxes that move over the level grid
//!
//! Every entity in a level is an `Actor`. The variant-specific state lives in
//! `ActorKind`, and `Actor::act` dispatches on it once per tick.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::level::Grid;
use crate::consts::*;
use crate::vec2;

/// Level-assigned actor identifier (0 = not yet owned by a level)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ActorId(pub u32);

/// Discriminant reported to collision handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Actor,
    Player,
    Coin,
    Fireball,
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorType::Actor => "actor",
            ActorType::Player => "player",
            ActorType::Coin => "coin",
            ActorType::Fireball => "fireball",
        }
    }
}

/// Variant-specific state and motion rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Plain box with no behaviour
    Generic,
    /// Moved by external input only
    Player,
    /// Bobs around `anchor`; `spring` is the current phase in radians
    Coin { anchor: Vec2, spring: f32 },
    /// Moves in a straight line and reverses on obstacles
    Fireball,
    /// Falls and restarts from `start` on obstacles
    FireRain { start: Vec2 },
}

/// Identity and type of an actor, detached from the borrow of the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorHandle {
    pub id: ActorId,
    pub actor_type: ActorType,
}

/// An axis-aligned box with a velocity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub(crate) id: ActorId,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: Vec2,
    pub kind: ActorKind,
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ONE, Vec2::ZERO)
    }
}

impl Actor {
    pub fn new(pos: Vec2, size: Vec2, speed: Vec2) -> Self {
        Self {
            id: ActorId::default(),
            pos,
            size,
            speed,
            kind: ActorKind::Generic,
        }
    }

    pub fn player(pos: Vec2) -> Self {
        Self {
            kind: ActorKind::Player,
            ..Self::new(pos + vec2(PLAYER_OFFSET), vec2(PLAYER_SIZE), Vec2::ZERO)
        }
    }

    /// Coin at a tile position with a random starting phase in [0, 2π)
    pub fn coin(pos: Vec2, rng: &mut impl Rng) -> Self {
        let anchor = pos + vec2(COIN_OFFSET);
        let spring = rng.random_range(0.0..std::f32::consts::TAU);
        Self {
            kind: ActorKind::Coin { anchor, spring },
            ..Self::new(anchor, vec2(COIN_SIZE), Vec2::ZERO)
        }
    }

    pub fn fireball(pos: Vec2, speed: Vec2) -> Self {
        Self {
            kind: ActorKind::Fireball,
            ..Self::new(pos, Vec2::ONE, speed)
        }
    }

    pub fn horizontal_fireball(pos: Vec2) -> Self {
        Self::fireball(pos, vec2(HORIZONTAL_FIREBALL_SPEED))
    }

    pub fn vertical_fireball(pos: Vec2) -> Self {
        Self::fireball(pos, vec2(VERTICAL_FIREBALL_SPEED))
    }

    pub fn fire_rain(pos: Vec2) -> Self {
        Self {
            kind: ActorKind::FireRain { start: pos },
            ..Self::new(pos, Vec2::ONE, vec2(FIRE_RAIN_SPEED))
        }
    }

    #[inline]
    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn actor_type(&self) -> ActorType {
        match self.kind {
            ActorKind::Generic => ActorType::Actor,
            ActorKind::Player => ActorType::Player,
            ActorKind::Coin { .. } => ActorType::Coin,
            ActorKind::Fireball | ActorKind::FireRain { .. } => ActorType::Fireball,
        }
    }

    pub fn handle(&self) -> ActorHandle {
        ActorHandle {
            id: self.id,
            actor_type: self.actor_type(),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap on both axes. An actor never intersects itself, and
    /// boxes that only share an edge do not intersect.
    pub fn is_intersect(&self, other: &Actor) -> bool {
        if std::ptr::eq(self, other) {
            return false;
        }
        self.top() < other.bottom()
            && self.bottom() > other.top()
            && self.left() < other.right()
            && self.right() > other.left()
    }

    /// Where a straight-line mover would be after `dt`
    #[inline]
    pub fn next_position(&self, dt: f32) -> Vec2 {
        self.pos + self.speed * dt
    }

    /// Advance this actor by `dt` against the level terrain
    pub fn act(&mut self, dt: f32, grid: &Grid) {
        match self.kind {
            ActorKind::Generic | ActorKind::Player => {}
            ActorKind::Coin {
                anchor,
                ref mut spring,
            } => {
                *spring += COIN_SPRING_SPEED * dt;
                self.pos = anchor + Vec2::new(0.0, spring.sin() * COIN_SPRING_DIST);
            }
            ActorKind::Fireball | ActorKind::FireRain { .. } => {
                let next = self.next_position(dt);
                if grid.obstacle_at(next, self.size).is_some() {
                    self.handle_obstacle();
                } else {
                    self.pos = next;
                }
            }
        }
    }

    /// Response of a moving hazard to blocked terrain
    pub fn handle_obstacle(&mut self) {
        match self.kind {
            ActorKind::FireRain { start } => self.pos = start,
            _ => self.speed = self.speed * -1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::Obstacle;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn open_grid(width: usize, height: usize) -> Grid {
        Grid::new(vec![vec![None; width]; height])
    }

    #[test]
    fn test_default_actor() {
        let actor = Actor::default();
        assert_eq!(actor.pos, Vec2::ZERO);
        assert_eq!(actor.size, Vec2::ONE);
        assert_eq!(actor.speed, Vec2::ZERO);
        assert_eq!(actor.actor_type(), ActorType::Actor);
    }

    #[test]
    fn test_bounds() {
        let actor = Actor::new(Vec2::new(2.0, 3.0), Vec2::new(0.5, 1.5), Vec2::ZERO);
        assert_eq!(actor.left(), 2.0);
        assert_eq!(actor.top(), 3.0);
        assert_eq!(actor.right(), 2.5);
        assert_eq!(actor.bottom(), 4.5);
    }

    #[test]
    fn test_never_intersects_itself() {
        let actor = Actor::default();
        assert!(!actor.is_intersect(&actor));
        // an equal but distinct actor does overlap
        let twin = actor.clone();
        assert!(actor.is_intersect(&twin));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Actor::new(Vec2::ZERO, Vec2::ONE, Vec2::ZERO);
        let right = Actor::new(Vec2::new(1.0, 0.0), Vec2::ONE, Vec2::ZERO);
        let below = Actor::new(Vec2::new(0.0, 1.0), Vec2::ONE, Vec2::ZERO);
        let corner = Actor::new(Vec2::ONE, Vec2::ONE, Vec2::ZERO);
        assert!(!a.is_intersect(&right));
        assert!(!a.is_intersect(&below));
        assert!(!a.is_intersect(&corner));

        let overlapping = Actor::new(Vec2::new(0.5, 0.5), Vec2::ONE, Vec2::ZERO);
        assert!(a.is_intersect(&overlapping));
        let contained = Actor::new(Vec2::new(0.25, 0.25), Vec2::splat(0.5), Vec2::ZERO);
        assert!(a.is_intersect(&contained));
    }

    #[test]
    fn test_variant_types() {
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(Actor::player(Vec2::ZERO).actor_type(), ActorType::Player);
        assert_eq!(Actor::coin(Vec2::ZERO, &mut rng).actor_type(), ActorType::Coin);
        assert_eq!(Actor::horizontal_fireball(Vec2::ZERO).actor_type(), ActorType::Fireball);
        assert_eq!(Actor::vertical_fireball(Vec2::ZERO).actor_type(), ActorType::Fireball);
        assert_eq!(Actor::fire_rain(Vec2::ZERO).actor_type(), ActorType::Fireball);
        assert_eq!(ActorType::Fireball.as_str(), "fireball");
    }

    #[test]
    fn test_player_spawn_offset() {
        let player = Actor::player(Vec2::new(3.0, 4.0));
        assert_eq!(player.pos, Vec2::new(3.0, 3.5));
        assert_eq!(player.size, Vec2::new(0.8, 1.5));
        assert_eq!(player.speed, Vec2::ZERO);
    }

    #[test]
    fn test_fireball_moves_freely() {
        let grid = open_grid(10, 10);
        let mut fireball = Actor::vertical_fireball(Vec2::new(1.0, 1.0));
        fireball.act(1.5, &grid);
        assert_eq!(fireball.pos, Vec2::new(1.0, 4.0));
        assert_eq!(fireball.speed, Vec2::new(0.0, 2.0));
    }

    #[test]
    fn test_fireball_bounces_in_place() {
        let grid = Grid::new(vec![vec![None, None, None, None, Some(Obstacle::Wall)]]);
        let mut fireball = Actor::horizontal_fireball(Vec2::new(2.0, 0.0));

        fireball.act(1.0, &grid);
        assert_eq!(fireball.pos, Vec2::new(2.0, 0.0));
        assert_eq!(fireball.speed, Vec2::new(-2.0, 0.0));

        fireball.act(0.5, &grid);
        assert_eq!(fireball.pos, Vec2::new(1.0, 0.0));
        assert_eq!(fireball.speed, Vec2::new(-2.0, 0.0));
    }

    #[test]
    fn test_fire_rain_restarts() {
        let grid = open_grid(3, 4);
        let start = Vec2::new(1.0, 0.0);
        let mut rain = Actor::fire_rain(start);

        rain.act(1.0, &grid);
        assert_eq!(rain.pos, Vec2::new(1.0, 3.0));

        // falls past the bottom edge, which reads as lava
        rain.act(1.0, &grid);
        assert_eq!(rain.pos, start);
        assert_eq!(rain.speed, Vec2::new(0.0, 3.0));
    }

    #[test]
    fn test_coin_bobs_around_anchor() {
        let grid = open_grid(1, 1);
        let mut rng = Pcg32::seed_from_u64(42);
        let mut coin = Actor::coin(Vec2::new(1.0, 1.0), &mut rng);
        let ActorKind::Coin { anchor, spring } = coin.kind else {
            panic!("expected a coin");
        };
        assert!((anchor - Vec2::new(1.2, 1.1)).length() < 1e-6);
        assert_eq!(coin.pos, anchor);
        assert_eq!(coin.size, Vec2::new(0.6, 0.6));
        assert!((0.0..std::f32::consts::TAU).contains(&spring));

        coin.act(0.25, &grid);
        let expected_phase = spring + COIN_SPRING_SPEED * 0.25;
        let ActorKind::Coin { spring: phase, .. } = coin.kind else {
            panic!("expected a coin");
        };
        assert!((phase - expected_phase).abs() < 1e-5);
        assert_eq!(coin.pos.x, anchor.x);
        assert!((coin.pos.y - (anchor.y + phase.sin() * COIN_SPRING_DIST)).abs() < 1e-6);
    }

    #[test]
    fn test_player_does_not_move() {
        let grid = open_grid(5, 5);
        let mut player = Actor::player(Vec2::new(2.0, 2.0));
        player.speed = Vec2::new(1.0, 0.0);
        player.act(1.0, &grid);
        assert_eq!(player.pos, Vec2::new(2.0, 1.5));
    }

    fn arb_actor() -> impl Strategy<Value = Actor> {
        (-10.0f32..10.0, -10.0f32..10.0, 0.0f32..5.0, 0.0f32..5.0).prop_map(|(x, y, w, h)| {
            Actor::new(Vec2::new(x, y), Vec2::new(w, h), Vec2::ZERO)
        })
    }

    proptest! {
        #[test]
        fn prop_intersection_is_symmetric(p in arb_actor(), q in arb_actor()) {
            prop_assert_eq!(p.is_intersect(&q), q.is_intersect(&p));
        }

        #[test]
        fn prop_intersection_is_irreflexive(p in arb_actor()) {
            prop_assert!(!p.is_intersect(&p));
        }
    }
}
