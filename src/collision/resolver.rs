use crate::bodies::{Body, RankId, RankTable};
use crate::collision::collision_pair::CollisionPair;
use crate::core::{BodyHandle, EventQueue, GameEvent, GameMode, Scene, Score, SimulationConfig};
use crate::game::{GameStateHandler, RankUnlockFactory};
use crate::math::{self, Vector2};

/// Normal used when two centers coincide
#[inline]
fn fallback_normal() -> Vector2 {
    Vector2::new(0.0, -1.0)
}

/// Everything a resolution pass may touch, borrowed from the world for the
/// duration of the pass
pub struct ResolveContext<'a> {
    pub scene: &'a mut Scene,
    pub factory: &'a mut RankUnlockFactory,
    pub score: &'a mut Score,
    pub state: &'a mut GameStateHandler,
    pub events: &'a mut EventQueue,

    /// Body the player is positioning, redirected when it is merged away
    pub tracked: &'a mut Option<BodyHandle>,

    pub table: &'a RankTable,
    pub mode: GameMode,
}

/// Turns confirmed contacts into merges or physical responses
#[derive(Debug, Clone)]
pub struct CollisionResolver {
    overlap_correction_factor: f32,
    bounce_velocity_threshold: f32,
    bounce_impulse: f32,
    largest_body_bonus: u32,
}

impl CollisionResolver {
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            overlap_correction_factor: config.overlap_correction_factor,
            bounce_velocity_threshold: config.bounce_velocity_threshold,
            bounce_impulse: config.bounce_impulse,
            largest_body_bonus: config.largest_body_bonus,
        }
    }

    /// Resolves pairs in order and returns how many merges happened.
    ///
    /// Pairs referring to a body consumed earlier in the pass are skipped.
    pub fn resolve(&self, pairs: &[CollisionPair], ctx: &mut ResolveContext) -> usize {
        let mut merges = 0;

        for pair in pairs {
            let (rank_a, rank_b) = match (ctx.scene.body(pair.body_a), ctx.scene.body(pair.body_b)) {
                (Some(a), Some(b)) => (a.rank(), b.rank()),
                _ => continue,
            };

            if rank_a == rank_b {
                self.merge(pair, rank_a, ctx);
                merges += 1;
            } else {
                self.respond(pair, ctx);
            }
        }

        merges
    }

    /// Overlap correction and bounce for bodies of different ranks
    fn respond(&self, pair: &CollisionPair, ctx: &mut ResolveContext) {
        let (bodies, container, _) = ctx.scene.split_mut();
        let Some((a, b)) = bodies.get_pair_mut(pair.body_a, pair.body_b) else {
            return;
        };

        correct_overlap(a, b, self.overlap_correction_factor);
        simulate_bounce(a, b, self.bounce_velocity_threshold, self.bounce_impulse);

        for body in [&*a, &*b] {
            if ctx.state.check_game_end_conditions(body, container) {
                ctx.events.push(GameEvent::Lost);
            }
        }
    }

    fn merge(&self, pair: &CollisionPair, rank: RankId, ctx: &mut ResolveContext) {
        let (Some(a), Some(b)) = (ctx.scene.remove_body(pair.body_a), ctx.scene.remove_body(pair.body_b)) else {
            return;
        };
        ctx.events.push(GameEvent::BodyRemoved(pair.body_a));
        ctx.events.push(GameEvent::BodyRemoved(pair.body_b));

        let consumed = [pair.body_a, pair.body_b];
        let tracked_consumed = (*ctx.tracked).map_or(false, |handle| pair.contains(handle));

        let Some(result_rank) = ctx.mode.merge_result(rank) else {
            // End of the progression: both bodies vanish
            if ctx.mode == GameMode::Ascending {
                self.award(ctx, self.largest_body_bonus);
            }
            if tracked_consumed {
                *ctx.tracked = None;
            }
            log::debug!("merged two {} at the end of the progression", rank);
            ctx.events.push(GameEvent::Merged { consumed, rank, result: None });
            return;
        };

        if ctx.factory.unlock_rank(result_rank) {
            ctx.events.push(GameEvent::RankUnlocked(result_rank));
        }

        let position = math::midpoint(&a.position(), &b.position());
        let merged = Body::new(result_rank, position, ctx.table);
        let points = merged.score();
        let handle = ctx.scene.add_body(merged);
        ctx.events.push(GameEvent::BodyAdded(handle));

        if ctx.mode == GameMode::Ascending {
            self.award(ctx, points);
        }

        if tracked_consumed {
            *ctx.tracked = Some(handle);
        }

        log::debug!("merged two {} into {}", rank, result_rank);
        ctx.events.push(GameEvent::Merged { consumed, rank, result: Some(handle) });

        if ctx.state.check_win_condition(result_rank) {
            ctx.events.push(GameEvent::Won);
        }

        let (bodies, container, _) = ctx.scene.split_mut();
        if let Some(body) = bodies.get(handle) {
            if ctx.state.check_game_end_conditions(body, container) {
                ctx.events.push(GameEvent::Lost);
            }
        }
    }

    fn award(&self, ctx: &mut ResolveContext, points: u32) {
        ctx.score.increase(points);
        ctx.events.push(GameEvent::Scored(points));
    }
}

/// Pushes two overlapping bodies apart along the line between their centers.
///
/// The separation is `overlap * factor`, shared inversely to mass: `a` moves
/// by `mass_b / total` of it and `b` by `mass_a / total`.
pub fn correct_overlap(a: &mut Body, b: &mut Body, factor: f32) {
    let delta = a.position() - b.position();
    let distance = delta.norm();
    let overlap = a.radius() + b.radius() - distance;
    let normal = math::direction_or(&a.position(), &b.position(), fallback_normal());

    let total_mass = a.mass() + b.mass();
    let correction = normal * overlap * factor;

    // Massless pairs split the correction evenly
    let (share_a, share_b) = if math::approx_zero(total_mass) {
        (0.5, 0.5)
    } else {
        (b.mass() / total_mass, a.mass() / total_mass)
    };

    a.kinematics.position += correction * share_a;
    b.kinematics.position -= correction * share_b;
}

/// Nudges two bodies apart when they approach each other fast enough.
///
/// Uses the lagged Verlet velocities. Returns whether a bounce happened;
/// bouncing marks both bodies as collided.
pub fn simulate_bounce(a: &mut Body, b: &mut Body, threshold: f32, impulse: f32) -> bool {
    let normal = math::direction_or(&a.position(), &b.position(), fallback_normal());
    let relative_velocity = a.velocity() - b.velocity();
    let along_normal = relative_velocity.dot(&normal);

    if along_normal.abs() < threshold {
        return false;
    }

    a.kinematics.position += normal * impulse;
    b.kinematics.position -= normal * impulse;
    a.mark_collided();
    b.mark_collided();
    true
}
