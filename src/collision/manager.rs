use crate::bodies::Body;
use crate::collision::broad_phase::{BroadPhase, BruteForceBroadPhase};
use crate::collision::collision_pair::CollisionPair;
use crate::collision::narrow_phase::{CircleNarrowPhase, NarrowPhase};
use crate::collision::resolver::{CollisionResolver, ResolveContext};
use crate::constraints::ConstraintHandler;
use crate::core::{BodyStorage, SimulationConfig};

/// Runs the per-frame constraint and collision loop
pub struct CollisionManager {
    broad_phase: Box<dyn BroadPhase>,
    narrow_phase: Box<dyn NarrowPhase>,
    resolver: CollisionResolver,
    constraints: ConstraintHandler,
    max_merge_passes: u32,
}

impl CollisionManager {
    /// Creates a manager with brute-force AABB and exact circle detection
    pub fn new(config: &SimulationConfig) -> Self {
        Self::with_phases(
            config,
            Box::new(BruteForceBroadPhase::new()),
            Box::new(CircleNarrowPhase::new()),
        )
    }

    /// Creates a manager with custom detection phases
    pub fn with_phases(
        config: &SimulationConfig,
        broad_phase: Box<dyn BroadPhase>,
        narrow_phase: Box<dyn NarrowPhase>,
    ) -> Self {
        Self {
            broad_phase,
            narrow_phase,
            resolver: CollisionResolver::new(config),
            constraints: ConstraintHandler::new(config.floor_gate_height),
            max_merge_passes: config.max_merge_passes,
        }
    }

    /// Broad then narrow phase over the current positions
    pub fn check_collisions(&mut self, bodies: &BodyStorage<Body>) -> Vec<CollisionPair> {
        self.broad_phase.update(bodies);
        let candidates = self.broad_phase.get_collision_pairs();
        self.narrow_phase.detect_collisions(&candidates, bodies)
    }

    /// Runs `iterations` rounds of constraints followed by detection and
    /// resolution.
    ///
    /// Whenever a round merges bodies, detection and resolution run again
    /// without constraints until a pass merges nothing, at most
    /// `max_merge_passes` extra times.
    pub fn run_collisions(&mut self, iterations: u32, ctx: &mut ResolveContext) {
        for _ in 0..iterations {
            self.constraints.apply_all(ctx.scene);

            let mut merges = self.run_pass(ctx);
            let mut passes = 0;

            while merges > 0 {
                if passes >= self.max_merge_passes {
                    log::warn!("merge cascade still running after {} passes, deferring to the next round", passes);
                    break;
                }
                merges = self.run_pass(ctx);
                passes += 1;
            }

            if passes > 0 {
                log::debug!("merge cascade settled after {} extra passes", passes);
            }
        }
    }

    fn run_pass(&mut self, ctx: &mut ResolveContext) -> usize {
        let pairs = self.check_collisions(ctx.scene.bodies());
        self.resolver.resolve(&pairs, ctx)
    }

    #[inline]
    pub fn constraints(&self) -> &ConstraintHandler {
        &self.constraints
    }

    #[inline]
    pub fn resolver(&self) -> &CollisionResolver {
        &self.resolver
    }
}
