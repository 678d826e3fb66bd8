use crate::arena::{Container, Floor};
use crate::bodies::{Body, RankTable};
use crate::collision::{CollisionManager, ResolveContext};
use crate::core::{
    ArenaConfig, BodyHandle, EventQueue, GameEvent, GameMode, Scene, Score, SimulationConfig,
};
use crate::error::GameError;
use crate::game::{GameStateHandler, RankUnlockFactory};
use crate::math::Vector2;
use crate::Result;

/// One mode's simulation: the scene and every piece of state that reacts to
/// its collisions
pub struct GameWorld {
    config: SimulationConfig,
    arena: ArenaConfig,
    mode: GameMode,
    table: RankTable,
    scene: Scene,
    factory: RankUnlockFactory,
    score: Score,
    state: GameStateHandler,
    collisions: CollisionManager,
    events: EventQueue,
    tracked: Option<BodyHandle>,
}

impl GameWorld {
    /// Builds the arena for `mode` and seeds the starting body.
    ///
    /// Fails if either configuration is invalid or, with floors, if the floor
    /// layout is malformed.
    pub fn new(config: SimulationConfig, arena: ArenaConfig, mode: GameMode) -> Result<Self> {
        Self::with_factory(config, arena, mode, RankUnlockFactory::new(mode))
    }

    /// Like [`GameWorld::new`], with a deterministic next-rank sequence
    pub fn with_seed(config: SimulationConfig, arena: ArenaConfig, mode: GameMode, seed: u64) -> Result<Self> {
        Self::with_factory(config, arena, mode, RankUnlockFactory::with_seed(mode, seed))
    }

    fn with_factory(
        config: SimulationConfig,
        arena: ArenaConfig,
        mode: GameMode,
        factory: RankUnlockFactory,
    ) -> Result<Self> {
        config.validate()?;
        arena.validate()?;

        let container = Container::new(mode, &arena);
        let scene = if mode.has_floors() {
            let floors = Floor::layout(
                arena.floor_count,
                &arena.ranks_per_floor,
                arena.floor_height,
                arena.top_margin,
            )?;
            Scene::with_floors(container, floors)
        } else {
            Scene::new(container)
        };

        let mut world = Self {
            state: GameStateHandler::new(mode, &config),
            collisions: CollisionManager::new(&config),
            config,
            arena,
            mode,
            table: RankTable::default(),
            scene,
            factory,
            score: Score::new(),
            events: EventQueue::new(),
            tracked: None,
        };
        world.seed_starting_body();

        log::info!("{:?} world ready with {} floors", mode, world.scene.floors().len());
        Ok(world)
    }

    /// Replaces the rank table and reseeds the round with it
    pub fn with_rank_table(mut self, table: RankTable) -> Result<Self> {
        table.validate()?;
        self.table = table;
        self.reset_game();
        Ok(self)
    }

    /// Places a pinned body of the starting rank at the top center and
    /// tracks it
    fn seed_starting_body(&mut self) {
        let position = Vector2::new(self.arena.display_width / 2.0, 0.0);
        let body = Body::new_pinned(self.mode.starting_rank(), position, &self.table);
        let handle = self.add_body(body);
        self.tracked = Some(handle);
    }

    /// Adds a body to the scene
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = self.scene.add_body(body);
        self.events.push(GameEvent::BodyAdded(handle));
        handle
    }

    /// Removes a body from the scene
    pub fn remove_body(&mut self, handle: BodyHandle) -> Result<Body> {
        let body = self.scene.remove_body(handle).ok_or_else(|| {
            GameError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })?;
        self.events.push(GameEvent::BodyRemoved(handle));
        if self.tracked == Some(handle) {
            self.tracked = None;
        }
        Ok(body)
    }

    pub fn body(&self, handle: BodyHandle) -> Result<&Body> {
        self.scene.bodies().get_body(handle)
    }

    pub fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut Body> {
        self.scene.bodies_mut().get_body_mut(handle)
    }

    /// Draws the next body to drop; it is not added to the scene
    pub fn generate_next(&mut self) -> Body {
        self.factory.generate_next(self.arena.display_width, &self.table)
    }

    /// Integrates every free body once. Does nothing while paused.
    pub fn step(&mut self) {
        if self.state.is_paused() {
            return;
        }
        self.scene.update(&self.config.verlet);
    }

    /// Runs the constraint and collision loop
    pub fn run_collisions(&mut self, iterations: u32) {
        let Self {
            scene,
            factory,
            score,
            state,
            events,
            tracked,
            table,
            mode,
            collisions,
            ..
        } = self;

        let mut ctx = ResolveContext {
            scene,
            factory,
            score,
            state,
            events,
            tracked,
            table,
            mode: *mode,
        };

        collisions.run_collisions(iterations, &mut ctx);
    }

    /// Integrates and collides with the configured iteration count.
    ///
    /// Events pile up in [`GameWorld::events`] until the host drains them;
    /// [`GameSession`](crate::game::GameSession) does so every frame.
    pub fn update(&mut self) {
        if self.state.is_paused() {
            return;
        }
        self.step();
        self.run_collisions(self.config.collision_iterations);
    }

    /// Starts a new round: clears the scene, zeroes the score, relocks ranks
    /// and seeds one pinned starting body
    pub fn reset_game(&mut self) {
        log::info!("resetting {:?} round at score {}", self.mode, self.score.current());

        self.scene.clear_bodies();
        self.score.reset();
        self.factory.reset_for_mode();
        self.state.reset();
        self.events.push(GameEvent::Reset);
        self.seed_starting_body();
    }

    #[inline]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn arena(&self) -> &ArenaConfig {
        &self.arena
    }

    pub fn rank_table(&self) -> &RankTable {
        &self.table
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn score_mut(&mut self) -> &mut Score {
        &mut self.score
    }

    pub fn state(&self) -> &GameStateHandler {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameStateHandler {
        &mut self.state
    }

    pub fn factory(&self) -> &RankUnlockFactory {
        &self.factory
    }

    pub fn factory_mut(&mut self) -> &mut RankUnlockFactory {
        &mut self.factory
    }

    pub fn collisions(&mut self) -> &mut CollisionManager {
        &mut self.collisions
    }

    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// The body the player is positioning, if any
    #[inline]
    pub fn tracked(&self) -> Option<BodyHandle> {
        self.tracked
    }

    pub fn set_tracked(&mut self, handle: Option<BodyHandle>) {
        self.tracked = handle;
    }
}
