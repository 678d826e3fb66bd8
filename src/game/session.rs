use crate::bodies::Body;
use crate::core::GameWorld;
use crate::game::{GameHost, Notice};
use crate::math::Vector2;

pub const WIN_MESSAGE: &str = "Congratulations! You won!";
pub const LOSS_MESSAGE: &str = "Game Over! You lost!";
pub const SAVE_SCORE_PROMPT: &str = "Game Over! Save your score!";

/// The drop-and-wait loop of one game mode.
///
/// The player aims the tracked pinned body, drops it, and after the click
/// delay the previewed body takes its place at the top.
pub struct GameSession {
    world: GameWorld,
    next_body: Body,
    input_enabled: bool,
    elapsed: f32,
    /// Last end line visibility reported to the host
    end_line_shown: bool,
}

impl GameSession {
    pub fn new(mut world: GameWorld) -> Self {
        let next_body = world.generate_next();
        Self {
            world,
            next_body,
            input_enabled: true,
            elapsed: 0.0,
            end_line_shown: false,
        }
    }

    /// Moves the tracked body horizontally while it is still pinned.
    ///
    /// `x` is clamped so the body stays inside the container.
    pub fn aim(&mut self, x: f32) {
        let Some(handle) = self.world.tracked() else {
            return;
        };
        let container = *self.world.scene().container();

        if let Some(body) = self.world.scene_mut().body_mut(handle) {
            if body.is_pinned() {
                let x = container.clamp_x(x, body.radius());
                let y = body.position().y;
                body.kinematics.teleport(Vector2::new(x, y));
            }
        }
    }

    /// Aims at `x` and releases the tracked body.
    ///
    /// Returns `false` when dropping is not possible right now.
    pub fn drop_body(&mut self, x: f32) -> bool {
        if !self.input_enabled || self.world.state().is_game_over() || self.world.state().is_paused() {
            return false;
        }

        let Some(handle) = self.world.tracked() else {
            return false;
        };
        let pinned = self.world.scene().body(handle).map_or(false, Body::is_pinned);
        if !pinned {
            return false;
        }

        self.aim(x);
        if let Some(body) = self.world.scene_mut().body_mut(handle) {
            body.set_pinned(false);
        }
        self.input_enabled = false;
        self.elapsed = 0.0;
        true
    }

    /// Advances the session by `dt` seconds.
    ///
    /// Events from the previous frame are discarded first, so after this call
    /// [`GameWorld::events`] holds exactly what this frame produced.
    pub fn update(&mut self, dt: f32, host: &mut dyn GameHost) {
        self.world.events_mut().clear();

        if self.world.state().is_paused() {
            return;
        }

        if !self.input_enabled {
            self.elapsed += dt;
            if self.elapsed >= self.world.config().click_delay && !self.world.state().is_game_over() {
                self.promote_next_body();
            }
        }

        self.world.update();
        self.dispatch_notices(host);

        self.world.state_mut().update();
        let visible = self.world.state().is_end_line_visible();
        if visible != self.end_line_shown {
            host.set_end_line_visible(visible);
            self.end_line_shown = visible;
        }
    }

    /// The preview becomes the pinned body at the top and a new preview is drawn
    fn promote_next_body(&mut self) {
        let next = std::mem::replace(&mut self.next_body, self.world.generate_next());
        let handle = self.world.add_body(next);
        self.world.set_tracked(Some(handle));
        self.input_enabled = true;
        self.elapsed = 0.0;
    }

    fn dispatch_notices(&mut self, host: &mut dyn GameHost) {
        for notice in self.world.state_mut().take_notices() {
            self.world.state_mut().pause_game();

            match notice {
                Notice::Won => host.show_message(WIN_MESSAGE),
                Notice::Lost { won_before: true } => {
                    if let Some(name) = host.request_player_name(SAVE_SCORE_PROMPT) {
                        let name = name.trim();
                        if !name.is_empty() {
                            host.persist_score(name, self.world.score().current());
                        }
                    }
                }
                Notice::Lost { won_before: false } => host.show_message(LOSS_MESSAGE),
            }

            self.world.state_mut().resume_game();

            if let Notice::Lost { .. } = notice {
                self.reset_game();
                break;
            }
        }
    }

    /// Starts a new round with input enabled and a fresh preview
    pub fn reset_game(&mut self) {
        self.world.reset_game();
        self.next_body = self.world.generate_next();
        self.input_enabled = true;
        self.elapsed = 0.0;
    }

    pub fn world(&self) -> &GameWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GameWorld {
        &mut self.world
    }

    /// The body that will be dropped after the current one
    pub fn next_body(&self) -> &Body {
        &self.next_body
    }

    #[inline]
    pub fn is_input_enabled(&self) -> bool {
        self.input_enabled
    }

    pub fn pause_game(&mut self) {
        self.world.state_mut().pause_game();
    }

    pub fn resume_game(&mut self) {
        self.world.state_mut().resume_game();
    }
}
