use bitflags::bitflags;

use crate::arena::Container;
use crate::bodies::{Body, RankId};
use crate::core::{GameMode, SimulationConfig};

bitflags! {
    /// Latches and toggles of a round
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StateFlags: u8 {
        /// A loss was detected; stays set until the round is reset
        const OVER_TRIGGERED = 1 << 0;

        /// The terminal rank was produced this round
        const WON_TRIGGERED = 1 << 1;

        /// Some body came near the end line during the current frame
        const NEAR_END_LINE = 1 << 2;

        /// The end line indicator is showing
        const END_LINE_VISIBLE = 1 << 3;

        /// The simulation is suspended, usually behind a dialog
        const PAUSED = 1 << 4;
    }
}

/// Something the host has to tell the player about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The terminal rank was produced for the first time this round
    Won,

    /// The round was lost; a won round asks for the player's name
    Lost { won_before: bool },
}

/// Watches bodies for the win and loss conditions of a round.
///
/// Both conditions latch: a loss is reported once until [`reset`], a win once
/// per round. Reports are queued as [`Notice`]s and taken by the session
/// after the collision pass, so dialogs never open mid-resolution.
///
/// [`reset`]: GameStateHandler::reset
#[derive(Debug, Clone)]
pub struct GameStateHandler {
    flags: StateFlags,
    terminal_rank: RankId,
    loss_tolerance: f32,
    end_line_threshold: f32,
    notices: Vec<Notice>,
}

impl GameStateHandler {
    pub fn new(mode: GameMode, config: &SimulationConfig) -> Self {
        Self {
            flags: StateFlags::empty(),
            terminal_rank: mode.terminal_rank(),
            loss_tolerance: config.loss_tolerance,
            end_line_threshold: config.end_line_threshold,
            notices: Vec::new(),
        }
    }

    /// Checks a body against the end line and the loss boundary.
    ///
    /// Returns `true` only on the check that triggers the loss.
    pub fn check_game_end_conditions(&mut self, body: &Body, container: &Container) -> bool {
        let top = container.top();
        let y = body.position().y;

        if y < top + self.end_line_threshold + body.radius() {
            self.flags.insert(StateFlags::NEAR_END_LINE);
        }

        if self.flags.contains(StateFlags::OVER_TRIGGERED) {
            return false;
        }

        if body.has_collided() && y < top + body.radius() - self.loss_tolerance {
            self.flags.insert(StateFlags::OVER_TRIGGERED);
            let won_before = self.flags.contains(StateFlags::WON_TRIGGERED);
            self.notices.push(Notice::Lost { won_before });
            log::info!("game lost (won before: {})", won_before);
            return true;
        }

        false
    }

    /// Latches the win when `rank` is the terminal rank.
    ///
    /// Returns `true` the first time only.
    pub fn check_win_condition(&mut self, rank: RankId) -> bool {
        if rank != self.terminal_rank || self.flags.contains(StateFlags::WON_TRIGGERED) {
            return false;
        }

        self.flags.insert(StateFlags::WON_TRIGGERED);
        self.notices.push(Notice::Won);
        log::info!("game won by producing {}", rank);
        true
    }

    /// End-of-frame bookkeeping: the end line shows iff a body came near it
    /// during the frame
    pub fn update(&mut self) {
        let near = self.flags.contains(StateFlags::NEAR_END_LINE);
        self.flags.set(StateFlags::END_LINE_VISIBLE, near);
        self.flags.remove(StateFlags::NEAR_END_LINE);
    }

    /// Takes the notices raised since the last call
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Clears every latch for a new round
    pub fn reset(&mut self) {
        self.flags = StateFlags::empty();
        self.notices.clear();
    }

    pub fn pause_game(&mut self) {
        self.flags.insert(StateFlags::PAUSED);
    }

    pub fn resume_game(&mut self) {
        self.flags.remove(StateFlags::PAUSED);
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.flags.contains(StateFlags::PAUSED)
    }

    /// Whether the round is lost and waiting to be reset
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.flags.contains(StateFlags::OVER_TRIGGERED)
    }

    #[inline]
    pub fn is_game_won(&self) -> bool {
        self.flags.contains(StateFlags::WON_TRIGGERED)
    }

    #[inline]
    pub fn is_end_line_visible(&self) -> bool {
        self.flags.contains(StateFlags::END_LINE_VISIBLE)
    }

    #[inline]
    pub fn flags(&self) -> StateFlags {
        self.flags
    }
}
