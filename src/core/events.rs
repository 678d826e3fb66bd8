use crate::bodies::RankId;
use crate::core::BodyHandle;
use std::collections::VecDeque;

/// Something the simulation did during a frame that the host may react to
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A body entered the scene
    BodyAdded(BodyHandle),

    /// A body left the scene
    BodyRemoved(BodyHandle),

    /// Two bodies of the same rank were consumed
    Merged {
        /// The consumed bodies
        consumed: [BodyHandle; 2],

        /// Rank of the consumed bodies
        rank: RankId,

        /// The body produced by the merge, if the progression continued
        result: Option<BodyHandle>,
    },

    /// A rank became droppable for the first time this round
    RankUnlocked(RankId),

    /// Points were added to the score
    Scored(u32),

    /// The terminal rank was produced
    Won,

    /// A collided body crossed the top boundary
    Lost,

    /// The round was reset
    Reset,
}

/// Events kept by default before the oldest ones are dropped
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;

/// A bounded queue of game events.
///
/// The host is expected to drain it once per frame. A queue nobody drains
/// keeps only the newest `capacity` events.
#[derive(Debug)]
pub struct EventQueue {
    events: VecDeque<GameEvent>,
    capacity: usize,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Creates a queue holding at most `capacity` events
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(DEFAULT_EVENT_CAPACITY)),
            capacity: capacity.max(1),
        }
    }

    /// Adds an event, dropping the oldest one when full
    pub fn push(&mut self, event: GameEvent) {
        if self.events.len() == self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Takes every queued event in order
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Iterates over queued events without consuming them
    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    /// Returns the number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Gets all merge events involving a specific body
    pub fn merges_involving(&self, body: BodyHandle) -> Vec<&GameEvent> {
        self.events
            .iter()
            .filter(|e| match e {
                GameEvent::Merged { consumed, result, .. } => {
                    consumed.contains(&body) || *result == Some(body)
                }
                _ => false,
            })
            .collect()
    }
}
