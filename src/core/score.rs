#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Running score of the current round.
///
/// `has_changed` is a single-consumer flag: whoever mirrors the score into
/// the UI clears it with [`Score::take_changed`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Score {
    current: u32,
    changed: bool,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds points
    pub fn increase(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount);
        self.changed = true;
    }

    /// Back to zero for a new round
    pub fn reset(&mut self) {
        self.current = 0;
        self.changed = true;
    }

    #[inline]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[inline]
    pub fn has_changed(&self) -> bool {
        self.changed
    }

    /// Returns whether the score changed since the last call and clears the flag
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}
