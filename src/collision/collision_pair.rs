use crate::core::BodyHandle;

/// Two bodies whose circles may touch.
///
/// The older handle always comes first, so a pair reads in scene order and
/// `(a, b)` equals `(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    pub body_a: BodyHandle,
    pub body_b: BodyHandle,
}

impl CollisionPair {
    pub fn new(first: BodyHandle, second: BodyHandle) -> Self {
        let (body_a, body_b) = if first <= second { (first, second) } else { (second, first) };
        Self { body_a, body_b }
    }

    /// Whether `body` is one of the two
    pub fn contains(&self, body: BodyHandle) -> bool {
        self.body_a == body || self.body_b == body
    }

    /// The partner of `body`, if it belongs to the pair
    pub fn other(&self, body: BodyHandle) -> Option<BodyHandle> {
        match body {
            b if b == self.body_a => Some(self.body_b),
            b if b == self.body_b => Some(self.body_a),
            _ => None,
        }
    }
}
