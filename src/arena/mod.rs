//! Static boundaries of the play area

mod container;
mod floor;

pub use self::container::Container;
pub use self::floor::{Floor, MAX_FLOORS, MIN_FLOORS, NO_GATE};
