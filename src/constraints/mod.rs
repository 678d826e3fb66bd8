mod constraint;
mod handler;

pub use self::constraint::{Constraint, ContainerConstraint, FloorConstraint, ScreenConstraint};
pub use self::handler::ConstraintHandler;
