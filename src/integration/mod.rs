mod verlet;

pub use self::verlet::{integrate, VerletParams, VerletState};
