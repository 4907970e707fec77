pub mod band;
pub mod musician;
pub mod performance;

pub use band::{Band, IterationState};
pub use musician::{Musician, Role};
pub use performance::Performance;
