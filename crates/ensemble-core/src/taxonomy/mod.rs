pub mod instrument;
pub mod vocals;

pub use instrument::Instrument;
pub use vocals::Vocals;
