//! Core domain model for ensemble.
//!
//! This crate defines the musician/band domain: the Musician role variants
//! and their taxonomy enums, the Band aggregate with its validation,
//! equality, and member cursor, the JSON wire codec, and the on-disk
//! roster store.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod codec;
pub mod dates;
pub mod error;
pub mod model;
pub mod store;
pub mod taxonomy;

pub use error::{EndOfIteration, Error, Result};
pub use model::{Band, IterationState, Musician, Performance, Role};
pub use taxonomy::{Instrument, Vocals};
