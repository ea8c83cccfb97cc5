//! Seeded pseudo-random number generation.
//!
//! Uses the Alea generator so that a textual seed reproduces the exact same
//! float sequence on every platform.

mod alea;

pub use alea::Alea;
