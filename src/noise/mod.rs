//! Gradient noise for terrain synthesis.
//!
//! Seeded 2D/3D simplex noise with a permutation table shuffled from an
//! [`Alea`](crate::rng::Alea) stream, so every sample is reproducible from the
//! request seed.

mod simplex;

pub use simplex::SimplexNoise;
