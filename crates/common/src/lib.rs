//! Shared types for the pulse lattice scene.
//!
//! # Invariants
//! - A `GridIndex` component is always below the lattice size it was built for.
//! - `LatticeConfig` is validated at construction; downstream code never sees
//!   a zero-sized lattice.

pub mod types;

pub use types::{ConfigError, GridIndex, LatticeConfig, Rgb};
