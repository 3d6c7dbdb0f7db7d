//! Lattice layout and pulse animation math.
//!
//! # Invariants
//! - Layout is a pure function of `(index, config)`; no hidden state.
//! - The pulse phase is derived from the shared wall clock only, so every
//!   sphere computes the same phase for the same instant without sharing
//!   mutable state.
//! - A disabled pulse yields the rest position exactly, never a stale
//!   interpolation.

pub mod layout;
pub mod pulse;

pub use layout::{
    ACTIVE_SPACING, REST_SPACING, active_position, axis_position, cell_position, rest_position,
};
pub use pulse::{phase, pulsed_position};
