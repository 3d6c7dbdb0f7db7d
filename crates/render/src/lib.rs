//! Renderer-agnostic scene interface.
//!
//! # Invariants
//! - A renderer never mutates the scene description; scene truth is
//!   composer-owned.
//! - Render output derives only from the description and the view.
//!
//! The text renderer keeps the CLI and tests off the GPU path; the trait is
//! stable, so the wgpu backend can be swapped in without changing consumers.

mod renderer;

pub use renderer::{RenderView, Renderer, TextRenderer};

pub fn crate_info() -> &'static str {
    "pulselattice-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
