//! Scene composition: turns live parameters into a renderable scene
//! description once per frame.
//!
//! # Invariants
//! - A sphere's color is assigned when its lattice is built and never
//!   regenerated on a per-frame basis.
//! - Rotation accumulates only while enabled and freezes (not resets) when
//!   disabled; the pulse resets to rest when disabled. The asymmetry is
//!   intentional.
//! - The composer never mutates parameters; the panel is the single writer.

pub mod composer;
pub mod params;
pub mod pick;

pub use composer::{GroundPlane, PointLight, SceneComposer, SceneDescription, SphereInstance};
pub use params::SceneParams;
pub use pick::{PickHit, Ray, pick_sphere};
