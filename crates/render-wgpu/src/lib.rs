//! wgpu render backend for the pulse lattice.
//!
//! Renders the composed scene as instanced UV spheres plus a lit ground
//! plane. Camera is an orbit model: drag to rotate around the lattice,
//! scroll to zoom.
//!
//! # Invariants
//! - The renderer never mutates the scene description.
//! - Camera state lives outside the composer; view changes never re-compose
//!   the scene.

mod camera;
mod gpu;
mod shaders;

pub use camera::OrbitCamera;
pub use gpu::WgpuRenderer;
