use crate::params::SceneParams;
use glam::{EulerRot, Mat4, Vec3};
use pulselattice_common::{GridIndex, Rgb};
use pulselattice_core::{active_position, pulsed_position, rest_position};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::TAU;

/// Render radius of every lattice sphere.
pub const SPHERE_RADIUS: f32 = 0.5;
/// Axis length of one lattice element used for layout spacing.
pub const ELEMENT_SIZE: f32 = 1.0;
/// Height of the light ring above the lattice.
pub const LIGHT_HEIGHT: f32 = 10.0;
/// Height of the ground plane below the lattice.
pub const GROUND_HEIGHT: f32 = -10.0;
/// Half extent of the 100x100 ground plane.
pub const GROUND_HALF_EXTENT: f32 = 50.0;

/// Per-axis rotation rates for the lattice parent transform, in radians per
/// second of frame delta: x slowest, z medium, y fastest.
pub const ROTATION_RATES: Vec3 = Vec3::new(1.0 / 5.0, 1.0 / 2.0, 1.0 / 3.0);

/// One sphere of the lattice, ready to draw.
///
/// `position` is the world-space center with pulse interpolation and the
/// parent rotation already applied. `color` was fixed when the lattice was
/// built and stays constant across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereInstance {
    pub index: GridIndex,
    pub color: Rgb,
    pub position: Vec3,
    pub radius: f32,
}

/// A shadow-casting white point light on the ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub intensity: f32,
}

/// The static receiver surface beneath the lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub center: Vec3,
    pub half_extent: f32,
}

/// A complete scene for one frame, rebuilt from parameters every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDescription {
    pub spheres: Vec<SphereInstance>,
    pub lights: Vec<PointLight>,
    pub ground: GroundPlane,
    /// Accumulated parent Euler angles (XYZ), for diagnostics.
    pub rotation: Vec3,
}

/// Builds the scene description each frame from the current parameters.
///
/// Holds the only mutable state in the pipeline: the color palette for the
/// current lattice size, the RNG that feeds it, and the accumulated parent
/// rotation. Everything else is derived per call.
pub struct SceneComposer {
    rng: SmallRng,
    palette: Vec<Rgb>,
    palette_size: u32,
    rotation: Vec3,
}

impl SceneComposer {
    /// Create a composer whose color assignment is reproducible for `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            palette: Vec::new(),
            palette_size: 0,
            rotation: Vec3::ZERO,
        }
    }

    /// Accumulated parent rotation in radians (XYZ Euler angles).
    pub fn rotation(&self) -> Vec3 {
        self.rotation
    }

    /// Compose one frame.
    ///
    /// `elapsed_secs` is wall-clock time since scene start (drives the pulse
    /// phase); `dt` is the frame delta (drives rotation accumulation).
    pub fn advance(
        &mut self,
        params: SceneParams,
        elapsed_secs: f32,
        dt: f32,
    ) -> SceneDescription {
        let params = params.clamped();

        self.refresh_palette(params.boxes);

        if params.rotate_cube {
            self.rotation += ROTATION_RATES * dt;
        }
        let parent = Mat4::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );

        let n = params.boxes;
        let mut spheres = Vec::with_capacity((n * n * n) as usize);
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    let index = GridIndex::new(i, j, k);
                    let rest = rest_position(index, n, ELEMENT_SIZE);
                    let active = active_position(index, n, ELEMENT_SIZE);
                    let local =
                        pulsed_position(rest, active, elapsed_secs, params.pulse_spheres);
                    let slot = ((i * n + j) * n + k) as usize;
                    spheres.push(SphereInstance {
                        index,
                        color: self.palette[slot],
                        position: parent.transform_point3(local),
                        radius: SPHERE_RADIUS,
                    });
                }
            }
        }

        SceneDescription {
            spheres,
            lights: light_ring(params.lights, params.light_distance as f32)
                .map(|position| PointLight {
                    position,
                    intensity: params.light_intensity as f32,
                })
                .collect(),
            ground: GroundPlane {
                center: Vec3::new(0.0, GROUND_HEIGHT, 0.0),
                half_extent: GROUND_HALF_EXTENT,
            },
            rotation: self.rotation,
        }
    }

    /// Regenerate the palette when the lattice size changes. The old spheres
    /// are discarded wholesale; within one size, colors are stable.
    fn refresh_palette(&mut self, boxes: u32) {
        if self.palette_size == boxes {
            return;
        }
        let count = (boxes * boxes * boxes) as usize;
        self.palette = (0..count)
            .map(|_| {
                Rgb::new(
                    self.rng.r#gen::<f32>(),
                    self.rng.r#gen::<f32>(),
                    self.rng.r#gen::<f32>(),
                )
            })
            .collect();
        self.palette_size = boxes;
        tracing::debug!("lattice rebuilt: {} spheres", count);
    }
}

/// Positions of `count` lights evenly spaced on a circle of radius
/// `distance` at the ring height. Light `m` (1-based) sits at angle
/// `2π·m / count`.
pub fn light_ring(count: u32, distance: f32) -> impl Iterator<Item = Vec3> {
    (1..=count).map(move |m| {
        let angle = TAU * m as f32 / count as f32;
        Vec3::new(
            angle.sin() * distance,
            LIGHT_HEIGHT,
            angle.cos() * distance,
        )
    })
}
