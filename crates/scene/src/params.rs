use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Slider range for the lattice size per axis.
pub const BOXES_RANGE: RangeInclusive<u32> = 1..=11;
/// Slider range for the number of point lights.
pub const LIGHTS_RANGE: RangeInclusive<u32> = 1..=10;
/// Slider range for the light intensity.
pub const LIGHT_INTENSITY_RANGE: RangeInclusive<u32> = 1..=100;
/// Slider range for the light ring radius.
pub const LIGHT_DISTANCE_RANGE: RangeInclusive<u32> = 1..=20;

/// Live-editable scene parameters.
///
/// Written by the parameter panel, read by the composer each frame. Values
/// are whole scalars, so the single-writer/single-reader pattern needs no
/// locking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneParams {
    /// Accumulate rotation on the lattice parent transform.
    pub rotate_cube: bool,
    /// Pulse spheres between their rest and active arrangements.
    pub pulse_spheres: bool,
    /// Lattice size per axis; the scene holds `boxes^3` spheres.
    pub boxes: u32,
    /// Number of point lights in the ring.
    pub lights: u32,
    /// Intensity of each point light.
    pub light_intensity: u32,
    /// Radius of the light ring.
    pub light_distance: u32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            rotate_cube: true,
            pulse_spheres: true,
            boxes: 3,
            lights: 4,
            light_intensity: 40,
            light_distance: 6,
        }
    }
}

impl SceneParams {
    /// Copy with every field clamped to its panel range.
    ///
    /// The panel already constrains its inputs; this guards the composer
    /// against values arriving from other callers (CLI flags, tests).
    pub fn clamped(self) -> Self {
        Self {
            rotate_cube: self.rotate_cube,
            pulse_spheres: self.pulse_spheres,
            boxes: self.boxes.clamp(*BOXES_RANGE.start(), *BOXES_RANGE.end()),
            lights: self
                .lights
                .clamp(*LIGHTS_RANGE.start(), *LIGHTS_RANGE.end()),
            light_intensity: self.light_intensity.clamp(
                *LIGHT_INTENSITY_RANGE.start(),
                *LIGHT_INTENSITY_RANGE.end(),
            ),
            light_distance: self.light_distance.clamp(
                *LIGHT_DISTANCE_RANGE.start(),
                *LIGHT_DISTANCE_RANGE.end(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_panel() {
        let p = SceneParams::default();
        assert!(p.rotate_cube);
        assert!(p.pulse_spheres);
        assert_eq!(p.boxes, 3);
        assert_eq!(p.lights, 4);
        assert_eq!(p.light_intensity, 40);
        assert_eq!(p.light_distance, 6);
    }

    #[test]
    fn clamp_pulls_values_into_range() {
        let p = SceneParams {
            boxes: 0,
            lights: 99,
            light_intensity: 0,
            light_distance: 1000,
            ..SceneParams::default()
        }
        .clamped();
        assert_eq!(p.boxes, 1);
        assert_eq!(p.lights, 10);
        assert_eq!(p.light_intensity, 1);
        assert_eq!(p.light_distance, 20);
    }

    #[test]
    fn clamp_leaves_in_range_values_alone() {
        let p = SceneParams::default();
        assert_eq!(p.clamped(), p);
    }
}
