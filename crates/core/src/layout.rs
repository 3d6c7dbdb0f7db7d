use glam::Vec3;
use pulselattice_common::{GridIndex, LatticeConfig};

/// Inter-sphere spacing for the contracted (rest) arrangement.
pub const REST_SPACING: f32 = 0.0;
/// Inter-sphere spacing for the expanded (active) arrangement.
pub const ACTIVE_SPACING: f32 = 1.0;

/// World coordinate of cell `n` along one axis of a centered lattice.
///
/// The lattice spans `(count - 1) * (size + spacing)` and is centered on the
/// origin, so cell 0 sits at `-half` and cell `count - 1` at `+half`.
/// A single-cell axis has no extent and is placed at the origin.
pub fn axis_position(n: u32, count: u32, spacing: f32, size: f32) -> f32 {
    if count <= 1 {
        return 0.0;
    }
    let half = (count - 1) as f32 * (size + spacing) / 2.0;
    let t = n as f32 / (count - 1) as f32;
    -half + 2.0 * half * t
}

/// World position of a lattice cell, applying `axis_position` per axis.
pub fn cell_position(index: GridIndex, config: &LatticeConfig) -> Vec3 {
    Vec3::new(
        axis_position(index.i, config.matrix_size, config.spacing, config.element_size),
        axis_position(index.j, config.matrix_size, config.spacing, config.element_size),
        axis_position(index.k, config.matrix_size, config.spacing, config.element_size),
    )
}

/// Rest-arrangement position for a cell (spacing 0).
pub fn rest_position(index: GridIndex, matrix_size: u32, element_size: f32) -> Vec3 {
    cell_position(
        index,
        &LatticeConfig {
            matrix_size,
            spacing: REST_SPACING,
            element_size,
        },
    )
}

/// Active-arrangement position for a cell (spacing 1).
pub fn active_position(index: GridIndex, matrix_size: u32, element_size: f32) -> Vec3 {
    cell_position(
        index,
        &LatticeConfig {
            matrix_size,
            spacing: ACTIVE_SPACING,
            element_size,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_symmetric() {
        for count in 2..=11 {
            let half = (count - 1) as f32 * (1.0 + 0.5) / 2.0;
            let lo = axis_position(0, count, 0.5, 1.0);
            let hi = axis_position(count - 1, count, 0.5, 1.0);
            assert!((lo + half).abs() < 1e-5, "count={count} lo={lo}");
            assert!((hi - half).abs() < 1e-5, "count={count} hi={hi}");
        }
    }

    #[test]
    fn single_cell_axis_is_at_origin() {
        assert_eq!(axis_position(0, 1, 0.0, 1.0), 0.0);
        assert_eq!(axis_position(0, 1, 1.0, 1.0), 0.0);
        assert!(axis_position(0, 1, 1.0, 1.0).is_finite());
    }

    #[test]
    fn middle_cell_of_odd_axis_is_centered() {
        assert!(axis_position(1, 3, 0.0, 1.0).abs() < 1e-6);
        assert!(axis_position(2, 5, 1.0, 1.0).abs() < 1e-6);
    }

    #[test]
    fn cells_are_evenly_spaced() {
        let step = 1.0 + 0.5;
        for n in 0..4 {
            let a = axis_position(n, 5, 0.5, 1.0);
            let b = axis_position(n + 1, 5, 0.5, 1.0);
            assert!((b - a - step).abs() < 1e-5);
        }
    }

    #[test]
    fn rest_and_active_agree_on_center_cell() {
        let center = GridIndex::new(1, 1, 1);
        let rest = rest_position(center, 3, 1.0);
        let active = active_position(center, 3, 1.0);
        assert!(rest.length() < 1e-6);
        assert!(active.length() < 1e-6);
    }

    #[test]
    fn active_arrangement_is_wider() {
        let corner = GridIndex::new(0, 0, 0);
        let rest = rest_position(corner, 3, 1.0);
        let active = active_position(corner, 3, 1.0);
        assert!(active.length() > rest.length());
    }

    #[test]
    fn single_cell_lattice_is_at_origin() {
        let only = GridIndex::new(0, 0, 0);
        assert_eq!(rest_position(only, 1, 1.0), Vec3::ZERO);
        assert_eq!(active_position(only, 1, 1.0), Vec3::ZERO);
    }
}
