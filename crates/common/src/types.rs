use serde::{Deserialize, Serialize};

/// A 3D cell coordinate in the sphere lattice.
///
/// Each component lies in `[0, matrix_size)` for the lattice it belongs to.
/// Indices are assigned once per composition pass and discarded whenever the
/// lattice size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridIndex {
    pub i: u32,
    pub j: u32,
    pub k: u32,
}

impl GridIndex {
    pub fn new(i: u32, j: u32, k: u32) -> Self {
        Self { i, j, k }
    }
}

impl std::fmt::Display for GridIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

/// Errors from lattice configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("matrix size must be at least 1")]
    ZeroMatrixSize,
    #[error("spacing must be non-negative, got {0}")]
    NegativeSpacing(f32),
    #[error("element size must be positive, got {0}")]
    NonPositiveElementSize(f32),
}

/// Geometric configuration for one lattice layout pass.
///
/// Two configs with different `spacing` values describe the rest and active
/// arrangements a pulsing sphere interpolates between.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeConfig {
    pub matrix_size: u32,
    pub spacing: f32,
    pub element_size: f32,
}

impl LatticeConfig {
    /// Create a validated config.
    pub fn new(matrix_size: u32, spacing: f32, element_size: f32) -> Result<Self, ConfigError> {
        if matrix_size == 0 {
            return Err(ConfigError::ZeroMatrixSize);
        }
        if spacing < 0.0 {
            return Err(ConfigError::NegativeSpacing(spacing));
        }
        if element_size <= 0.0 {
            return Err(ConfigError::NonPositiveElementSize(element_size));
        }
        Ok(Self {
            matrix_size,
            spacing,
            element_size,
        })
    }

    /// Total number of cells in the lattice.
    pub fn cell_count(&self) -> usize {
        let n = self.matrix_size as usize;
        n * n * n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_index_ordering_is_canonical() {
        let a = GridIndex::new(0, 0, 1);
        let b = GridIndex::new(0, 1, 0);
        let c = GridIndex::new(1, 0, 0);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn config_rejects_zero_matrix() {
        assert!(LatticeConfig::new(0, 0.0, 1.0).is_err());
    }

    #[test]
    fn config_rejects_negative_spacing() {
        assert!(LatticeConfig::new(3, -0.5, 1.0).is_err());
    }

    #[test]
    fn config_rejects_zero_element_size() {
        assert!(LatticeConfig::new(3, 0.0, 0.0).is_err());
    }

    #[test]
    fn cell_count_is_cubed() {
        let cfg = LatticeConfig::new(3, 0.0, 1.0).unwrap();
        assert_eq!(cfg.cell_count(), 27);
        let cfg = LatticeConfig::new(5, 1.0, 1.0).unwrap();
        assert_eq!(cfg.cell_count(), 125);
    }
}
