use glam::Vec3;

/// Oscillation phase for elapsed wall-clock seconds `t`.
///
/// `0.5 + 0.5 * sin(t)`: smooth, periodic with period `2π`, always in
/// `[0, 1]`, starting at `0.5` and rising.
pub fn phase(t: f32) -> f32 {
    0.5 + 0.5 * t.sin()
}

/// Current position of a pulsing sphere.
///
/// Enabled: interpolate rest → active by the current phase. Disabled: the
/// rest position exactly. Disabling resets rather than freezing, so no
/// partial interpolation survives a toggle.
pub fn pulsed_position(rest: Vec3, active: Vec3, t: f32, enabled: bool) -> Vec3 {
    if !enabled {
        return rest;
    }
    rest.lerp(active, phase(t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn phase_starts_at_half() {
        assert!((phase(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn phase_stays_in_unit_interval() {
        let mut t = -20.0;
        while t < 20.0 {
            let p = phase(t);
            assert!((0.0..=1.0).contains(&p), "phase({t}) = {p}");
            t += 0.0137;
        }
    }

    #[test]
    fn phase_peaks_at_quarter_period() {
        assert!((phase(PI / 2.0) - 1.0).abs() < 1e-6);
        assert!((phase(3.0 * PI / 2.0) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn phase_is_periodic() {
        for t in [0.0_f32, 0.7, 2.5, 5.9] {
            assert!((phase(t) - phase(t + TAU)).abs() < 1e-5);
        }
    }

    #[test]
    fn disabled_pulse_holds_rest_exactly() {
        let rest = Vec3::new(1.0, 2.0, 3.0);
        let active = Vec3::new(2.0, 4.0, 6.0);
        for t in [0.0_f32, 1.0, 4.2, 1000.0] {
            assert_eq!(pulsed_position(rest, active, t, false), rest);
        }
    }

    #[test]
    fn enabled_pulse_interpolates_between_endpoints() {
        let rest = Vec3::new(-1.0, 0.0, 0.0);
        let active = Vec3::new(1.0, 0.0, 0.0);
        // phase(0) = 0.5 → midpoint
        let mid = pulsed_position(rest, active, 0.0, true);
        assert!(mid.x.abs() < 1e-6);
        // phase(π/2) = 1 → active endpoint
        let peak = pulsed_position(rest, active, PI / 2.0, true);
        assert!((peak - active).length() < 1e-5);
    }
}
