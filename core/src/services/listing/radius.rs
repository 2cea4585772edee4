//! Slider-to-radius mapping for the search UI.
//!
//! The slider runs from 0.0 to 1.0. The lower half maps linearly from
//! 1 km to 25 km so city-scale searches get fine control; the upper half
//! widens quadratically out to 300 km. The inverse mapping is exact so a
//! stored radius reopens the slider at the same position.

/// Smallest selectable radius in kilometers
pub const MIN_RADIUS_KM: f64 = 1.0;

/// Radius at the curve knee, end of the linear segment
pub const KNEE_RADIUS_KM: f64 = 25.0;

/// Largest selectable radius in kilometers
pub const MAX_RADIUS_KM: f64 = 300.0;

/// Slider position of the curve knee
const KNEE_POSITION: f64 = 0.5;

/// Map a slider position to a radius in kilometers
pub fn radius_for_slider(position: f64) -> f64 {
    let t = position.clamp(0.0, 1.0);
    if t <= KNEE_POSITION {
        MIN_RADIUS_KM + 48.0 * t
    } else {
        let u = (t - KNEE_POSITION) / KNEE_POSITION;
        KNEE_RADIUS_KM + (MAX_RADIUS_KM - KNEE_RADIUS_KM) * u * u
    }
}

/// Map a radius in kilometers back to its slider position
pub fn slider_for_radius(radius_km: f64) -> f64 {
    let r = radius_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM);
    if r <= KNEE_RADIUS_KM {
        (r - MIN_RADIUS_KM) / 48.0
    } else {
        let u = ((r - KNEE_RADIUS_KM) / (MAX_RADIUS_KM - KNEE_RADIUS_KM)).sqrt();
        KNEE_POSITION + u * KNEE_POSITION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_endpoints() {
        assert!((radius_for_slider(0.0) - 1.0).abs() < 1e-12);
        assert!((radius_for_slider(0.5) - 25.0).abs() < 1e-12);
        assert!((radius_for_slider(1.0) - 300.0).abs() < 1e-12);
    }

    #[test]
    fn test_curve_is_monotonic() {
        let mut previous = radius_for_slider(0.0);
        for step in 1..=1000 {
            let radius = radius_for_slider(step as f64 / 1000.0);
            assert!(radius >= previous);
            previous = radius;
        }
    }

    #[test]
    fn test_round_trip_identity() {
        for step in 0..=1000 {
            let t = step as f64 / 1000.0;
            let round_tripped = slider_for_radius(radius_for_slider(t));
            assert!(
                (round_tripped - t).abs() < 1e-9,
                "round trip drifted at t={}: {}",
                t,
                round_tripped
            );
        }
    }

    #[test]
    fn test_radius_round_trip() {
        for radius in [1.0, 5.0, 24.9, 25.0, 25.1, 80.0, 299.0, 300.0] {
            let round_tripped = radius_for_slider(slider_for_radius(radius));
            assert!((round_tripped - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn test_out_of_range_inputs_clamp() {
        assert_eq!(radius_for_slider(-0.3), radius_for_slider(0.0));
        assert_eq!(radius_for_slider(1.7), radius_for_slider(1.0));
        assert_eq!(slider_for_radius(0.2), 0.0);
        assert_eq!(slider_for_radius(400.0), 1.0);
    }
}
