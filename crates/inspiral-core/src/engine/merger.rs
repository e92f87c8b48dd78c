use crate::core::models::black_hole::BlackHole;
use crate::core::physics::remnant::{self, QnmParams, RemnantProperties};

/// Relative speed above which the post-Newtonian expansion is no longer
/// trustworthy and the binary is treated as merging, in units of c. Kept
/// loose so the late plunge is not cut off prematurely.
pub const PLUNGE_SPEED_CEILING: f64 = 2.0;

/// Decides whether the binary has reached the merger threshold.
///
/// The binary merges once the separation falls to `critical_factor` times
/// the mean Schwarzschild radius of the pair, or once the relative speed
/// exceeds [`PLUNGE_SPEED_CEILING`].
pub fn should_merge(bh1: &BlackHole, bh2: &BlackHole, critical_factor: f64) -> bool {
    let separation = (bh1.position - bh2.position).norm();
    let r_critical =
        critical_factor * (bh1.schwarzschild_radius() + bh2.schwarzschild_radius()) / 2.0;

    let speed = (bh1.velocity - bh2.velocity).norm();

    separation <= r_critical || speed > PLUNGE_SPEED_CEILING
}

/// Collapses the binary into its remnant and the quasinormal mode that
/// rings it down.
///
/// `source_amplitude` is the distance-independent strain amplitude at
/// merger (the observed strain scaled back by the observer distance), which
/// anchors the ringdown so the waveform stays continuous across the
/// transition.
pub fn merger_event(
    bh1: &BlackHole,
    bh2: &BlackHole,
    source_amplitude: f64,
) -> (RemnantProperties, QnmParams) {
    let remnant = remnant::remnant_from_binary(bh1, bh2);
    let qnm = remnant::qnm_fundamental(remnant.mass, remnant.spin, source_amplitude);
    (remnant, qnm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;

    const DEFAULT_CRITICAL_FACTOR: f64 = 3.0;

    fn binary_at_rest(separation: f64) -> (BlackHole, BlackHole) {
        let mut bh1 = BlackHole::new(0.5, 0.0);
        bh1.position = Vector3::new(separation / 2.0, 0.0, 0.0);
        let mut bh2 = BlackHole::new(0.5, 0.0);
        bh2.position = Vector3::new(-separation / 2.0, 0.0, 0.0);
        (bh1, bh2)
    }

    #[test]
    fn widely_separated_binary_does_not_merge() {
        let (bh1, bh2) = binary_at_rest(20.0);
        assert!(!should_merge(&bh1, &bh2, DEFAULT_CRITICAL_FACTOR));
    }

    #[test]
    fn binary_at_the_critical_separation_merges() {
        // For equal masses the threshold sits at critical_factor * M.
        let (bh1, bh2) = binary_at_rest(3.0);
        assert!(should_merge(&bh1, &bh2, DEFAULT_CRITICAL_FACTOR));

        let (bh1, bh2) = binary_at_rest(3.01);
        assert!(!should_merge(&bh1, &bh2, DEFAULT_CRITICAL_FACTOR));
    }

    #[test]
    fn threshold_scales_with_the_critical_factor() {
        let (bh1, bh2) = binary_at_rest(2.0);
        assert!(!should_merge(&bh1, &bh2, 0.5));
        assert!(should_merge(&bh1, &bh2, DEFAULT_CRITICAL_FACTOR));
    }

    #[test]
    fn runaway_relative_speed_forces_a_merger() {
        let (mut bh1, mut bh2) = binary_at_rest(20.0);
        bh1.velocity = Vector3::new(0.0, 0.0, 1.01);
        bh2.velocity = Vector3::new(0.0, 0.0, -1.01);
        assert!(should_merge(&bh1, &bh2, DEFAULT_CRITICAL_FACTOR));

        bh1.velocity = Vector3::new(0.0, 0.0, 0.99);
        bh2.velocity = Vector3::new(0.0, 0.0, -0.99);
        assert!(!should_merge(&bh1, &bh2, DEFAULT_CRITICAL_FACTOR));
    }

    #[test]
    fn merger_event_couples_the_mode_to_the_remnant() {
        let separation = 3.0;
        let v_rel = (1.0f64 / separation).sqrt();
        let (mut bh1, mut bh2) = binary_at_rest(separation);
        bh1.velocity = Vector3::new(0.0, 0.0, v_rel / 2.0);
        bh2.velocity = Vector3::new(0.0, 0.0, -v_rel / 2.0);

        let source_amplitude = 0.2;
        let (remnant, qnm) = merger_event(&bh1, &bh2, source_amplitude);

        assert_relative_eq!(remnant.mass, 0.965, max_relative = 1e-12);
        assert_relative_eq!(qnm.amplitude, 0.3, max_relative = 1e-12);
        assert_relative_eq!(qnm.frequency, 0.0873, max_relative = 1e-3);
        assert!(qnm.damping_time > 0.0);
    }
}
