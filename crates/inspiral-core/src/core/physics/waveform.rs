use crate::core::models::black_hole::BlackHole;
use crate::core::physics::orbit;
use crate::core::physics::remnant::QnmParams;

const MIN_SEPARATION: f64 = 1e-10; // In units of M
const MIN_DISTANCE: f64 = 1e-10; // In units of M

/// A gravitational wave strain sample as seen by a distant observer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GwStrain {
    /// The plus polarization component.
    pub h_plus: f64,
    /// The cross polarization component.
    pub h_cross: f64,
    /// The polarization-summed amplitude `sqrt(h+^2 + hx^2)`.
    pub amplitude: f64,
    /// The gravitational wave frequency, twice the orbital frequency.
    pub frequency: f64,
}

/// Computes the quadrupole-formula strain radiated by the binary toward an
/// observer at the given distance and inclination.
///
/// The strain is expressed through the velocity parameter so it stays valid
/// for mildly eccentric orbits:
///
/// ```text
/// h+ = -(2 mu v^2 / D) (1 + cos^2 i)/2 cos(2 Phi)
/// hx = -(2 mu v^2 / D) cos(i) sin(2 Phi)
/// ```
pub fn quadrupole_strain(
    bh1: &BlackHole,
    bh2: &BlackHole,
    observer_distance: f64,
    observer_inclination: f64,
) -> GwStrain {
    let p = orbit::orbital_params(bh1, bh2);
    if p.separation < MIN_SEPARATION || observer_distance < MIN_DISTANCE {
        return GwStrain::default();
    }

    let v2 = p.velocity_param * p.velocity_param;
    let prefactor = 2.0 * p.reduced_mass * v2 / observer_distance;

    let cos_iota = observer_inclination.cos();
    let cos2_iota = cos_iota * cos_iota;
    let two_phi = 2.0 * p.orbital_phase;

    let h_plus = -prefactor * (1.0 + cos2_iota) / 2.0 * two_phi.cos();
    let h_cross = -prefactor * cos_iota * two_phi.sin();

    GwStrain {
        h_plus,
        h_cross,
        amplitude: (h_plus * h_plus + h_cross * h_cross).sqrt(),
        frequency: p.orbital_frequency / std::f64::consts::PI,
    }
}

/// Computes the ringdown strain of the fundamental quasinormal mode at a
/// time after merger, as a damped sinusoid `A exp(-t/tau) cos(2 pi f t + p0)`
/// carrying the l=2, m=2 angular factors.
pub fn ringdown_strain(
    qnm: &QnmParams,
    t_after_merger: f64,
    observer_distance: f64,
    observer_inclination: f64,
) -> GwStrain {
    if t_after_merger < 0.0 || observer_distance < MIN_DISTANCE {
        return GwStrain::default();
    }

    let cos_iota = observer_inclination.cos();
    let cos2_iota = cos_iota * cos_iota;

    let envelope = qnm.amplitude * (-t_after_merger / qnm.damping_time).exp();
    let phase = 2.0 * std::f64::consts::PI * qnm.frequency * t_after_merger + qnm.phase;

    let h_plus = envelope * (1.0 + cos2_iota) / 2.0 * phase.cos() / observer_distance;
    let h_cross = envelope * cos_iota * phase.sin() / observer_distance;

    GwStrain {
        h_plus,
        h_cross,
        amplitude: (h_plus * h_plus + h_cross * h_cross).sqrt(),
        frequency: qnm.frequency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Vector3;
    use std::f64::consts::PI;

    fn circular_binary(separation: f64) -> (BlackHole, BlackHole) {
        let v_rel = (1.0 / separation).sqrt();
        let mut bh1 = BlackHole::new(0.5, 0.0);
        bh1.position = Vector3::new(separation / 2.0, 0.0, 0.0);
        bh1.velocity = Vector3::new(0.0, 0.0, v_rel / 2.0);
        let mut bh2 = BlackHole::new(0.5, 0.0);
        bh2.position = Vector3::new(-separation / 2.0, 0.0, 0.0);
        bh2.velocity = Vector3::new(0.0, 0.0, -v_rel / 2.0);
        (bh1, bh2)
    }

    #[test]
    fn face_on_strain_at_zero_phase_is_pure_plus_polarization() {
        let (bh1, bh2) = circular_binary(20.0);
        let gw = quadrupole_strain(&bh1, &bh2, 100.0, 0.0);

        // prefactor = 2 mu v^2 / D with v^2 = M/r on a circular orbit.
        let expected = 2.0 * 0.25 * 0.05 / 100.0;
        assert_relative_eq!(gw.h_plus, -expected, max_relative = 1e-12);
        assert_relative_eq!(gw.h_cross, 0.0, epsilon = 1e-18);
        assert_relative_eq!(gw.amplitude, expected, max_relative = 1e-12);
    }

    #[test]
    fn edge_on_strain_loses_the_cross_polarization() {
        let (bh1, bh2) = circular_binary(20.0);
        let face_on = quadrupole_strain(&bh1, &bh2, 100.0, 0.0);
        let edge_on = quadrupole_strain(&bh1, &bh2, 100.0, PI / 2.0);

        assert!(edge_on.h_cross.abs() < 1e-18);
        assert_relative_eq!(edge_on.h_plus, face_on.h_plus / 2.0, max_relative = 1e-12);
    }

    #[test]
    fn wave_frequency_is_twice_the_orbital_frequency() {
        let (bh1, bh2) = circular_binary(20.0);
        let params = orbit::orbital_params(&bh1, &bh2);
        let gw = quadrupole_strain(&bh1, &bh2, 100.0, 0.0);

        assert_relative_eq!(
            gw.frequency,
            2.0 * params.orbital_frequency / (2.0 * PI),
            max_relative = 1e-12
        );
    }

    #[test]
    fn strain_falls_off_inversely_with_distance() {
        let (bh1, bh2) = circular_binary(20.0);
        let near = quadrupole_strain(&bh1, &bh2, 100.0, 0.0);
        let far = quadrupole_strain(&bh1, &bh2, 1000.0, 0.0);

        assert_relative_eq!(near.h_plus * 100.0, far.h_plus * 1000.0, max_relative = 1e-12);
    }

    #[test]
    fn degenerate_geometry_radiates_nothing() {
        let bh1 = BlackHole::new(0.5, 0.0);
        let bh2 = BlackHole::new(0.5, 0.0);
        assert_eq!(quadrupole_strain(&bh1, &bh2, 100.0, 0.0), GwStrain::default());

        let (bh1, bh2) = circular_binary(20.0);
        assert_eq!(quadrupole_strain(&bh1, &bh2, 0.0, 0.0), GwStrain::default());
    }

    fn reference_qnm() -> QnmParams {
        QnmParams {
            frequency: 0.08,
            damping_time: 12.0,
            amplitude: 1.5e-3,
            phase: 0.0,
        }
    }

    #[test]
    fn ringdown_amplitude_decays_by_one_over_e_at_the_damping_time() {
        let qnm = reference_qnm();

        // Face-on, both angular factors are unity and the polarization-summed
        // amplitude equals the envelope.
        let start = ringdown_strain(&qnm, 0.0, 1.0, 0.0);
        let later = ringdown_strain(&qnm, qnm.damping_time, 1.0, 0.0);

        assert_relative_eq!(start.amplitude, qnm.amplitude, max_relative = 1e-12);
        assert_relative_eq!(
            later.amplitude / start.amplitude,
            (-1.0f64).exp(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn ringdown_envelope_decays_monotonically() {
        let qnm = reference_qnm();
        let mut previous = f64::INFINITY;
        for step in 0..8 {
            let t = step as f64 * qnm.damping_time / 2.0;
            let amplitude = ringdown_strain(&qnm, t, 1.0, 0.0).amplitude;
            assert!(amplitude < previous);
            previous = amplitude;
        }
    }

    #[test]
    fn ringdown_is_silent_before_the_merger() {
        let qnm = reference_qnm();
        assert_eq!(ringdown_strain(&qnm, -1.0, 1.0, 0.0), GwStrain::default());
    }

    #[test]
    fn ringdown_oscillates_at_the_mode_frequency() {
        let qnm = reference_qnm();

        // At half a period the plus polarization flips sign.
        let half_period = 0.5 / qnm.frequency;
        let start = ringdown_strain(&qnm, 0.0, 1.0, 0.0);
        let flipped = ringdown_strain(&qnm, half_period, 1.0, 0.0);

        assert!(start.h_plus > 0.0);
        assert!(flipped.h_plus < 0.0);
        assert_eq!(start.frequency, qnm.frequency);
    }
}
