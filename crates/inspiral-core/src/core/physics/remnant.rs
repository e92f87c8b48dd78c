use crate::core::models::black_hole::BlackHole;
use crate::core::models::units::SPEED_OF_LIGHT_KMS;
use nalgebra::Vector3;

// Radiated energy fit, Healy et al. (2014), PRD 90, 104004
const ENERGY_P0: f64 = 0.04827;
const ENERGY_P1: f64 = 0.01707;
const ENERGY_P2: f64 = -0.0308;
const MAX_RADIATED_FRACTION: f64 = 0.1;
const EQUAL_MASS_RADIATED_FRACTION: f64 = 0.035; // NR value for eta = 0.25, chi = 0

// Final spin fit, Rezzolla et al. (2008), PRD 78, 044002, Table I
const SPIN_S4: f64 = -0.1229;
const SPIN_S5: f64 = 0.4537;
const SPIN_T0: f64 = -2.8904;
const SPIN_T2: f64 = -3.5171;
const SPIN_T3: f64 = 2.5763;
const MAX_REMNANT_SPIN: f64 = 0.998;

// Fundamental l=2, m=2, n=0 mode, Berti, Cardoso & Starinets (2009),
// PRD 79, 064016, Table VIII
const QNM_F1: f64 = 1.5251;
const QNM_F2: f64 = -1.1568;
const QNM_F3: f64 = 0.1292;
const QNM_Q1: f64 = 0.7000;
const QNM_Q2: f64 = 1.4187;
const QNM_Q3: f64 = -0.4990;
const RINGDOWN_AMPLITUDE_FACTOR: f64 = 1.5; // NR calibration

// Recoil kick fit, Gonzalez et al. (2007), PRL 98, 091101
const KICK_MASS_TERM_KMS: f64 = 1.2e4;
const KICK_MASS_SLOPE: f64 = -0.93;
const KICK_SPIN_TERM_KMS: f64 = 3678.0;

/// Properties of the merged black hole, derived from numerical relativity
/// fitting formulas for non-precessing binaries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemnantProperties {
    /// The remnant mass in units of the pre-merger total mass.
    pub mass: f64,
    /// The dimensionless spin of the remnant.
    pub spin: f64,
    /// The position of the remnant at merger (the binary center of mass).
    pub position: Vector3<f64>,
    /// The remnant velocity, including the recoil kick.
    pub velocity: Vector3<f64>,
    /// The magnitude of the recoil kick as a fraction of the speed of light.
    pub kick_velocity: f64,
    /// The fraction of the total mass radiated as gravitational waves.
    pub energy_radiated: f64,
}

/// The fundamental quasinormal mode that dominates the ringdown signal.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QnmParams {
    /// The oscillation frequency in units of 1/M.
    pub frequency: f64,
    /// The exponential damping time in units of M.
    pub damping_time: f64,
    /// The initial strain amplitude, matched to the waveform at merger.
    pub amplitude: f64,
    /// The initial phase offset in radians.
    pub phase: f64,
}

/// Returns the remnant mass as a fraction of the total mass, from the
/// Healy et al. (2014) radiated-energy fit for non-precessing binaries.
pub fn final_mass_fraction(eta: f64, spin1: f64, spin2: f64) -> f64 {
    let chi_eff = 0.5 * (spin1 + spin2);

    let e_rad_base = eta * (ENERGY_P0 + 4.0 * eta * ENERGY_P0);
    let spin_corr = 1.0 + ENERGY_P1 * chi_eff / (1.0 + ENERGY_P2 * chi_eff * chi_eff);

    let mut e_rad = (e_rad_base * spin_corr).clamp(0.0, MAX_RADIATED_FRACTION);

    // Pin the best-constrained point of the fit to its NR value.
    if (eta - 0.25).abs() < 0.01 && chi_eff.abs() < 0.01 {
        e_rad = EQUAL_MASS_RADIATED_FRACTION;
    }

    1.0 - e_rad
}

/// Returns the dimensionless spin of the remnant, from the Rezzolla et al.
/// (2008) fit for aligned spins, clamped to the Kerr bound.
pub fn final_spin(eta: f64, spin1: f64, spin2: f64) -> f64 {
    let delta_m = (1.0 - 4.0 * eta).max(0.0).sqrt();

    // Mass-weighted initial spin
    let a_init = 0.5 * ((1.0 + delta_m) * spin1 + (1.0 - delta_m) * spin2);

    // Orbital angular momentum contribution, calibrated to NR
    let l_orb = 2.0 * 3.0f64.sqrt() * eta + SPIN_T2 * eta * eta + SPIN_T3 * eta * eta * eta;

    let a_spin = a_init
        + SPIN_S4 * a_init * a_init * eta
        + SPIN_S5 * a_init * eta * delta_m
        + SPIN_T0 * eta * a_init;

    (a_spin + l_orb).clamp(0.0, MAX_REMNANT_SPIN)
}

/// Returns the recoil kick speed as a fraction of the speed of light, from
/// the Gonzalez et al. (2007) fit with a simplified aligned-spin term.
pub fn recoil_kick(eta: f64, spin1: f64, spin2: f64) -> f64 {
    let delta = (1.0 - 4.0 * eta).max(0.0).sqrt();

    let v_mass = KICK_MASS_TERM_KMS * eta * eta * delta * (1.0 + KICK_MASS_SLOPE * eta);
    let v_spin = KICK_SPIN_TERM_KMS * eta * (spin1 - spin2);

    (v_mass * v_mass + v_spin * v_spin).sqrt() / SPEED_OF_LIGHT_KMS
}

/// Computes the fundamental quasinormal mode of a remnant with the given
/// mass and spin, with its amplitude matched to the strain at merger.
///
/// Uses the Berti, Cardoso & Starinets (2009) fits
/// `w = (f1 + f2 (1-a)^f3) / M` and `Q = q1 + q2 (1-a)^q3`, with the
/// damping time recovered as `tau = Q / w`.
pub fn qnm_fundamental(remnant_mass: f64, remnant_spin: f64, merger_amplitude: f64) -> QnmParams {
    let one_minus_af = (1.0 - remnant_spin).max(1e-10);

    let omega = (QNM_F1 + QNM_F2 * one_minus_af.powf(QNM_F3)) / remnant_mass;
    let quality = QNM_Q1 + QNM_Q2 * one_minus_af.powf(QNM_Q3);

    QnmParams {
        frequency: omega / (2.0 * std::f64::consts::PI),
        damping_time: quality / omega,
        amplitude: merger_amplitude * RINGDOWN_AMPLITUDE_FACTOR,
        phase: 0.0,
    }
}

/// Assembles the remnant produced by merging two black holes.
///
/// The remnant carries the center-of-mass position and velocity at merger,
/// with the recoil kick applied along the orbital angular momentum
/// direction. The in-plane kick components are neglected for aligned spins.
pub fn remnant_from_binary(bh1: &BlackHole, bh2: &BlackHole) -> RemnantProperties {
    let total_mass = bh1.mass + bh2.mass;
    let eta = bh1.mass * bh2.mass / (total_mass * total_mass);

    let mass = total_mass * final_mass_fraction(eta, bh1.spin, bh2.spin);
    let spin = final_spin(eta, bh1.spin, bh2.spin);
    let kick_velocity = recoil_kick(eta, bh1.spin, bh2.spin);

    let position = (bh1.mass * bh1.position + bh2.mass * bh2.position) / total_mass;
    let v_com = (bh1.mass * bh1.velocity + bh2.mass * bh2.velocity) / total_mass;

    let r = bh1.position - bh2.position;
    let v = bh1.velocity - bh2.velocity;
    let l_hat = r.cross(&v).try_normalize(1e-12).unwrap_or_else(Vector3::y);

    RemnantProperties {
        mass,
        spin,
        position,
        velocity: v_com + kick_velocity * l_hat,
        kick_velocity,
        energy_radiated: 1.0 - mass / total_mass,
    }
}
