use crate::core::models::black_hole::BlackHole;

const MIN_SEPARATION: f64 = 1e-10; // In units of M

/// Instantaneous orbital parameters of a binary, derived from the positions
/// and velocities of its two bodies.
///
/// Mass-derived quantities are always filled in. The kinematic quantities
/// are zero when the separation is degenerate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitalParams {
    /// The distance between the two bodies, in units of M.
    pub separation: f64,
    /// The orbital angular frequency, derived from the angular momentum.
    pub orbital_frequency: f64,
    /// The orbital phase angle in the x-z plane, in radians.
    pub orbital_phase: f64,
    /// The rate of change of the separation.
    pub radial_velocity: f64,
    /// The post-Newtonian velocity parameter `v = (M w)^(1/3)`.
    pub velocity_param: f64,
    /// The reduced mass `m1 m2 / M`.
    pub reduced_mass: f64,
    /// The total mass `m1 + m2`.
    pub total_mass: f64,
    /// The symmetric mass ratio `mu / M`, at most 0.25.
    pub symmetric_mass_ratio: f64,
    /// The chirp mass `M eta^(3/5)` that sets the inspiral rate.
    pub chirp_mass: f64,
    /// The Newtonian binding energy of the orbit.
    pub energy: f64,
    /// The magnitude of the orbital angular momentum `|mu r x v|`.
    pub angular_momentum: f64,
}

/// Derives the orbital parameters of the binary formed by two black holes.
pub fn orbital_params(bh1: &BlackHole, bh2: &BlackHole) -> OrbitalParams {
    let total_mass = bh1.mass + bh2.mass;
    let reduced_mass = bh1.mass * bh2.mass / total_mass;
    let symmetric_mass_ratio = reduced_mass / total_mass;

    let mut p = OrbitalParams {
        total_mass,
        reduced_mass,
        symmetric_mass_ratio,
        chirp_mass: total_mass * symmetric_mass_ratio.powf(0.6),
        ..Default::default()
    };

    let r = bh1.position - bh2.position;
    let v = bh1.velocity - bh2.velocity;

    p.separation = r.norm();
    if p.separation < MIN_SEPARATION {
        return p;
    }

    let n = r / p.separation;
    p.radial_velocity = v.dot(&n);

    let l = p.reduced_mass * r.cross(&v);
    p.angular_momentum = l.norm();

    // w = L / (mu r^2)
    p.orbital_frequency = p.angular_momentum / (p.reduced_mass * p.separation * p.separation);

    if p.orbital_frequency > 0.0 {
        p.velocity_param = (p.total_mass * p.orbital_frequency).cbrt();
    }

    p.orbital_phase = r.z.atan2(r.x);

    let v2 = v.dot(&v);
    p.energy = 0.5 * p.reduced_mass * v2 - p.reduced_mass * p.total_mass / p.separation;

    p
}

/// Returns the Keplerian orbital frequency `sqrt(M / r^3)`.
#[inline]
pub fn kepler_frequency(total_mass: f64, separation: f64) -> f64 {
    if separation < MIN_SEPARATION {
        return 0.0;
    }
    (total_mass / (separation * separation * separation)).sqrt()
}

/// Returns the quadrupole energy loss rate `dE/dt = -(32/5) eta^2 M^5 / r^5`.
#[inline]
pub fn energy_loss_rate(eta: f64, total_mass: f64, separation: f64) -> f64 {
    if separation < MIN_SEPARATION {
        return 0.0;
    }
    -(32.0 / 5.0) * eta * eta * total_mass.powi(5) / separation.powi(5)
}

/// Returns the angular momentum loss rate `dL/dt = -(32/5) eta^2 M^(9/2) / r^(7/2)`.
#[inline]
pub fn angular_momentum_loss_rate(eta: f64, total_mass: f64, separation: f64) -> f64 {
    if separation < MIN_SEPARATION {
        return 0.0;
    }
    -(32.0 / 5.0) * eta * eta * total_mass.powf(4.5) / separation.powf(3.5)
}

/// Estimates the time to merger from the leading-order Peters formula
/// `T = (5/256) r^4 / (eta M^3)`.
#[inline]
pub fn time_to_merger_estimate(eta: f64, total_mass: f64, separation: f64) -> f64 {
    (5.0 / 256.0) * separation.powi(4) / (eta * total_mass.powi(3))
}
