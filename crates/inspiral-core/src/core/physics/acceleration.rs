use nalgebra::Vector3;

const MIN_SEPARATION: f64 = 1e-10; // In units of M

/// Selects which post-Newtonian orders contribute to the equations of motion.
///
/// The Newtonian term is always present. The 1PN and 2PN terms are
/// conservative corrections; the 2.5PN term is the leading-order radiation
/// reaction and is the only dissipative contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PnToggles {
    /// Enables the 1PN conservative correction, O(v^2).
    pub pn1: bool,
    /// Enables the 2PN conservative correction, O(v^4).
    pub pn2: bool,
    /// Enables the 2.5PN radiation reaction, O(v^5).
    pub pn25: bool,
}

impl Default for PnToggles {
    fn default() -> Self {
        Self {
            pn1: true,
            pn2: true,
            pn25: true,
        }
    }
}

/// The relative acceleration split by post-Newtonian order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PnAcceleration {
    pub newtonian: Vector3<f64>,
    pub pn1: Vector3<f64>,
    pub pn2: Vector3<f64>,
    pub pn25: Vector3<f64>,
}

impl PnAcceleration {
    pub fn zeros() -> Self {
        Self {
            newtonian: Vector3::zeros(),
            pn1: Vector3::zeros(),
            pn2: Vector3::zeros(),
            pn25: Vector3::zeros(),
        }
    }

    /// Sums the contributions of all computed orders.
    #[inline]
    pub fn total(&self) -> Vector3<f64> {
        self.newtonian + self.pn1 + self.pn2 + self.pn25
    }
}

/// Computes the post-Newtonian acceleration of the relative coordinate
/// `r = x1 - x2` in the center-of-mass frame.
///
/// Follows the ADM-TT gauge formulation of Blanchet, Living Rev.
/// Relativity 17 (2014) 2, truncated at 2.5PN for non-spinning bodies. The
/// acceleration of the individual bodies is recovered from the returned
/// relative acceleration as `a1 = (m2/M) a_rel` and `a2 = -(m1/M) a_rel`.
pub fn relative_acceleration(
    r: &Vector3<f64>,
    v: &Vector3<f64>,
    m1: f64,
    m2: f64,
    toggles: &PnToggles,
) -> PnAcceleration {
    let mut result = PnAcceleration::zeros();

    let total_mass = m1 + m2;
    let eta = m1 * m2 / (total_mass * total_mass);
    let r2 = r.dot(r);
    let r_mag = r2.sqrt();

    if r_mag < MIN_SEPARATION {
        return result;
    }

    let n = r / r_mag;
    let v2 = v.dot(v);
    let rdot = n.dot(v);
    let m_over_r = total_mass / r_mag;

    result.newtonian = -total_mass / r2 * n;

    // 1PN, Blanchet (2014) Eq. (203):
    // a = -M/r^2 [ n (-v^2 + 2(2+eta)M/r + 3/2 eta rdot^2) + v (2(2-eta) rdot) ]
    if toggles.pn1 {
        let n_coeff = -v2 + 2.0 * (2.0 + eta) * m_over_r + 1.5 * eta * rdot * rdot;
        let v_coeff = 2.0 * (2.0 - eta) * rdot;
        result.pn1 = -m_over_r / r_mag * (n_coeff * n + v_coeff * v);
    }

    // 2PN, Blanchet (2014) Eq. (203), complete for non-spinning bodies.
    if toggles.pn2 {
        let mr2 = m_over_r * m_over_r;
        let rdot2 = rdot * rdot;
        let v4 = v2 * v2;

        let n_coeff = -2.0 * (2.0 + 25.0 * eta + 2.0 * eta * eta) * mr2
            + 1.5 * eta * (3.0 - 4.0 * eta) * v4
            + 0.5 * eta * (13.0 - 4.0 * eta) * m_over_r * v2
            - (2.0 + 15.0 * eta - 2.0 * eta * eta) * m_over_r * rdot2
            - 1.875 * eta * (1.0 - 3.0 * eta) * rdot2 * rdot2
            + 1.5 * eta * (3.0 - 4.0 * eta) * v2 * rdot2;

        let v_coeff = -0.5 * eta * (15.0 + 4.0 * eta) * v2 * rdot
            + (4.0 + 41.0 * eta / 4.0 + eta * eta) * m_over_r * rdot
            + 1.5 * eta * (3.0 + 2.0 * eta) * rdot * rdot2;

        result.pn2 = -m_over_r / r_mag * (n_coeff * n + v_coeff * v);
    }

    // 2.5PN Burke-Thorne radiation reaction, Iyer & Will (1995):
    // a = 8/5 eta M^2/r^3 [ n rdot (18v^2 + 2/3 M/r - 25 rdot^2)
    //                       - v (6v^2 - 2M/r - 15 rdot^2) ]
    if toggles.pn25 {
        let rdot2 = rdot * rdot;
        let prefactor = 8.0 / 5.0 * eta * total_mass * m_over_r / r2;

        let n_coeff = rdot * (18.0 * v2 + (2.0 / 3.0) * m_over_r - 25.0 * rdot2);
        let v_coeff = -(6.0 * v2 - 2.0 * m_over_r - 15.0 * rdot2);

        result.pn25 = prefactor * (n_coeff * n + v_coeff * v);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL_ORDERS: PnToggles = PnToggles {
        pn1: true,
        pn2: true,
        pn25: true,
    };

    const NEWTONIAN_ONLY: PnToggles = PnToggles {
        pn1: false,
        pn2: false,
        pn25: false,
    };

    fn circular_orbit_state(separation: f64) -> (Vector3<f64>, Vector3<f64>) {
        let r = Vector3::new(separation, 0.0, 0.0);
        let v = Vector3::new(0.0, 0.0, (1.0 / separation).sqrt());
        (r, v)
    }

    #[test]
    fn newtonian_acceleration_points_inward_with_inverse_square_magnitude() {
        let r = Vector3::new(10.0, 0.0, 0.0);
        let v = Vector3::zeros();
        let acc = relative_acceleration(&r, &v, 0.5, 0.5, &NEWTONIAN_ONLY);

        assert_relative_eq!(acc.newtonian, Vector3::new(-0.01, 0.0, 0.0));
        assert_eq!(acc.pn1, Vector3::zeros());
        assert_eq!(acc.pn2, Vector3::zeros());
        assert_eq!(acc.pn25, Vector3::zeros());
        assert_relative_eq!(acc.total(), acc.newtonian);
    }

    #[test]
    fn acceleration_vanishes_at_degenerate_separation() {
        let r = Vector3::zeros();
        let v = Vector3::new(0.0, 0.0, 0.3);
        let acc = relative_acceleration(&r, &v, 0.5, 0.5, &ALL_ORDERS);
        assert_eq!(acc.total(), Vector3::zeros());
    }

    #[test]
    fn disabled_orders_contribute_nothing() {
        let (r, v) = circular_orbit_state(15.0);
        let only_1pn = PnToggles {
            pn1: true,
            pn2: false,
            pn25: false,
        };
        let acc = relative_acceleration(&r, &v, 0.5, 0.5, &only_1pn);

        assert!(acc.pn1.norm() > 0.0);
        assert_eq!(acc.pn2, Vector3::zeros());
        assert_eq!(acc.pn25, Vector3::zeros());
    }

    #[test]
    fn corrections_are_small_compared_to_newtonian_term_at_wide_separation() {
        let (r, v) = circular_orbit_state(100.0);
        let acc = relative_acceleration(&r, &v, 0.5, 0.5, &ALL_ORDERS);

        assert!(acc.pn1.norm() < 0.1 * acc.newtonian.norm());
        assert!(acc.pn2.norm() < acc.pn1.norm());
        assert!(acc.pn25.norm() < acc.pn1.norm());
    }

    #[test]
    fn radiation_reaction_opposes_the_orbital_motion() {
        let (r, v) = circular_orbit_state(20.0);
        let acc = relative_acceleration(&r, &v, 0.5, 0.5, &ALL_ORDERS);
        assert!(acc.pn25.dot(&v) < 0.0);
    }

    #[test]
    fn conservative_orders_are_even_under_time_reversal() {
        let (r, v) = circular_orbit_state(12.0);
        let eccentric_v = v + Vector3::new(0.05, 0.0, 0.0);

        let forward = relative_acceleration(&r, &eccentric_v, 0.6, 0.4, &ALL_ORDERS);
        let reversed = relative_acceleration(&r, &(-eccentric_v), 0.6, 0.4, &ALL_ORDERS);

        assert_relative_eq!(forward.newtonian, reversed.newtonian);
        assert_relative_eq!(forward.pn1, reversed.pn1, max_relative = 1e-12);
        assert_relative_eq!(forward.pn2, reversed.pn2, max_relative = 1e-12);
        assert_relative_eq!(forward.pn25, -reversed.pn25, max_relative = 1e-12);
    }
}
