use nalgebra::Vector3;

/// Represents a single black hole in a binary system.
///
/// All quantities are expressed in geometrized units (G = c = 1), with the
/// binary's total mass as the mass scale. A `mass` of 0.5 therefore denotes
/// half of the total system mass, and positions and times are measured in
/// units of the total mass M.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHole {
    /// The mass in units of the total system mass.
    pub mass: f64,
    /// The dimensionless spin parameter (Kerr parameter), in `[0, 1)`.
    pub spin: f64,
    /// The position in the center-of-mass frame, in units of M.
    pub position: Vector3<f64>,
    /// The velocity as a fraction of the speed of light.
    pub velocity: Vector3<f64>,
    /// The unit vector along the spin axis.
    pub spin_axis: Vector3<f64>,
}

impl Default for BlackHole {
    fn default() -> Self {
        Self {
            mass: 0.0,
            spin: 0.0,
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            spin_axis: Vector3::zeros(),
        }
    }
}

impl BlackHole {
    /// Creates a black hole at rest at the origin, spinning about the +y axis.
    pub fn new(mass: f64, spin: f64) -> Self {
        Self {
            mass,
            spin,
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            spin_axis: Vector3::y(),
        }
    }

    /// Returns the Schwarzschild radius `r_s = 2m`.
    #[inline]
    pub fn schwarzschild_radius(&self) -> f64 {
        2.0 * self.mass
    }

    /// Returns the radius of the innermost stable circular orbit.
    ///
    /// For a non-spinning hole this is `6m`. For a spinning hole the
    /// Bardeen, Press & Teukolsky (1972) expression for prograde equatorial
    /// orbits is used, which shrinks toward `m` as the spin approaches unity.
    pub fn isco_radius(&self) -> f64 {
        if self.spin < 1e-10 {
            return 6.0 * self.mass;
        }
        let a = self.spin;
        let z1 = 1.0 + (1.0 - a * a).cbrt() * ((1.0 + a).cbrt() + (1.0 - a).cbrt());
        let z2 = (3.0 * a * a + z1 * z1).sqrt();
        // Prograde orbit
        self.mass * (3.0 + z2 - ((3.0 - z1) * (3.0 + z1 + 2.0 * z2)).sqrt())
    }

    /// Returns the gravitational radius `r_g = m`.
    #[inline]
    pub fn gravitational_radius(&self) -> f64 {
        self.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn new_black_hole_is_at_rest_with_default_spin_axis() {
        let bh = BlackHole::new(0.5, 0.7);
        assert_eq!(bh.mass, 0.5);
        assert_eq!(bh.spin, 0.7);
        assert_eq!(bh.position, Vector3::zeros());
        assert_eq!(bh.velocity, Vector3::zeros());
        assert_eq!(bh.spin_axis, Vector3::y());
    }

    #[test]
    fn schwarzschild_radius_is_twice_the_mass() {
        let bh = BlackHole::new(0.5, 0.0);
        assert_relative_eq!(bh.schwarzschild_radius(), 1.0);
    }

    #[test]
    fn isco_radius_for_nonspinning_hole_is_six_masses() {
        let bh = BlackHole::new(1.0, 0.0);
        assert_relative_eq!(bh.isco_radius(), 6.0);
    }

    #[test]
    fn isco_radius_shrinks_for_prograde_spinning_hole() {
        // Reference values from Bardeen, Press & Teukolsky (1972), Table 1.
        let moderate = BlackHole::new(1.0, 0.9);
        assert_relative_eq!(moderate.isco_radius(), 2.3209, max_relative = 1e-4);

        let near_extremal = BlackHole::new(1.0, 0.998);
        assert_relative_eq!(near_extremal.isco_radius(), 1.2370, max_relative = 1e-3);
    }

    #[test]
    fn isco_radius_scales_linearly_with_mass() {
        let light = BlackHole::new(0.25, 0.6);
        let heavy = BlackHole::new(0.75, 0.6);
        assert_relative_eq!(heavy.isco_radius(), 3.0 * light.isco_radius());
    }

    #[test]
    fn gravitational_radius_equals_the_mass() {
        let bh = BlackHole::new(0.3, 0.0);
        assert_relative_eq!(bh.gravitational_radius(), 0.3);
    }
}
