use crate::core::physics::acceleration::{self, PnToggles};
use crate::engine::config::IntegratorConfig;
use nalgebra::Vector3;

const MIN_SEPARATION: f64 = 1e-10; // In units of M
const ISCO_RADIUS_FACTOR: f64 = 6.0; // Schwarzschild ISCO in units of M

/// The full phase-space state of the binary at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryState {
    pub pos1: Vector3<f64>,
    pub vel1: Vector3<f64>,
    pub pos2: Vector3<f64>,
    pub vel2: Vector3<f64>,
    pub time: f64,
}

impl BinaryState {
    /// Returns the distance between the two bodies.
    #[inline]
    pub fn separation(&self) -> f64 {
        (self.pos1 - self.pos2).norm()
    }

    /// Returns the magnitude of the relative velocity.
    #[inline]
    pub fn relative_speed(&self) -> f64 {
        (self.vel1 - self.vel2).norm()
    }

    fn offset(&self, d: &StateDerivative, dt: f64) -> Self {
        Self {
            pos1: self.pos1 + d.dpos1 * dt,
            vel1: self.vel1 + d.dvel1 * dt,
            pos2: self.pos2 + d.dpos2 * dt,
            vel2: self.vel2 + d.dvel2 * dt,
            time: self.time + dt,
        }
    }
}

/// The time derivative of a [`BinaryState`]: velocities and accelerations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateDerivative {
    pub dpos1: Vector3<f64>,
    pub dvel1: Vector3<f64>,
    pub dpos2: Vector3<f64>,
    pub dvel2: Vector3<f64>,
}

/// Evaluates the post-Newtonian equations of motion for both bodies.
///
/// The relative acceleration is split onto the bodies by mass ratio,
/// `a1 = (m2/M) a_rel` and `a2 = -(m1/M) a_rel`, which keeps the center of
/// mass fixed under the conservative orders.
pub fn pn_derivative(
    state: &BinaryState,
    m1: f64,
    m2: f64,
    toggles: &PnToggles,
) -> StateDerivative {
    let r = state.pos1 - state.pos2;
    let v = state.vel1 - state.vel2;
    let a_rel = acceleration::relative_acceleration(&r, &v, m1, m2, toggles).total();

    let total_mass = m1 + m2;
    StateDerivative {
        dpos1: state.vel1,
        dvel1: m2 / total_mass * a_rel,
        dpos2: state.vel2,
        dvel2: -(m1 / total_mass) * a_rel,
    }
}

/// Advances the state by one classic fourth-order Runge-Kutta step.
pub fn rk4_step<F>(state: &BinaryState, dt: f64, derivative: F) -> BinaryState
where
    F: Fn(&BinaryState) -> StateDerivative,
{
    let k1 = derivative(state);
    let k2 = derivative(&state.offset(&k1, dt * 0.5));
    let k3 = derivative(&state.offset(&k2, dt * 0.5));
    let k4 = derivative(&state.offset(&k3, dt));

    let sixth = dt / 6.0;
    BinaryState {
        pos1: state.pos1 + sixth * (k1.dpos1 + 2.0 * k2.dpos1 + 2.0 * k3.dpos1 + k4.dpos1),
        vel1: state.vel1 + sixth * (k1.dvel1 + 2.0 * k2.dvel1 + 2.0 * k3.dvel1 + k4.dvel1),
        pos2: state.pos2 + sixth * (k1.dpos2 + 2.0 * k2.dpos2 + 2.0 * k3.dpos2 + k4.dpos2),
        vel2: state.vel2 + sixth * (k1.dvel2 + 2.0 * k2.dvel2 + 2.0 * k3.dvel2 + k4.dvel2),
        time: state.time + dt,
    }
}

/// Picks a timestep as a fraction of the instantaneous orbital period,
/// shrinking it quadratically once the separation drops below twice the
/// Schwarzschild ISCO, and clamping it to the configured bounds.
pub fn adaptive_timestep(
    state: &BinaryState,
    config: &IntegratorConfig,
    total_mass: f64,
) -> f64 {
    if !config.adaptive {
        return config.dt_initial;
    }

    let separation = state.separation();
    if separation < MIN_SEPARATION {
        return config.dt_min;
    }

    // T = 2 pi sqrt(r^3 / M)
    let orbital_period =
        2.0 * std::f64::consts::PI * (separation.powi(3) / total_mass).sqrt();
    let mut dt = config.safety_factor * orbital_period;

    let r_isco = ISCO_RADIUS_FACTOR * total_mass;
    if separation < 2.0 * r_isco {
        let scale = separation / (2.0 * r_isco);
        dt *= scale * scale;
    }

    dt.clamp(config.dt_min, config.dt_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    const NEWTONIAN_ONLY: PnToggles = PnToggles {
        pn1: false,
        pn2: false,
        pn25: false,
    };

    fn circular_state(separation: f64) -> BinaryState {
        let v_rel = (1.0 / separation).sqrt();
        BinaryState {
            pos1: Vector3::new(separation / 2.0, 0.0, 0.0),
            vel1: Vector3::new(0.0, 0.0, v_rel / 2.0),
            pos2: Vector3::new(-separation / 2.0, 0.0, 0.0),
            vel2: Vector3::new(0.0, 0.0, -v_rel / 2.0),
            time: 0.0,
        }
    }

    fn binding_energy(state: &BinaryState, m1: f64, m2: f64) -> f64 {
        let total = m1 + m2;
        let mu = m1 * m2 / total;
        let r = state.separation();
        let v2 = (state.vel1 - state.vel2).norm_squared();
        0.5 * mu * v2 - mu * total / r
    }

    #[test]
    fn rk4_reproduces_uniform_acceleration_exactly() {
        let gravity = Vector3::new(0.0, -10.0, 0.0);
        let derivative = |s: &BinaryState| StateDerivative {
            dpos1: s.vel1,
            dvel1: gravity,
            dpos2: s.vel2,
            dvel2: gravity,
        };

        let start = BinaryState {
            pos1: Vector3::zeros(),
            vel1: Vector3::new(3.0, 0.0, 0.0),
            pos2: Vector3::zeros(),
            vel2: Vector3::zeros(),
            time: 0.0,
        };
        let end = rk4_step(&start, 2.0, derivative);

        // x = v0 t + g t^2 / 2 is exact for a fourth-order method.
        assert_relative_eq!(end.pos1, Vector3::new(6.0, -20.0, 0.0), max_relative = 1e-14);
        assert_relative_eq!(end.vel1, Vector3::new(3.0, -20.0, 0.0), max_relative = 1e-14);
        assert_relative_eq!(end.time, 2.0);
    }

    #[test]
    fn newtonian_circular_orbit_conserves_energy_over_one_period() {
        let mut state = circular_state(20.0);
        let initial_energy = binding_energy(&state, 0.5, 0.5);

        let period = 2.0 * PI * (20.0f64.powi(3)).sqrt();
        let dt = 0.1;
        let full_steps = (period / dt) as usize;
        let derivative = |s: &BinaryState| pn_derivative(s, 0.5, 0.5, &NEWTONIAN_ONLY);

        for _ in 0..full_steps {
            state = rk4_step(&state, dt, derivative);
        }
        state = rk4_step(&state, period - full_steps as f64 * dt, derivative);

        let final_energy = binding_energy(&state, 0.5, 0.5);
        assert!(((final_energy - initial_energy) / initial_energy).abs() < 1e-6);
        assert_relative_eq!(state.time, period, max_relative = 1e-9);
    }

    #[test]
    fn radiation_reaction_shrinks_the_orbit() {
        let all_orders = PnToggles::default();
        let config = IntegratorConfig::default();
        let mut state = circular_state(20.0);
        let derivative = |s: &BinaryState| pn_derivative(s, 0.5, 0.5, &all_orders);

        while state.time < 5000.0 {
            let dt = adaptive_timestep(&state, &config, 1.0);
            state = rk4_step(&state, dt, derivative);
        }

        // Peters decay predicts roughly 17.6 M at t = 5000 M.
        assert!(state.separation() < 19.0);
        assert!(state.separation() > 15.0);
    }

    #[test]
    fn derivative_splits_acceleration_by_mass_ratio() {
        let state = circular_state(10.0);
        let d = pn_derivative(&state, 0.75, 0.25, &NEWTONIAN_ONLY);

        assert_eq!(d.dpos1, state.vel1);
        assert_eq!(d.dpos2, state.vel2);
        assert_relative_eq!(d.dvel1, -d.dvel2 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn fixed_stepping_returns_the_initial_timestep() {
        let config = IntegratorConfig {
            adaptive: false,
            ..Default::default()
        };
        let state = circular_state(20.0);
        assert_eq!(adaptive_timestep(&state, &config, 1.0), 0.1);
    }

    #[test]
    fn timestep_is_clamped_to_the_configured_maximum() {
        let config = IntegratorConfig::default();
        let state = circular_state(100.0);
        assert_eq!(adaptive_timestep(&state, &config, 1.0), config.dt_max);
    }

    #[test]
    fn timestep_shrinks_quadratically_inside_twice_the_isco() {
        let config = IntegratorConfig {
            safety_factor: 0.01,
            ..Default::default()
        };

        let plunging = circular_state(8.0);
        let dt = adaptive_timestep(&plunging, &config, 1.0);
        assert_relative_eq!(dt, 0.6319, max_relative = 1e-3);

        let inspiraling = circular_state(14.0);
        assert!(dt < adaptive_timestep(&inspiraling, &config, 1.0));
    }

    #[test]
    fn degenerate_separation_falls_back_to_the_minimum_timestep() {
        let config = IntegratorConfig::default();
        let state = BinaryState {
            pos1: Vector3::zeros(),
            vel1: Vector3::zeros(),
            pos2: Vector3::zeros(),
            vel2: Vector3::zeros(),
            time: 0.0,
        };
        assert_eq!(adaptive_timestep(&state, &config, 1.0), config.dt_min);
    }
}
