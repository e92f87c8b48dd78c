use crate::core::physics::acceleration::PnToggles;
use nalgebra::Vector3;
use thiserror::Error;

const MIN_AXIS_NORM: f64 = 1e-10;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Parameter '{parameter}' must be positive, got {value}")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("Parameter '{parameter}' must lie in [{min}, {max}), got {value}")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Parameter '{parameter}' must be finite, got {value}")]
    NotFinite { parameter: &'static str, value: f64 },

    #[error("Spin axis '{parameter}' must be a finite, nonzero vector")]
    DegenerateAxis { parameter: &'static str },

    #[error("Timestep bounds are inverted: dt_min = {min} exceeds dt_max = {max}")]
    TimestepBounds { min: f64, max: f64 },

    #[error("Ringdown sampling requires at least one sample")]
    EmptyRingdown,
}

/// Initial conditions of the binary, in geometrized units.
///
/// Masses are interpreted as fractions of the total system mass; callers may
/// pass unnormalized values and let [`SimulationConfig::normalized`] rescale
/// them so they sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryConfig {
    /// The mass of the first black hole.
    pub mass1: f64,
    /// The mass of the second black hole.
    pub mass2: f64,
    /// The dimensionless spin of the first black hole, in `[0, 1)`.
    pub spin1: f64,
    /// The dimensionless spin of the second black hole, in `[0, 1)`.
    pub spin2: f64,
    /// The spin axis of the first black hole, normalized at setup.
    pub spin_axis1: Vector3<f64>,
    /// The spin axis of the second black hole, normalized at setup.
    pub spin_axis2: Vector3<f64>,
    /// The initial separation in units of M.
    pub initial_separation: f64,
    /// The orbital eccentricity, in `[0, 1)`.
    pub eccentricity: f64,
}

impl Default for BinaryConfig {
    fn default() -> Self {
        Self {
            mass1: 0.5,
            mass2: 0.5,
            spin1: 0.0,
            spin2: 0.0,
            spin_axis1: Vector3::y(),
            spin_axis2: Vector3::y(),
            initial_separation: 20.0,
            eccentricity: 0.0,
        }
    }
}

/// Tuning parameters for the RK4 integrator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegratorConfig {
    /// The timestep used when adaptive stepping is disabled.
    pub dt_initial: f64,
    /// The smallest allowed timestep.
    pub dt_min: f64,
    /// The largest allowed timestep.
    pub dt_max: f64,
    /// The fraction of the orbital period used as the adaptive timestep.
    pub safety_factor: f64,
    /// Enables orbit-derived adaptive stepping.
    pub adaptive: bool,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        Self {
            dt_initial: 0.1,
            dt_min: 1e-6,
            dt_max: 1.0,
            safety_factor: 0.1,
            adaptive: true,
        }
    }
}

/// Full description of a simulation run: the binary, the integrator, the
/// observer, and the recording cadence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    pub binary: BinaryConfig,
    pub integrator: IntegratorConfig,
    /// Which post-Newtonian orders participate in the dynamics.
    pub pn: PnToggles,
    /// The hard time limit for the inspiral, in units of M.
    pub max_time: f64,
    /// The target interval between recorded frames, in units of M.
    pub record_interval: f64,
    /// The duration of the synthesized ringdown, in units of M.
    pub ringdown_duration: f64,
    /// The number of evenly spaced ringdown samples.
    pub ringdown_samples: usize,
    /// The distance to the observer, in units of M.
    pub observer_distance: f64,
    /// The inclination of the observer relative to the orbital plane, in radians.
    pub observer_inclination: f64,
    /// Multiplier on the mean Schwarzschild radius used as the merger
    /// separation threshold.
    pub critical_factor: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            binary: BinaryConfig::default(),
            integrator: IntegratorConfig::default(),
            pn: PnToggles::default(),
            max_time: 1e6,
            record_interval: 10.0,
            ringdown_duration: 100.0,
            ringdown_samples: 500,
            observer_distance: 1e6,
            observer_inclination: 0.0,
            critical_factor: 3.0,
        }
    }
}

impl SimulationConfig {
    /// Checks every parameter against its physical range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("mass1", self.binary.mass1)?;
        positive("mass2", self.binary.mass2)?;
        unit_interval("spin1", self.binary.spin1)?;
        unit_interval("spin2", self.binary.spin2)?;
        finite_nonzero_axis("spin_axis1", &self.binary.spin_axis1)?;
        finite_nonzero_axis("spin_axis2", &self.binary.spin_axis2)?;
        positive("initial_separation", self.binary.initial_separation)?;
        unit_interval("eccentricity", self.binary.eccentricity)?;

        positive("dt_initial", self.integrator.dt_initial)?;
        positive("dt_min", self.integrator.dt_min)?;
        positive("dt_max", self.integrator.dt_max)?;
        positive("safety_factor", self.integrator.safety_factor)?;
        if self.integrator.dt_min > self.integrator.dt_max {
            return Err(ConfigError::TimestepBounds {
                min: self.integrator.dt_min,
                max: self.integrator.dt_max,
            });
        }

        positive("max_time", self.max_time)?;
        positive("record_interval", self.record_interval)?;
        positive("ringdown_duration", self.ringdown_duration)?;
        if self.ringdown_samples == 0 {
            return Err(ConfigError::EmptyRingdown);
        }
        positive("observer_distance", self.observer_distance)?;
        finite("observer_inclination", self.observer_inclination)?;
        positive("critical_factor", self.critical_factor)?;

        Ok(())
    }

    /// Rescales the two masses so they sum to one, preserving their ratio.
    pub fn normalized(mut self) -> Self {
        let total = self.binary.mass1 + self.binary.mass2;
        self.binary.mass1 /= total;
        self.binary.mass2 /= total;
        self
    }
}

fn positive(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { parameter, value })
    }
}

fn unit_interval(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if value >= 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            parameter,
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

fn finite(parameter: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { parameter, value })
    }
}

fn finite_nonzero_axis(parameter: &'static str, axis: &Vector3<f64>) -> Result<(), ConfigError> {
    let norm = axis.norm();
    if norm.is_finite() && norm > MIN_AXIS_NORM {
        Ok(())
    } else {
        Err(ConfigError::DegenerateAxis { parameter })
    }
}

#[derive(Default)]
pub struct SimulationConfigBuilder {
    config: SimulationConfig,
}

impl SimulationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn masses(mut self, mass1: f64, mass2: f64) -> Self {
        self.config.binary.mass1 = mass1;
        self.config.binary.mass2 = mass2;
        self
    }
    pub fn spins(mut self, spin1: f64, spin2: f64) -> Self {
        self.config.binary.spin1 = spin1;
        self.config.binary.spin2 = spin2;
        self
    }
    pub fn spin_axes(mut self, axis1: Vector3<f64>, axis2: Vector3<f64>) -> Self {
        self.config.binary.spin_axis1 = axis1;
        self.config.binary.spin_axis2 = axis2;
        self
    }
    pub fn initial_separation(mut self, separation: f64) -> Self {
        self.config.binary.initial_separation = separation;
        self
    }
    pub fn eccentricity(mut self, eccentricity: f64) -> Self {
        self.config.binary.eccentricity = eccentricity;
        self
    }
    pub fn integrator(mut self, integrator: IntegratorConfig) -> Self {
        self.config.integrator = integrator;
        self
    }
    pub fn pn_orders(mut self, pn: PnToggles) -> Self {
        self.config.pn = pn;
        self
    }
    pub fn max_time(mut self, max_time: f64) -> Self {
        self.config.max_time = max_time;
        self
    }
    pub fn record_interval(mut self, interval: f64) -> Self {
        self.config.record_interval = interval;
        self
    }
    pub fn ringdown(mut self, duration: f64, samples: usize) -> Self {
        self.config.ringdown_duration = duration;
        self.config.ringdown_samples = samples;
        self
    }
    pub fn observer(mut self, distance: f64, inclination: f64) -> Self {
        self.config.observer_distance = distance;
        self.config.observer_inclination = inclination;
        self
    }
    pub fn critical_factor(mut self, factor: f64) -> Self {
        self.config.critical_factor = factor;
        self
    }

    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
