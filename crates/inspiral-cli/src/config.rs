use crate::cli::RunArgs;
use crate::error::{CliError, Result};
use inspiral::core::physics::acceleration::PnToggles;
use inspiral::engine::config::{IntegratorConfig, SimulationConfig, SimulationConfigBuilder};
use inspiral::engine::error::EngineError;
use nalgebra::Vector3;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// The on-disk TOML layout. Every field is optional so a config file only
/// has to name the parameters it changes.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub binary: Option<FileBinaryConfig>,
    pub integrator: Option<FileIntegratorConfig>,
    pub simulation: Option<FileSimulationConfig>,
    pub observer: Option<FileObserverConfig>,
    pub pn: Option<FilePnConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileBinaryConfig {
    pub mass1: Option<f64>,
    pub mass2: Option<f64>,
    pub spin1: Option<f64>,
    pub spin2: Option<f64>,
    #[serde(rename = "spin-axis1")]
    pub spin_axis1: Option<[f64; 3]>,
    #[serde(rename = "spin-axis2")]
    pub spin_axis2: Option<[f64; 3]>,
    pub separation: Option<f64>,
    pub eccentricity: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileIntegratorConfig {
    #[serde(rename = "dt-initial")]
    pub dt_initial: Option<f64>,
    #[serde(rename = "dt-min")]
    pub dt_min: Option<f64>,
    #[serde(rename = "dt-max")]
    pub dt_max: Option<f64>,
    #[serde(rename = "safety-factor")]
    pub safety_factor: Option<f64>,
    pub adaptive: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSimulationConfig {
    #[serde(rename = "max-time")]
    pub max_time: Option<f64>,
    #[serde(rename = "record-interval")]
    pub record_interval: Option<f64>,
    #[serde(rename = "ringdown-duration")]
    pub ringdown_duration: Option<f64>,
    #[serde(rename = "ringdown-samples")]
    pub ringdown_samples: Option<usize>,
    #[serde(rename = "critical-factor")]
    pub critical_factor: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileObserverConfig {
    pub distance: Option<f64>,
    pub inclination: Option<f64>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FilePnConfig {
    #[serde(rename = "1pn")]
    pub pn1: Option<bool>,
    #[serde(rename = "2pn")]
    pub pn2: Option<bool>,
    #[serde(rename = "radiation-reaction")]
    pub radiation_reaction: Option<bool>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration file from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|source| CliError::ConfigParsing {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Builds the validated simulation configuration by layering CLI flags over
/// the config file over the library defaults.
pub fn build_config(args: &RunArgs) -> Result<SimulationConfig> {
    let file = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let defaults = SimulationConfig::default();
    let binary = file.binary.unwrap_or_default();
    let integrator_file = file.integrator.unwrap_or_default();
    let simulation = file.simulation.unwrap_or_default();
    let observer = file.observer.unwrap_or_default();
    let pn_file = file.pn.unwrap_or_default();

    let integrator = IntegratorConfig {
        dt_initial: integrator_file
            .dt_initial
            .unwrap_or(defaults.integrator.dt_initial),
        dt_min: integrator_file.dt_min.unwrap_or(defaults.integrator.dt_min),
        dt_max: integrator_file.dt_max.unwrap_or(defaults.integrator.dt_max),
        safety_factor: integrator_file
            .safety_factor
            .unwrap_or(defaults.integrator.safety_factor),
        adaptive: integrator_file
            .adaptive
            .unwrap_or(defaults.integrator.adaptive),
    };

    let pn = PnToggles {
        pn1: !args.no_pn1 && pn_file.pn1.unwrap_or(true),
        pn2: !args.no_pn2 && pn_file.pn2.unwrap_or(true),
        pn25: !args.no_radiation && pn_file.radiation_reaction.unwrap_or(true),
    };

    let axis1 = binary
        .spin_axis1
        .map_or(defaults.binary.spin_axis1, |a| Vector3::new(a[0], a[1], a[2]));
    let axis2 = binary
        .spin_axis2
        .map_or(defaults.binary.spin_axis2, |a| Vector3::new(a[0], a[1], a[2]));

    let config = SimulationConfigBuilder::new()
        .masses(
            args.mass1.or(binary.mass1).unwrap_or(defaults.binary.mass1),
            args.mass2.or(binary.mass2).unwrap_or(defaults.binary.mass2),
        )
        .spins(
            args.spin1.or(binary.spin1).unwrap_or(defaults.binary.spin1),
            args.spin2.or(binary.spin2).unwrap_or(defaults.binary.spin2),
        )
        .spin_axes(axis1, axis2)
        .initial_separation(
            args.separation
                .or(binary.separation)
                .unwrap_or(defaults.binary.initial_separation),
        )
        .eccentricity(
            args.eccentricity
                .or(binary.eccentricity)
                .unwrap_or(defaults.binary.eccentricity),
        )
        .integrator(integrator)
        .pn_orders(pn)
        .max_time(args.max_time.or(simulation.max_time).unwrap_or(defaults.max_time))
        .record_interval(
            args.record_interval
                .or(simulation.record_interval)
                .unwrap_or(defaults.record_interval),
        )
        .ringdown(
            args.ringdown_duration
                .or(simulation.ringdown_duration)
                .unwrap_or(defaults.ringdown_duration),
            args.ringdown_samples
                .or(simulation.ringdown_samples)
                .unwrap_or(defaults.ringdown_samples),
        )
        .observer(
            args.distance
                .or(observer.distance)
                .unwrap_or(defaults.observer_distance),
            args.inclination
                .or(observer.inclination)
                .unwrap_or(defaults.observer_inclination),
        )
        .critical_factor(
            simulation
                .critical_factor
                .unwrap_or(defaults.critical_factor),
        )
        .build()
        .map_err(EngineError::from)?;

    Ok(config)
}
