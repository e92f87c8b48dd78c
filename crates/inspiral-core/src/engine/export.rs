use crate::engine::state::{Phase, SimulationResult};
use nalgebra::Vector3;
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the strain table, mirroring the per-frame waveform data.
#[derive(Debug, Serialize)]
struct StrainRow {
    time: f64,
    phase: Phase,
    separation: f64,
    orbital_frequency: f64,
    h_plus: f64,
    h_cross: f64,
    amplitude: f64,
    frequency: f64,
}

fn vec3(v: &Vector3<f64>) -> serde_json::Value {
    json!([v.x, v.y, v.z])
}

/// Writes the full simulation result as a JSON document.
///
/// The layout is the stable wire contract consumed by downstream
/// visualization tooling: a `metadata` block, the binary `config`, the
/// `remnant` (null when no merger occurred), and the `frames` array with
/// per-body kinematics, orbital diagnostics, and strain.
pub fn write_json<W: Write>(result: &SimulationResult, writer: W) -> Result<(), ExportError> {
    let binary = &result.config.binary;

    let remnant = match &result.merger {
        Some(merger) => json!({
            "mass": merger.remnant.mass,
            "spin": merger.remnant.spin,
            "kick_velocity": merger.remnant.kick_velocity,
            "energy_radiated": merger.remnant.energy_radiated,
            "position": vec3(&merger.remnant.position),
            "qnm_frequency": merger.qnm.frequency,
            "qnm_damping_time": merger.qnm.damping_time,
        }),
        None => serde_json::Value::Null,
    };

    let frames: Vec<serde_json::Value> = result
        .frames
        .iter()
        .map(|f| {
            json!({
                "time": f.time,
                "phase": f.phase,
                "bh1": {
                    "mass": f.bh1.mass,
                    "position": vec3(&f.bh1.position),
                    "velocity": vec3(&f.bh1.velocity),
                },
                "bh2": {
                    "mass": f.bh2.mass,
                    "position": vec3(&f.bh2.position),
                    "velocity": vec3(&f.bh2.velocity),
                },
                "orbital": {
                    "separation": f.orbit.separation,
                    "frequency": f.orbit.orbital_frequency,
                    "energy": f.orbit.energy,
                },
                "gw": {
                    "h_plus": f.strain.h_plus,
                    "h_cross": f.strain.h_cross,
                    "amplitude": f.strain.amplitude,
                    "frequency": f.strain.frequency,
                },
            })
        })
        .collect();

    let document = json!({
        "metadata": {
            "units": "geometrized (G=c=1)",
            "mass_unit": "total_mass_M",
            "length_unit": "M",
            "time_unit": "M",
            "num_frames": result.frames.len(),
            "num_inspiral_frames": result.frame_counts.inspiral + result.frame_counts.merger,
            "num_ringdown_frames": result.frame_counts.ringdown + result.frame_counts.post_ringdown,
            "merger_occurred": result.merged(),
            "merger_time": result.merger.as_ref().map_or(0.0, |m| m.time),
            "total_gw_cycles": result.gw_cycles,
            "energy_radiated_fraction": result.total_energy_radiated,
            "step_count": result.step_count,
        },
        "config": {
            "m1": binary.mass1,
            "m2": binary.mass2,
            "chi1": binary.spin1,
            "chi2": binary.spin2,
            "initial_separation": binary.initial_separation,
            "eccentricity": binary.eccentricity,
        },
        "remnant": remnant,
        "frames": frames,
    });

    serde_json::to_writer_pretty(writer, &document)?;
    Ok(())
}

/// Writes the JSON document to a file, creating or truncating it.
pub fn write_json_file(
    result: &SimulationResult,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_json(result, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes the waveform as a flat CSV table, one row per frame.
pub fn write_strain_csv<W: Write>(result: &SimulationResult, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for f in &result.frames {
        csv_writer.serialize(StrainRow {
            time: f.time,
            phase: f.phase,
            separation: f.orbit.separation,
            orbital_frequency: f.orbit.orbital_frequency,
            h_plus: f.strain.h_plus,
            h_cross: f.strain.h_cross,
            amplitude: f.strain.amplitude,
            frequency: f.strain.frequency,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes the strain CSV to a file, creating or truncating it.
pub fn write_strain_csv_file(
    result: &SimulationResult,
    path: impl AsRef<Path>,
) -> Result<(), ExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_strain_csv(result, &mut writer)?;
    writer.flush()?;
    Ok(())
}
