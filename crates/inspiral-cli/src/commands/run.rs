use crate::cli::RunArgs;
use crate::config;
use crate::error::Result;
use crate::progress::CliProgressHandler;
use inspiral::core::models::units::{SPEED_OF_LIGHT_KMS, UnitConversion};
use inspiral::engine::export;
use inspiral::engine::progress::ProgressReporter;
use inspiral::engine::state::SimulationResult;
use inspiral::workflows::simulate;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run(args: RunArgs) -> Result<()> {
    let sim_config = config::build_config(&args)?;

    let reporter = if args.no_progress {
        ProgressReporter::new()
    } else {
        ProgressReporter::with_callback(CliProgressHandler::new().get_callback())
    };

    println!("Starting binary black hole simulation...");
    info!("Invoking the core simulation workflow...");
    let result = simulate::run(&sim_config, &reporter)?;

    print_summary(&result, args.solar_masses);

    ensure_parent_dir(&args.output)?;
    export::write_json_file(&result, &args.output)?;
    info!("Results written to {:?}", args.output);
    println!("✓ Results written to: {}", args.output.display());

    if let Some(csv_path) = &args.strain_csv {
        ensure_parent_dir(csv_path)?;
        export::write_strain_csv_file(&result, csv_path)?;
        info!("Waveform written to {:?}", csv_path);
        println!("✓ Waveform written to: {}", csv_path.display());
    }

    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn print_summary(result: &SimulationResult, solar_masses: Option<f64>) {
    let b = &result.config.binary;
    let total_mass = b.mass1 + b.mass2;
    let eta = b.mass1 * b.mass2 / (total_mass * total_mass);
    let chirp_mass = total_mass * eta.powf(0.6);

    println!();
    println!("================================================================");
    println!("  BINARY BLACK HOLE MERGER SIMULATION - RESULTS");
    println!("================================================================");
    println!();
    println!("Initial Conditions:");
    println!(
        "  m1 = {:.6}, m2 = {:.6} (q = {:.2})",
        b.mass1,
        b.mass2,
        b.mass1 / b.mass2
    );
    println!("  chi1 = {:.6}, chi2 = {:.6}", b.spin1, b.spin2);
    println!("  Initial separation = {:.1} M", b.initial_separation);
    println!("  Eccentricity = {:.2}", b.eccentricity);
    println!("  Symmetric mass ratio (eta) = {eta:.4}");
    println!("  Chirp mass = {chirp_mass:.4} M");
    println!();
    println!("Simulation Statistics:");
    println!("  Total frames: {}", result.frames.len());
    println!(
        "  Inspiral frames: {}",
        result.frame_counts.inspiral + result.frame_counts.merger
    );
    println!(
        "  Ringdown frames: {}",
        result.frame_counts.ringdown + result.frame_counts.post_ringdown
    );
    println!("  Total GW cycles: {:.1}", result.gw_cycles);
    println!();

    match &result.merger {
        Some(outcome) => {
            let remnant = &outcome.remnant;
            println!("Merger:");
            println!("  Merger time = {:.2} M", outcome.time);
            println!(
                "  Energy radiated = {:.4} M ({:.2}%)",
                result.total_energy_radiated,
                result.total_energy_radiated * 100.0
            );
            println!();
            println!("Remnant:");
            println!("  Mass = {:.6} M", remnant.mass);
            println!("  Spin = {:.6}", remnant.spin);
            println!(
                "  Kick velocity = {:.6} c ({:.1} km/s)",
                remnant.kick_velocity,
                remnant.kick_velocity * SPEED_OF_LIGHT_KMS
            );
            println!(
                "  Position = ({:.2}, {:.2}, {:.2})",
                remnant.position.x, remnant.position.y, remnant.position.z
            );
            println!();
            println!("Quasinormal Mode (l=2, m=2, n=0):");
            println!("  Frequency = {:.6} / M_f", outcome.qnm.frequency);
            println!("  Damping time = {:.6} M_f", outcome.qnm.damping_time);
            println!("  Amplitude = {:.6e}", outcome.qnm.amplitude);
        }
        None => {
            println!("  No merger occurred within simulation time.");
        }
    }

    if let Some(solar) = solar_masses {
        let units = UnitConversion::from_solar_masses(solar);
        println!();
        println!("Physical Scale (M = {solar:.1} M_sun):");
        println!("  1 M of length = {:.4e} m", units.length_m);
        println!("  1 M of time = {:.4e} s", units.time_s);
        if let Some(outcome) = &result.merger {
            println!("  Merger time = {:.4} s", outcome.time * units.time_s);
            println!(
                "  Remnant mass = {:.2} M_sun",
                outcome.remnant.mass * solar
            );
        }
    }

    println!();
    println!("================================================================");
}
