use crate::cli::EstimateArgs;
use crate::error::Result;
use inspiral::core::models::black_hole::BlackHole;
use inspiral::core::models::units::UnitConversion;
use inspiral::core::physics::orbit;
use inspiral::engine::config::SimulationConfigBuilder;
use inspiral::engine::error::EngineError;
use std::f64::consts::PI;

pub fn run(args: EstimateArgs) -> Result<()> {
    let config = SimulationConfigBuilder::new()
        .masses(args.mass1, args.mass2)
        .spins(args.spin1, args.spin2)
        .initial_separation(args.separation)
        .build()
        .map_err(EngineError::from)?
        .normalized();

    let b = &config.binary;
    let total_mass = b.mass1 + b.mass2;
    let eta = b.mass1 * b.mass2 / (total_mass * total_mass);
    let chirp_mass = total_mass * eta.powf(0.6);

    let bh1 = BlackHole::new(b.mass1, b.spin1);
    let bh2 = BlackHole::new(b.mass2, b.spin2);

    let omega = orbit::kepler_frequency(total_mass, b.initial_separation);
    let gw_frequency = omega / PI;
    let merger_time = orbit::time_to_merger_estimate(eta, total_mass, b.initial_separation);

    println!();
    println!("Analytic Estimates (masses normalized to M = 1):");
    println!(
        "  m1 = {:.4}, m2 = {:.4} (q = {:.2})",
        b.mass1,
        b.mass2,
        b.mass1 / b.mass2
    );
    println!("  Symmetric mass ratio (eta) = {eta:.4}");
    println!("  Chirp mass = {chirp_mass:.4} M");
    println!(
        "  Schwarzschild radii: r_s1 = {:.4} M, r_s2 = {:.4} M",
        bh1.schwarzschild_radius(),
        bh2.schwarzschild_radius()
    );
    println!(
        "  ISCO radii: r_isco1 = {:.4} M, r_isco2 = {:.4} M",
        bh1.isco_radius(),
        bh2.isco_radius()
    );
    println!();
    println!("At r = {:.1} M:", b.initial_separation);
    println!("  Orbital angular frequency = {omega:.6} / M");
    println!("  GW frequency = {gw_frequency:.6} / M");
    println!("  Time to merger (Peters) = {merger_time:.1} M");
    println!();

    let units = UnitConversion::from_solar_masses(args.solar_masses);
    println!("Physical Scale (M = {:.1} M_sun):", args.solar_masses);
    println!("  1 M of length = {:.4e} m", units.length_m);
    println!("  1 M of time = {:.4e} s", units.time_s);
    println!("  GW frequency = {:.1} Hz", gw_frequency / units.time_s);
    println!("  Time to merger = {:.2} s", merger_time * units.time_s);

    Ok(())
}
