use crate::core::models::black_hole::BlackHole;
use crate::core::physics::orbit::{self, OrbitalParams};
use crate::core::physics::waveform;
use crate::engine::config::SimulationConfig;
use crate::engine::error::EngineError;
use crate::engine::integrator::{self, BinaryState};
use crate::engine::merger;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::state::{FrameCounts, MergerOutcome, Phase, SimulationFrame, SimulationResult};
use nalgebra::Vector3;
use std::f64::consts::PI;
use tracing::{info, instrument, warn};

/// Integrator steps between progress reports during the inspiral.
const PROGRESS_STEP_STRIDE: u64 = 10_000;
/// Ringdown samples between progress reports.
const RINGDOWN_PROGRESS_STRIDE: usize = 50;
/// Hard cap on integrator steps.
const MAX_STEPS: u64 = 2_000_000_000;
/// Separation, in total masses, below which recording switches to the
/// dense plunge cadence.
const PLUNGE_SEPARATION_FACTOR: f64 = 10.0;
/// Divisor applied to the record interval during the plunge.
const PLUNGE_RECORD_DIVISOR: f64 = 4000.0;
/// Strain amplitude below which the ringdown counts as rung down.
const SILENCE_AMPLITUDE: f64 = 1e-30;

/// Runs the full inspiral-merger-ringdown pipeline.
///
/// Validates and mass-normalizes the configuration, integrates the
/// post-Newtonian equations of motion until merger or the time limit,
/// synthesizes the quasinormal ringdown when a merger occurred, and returns
/// the recorded frames together with the merger outcome.
#[instrument(skip_all, name = "simulate")]
pub fn run(
    config: &SimulationConfig,
    reporter: &ProgressReporter,
) -> Result<SimulationResult, EngineError> {
    info!("Starting binary black hole simulation");

    // === Phase 1: Configuration & Initial Conditions ===

    config.validate()?;
    let config = config.normalized();
    let binary = &config.binary;
    let total_mass = binary.mass1 + binary.mass2;

    let (mut bh1, mut bh2, mut state) = initialize_binary(&config);
    info!(
        mass1 = binary.mass1,
        mass2 = binary.mass2,
        separation = binary.initial_separation,
        "Binary system initialized"
    );

    let initial_orbit = orbit::orbital_params(&bh1, &bh2);
    let merger_estimate = orbit::time_to_merger_estimate(
        initial_orbit.symmetric_mass_ratio,
        total_mass,
        initial_orbit.separation,
    );

    // === Phase 2: Inspiral Integration ===

    reporter.report(Progress::PhaseStart { name: "inspiral" });

    let derivative =
        |s: &BinaryState| integrator::pn_derivative(s, binary.mass1, binary.mass2, &config.pn);

    let mut frames: Vec<SimulationFrame> = Vec::new();
    let mut merger_outcome: Option<MergerOutcome> = None;
    let mut last_record_time = -config.record_interval;
    let mut last_phase_angle = 0.0;
    let mut gw_cycles = 0.0;
    let mut step_count: u64 = 0;

    while state.time < config.max_time {
        bh1.position = state.pos1;
        bh1.velocity = state.vel1;
        bh2.position = state.pos2;
        bh2.velocity = state.vel2;

        if merger::should_merge(&bh1, &bh2, config.critical_factor) {
            let frame = make_frame(state.time, &bh1, &bh2, &config, Phase::Merger);
            // Undo the 1/D falloff to recover the amplitude at the source.
            let source_amplitude = frame.strain.amplitude * config.observer_distance;
            frames.push(frame);

            let (remnant, qnm) = merger::merger_event(&bh1, &bh2, source_amplitude);
            info!(
                time = state.time,
                mass = remnant.mass,
                spin = remnant.spin,
                "Merger detected"
            );
            reporter.report(Progress::MergerDetected { time: state.time });
            merger_outcome = Some(MergerOutcome {
                time: state.time,
                remnant,
                qnm,
            });
            break;
        }

        let effective_interval = if state.separation() < PLUNGE_SEPARATION_FACTOR * total_mass {
            config.record_interval / PLUNGE_RECORD_DIVISOR
        } else {
            config.record_interval
        };
        if state.time - last_record_time >= effective_interval {
            let frame = make_frame(state.time, &bh1, &bh2, &config, Phase::Inspiral);
            gw_cycles += wrapped_phase_step(frame.orbit.orbital_phase, &mut last_phase_angle);
            frames.push(frame);
            last_record_time = state.time;
        }

        if step_count % PROGRESS_STEP_STRIDE == 0 {
            let fraction = (state.time / merger_estimate).min(1.0);
            reporter.report(Progress::Advance {
                time: state.time,
                fraction,
            });
        }

        let dt = integrator::adaptive_timestep(&state, &config.integrator, total_mass);
        state = integrator::rk4_step(&state, dt, derivative);
        step_count += 1;

        if step_count > MAX_STEPS {
            warn!(
                time = state.time,
                "Step limit reached before merger or time limit"
            );
            break;
        }
    }

    reporter.report(Progress::PhaseFinish);

    // === Phase 3: Ringdown Synthesis ===

    if let Some(outcome) = &merger_outcome {
        synthesize_ringdown(&mut frames, outcome, &config, reporter);
    }

    // === Phase 4: Result Assembly ===

    let frame_counts = FrameCounts::tally(&frames);
    let total_energy_radiated = merger_outcome
        .as_ref()
        .map_or(0.0, |m| m.remnant.energy_radiated);
    let final_time = frames.last().map_or(0.0, |f| f.time);

    info!(
        frames = frames.len(),
        steps = step_count,
        merged = merger_outcome.is_some(),
        "Simulation complete"
    );

    Ok(SimulationResult {
        config,
        frames,
        merger: merger_outcome,
        total_energy_radiated,
        gw_cycles,
        final_time,
        step_count,
        frame_counts,
    })
}

/// Places the two holes on the x-axis around the center of mass, moving in
/// the x-z plane.
fn initialize_binary(config: &SimulationConfig) -> (BlackHole, BlackHole, BinaryState) {
    let b = &config.binary;
    let total_mass = b.mass1 + b.mass2;
    let r0 = b.initial_separation;

    // Kepler circular speed, scaled up for eccentric orbits.
    let v_rel =
        (total_mass / r0).sqrt() * ((1.0 + b.eccentricity) / (1.0 - b.eccentricity)).sqrt();

    let mut bh1 = BlackHole::new(b.mass1, b.spin1);
    bh1.position = Vector3::new(r0 * b.mass2 / total_mass, 0.0, 0.0);
    bh1.velocity = Vector3::new(0.0, 0.0, v_rel * b.mass2 / total_mass);
    bh1.spin_axis = b.spin_axis1.normalize();

    let mut bh2 = BlackHole::new(b.mass2, b.spin2);
    bh2.position = Vector3::new(-r0 * b.mass1 / total_mass, 0.0, 0.0);
    bh2.velocity = Vector3::new(0.0, 0.0, -v_rel * b.mass1 / total_mass);
    bh2.spin_axis = b.spin_axis2.normalize();

    let state = BinaryState {
        pos1: bh1.position,
        vel1: bh1.velocity,
        pos2: bh2.position,
        vel2: bh2.velocity,
        time: 0.0,
    };

    (bh1, bh2, state)
}

fn make_frame(
    time: f64,
    bh1: &BlackHole,
    bh2: &BlackHole,
    config: &SimulationConfig,
    phase: Phase,
) -> SimulationFrame {
    SimulationFrame {
        time,
        bh1: *bh1,
        bh2: *bh2,
        orbit: orbit::orbital_params(bh1, bh2),
        strain: waveform::quadrupole_strain(
            bh1,
            bh2,
            config.observer_distance,
            config.observer_inclination,
        ),
        phase,
    }
}

/// Accumulates the gravitational wave cycles between two recorded phase
/// angles, unwrapping the branch cut at +/- pi. One orbital half-turn is one
/// full wave cycle.
fn wrapped_phase_step(phase: f64, last_phase: &mut f64) -> f64 {
    let mut diff = phase - *last_phase;
    if diff > PI {
        diff -= 2.0 * PI;
    }
    if diff < -PI {
        diff += 2.0 * PI;
    }
    *last_phase = phase;
    diff.abs() / PI
}

/// Appends the exponentially damped quasinormal tail after the merger.
fn synthesize_ringdown(
    frames: &mut Vec<SimulationFrame>,
    outcome: &MergerOutcome,
    config: &SimulationConfig,
    reporter: &ProgressReporter,
) {
    reporter.report(Progress::PhaseStart { name: "ringdown" });

    let remnant = &outcome.remnant;
    let dt = config.ringdown_duration / config.ringdown_samples as f64;

    for i in 0..config.ringdown_samples {
        let t_after_merger = i as f64 * dt;
        let strain = waveform::ringdown_strain(
            &outcome.qnm,
            t_after_merger,
            config.observer_distance,
            config.observer_inclination,
        );

        let remnant_hole = BlackHole {
            mass: remnant.mass,
            spin: remnant.spin,
            position: remnant.position + remnant.velocity * t_after_merger,
            velocity: remnant.velocity,
            spin_axis: Vector3::y(),
        };

        let phase = if strain.amplitude > SILENCE_AMPLITUDE {
            Phase::Ringdown
        } else {
            Phase::PostRingdown
        };

        frames.push(SimulationFrame {
            time: outcome.time + t_after_merger,
            bh1: remnant_hole,
            bh2: BlackHole::default(),
            orbit: OrbitalParams {
                orbital_frequency: outcome.qnm.frequency,
                ..Default::default()
            },
            strain,
            phase,
        });

        if i % RINGDOWN_PROGRESS_STRIDE == 0 {
            reporter.report(Progress::Advance {
                time: outcome.time + t_after_merger,
                fraction: i as f64 / config.ringdown_samples as f64,
            });
        }
    }

    reporter.report(Progress::PhaseFinish);
}
