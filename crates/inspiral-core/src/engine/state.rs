use crate::core::models::black_hole::BlackHole;
use crate::core::physics::orbit::OrbitalParams;
use crate::core::physics::remnant::{QnmParams, RemnantProperties};
use crate::core::physics::waveform::GwStrain;
use crate::engine::config::SimulationConfig;
use serde::{Serialize, Serializer};

/// The stage of the coalescence a frame belongs to.
///
/// The ordering follows the physical evolution, so later stages compare
/// greater than earlier ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Phase {
    Inspiral,
    Merger,
    Ringdown,
    /// Ringdown samples whose strain has decayed below measurable levels.
    PostRingdown,
}

impl Phase {
    /// The integer tag used in exported data.
    #[inline]
    pub fn tag(&self) -> u8 {
        match self {
            Phase::Inspiral => 0,
            Phase::Merger => 1,
            Phase::Ringdown => 2,
            Phase::PostRingdown => 3,
        }
    }
}

impl Serialize for Phase {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.tag())
    }
}

/// One recorded snapshot of the system.
///
/// During the ringdown the remnant occupies `bh1` and `bh2` is zeroed out;
/// the orbital parameters are likewise zeroed apart from the frequency,
/// which carries the quasinormal mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationFrame {
    pub time: f64,
    pub bh1: BlackHole,
    pub bh2: BlackHole,
    pub orbit: OrbitalParams,
    pub strain: GwStrain,
    pub phase: Phase,
}

/// What the merger produced, present only when the binary actually merged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergerOutcome {
    /// The coordinate time of the merger, in units of M.
    pub time: f64,
    pub remnant: RemnantProperties,
    pub qnm: QnmParams,
}

/// Frame totals per phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameCounts {
    pub inspiral: usize,
    pub merger: usize,
    pub ringdown: usize,
    pub post_ringdown: usize,
}

impl FrameCounts {
    pub fn tally(frames: &[SimulationFrame]) -> Self {
        let mut counts = Self::default();
        for frame in frames {
            match frame.phase {
                Phase::Inspiral => counts.inspiral += 1,
                Phase::Merger => counts.merger += 1,
                Phase::Ringdown => counts.ringdown += 1,
                Phase::PostRingdown => counts.post_ringdown += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.inspiral + self.merger + self.ringdown + self.post_ringdown
    }
}

/// The complete output of a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// The validated, mass-normalized configuration the run used.
    pub config: SimulationConfig,
    /// All recorded frames in time order.
    pub frames: Vec<SimulationFrame>,
    /// The merger outcome, or `None` when the run hit its time limit first.
    pub merger: Option<MergerOutcome>,
    /// The fraction of the total mass radiated away, zero without a merger.
    pub total_energy_radiated: f64,
    /// Accumulated gravitational wave cycles over the inspiral.
    pub gw_cycles: f64,
    /// The time of the last recorded frame.
    pub final_time: f64,
    /// The number of integrator steps taken.
    pub step_count: u64,
    pub frame_counts: FrameCounts,
}

impl SimulationResult {
    #[inline]
    pub fn merged(&self) -> bool {
        self.merger.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_with_phase(phase: Phase) -> SimulationFrame {
        SimulationFrame {
            time: 0.0,
            bh1: BlackHole::default(),
            bh2: BlackHole::default(),
            orbit: OrbitalParams::default(),
            strain: GwStrain::default(),
            phase,
        }
    }

    #[test]
    fn phases_are_ordered_by_physical_evolution() {
        assert!(Phase::Inspiral < Phase::Merger);
        assert!(Phase::Merger < Phase::Ringdown);
        assert!(Phase::Ringdown < Phase::PostRingdown);
    }

    #[test]
    fn phases_serialize_to_integer_tags() {
        let tags: Vec<serde_json::Value> = [
            Phase::Inspiral,
            Phase::Merger,
            Phase::Ringdown,
            Phase::PostRingdown,
        ]
        .iter()
        .map(|p| serde_json::to_value(p).unwrap())
        .collect();

        let expected: Vec<serde_json::Value> = vec![0.into(), 1.into(), 2.into(), 3.into()];
        assert_eq!(tags, expected);
    }

    #[test]
    fn frame_counts_tally_each_phase() {
        let frames = vec![
            frame_with_phase(Phase::Inspiral),
            frame_with_phase(Phase::Inspiral),
            frame_with_phase(Phase::Merger),
            frame_with_phase(Phase::Ringdown),
            frame_with_phase(Phase::Ringdown),
            frame_with_phase(Phase::PostRingdown),
        ];

        let counts = FrameCounts::tally(&frames);
        assert_eq!(counts.inspiral, 2);
        assert_eq!(counts.merger, 1);
        assert_eq!(counts.ringdown, 2);
        assert_eq!(counts.post_ringdown, 1);
        assert_eq!(counts.total(), frames.len());
    }
}
