//! Steps, their inputs and the transition table.

use crate::flags::{Milestone, Stage};
use crate::inventory::PartRole;
use crate::passenger::Passenger;
use trebuchet_error::AssemblyError;

/// One operation of the build sequence.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum Step {
    /// Check that every part is on hand
    CheckInventory,
    /// Lash the support beams together
    BuildFrame,
    /// Mount the axle on the frame
    AttachAxle,
    /// Mount the lever beam on the axle
    AttachLever,
    /// Tie the sling to the lever
    AttachSling,
    /// Load the counterweight
    SecureCounterweight,
    /// Mount the ants
    MountPullForce,
    /// Load a passenger
    Arm,
    /// Release
    Fire,
}

/// Transition table: each step, the milestone it waits on, and the milestone
/// it reaches.
const TRANSITIONS: [(Step, Option<Milestone>, Option<Milestone>); 9] = [
    (Step::CheckInventory, None, None),
    (Step::BuildFrame, None, Some(Milestone::FrameBuilt)),
    (
        Step::AttachAxle,
        Some(Milestone::FrameBuilt),
        Some(Milestone::AxleAttached),
    ),
    (
        Step::AttachLever,
        Some(Milestone::AxleAttached),
        Some(Milestone::LeverAttached),
    ),
    (
        Step::AttachSling,
        Some(Milestone::LeverAttached),
        Some(Milestone::SlingAttached),
    ),
    (
        Step::SecureCounterweight,
        Some(Milestone::SlingAttached),
        Some(Milestone::CounterweightSecured),
    ),
    (
        Step::MountPullForce,
        Some(Milestone::CounterweightSecured),
        Some(Milestone::PullForceMounted),
    ),
    (Step::Arm, Some(Milestone::Assembled), Some(Milestone::Armed)),
    (Step::Fire, Some(Milestone::Armed), Some(Milestone::Fired)),
];

impl Step {
    /// The build steps between the parts check and arming.
    pub const ASSEMBLY: [Step; 6] = [
        Step::BuildFrame,
        Step::AttachAxle,
        Step::AttachLever,
        Step::AttachSling,
        Step::SecureCounterweight,
        Step::MountPullForce,
    ];

    /// Milestone that must be reached before this step can run.
    pub fn requires(self) -> Option<Milestone> {
        self.entry().1
    }

    /// Milestone this step reaches.
    pub fn reaches(self) -> Option<Milestone> {
        self.entry().2
    }

    /// Short name of the step.
    pub fn label(self) -> &'static str {
        self.into()
    }

    fn entry(self) -> (Step, Option<Milestone>, Option<Milestone>) {
        TRANSITIONS
            .iter()
            .copied()
            .find(|(step, _, _)| *step == self)
            .unwrap_or((self, None, None))
    }
}

/// A step together with the input it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepInput {
    /// Check that every part is on hand
    CheckInventory,
    /// Lash the support beams together
    BuildFrame,
    /// Mount the axle
    AttachAxle,
    /// Mount the lever beam
    AttachLever,
    /// Tie on the sling
    AttachSling,
    /// Load the counterweight
    SecureCounterweight,
    /// Mount the ants
    MountPullForce,
    /// Load the named passenger
    Arm(String),
    /// Release if the confirmation key is `f`
    Fire(char),
}

impl StepInput {
    /// The step this input drives.
    pub fn step(&self) -> Step {
        match self {
            StepInput::CheckInventory => Step::CheckInventory,
            StepInput::BuildFrame => Step::BuildFrame,
            StepInput::AttachAxle => Step::AttachAxle,
            StepInput::AttachLever => Step::AttachLever,
            StepInput::AttachSling => Step::AttachSling,
            StepInput::SecureCounterweight => Step::SecureCounterweight,
            StepInput::MountPullForce => Step::MountPullForce,
            StepInput::Arm(_) => Step::Arm,
            StepInput::Fire(_) => Step::Fire,
        }
    }

    /// Input for a step that takes no argument.
    ///
    /// Returns `None` for [`Step::Arm`] and [`Step::Fire`], which need a name
    /// or a confirmation key.
    pub fn bare(step: Step) -> Option<Self> {
        match step {
            Step::CheckInventory => Some(StepInput::CheckInventory),
            Step::BuildFrame => Some(StepInput::BuildFrame),
            Step::AttachAxle => Some(StepInput::AttachAxle),
            Step::AttachLever => Some(StepInput::AttachLever),
            Step::AttachSling => Some(StepInput::AttachSling),
            Step::SecureCounterweight => Some(StepInput::SecureCounterweight),
            Step::MountPullForce => Some(StepInput::MountPullForce),
            Step::Arm | Step::Fire => None,
        }
    }
}

/// Result of a passed parts check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartsReport {
    /// Roles checked, in order
    pub roles: Vec<PartRole>,
    /// Beams in the bundle
    pub beam_count: usize,
}

/// Result of lashing the frame together.
#[derive(Debug, Clone)]
pub struct FrameReport {
    /// Beams in the frame
    pub beams_lashed: usize,
    /// Meters of rope consumed
    pub rope_used: u32,
    /// Meters of rope left over
    pub rope_remaining: u32,
    /// Attach calls skipped for lack of rope
    pub shortfalls: Vec<AssemblyError>,
}

/// How a firing attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum LaunchOutcome {
    /// The passenger is airborne
    Launched,
    /// The passenger stayed put
    Aborted,
}

/// What a step did.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Parts check passed
    PartsChecked(PartsReport),
    /// Frame lashed together
    FrameBuilt(FrameReport),
    /// A part was built in
    Attached(PartRole),
    /// The last part went on and the trebuchet is complete
    Assembled,
    /// Passenger loaded
    Armed(Passenger),
    /// Firing attempt finished
    Fired(LaunchOutcome),
}

/// One move through the state machine.
#[derive(Debug, Clone)]
pub struct Transition {
    /// Step taken
    pub step: Step,
    /// Stage before the step
    pub from: Stage,
    /// Stage after the step
    pub to: Stage,
    /// What the step did
    pub effect: Effect,
}
