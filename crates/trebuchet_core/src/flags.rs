//! Build progress.

/// A point of progress in the build, in the order it must be reached.
///
/// The string form names what a later step is waiting on, as reported in
/// precondition errors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum Milestone {
    /// Frame lashed together
    #[strum(serialize = "frame")]
    FrameBuilt,
    /// Axle mounted on the frame
    #[strum(serialize = "axle")]
    AxleAttached,
    /// Lever beam mounted on the axle
    #[strum(serialize = "lever")]
    LeverAttached,
    /// Sling tied to the lever
    #[strum(serialize = "sling")]
    SlingAttached,
    /// Counterweight on the lever
    #[strum(serialize = "counterweight")]
    CounterweightSecured,
    /// Ants mounted to the lever
    #[strum(serialize = "pull_force")]
    PullForceMounted,
    /// Everything is built
    #[strum(serialize = "assembled")]
    Assembled,
    /// Passenger loaded, counterweight raised
    #[strum(serialize = "armed")]
    Armed,
    /// Passenger launched
    #[strum(serialize = "fired")]
    Fired,
}

impl Milestone {
    /// Short name of the milestone.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

/// Which milestones have been reached.
///
/// Every flag except `armed` goes from unset to set once and stays set.
/// `armed` is cleared again by a launch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildFlags {
    parts_checked: bool,
    frame_built: bool,
    axle_attached: bool,
    lever_attached: bool,
    sling_attached: bool,
    counterweight_secured: bool,
    pull_force_mounted: bool,
    assembled: bool,
    armed: bool,
    fired: bool,
}

impl BuildFlags {
    /// Whether `milestone` has been reached.
    pub fn is_set(&self, milestone: Milestone) -> bool {
        *self.slot(milestone)
    }

    /// Whether the parts check has passed.
    ///
    /// The check is advisory and gates no other step.
    pub fn parts_checked(&self) -> bool {
        self.parts_checked
    }

    pub(crate) fn set(&mut self, milestone: Milestone) {
        *self.slot_mut(milestone) = true;
    }

    pub(crate) fn clear(&mut self, milestone: Milestone) {
        *self.slot_mut(milestone) = false;
    }

    pub(crate) fn mark_parts_checked(&mut self) {
        self.parts_checked = true;
    }

    fn slot(&self, milestone: Milestone) -> &bool {
        match milestone {
            Milestone::FrameBuilt => &self.frame_built,
            Milestone::AxleAttached => &self.axle_attached,
            Milestone::LeverAttached => &self.lever_attached,
            Milestone::SlingAttached => &self.sling_attached,
            Milestone::CounterweightSecured => &self.counterweight_secured,
            Milestone::PullForceMounted => &self.pull_force_mounted,
            Milestone::Assembled => &self.assembled,
            Milestone::Armed => &self.armed,
            Milestone::Fired => &self.fired,
        }
    }

    fn slot_mut(&mut self, milestone: Milestone) -> &mut bool {
        match milestone {
            Milestone::FrameBuilt => &mut self.frame_built,
            Milestone::AxleAttached => &mut self.axle_attached,
            Milestone::LeverAttached => &mut self.lever_attached,
            Milestone::SlingAttached => &mut self.sling_attached,
            Milestone::CounterweightSecured => &mut self.counterweight_secured,
            Milestone::PullForceMounted => &mut self.pull_force_mounted,
            Milestone::Assembled => &mut self.assembled,
            Milestone::Armed => &mut self.armed,
            Milestone::Fired => &mut self.fired,
        }
    }
}

/// Where the machine is in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Stage {
    /// Nothing done yet
    Initialized,
    /// Parts check passed
    PartsChecked,
    /// Frame lashed together
    FrameBuilt,
    /// Axle mounted
    AxleAttached,
    /// Lever mounted
    LeverAttached,
    /// Sling tied on
    SlingAttached,
    /// Counterweight on the lever
    CounterweightSecured,
    /// Fully assembled
    Assembled,
    /// Passenger loaded
    Armed,
    /// Passenger launched
    Fired,
    /// Launch called off
    Aborted,
}

impl Stage {
    /// Derives the stage from the flags.
    pub fn from_flags(flags: &BuildFlags, aborted: bool) -> Self {
        use Milestone::*;

        if flags.is_set(Fired) {
            Stage::Fired
        } else if aborted {
            Stage::Aborted
        } else if flags.is_set(Armed) {
            Stage::Armed
        } else if flags.is_set(Assembled) {
            Stage::Assembled
        } else if flags.is_set(CounterweightSecured) {
            Stage::CounterweightSecured
        } else if flags.is_set(SlingAttached) {
            Stage::SlingAttached
        } else if flags.is_set(LeverAttached) {
            Stage::LeverAttached
        } else if flags.is_set(AxleAttached) {
            Stage::AxleAttached
        } else if flags.is_set(FrameBuilt) {
            Stage::FrameBuilt
        } else if flags.parts_checked() {
            Stage::PartsChecked
        } else {
            Stage::Initialized
        }
    }
}
