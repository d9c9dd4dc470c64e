//! The assembly state machine.

use crate::flags::{BuildFlags, Milestone, Stage};
use crate::inventory::{Inventory, PartRole, PartStatus};
use crate::passenger::Passenger;
use crate::step::{Effect, FrameReport, LaunchOutcome, PartsReport, Step, StepInput, Transition};
use trebuchet_error::{AssemblyError, AssemblyErrorKind, TrebuchetResult};
use tracing::{debug, info, instrument, warn};

/// Beams needed for the frame.
pub const BEAMS_NEEDED: usize = 6;

/// Meters of rope used to lash each beam.
pub const ROPE_PER_BEAM: u32 = 15;

/// The lever beam must be longer than this, in meters.
pub const MIN_LEVER_LENGTH: u32 = 20;

/// How high the ants raise the counterweight, in meters.
pub const COUNTERWEIGHT_MAX_HEIGHT: u32 = 12;

/// Walks an inventory through the build, arm and fire sequence.
///
/// Steps must run in order: each one fails with a precondition error until the
/// step before it has completed, and fails with `AlreadyCompleted` if it has
/// already run. The one exception is the parts check, which can run at any
/// time and gates nothing.
#[derive(Debug, Clone)]
pub struct AssemblyStateMachine {
    inventory: Inventory,
    flags: BuildFlags,
    aborted: bool,
    passenger: Option<Passenger>,
}

impl AssemblyStateMachine {
    /// Creates a machine with the standard inventory and `ant_count` ants.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `ant_count` is zero.
    pub fn new(ant_count: u64) -> TrebuchetResult<Self> {
        Ok(Self::with_inventory(Inventory::standard(ant_count)?))
    }

    /// Creates a machine around a custom inventory.
    pub fn with_inventory(inventory: Inventory) -> Self {
        Self {
            inventory,
            flags: BuildFlags::default(),
            aborted: false,
            passenger: None,
        }
    }

    /// Parts on hand.
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Milestones reached so far.
    pub fn flags(&self) -> &BuildFlags {
        &self.flags
    }

    /// Current stage, derived from the flags.
    pub fn stage(&self) -> Stage {
        Stage::from_flags(&self.flags, self.aborted)
    }

    /// Passenger in the sling, between arming and a launch.
    pub fn passenger(&self) -> Option<&Passenger> {
        self.passenger.as_ref()
    }

    /// Whether the trebuchet is loaded and ready to release.
    pub fn is_armed(&self) -> bool {
        self.flags.is_set(Milestone::Armed)
    }

    /// Whether a passenger has been launched.
    pub fn is_fired(&self) -> bool {
        self.flags.is_set(Milestone::Fired)
    }

    /// Whether a part is missing, on hand, or built in.
    pub fn part_status(&self, role: PartRole) -> PartStatus {
        let milestone = match role {
            PartRole::SupportBeams | PartRole::Rope => Milestone::FrameBuilt,
            PartRole::Axle => Milestone::AxleAttached,
            PartRole::LeverBeam => Milestone::LeverAttached,
            PartRole::Sling => Milestone::SlingAttached,
            PartRole::Counterweight => Milestone::CounterweightSecured,
            PartRole::PullForce => Milestone::PullForceMounted,
        };

        if self.flags.is_set(milestone) {
            PartStatus::Attached
        } else if self.inventory.part(role).is_present() {
            PartStatus::Present
        } else {
            PartStatus::Missing
        }
    }

    /// Runs one step through the transition table.
    ///
    /// # Errors
    ///
    /// Returns whatever error the step itself returns.
    #[instrument(skip(self), fields(stage = %self.stage()))]
    pub fn advance(&mut self, input: StepInput) -> TrebuchetResult<Transition> {
        let step = input.step();
        let from = self.stage();

        let effect = match input {
            StepInput::CheckInventory => Effect::PartsChecked(self.check_inventory()?),
            StepInput::BuildFrame => Effect::FrameBuilt(self.build_frame()?),
            StepInput::AttachAxle => {
                self.attach_axle()?;
                Effect::Attached(PartRole::Axle)
            }
            StepInput::AttachLever => {
                self.attach_lever()?;
                Effect::Attached(PartRole::LeverBeam)
            }
            StepInput::AttachSling => {
                self.attach_sling()?;
                Effect::Attached(PartRole::Sling)
            }
            StepInput::SecureCounterweight => {
                self.secure_counterweight()?;
                Effect::Attached(PartRole::Counterweight)
            }
            StepInput::MountPullForce => {
                self.mount_pull_force()?;
                Effect::Assembled
            }
            StepInput::Arm(name) => Effect::Armed(self.arm(&name)?.clone()),
            StepInput::Fire(confirmation) => Effect::Fired(self.fire(confirmation)?),
        };

        let to = self.stage();
        debug!(%step, %from, %to, "Transition complete");
        Ok(Transition {
            step,
            from,
            to,
            effect,
        })
    }

    /// Checks that every part is on hand and there are enough beams.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientParts` with fewer than [`BEAMS_NEEDED`] beams, or
    /// `MissingPart` if any part has been used up.
    #[instrument(skip(self))]
    pub fn check_inventory(&mut self) -> TrebuchetResult<PartsReport> {
        self.gate(Step::CheckInventory)?;

        let beam_count = self.inventory.support_beams().quantity();
        if beam_count < BEAMS_NEEDED {
            return Err(AssemblyError::new(AssemblyErrorKind::InsufficientParts {
                needed: BEAMS_NEEDED,
                found: beam_count,
            })
            .into());
        }

        let mut roles = Vec::new();
        for (role, part) in self.inventory.parts() {
            if !part.is_present() {
                return Err(
                    AssemblyError::new(AssemblyErrorKind::MissingPart(role.to_string())).into(),
                );
            }
            roles.push(role);
        }

        self.flags.mark_parts_checked();
        info!(beam_count, "Parts check passed");
        Ok(PartsReport { roles, beam_count })
    }

    /// Lashes the support beams together, using [`ROPE_PER_BEAM`] meters of
    /// rope for each.
    ///
    /// Running out of rope does not stop the build: the beam is skipped for
    /// rope, the shortfall is logged and reported, and the frame still counts
    /// as built.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientParts` with fewer than [`BEAMS_NEEDED`] beams.
    #[instrument(skip(self))]
    pub fn build_frame(&mut self) -> TrebuchetResult<FrameReport> {
        self.gate(Step::BuildFrame)?;

        let beams = self.inventory.support_beams().quantity();
        if beams < BEAMS_NEEDED {
            return Err(AssemblyError::new(AssemblyErrorKind::InsufficientParts {
                needed: BEAMS_NEEDED,
                found: beams,
            })
            .into());
        }

        let mut rope_used = 0;
        let mut shortfalls = Vec::new();
        for beam in 0..beams {
            match self.inventory.rope_mut().attach(ROPE_PER_BEAM) {
                Ok(_) => rope_used += ROPE_PER_BEAM,
                Err(e) => {
                    warn!(beam, error = %e.kind, "Skipping rope for beam");
                    shortfalls.push(e);
                }
            }
        }

        self.flags.set(Milestone::FrameBuilt);
        let rope_remaining = *self.inventory.rope().length();
        info!(beams, rope_used, rope_remaining, "Frame built");
        Ok(FrameReport {
            beams_lashed: beams,
            rope_used,
            rope_remaining,
            shortfalls,
        })
    }

    /// Mounts the axle on the frame.
    ///
    /// # Errors
    ///
    /// Returns `Precondition("frame")` until the frame is built.
    pub fn attach_axle(&mut self) -> TrebuchetResult<()> {
        self.complete(Step::AttachAxle)
    }

    /// Mounts the lever beam on the axle.
    ///
    /// # Errors
    ///
    /// Returns `Precondition("axle")` until the axle is attached, and
    /// `LeverTooShort` unless the lever beam is longer than
    /// [`MIN_LEVER_LENGTH`].
    #[instrument(skip(self))]
    pub fn attach_lever(&mut self) -> TrebuchetResult<()> {
        self.gate(Step::AttachLever)?;

        let length = *self.inventory.lever_beam().length();
        if length <= MIN_LEVER_LENGTH {
            return Err(AssemblyError::new(AssemblyErrorKind::LeverTooShort {
                length,
                minimum: MIN_LEVER_LENGTH,
            })
            .into());
        }

        self.complete(Step::AttachLever)
    }

    /// Ties the sling to the lever.
    ///
    /// # Errors
    ///
    /// Returns `Precondition("lever")` until the lever is attached.
    pub fn attach_sling(&mut self) -> TrebuchetResult<()> {
        self.complete(Step::AttachSling)
    }

    /// Loads the counterweight onto the lever.
    ///
    /// # Errors
    ///
    /// Returns `Precondition("sling")` until the sling is attached.
    pub fn secure_counterweight(&mut self) -> TrebuchetResult<()> {
        self.complete(Step::SecureCounterweight)
    }

    /// Mounts the ants, completing assembly.
    ///
    /// # Errors
    ///
    /// Returns `Precondition("counterweight")` until the counterweight is
    /// secured.
    pub fn mount_pull_force(&mut self) -> TrebuchetResult<()> {
        self.complete(Step::MountPullForce)?;
        self.flags.set(Milestone::Assembled);
        info!("Trebuchet assembled");
        Ok(())
    }

    /// Loads a passenger.
    ///
    /// # Errors
    ///
    /// Returns `Precondition("assembled")` until assembly is complete, and
    /// `InvalidPassengerName` unless the name is letters only.
    #[instrument(skip(self))]
    pub fn arm(&mut self, passenger_name: &str) -> TrebuchetResult<&Passenger> {
        self.gate(Step::Arm)?;
        let passenger = Passenger::parse(passenger_name)?;

        self.flags.set(Milestone::Armed);
        info!(passenger = %passenger, "Trebuchet armed");
        Ok(self.passenger.insert(passenger))
    }

    /// Releases the trebuchet if `confirmation` is `f` or `F`.
    ///
    /// A launch clears the passenger and the armed flag. Any other key aborts
    /// and leaves both exactly as they were, so the trebuchet stays armed.
    ///
    /// # Errors
    ///
    /// Returns `Precondition("armed")` unless a passenger is loaded.
    #[instrument(skip(self))]
    pub fn fire(&mut self, confirmation: char) -> TrebuchetResult<LaunchOutcome> {
        self.gate(Step::Fire)?;

        if confirmation.to_ascii_lowercase() != 'f' {
            self.aborted = true;
            info!("Launch aborted");
            return Ok(LaunchOutcome::Aborted);
        }

        self.flags.set(Milestone::Fired);
        self.flags.clear(Milestone::Armed);
        self.aborted = false;
        let passenger = self.passenger.take();
        info!(passenger = ?passenger.as_ref().map(Passenger::name), "Passenger launched");
        Ok(LaunchOutcome::Launched)
    }

    /// Fails unless `step` may run now.
    fn gate(&self, step: Step) -> TrebuchetResult<()> {
        if let Some(required) = step.requires().filter(|m| !self.flags.is_set(*m)) {
            return Err(
                AssemblyError::new(AssemblyErrorKind::Precondition(required.label())).into(),
            );
        }

        if step.reaches().is_some_and(|m| self.flags.is_set(m)) {
            return Err(AssemblyError::new(AssemblyErrorKind::AlreadyCompleted(step.label())).into());
        }

        Ok(())
    }

    /// Runs a step that only needs its precondition, then marks it reached.
    fn complete(&mut self, step: Step) -> TrebuchetResult<()> {
        self.gate(step)?;
        if let Some(reached) = step.reaches() {
            self.flags.set(reached);
        }
        debug!(%step, "Step complete");
        Ok(())
    }
}
