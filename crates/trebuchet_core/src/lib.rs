//! Parts, inventory and the assembly state machine for the trebuchet commute
//! simulator.
//!
//! The [`AssemblyStateMachine`] walks a fixed inventory through an ordered
//! chain of build steps. Each step checks that the step before it completed,
//! so the machine can be driven and tested without any console I/O.
//!
//! # Example
//!
//! ```
//! use trebuchet_core::{AssemblyStateMachine, LaunchOutcome};
//!
//! let mut machine = AssemblyStateMachine::new(175_000)?;
//! machine.check_inventory()?;
//! machine.build_frame()?;
//! machine.attach_axle()?;
//! machine.attach_lever()?;
//! machine.attach_sling()?;
//! machine.secure_counterweight()?;
//! machine.mount_pull_force()?;
//! machine.arm("Bob")?;
//! assert_eq!(machine.fire('f')?, LaunchOutcome::Launched);
//! # Ok::<(), trebuchet_error::TrebuchetError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod flags;
mod flavor;
mod inventory;
mod machine;
mod parts;
mod passenger;
mod step;

pub use flags::{BuildFlags, Milestone, Stage};
pub use flavor::{AntMood, FixedFlavor, FlavorSource, RandomFlavor};
pub use inventory::{Inventory, InventoryBuilder, InventoryBuilderError, PartRole, PartStatus};
pub use machine::{
    AssemblyStateMachine, BEAMS_NEEDED, COUNTERWEIGHT_MAX_HEIGHT, MIN_LEVER_LENGTH, ROPE_PER_BEAM,
};
pub use parts::{
    CarpenterAntColony, MustyArmChair, Part, PileOfBeams, RustyCarAxle, RustyOldCar,
    SaltyBoatRope, WoodenBeam,
};
pub use passenger::{Passenger, is_valid_name};
pub use step::{Effect, FrameReport, LaunchOutcome, PartsReport, Step, StepInput, Transition};
