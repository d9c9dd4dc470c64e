//! Tests for the assembly state machine.

use trebuchet_core::{
    AssemblyStateMachine, CarpenterAntColony, Effect, Inventory, LaunchOutcome, Milestone,
    PartRole, PartStatus, PileOfBeams, SaltyBoatRope, Stage, Step, StepInput, WoodenBeam,
};
use trebuchet_error::{AssemblyErrorKind, TrebuchetError};

fn kind(err: &TrebuchetError) -> AssemblyErrorKind {
    err.assembly_kind()
        .cloned()
        .unwrap_or_else(|| panic!("expected an assembly error, got {}", err))
}

fn ordered_inputs() -> Vec<StepInput> {
    vec![
        StepInput::BuildFrame,
        StepInput::AttachAxle,
        StepInput::AttachLever,
        StepInput::AttachSling,
        StepInput::SecureCounterweight,
        StepInput::MountPullForce,
        StepInput::Arm("Bob".to_string()),
        StepInput::Fire('f'),
    ]
}

fn armed_machine() -> AssemblyStateMachine {
    let mut machine = AssemblyStateMachine::new(175_000).unwrap();
    for input in ordered_inputs().into_iter().take(7) {
        machine.advance(input).unwrap();
    }
    machine
}

fn inventory_with(beams: PileOfBeams) -> Inventory {
    Inventory::builder()
        .support_beams(beams)
        .pull_force(CarpenterAntColony::new(10))
        .build()
        .unwrap()
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_each_step_requires_the_previous_one() {
    let inputs = ordered_inputs();

    for k in 1..inputs.len() {
        let mut machine = AssemblyStateMachine::new(175_000).unwrap();
        for input in inputs.iter().take(k - 1) {
            machine.advance(input.clone()).unwrap();
        }

        let step = inputs[k].step();
        let err = machine.advance(inputs[k].clone()).unwrap_err();
        let expected = step.requires().unwrap().label();
        assert_eq!(
            kind(&err),
            AssemblyErrorKind::Precondition(expected),
            "step {} ran without its precondition",
            step
        );
    }
}

#[test]
fn test_precondition_labels() {
    let mut machine = AssemblyStateMachine::new(175_000).unwrap();

    type StepFn = fn(&mut AssemblyStateMachine) -> Result<(), TrebuchetError>;
    let cases: [(StepFn, &str); 5] = [
        (AssemblyStateMachine::attach_axle, "frame"),
        (AssemblyStateMachine::attach_lever, "axle"),
        (AssemblyStateMachine::attach_sling, "lever"),
        (AssemblyStateMachine::secure_counterweight, "sling"),
        (AssemblyStateMachine::mount_pull_force, "counterweight"),
    ];
    for (step, label) in cases {
        let err = step(&mut machine).unwrap_err();
        assert_eq!(kind(&err), AssemblyErrorKind::Precondition(label));
    }

    let err = machine.arm("Bob").unwrap_err();
    assert_eq!(kind(&err), AssemblyErrorKind::Precondition("assembled"));

    let err = machine.fire('f').unwrap_err();
    assert_eq!(kind(&err), AssemblyErrorKind::Precondition("armed"));

    assert_eq!(machine.stage(), Stage::Initialized);
}

#[test]
fn test_steps_run_only_once() {
    let mut machine = AssemblyStateMachine::new(175_000).unwrap();
    machine.build_frame().unwrap();

    let err = machine.build_frame().unwrap_err();
    assert_eq!(kind(&err), AssemblyErrorKind::AlreadyCompleted("build_frame"));
    assert_eq!(*machine.inventory().rope().length(), 30);

    machine.attach_axle().unwrap();
    let err = machine.attach_axle().unwrap_err();
    assert_eq!(kind(&err), AssemblyErrorKind::AlreadyCompleted("attach_axle"));
}

#[test]
fn test_stage_follows_the_chain() {
    let mut machine = AssemblyStateMachine::new(175_000).unwrap();
    assert_eq!(machine.stage(), Stage::Initialized);

    let transition = machine.advance(StepInput::CheckInventory).unwrap();
    assert_eq!(transition.from, Stage::Initialized);
    assert_eq!(transition.to, Stage::PartsChecked);

    let expected = [
        Stage::FrameBuilt,
        Stage::AxleAttached,
        Stage::LeverAttached,
        Stage::SlingAttached,
        Stage::CounterweightSecured,
        Stage::Assembled,
        Stage::Armed,
        Stage::Fired,
    ];
    let mut previous = Stage::PartsChecked;
    for (input, stage) in ordered_inputs().into_iter().zip(expected) {
        let transition = machine.advance(input).unwrap();
        assert_eq!(transition.from, previous);
        assert_eq!(transition.to, stage);
        previous = stage;
    }
}

#[test]
fn test_assembly_steps_table() {
    assert_eq!(Step::ASSEMBLY.len(), 6);
    assert_eq!(Step::BuildFrame.requires(), None);
    assert_eq!(Step::MountPullForce.reaches(), Some(Milestone::PullForceMounted));
    for step in Step::ASSEMBLY {
        assert!(StepInput::bare(step).is_some());
    }
    assert!(StepInput::bare(Step::Arm).is_none());
    assert!(StepInput::bare(Step::Fire).is_none());
}

// ============================================================================
// Parts and frame
// ============================================================================

#[test]
fn test_check_inventory_standard() {
    let mut machine = AssemblyStateMachine::new(175_000).unwrap();
    let report = machine.check_inventory().unwrap();
    assert_eq!(report.beam_count, 6);
    assert_eq!(report.roles.len(), 7);
    assert_eq!(report.roles[0], PartRole::SupportBeams);
    assert!(machine.flags().parts_checked());
}

#[test]
fn test_check_inventory_too_few_beams() {
    let mut machine = AssemblyStateMachine::with_inventory(inventory_with(PileOfBeams::gather(5, 15)));
    let err = machine.check_inventory().unwrap_err();
    assert_eq!(
        kind(&err),
        AssemblyErrorKind::InsufficientParts {
            needed: 6,
            found: 5
        }
    );
    assert!(!machine.flags().parts_checked());
}

#[test]
fn test_check_inventory_missing_part() {
    let inventory = Inventory::builder()
        .rope(SaltyBoatRope::new(0))
        .pull_force(CarpenterAntColony::new(10))
        .build()
        .unwrap();
    let mut machine = AssemblyStateMachine::with_inventory(inventory);

    let err = machine.check_inventory().unwrap_err();
    assert_eq!(kind(&err), AssemblyErrorKind::MissingPart("rope".to_string()));
    assert_eq!(machine.part_status(PartRole::Rope), PartStatus::Missing);
}

#[test]
fn test_build_frame_too_few_beams() {
    let mut machine = AssemblyStateMachine::with_inventory(inventory_with(PileOfBeams::gather(5, 15)));
    let err = machine.build_frame().unwrap_err();
    assert_eq!(
        kind(&err),
        AssemblyErrorKind::InsufficientParts {
            needed: 6,
            found: 5
        }
    );
    assert!(!machine.flags().is_set(Milestone::FrameBuilt));
    assert_eq!(*machine.inventory().rope().length(), 120);
}

#[test]
fn test_build_frame_consumes_rope() {
    let mut machine = AssemblyStateMachine::new(175_000).unwrap();
    let report = machine.build_frame().unwrap();

    assert_eq!(report.beams_lashed, 6);
    assert_eq!(report.rope_used, 90);
    assert_eq!(report.rope_remaining, 30);
    assert!(report.shortfalls.is_empty());
    assert_eq!(*machine.inventory().rope().length(), 30);
    assert_eq!(machine.part_status(PartRole::SupportBeams), PartStatus::Attached);
}

#[test]
fn test_build_frame_short_rope_still_builds() {
    let inventory = Inventory::builder()
        .rope(SaltyBoatRope::new(50))
        .pull_force(CarpenterAntColony::new(10))
        .build()
        .unwrap();
    let mut machine = AssemblyStateMachine::with_inventory(inventory);

    let report = machine.build_frame().unwrap();
    assert_eq!(report.rope_used, 45);
    assert_eq!(report.rope_remaining, 5);
    assert_eq!(report.shortfalls.len(), 3);
    assert_eq!(
        report.shortfalls[0].kind,
        AssemblyErrorKind::InsufficientRope {
            requested: 15,
            remaining: 5
        }
    );
    assert!(machine.flags().is_set(Milestone::FrameBuilt));

    machine.attach_axle().unwrap();
}

#[test]
fn test_lever_too_short() {
    let inventory = Inventory::builder()
        .lever_beam(WoodenBeam::new(20))
        .pull_force(CarpenterAntColony::new(10))
        .build()
        .unwrap();
    let mut machine = AssemblyStateMachine::with_inventory(inventory);
    machine.build_frame().unwrap();
    machine.attach_axle().unwrap();

    let err = machine.attach_lever().unwrap_err();
    assert_eq!(
        kind(&err),
        AssemblyErrorKind::LeverTooShort {
            length: 20,
            minimum: 20
        }
    );
    assert!(!machine.flags().is_set(Milestone::LeverAttached));
}

#[test]
fn test_mount_pull_force_assembles() {
    let mut machine = AssemblyStateMachine::new(175_000).unwrap();
    let mut last = None;
    for step in Step::ASSEMBLY {
        last = Some(machine.advance(StepInput::bare(step).unwrap()).unwrap());
    }

    let transition = last.unwrap();
    assert!(matches!(transition.effect, Effect::Assembled));
    assert!(machine.flags().is_set(Milestone::PullForceMounted));
    assert!(machine.flags().is_set(Milestone::Assembled));
    assert_eq!(machine.part_status(PartRole::PullForce), PartStatus::Attached);
}

// ============================================================================
// Arming and firing
// ============================================================================

#[test]
fn test_arm_rejects_bad_name() {
    let mut machine = AssemblyStateMachine::new(175_000).unwrap();
    for step in Step::ASSEMBLY {
        machine.advance(StepInput::bare(step).unwrap()).unwrap();
    }

    let err = machine.arm("B0b").unwrap_err();
    assert_eq!(
        kind(&err),
        AssemblyErrorKind::InvalidPassengerName("B0b".to_string())
    );
    assert!(!machine.is_armed());

    let passenger = machine.arm("bob").unwrap();
    assert_eq!(passenger.name(), "Bob");
    assert!(machine.is_armed());
}

#[test]
fn test_fire_launches() {
    let mut machine = armed_machine();
    assert_eq!(machine.fire('f').unwrap(), LaunchOutcome::Launched);
    assert!(machine.is_fired());
    assert!(!machine.is_armed());
    assert!(machine.passenger().is_none());
    assert_eq!(machine.stage(), Stage::Fired);

    let err = machine.fire('f').unwrap_err();
    assert_eq!(kind(&err), AssemblyErrorKind::Precondition("armed"));
}

#[test]
fn test_fire_uppercase_launches() {
    let mut machine = armed_machine();
    assert_eq!(machine.fire('F').unwrap(), LaunchOutcome::Launched);
}

#[test]
fn test_fire_abort_keeps_passenger_armed() {
    let mut machine = armed_machine();
    assert_eq!(machine.fire('x').unwrap(), LaunchOutcome::Aborted);

    assert!(!machine.is_fired());
    assert!(machine.is_armed());
    assert_eq!(machine.passenger().unwrap().name(), "Bob");
    assert_eq!(machine.stage(), Stage::Aborted);
    assert!(machine.flags().is_set(Milestone::Assembled));
}

#[test]
fn test_end_to_end_launch() {
    let mut machine = AssemblyStateMachine::new(175_000).unwrap();
    machine.advance(StepInput::CheckInventory).unwrap();

    let mut outcome = None;
    for input in ordered_inputs() {
        if let Effect::Fired(result) = machine.advance(input).unwrap().effect {
            outcome = Some(result);
        }
    }

    assert_eq!(outcome, Some(LaunchOutcome::Launched));
    assert_eq!(machine.stage(), Stage::Fired);
}
