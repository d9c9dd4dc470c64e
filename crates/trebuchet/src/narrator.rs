//! The scripted build-and-launch sequence.

use crate::console::Console;
use crate::text;
use std::time::Duration;
use trebuchet_core::{
    AssemblyStateMachine, COUNTERWEIGHT_MAX_HEIGHT, Effect, FlavorSource, LaunchOutcome,
    PartRole, Step, StepInput, is_valid_name,
};
use trebuchet_error::TrebuchetResult;
use tracing::{debug, info, instrument};

/// Talks the user through one full cycle: check the parts, build, load a
/// passenger, fire.
pub struct Narrator<C, F> {
    machine: AssemblyStateMachine,
    console: C,
    flavor: F,
}

impl<C: Console, F: FlavorSource> Narrator<C, F> {
    /// Creates a narrator around a fresh machine.
    pub fn new(machine: AssemblyStateMachine, console: C, flavor: F) -> Self {
        Self {
            machine,
            console,
            flavor,
        }
    }

    /// The machine being narrated.
    pub fn machine(&self) -> &AssemblyStateMachine {
        &self.machine
    }

    /// Gives back the console, e.g. to inspect what was printed.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Runs the whole sequence once.
    ///
    /// # Errors
    ///
    /// Stops at the first assembly or console error.
    #[instrument(skip_all)]
    pub fn complete_cycle(&mut self) -> TrebuchetResult<LaunchOutcome> {
        self.clear_screen_timed(Duration::ZERO)?;
        self.display_greeting()?;
        self.parts_checklist()?;
        self.assemble()?;
        let name = self.arm()?;
        let outcome = self.fire(&name)?;
        info!(%outcome, "Cycle complete");
        Ok(outcome)
    }

    #[instrument(skip_all)]
    fn display_greeting(&mut self) -> TrebuchetResult<()> {
        self.console.print(text::GREETING)?;
        self.clear_screen_with_input()
    }

    #[instrument(skip_all)]
    fn parts_checklist(&mut self) -> TrebuchetResult<()> {
        self.console.print(text::CHECKLIST_HEADER)?;

        let transition = self.machine.advance(StepInput::CheckInventory)?;
        if let Effect::PartsChecked(report) = transition.effect {
            for role in report.roles {
                let line = self
                    .machine
                    .inventory()
                    .status_line(role, &mut self.flavor);
                self.console.print(&line)?;
            }
        }

        self.console.print(text::CHECKLIST_DONE)?;
        self.clear_screen_with_input()
    }

    #[instrument(skip_all)]
    fn assemble(&mut self) -> TrebuchetResult<()> {
        self.console.print(text::ASSEMBLY_START)?;

        for input in Step::ASSEMBLY.into_iter().filter_map(StepInput::bare) {
            let transition = self.machine.advance(input)?;
            debug!(step = %transition.step, to = %transition.to, "Assembly step done");

            match transition.effect {
                Effect::FrameBuilt(report) => {
                    for _ in &report.shortfalls {
                        self.console.print(text::ROPE_SHORTFALL)?;
                    }
                    self.console.print(text::FRAME_BUILT)?;
                }
                Effect::Attached(PartRole::Axle) => self.console.print(text::AXLE_ATTACHED)?,
                Effect::Attached(PartRole::LeverBeam) => {
                    self.console.print(text::LEVER_ATTACHED)?
                }
                Effect::Attached(PartRole::Sling) => self.console.print(text::SLING_ATTACHED)?,
                Effect::Attached(PartRole::Counterweight) => {
                    self.console.print(text::COUNTERWEIGHT_SECURED)?
                }
                Effect::Assembled => self.console.print(text::PULL_FORCE_MOUNTED)?,
                _ => {}
            }
        }

        self.console.print(text::ASSEMBLY_DONE)?;
        self.clear_screen_with_input()
    }

    /// Loads a passenger and raises the counterweight. Returns the
    /// passenger's name.
    #[instrument(skip_all)]
    fn arm(&mut self) -> TrebuchetResult<String> {
        let raw = self.ask_passenger_name()?;
        let name = self.machine.arm(&raw)?.name().to_string();

        self.console.print(&text::passenger_greeting(&name))?;
        self.clear_screen_with_input()?;

        let ants = self
            .machine
            .inventory()
            .pull_force()
            .describe(&mut self.flavor);
        let counterweight = self.machine.inventory().counterweight().to_string();
        self.console.print(&text::raised_height(
            &ants,
            &counterweight,
            COUNTERWEIGHT_MAX_HEIGHT,
        ))?;

        if self.machine.is_armed() {
            self.console.print(text::READY_TO_FIRE)?;
        } else {
            self.console.print(text::NOT_READY)?;
        }
        self.clear_screen_with_input()?;

        Ok(name)
    }

    /// Asks for a name until the answer is letters only.
    fn ask_passenger_name(&mut self) -> TrebuchetResult<String> {
        self.prompt(text::PASSENGER_PROMPT)?;

        loop {
            let line = self.console.read_line()?;
            let candidate = line.trim_end_matches(['\r', '\n']);
            if is_valid_name(candidate) {
                return Ok(candidate.to_string());
            }

            debug!(rejected = candidate, "Passenger name rejected");
            self.prompt(text::PASSENGER_REPROMPT)?;
        }
    }

    #[instrument(skip_all)]
    fn fire(&mut self, name: &str) -> TrebuchetResult<LaunchOutcome> {
        for line in text::SIEGE_LINES {
            self.console.print(line)?;
        }
        self.console.print(&text::safe_travels(name))?;
        self.console.print(text::TUCK_AND_ROLL)?;

        self.prompt(&text::final_words_prompt(name))?;
        let key = self.console.read_key()?;

        let transition = self.machine.advance(StepInput::Fire(key))?;
        let outcome = match transition.effect {
            Effect::Fired(outcome) => outcome,
            _ => LaunchOutcome::Aborted,
        };

        match outcome {
            LaunchOutcome::Launched => {
                self.clear_screen_timed(Duration::ZERO)?;
                self.console.print(text::TREBUCHET_ART)?;
                self.console.print(text::GOODBYE)?;
            }
            LaunchOutcome::Aborted => self.console.print(text::LAUNCH_ABORTED)?,
        }
        Ok(outcome)
    }

    fn prompt(&mut self, message: &str) -> TrebuchetResult<()> {
        self.console
            .print(&format!("\n{} {}", text::PROMPT_MARKER, message))
    }

    fn clear_screen_timed(&mut self, duration: Duration) -> TrebuchetResult<()> {
        self.console.pause(duration);
        self.console.clear_screen()
    }

    fn clear_screen_with_input(&mut self) -> TrebuchetResult<()> {
        self.prompt(text::CONTINUE_PROMPT)?;
        self.console.read_key()?;
        self.console.clear_screen()
    }
}
