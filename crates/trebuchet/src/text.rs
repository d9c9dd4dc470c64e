//! Narrative text.

/// Marker printed before anything the user must respond to.
pub const PROMPT_MARKER: &str = "=|=|=>";

pub const GREETING: &str = "Time to build the next great advancement in the modern commute!";

pub const CONTINUE_PROMPT: &str = "Press anything to continue. No, not that... Press any KEY:";

pub const CHECKLIST_HEADER: &str =
    "Before we assemble anything, let's make sure everything is in order:";

pub const CHECKLIST_DONE: &str = "\nWell, gosh, that seems to be everything!";

pub const ASSEMBLY_START: &str = "We have the supplies in order! \n\
     Let's start assembling the trebuchet!... what will the neighbors say?";

pub const ROPE_SHORTFALL: &str = "Not enough rope left for that!";

pub const FRAME_BUILT: &str = "\nFrame has been built!";

pub const AXLE_ATTACHED: &str = "Axle attached!";

pub const LEVER_ATTACHED: &str = "Lever beam has been attached!";

pub const SLING_ATTACHED: &str = "Sling attached! Also, I found some loose change in the cushions!";

pub const COUNTERWEIGHT_SECURED: &str = "Counterweight is on the lever!";

pub const PULL_FORCE_MOUNTED: &str = "Ants are mounted to the lever beam. Not happy, but mounted.";

pub const ASSEMBLY_DONE: &str =
    "\nWell, that does it! The trebuchet is assembled.\nOnly one thing to do now...";

pub const PASSENGER_PROMPT: &str = "Who's getting in this thing?";

pub const PASSENGER_REPROMPT: &str =
    "Yeah, that's well and good, but I need a name...(letters only!)";

pub const READY_TO_FIRE: &str = "The trebuchet is ready to fire! \n\
     Say your praye- Ahem, I mean... \n\
     Have fun!";

pub const NOT_READY: &str = "This is akward... You aren't quite ready to fire yet.";

pub const SIEGE_LINES: [&str; 3] = [
    "Commence the seige!",
    "...it's not a seige? It's a commute?",
    "Whatever, just fire the thing!",
];

pub const TUCK_AND_ROLL: &str = "(Remember to tuck and roll when you reach your destination)";

pub const LAUNCH_ABORTED: &str = "LAUNCH ABORTED- ...maybe next time";

pub const GOODBYE: &str = "There they go, slipped loose the surly bonds and all that. \n\
     Another successful commute completed!\n\
     ...and a somewhat thematic avoidance of studying to boot!\n\
     Until you next time, or not. We'll see.";

/// Shown after a successful launch.
pub const TREBUCHET_ART: &str = r#"                                 .`.
                                / `.`.
         ______________________/____`_`____________________________
        / .''.  _ !  F   _     I     _     R    _     E  !  __..--->.
        \ '()'       _       .''.        _       ____...---'       .'
         |_||______.`.__  .' .'______......-----'                 /
          .||-||-./ `.`.' .'   \/_/  `./   /`.`.                .'
        .'_||__.'/ (O)`.`.    \/_/     `./   /`.`.             /
        /_ -  _\/\     /`.`. \/_/        `./   /`.`.          /
        |>-::-</\   ./   /`.`. /___________`./   /`.`._     .'
        '-----/\  \/ `./   /`.`._____________`._____` .|   /
             /\  \/_/  `./   /`.`.________________.'.'.' .'
            /\  \/_/   .-`./   /`.`.---------/``\-----.-'
           /\  \/_/  .'~ _ `./   /`.`. _ ~   (==)`._.'
        .'/\  \/_/  '--------`./   /`.`.-----|__|--'
      .' /\  \/ /______________`./   /`.`..'.'.'
    .'__/____/___________________`._____` .'.'
    |____________________________________|.'"#;

pub fn passenger_greeting(name: &str) -> String {
    format!("Howdy, {}! Let's get this show on the road...", name)
}

pub fn safe_travels(name: &str) -> String {
    format!("Safe travels, {}!", name)
}

pub fn final_words_prompt(name: &str) -> String {
    format!(
        "{}, are you ready to soar like an eagle? Press 'f' to fire or anything else to abort:",
        name
    )
}

pub fn raised_height(ants: &str, counterweight: &str, height: u32) -> String {
    format!(
        "{} raise the {}{} meters off the ground!",
        ants, counterweight, height
    )
}
