use clap::ValueEnum;
use simplex_core::{LinearProgram, Sense};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum SenseChoice {
    Maximize,
    Minimize,
}

impl From<SenseChoice> for Sense {
    fn from(choice: SenseChoice) -> Self {
        match choice {
            SenseChoice::Maximize => Sense::Maximize,
            SenseChoice::Minimize => Sense::Minimize,
        }
    }
}

/// Override the objective sense of `lp` when one was given on the command line.
pub fn apply_sense(lp: &mut LinearProgram, choice: Option<SenseChoice>) {
    if let Some(choice) = choice {
        lp.set_sense(choice.into());
    }
}
