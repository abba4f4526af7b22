mod features;
mod sample;

use features::run_features;
use sample::run_sample;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Features(args) => run_features(args, ctx),
        Command::Sample(args) => run_sample(args, ctx),
    }
}
