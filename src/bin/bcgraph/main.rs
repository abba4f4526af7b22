use std::process::ExitCode;

mod cli;
mod commands;
mod display;
mod io;
mod util;

fn main() -> ExitCode {
    let cli = cli::parse();
    init_logging(cli.verbose);

    let ctx = display::Context::detect().with_quiet(match &cli.command {
        cli::Command::Features(_) => false,
        cli::Command::Sample(args) => args.quiet,
    });

    match commands::dispatch(cli.command, ctx) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            display::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
