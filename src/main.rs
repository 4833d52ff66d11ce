use std::process::ExitCode;

use clap::Parser;

use fifi::Args;

fn main() -> ExitCode {
    let args = Args::parse();
    let default_filter = if args.verbose { "warn,fifi=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    fifi::run(&args)
}
