mod cli;
mod clipboard;
mod errors;
mod form;
mod generators;
mod password;
mod screen;
mod validation;

use clap::Parser;

use crate::cli::Args;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    log::debug!("rng tier: {:?}", args.tier());

    if let Err(e) = cli::run(args) {
        log::debug!("exiting on error: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}
