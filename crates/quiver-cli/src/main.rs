mod cli;
mod commands;
mod logging;

use cli::{HashParams, StatusParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("hash", m)) => {
            let params = HashParams::from_matches(m);
            commands::hash::run(params.into());
        }
        Some(("status", m)) => {
            let params = StatusParams::from_matches(m);
            commands::status::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
