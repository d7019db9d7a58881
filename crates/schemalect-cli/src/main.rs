mod cli;
mod commands;
mod input;
mod logging;

use cli::{DialectsParams, GenerateParams, IrParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();
    logging::init(matches.get_count("verbose"));

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("ir", m)) => {
            let params = IrParams::from_matches(m);
            commands::ir::run(params.into());
        }
        Some(("dialects", m)) => {
            let _params = DialectsParams::from_matches(m);
            commands::dialects::run();
        }
        _ => unreachable!("clap should have caught this"),
    }
}
