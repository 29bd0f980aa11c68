mod cli;

use std::process::ExitCode;

use clap::Parser;

use cli::Args;
use common::{debug, warn};
use simulator::{input::read_commands_from_file, run_interactive, run_script};

fn main() -> ExitCode {
    let args = Args::parse();
    let mut session = args.session();
    let stdout = std::io::stdout();

    let result = if let Some(path) = &args.file {
        let commands = match read_commands_from_file(path) {
            Ok(commands) => commands,
            Err(e) => {
                println!("{}", e);
                debug!("{:?}", e);
                return ExitCode::FAILURE;
            }
        };
        debug!("running {} commands from {}", commands.len(), path.display());
        run_script(&mut session, &commands, stdout.lock())
    } else {
        run_interactive(&mut session, std::io::stdin().lock(), stdout.lock())
    };

    if let Err(e) = result {
        warn!("{}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
