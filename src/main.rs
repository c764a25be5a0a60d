use std::process;
use log::{debug, error, LevelFilter};

use strkit::utils::logger::Logger;
use strkit::commands::{build_cli, CommandFactory, StrkitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let logger = match Logger::new("strkit.log", level) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            Logger::console(level)
        }
    };

    let backend = Logger::init_global_logger("strkit-global.log", level);
    debug!("Global logging backend: {:?}", backend);

    let factory = StrkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
