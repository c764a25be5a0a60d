//! CLI command implementations
//!
//! Each subcommand of the `strkit` binary maps to one command type,
//! created by [`StrkitCommandFactory`] from the parsed arguments.

pub mod command_traits;
pub mod ends_with_command;
pub mod parse_int_command;
pub mod truthy_command;
pub mod second_last_command;

pub use command_traits::{Command, CommandFactory};
pub use ends_with_command::EndsWithCommand;
pub use parse_int_command::ParseIntCommand;
pub use truthy_command::TruthyCommand;
pub use second_last_command::SecondLastCommand;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::utils::logger::Logger;
use crate::strings::errors::{StrError, StrResult};

/// Build the `strkit` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("strkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect strings: suffixes, integers, truthy flags and reverse character search")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("TOML file with a custom truthy token table")
                .value_name("FILE")
                .global(true),
        )
        .subcommand(
            ClapCommand::new("ends-with")
                .about("Check whether SUBJECT ends with SUFFIX")
                .arg(Arg::new("subject").required(true).index(1).allow_hyphen_values(true))
                .arg(Arg::new("suffix").required(true).index(2).allow_hyphen_values(true)),
        )
        .subcommand(
            ClapCommand::new("parse-int")
                .about("Parse TEXT as an integer, printing DEFAULT if it is not one")
                .allow_negative_numbers(true)
                .arg(Arg::new("text").required(true).index(1).allow_hyphen_values(true))
                .arg(
                    Arg::new("default")
                        .long("default")
                        .value_name("N")
                        .value_parser(clap::value_parser!(i64))
                        .default_value("0"),
                ),
        )
        .subcommand(
            ClapCommand::new("truthy")
                .about("Check whether VALUE is a truthy token")
                .arg(Arg::new("value").required(true).index(1).allow_hyphen_values(true)),
        )
        .subcommand(
            ClapCommand::new("second-last")
                .about("Print SUBJECT from the second-to-last occurrence of CHAR")
                .arg(Arg::new("subject").required(true).index(1).allow_hyphen_values(true))
                .arg(Arg::new("char").required(true).index(2).allow_hyphen_values(true)),
        )
}

/// Fetch a required string argument
pub(crate) fn required_string(args: &ArgMatches, name: &str) -> StrResult<String> {
    args.get_one::<String>(name)
        .cloned()
        .ok_or_else(|| StrError::InvalidArgument(format!("missing <{}>", name)))
}

/// Factory for creating command instances based on CLI arguments
pub struct StrkitCommandFactory;

impl StrkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        StrkitCommandFactory
    }
}

impl Default for StrkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for StrkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> StrResult<Box<dyn Command + 'a>> {
        match args.subcommand() {
            Some(("ends-with", sub)) => Ok(Box::new(EndsWithCommand::new(sub, logger)?)),
            Some(("parse-int", sub)) => Ok(Box::new(ParseIntCommand::new(sub, logger)?)),
            Some(("truthy", sub)) => Ok(Box::new(TruthyCommand::new(sub, logger)?)),
            Some(("second-last", sub)) => Ok(Box::new(SecondLastCommand::new(sub, logger)?)),
            Some((other, _)) => Err(StrError::InvalidArgument(format!("unknown subcommand {}", other))),
            None => Err(StrError::InvalidArgument("no subcommand given".to_string())),
        }
    }
}
