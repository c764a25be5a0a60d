//! Integer parsing command

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::commands::required_string;
use crate::strings::errors::{StrError, StrResult};
use crate::strings::integer::parse_int_or_default;
use crate::utils::logger::Logger;

/// Command that parses an integer, printing the default on failure
pub struct ParseIntCommand<'a> {
    text: String,
    default: i64,
    logger: &'a Logger,
}

impl<'a> ParseIntCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> StrResult<Self> {
        let text = required_string(args, "text")?;
        let default = *args
            .get_one::<i64>("default")
            .ok_or_else(|| StrError::InvalidArgument("missing --default".to_string()))?;

        Ok(ParseIntCommand { text, default, logger })
    }
}

impl<'a> Command for ParseIntCommand<'a> {
    fn evaluate(&self) -> StrResult<String> {
        let value = parse_int_or_default(&self.text, self.default);
        if value == self.default {
            debug!("parse_int: {:?} resolved to the default {}", self.text, self.default);
        }
        self.logger.log_operation(
            "parse_int_or_default",
            &format!("{:?}, {}", self.text, self.default),
            &value.to_string(),
        )?;
        Ok(value.to_string())
    }
}
