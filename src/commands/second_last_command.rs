//! Second-to-last character search command

use clap::ArgMatches;

use crate::commands::command_traits::Command;
use crate::commands::required_string;
use crate::strings::errors::{StrError, StrResult};
use crate::strings::locate::find_second_last_char;
use crate::utils::logger::Logger;
use crate::utils::string_utils::single_char;

/// Command that prints the suffix starting at the second-to-last `CHAR`
pub struct SecondLastCommand<'a> {
    subject: String,
    target: char,
    logger: &'a Logger,
}

impl<'a> SecondLastCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> StrResult<Self> {
        let subject = required_string(args, "subject")?;
        let raw = required_string(args, "char")?;
        let target = single_char(&raw).ok_or_else(|| {
            StrError::InvalidArgument(format!("expected a single character, got {:?}", raw))
        })?;

        Ok(SecondLastCommand { subject, target, logger })
    }
}

impl<'a> Command for SecondLastCommand<'a> {
    fn evaluate(&self) -> StrResult<String> {
        let found = find_second_last_char(&self.subject, self.target);
        self.logger.log_operation(
            "find_second_last_char",
            &format!("{:?}, {:?}", self.subject, self.target),
            &format!("{:?}", found),
        )?;

        found.map(str::to_string).ok_or_else(|| {
            StrError::GenericError(format!(
                "{:?} occurs fewer than two times in {:?}",
                self.target, self.subject
            ))
        })
    }
}
