//! Suffix test command

use clap::ArgMatches;
use log::debug;

use crate::commands::command_traits::Command;
use crate::commands::required_string;
use crate::strings::errors::StrResult;
use crate::strings::suffix::ends_with;
use crate::utils::logger::Logger;

/// Command that reports whether a subject ends with a suffix
pub struct EndsWithCommand<'a> {
    subject: String,
    suffix: String,
    logger: &'a Logger,
}

impl<'a> EndsWithCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> StrResult<Self> {
        Ok(EndsWithCommand {
            subject: required_string(args, "subject")?,
            suffix: required_string(args, "suffix")?,
            logger,
        })
    }
}

impl<'a> Command for EndsWithCommand<'a> {
    fn evaluate(&self) -> StrResult<String> {
        let matched = ends_with(&self.subject, &self.suffix);
        debug!("ends_with: subject {} bytes, suffix {} bytes", self.subject.len(), self.suffix.len());
        self.logger.log_operation(
            "ends_with",
            &format!("{:?}, {:?}", self.subject, self.suffix),
            &matched.to_string(),
        )?;
        Ok(matched.to_string())
    }
}
