//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application.

use crate::utils::logger::Logger;
use crate::strings::errors::StrResult;

/// Represents an executable command in the application
pub trait Command {
    /// Compute the text the command prints on success
    fn evaluate(&self) -> StrResult<String>;

    /// Execute the command, printing its result to stdout
    fn execute(&self) -> StrResult<()> {
        let output = self.evaluate()?;
        println!("{}", output);
        Ok(())
    }
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, logger: &'a Logger) -> StrResult<Box<dyn Command + 'a>>;
}
