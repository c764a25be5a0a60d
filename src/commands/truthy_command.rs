//! Truthy interpretation command

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::required_string;
use crate::strings::errors::StrResult;
use crate::strings::tokens::TruthyTokens;
use crate::utils::logger::Logger;

/// Command that reports whether a value is a truthy token
///
/// Uses the built-in table unless `--tokens FILE` names a custom one.
pub struct TruthyCommand<'a> {
    value: String,
    tokens: TruthyTokens,
    logger: &'a Logger,
}

impl<'a> TruthyCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> StrResult<Self> {
        let value = required_string(args, "value")?;

        let tokens = match args.get_one::<String>("tokens") {
            Some(path) => {
                let tokens = TruthyTokens::from_file(path)?;
                info!("Loaded {} truthy tokens from {}", tokens.tokens().len(), path);
                tokens
            }
            None => TruthyTokens::builtin().clone(),
        };

        Ok(TruthyCommand { value, tokens, logger })
    }
}

impl<'a> Command for TruthyCommand<'a> {
    fn evaluate(&self) -> StrResult<String> {
        let truthy = self.tokens.is_truthy(self.value.as_bytes());
        debug!("truthy: checked against {:?}", self.tokens.tokens());
        self.logger.log_operation("is_truthy", &format!("{:?}", self.value), &truthy.to_string())?;
        Ok(truthy.to_string())
    }
}
