//! Truthy token tables
//!
//! The built-in table is compiled in from `truthy_tokens.toml`. Custom
//! tables use the same format:
//!
//! ```toml
//! case_sensitive = false
//! tokens = ["1", "true", "yes", "on"]
//! ```

use std::fs;
use lazy_static::lazy_static;
use log::warn;

use crate::strings::errors::{StrError, StrResult};
use crate::utils::string_utils::is_valid_token;

// Used only if the compiled-in table fails to parse
const FALLBACK_TOKENS: [&str; 4] = ["1", "true", "yes", "on"];

lazy_static! {
    static ref BUILTIN_TOKENS: TruthyTokens = {
        let content = include_str!("../../truthy_tokens.toml");
        TruthyTokens::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse built-in truthy tokens, using fallback set: {}", e);
            TruthyTokens::fallback()
        })
    };
}

/// An enumerated set of tokens that read as logical true
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthyTokens {
    // Lowercased unless case_sensitive is set
    tokens: Vec<String>,
    case_sensitive: bool,
}

impl TruthyTokens {
    /// The table compiled into the crate
    pub fn builtin() -> &'static TruthyTokens {
        &BUILTIN_TOKENS
    }

    fn fallback() -> Self {
        TruthyTokens {
            tokens: FALLBACK_TOKENS.iter().map(|t| t.to_string()).collect(),
            case_sensitive: false,
        }
    }

    /// Parse a token table from TOML text
    ///
    /// `tokens` is required. `case_sensitive` defaults to false. Duplicate
    /// tokens are dropped.
    pub fn from_str(content: &str) -> StrResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| StrError::InvalidConfig(format!("Failed to parse TOML: {}", e)))?;

        let case_sensitive = match toml_value.get("case_sensitive") {
            Some(value) => value.as_bool().ok_or_else(|| {
                StrError::InvalidConfig("`case_sensitive` must be a boolean".to_string())
            })?,
            None => false,
        };

        let entries = toml_value
            .get("tokens")
            .and_then(|v| v.as_array())
            .ok_or_else(|| StrError::InvalidConfig("missing `tokens` array".to_string()))?;

        let mut tokens: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            let token = entry.as_str().ok_or_else(|| {
                StrError::InvalidConfig(format!("token {} is not a string", entry))
            })?;
            if !is_valid_token(token) {
                return Err(StrError::InvalidToken(token.to_string()));
            }

            let token = if case_sensitive {
                token.to_string()
            } else {
                token.to_ascii_lowercase()
            };
            if !tokens.contains(&token) {
                tokens.push(token);
            }
        }

        Ok(TruthyTokens { tokens, case_sensitive })
    }

    /// Load a token table from a TOML file
    pub fn from_file(path: &str) -> StrResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Whether `buffer` is exactly one of the tokens
    pub fn is_truthy(&self, buffer: &[u8]) -> bool {
        self.tokens.iter().any(|token| {
            if self.case_sensitive {
                token.as_bytes() == buffer
            } else {
                token.as_bytes().eq_ignore_ascii_case(buffer)
            }
        })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }
}

impl Default for TruthyTokens {
    fn default() -> Self {
        BUILTIN_TOKENS.clone()
    }
}
