//! Utility modules for common functionality
//!
//! This module provides the logger used by the binary and small string
//! helpers shared across the crate.

pub mod logger;
pub(crate) mod string_utils;
