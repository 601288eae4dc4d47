//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Vex.
//! The Vex project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Vex Error Module
//!
//! This module defines the error types and utilities used throughout the Vex
//! framework for consistent error handling and reporting.
//!
//! ## Error Handling Philosophy
//!
//! Vex uses a structured error approach with the following principles:
//!
//! - **Explicit Error Types**: Each error variant represents a specific category
//!   of failure, making it easier to handle errors appropriately
//! - **Context-Rich**: Errors include relevant context (generator names, rule
//!   names, detailed messages) to aid debugging
//! - **Recoverable Limitations**: Known limitations of individual perturbation
//!   rules are surfaced as the dedicated `RuleLimitation` variant rather than
//!   being hidden in control flow, so callers can convert them into an
//!   empty-result signal where that is the documented behavior
//! - **Serde Support**: Errors can be serialized/deserialized for logging and
//!   persistence
//!
//! ## Error Categories
//!
//! - **Validation**: Input validation failures (bad configuration, bad tags)
//! - **Resource**: Language resource and lexicon loading failures
//! - **Generator**: Failures in generator implementations
//! - **Template**: Template parsing and expansion failures
//! - **RuleLimitation**: A perturbation rule declining an input it cannot
//!   handle; recoverable by design
//! - **Serde**: Serialization/deserialization errors
//! - **Internal**: Unexpected internal failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Convenience result type used throughout Vex.
pub type Result<T> = std::result::Result<T, VexError>;

/// Canonical error enumeration for Vex.
#[derive(Debug, Error, Serialize, Deserialize)]
pub enum VexError {
    /// Validation errors triggered by invalid parameters or inputs.
    #[error("validation error: {message}")]
    Validation { message: String },

    /// Failures while loading language resources or lexicons.
    #[error("resource error: {message}")]
    Resource { message: String },

    /// Any failure raised by a generator implementation.
    #[error("generator '{generator}' failed: {message}")]
    Generator { generator: String, message: String },

    /// Failures while parsing or expanding a template.
    #[error("template error: {message}")]
    Template { message: String },

    /// A perturbation rule declined an input it is known not to handle.
    ///
    /// This is a recoverable signal: dispatch layers with a documented
    /// empty-result policy for the rule convert it into "no results".
    #[error("rule '{rule}' limitation: {message}")]
    RuleLimitation { rule: String, message: String },

    /// Wrapper for serde-style serialization issues.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Catch-all variant for unexpected situations.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for VexError {
    fn from(err: serde_json::Error) -> Self {
        VexError::Serde(err.to_string())
    }
}

impl VexError {
    /// Helper to construct simple validation errors.
    pub fn validation<T: Into<String>>(message: T) -> Self {
        VexError::Validation {
            message: message.into(),
        }
    }

    /// Helper to construct resource errors.
    pub fn resource<T: Into<String>>(message: T) -> Self {
        VexError::Resource {
            message: message.into(),
        }
    }

    /// Helper to construct generator errors.
    pub fn generator(name: impl Into<String>, message: impl Into<String>) -> Self {
        VexError::Generator {
            generator: name.into(),
            message: message.into(),
        }
    }

    /// Helper to construct template errors.
    pub fn template<T: Into<String>>(message: T) -> Self {
        VexError::Template {
            message: message.into(),
        }
    }

    /// Helper to construct rule-limitation signals.
    pub fn rule_limitation(rule: impl Into<String>, message: impl Into<String>) -> Self {
        VexError::RuleLimitation {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Helper to construct internal errors.
    pub fn internal<T: Into<String>>(message: T) -> Self {
        VexError::Internal(message.into())
    }

    /// True when this error is the recoverable rule-limitation signal.
    pub fn is_rule_limitation(&self) -> bool {
        matches!(self, VexError::RuleLimitation { .. })
    }
}
