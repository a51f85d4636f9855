//! Core error types for message-flow processing
//!
//! The drawing pipeline itself never fails: unusable rules and unmatched lines are
//! suppressed locally. These types describe *why* a rule was rejected and cover the
//! I/O boundary around the pipeline.

use thiserror::Error;

/// Reason an extraction rule can never match
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleRejection {
    #[error("pattern has no capturing groups")]
    NoGroups,

    #[error("pattern has {count} capturing groups, at most {max} are allowed")]
    TooManyGroups { count: usize, max: usize },

    #[error("unbalanced parentheses ({open} opening, {close} closing)")]
    Unbalanced { open: usize, close: usize },

    #[error("regex does not compile: {0}")]
    Syntax(String),
}

/// Errors surfaced at the edges of the message-flow pipeline
#[derive(Error, Debug)]
pub enum MsgFlowError {
    #[error("Invalid extraction rule '{pattern}': {reason}")]
    InvalidRule {
        pattern: String,
        reason: RuleRejection,
    },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl MsgFlowError {
    /// Create a new invalid-rule error
    pub fn invalid_rule(pattern: impl Into<String>, reason: RuleRejection) -> Self {
        Self::InvalidRule {
            pattern: pattern.into(),
            reason,
        }
    }
}
