//! Core parser trait for message-flow input
//!
//! A parser consumes raw input text and accumulates structured state into a
//! database that a renderer later reads.

use anyhow::Result;

/// Core trait for input parsers
///
/// # Example
/// ```
/// use msgflow::core::Parser;
/// use msgflow::flow::{MsgFlowDatabase, MsgFlowParser};
///
/// let parser = MsgFlowParser::new();
/// let mut db = MsgFlowDatabase::new();
/// parser.parse("#!MF:main_actor:A", &mut db).unwrap();
/// assert_eq!(db.config().main_actor, "A");
/// ```
pub trait Parser<D>: Send + Sync {
    /// Parse input into the provided database
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input can be parsed by this parser
    fn can_parse(&self, input: &str) -> bool;
}
