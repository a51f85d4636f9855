//! msgflow - Draw ASCII message-flow diagrams from log output
//!
//! Directive lines embedded in the input configure regex extraction rules;
//! every other line that matches a rule becomes an arrow between two actor
//! columns.
//!
//! # Quick Start
//!
//! ```rust
//! use msgflow::render;
//!
//! let input = "\
//! #!MF:regex:(\\w+)->(\\w+): (\\w+) (.*), #!MF:reformat_to:src:@1, dst:@2, msg_id:@3, extra_info:@4
//! #!MF:main_actor:A
//! A->B: PING hello";
//!
//! let diagram = render(input).unwrap();
//! assert_eq!(diagram, "A   B   \n|-->|    PING   hello\n");
//! ```
//!
//! # Advanced Usage
//!
//! ```rust
//! use msgflow::prelude::*;
//!
//! let parser = MsgFlowParser::new();
//! let mut database = MsgFlowDatabase::new();
//! parser.parse("#!MF:main_actor:client", &mut database).unwrap();
//!
//! let actors = order_actors(database.flows(), database.config());
//! assert_eq!(actors.as_slice(), ["client"]);
//!
//! let renderer = MsgFlowRenderer::new();
//! let ascii = renderer.render(&database).unwrap();
//! assert_eq!(ascii, "client   \n");
//! ```

pub mod core;
pub mod flow;

use std::io::BufRead;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{MsgFlowError, Parser, Renderer, RuleRejection};
    pub use crate::flow::{
        order_actors, ActorSequence, Annotation, ExtractionRule, MessageFlow, MsgFlowConfig,
        MsgFlowDatabase, MsgFlowParser, MsgFlowRenderer,
    };
}

/// Render message-flow input to an ASCII diagram
///
/// The input is split into lines, fully parsed, and then drawn.
pub fn render(input: &str) -> anyhow::Result<String> {
    use crate::core::Renderer as _;

    let database = parse(input)?;
    flow::MsgFlowRenderer::new().render(&database)
}

/// Render an already-split sequence of lines
///
/// ```rust
/// let diagram = msgflow::render_lines(["#!MF:main_actor:A"]);
/// assert_eq!(diagram, "A   \n");
/// ```
pub fn render_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut database = flow::MsgFlowDatabase::new();
    flow::MsgFlowParser::new().parse_lines(lines, &mut database);

    let actors = flow::order_actors(database.flows(), database.config());
    flow::MsgFlowRenderer::new().render_with_actors(&actors, &database)
}

/// Read every line from `reader`, then render them
pub fn render_reader<R: BufRead>(reader: R) -> Result<String, MsgFlowError> {
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(render_lines(lines))
}

/// Parse message-flow input into a database without rendering
///
/// ```rust
/// let db = msgflow::parse("#!MF:draw_from_right:\nsome text").unwrap();
/// assert!(db.config().draw_from_right);
/// assert_eq!(db.annotation_count(), 1);
/// ```
pub fn parse(input: &str) -> anyhow::Result<flow::MsgFlowDatabase> {
    use crate::core::Parser as _;

    let parser = flow::MsgFlowParser::new();
    let mut database = flow::MsgFlowDatabase::new();
    parser.parse(input, &mut database)?;
    Ok(database)
}
