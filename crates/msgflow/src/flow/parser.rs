//! Message-flow input parser
//!
//! Every non-empty line is offered to the directive parser first, then to the
//! extraction rules; a line that matches neither is kept as an annotation.

use anyhow::Result;
use tracing::{info, span, trace, Level};

use super::database::MsgFlowDatabase;
use super::directive::try_parse_directive;
use super::extractor::extract;
use crate::core::Parser;

/// How a single input line was consumed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    Directive,
    Flow,
    Unmatched,
}

/// Message-flow parser
pub struct MsgFlowParser;

impl MsgFlowParser {
    pub fn new() -> Self {
        Self
    }

    /// Feed one line into `database`
    pub fn process_line(&self, line: &str, database: &mut MsgFlowDatabase) -> LineKind {
        if line.is_empty() {
            return LineKind::Empty;
        }

        if try_parse_directive(line, database.config_mut()) {
            return LineKind::Directive;
        }

        match extract(line, database.config()) {
            Some(flow) => {
                trace!(
                    source = %flow.source,
                    destination = %flow.destination,
                    message_id = %flow.message_id,
                    "Extracted message flow"
                );
                database.add_flow(flow);
                LineKind::Flow
            }
            None => {
                trace!(line, "Line matched no extraction rule");
                database.add_unmatched(line);
                LineKind::Unmatched
            }
        }
    }

    /// Feed every line of `lines` into `database`, in order
    pub fn parse_lines<I, S>(&self, lines: I, database: &mut MsgFlowDatabase)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let parse_span = span!(Level::INFO, "parse_msgflow");
        let _enter = parse_span.enter();

        let mut lines_read = 0usize;
        for line in lines {
            self.process_line(line.as_ref(), database);
            lines_read += 1;
        }

        info!(
            lines = lines_read,
            rules = database.config().rules.len(),
            flows = database.flow_count(),
            unmatched = database.annotation_count(),
            "Parsing completed"
        );
    }
}

impl Default for MsgFlowParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser<MsgFlowDatabase> for MsgFlowParser {
    fn parse(&self, input: &str, database: &mut MsgFlowDatabase) -> Result<()> {
        self.parse_lines(input.lines(), database);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "msgflow"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn can_parse(&self, input: &str) -> bool {
        input.lines().any(|line| line.starts_with("#!MF:"))
    }
}
