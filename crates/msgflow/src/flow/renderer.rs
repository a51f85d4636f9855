//! Message-flow ASCII renderer
//!
//! Output is the header row, one arrow row per flow drawn over a copy of the
//! template row, then (when enabled) the unmatched lines.

use anyhow::Result;
use tracing::{debug, info, span, Level};

use super::database::{MessageFlow, MsgFlowDatabase};
use super::layout::{MsgFlowLayout, MsgFlowLayoutAlgorithm};
use super::ordering::{order_actors, ActorSequence};
use crate::core::LineCanvas;

/// Text between the arrow row and the message id
const ID_SEPARATOR: &str = " ";
/// Text between the message id and the extra info
const INFO_GAP: &str = "   ";

/// Draw one arrow from column `from` to column `to` over a copy of `template`
///
/// A self-message marks its stem with `*`. Otherwise the cells strictly
/// between the two stems hold the arrow; when the stems are adjacent only the
/// head or tail is written, over the far stem.
pub fn draw_arrow(template: &LineCanvas, from: usize, to: usize) -> LineCanvas {
    let mut row = template.clone();

    if from == to {
        row.set_char(from, '*');
        return row;
    }

    let body = from.abs_diff(to).saturating_sub(2);
    let start = from.min(to) + 1;
    if from > to {
        row.set_char(start, '<');
        row.draw_horizontal_line(start + 1, body, '-');
    } else {
        row.draw_horizontal_line(start, body, '-');
        row.set_char(start + body, '>');
    }
    row
}

/// Message-flow renderer
pub struct MsgFlowRenderer {
    layout: MsgFlowLayoutAlgorithm,
}

impl MsgFlowRenderer {
    pub fn new() -> Self {
        Self {
            layout: MsgFlowLayoutAlgorithm::new(),
        }
    }

    pub fn with_layout(layout: MsgFlowLayoutAlgorithm) -> Self {
        Self { layout }
    }

    /// Render `database` with an explicit column order
    pub fn render_with_actors(
        &self,
        actors: &ActorSequence,
        database: &MsgFlowDatabase,
    ) -> String {
        let render_span = span!(
            Level::INFO,
            "render_msgflow",
            actors = actors.len(),
            flows = database.flow_count()
        );
        let _enter = render_span.enter();

        let config = database.config();
        let layout = self.layout.layout(actors);
        debug!(width = layout.width(), "Laid out actor columns");

        let mut output = String::new();
        output.push_str(&layout.header);
        output.push('\n');

        for (index, flow) in database.flows().iter().enumerate() {
            output.push_str(&self.arrow_row(&layout, flow));
            output.push_str(ID_SEPARATOR);
            output.push_str(&flow.message_id);
            output.push_str(INFO_GAP);
            if config.unknown_as_extra_info {
                output.push_str(&format!("[{}] ", index + 1));
            }
            output.push_str(&flow.extra_info);
            output.push('\n');
        }

        if config.unknown_as_extra_info {
            for annotation in database.annotations() {
                output.push_str(&format!("[{}] {}\n", annotation.flows_before, annotation.line));
            }
        }

        info!(bytes = output.len(), "Rendered message-flow diagram");
        output
    }

    fn arrow_row(&self, layout: &MsgFlowLayout, flow: &MessageFlow) -> String {
        let from = self.stem_or_origin(layout, &flow.source);
        let to = self.stem_or_origin(layout, &flow.destination);
        draw_arrow(&layout.template, from, to).to_string()
    }

    fn stem_or_origin(&self, layout: &MsgFlowLayout, actor: &str) -> usize {
        layout.stem(actor).unwrap_or_else(|| {
            debug!(actor, "Actor has no column, anchoring at column 0");
            0
        })
    }
}

impl Default for MsgFlowRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::core::Renderer<MsgFlowDatabase> for MsgFlowRenderer {
    type Output = String;

    fn render(&self, database: &MsgFlowDatabase) -> Result<Self::Output> {
        let actors = order_actors(database.flows(), database.config());
        Ok(self.render_with_actors(&actors, database))
    }

    fn name(&self) -> &'static str {
        "ascii"
    }

    fn version(&self) -> &'static str {
        "0.1.0"
    }

    fn format(&self) -> &'static str {
        "ascii"
    }
}
