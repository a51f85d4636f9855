//! Column layout
//!
//! Actors are laid out left to right as `name` followed by a fixed gap. An
//! actor's stem column sits under the middle of its name; arrows and
//! vertical bars are anchored there.

use std::collections::HashMap;

use super::ordering::ActorSequence;
use crate::core::{display_width, LineCanvas};

/// Spaces written after every actor name in the header
pub const COLUMN_GAP: usize = 3;

/// Positioned actor column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorColumn {
    pub name: String,
    /// Display column where the name starts
    pub start: usize,
    /// Display column under the middle of the name
    pub stem: usize,
}

/// Layout result shared by every arrow row
#[derive(Debug, Clone)]
pub struct MsgFlowLayout {
    pub header: String,
    pub columns: Vec<ActorColumn>,
    /// Blank row with `|` at every stem
    pub template: LineCanvas,
    stems: HashMap<String, usize>,
}

impl MsgFlowLayout {
    /// Stem column of `actor`
    pub fn stem(&self, actor: &str) -> Option<usize> {
        self.stems.get(actor).copied()
    }

    /// Width of the header and template rows
    pub fn width(&self) -> usize {
        self.template.width()
    }
}

/// Column layout algorithm
pub struct MsgFlowLayoutAlgorithm {
    column_gap: usize,
}

impl MsgFlowLayoutAlgorithm {
    pub fn new() -> Self {
        Self {
            column_gap: COLUMN_GAP,
        }
    }

    /// Use `column_gap` spaces after each name
    ///
    /// Below 3, neighbouring stems can end up one column apart or on the same
    /// column, and arrow heads then overwrite the neighbour's `|`.
    pub fn with_column_gap(column_gap: usize) -> Self {
        Self { column_gap }
    }

    /// Position every actor of `actors`
    pub fn layout(&self, actors: &ActorSequence) -> MsgFlowLayout {
        let gap = " ".repeat(self.column_gap);
        let mut header = String::new();
        let mut columns = Vec::with_capacity(actors.len());
        let mut stems = HashMap::with_capacity(actors.len());
        let mut start = 0;

        for name in actors.iter() {
            let width = display_width(name);
            let stem = start + width / 2;

            header.push_str(name);
            header.push_str(&gap);
            stems.insert(name.to_string(), stem);
            columns.push(ActorColumn {
                name: name.to_string(),
                start,
                stem,
            });

            start += width + self.column_gap;
        }

        // Coinciding stems share one bar
        let mut template = LineCanvas::new(start);
        for column in &columns {
            template.set_char(column.stem, '|');
        }

        MsgFlowLayout {
            header,
            columns,
            template,
            stems,
        }
    }
}

impl Default for MsgFlowLayoutAlgorithm {
    fn default() -> Self {
        Self::new()
    }
}
