//! Message-flow pipeline
//!
//! Input lines pass through the [`MsgFlowParser`] (directives, then
//! extraction rules) into a [`MsgFlowDatabase`]; the [`MsgFlowRenderer`]
//! orders the actors and draws one arrow per extracted flow.
//!
//! ```text
//! #!MF:regex:(\w+)->(\w+): (\w+) (.*), #!MF:reformat_to:src:@1, dst:@2, msg_id:@3, extra_info:@4
//! #!MF:main_actor:A
//! A->B: PING hello
//! ```
//!
//! renders as
//!
//! ```text
//! A   B
//! |-->|    PING   hello
//! ```

mod config;
mod database;
mod directive;
mod extractor;
mod layout;
mod ordering;
mod parser;
mod renderer;
mod rule;

pub use config::MsgFlowConfig;
pub use database::{Annotation, MessageFlow, MsgFlowDatabase};
pub use directive::{try_parse_directive, Directive};
pub use extractor::{apply_rule, decode_flow, extract};
pub use layout::{ActorColumn, MsgFlowLayout, MsgFlowLayoutAlgorithm, COLUMN_GAP};
pub use ordering::{order_actors, ActorSequence};
pub use parser::{LineKind, MsgFlowParser};
pub use renderer::{draw_arrow, MsgFlowRenderer};
pub use rule::{
    compile_full_match, full_match_captures, normalize_pattern, ExtractionRule,
    MAX_CAPTURE_GROUPS,
};
