//! Directive lines
//!
//! Configuration is embedded in the input itself as lines starting with
//! `#!MF:`. Forms are recognized in this priority order:
//!
//! ```text
//! #!MF:regex:<PATTERN>, #!MF:reformat_to:<TEMPLATE>
//! #!MF:main_actor:<NAME>
//! #!MF:draw_from_right:
//! #!MF:unknwn_msg_as_extra_info:
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::config::MsgFlowConfig;
use super::rule::ExtractionRule;

pub const MAIN_ACTOR_PREFIX: &str = "#!MF:main_actor:";
pub const DRAW_FROM_RIGHT_PREFIX: &str = "#!MF:draw_from_right:";
pub const UNKNOWN_AS_EXTRA_INFO_PREFIX: &str = "#!MF:unknwn_msg_as_extra_info:";

static RULE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A#!MF:regex:(.*),\s*#!MF:reformat_to:(.*)\z").expect("valid directive regex")
});

/// A recognized configuration line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Rule { pattern: String, template: String },
    MainActor(String),
    DrawFromRight,
    UnknownAsExtraInfo,
}

impl Directive {
    /// Recognize a directive line, or `None` for ordinary text
    pub fn parse(line: &str) -> Option<Self> {
        if let Some(caps) = RULE_DIRECTIVE.captures(line) {
            return Some(Directive::Rule {
                pattern: caps[1].to_string(),
                template: caps[2].to_string(),
            });
        }

        if let Some(actor) = line.strip_prefix(MAIN_ACTOR_PREFIX) {
            return Some(Directive::MainActor(actor.to_string()));
        }

        if line.starts_with(DRAW_FROM_RIGHT_PREFIX) {
            return Some(Directive::DrawFromRight);
        }

        if line.starts_with(UNKNOWN_AS_EXTRA_INFO_PREFIX) {
            return Some(Directive::UnknownAsExtraInfo);
        }

        None
    }

    /// Apply this directive to `config`
    pub fn apply(self, config: &mut MsgFlowConfig) {
        debug!(directive = ?self, "Applying directive");
        match self {
            Directive::Rule { pattern, template } => {
                config.add_rule(ExtractionRule::new(pattern, template));
            }
            Directive::MainActor(actor) => config.main_actor = actor,
            Directive::DrawFromRight => config.draw_from_right = true,
            Directive::UnknownAsExtraInfo => config.unknown_as_extra_info = true,
        }
    }
}

/// Apply `line` to `config` if it is a directive; returns whether it was consumed
pub fn try_parse_directive(line: &str, config: &mut MsgFlowConfig) -> bool {
    match Directive::parse(line) {
        Some(directive) => {
            directive.apply(config);
            true
        }
        None => false,
    }
}
