//! Diagram configuration accumulated from directive lines

use super::rule::ExtractionRule;

/// Options that steer extraction and drawing
///
/// Starts from defaults, is mutated while input lines are scanned, and is
/// only read once rendering begins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MsgFlowConfig {
    /// Actor pinned to the first column (last when drawing from the right)
    pub main_actor: String,
    /// Reverse the column order
    pub draw_from_right: bool,
    /// Append unmatched lines to the output, tagged with the flow count at the time
    pub unknown_as_extra_info: bool,
    /// Extraction rules in declaration order; the first match wins
    pub rules: Vec<ExtractionRule>,
}

impl MsgFlowConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_main_actor(mut self, actor: impl Into<String>) -> Self {
        self.main_actor = actor.into();
        self
    }

    pub fn with_draw_from_right(mut self, enabled: bool) -> Self {
        self.draw_from_right = enabled;
        self
    }

    pub fn with_unknown_as_extra_info(mut self, enabled: bool) -> Self {
        self.unknown_as_extra_info = enabled;
        self
    }

    pub fn with_rule(mut self, rule: ExtractionRule) -> Self {
        self.add_rule(rule);
        self
    }

    /// Append a rule after every rule already registered
    pub fn add_rule(&mut self, rule: ExtractionRule) {
        self.rules.push(rule);
    }

    /// Rules that can actually match
    pub fn usable_rules(&self) -> impl Iterator<Item = &ExtractionRule> {
        self.rules.iter().filter(|rule| rule.is_usable())
    }
}
