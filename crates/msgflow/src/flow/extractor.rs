//! Extraction engine
//!
//! Each rule is tried in order: full-match the line, substitute the captured
//! values into the rule's template, then decode the result into a
//! [`MessageFlow`]. The first rule that gets all the way through wins.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::trace;

use super::config::MsgFlowConfig;
use super::database::MessageFlow;
use super::rule::ExtractionRule;
use crate::core::substitute_placeholders;

static REFORMATTED_FLOW: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\Asrc:(.*), dst:(.*), msg_id:(.*), extra_info:(.*)\z")
        .expect("valid reformat regex")
});

/// Decode a reformatted `src:<S>, dst:<D>, msg_id:<M>, extra_info:<E>` string
pub fn decode_flow(reformatted: &str) -> Option<MessageFlow> {
    let caps = REFORMATTED_FLOW.captures(reformatted)?;
    Some(MessageFlow::new(&caps[1], &caps[2], &caps[3], &caps[4]))
}

/// Run a single rule against `line`
pub fn apply_rule(rule: &ExtractionRule, line: &str) -> Option<MessageFlow> {
    let captured = rule.capture(line)?;
    let reformatted = substitute_placeholders(rule.template(), &captured);
    let flow = decode_flow(&reformatted);
    if flow.is_none() {
        trace!(
            pattern = rule.pattern(),
            reformatted = %reformatted,
            "Template did not decode into a message flow"
        );
    }
    flow
}

/// Try every rule of `config` in declaration order
pub fn extract(line: &str, config: &MsgFlowConfig) -> Option<MessageFlow> {
    config
        .usable_rules()
        .find_map(|rule| apply_rule(rule, line))
}
