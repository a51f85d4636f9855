//! Actor ordering
//!
//! Columns follow first appearance (source, then destination) in flow order,
//! with the main actor pinned in front. Drawing from the right reverses the
//! whole sequence.

use std::collections::HashSet;

use super::config::MsgFlowConfig;
use super::database::MessageFlow;

/// Ordered, distinct actor names used as diagram columns
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorSequence {
    actors: Vec<String>,
}

impl ActorSequence {
    pub fn new(actors: Vec<String>) -> Self {
        Self { actors }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.actors
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.actors.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Column index of `actor`
    pub fn position(&self, actor: &str) -> Option<usize> {
        self.actors.iter().position(|a| a == actor)
    }
}

/// Build the column order for `flows` under `config`
pub fn order_actors(flows: &[MessageFlow], config: &MsgFlowConfig) -> ActorSequence {
    let main_actor = config.main_actor.as_str();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut actors = vec![main_actor.to_string()];

    for flow in flows {
        for actor in [flow.source.as_str(), flow.destination.as_str()] {
            if actor != main_actor && seen.insert(actor) {
                actors.push(actor.to_string());
            }
        }
    }

    if config.draw_from_right {
        actors.reverse();
    }

    ActorSequence::new(actors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flows(pairs: &[(&str, &str)]) -> Vec<MessageFlow> {
        pairs
            .iter()
            .map(|(s, d)| MessageFlow::new(*s, *d, "M", ""))
            .collect()
    }

    fn names(seq: &ActorSequence) -> Vec<&str> {
        seq.iter().collect()
    }

    #[test]
    fn test_first_seen_order() {
        let config = MsgFlowConfig::new().with_main_actor("A");
        let seq = order_actors(&flows(&[("C", "B"), ("B", "D"), ("D", "C")]), &config);
        assert_eq!(names(&seq), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_main_actor_pinned_first() {
        let config = MsgFlowConfig::new().with_main_actor("B");
        let seq = order_actors(&flows(&[("A", "B"), ("B", "C")]), &config);
        assert_eq!(names(&seq), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_main_actor_present_without_flows() {
        let config = MsgFlowConfig::new().with_main_actor("idle");
        let seq = order_actors(&flows(&[("A", "B")]), &config);
        assert_eq!(names(&seq), vec!["idle", "A", "B"]);
    }

    #[test]
    fn test_default_main_actor_is_empty_column() {
        let seq = order_actors(&[], &MsgFlowConfig::new());
        assert_eq!(names(&seq), vec![""]);
    }

    #[test]
    fn test_draw_from_right_reverses() {
        let config = MsgFlowConfig::new()
            .with_main_actor("A")
            .with_draw_from_right(true);
        let seq = order_actors(&flows(&[("A", "B"), ("B", "C")]), &config);
        assert_eq!(names(&seq), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_self_message_counts_once() {
        let config = MsgFlowConfig::new().with_main_actor("A");
        let seq = order_actors(&flows(&[("B", "B")]), &config);
        assert_eq!(names(&seq), vec!["A", "B"]);
        assert_eq!(seq.position("B"), Some(1));
    }
}
