//! Message-flow database
//!
//! Holds the configuration, the matched message flows and the lines that
//! matched no rule, all in input order.

use serde::Serialize;

use super::config::MsgFlowConfig;

/// One matched communication event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageFlow {
    pub source: String,
    pub destination: String,
    pub message_id: String,
    pub extra_info: String,
}

impl MessageFlow {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        message_id: impl Into<String>,
        extra_info: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            message_id: message_id.into(),
            extra_info: extra_info.into(),
        }
    }

    /// Source and destination are the same actor
    pub fn is_self_message(&self) -> bool {
        self.source == self.destination
    }
}

/// A line that matched no rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Number of flows extracted before this line was read
    pub flows_before: usize,
    pub line: String,
}

impl Annotation {
    pub fn new(flows_before: usize, line: impl Into<String>) -> Self {
        Self {
            flows_before,
            line: line.into(),
        }
    }
}

/// Parsed state of a message-flow input
#[derive(Debug, Clone, Default)]
pub struct MsgFlowDatabase {
    config: MsgFlowConfig,
    flows: Vec<MessageFlow>,
    annotations: Vec<Annotation>,
}

impl MsgFlowDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a preset configuration instead of the defaults
    pub fn with_config(config: MsgFlowConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &MsgFlowConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut MsgFlowConfig {
        &mut self.config
    }

    /// Record a matched flow
    pub fn add_flow(&mut self, flow: MessageFlow) {
        self.flows.push(flow);
    }

    /// Record an unmatched line, tagged with the current flow count
    pub fn add_unmatched(&mut self, line: impl Into<String>) {
        let annotation = Annotation::new(self.flows.len(), line);
        self.annotations.push(annotation);
    }

    pub fn flows(&self) -> &[MessageFlow] {
        &self.flows
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn flow_count(&self) -> usize {
        self.flows.len()
    }

    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    /// Clear flows and annotations, resetting the configuration to defaults
    pub fn clear(&mut self) {
        self.config = MsgFlowConfig::default();
        self.flows.clear();
        self.annotations.clear();
    }
}
