//! Process-flow network: counts of consecutive action pairs within cases.

use super::TOP_TRANSITIONS;
use crate::cases::CaseIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One directed edge of the flow network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub source: String,
    pub target: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlowNetwork {
    /// Highest-count transitions, descending.
    pub transitions: Vec<Transition>,
    /// Distinct transition pairs before truncation.
    pub distinct_pairs: usize,
}

impl FlowNetwork {
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Node labels: every action used by a kept transition, in order of
    /// first use (source before target).
    pub fn nodes(&self) -> Vec<&str> {
        let mut nodes: Vec<&str> = Vec::new();
        for t in &self.transitions {
            for label in [t.source.as_str(), t.target.as_str()] {
                if !nodes.contains(&label) {
                    nodes.push(label);
                }
            }
        }
        nodes
    }
}

/// Count transitions across all cases and keep the top [`TOP_TRANSITIONS`].
///
/// Pairs with equal counts keep the order in which they were first seen.
pub fn flow_network(cases: &CaseIndex<'_>) -> FlowNetwork {
    let mut position: HashMap<(&str, &str), usize> = HashMap::new();
    let mut transitions: Vec<Transition> = Vec::new();

    for case in cases.cases() {
        for (source, target) in case.transitions() {
            match position.get(&(source, target)) {
                Some(&idx) => transitions[idx].count += 1,
                None => {
                    position.insert((source, target), transitions.len());
                    transitions.push(Transition {
                        source: source.to_string(),
                        target: target.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    let distinct_pairs = transitions.len();
    transitions.sort_by(|a, b| b.count.cmp(&a.count));
    transitions.truncate(TOP_TRANSITIONS);

    FlowNetwork {
        transitions,
        distinct_pairs,
    }
}
