// scene/index.rs
// Derived lookup over the iteration log: (iteration number, agent id) -> Agent.

use std::collections::HashMap;

use super::{Agent, Iteration};

/// Read-only index built once after load, answering "where was agent A at
/// iteration N" in O(1) without rescanning the iteration list.
///
/// A miss is not an error: an agent present at iteration N but absent at
/// N-1 simply spawned mid-run and gets no trail for that step.
#[derive(Clone, Debug, Default)]
pub struct IterationIndex {
    by_number: HashMap<u32, HashMap<i64, Agent>>,
}

impl IterationIndex {
    /// Flatten every agent observation into the index.
    /// O(total agent observations).
    pub fn build(iterations: &[Iteration]) -> Self {
        let mut by_number = HashMap::with_capacity(iterations.len());
        for iteration in iterations {
            let mut agents: HashMap<i64, Agent> = HashMap::with_capacity(iteration.agents.len());
            for agent in &iteration.agents {
                agents.insert(agent.id, *agent);
            }
            by_number.insert(iteration.number, agents);
        }
        Self { by_number }
    }

    /// The recorded agent at `number`, or `None` when either the iteration
    /// or the agent has no entry there.
    pub fn lookup(&self, number: u32, agent_id: i64) -> Option<&Agent> {
        self.by_number.get(&number)?.get(&agent_id)
    }

    /// Number of indexed iterations.
    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}
