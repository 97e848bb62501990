//! Registry configuration.
//!
//! [`RegistryConfig`] is the construction input for a
//! [`ChartRegistry`](crate::ChartRegistry). It names the querying agent and
//! the board topology every chart grid shares. The topology is built (and
//! its dimensions validated) once, when the registry is created.

use std::sync::Arc;

use cartograph_core::AgentId;
use cartograph_space::{Adjacency, EdgeBehavior, SpaceError, Topology};

/// Construction parameters for a chart registry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// The agent the charts are computed for. Drives the default passability
    /// rule: the agent's own cell is passable, other agents' cells are not.
    pub me: AgentId,
    /// Neighbourhood used by every chart's flood. Default: four-connected.
    pub adjacency: Adjacency,
    /// Behaviour at the board edge. Default: absorb.
    pub edge: EdgeBehavior,
}

impl RegistryConfig {
    /// Default topology, querying as `me`.
    pub fn new(me: AgentId) -> Self {
        Self {
            me,
            ..Self::default()
        }
    }

    /// Replace the neighbourhood.
    pub fn with_adjacency(mut self, adjacency: Adjacency) -> Self {
        self.adjacency = adjacency;
        self
    }

    /// Replace the edge behaviour.
    pub fn with_edge(mut self, edge: EdgeBehavior) -> Self {
        self.edge = edge;
        self
    }

    /// Build the shared topology for a `width` x `height` board.
    ///
    /// Fails when either dimension is zero or exceeds the supported maximum.
    pub fn build_topology(&self, width: u32, height: u32) -> Result<Arc<dyn Topology>, SpaceError> {
        self.adjacency.build(width, height, self.edge).map(Arc::from)
    }
}
