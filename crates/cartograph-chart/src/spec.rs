//! Chart specifications: what a registered chart seeds from, what it pays
//! to cross each cell, and what other charts it reads.

use std::fmt;

use indexmap::IndexSet;

use crate::query::{CostQuery, SeedQuery};

/// Everything the registry needs to recompute one chart.
///
/// Built from a seed query, optionally extended with a cost query and
/// explicit reads. Without a cost query the chart is seed-only: seeds are
/// settled and nothing propagates.
///
/// ```
/// use cartograph_chart::{cost, seed, type_filter, ChartSpec};
/// use cartograph_core::TileKind;
///
/// let spec = ChartSpec::new(seed::matching(type_filter(TileKind::Haven.mask())))
///     .cost(cost::by_chart("enemies", 6.0, 4.0))
///     .reads("mines");
/// assert_eq!(spec.dependencies(), vec!["enemies".to_owned(), "mines".to_owned()]);
/// ```
pub struct ChartSpec {
    seed: Box<dyn SeedQuery>,
    cost: Option<Box<dyn CostQuery>>,
    reads: Vec<String>,
}

impl ChartSpec {
    /// A seed-only chart.
    pub fn new(seed: impl SeedQuery) -> Self {
        Self {
            seed: Box::new(seed),
            cost: None,
            reads: Vec::new(),
        }
    }

    /// Propagate under `cost`.
    pub fn cost(mut self, cost: impl CostQuery) -> Self {
        self.cost = Some(Box::new(cost));
        self
    }

    /// Declare a read of `chart` beyond those the queries declare
    /// themselves. Needed when a closure query samples another chart.
    pub fn reads(mut self, chart: impl Into<String>) -> Self {
        self.reads.push(chart.into());
        self
    }

    /// Every chart this spec reads, deduplicated: cost query reads, then
    /// seed query reads, then explicit reads.
    pub fn dependencies(&self) -> Vec<String> {
        let cost_reads = self.cost.iter().flat_map(|c| c.reads());
        let deps: IndexSet<String> = cost_reads
            .chain(self.seed.reads())
            .chain(self.reads.iter().cloned())
            .collect();
        deps.into_iter().collect()
    }

    /// Whether the chart propagates.
    pub fn has_cost(&self) -> bool {
        self.cost.is_some()
    }

    pub(crate) fn seed_query(&self) -> &dyn SeedQuery {
        self.seed.as_ref()
    }

    pub(crate) fn cost_query(&self) -> Option<&dyn CostQuery> {
        self.cost.as_deref()
    }
}

impl fmt::Debug for ChartSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartSpec")
            .field("has_cost", &self.has_cost())
            .field("dependencies", &self.dependencies())
            .finish()
    }
}
