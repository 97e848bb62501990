//! The [`ChartRegistry`]: named charts recomputed once per turn.

use std::sync::Arc;

use cartograph_core::{AgentId, GridSnapshot, Tile, TileGrid, TurnId};
use cartograph_nav::{FloodStats, NavGrid};
use cartograph_space::Topology;
use indexmap::IndexMap;
use tracing::{debug, info, trace, warn};

use crate::config::RegistryConfig;
use crate::cost::{self, ByChart};
use crate::error::{ChartError, PlanError};
use crate::plan::{plan_charts, ChartPlan};
use crate::query::{ChartLookup, QueryContext};
use crate::sample;
use crate::spec::ChartSpec;

/// Whether a chart reflects the current snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartState {
    /// Registered or re-registered, or the snapshot changed, and the chart
    /// has not been recomputed since. Reads return the last computed data
    /// (all [`UNSET`](cartograph_nav::UNSET) if never computed).
    Stale,
    /// Recomputed against the current snapshot.
    Fresh,
}

struct Chart {
    /// `None` only while this chart is being recomputed.
    grid: Option<NavGrid>,
    spec: ChartSpec,
    reads: Vec<String>,
    state: ChartState,
    computed: Option<TurnId>,
}

/// Read access to the chart table for query contexts.
struct Table<'a>(&'a IndexMap<String, Chart>);

impl ChartLookup for Table<'_> {
    fn lookup(&self, name: &str) -> Option<&NavGrid> {
        self.0.get(name).and_then(|c| c.grid.as_ref())
    }
}

/// Owns the board snapshot and every chart computed from it.
///
/// # Turn cycle
///
/// 1. [`register`](Self::register) charts (usually once, up front).
/// 2. Each turn, [`update`](Self::update) with the new board. Every chart
///    is reset, seeded, and propagated in dependency order.
/// 3. Read charts with [`chart`](Self::chart) or
///    [`sample_normalized`](Self::sample_normalized).
///
/// Charts registered between updates stay [`Stale`](ChartState::Stale)
/// until the next update.
pub struct ChartRegistry {
    config: RegistryConfig,
    topology: Arc<dyn Topology>,
    snapshot: TileGrid,
    turn: TurnId,
    charts: IndexMap<String, Chart>,
    plan: ChartPlan,
}

impl ChartRegistry {
    /// A registry for boards shaped like `snapshot`.
    ///
    /// The snapshot's dimensions are fixed for the registry's lifetime.
    /// No charts are computed until the first [`update`](Self::update).
    pub fn new(snapshot: TileGrid, config: RegistryConfig) -> Result<Self, ChartError> {
        let topology = config.build_topology(snapshot.width(), snapshot.height())?;
        Ok(Self {
            config,
            topology,
            snapshot,
            turn: TurnId::default(),
            charts: IndexMap::new(),
            plan: ChartPlan::default(),
        })
    }

    /// Add a chart, or replace the chart registered under `name`.
    ///
    /// Replacing keeps the chart's position in registration order and
    /// reuses its grid buffers. Fails if the spec's reads name an unknown
    /// chart, the chart itself, or close a cycle; the registry is then
    /// unchanged.
    pub fn register(&mut self, name: impl Into<String>, spec: ChartSpec) -> Result<(), ChartError> {
        let name = name.into();
        let reads = spec.dependencies();

        let mut table = self.read_table();
        table.insert(name.clone(), reads.clone());
        let plan = plan_charts(&table)?;

        let grid = match self.charts.get_mut(&name).and_then(|c| c.grid.take()) {
            Some(mut grid) => {
                grid.reset();
                grid
            }
            None => NavGrid::with_topology(Arc::clone(&self.topology)),
        };
        debug!(chart = %name, reads = ?reads, "chart registered");
        self.charts.insert(
            name,
            Chart {
                grid: Some(grid),
                spec,
                reads,
                state: ChartState::Stale,
                computed: None,
            },
        );
        self.set_plan(plan);
        Ok(())
    }

    /// Remove a chart. Fails while other charts read it.
    pub fn unregister(&mut self, name: &str) -> Result<(), ChartError> {
        if !self.charts.contains_key(name) {
            return Err(not_found(name));
        }
        let dependents: Vec<String> = self
            .charts
            .iter()
            .filter(|(_, c)| c.reads.iter().any(|r| r == name))
            .map(|(n, _)| n.clone())
            .collect();
        if !dependents.is_empty() {
            return Err(PlanError::DependentCharts {
                chart: name.to_owned(),
                dependents,
            }
            .into());
        }

        let mut table = self.read_table();
        table.shift_remove(name);
        let plan = plan_charts(&table)?;
        self.charts.shift_remove(name);
        debug!(chart = name, "chart unregistered");
        self.set_plan(plan);
        Ok(())
    }

    /// Install a new board and recompute every chart.
    ///
    /// The board must have the registry's dimensions. Advances the turn
    /// counter, then resets, seeds, and propagates each chart in dependency
    /// order, so a chart reading another sees this turn's values.
    pub fn update(&mut self, snapshot: TileGrid) -> Result<(), ChartError> {
        let (width, height) = (self.snapshot.width(), self.snapshot.height());
        if (snapshot.width(), snapshot.height()) != (width, height) {
            warn!(
                width,
                height,
                actual_width = snapshot.width(),
                actual_height = snapshot.height(),
                "rejecting snapshot of wrong size"
            );
            return Err(ChartError::SnapshotSizeMismatch {
                width,
                height,
                actual_width: snapshot.width(),
                actual_height: snapshot.height(),
            });
        }

        self.snapshot = snapshot;
        self.turn = self.turn.next();
        for chart in self.charts.values_mut() {
            chart.state = ChartState::Stale;
        }

        for i in 0..self.plan.len() {
            let index = self.plan.order()[i];
            self.recompute(index);
        }
        info!(turn = %self.turn, charts = self.charts.len(), "charts updated");
        Ok(())
    }

    fn recompute(&mut self, index: usize) {
        let Some(mut grid) = self
            .charts
            .get_index_mut(index)
            .and_then(|(_, c)| c.grid.take())
        else {
            return;
        };

        if let Some((name, chart)) = self.charts.get_index(index) {
            let table = Table(&self.charts);
            let ctx = QueryContext::new(
                &self.snapshot,
                &table,
                &chart.reads,
                self.config.me,
                self.turn,
            );
            let stats = flood(&mut grid, &chart.spec, &ctx);
            debug!(
                chart = %name,
                seeds = stats.seeds,
                reached = stats.settled,
                "chart recomputed"
            );
        }

        if let Some((_, chart)) = self.charts.get_index_mut(index) {
            chart.grid = Some(grid);
            chart.state = ChartState::Fresh;
            chart.computed = Some(self.turn);
        }
    }

    fn read_table(&self) -> IndexMap<String, Vec<String>> {
        self.charts
            .iter()
            .map(|(n, c)| (n.clone(), c.reads.clone()))
            .collect()
    }

    fn set_plan(&mut self, plan: ChartPlan) {
        trace!(
            order = ?plan
                .order()
                .iter()
                .filter_map(|&i| self.charts.get_index(i).map(|(n, _)| n.as_str()))
                .collect::<Vec<_>>(),
            "chart plan rebuilt"
        );
        self.plan = plan;
    }

    /// The chart registered under `name`.
    ///
    /// A [`Stale`](ChartState::Stale) chart still answers, with the data
    /// from its last recompute.
    pub fn chart(&self, name: &str) -> Result<&NavGrid, ChartError> {
        self.charts
            .get(name)
            .and_then(|c| c.grid.as_ref())
            .ok_or_else(|| not_found(name))
    }

    /// Whether `name` reflects the current snapshot.
    pub fn state(&self, name: &str) -> Result<ChartState, ChartError> {
        self.charts
            .get(name)
            .map(|c| c.state)
            .ok_or_else(|| not_found(name))
    }

    /// The turn `name` was last recomputed in, if ever.
    pub fn computed_at(&self, name: &str) -> Result<Option<TurnId>, ChartError> {
        self.charts
            .get(name)
            .map(|c| c.computed)
            .ok_or_else(|| not_found(name))
    }

    /// Charts `name` reads.
    pub fn reads_of(&self, name: &str) -> Result<&[String], ChartError> {
        self.charts
            .get(name)
            .map(|c| c.reads.as_slice())
            .ok_or_else(|| not_found(name))
    }

    /// [`normalize`](crate::normalize)d cost of chart `name` at `(x, y)`.
    pub fn sample_normalized(
        &self,
        x: i32,
        y: i32,
        name: &str,
        zero_value: f32,
    ) -> Result<f32, ChartError> {
        let cost = self.chart(name)?.cost_at(x, y)?;
        Ok(sample::normalize(cost, zero_value))
    }

    /// A cost query that makes cells near `name`'s seeds more expensive.
    ///
    /// See [`cost::by_chart`]. The query declares `name` as a read, so a
    /// chart registered with it is always recomputed after `name`.
    pub fn cost_by_chart(&self, name: impl Into<String>, zero_value: f32, scale: f32) -> ByChart {
        cost::by_chart(name, zero_value, scale)
    }

    /// Default entry cost of `tile` for the querying agent.
    pub fn default_cost(&self, tile: &Tile) -> Option<f32> {
        sample::default_cost(tile, self.config.me)
    }

    /// The current board.
    pub fn snapshot(&self) -> &TileGrid {
        &self.snapshot
    }

    /// The querying agent.
    pub fn me(&self) -> AgentId {
        self.config.me
    }

    /// Updates applied so far.
    pub fn turn(&self) -> TurnId {
        self.turn
    }

    /// The construction config.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Number of registered charts.
    pub fn len(&self) -> usize {
        self.charts.len()
    }

    /// Whether no charts are registered.
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.charts.contains_key(name)
    }

    /// Chart names in recompute order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.plan
            .order()
            .iter()
            .filter_map(|&i| self.charts.get_index(i).map(|(n, _)| n.as_str()))
    }
}

impl std::fmt::Debug for ChartRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartRegistry")
            .field("me", &self.config.me)
            .field("turn", &self.turn)
            .field("width", &self.snapshot.width())
            .field("height", &self.snapshot.height())
            .field("charts", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

fn not_found(name: &str) -> ChartError {
    ChartError::NotFound {
        name: name.to_owned(),
    }
}

fn flood(grid: &mut NavGrid, spec: &ChartSpec, ctx: &QueryContext<'_>) -> FloodStats {
    grid.reset();
    let seed = spec.seed_query();
    grid.seed(|x, y| seed.seed(ctx, x, y));
    match spec.cost_query() {
        Some(cost) => grid.propagate_with(|x, y| cost.cost(ctx, x, y)),
        None => grid.propagate(),
    }
}
