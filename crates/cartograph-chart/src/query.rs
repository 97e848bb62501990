//! Seed and cost queries, and the context they evaluate against.
//!
//! [`QueryContext`] is what a chart's queries see while the registry
//! recomputes that chart: the current board, the querying agent, and the
//! charts the query declared as reads. Undeclared charts are invisible,
//! which is what lets the registry order recomputation from declarations
//! alone.

use cartograph_core::{AgentId, GridSnapshot, Tile, TileGrid, TurnId};
use cartograph_nav::NavGrid;
use indexmap::IndexMap;

use crate::error::ChartError;
use crate::sample;

/// Lookup of chart grids by name.
///
/// Implemented by the registry's chart table. The `IndexMap` impl lets
/// queries be exercised against hand-built grids.
pub trait ChartLookup {
    /// The grid registered under `name`, if any.
    fn lookup(&self, name: &str) -> Option<&NavGrid>;
}

impl ChartLookup for IndexMap<String, NavGrid> {
    fn lookup(&self, name: &str) -> Option<&NavGrid> {
        self.get(name)
    }
}

/// Read-only view handed to [`SeedQuery`] and [`CostQuery`] evaluations.
pub struct QueryContext<'a> {
    snapshot: &'a TileGrid,
    charts: &'a dyn ChartLookup,
    reads: &'a [String],
    me: AgentId,
    turn: TurnId,
}

impl<'a> QueryContext<'a> {
    /// Construct a context.
    ///
    /// Typically called by the registry. `reads` limits which charts
    /// [`chart`](Self::chart) will return.
    pub fn new(
        snapshot: &'a TileGrid,
        charts: &'a dyn ChartLookup,
        reads: &'a [String],
        me: AgentId,
        turn: TurnId,
    ) -> Self {
        Self {
            snapshot,
            charts,
            reads,
            me,
            turn,
        }
    }

    /// The current board.
    pub fn snapshot(&self) -> &'a TileGrid {
        self.snapshot
    }

    /// The tile at `(x, y)`, or `None` off the board.
    pub fn tile(&self, x: i32, y: i32) -> Option<&'a Tile> {
        self.snapshot.tile(x, y)
    }

    /// The querying agent.
    pub fn me(&self) -> AgentId {
        self.me
    }

    /// The turn being computed.
    pub fn turn(&self) -> TurnId {
        self.turn
    }

    /// Charts this query may read.
    pub fn reads(&self) -> &'a [String] {
        self.reads
    }

    /// A declared chart's grid. `None` for undeclared or unknown names.
    pub fn chart(&self, name: &str) -> Option<&'a NavGrid> {
        if self.reads.iter().any(|r| r == name) {
            self.charts.lookup(name)
        } else {
            None
        }
    }

    /// [`normalize`](crate::normalize)d cost of a declared chart at `(x, y)`.
    pub fn sample_normalized(
        &self,
        x: i32,
        y: i32,
        name: &str,
        zero_value: f32,
    ) -> Result<f32, ChartError> {
        let grid = self.chart(name).ok_or_else(|| ChartError::NotFound {
            name: name.to_owned(),
        })?;
        Ok(sample::normalize(grid.cost_at(x, y)?, zero_value))
    }

    /// [`default_cost`](crate::default_cost) of the tile at `(x, y)`.
    /// Impassable off the board.
    pub fn default_cost(&self, x: i32, y: i32) -> Option<f32> {
        self.tile(x, y)
            .and_then(|tile| sample::default_cost(tile, self.me))
    }

    /// Whether the querying agent may enter `(x, y)`.
    pub fn is_passable(&self, x: i32, y: i32) -> bool {
        self.tile(x, y)
            .is_some_and(|tile| sample::is_passable(tile, self.me))
    }
}

/// Per-cell seed values for a chart.
///
/// `Some(v)` seeds the cell at `v`; `None` leaves it unset.
pub trait SeedQuery: Send + Sync + 'static {
    /// Seed value at `(x, y)`.
    fn seed(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32>;

    /// Charts this query reads. Default: none.
    fn reads(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Per-cell entry costs for a chart.
///
/// `Some(c)` is the cost of stepping into the cell; `None` marks it
/// impassable.
pub trait CostQuery: Send + Sync + 'static {
    /// Entry cost at `(x, y)`.
    fn cost(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32>;

    /// Charts this query reads. Default: none.
    fn reads(&self) -> Vec<String> {
        Vec::new()
    }
}

impl<F> SeedQuery for F
where
    F: Fn(&QueryContext<'_>, i32, i32) -> Option<f32> + Send + Sync + 'static,
{
    fn seed(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        self(ctx, x, y)
    }
}

impl<F> CostQuery for F
where
    F: Fn(&QueryContext<'_>, i32, i32) -> Option<f32> + Send + Sync + 'static,
{
    fn cost(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        self(ctx, x, y)
    }
}
