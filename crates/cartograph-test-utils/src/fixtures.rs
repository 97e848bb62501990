//! Reusable seed and cost queries for registry tests.
//!
//! - [`UniformCost`]: every on-board cell costs the same.
//! - [`CountingCost`]: wraps a cost query and counts evaluations.
//! - [`SeedWhereBelow`]: seeds cells where another chart is cheap, and
//!   declares that chart as a read.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use cartograph_chart::{CostQuery, QueryContext, SeedQuery};

/// Constant entry cost on every board cell, ignoring tile kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformCost(pub f32);

impl CostQuery for UniformCost {
    fn cost(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        ctx.tile(x, y).map(|_| self.0)
    }
}

/// Counts how often the wrapped cost query is evaluated.
pub struct CountingCost<C> {
    inner: C,
    calls: Arc<AtomicUsize>,
}

impl<C: CostQuery> CountingCost<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the call counter; stays valid after the query is
    /// moved into a registry.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl<C: CostQuery> CostQuery for CountingCost<C> {
    fn cost(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.cost(ctx, x, y)
    }

    fn reads(&self) -> Vec<String> {
        self.inner.reads()
    }
}

/// Seeds at `0` every cell where `chart`'s cost is below `threshold`.
#[derive(Clone, Debug, PartialEq)]
pub struct SeedWhereBelow {
    pub chart: String,
    pub threshold: f32,
}

impl SeedWhereBelow {
    pub fn new(chart: impl Into<String>, threshold: f32) -> Self {
        Self {
            chart: chart.into(),
            threshold,
        }
    }
}

impl SeedQuery for SeedWhereBelow {
    fn seed(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        let grid = ctx.chart(&self.chart)?;
        let cost = grid.cost_at(x, y).ok()?;
        (cost < self.threshold).then_some(0.0)
    }

    fn reads(&self) -> Vec<String> {
        vec![self.chart.clone()]
    }
}
