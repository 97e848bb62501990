//! Cost query adapters, including chart chaining.

use cartograph_core::Tile;
use cartograph_nav::from_sentinel;
use tracing::warn;

use crate::query::{CostQuery, QueryContext};

/// Entry cost from the tile alone. Off-board cells are impassable.
pub fn per_tile<F>(f: F) -> PerTile<F>
where
    F: Fn(&Tile) -> Option<f32> + Send + Sync + 'static,
{
    PerTile(f)
}

/// Cost query built by [`per_tile`].
#[derive(Clone, Debug)]
pub struct PerTile<F>(F);

impl<F> CostQuery for PerTile<F>
where
    F: Fn(&Tile) -> Option<f32> + Send + Sync + 'static,
{
    fn cost(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        ctx.tile(x, y).and_then(|tile| (self.0)(tile))
    }
}

/// Pins a closure to the cost query signature.
pub fn from_fn<F>(f: F) -> F
where
    F: Fn(&QueryContext<'_>, i32, i32) -> Option<f32> + Send + Sync + 'static,
{
    f
}

/// Adapts a cost function using the negative-means-impassable convention.
pub fn from_sentinel_fn<F>(f: F) -> SentinelCost<F>
where
    F: Fn(&QueryContext<'_>, i32, i32) -> f32 + Send + Sync + 'static,
{
    SentinelCost(f)
}

/// Cost query built by [`from_sentinel_fn`].
pub struct SentinelCost<F>(F);

impl<F> CostQuery for SentinelCost<F>
where
    F: Fn(&QueryContext<'_>, i32, i32) -> f32 + Send + Sync + 'static,
{
    fn cost(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        from_sentinel((self.0)(ctx, x, y))
    }
}

/// The [`default_cost`](crate::default_cost) rule as a cost query.
pub fn default_passable() -> DefaultPassable {
    DefaultPassable
}

/// Cost query built by [`default_passable`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultPassable;

impl CostQuery for DefaultPassable {
    fn cost(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        ctx.default_cost(x, y)
    }
}

/// Entry cost raised near the seeds of another chart.
///
/// Cells passable under the default rule cost
/// `1 + sample_normalized(x, y, chart, zero_value) * scale`; everything else
/// is impassable. A negative `scale` can push that below zero, which also
/// reads as impassable. The query declares `chart` as a read, so the
/// registry always recomputes `chart` first.
///
/// ```
/// use cartograph_chart::{cost, CostQuery};
///
/// let avoid_enemies = cost::by_chart("enemies", 5.0, 2.0);
/// assert_eq!(avoid_enemies.reads(), vec!["enemies".to_owned()]);
/// ```
pub fn by_chart(chart: impl Into<String>, zero_value: f32, scale: f32) -> ByChart {
    ByChart {
        chart: chart.into(),
        zero_value,
        scale,
    }
}

/// Cost query built by [`by_chart`].
#[derive(Clone, Debug, PartialEq)]
pub struct ByChart {
    chart: String,
    zero_value: f32,
    scale: f32,
}

impl ByChart {
    /// The chart this query reads.
    pub fn chart(&self) -> &str {
        &self.chart
    }
}

impl CostQuery for ByChart {
    fn cost(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        ctx.default_cost(x, y)?;
        let sample = match ctx.sample_normalized(x, y, &self.chart, self.zero_value) {
            Ok(sample) => sample,
            Err(err) => {
                warn!(chart = %self.chart, x, y, %err, "cost_by_chart read failed, using flat cost");
                0.0
            }
        };
        from_sentinel(1.0 + sample * self.scale)
    }

    fn reads(&self) -> Vec<String> {
        vec![self.chart.clone()]
    }
}
