//! Seed query adapters.
//!
//! Every chart is seeded through a [`SeedQuery`]. These constructors cover
//! the common shapes so callers rarely implement the trait by hand.

use cartograph_core::{Coord, Tile};
use cartograph_nav::from_sentinel;

use crate::query::{QueryContext, SeedQuery};

/// Seeds every tile the predicate accepts, at cost `0`.
///
/// Pair with [`type_filter`](crate::type_filter) to seed by tile kind.
pub fn matching<P>(predicate: P) -> Matching<P>
where
    P: Fn(&Tile) -> bool + Send + Sync + 'static,
{
    Matching {
        predicate,
        value: 0.0,
    }
}

/// Seed query built by [`matching`].
#[derive(Clone, Debug)]
pub struct Matching<P> {
    predicate: P,
    value: f32,
}

impl<P> Matching<P> {
    /// Seed matching tiles at `value` instead of `0`.
    ///
    /// A negative `value` seeds nothing.
    pub fn with_value(mut self, value: f32) -> Self {
        self.value = value;
        self
    }
}

impl<P> SeedQuery for Matching<P>
where
    P: Fn(&Tile) -> bool + Send + Sync + 'static,
{
    fn seed(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        ctx.tile(x, y)
            .filter(|tile| (self.predicate)(tile))
            .and_then(|_| from_sentinel(self.value))
    }
}

/// Seeds exactly the listed cells, at cost `0`.
pub fn at<I>(cells: I) -> Cells
where
    I: IntoIterator<Item = Coord>,
{
    Cells(cells.into_iter().collect())
}

/// Seed query built by [`at`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cells(Vec<Coord>);

impl SeedQuery for Cells {
    fn seed(&self, _ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        self.0.contains(&(x, y)).then_some(0.0)
    }
}

/// Pins a closure to the seed query signature.
///
/// Closures already implement [`SeedQuery`]; this only helps type inference.
///
/// ```
/// use cartograph_chart::{seed, ChartSpec};
///
/// let spec = ChartSpec::new(seed::from_fn(|ctx, x, y| {
///     ctx.tile(x, y).filter(|t| t.is_owned_by(ctx.me())).map(|_| 0.0)
/// }));
/// assert!(spec.dependencies().is_empty());
/// ```
pub fn from_fn<F>(f: F) -> F
where
    F: Fn(&QueryContext<'_>, i32, i32) -> Option<f32> + Send + Sync + 'static,
{
    f
}

/// Adapts a seed function using the negative-means-absent float convention.
pub fn from_sentinel_fn<F>(f: F) -> SentinelSeed<F>
where
    F: Fn(&QueryContext<'_>, i32, i32) -> f32 + Send + Sync + 'static,
{
    SentinelSeed(f)
}

/// Seed query built by [`from_sentinel_fn`].
pub struct SentinelSeed<F>(F);

impl<F> SeedQuery for SentinelSeed<F>
where
    F: Fn(&QueryContext<'_>, i32, i32) -> f32 + Send + Sync + 'static,
{
    fn seed(&self, ctx: &QueryContext<'_>, x: i32, y: i32) -> Option<f32> {
        from_sentinel((self.0)(ctx, x, y))
    }
}
