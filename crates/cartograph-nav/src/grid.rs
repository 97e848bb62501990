//! The [`NavGrid`] flood engine.
//!
//! # Algorithm
//!
//! Multi-source Dijkstra over the grid's [`Topology`]:
//!
//! ```text
//! seed:      cost[s] = seed(s)            for every s with seed(s) = Some
//! settle:    pop lowest (cost, seq); skip if already settled or stale
//! relax:     for n in neighbours(cell), n unsettled, entry(n) = Some(c):
//!                if cost[cell] + c < cost[n] { cost[n] = ...; push n }
//! ```
//!
//! Seeds never pay their own entry cost. A seed can still be lowered by a
//! cheaper path from another seed if its own entry cost is passable.
//! Each cell's entry cost is evaluated at most once per propagation and
//! cached in a per-cell buffer.
//!
//! All buffers (costs, settled markers, entry-cost cache, frontier heap)
//! are allocated once and reused by [`reset`](NavGrid::reset).

use std::fmt;
use std::sync::Arc;

use cartograph_core::Coord;
use cartograph_space::{EdgeBehavior, Square4, Topology};

use crate::error::NavError;
use crate::frontier::Frontier;
use crate::sentinel::UNSET;

/// Owned per-cell entry-cost function stored by [`NavGrid::set_cost_fn`].
pub type CostFn = Box<dyn Fn(i32, i32) -> Option<f32> + Send + Sync>;

/// Counters from one seed + propagate cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FloodStats {
    /// Cells seeded.
    pub seeds: usize,
    /// Cells settled (reached) by the end of propagation.
    pub settled: usize,
    /// Successful relaxations (a cell's cost strictly lowered).
    pub relaxations: usize,
    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

/// Entry cost cache slot.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Entry {
    Unknown,
    Blocked,
    Cost(f32),
}

/// A scalar cost field over a board, populated by flood fill.
pub struct NavGrid {
    topology: Arc<dyn Topology>,
    costs: Vec<f32>,
    settled: Vec<bool>,
    entry: Vec<Entry>,
    frontier: Frontier,
    cost_fn: Option<CostFn>,
    stats: FloodStats,
}

impl NavGrid {
    /// A 4-connected grid of `width * height` cells with absorbing edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use cartograph_nav::NavGrid;
    ///
    /// let mut grid = NavGrid::new(5, 5).unwrap();
    /// grid.seed(|x, y| if (x, y) == (2, 2) { Some(0.0) } else { None });
    /// grid.set_cost_fn(Some(Box::new(|_, _| Some(1.0))));
    /// grid.propagate();
    /// assert_eq!(grid.cost_at(0, 0).unwrap(), 4.0);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, NavError> {
        let topology = Square4::new(width, height, EdgeBehavior::Absorb)?;
        Ok(Self::with_topology(Arc::new(topology)))
    }

    /// A grid shaped and connected by `topology`.
    pub fn with_topology(topology: Arc<dyn Topology>) -> Self {
        let n = topology.cell_count();
        Self {
            topology,
            costs: vec![UNSET; n],
            settled: vec![false; n],
            entry: vec![Entry::Unknown; n],
            frontier: Frontier::with_capacity(n),
            cost_fn: None,
            stats: FloodStats::default(),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.topology.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.topology.height()
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.costs.len()
    }

    /// The adjacency rule this grid floods along.
    pub fn topology(&self) -> &Arc<dyn Topology> {
        &self.topology
    }

    /// Clear every cost to [`UNSET`] and drop all frontier state.
    ///
    /// Keeps the recorded cost function and every buffer's allocation.
    pub fn reset(&mut self) {
        self.costs.fill(UNSET);
        self.settled.fill(false);
        self.entry.fill(Entry::Unknown);
        self.frontier.clear();
        self.stats = FloodStats::default();
    }

    /// Evaluate `seed_fn` on every cell and seed the ones that return `Some`.
    ///
    /// A seeded cell's cost becomes the returned value and it joins the
    /// initial frontier. Cells returning `None` are left untouched. Call
    /// after [`reset`](Self::reset) and before [`propagate`](Self::propagate).
    pub fn seed<F>(&mut self, mut seed_fn: F)
    where
        F: FnMut(i32, i32) -> Option<f32>,
    {
        for i in 0..self.costs.len() {
            let (x, y) = self.topology.coord_of(i);
            if let Some(v) = seed_fn(x, y) {
                debug_assert!(v >= 0.0, "seed value {v} at ({x}, {y}) is negative");
                if v < self.costs[i] {
                    self.costs[i] = v;
                    self.frontier.push(i, v);
                    self.stats.seeds += 1;
                }
            }
        }
    }

    /// Record the entry-cost function used by [`propagate`](Self::propagate).
    ///
    /// `None` means seed only: propagation settles the seeds and stops.
    pub fn set_cost_fn(&mut self, cost_fn: Option<CostFn>) {
        self.cost_fn = cost_fn;
    }

    /// Whether a cost function is recorded.
    pub fn has_cost_fn(&self) -> bool {
        self.cost_fn.is_some()
    }

    /// Flood from the current seeds using the recorded cost function.
    pub fn propagate(&mut self) -> FloodStats {
        match self.cost_fn.take() {
            Some(cost_fn) => {
                let stats = self.propagate_with(|x, y| cost_fn(x, y));
                self.cost_fn = Some(cost_fn);
                stats
            }
            None => self.settle_seeds(),
        }
    }

    /// Flood from the current seeds using a borrowed cost function.
    ///
    /// Same algorithm as [`propagate`](Self::propagate); lets callers pass
    /// closures that borrow surrounding state (other grids, a snapshot).
    pub fn propagate_with<F>(&mut self, mut cost_fn: F) -> FloodStats
    where
        F: FnMut(i32, i32) -> Option<f32>,
    {
        let topology = Arc::clone(&self.topology);
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());

        while let Some((i, c)) = self.frontier.pop() {
            if self.settled[i] || c > self.costs[i] {
                continue;
            }
            self.settled[i] = true;
            self.stats.settled += 1;

            for n in topology.neighbours_flat(i) {
                if self.settled[n] {
                    continue;
                }
                let step = match self.entry[n] {
                    Entry::Cost(step) => step,
                    Entry::Blocked => continue,
                    Entry::Unknown => {
                        let (x, y) = topology.coord_of(n);
                        match cost_fn(x, y) {
                            Some(step) => {
                                debug_assert!(
                                    step >= 0.0,
                                    "entry cost {step} at ({x}, {y}) is negative"
                                );
                                self.entry[n] = Entry::Cost(step);
                                step
                            }
                            None => {
                                self.entry[n] = Entry::Blocked;
                                continue;
                            }
                        }
                    }
                };
                let candidate = c + step;
                if candidate < self.costs[n] {
                    self.costs[n] = candidate;
                    self.frontier.push(n, candidate);
                    self.stats.relaxations += 1;
                }
            }
            self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        }
        self.stats
    }

    fn settle_seeds(&mut self) -> FloodStats {
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
        while let Some((i, c)) = self.frontier.pop() {
            if !self.settled[i] && c <= self.costs[i] {
                self.settled[i] = true;
                self.stats.settled += 1;
            }
        }
        debug_assert!(self.frontier.is_empty());
        self.stats
    }

    /// Counters from the most recent seed + propagate cycle.
    pub fn stats(&self) -> FloodStats {
        self.stats
    }

    /// Cost at `(x, y)`, or [`UNSET`] if no seed reaches it.
    pub fn cost_at(&self, x: i32, y: i32) -> Result<f32, NavError> {
        Ok(self.costs[self.index_of(x, y)?])
    }

    /// Whether `(x, y)` holds a cost (seeded or reached).
    pub fn is_reachable(&self, x: i32, y: i32) -> Result<bool, NavError> {
        Ok(self.costs[self.index_of(x, y)?] != UNSET)
    }

    /// Number of cells holding a cost.
    pub fn reachable_count(&self) -> usize {
        self.costs.iter().filter(|c| **c != UNSET).count()
    }

    /// Row-major view of every cell's cost.
    pub fn costs(&self) -> &[f32] {
        &self.costs
    }

    /// Lowest and highest reached cost, or `None` if nothing is reachable.
    pub fn cost_range(&self) -> Option<(f32, f32)> {
        self.costs
            .iter()
            .filter(|c| **c != UNSET)
            .fold(None, |acc, &c| match acc {
                None => Some((c, c)),
                Some((lo, hi)) => Some((lo.min(c), hi.max(c))),
            })
    }

    /// The neighbour of `(x, y)` with the lowest cost strictly below the
    /// cell's own.
    ///
    /// Returns `None` at a seed, at a local minimum, and at unreachable
    /// cells. Ties go to the first neighbour in topology order.
    pub fn downhill(&self, x: i32, y: i32) -> Result<Option<Coord>, NavError> {
        let i = self.index_of(x, y)?;
        Ok(self.downhill_index(i).map(|n| self.topology.coord_of(n)))
    }

    fn downhill_index(&self, i: usize) -> Option<usize> {
        let here = self.costs[i];
        if here == UNSET {
            return None;
        }
        let mut best: Option<(usize, f32)> = None;
        for n in self.topology.neighbours_flat(i) {
            let c = self.costs[n];
            if c < here && best.is_none_or(|(_, b)| c < b) {
                best = Some((n, c));
            }
        }
        best.map(|(n, _)| n)
    }

    /// Follow [`downhill`](Self::downhill) from `(x, y)` until it stops.
    ///
    /// The returned path starts at `(x, y)` and ends at a seed or local
    /// minimum. It is empty when `(x, y)` is unreachable.
    pub fn trace(&self, x: i32, y: i32) -> Result<Vec<Coord>, NavError> {
        let mut i = self.index_of(x, y)?;
        if self.costs[i] == UNSET {
            return Ok(Vec::new());
        }
        let mut path = vec![(x, y)];
        // Costs strictly decrease along the walk, so it terminates.
        while let Some(n) = self.downhill_index(i) {
            path.push(self.topology.coord_of(n));
            i = n;
        }
        Ok(path)
    }

    fn index_of(&self, x: i32, y: i32) -> Result<usize, NavError> {
        self.topology.index_of(x, y).ok_or(NavError::OutOfRange {
            x,
            y,
            width: self.width(),
            height: self.height(),
        })
    }
}

impl fmt::Debug for NavGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavGrid")
            .field("width", &self.width())
            .field("height", &self.height())
            .field("edge", &self.topology.edge_behavior())
            .field("reachable", &self.reachable_count())
            .field("has_cost_fn", &self.cost_fn.is_some())
            .finish()
    }
}
