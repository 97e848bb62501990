//! Cartograph: flood-fill cost charts over tile boards.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Cartograph sub-crates. A bot decodes its board into a
//! [`TileGrid`](types::TileGrid), registers named charts once, and calls
//! [`update`](chart::ChartRegistry::update) each turn before reading them.
//!
//! # Quick start
//!
//! ```rust
//! use cartograph::prelude::*;
//!
//! let mut board = TileGrid::filled(6, 6, Tile::FREE).unwrap();
//! board.set(5, 5, Tile::resource(None)).unwrap();
//! board.set(0, 0, Tile::agent(AgentId(1))).unwrap();
//! board.set(3, 0, Tile::agent(AgentId(2))).unwrap();
//!
//! let mut charts = ChartRegistry::new(board.clone(), RegistryConfig::new(AgentId(1))).unwrap();
//! charts
//!     .register(
//!         "enemies",
//!         ChartSpec::new(seed::matching(type_filter_excluding(
//!             TileKind::Agent.mask(),
//!             AgentId(1),
//!         )))
//!         .cost(cost::default_passable()),
//!     )
//!     .unwrap();
//! charts
//!     .register(
//!         "mines",
//!         ChartSpec::new(seed::matching(type_filter_excluding(
//!             TileKind::Resource.mask(),
//!             AgentId(1),
//!         )))
//!         .cost(cost::by_chart("enemies", 3.0, 5.0)),
//!     )
//!     .unwrap();
//!
//! charts.update(board).unwrap();
//! let mines = charts.chart("mines").unwrap();
//! let next = mines.downhill(0, 0).unwrap();
//! assert!(next.is_some());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cartograph-core` | IDs, tiles, board snapshots |
//! | [`space`] | `cartograph-space` | Board topologies and edge behaviour |
//! | [`nav`] | `cartograph-nav` | The flood-fill navigation grid |
//! | [`chart`] | `cartograph-chart` | Chart registry, queries, derived costs |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and IDs (`cartograph-core`).
///
/// Tiles, tile masks, and the [`types::TileGrid`] board snapshot.
pub use cartograph_core as types;

/// Board topologies (`cartograph-space`).
///
/// The [`space::Topology`] trait with [`space::Square4`] and
/// [`space::Square8`] backends.
pub use cartograph_space as space;

/// Navigation grids (`cartograph-nav`).
///
/// [`nav::NavGrid`] can be used on its own, without a registry.
pub use cartograph_nav as nav;

/// Chart registry and queries (`cartograph-chart`).
pub use cartograph_chart as chart;

/// Common imports for typical Cartograph usage.
///
/// ```rust
/// use cartograph::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use cartograph_core::{
        AgentId, Coord, GridSnapshot, Tile, TileGrid, TileKind, TileMask, TurnId,
    };

    // Space
    pub use cartograph_space::{Adjacency, EdgeBehavior, Topology};

    // Navigation
    pub use cartograph_nav::{NavGrid, IMPASSABLE, UNSET};

    // Charts
    pub use cartograph_chart::{
        cost, seed, type_filter, type_filter_excluding, ChartError, ChartRegistry, ChartSpec,
        ChartState, CostQuery, PlanError, QueryContext, RegistryConfig, SeedQuery,
    };
}
