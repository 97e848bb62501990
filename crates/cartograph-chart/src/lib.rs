//! Chart registry for Cartograph.
//!
//! A *chart* is a named [`NavGrid`](cartograph_nav::NavGrid) bound to a seed
//! query and an optional entry-cost query. The [`ChartRegistry`] owns every
//! chart's grid, holds the current board snapshot, and recomputes all charts
//! once per turn in [`update`](ChartRegistry::update).
//!
//! Charts may read other charts (chart chaining). Reads are declared at
//! registration, either explicitly through [`ChartSpec::reads`] or by the
//! query itself (see [`cost::by_chart`]). The registry recomputes charts in
//! dependency order, so a declared read always observes the current turn's
//! values. Cycles are rejected at registration.
//!
//! # Example
//!
//! ```
//! use cartograph_chart::{cost, seed, ChartRegistry, ChartSpec, RegistryConfig};
//! use cartograph_core::{AgentId, Tile, TileGrid, TileKind};
//!
//! let mut board = TileGrid::filled(5, 5, Tile::FREE).unwrap();
//! board.set(4, 4, Tile::resource(None)).unwrap();
//!
//! let mut charts = ChartRegistry::new(board.clone(), RegistryConfig::new(AgentId(1))).unwrap();
//! charts
//!     .register(
//!         "mines",
//!         ChartSpec::new(seed::matching(|t| t.kind == TileKind::Resource))
//!             .cost(cost::default_passable()),
//!     )
//!     .unwrap();
//!
//! charts.update(board).unwrap();
//! assert_eq!(charts.chart("mines").unwrap().cost_at(0, 4).unwrap(), 4.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod cost;
pub mod error;
pub mod filter;
pub mod plan;
pub mod query;
pub mod registry;
pub mod sample;
pub mod seed;
pub mod spec;

pub use config::RegistryConfig;
pub use error::{ChartError, PlanError};
pub use filter::{type_filter, type_filter_excluding};
pub use query::{ChartLookup, CostQuery, QueryContext, SeedQuery};
pub use registry::{ChartRegistry, ChartState};
pub use sample::{default_cost, is_passable, normalize};
pub use spec::ChartSpec;
