//! Error types for chart registration and lookup.

use cartograph_nav::NavError;
use cartograph_space::SpaceError;
use thiserror::Error;

/// Errors detected while planning the chart recompute order.
///
/// These are configuration errors: they are raised by
/// [`register`](crate::ChartRegistry::register) and
/// [`unregister`](crate::ChartRegistry::unregister), and the registry is
/// left exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlanError {
    /// A chart declares a read of a chart that is not registered.
    #[error("chart '{chart}' reads unregistered chart '{dependency}'")]
    UnknownDependency {
        /// The reading chart.
        chart: String,
        /// The missing chart.
        dependency: String,
    },
    /// A chart declares a read of itself.
    #[error("chart '{chart}' reads itself")]
    SelfDependency {
        /// The offending chart.
        chart: String,
    },
    /// The declared reads form a cycle.
    #[error("dependency cycle: {}", .cycle.join(" -> "))]
    DependencyCycle {
        /// Chart names along the cycle, first name repeated at the end.
        cycle: Vec<String>,
    },
    /// A chart cannot be removed while others read it.
    #[error("chart '{chart}' is read by {}", .dependents.join(", "))]
    DependentCharts {
        /// The chart being removed.
        chart: String,
        /// Charts that declare a read of it.
        dependents: Vec<String>,
    },
}

/// Errors from registry operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ChartError {
    /// No chart is registered under this name.
    #[error("chart '{name}' is not registered")]
    NotFound {
        /// The requested name.
        name: String,
    },
    /// A sampled coordinate lies outside the board.
    #[error("cell ({x}, {y}) out of range for {width}x{height} board")]
    OutOfRange {
        /// Requested column.
        x: i32,
        /// Requested row.
        y: i32,
        /// Board width.
        width: u32,
        /// Board height.
        height: u32,
    },
    /// An update supplied a board of different dimensions.
    #[error("snapshot is {actual_width}x{actual_height}, charts are {width}x{height}")]
    SnapshotSizeMismatch {
        /// Registry board width.
        width: u32,
        /// Registry board height.
        height: u32,
        /// Width of the rejected snapshot.
        actual_width: u32,
        /// Height of the rejected snapshot.
        actual_height: u32,
    },
    /// Registration or removal would break the recompute plan.
    #[error("invalid chart plan: {0}")]
    Plan(#[from] PlanError),
    /// The board topology could not be built.
    #[error("invalid board topology: {0}")]
    Space(#[from] SpaceError),
}

impl From<NavError> for ChartError {
    fn from(err: NavError) -> Self {
        match err {
            NavError::OutOfRange {
                x,
                y,
                width,
                height,
            } => ChartError::OutOfRange {
                x,
                y,
                width,
                height,
            },
            NavError::Space(e) => ChartError::Space(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_message_lists_path() {
        let err = PlanError::DependencyCycle {
            cycle: vec!["a".into(), "b".into(), "a".into()],
        };
        assert_eq!(err.to_string(), "dependency cycle: a -> b -> a");
    }

    #[test]
    fn nav_out_of_range_maps_to_chart_out_of_range() {
        let err: ChartError = NavError::OutOfRange {
            x: 9,
            y: -1,
            width: 3,
            height: 3,
        }
        .into();
        assert_eq!(
            err,
            ChartError::OutOfRange {
                x: 9,
                y: -1,
                width: 3,
                height: 3
            }
        );
    }

    #[test]
    fn plan_error_wraps() {
        let err: ChartError = PlanError::SelfDependency { chart: "x".into() }.into();
        assert_eq!(err.to_string(), "invalid chart plan: chart 'x' reads itself");
    }
}
