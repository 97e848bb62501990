//! Recompute ordering for charts with declared reads.
//!
//! [`plan_charts`] validates the read declarations of every chart and
//! produces a [`ChartPlan`]: a topological order in which each chart comes
//! after every chart it reads. Among charts with no ordering constraint
//! between them, registration order wins, so a registry without reads
//! recomputes in exactly the order charts were added.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use indexmap::IndexMap;

use crate::error::PlanError;

/// Recompute order over a chart table, as indices into that table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartPlan {
    order: Vec<usize>,
}

impl ChartPlan {
    /// Chart indices in recompute order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of charts in the plan.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the plan is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Validate read declarations and order the charts.
///
/// `reads` maps each chart name, in registration order, to the names it
/// reads. Checks, in order:
///
/// 1. Every read names a chart in the table.
/// 2. No chart reads itself.
/// 3. The reads are acyclic.
pub fn plan_charts(reads: &IndexMap<String, Vec<String>>) -> Result<ChartPlan, PlanError> {
    // 1 + 2. Reference checks, collecting edges by index.
    let n = reads.len();
    let mut indegree = vec![0usize; n];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut edges: Vec<Vec<usize>> = vec![Vec::new(); n];

    for (i, (chart, deps)) in reads.iter().enumerate() {
        for dep in deps {
            if dep == chart {
                return Err(PlanError::SelfDependency {
                    chart: chart.clone(),
                });
            }
            let Some(j) = reads.get_index_of(dep.as_str()) else {
                return Err(PlanError::UnknownDependency {
                    chart: chart.clone(),
                    dependency: dep.clone(),
                });
            };
            indegree[i] += 1;
            dependents[j].push(i);
            edges[i].push(j);
        }
    }

    // 3. Kahn's algorithm, lowest registration index first.
    let mut ready: BinaryHeap<Reverse<usize>> = indegree
        .iter()
        .enumerate()
        .filter(|(_, d)| **d == 0)
        .map(|(i, _)| Reverse(i))
        .collect();
    let mut order = Vec::with_capacity(n);

    while let Some(Reverse(i)) = ready.pop() {
        order.push(i);
        for &k in &dependents[i] {
            indegree[k] -= 1;
            if indegree[k] == 0 {
                ready.push(Reverse(k));
            }
        }
    }

    if order.len() < n {
        return Err(PlanError::DependencyCycle {
            cycle: find_cycle(reads, &edges, &indegree),
        });
    }

    Ok(ChartPlan { order })
}

/// Walk read edges among unplanned charts until a chart repeats.
///
/// Every unplanned chart has at least one unplanned read, so the walk
/// cannot dead-end.
fn find_cycle(
    reads: &IndexMap<String, Vec<String>>,
    edges: &[Vec<usize>],
    indegree: &[usize],
) -> Vec<String> {
    let name = |i: usize| {
        reads
            .get_index(i)
            .map(|(name, _)| name.clone())
            .unwrap_or_default()
    };
    let Some(start) = indegree.iter().position(|d| *d > 0) else {
        return Vec::new();
    };

    let mut path = vec![start];
    let mut current = start;
    loop {
        let Some(&next) = edges[current].iter().find(|&&j| indegree[j] > 0) else {
            return path.into_iter().map(name).collect();
        };
        if let Some(pos) = path.iter().position(|&p| p == next) {
            let mut cycle: Vec<String> = path[pos..].iter().map(|&i| name(i)).collect();
            cycle.push(name(next));
            return cycle;
        }
        path.push(next);
        current = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &[&str])]) -> IndexMap<String, Vec<String>> {
        entries
            .iter()
            .map(|(name, deps)| {
                (
                    (*name).to_owned(),
                    deps.iter().map(|d| (*d).to_owned()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn no_reads_keeps_registration_order() {
        let plan = plan_charts(&table(&[("c", &[]), ("a", &[]), ("b", &[])])).unwrap();
        assert_eq!(plan.order(), &[0, 1, 2]);
    }

    #[test]
    fn reader_moves_after_its_source() {
        // "danger" registered first but reads "enemies".
        let plan = plan_charts(&table(&[
            ("danger", &["enemies"]),
            ("mines", &[]),
            ("enemies", &[]),
        ]))
        .unwrap();
        assert_eq!(plan.order(), &[1, 2, 0]);
    }

    #[test]
    fn diamond() {
        let plan = plan_charts(&table(&[
            ("base", &[]),
            ("left", &["base"]),
            ("right", &["base"]),
            ("top", &["right", "left"]),
        ]))
        .unwrap();
        assert_eq!(plan.order(), &[0, 1, 2, 3]);
    }

    #[test]
    fn duplicate_reads_are_harmless() {
        let plan = plan_charts(&table(&[("b", &["a", "a"]), ("a", &[])])).unwrap();
        assert_eq!(plan.order(), &[1, 0]);
    }

    #[test]
    fn unknown_dependency() {
        let err = plan_charts(&table(&[("a", &["ghost"])])).unwrap_err();
        assert_eq!(
            err,
            PlanError::UnknownDependency {
                chart: "a".into(),
                dependency: "ghost".into()
            }
        );
    }

    #[test]
    fn self_dependency() {
        let err = plan_charts(&table(&[("a", &["a"])])).unwrap_err();
        assert_eq!(err, PlanError::SelfDependency { chart: "a".into() });
    }

    #[test]
    fn cycle_is_reported_as_path() {
        let err = plan_charts(&table(&[
            ("free", &[]),
            ("a", &["b"]),
            ("b", &["c"]),
            ("c", &["a"]),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            PlanError::DependencyCycle {
                cycle: vec!["a".into(), "b".into(), "c".into(), "a".into()]
            }
        );
    }

    #[test]
    fn cycle_behind_a_tail_excludes_the_tail() {
        // "tail" reads into the cycle but is not part of it.
        let err = plan_charts(&table(&[
            ("tail", &["x"]),
            ("x", &["y"]),
            ("y", &["x"]),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            PlanError::DependencyCycle {
                cycle: vec!["x".into(), "y".into(), "x".into()]
            }
        );
    }

    #[test]
    fn empty_table() {
        assert!(plan_charts(&IndexMap::new()).unwrap().is_empty());
    }
}
