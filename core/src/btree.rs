//! Binary-tree churn: builds and discards perfect binary trees to stress
//! allocation and deallocation throughput. Check sums are plain node counts
//! and exist only to validate construction and traversal.

use anyhow::{Result, bail};

/// One tree node. A leaf carries two absent children.
#[derive(Debug)]
pub struct Tree {
    left: Option<Box<Tree>>,
    right: Option<Box<Tree>>,
}

/// Builds a perfect binary tree bottom-up to `depth`.
pub fn make_tree(depth: u32) -> Tree {
    if depth == 0 {
        Tree { left: None, right: None }
    } else {
        Tree {
            left: Some(Box::new(make_tree(depth - 1))),
            right: Some(Box::new(make_tree(depth - 1))),
        }
    }
}

/// Counts all nodes: 1 for a leaf, otherwise 1 plus both subtree counts.
pub fn check_tree(node: &Tree) -> u64 {
    match (&node.left, &node.right) {
        (Some(left), Some(right)) => 1 + check_tree(left) + check_tree(right),
        _ => 1,
    }
}

// Node count of a perfect tree of `depth`.
fn full_tree_nodes(depth: u32) -> u64 {
    (1u64 << (depth + 1)) - 1
}

/// Result row for one depth step of the churn loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthRun {
    pub depth: u32,
    pub iterations: u64,
    pub check: u64,
}

/// Everything the churn driver computes, in print order.
#[derive(Debug)]
pub struct ChurnReport {
    pub stretch_depth: u32,
    pub stretch_check: u64,
    pub runs: Vec<DepthRun>,
    pub max_depth: u32,
    pub long_lived_check: u64,
}

/// Builds and checks a stretch tree at `max_depth + 1`, holds a long-lived
/// tree at `max_depth` across the whole run and checks it last, and in
/// between churns fresh trees at every second depth from `min_depth` up,
/// a quarter as many per step.
///
/// `max_depth` is clamped to at least `min_depth + 2`. Every check sum is
/// compared with the node count of a perfect tree; a mismatch means the
/// build or the traversal is broken.
pub fn churn(min_depth: u32, max_depth: u32) -> Result<ChurnReport> {
    let max_depth = max_depth.max(min_depth + 2);
    let stretch_depth = max_depth + 1;

    let stretch_check = check_tree(&make_tree(stretch_depth));
    if stretch_check != full_tree_nodes(stretch_depth) {
        bail!(
            "expected {} nodes in stretch tree but observed {}",
            full_tree_nodes(stretch_depth),
            stretch_check
        );
    }

    let long_lived_tree = make_tree(max_depth);

    let mut runs = Vec::new();
    for depth in (min_depth..=max_depth).step_by(2) {
        let iterations = 1u64 << (max_depth - depth + min_depth);
        let mut check = 0u64;
        for _ in 0..iterations {
            check += check_tree(&make_tree(depth));
        }
        tracing::debug!(depth, iterations, check, "churned trees at depth");
        let expected = iterations * full_tree_nodes(depth);
        if check != expected {
            bail!("expected check {} at depth {} but observed {}", expected, depth, check);
        }
        runs.push(DepthRun { depth, iterations, check });
    }

    let long_lived_check = check_tree(&long_lived_tree);
    if long_lived_check != full_tree_nodes(max_depth) {
        bail!(
            "expected {} nodes in long-lived tree but observed {}",
            full_tree_nodes(max_depth),
            long_lived_check
        );
    }

    Ok(ChurnReport {
        stretch_depth,
        stretch_check,
        runs,
        max_depth,
        long_lived_check,
    })
}
