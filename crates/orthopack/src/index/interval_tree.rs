//! Static centered interval tree over closed intervals `[a, b]`.
//!
//! Each node stores the intervals containing its center twice: sorted by start
//! (ascending) and by end (descending). Queries only scan the side that can
//! still overlap, so a query costs `O(log n + k)` for `k` reported intervals.

#[derive(Clone, Debug)]
struct Node<T> {
    center: f64,
    by_start: Vec<(f64, f64, T)>,
    by_end: Vec<(f64, f64, T)>,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

/// Immutable interval index; rebuild instead of mutating.
#[derive(Clone, Debug)]
pub struct IntervalTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Copy> IntervalTree<T> {
    /// Build from `(a, b, payload)` triples with `a <= b`.
    pub fn new(intervals: Vec<(f64, f64, T)>) -> Self {
        debug_assert!(intervals.iter().all(|&(a, b, _)| a <= b));
        let len = intervals.len();
        Self {
            root: build(intervals),
            len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visit every interval `[a, b]` with `a <= hi && b >= lo`.
    pub fn query<F: FnMut(f64, f64, T)>(&self, lo: f64, hi: f64, mut visit: F) {
        let mut stack: Vec<&Node<T>> = Vec::new();
        if let Some(root) = &self.root {
            stack.push(root);
        }
        while let Some(node) = stack.pop() {
            if hi < node.center {
                for &(a, b, t) in &node.by_start {
                    if a > hi {
                        break;
                    }
                    visit(a, b, t);
                }
                if let Some(l) = &node.left {
                    stack.push(l);
                }
            } else if lo > node.center {
                for &(a, b, t) in &node.by_end {
                    if b < lo {
                        break;
                    }
                    visit(a, b, t);
                }
                if let Some(r) = &node.right {
                    stack.push(r);
                }
            } else {
                for &(a, b, t) in &node.by_start {
                    visit(a, b, t);
                }
                if let Some(l) = &node.left {
                    stack.push(l);
                }
                if let Some(r) = &node.right {
                    stack.push(r);
                }
            }
        }
    }

    /// Collect the payloads reported by `query`.
    pub fn query_collect(&self, lo: f64, hi: f64) -> Vec<T> {
        let mut out = Vec::new();
        self.query(lo, hi, |_, _, t| out.push(t));
        out
    }
}

fn build<T: Copy>(intervals: Vec<(f64, f64, T)>) -> Option<Box<Node<T>>> {
    if intervals.is_empty() {
        return None;
    }
    let mut ends: Vec<f64> = intervals.iter().flat_map(|&(a, b, _)| [a, b]).collect();
    ends.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
    let center = ends[ends.len() / 2];

    let mut left = Vec::new();
    let mut right = Vec::new();
    let mut here = Vec::new();
    for iv in intervals {
        if iv.1 < center {
            left.push(iv);
        } else if iv.0 > center {
            right.push(iv);
        } else {
            here.push(iv);
        }
    }
    let mut by_start = here.clone();
    by_start.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(std::cmp::Ordering::Equal));
    let mut by_end = here;
    by_end.sort_by(|x, y| y.1.partial_cmp(&x.1).unwrap_or(std::cmp::Ordering::Equal));
    Some(Box::new(Node {
        center,
        by_start,
        by_end,
        left: build(left),
        right: build(right),
    }))
}
