// src/core/harness/stats.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visited-node totals for one kind of operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OperationStats {
    total: u64,
    max: u64,
    count: u64,
}

impl OperationStats {
    pub fn record(&mut self, visited: u64) {
        self.total += visited;
        self.max = self.max.max(visited);
        self.count += 1;
    }

    /// Mean visited nodes per operation, 0.0 when nothing was recorded.
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total as f64 / self.count as f64
        }
    }

    pub const fn max(&self) -> u64 {
        self.max
    }

    pub const fn count(&self) -> u64 {
        self.count
    }

    pub const fn total(&self) -> u64 {
        self.total
    }
}

/// Accumulators for the tree currently under test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub inserts: OperationStats,
    pub queries: OperationStats,
}

impl TreeStats {
    pub fn summary(&self, elements: usize) -> TreeSummary {
        TreeSummary {
            elements,
            query_avg: self.queries.average(),
            query_max: self.queries.max(),
            insert_avg: self.inserts.average(),
            insert_max: self.inserts.max(),
        }
    }
}

/// Result line for one finished tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeSummary {
    /// Element count declared by the tree's `#` line.
    pub elements: usize,
    pub query_avg: f64,
    pub query_max: u64,
    pub insert_avg: f64,
    pub insert_max: u64,
}

impl fmt::Display for TreeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.elements, self.query_avg, self.query_max, self.insert_avg, self.insert_max
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_operation_stats() {
        let mut stats = OperationStats::default();
        assert_eq!(stats.average(), 0.0);

        for visited in [4, 10, 1] {
            stats.record(visited);
        }
        assert_eq!(stats.count(), 3);
        assert_eq!(stats.total(), 15);
        assert_eq!(stats.max(), 10);
        assert_relative_eq!(stats.average(), 5.0);
    }

    #[test]
    fn test_summary_text_line() {
        let mut stats = TreeStats::default();
        stats.inserts.record(3);
        stats.inserts.record(4);
        stats.queries.record(9);

        let summary = stats.summary(2);
        assert_relative_eq!(summary.insert_avg, 3.5);
        assert_eq!(summary.to_string(), "2 9 9 3.5 4");
    }

    #[test]
    fn test_summary_without_queries() {
        let summary = TreeStats::default().summary(0);
        assert_eq!(summary.to_string(), "0 0 0 0 0");
    }

    #[test]
    fn test_summary_json() {
        let mut stats = TreeStats::default();
        stats.queries.record(12);
        let json = serde_json::to_string(&stats.summary(5)).unwrap();
        assert_eq!(
            json,
            r#"{"elements":5,"query_avg":12.0,"query_max":12,"insert_avg":0.0,"insert_max":0}"#
        );
        let back: TreeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back.elements, 5);
    }
}
