// src/core/harness/runner.rs

use std::io::{BufRead, Write};

use log::{debug, info};

use super::command::{Command, Coordinate};
use super::stats::{TreeStats, TreeSummary};
use crate::core::common::RangeIndexError;
use crate::core::config::{Config, OutputFormat};
use crate::core::indexing::RangeTree;
use crate::Result;

/// Totals of one [`Harness::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Summaries written.
    pub trees: usize,
    /// Commands executed; blank and skipped lines are not counted.
    pub commands: usize,
}

/// Replays a command stream against a sequence of range trees and writes
/// one summary per tree.
#[derive(Debug)]
pub struct Harness {
    config: Config,
    tree: Option<RangeTree<Coordinate>>,
    // Element count declared by the current tree's `#` line.
    elements: usize,
    stats: TreeStats,
    report: RunReport,
}

impl Harness {
    /// # Errors
    /// Returns `RangeIndexError::Configuration` for an invalid config.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tree: None,
            elements: 0,
            stats: TreeStats::default(),
            report: RunReport::default(),
        })
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Stats of the tree currently under test.
    pub const fn stats(&self) -> &TreeStats {
        &self.stats
    }

    /// Reads commands from `reader` to the end, then finishes the last tree.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> Result<RunReport> {
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(command) = Command::parse(&line, index + 1)? {
                self.execute(command, &mut writer)?;
            }
        }
        if self.tree.is_some() {
            self.finish_tree(&mut writer)?;
        }
        writer.flush()?;
        Ok(self.report)
    }

    /// Applies one command. A new-tree command writes the summary of the
    /// previous tree when that tree declared any elements.
    pub fn execute<W: Write>(&mut self, command: Command, writer: &mut W) -> Result<()> {
        match command {
            Command::NewTree { elements } => {
                if self.elements > 0 {
                    self.finish_tree(writer)?;
                }
                self.stats = TreeStats::default();
                self.elements = elements;
                self.tree = Some(RangeTree::new(self.config.alpha)?);
            }
            Command::Insert(point) => {
                let tree = Self::current(&mut self.tree, "insert")?;
                tree.insert(point);
                self.stats.inserts.record(tree.last_visited());
            }
            Command::Count { low, high } => {
                let tree = Self::current(&mut self.tree, "count")?;
                let count = tree.range_count_traced(&low, &high);
                debug!("count {low:?}..{high:?} = {count}, {} nodes visited", tree.last_visited());
                self.stats.queries.record(tree.last_visited());
            }
        }
        self.report.commands += 1;

        if self.config.validate_each_operation {
            if let Some(tree) = &self.tree {
                tree.validate()?;
            }
        }
        Ok(())
    }

    fn current<'a>(
        tree: &'a mut Option<RangeTree<Coordinate>>,
        operation: &str,
    ) -> Result<&'a mut RangeTree<Coordinate>> {
        tree.as_mut().ok_or_else(|| {
            RangeIndexError::invalid_input(format!("{operation} before any '#' line"))
        })
    }

    fn finish_tree<W: Write>(&mut self, writer: &mut W) -> Result<TreeSummary> {
        let summary = self.stats.summary(self.elements);
        match self.config.output_format {
            OutputFormat::Text => writeln!(writer, "{summary}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *writer, &summary)?;
                writeln!(writer)?;
            }
        }
        info!(
            "tree of {} elements: {} inserts, {} queries",
            summary.elements,
            self.stats.inserts.count(),
            self.stats.queries.count()
        );
        self.stats = TreeStats::default();
        self.report.trees += 1;
        Ok(summary)
    }
}
