// src/core/harness/command.rs

//! Line protocol of the benchmarking harness.
//!
//! ```text
//! # <n>                 start a new tree expected to hold n points
//! I <x> <y>             insert a point
//! C <x1> <y1> <x2> <y2> count points in the rectangle [x1, x2] x [y1, y2]
//! ```

use std::str::FromStr;

use crate::core::common::RangeIndexError;
use crate::core::geometry::Point;
use crate::Result;

/// Coordinate type read by the harness.
pub type Coordinate = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    NewTree { elements: usize },
    Insert(Point<Coordinate>),
    Count { low: Point<Coordinate>, high: Point<Coordinate> },
}

impl Command {
    /// Parses one input line, `line_no` being 1-based.
    ///
    /// Blank lines and lines with an unknown leading token yield `Ok(None)`.
    ///
    /// # Errors
    /// Returns `RangeIndexError::Parsing` when a known command has the wrong
    /// number of arguments or an argument is not a number.
    pub fn parse(line: &str, line_no: usize) -> Result<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(tag) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match tag {
            "#" => {
                let [n] = expect_args::<usize, 1>(&args, line_no, tag)?;
                Self::NewTree { elements: n }
            }
            "I" => {
                let [x, y] = expect_args::<Coordinate, 2>(&args, line_no, tag)?;
                Self::Insert(Point::new(x, y))
            }
            "C" => {
                let [x1, y1, x2, y2] = expect_args::<Coordinate, 4>(&args, line_no, tag)?;
                Self::Count { low: Point::new(x1, y1), high: Point::new(x2, y2) }
            }
            other => {
                log::warn!("line {line_no}: skipping unknown command {other:?}");
                return Ok(None);
            }
        };
        Ok(Some(command))
    }
}

fn expect_args<N: FromStr, const K: usize>(args: &[&str], line_no: usize, tag: &str) -> Result<[N; K]> {
    if args.len() != K {
        return Err(RangeIndexError::parsing(
            line_no,
            format!("'{tag}' takes {K} argument(s), got {}", args.len()),
        ));
    }
    let mut parsed = Vec::with_capacity(K);
    for arg in args {
        let value = arg
            .parse::<N>()
            .map_err(|_| RangeIndexError::parsing(line_no, format!("'{arg}' is not a valid number")))?;
        parsed.push(value);
    }
    parsed
        .try_into()
        .map_err(|_| RangeIndexError::parsing(line_no, format!("'{tag}' takes {K} argument(s)")))
}
