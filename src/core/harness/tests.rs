use std::io::Cursor;

use super::*;
use crate::core::common::RangeIndexError;
use crate::core::config::{Config, OutputFormat};
use approx::assert_relative_eq;

fn run(config: Config, input: &str) -> (crate::Result<RunReport>, String) {
    let mut harness = Harness::new(config).unwrap();
    let mut output = Vec::new();
    let result = harness.run(Cursor::new(input), &mut output);
    (result, String::from_utf8(output).unwrap())
}

fn text_lines(output: &str) -> Vec<Vec<f64>> {
    output
        .lines()
        .map(|line| line.split(' ').map(|v| v.parse().unwrap()).collect())
        .collect()
}

#[test]
fn test_single_tree_text_output() {
    let input = "# 4\nI 1 5\nI 2 3\nI 3 8\nI 4 1\nC 1 1 3 8\nC 0 0 9 9\n";
    let (result, output) = run(Config::default(), input);

    let report = result.unwrap();
    assert_eq!(report, RunReport { trees: 1, commands: 7 });

    let lines = text_lines(&output);
    assert_eq!(lines.len(), 1);
    let fields = &lines[0];
    assert_eq!(fields.len(), 5);
    assert_eq!(fields[0], 4.0);
    assert!(fields[1] > 0.0 && fields[1] <= fields[2]);
    assert!(fields[3] > 0.0 && fields[3] <= fields[4]);
}

#[test]
fn test_one_summary_per_declared_tree() {
    let input = "# 2\nI 1 1\nI 2 2\n# 3\nI 1 1\nI 2 2\nI 3 3\nC 0 0 5 5\n";
    let (result, output) = run(Config::default(), input);
    assert_eq!(result.unwrap().trees, 2);

    let lines = text_lines(&output);
    assert_eq!(lines[0][0], 2.0);
    // no queries on the first tree
    assert_eq!(lines[0][1], 0.0);
    assert_eq!(lines[0][2], 0.0);
    assert_eq!(lines[1][0], 3.0);
    assert!(lines[1][2] > 0.0);
}

#[test]
fn test_empty_declared_tree_is_not_finished_early() {
    let input = "# 0\nI 1 1\n# 2\nI 5 5\n";
    let (result, output) = run(Config::default(), input);
    assert_eq!(result.unwrap().trees, 1);
    assert_eq!(text_lines(&output)[0][0], 2.0);
}

#[test]
fn test_last_tree_is_always_finished() {
    let (result, output) = run(Config::default(), "# 0\n");
    assert_eq!(result.unwrap().trees, 1);
    assert_eq!(output, "0 0 0 0 0\n");

    let (result, output) = run(Config::default(), "\n\n");
    assert_eq!(result.unwrap(), RunReport::default());
    assert!(output.is_empty());
}

#[test]
fn test_json_output() {
    let config = Config::builder().output_format(OutputFormat::Json).build().unwrap();
    let input = "# 3\nI 1 1\nI 2 2\nI 3 3\nC 1 1 2 2\n# 1\nI 0 0\n";
    let (result, output) = run(config, input);
    assert_eq!(result.unwrap().trees, 2);

    let summaries: Vec<TreeSummary> =
        output.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].elements, 3);
    assert!(summaries[0].query_max > 0);
    assert_eq!(summaries[1].elements, 1);
    assert_relative_eq!(summaries[1].insert_avg, 1.0);
    assert_eq!(summaries[1].query_max, 0);
}

#[test]
fn test_unknown_commands_are_skipped() {
    let input = "# 1\nX 1 2\nI 1 1\n";
    let (result, _) = run(Config::default(), input);
    assert_eq!(result.unwrap().commands, 2);
}

#[test]
fn test_command_before_tree_is_rejected() {
    let (result, _) = run(Config::default(), "I 1 2\n");
    assert!(matches!(result, Err(RangeIndexError::InvalidInput { .. })));

    let (result, _) = run(Config::default(), "C 0 0 1 1\n");
    assert!(matches!(result, Err(RangeIndexError::InvalidInput { .. })));
}

#[test]
fn test_malformed_line_reports_position() {
    let (result, _) = run(Config::default(), "# 2\nI 1 1\nI 1 x\n");
    match result {
        Err(RangeIndexError::Parsing { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected parsing error, got {other:?}"),
    }
}

#[test]
fn test_validation_each_operation() {
    let config = Config::builder().alpha(0.6).validate_each_operation(true).build().unwrap();
    let mut input = String::from("# 200\n");
    for i in 0..200 {
        input.push_str(&format!("I {i} {}\n", (i * 37) % 200));
        if i % 20 == 0 {
            input.push_str(&format!("C 0 0 {i} 200\n"));
        }
    }
    let (result, output) = run(config, &input);
    let report = result.unwrap();
    assert_eq!(report.commands, 211);
    assert_eq!(text_lines(&output)[0][0], 200.0);
}

#[test]
fn test_stats_track_current_tree() {
    let mut harness = Harness::new(Config::default()).unwrap();
    let mut sink = Vec::new();
    harness.execute(Command::NewTree { elements: 2 }, &mut sink).unwrap();
    harness.execute(Command::Insert((1, 1).into()), &mut sink).unwrap();
    harness.execute(Command::Insert((2, 2).into()), &mut sink).unwrap();

    assert_eq!(harness.stats().inserts.count(), 2);
    assert_eq!(harness.stats().queries.count(), 0);
    assert!(sink.is_empty());
}

#[test]
fn test_invalid_config_rejected() {
    let config = Config { alpha: 1.0, ..Config::default() };
    assert!(matches!(Harness::new(config), Err(RangeIndexError::Configuration(_))));
}
