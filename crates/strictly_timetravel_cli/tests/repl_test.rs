//! End-to-end tests for the command loop.

use strictly_timetravel_cli::{Cli, OutputFormat, Settings, run};

fn transcript(settings: &Settings, input: &str) -> String {
    let mut out = Vec::new();
    run(settings, input.as_bytes(), &mut out).expect("loop runs");
    String::from_utf8(out).expect("utf-8 output")
}

#[test]
fn test_win_then_time_travel() {
    let out = transcript(&Settings::default(), "0\n4\n1\n5\n2\njump 0\n3\nquit\n");

    assert!(out.contains("Winner: X"));
    let last_status = out
        .rsplit("Moves:")
        .nth(1)
        .and_then(|s| s.lines().rev().find(|l| !l.is_empty()));
    assert_eq!(last_status, Some("Next player: O"));
    assert!(out.ends_with("Go to move #1 - [Column: 1, Row: 2] (X)\n\n"));
}

#[test]
fn test_bad_input_is_reported_and_loop_continues() {
    let out = transcript(&Settings::default(), "4\n4\n9\njump 7\nfly\nundo\nquit\n");

    assert!(out.contains("Move ignored: Center is already occupied"));
    assert!(out.contains("cell index 9 is outside 0..=8"));
    assert!(out.contains("step 7 is outside history of length 2"));
    assert!(out.contains("Unknown command 'fly'"));
    assert!(out.ends_with(concat!(
        ">  0. Go to game start\n",
        "   1. Go to move #1 - [Column: 2, Row: 2] (X)\n\n",
    )));
}

#[test]
fn test_reverse_command_flips_list() {
    let out = transcript(&Settings::default(), "4\nreverse\n");
    assert!(out.ends_with(concat!(
        "Moves (newest first):\n",
        ">  1. Go to move #1 - [Column: 2, Row: 2] (X)\n",
        "   0. Go to game start\n\n",
    )));
}

#[test]
fn test_json_frames() {
    let cli = Cli {
        format: Some(OutputFormat::Json),
        ..Cli::default()
    };
    let settings = Settings::resolve(&cli).unwrap();
    let out = transcript(&settings, "4\n");

    let frames: Vec<serde_json::Value> = out
        .lines()
        .map(|line| serde_json::from_str(line).expect("json frame"))
        .collect();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[1]["step"], 1);
    assert_eq!(frames[1]["status"]["NextPlayer"], "O");
}
