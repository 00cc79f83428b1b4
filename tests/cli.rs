//! CLI behavior tests: exit codes, output formats, prompting, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn psyche_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_psyche"));
    // Run outside the crate so no project config is picked up
    cmd.current_dir(std::env::temp_dir());
    cmd
}

fn uniform_answers(value: u8) -> String {
    vec![value.to_string(); 54].join(",")
}

fn stdin_answers(value: u8) -> String {
    format!("{}\n", vec![value.to_string(); 54].join("\n"))
}

#[test]
fn answers_all_neutral_is_estj_a() {
    let mut cmd = psyche_cmd();
    cmd.arg("--answers").arg(uniform_answers(3)).arg("--no-color");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Your personality type is: ESTJ-A"))
        .stdout(predicate::str::contains("The Executive"));
}

#[test]
fn answers_all_agree_is_enfj_t() {
    let mut cmd = psyche_cmd();
    cmd.arg("--answers")
        .arg(uniform_answers(4))
        .arg("--quiet")
        .arg("--no-color");
    cmd.assert().success().stdout("ENFJ-T\n");
}

#[test]
fn json_output_valid() {
    let mut cmd = psyche_cmd();
    cmd.arg("--answers").arg(uniform_answers(5)).arg("--json");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let s = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert_eq!(parsed["type"], "ENFJ-T");
    assert_eq!(parsed["scores"]["EI"], 30);
    assert_eq!(parsed["scores"]["AT"], -40);
    assert_eq!(parsed["dimensions"].as_array().unwrap().len(), 5);
}

#[test]
fn json_wins_over_quiet() {
    let mut cmd = psyche_cmd();
    cmd.arg("--answers")
        .arg(uniform_answers(3))
        .arg("--json")
        .arg("--quiet");
    let output = cmd.output().unwrap();
    let s = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(s.trim()).expect("valid JSON");
    assert_eq!(parsed["type"], "ESTJ-A");
}

#[test]
fn text_export_with_name() {
    let mut cmd = psyche_cmd();
    cmd.arg("--answers")
        .arg(uniform_answers(1))
        .arg("--text")
        .arg("--name")
        .arg("Ada");
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("PERSONALITY QUIZ RESULTS - Ada"))
        .stdout(predicate::str::contains("Personality Type: ISTP-A"))
        .stdout(predicate::str::contains("PERSONALITY DIMENSIONS:"));
}

#[test]
fn wrong_answer_count_exit_2() {
    let mut cmd = psyche_cmd();
    cmd.arg("--answers").arg("1,2,3");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("expected 54 responses, got 3"));
}

#[test]
fn out_of_range_answer_exit_2() {
    let mut values = vec!["3".to_string(); 54];
    values[0] = "6".to_string();
    let mut cmd = psyche_cmd();
    cmd.arg("--answers").arg(values.join(","));
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("response 1 is 6"));
}

#[test]
fn non_numeric_answer_exit_2() {
    let mut cmd = psyche_cmd();
    cmd.arg("--answers").arg("3,three");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("'three' is not a number"));
}

#[test]
fn interactive_session_from_stdin() {
    let mut cmd = psyche_cmd();
    cmd.arg("--no-color").write_stdin(stdin_answers(3));
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PERSONALITY TEST"))
        .stdout(predicate::str::contains("Question 54/54:"))
        .stdout(predicate::str::contains("Your personality type is: ESTJ-A"));
}

#[test]
fn interactive_reprompts_on_bad_input() {
    let input = format!("maybe\n9\n{}", stdin_answers(3));
    let mut cmd = psyche_cmd();
    cmd.arg("--no-color").write_stdin(input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please enter a number between 1 and 5.",
        ))
        .stdout(predicate::str::contains("Your personality type is: ESTJ-A"));
}

#[test]
fn interactive_json_keeps_prompts_off_stdout() {
    let mut cmd = psyche_cmd();
    cmd.arg("--json").write_stdin(stdin_answers(5));
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let parsed: serde_json::Value = serde_json::from_str(stdout.trim()).expect("valid JSON");
    assert_eq!(parsed["type"], "ENFJ-T");
    assert!(stderr.contains("Question 1/54:"));
}

#[test]
fn closed_stdin_cancels_without_result() {
    let mut cmd = psyche_cmd();
    cmd.write_stdin("4\n4\n");
    cmd.assert()
        .success()
        .code(0)
        .stdout(predicate::str::contains("Your personality type").not())
        .stderr(predicate::str::contains("Test cancelled. Goodbye!"));
}

#[test]
fn interactive_non_utf8_line_reprompts() {
    let mut input = b"\xff\xfe\n".to_vec();
    input.extend_from_slice(stdin_answers(3).as_bytes());
    let mut cmd = psyche_cmd();
    cmd.arg("--no-color").write_stdin(input);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input. Please enter a number between 1 and 5.",
        ))
        .stdout(predicate::str::contains("Your personality type is: ESTJ-A"));
}

#[cfg(unix)]
#[test]
fn interrupt_during_prompt_exits_without_result() {
    use std::io::Read;
    use std::process::{Command as StdCommand, Stdio};

    let mut child = StdCommand::new(env!("CARGO_BIN_EXE_psyche"))
        .arg("--no-color")
        .current_dir(std::env::temp_dir())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    // Kept open so the session blocks on the first question
    let _stdin = child.stdin.take().unwrap();
    let mut stdout = child.stdout.take().unwrap();

    let mut seen = Vec::new();
    let mut chunk = [0u8; 1024];
    while !String::from_utf8_lossy(&seen).contains("Question 1/54") {
        let n = stdout.read(&mut chunk).unwrap();
        assert!(n > 0, "stdout closed before the first question");
        seen.extend_from_slice(&chunk[..n]);
    }

    let kill = StdCommand::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(kill.success());

    stdout.read_to_end(&mut seen).unwrap();
    let status = child.wait().unwrap();
    let mut stderr = String::new();
    child
        .stderr
        .take()
        .unwrap()
        .read_to_string(&mut stderr)
        .unwrap();

    assert_eq!(status.code(), Some(0));
    assert!(stderr.contains("Test cancelled. Goodbye!"));
    let stdout = String::from_utf8_lossy(&seen);
    assert!(!stdout.contains("YOUR RESULTS"));
    assert!(!stdout.contains("Your personality type"));
}

#[test]
fn questions_lists_table() {
    let mut cmd = psyche_cmd();
    cmd.arg("questions");
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 54);
    assert!(stdout.contains("You struggle with deadlines."));
}

#[test]
fn questions_json() {
    let mut cmd = psyche_cmd();
    cmd.arg("questions").arg("--json");
    let output = cmd.output().unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 54);
}

#[test]
fn types_single_code() {
    let mut cmd = psyche_cmd();
    cmd.arg("types").arg("intj-t");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("The Architect"));
}

#[test]
fn types_unknown_code_exit_2() {
    let mut cmd = psyche_cmd();
    cmd.arg("types").arg("ABCD");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown personality type"));
}

#[test]
fn types_unknown_suffix_exit_2() {
    let mut cmd = psyche_cmd();
    cmd.arg("types").arg("ENFP-XYZ");
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown personality type 'ENFP-XYZ'"));
}

#[test]
fn listing_subcommands_honor_no_color() {
    for sub in ["questions", "types"] {
        let mut cmd = psyche_cmd();
        cmd.env("CLICOLOR_FORCE", "1").arg(sub).arg("--no-color");
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("\x1b[").not());
    }
}

#[test]
fn types_lists_all_sixteen() {
    let mut cmd = psyche_cmd();
    cmd.arg("types").arg("--json");
    let output = cmd.output().unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 16);
}

#[test]
fn init_creates_config() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".psycherc.json");
    let mut cmd = psyche_cmd();
    cmd.arg("init")
        .arg("--dir")
        .arg(dir.path())
        .arg("--format")
        .arg("json")
        .arg("--bar-width")
        .arg("30");
    cmd.assert().success();
    assert!(config_path.exists(), ".psycherc.json should be created");
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("\"format\": \"json\""));
    assert!(content.contains("\"barWidth\": 30"));
}

#[test]
fn init_does_not_overwrite() {
    let dir = tempfile::TempDir::new().unwrap();
    let config_path = dir.path().join(".psycherc.json");
    fs::write(&config_path, "{ \"format\": \"text\" }").unwrap();
    let mut cmd = psyche_cmd();
    cmd.arg("init").arg("--dir").arg(dir.path());
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(
        fs::read_to_string(&config_path).unwrap(),
        "{ \"format\": \"text\" }"
    );
}

#[test]
fn init_rejects_bad_bar_width() {
    let dir = tempfile::TempDir::new().unwrap();
    let mut cmd = psyche_cmd();
    cmd.arg("init")
        .arg("--dir")
        .arg(dir.path())
        .arg("--bar-width")
        .arg("3");
    cmd.assert().failure().code(2);
    assert!(!dir.path().join(".psycherc.json").exists());
}

#[test]
fn config_file_sets_default_format() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join(".psycherc.json"), r#"{ "format": "json" }"#).unwrap();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_psyche"));
    cmd.current_dir(dir.path())
        .arg("--answers")
        .arg(uniform_answers(3));
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value =
        serde_json::from_str(String::from_utf8_lossy(&output.stdout).trim()).expect("valid JSON");
    assert_eq!(parsed["type"], "ESTJ-A");
    assert!(String::from_utf8_lossy(&output.stderr).contains("Using config"));
}

#[test]
fn cli_format_overrides_config() {
    let dir = tempfile::TempDir::new().unwrap();
    fs::write(dir.path().join(".psycherc.json"), r#"{ "format": "json" }"#).unwrap();
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_psyche"));
    cmd.current_dir(dir.path())
        .arg("--answers")
        .arg(uniform_answers(3))
        .arg("--quiet")
        .arg("--no-color")
        .arg("--format")
        .arg("console");
    cmd.assert().success().stdout("ESTJ-A\n");
}

#[test]
fn missing_explicit_config_exit_2() {
    let mut cmd = psyche_cmd();
    cmd.arg("--config")
        .arg("does-not-exist.json")
        .arg("--answers")
        .arg(uniform_answers(3));
    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Config file not found"));
}
