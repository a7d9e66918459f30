//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn examgrade() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("examgrade").unwrap()
}

const TEST_KEYS: &str = r#"
[edition]
id = "2024"
name = "Test Edition"

[[day1]]
color = "Blue"
[day1.key]
1E = "A"
1S = "B"
6 = "C"
40 = "annulled"
46 = "D"
Essay = "annulled"

[[day2]]
color = "Gray"
[day2.key]
91 = "E"
136 = "A"
"#;

const TEST_ANSWERS: &str = "1\nA\n6\nc\n46\nB\n91\n\n136\nA\n";

fn write_fixtures(dir: &TempDir) -> (std::path::PathBuf, std::path::PathBuf) {
    let keys = dir.path().join("keys.toml");
    let answers = dir.path().join("answers.txt");
    std::fs::write(&keys, TEST_KEYS).unwrap();
    std::fs::write(&answers, TEST_ANSWERS).unwrap();
    (keys, answers)
}

#[test]
fn validate_shipped_key_file() {
    examgrade()
        .arg("validate")
        .arg("--keys")
        .arg("../../answer-keys/example-2024.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Edition: 2024 (2 day-1 booklets, 2 day-2 booklets)",
        ))
        .stdout(predicate::str::contains("All key files valid"));
}

#[test]
fn validate_directory() {
    examgrade()
        .arg("validate")
        .arg("--keys")
        .arg("../../answer-keys")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edition: 2024"));
}

#[test]
fn validate_nonexistent_file() {
    examgrade()
        .arg("validate")
        .arg("--keys")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn editions_lists_colors() {
    examgrade()
        .arg("editions")
        .arg("--keys")
        .arg("../../answer-keys/example-2024.toml")
        .assert()
        .success()
        .stdout(predicate::str::contains("Edition: 2024"))
        .stdout(predicate::str::contains("day 1 colors: Blue, Yellow"))
        .stdout(predicate::str::contains("day 2 colors: Gray, Purple"));
}

#[test]
fn grade_text_output() {
    let dir = TempDir::new().unwrap();
    let (keys, answers) = write_fixtures(&dir);

    examgrade()
        .arg("grade")
        .arg("--keys")
        .arg(&keys)
        .arg("--edition")
        .arg("2024")
        .arg("--day1-color")
        .arg("blue")
        .arg("--day2-color")
        .arg("Gray")
        .arg("--language")
        .arg("english")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall"))
        .stdout(predicate::str::contains("60,0%"))
        .stdout(predicate::str::contains("46: correct D, marked B"));
}

#[test]
fn grade_json_output() {
    let dir = TempDir::new().unwrap();
    let (keys, answers) = write_fixtures(&dir);

    examgrade()
        .arg("grade")
        .arg("--keys")
        .arg(&keys)
        .arg("--edition")
        .arg("2024")
        .arg("--day1-color")
        .arg("Blue")
        .arg("--day2-color")
        .arg("Gray")
        .arg("--language")
        .arg("english")
        .arg("--answers")
        .arg(&answers)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"mismatches\""))
        .stdout(predicate::str::contains("\"total\": 5"))
        .stdout(predicate::str::contains("\"correct\": 3"));
}

#[test]
fn grade_unknown_color_fails() {
    let dir = TempDir::new().unwrap();
    let (keys, answers) = write_fixtures(&dir);

    examgrade()
        .arg("grade")
        .arg("--keys")
        .arg(&keys)
        .arg("--edition")
        .arg("2024")
        .arg("--day1-color")
        .arg("Green")
        .arg("--day2-color")
        .arg("Gray")
        .arg("--language")
        .arg("english")
        .arg("--answers")
        .arg(&answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("Green"));
}

#[test]
fn grade_full_shipped_edition() {
    let dir = TempDir::new().unwrap();
    let answers_path = dir.path().join("answers.txt");
    let mut text = String::new();
    for n in 1..=180 {
        text.push_str(&format!("{n}\nA\n"));
    }
    std::fs::write(&answers_path, text).unwrap();

    examgrade()
        .arg("grade")
        .arg("--keys")
        .arg("../../answer-keys/example-2024.toml")
        .arg("--edition")
        .arg("2024")
        .arg("--day1-color")
        .arg("Blue")
        .arg("--day2-color")
        .arg("Gray")
        .arg("--language")
        .arg("english")
        .arg("--answers")
        .arg(&answers_path)
        .assert()
        .success()
        // 180 questions minus 3 annulled = 177 considered.
        .stdout(predicate::str::contains("177"))
        .stdout(predicate::str::contains("20,3%"));
}

#[test]
fn grade_save_and_manage_configurations() {
    let dir = TempDir::new().unwrap();
    let (keys, answers) = write_fixtures(&dir);
    let store = dir.path().join("saved.json");

    examgrade()
        .arg("grade")
        .arg("--keys")
        .arg(&keys)
        .arg("--edition")
        .arg("2024")
        .arg("--day1-color")
        .arg("Blue")
        .arg("--day2-color")
        .arg("Gray")
        .arg("--language")
        .arg("spanish")
        .arg("--answers")
        .arg(&answers)
        .arg("--save")
        .arg("first try")
        .arg("--store")
        .arg(&store)
        .assert()
        .success();

    examgrade()
        .arg("saved")
        .arg("list")
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("0. first try"))
        .stdout(predicate::str::contains("spanish"));

    examgrade()
        .arg("saved")
        .arg("show")
        .arg("0")
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: first try"))
        .stdout(predicate::str::contains("Answers:"));

    examgrade()
        .arg("saved")
        .arg("delete")
        .arg("0")
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted saved configuration"));

    examgrade()
        .arg("saved")
        .arg("list")
        .arg("--store")
        .arg(&store)
        .assert()
        .success()
        .stdout(predicate::str::contains("No saved configurations"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created answer-keys/example.toml"))
        .stdout(predicate::str::contains("Created answers-example.txt"));

    assert!(dir.path().join("answer-keys/example.toml").exists());
    assert!(dir.path().join("answers-example.txt").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn init_output_grades_end_to_end() {
    let dir = TempDir::new().unwrap();

    examgrade()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    examgrade()
        .current_dir(dir.path())
        .arg("grade")
        .arg("--keys")
        .arg("answer-keys/example.toml")
        .arg("--edition")
        .arg("2024")
        .arg("--day1-color")
        .arg("Blue")
        .arg("--day2-color")
        .arg("Gray")
        .arg("--language")
        .arg("english")
        .arg("--answers")
        .arg("answers-example.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Overall"));
}

#[test]
fn help_output() {
    examgrade()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Answer-key grading for two-day exams",
        ));
}

#[test]
fn version_output() {
    examgrade()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("examgrade"));
}
