//! The `examgrade init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create a starter key file
    std::fs::create_dir_all("answer-keys")?;
    let keys_path = std::path::Path::new("answer-keys/example.toml");
    if keys_path.exists() {
        println!("answer-keys/example.toml already exists, skipping.");
    } else {
        std::fs::write(keys_path, SAMPLE_KEYS)?;
        println!("Created answer-keys/example.toml");
    }

    // Create example candidate answers
    let answers_path = std::path::Path::new("answers-example.txt");
    if answers_path.exists() {
        println!("answers-example.txt already exists, skipping.");
    } else {
        std::fs::write(answers_path, SAMPLE_ANSWERS)?;
        println!("Created answers-example.txt");
    }

    println!("\nNext steps:");
    println!("  1. Fill answer-keys/example.toml with the published key data");
    println!("  2. Run: examgrade validate --keys answer-keys/example.toml");
    println!(
        "  3. Run: examgrade grade --keys answer-keys/example.toml --edition 2024 \
         --day1-color Blue --day2-color Gray --language english --answers answers-example.txt"
    );

    Ok(())
}

const SAMPLE_KEYS: &str = r#"# examgrade answer-key data
#
# One edition per file. Each day lists its booklet colors; each booklet maps
# question identifiers to the correct letter, or to "annulled".
# Questions 1-5 exist in two language variants: the E suffix marks English,
# the S suffix Spanish. The Essay entry is never graded.

[edition]
id = "2024"
name = "National Exam 2024"
description = "Starter key data, replace with the published keys"

[[day1]]
color = "Blue"
[day1.key]
1E = "A"
1S = "C"
2E = "B"
2S = "D"
3E = "C"
3S = "A"
4E = "D"
4S = "B"
5E = "E"
5S = "E"
6 = "A"
7 = "B"
8 = "annulled"
46 = "C"
47 = "D"
Essay = "annulled"

[[day2]]
color = "Gray"
[day2.key]
91 = "E"
92 = "A"
136 = "B"
137 = "C"
"#;

const SAMPLE_ANSWERS: &str = "1\nA\n2\nB\n3\nD\n6\nA\n46\nC\n91\nE\n136\nA\n";

#[cfg(test)]
mod tests {
    use super::*;
    use examgrade_core::parser::{parse_key_file_str, validate_edition};
    use std::path::PathBuf;

    #[test]
    fn sample_keys_parse_cleanly() {
        let edition =
            parse_key_file_str(SAMPLE_KEYS, &PathBuf::from("example.toml")).unwrap();
        assert_eq!(edition.id, "2024");
        assert!(validate_edition(&edition).is_empty());
    }

    #[test]
    fn sample_answers_decode_without_warnings() {
        let (answers, warnings) = examgrade_core::codec::decode_answers(SAMPLE_ANSWERS);
        assert!(warnings.is_empty());
        assert_eq!(answers.len(), 7);
    }
}
