//! The `examgrade validate` command.

use std::path::PathBuf;

use anyhow::Result;

use examgrade_core::parser;

pub fn execute(keys: PathBuf) -> Result<()> {
    let editions = if keys.is_dir() {
        parser::load_key_directory(&keys)?
    } else {
        vec![parser::parse_key_file(&keys)?]
    };

    let mut total_warnings = 0;

    for edition in &editions {
        println!(
            "Edition: {} ({} day-1 booklets, {} day-2 booklets)",
            edition.id,
            edition.day1.booklets.len(),
            edition.day2.booklets.len()
        );

        let warnings = parser::validate_edition(edition);
        for w in &warnings {
            let prefix = w
                .booklet
                .as_ref()
                .map(|color| format!("  [{color}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All key files valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
