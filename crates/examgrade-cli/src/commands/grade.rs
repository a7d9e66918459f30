//! The `examgrade grade` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use examgrade_core::areas::Area;
use examgrade_core::codec::decode_answers;
use examgrade_core::grader::{grade, GradedExam, Tally};
use examgrade_core::model::ForeignLanguage;
use examgrade_core::repository::KeyRepository;
use examgrade_store::{default_store_path, ConfigStore, SavedConfig};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    keys: PathBuf,
    edition: String,
    day1_color: String,
    day2_color: String,
    language_str: String,
    answers_path: PathBuf,
    format: String,
    save: Option<String>,
    store_path: Option<PathBuf>,
) -> Result<()> {
    let language: ForeignLanguage = language_str
        .parse()
        .map_err(|e: String| anyhow::anyhow!("{e}"))?;

    let repository = KeyRepository::load(&keys)?;

    let answers_text = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read answers from {}", answers_path.display()))?;
    let (raw_answers, import_warnings) = decode_answers(&answers_text);
    for w in &import_warnings {
        eprintln!("  line {}: WARNING: {}", w.line, w.message);
    }

    let answers = raw_answers.with_language(language);
    let unified = repository.unified_key(&edition, &day1_color, &day2_color, language)?;
    let graded = grade(&unified, &answers);

    match format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&graded)?);
        }
        _ => {
            // text format
            print_summary(&graded);
            print_mismatches(&graded);
        }
    }

    if let Some(name) = save {
        let path = store_path.unwrap_or_else(default_store_path);
        let mut store = ConfigStore::load(&path)?;
        store.prepend(SavedConfig {
            name,
            edition,
            day1_color,
            day2_color,
            language,
            answers_text,
            saved_at: Utc::now(),
        });
        store.save(&path)?;
        eprintln!("Configuration saved to: {}", path.display());
    }

    Ok(())
}

fn print_summary(graded: &GradedExam) {
    use comfy_table::{Cell, Table};

    let mut table = Table::new();
    table.set_header(vec!["Area", "Total", "Correct", "Missed", "Score"]);

    for area in Area::ALL {
        let tally = graded.report.area(area);
        table.add_row(vec![
            Cell::new(area.label()),
            Cell::new(tally.total),
            Cell::new(tally.correct),
            Cell::new(tally.missed()),
            Cell::new(format_percent(tally)),
        ]);
    }

    let overall = graded.report.overall;
    table.add_row(vec![
        Cell::new("Overall"),
        Cell::new(overall.total),
        Cell::new(overall.correct),
        Cell::new(overall.missed()),
        Cell::new(format_percent(overall)),
    ]);

    println!("{table}");
}

fn print_mismatches(graded: &GradedExam) {
    if graded.mismatches.is_empty() {
        println!("\nNo wrong answers.");
        return;
    }

    println!("\nWrong answers:");
    let mut current_area: Option<Area> = None;
    for mismatch in &graded.mismatches {
        if current_area != Some(mismatch.area) {
            println!("  {}:", mismatch.area);
            current_area = Some(mismatch.area);
        }
        println!(
            "    {}: correct {}, marked {}",
            mismatch.question, mismatch.expected, mismatch.marked
        );
    }
}

/// Percentage with a comma decimal separator; 0% when nothing was considered.
fn format_percent(tally: Tally) -> String {
    format!("{:.1}%", tally.ratio() * 100.0).replace('.', ",")
}
