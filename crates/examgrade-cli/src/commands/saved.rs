//! The `examgrade saved` subcommands.

use std::path::PathBuf;

use anyhow::Result;

use examgrade_store::{default_store_path, ConfigStore};

fn store_path(path: Option<PathBuf>) -> PathBuf {
    path.unwrap_or_else(default_store_path)
}

pub fn list(path: Option<PathBuf>) -> Result<()> {
    let path = store_path(path);
    let store = ConfigStore::load(&path)?;

    if store.is_empty() {
        println!("No saved configurations.");
        return Ok(());
    }

    for (index, config) in store.entries().iter().enumerate() {
        println!(
            "{index}. {} — edition {}, {}/{}, {}, saved {}",
            config.name,
            config.edition,
            config.day1_color,
            config.day2_color,
            config.language,
            config.saved_at.format("%Y-%m-%d %H:%M UTC"),
        );
    }

    Ok(())
}

pub fn show(index: usize, path: Option<PathBuf>) -> Result<()> {
    let path = store_path(path);
    let store = ConfigStore::load(&path)?;

    let Some(config) = store.entries().get(index) else {
        anyhow::bail!("no saved configuration at index {index} ({} saved)", store.len());
    };

    println!("Name: {}", config.name);
    println!("Edition: {}", config.edition);
    println!("Day 1 color: {}", config.day1_color);
    println!("Day 2 color: {}", config.day2_color);
    println!("Language: {}", config.language);
    println!("Saved: {}", config.saved_at.format("%Y-%m-%d %H:%M UTC"));
    println!("\nAnswers:\n{}", config.answers_text);

    Ok(())
}

pub fn delete(index: usize, path: Option<PathBuf>) -> Result<()> {
    let path = store_path(path);
    let mut store = ConfigStore::load(&path)?;

    let removed = store.delete(index)?;
    store.save(&path)?;
    println!("Deleted saved configuration: {}", removed.name);

    Ok(())
}
