//! The `examgrade editions` command.

use std::path::PathBuf;

use anyhow::Result;

use examgrade_core::repository::KeyRepository;

pub fn execute(keys: PathBuf) -> Result<()> {
    let repository = KeyRepository::load(&keys)?;

    if repository.is_empty() {
        println!("No editions found in {}", keys.display());
        return Ok(());
    }

    for edition in repository.editions() {
        println!("Edition: {} — {}", edition.id, edition.name);
        if !edition.description.is_empty() {
            println!("  {}", edition.description);
        }

        let day1: Vec<&str> = edition.day1.colors().collect();
        let day2: Vec<&str> = edition.day2.colors().collect();
        println!("  day 1 colors: {}", day1.join(", "));
        println!("  day 2 colors: {}", day2.join(", "));
        println!();
    }

    Ok(())
}
