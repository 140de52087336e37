//! `rating` and `achievements` commands.

use std::collections::HashSet;
use std::path::Path;

use crate::achievements::{self, PlayerStats};
use crate::config::Config;
use crate::rating;
use crate::util::load_document;

pub fn run_rating(
    config: &Config,
    current: i32,
    performance: f64,
    matches: u32,
    reference: i32,
) -> anyhow::Result<()> {
    let update = rating::update_rating(current, performance, matches, reference, &config.rating);
    println!(
        "Rating: {} -> {} ({:+}, K={}, expected {:.3})",
        update.previous, update.rating, update.delta, update.k_factor, update.expected
    );
    Ok(())
}

pub fn run_achievements(stats_path: &Path, unlocked: Vec<String>) -> anyhow::Result<()> {
    let stats: PlayerStats = load_document(stats_path)?;

    for id in &unlocked {
        if achievements::find(id).is_none() {
            tracing::warn!(id = %id, "achievements: unknown id ignored");
        }
    }
    let unlocked: HashSet<String> = unlocked.into_iter().collect();

    let newly = achievements::evaluate(&stats, &unlocked);
    if newly.is_empty() {
        println!("No new achievements.");
        return Ok(());
    }
    for achievement in newly {
        println!("{:<20} {} - {}", achievement.id, achievement.title, achievement.description);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_achievements_reads_stats_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.toml");
        std::fs::write(&path, "testsCompleted = 2\nstreakDays = 9\n").unwrap();
        run_achievements(&path, vec!["first_boot".to_string(), "bogus".to_string()]).unwrap();
    }

    #[test]
    fn test_run_rating() {
        run_rating(&Config::default(), 1500, 75.0, 4, 1500).unwrap();
    }
}
