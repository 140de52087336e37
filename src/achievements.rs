//! Achievement catalog and unlock evaluation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Aggregated player history used by achievement predicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    pub tests_completed: u32,
    pub best_iq: f64,
    pub best_eq: f64,
    pub current_rating: i32,
    pub streak_days: u32,
    /// Number of distinct archetypes the player has been matched to.
    pub archetypes_seen: u32,
    pub max_risk_tolerance: f64,
}

/// A catalog entry. `predicate` decides whether the stats qualify.
#[derive(Clone, Copy, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub predicate: fn(&PlayerStats) -> bool,
}

impl std::fmt::Debug for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Achievement")
            .field("id", &self.id)
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

pub const ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: "first_boot",
        title: "First Boot",
        description: "Complete your first assessment.",
        predicate: |s| s.tests_completed >= 1,
    },
    Achievement {
        id: "veteran_analyst",
        title: "Veteran Analyst",
        description: "Complete 25 assessments.",
        predicate: |s| s.tests_completed >= 25,
    },
    Achievement {
        id: "cognitive_overclock",
        title: "Cognitive Overclock",
        description: "Reach an IQ estimate of 130 or more.",
        predicate: |s| s.best_iq >= 130.0,
    },
    Achievement {
        id: "empath_protocol",
        title: "Empath Protocol",
        description: "Reach an EQ estimate of 120 or more.",
        predicate: |s| s.best_eq >= 120.0,
    },
    Achievement {
        id: "grandmaster",
        title: "Grandmaster",
        description: "Reach a rating of 2000.",
        predicate: |s| s.current_rating >= 2000,
    },
    Achievement {
        id: "seven_day_streak",
        title: "Seven-Day Streak",
        description: "Take an assessment seven days in a row.",
        predicate: |s| s.streak_days >= 7,
    },
    Achievement {
        id: "thirty_day_streak",
        title: "Thirty-Day Streak",
        description: "Take an assessment thirty days in a row.",
        predicate: |s| s.streak_days >= 30,
    },
    Achievement {
        id: "shapeshifter",
        title: "Shapeshifter",
        description: "Be matched to four different archetypes.",
        predicate: |s| s.archetypes_seen >= 4,
    },
    Achievement {
        id: "all_in",
        title: "All-In",
        description: "Score 90 or more on risk tolerance.",
        predicate: |s| s.max_risk_tolerance >= 90.0,
    },
];

/// Look up a catalog entry by id.
pub fn find(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

/// Achievements the stats qualify for that are not already unlocked, in
/// catalog order.
pub fn evaluate(stats: &PlayerStats, unlocked: &HashSet<String>) -> Vec<&'static Achievement> {
    let newly: Vec<&'static Achievement> = ACHIEVEMENTS
        .iter()
        .filter(|a| !unlocked.contains(a.id) && (a.predicate)(stats))
        .collect();
    if !newly.is_empty() {
        tracing::debug!(count = newly.len(), "achievements: newly unlocked");
    }
    newly
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ids(list: &[&Achievement]) -> Vec<&'static str> {
        list.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let set: HashSet<_> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(set.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn test_empty_stats_unlock_nothing() {
        assert!(evaluate(&PlayerStats::default(), &HashSet::new()).is_empty());
    }

    #[test]
    fn test_evaluate_returns_catalog_order() {
        let stats = PlayerStats {
            tests_completed: 30,
            best_iq: 135.0,
            streak_days: 8,
            max_risk_tolerance: 95.0,
            ..PlayerStats::default()
        };
        let unlocked = evaluate(&stats, &HashSet::new());
        assert_eq!(
            ids(&unlocked),
            vec![
                "first_boot",
                "veteran_analyst",
                "cognitive_overclock",
                "seven_day_streak",
                "all_in"
            ]
        );
    }

    #[test]
    fn test_already_unlocked_never_returned() {
        let stats = PlayerStats {
            tests_completed: 1,
            current_rating: 2100,
            ..PlayerStats::default()
        };
        let unlocked: HashSet<String> = ["first_boot".to_string()].into_iter().collect();
        assert_eq!(ids(&evaluate(&stats, &unlocked)), vec!["grandmaster"]);
    }

    #[test]
    fn test_stats_parse_with_missing_fields() {
        let stats: PlayerStats =
            serde_json::from_str(r#"{"testsCompleted": 3, "archetypesSeen": 4}"#).unwrap();
        assert_eq!(stats.tests_completed, 3);
        assert_eq!(stats.best_iq, 0.0);
        assert_eq!(ids(&evaluate(&stats, &HashSet::new())), vec!["first_boot", "shapeshifter"]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("all_in").map(|a| a.title), Some("All-In"));
        assert!(find("missing").is_none());
    }
}
