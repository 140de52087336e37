//! Trait-asserting vocabulary and the matcher that finds it in free text.
//!
//! Each lexicon lists words that *claim* a dimension sits at a given level.
//! The validator flags a hit when the measured level is the opposite one.
//! Matching is case-insensitive substring search, so `"Disciplined"` and
//! `"undisciplined"` both hit `"disciplined"`.

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};

use crate::profile::{Dimension, NormalizedVector};

/// Below this (0-100 scale) a dimension counts as low.
pub const LOW_CUTOFF: f64 = 40.0;

/// At or above this (0-100 scale) a dimension counts as high.
pub const HIGH_CUTOFF: f64 = 75.0;

/// Measured or asserted level of a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Level of a 0-100 value, `None` in the mid band.
    pub fn of(percent: f64) -> Option<Self> {
        if percent < LOW_CUTOFF {
            Some(Self::Low)
        } else if percent >= HIGH_CUTOFF {
            Some(Self::High)
        } else {
            None
        }
    }

    /// Measured level of a dimension in a vector.
    pub fn measured(vector: &NormalizedVector, dimension: Dimension) -> Option<Self> {
        Self::of(vector.percent(dimension))
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Words asserting that `dimension` is at `level`.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    pub dimension: Dimension,
    pub level: Level,
    pub words: &'static [&'static str],
}

pub const LEXICONS: &[Lexicon] = &[
    // -- Intelligence --
    Lexicon {
        dimension: Dimension::Iq,
        level: Level::High,
        words: &["brilliant", "genius", "analytical", "intellectual", "abstract", "systems thinker"],
    },
    Lexicon {
        dimension: Dimension::Iq,
        level: Level::Low,
        words: &["simple-minded", "slow learner", "concrete thinker", "struggles with complexity"],
    },
    Lexicon {
        dimension: Dimension::Eq,
        level: Level::High,
        words: &[
            "empathic",
            "empathetic",
            "reads the room",
            "emotionally attuned",
            "compassion",
            "warmth",
        ],
    },
    Lexicon {
        dimension: Dimension::Eq,
        level: Level::Low,
        words: &["tone-deaf", "emotionally blind", "oblivious", "detached", "cold"],
    },
    // -- Risk --
    Lexicon {
        dimension: Dimension::RiskTolerance,
        level: Level::High,
        words: &["bold", "daring", "fearless", "bet on", "risk-taker", "moves first"],
    },
    Lexicon {
        dimension: Dimension::RiskTolerance,
        level: Level::Low,
        words: &["cautious", "risk-averse", "conservative", "plays it safe", "hesitant"],
    },
    // -- HEXACO --
    Lexicon {
        dimension: Dimension::Honesty,
        level: Level::High,
        words: &["principled", "sincere", "sincerity", "honest", "integrity", "humble"],
    },
    Lexicon {
        dimension: Dimension::Honesty,
        level: Level::Low,
        words: &["manipulative", "rules as negotiable", "cunning", "deceptive", "self-serving"],
    },
    Lexicon {
        dimension: Dimension::Emotionality,
        level: Level::High,
        words: &["sensitive", "feels everything", "anxious", "emotional", "vulnerable"],
    },
    Lexicon {
        dimension: Dimension::Emotionality,
        level: Level::Low,
        words: &["unshaken", "unflappable", "stoic", "ice-cold", "steady under pressure"],
    },
    Lexicon {
        dimension: Dimension::Extraversion,
        level: Level::High,
        words: &["outgoing", "thrives in the spotlight", "high-energy", "outward-facing", "charismatic"],
    },
    Lexicon {
        dimension: Dimension::Extraversion,
        level: Level::Low,
        words: &["quiet", "reserved", "introverted", "away from the spotlight", "solitary"],
    },
    Lexicon {
        dimension: Dimension::Agreeableness,
        level: Level::High,
        words: &["gentle", "accommodating", "cooperative", "toward agreement", "forgiving"],
    },
    Lexicon {
        dimension: Dimension::Agreeableness,
        level: Level::Low,
        words: &["combative", "abrasive", "confrontational", "blunt", "stubborn"],
    },
    Lexicon {
        dimension: Dimension::Conscientiousness,
        level: Level::High,
        words: &[
            "disciplined",
            "organized",
            "diligent",
            "meticulous",
            "methodical",
            "reliable",
            "exacting",
            "keeper of standards",
        ],
    },
    Lexicon {
        dimension: Dimension::Conscientiousness,
        level: Level::Low,
        words: &["spontaneous", "chaotic", "disorganized", "careless", "impulsive"],
    },
    Lexicon {
        dimension: Dimension::Openness,
        level: Level::High,
        words: &["original", "unconventional", "visionary", "imaginative", "curious"],
    },
    Lexicon {
        dimension: Dimension::Openness,
        level: Level::Low,
        words: &["traditionalist", "by the book", "set in their ways", "prefers routine", "literal-minded"],
    },
];

struct PatternEntry {
    dimension: Dimension,
    level: Level,
    word: &'static str,
}

/// A lexicon word found in scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconHit {
    pub dimension: Dimension,
    /// Level the word asserts.
    pub level: Level,
    pub word: &'static str,
}

/// Single automaton over every lexicon word.
pub struct LexiconMatcher {
    pattern_matcher: AhoCorasick,
    patterns: Vec<PatternEntry>,
}

impl LexiconMatcher {
    pub fn new() -> Self {
        Self::from_lexicons(LEXICONS)
    }

    pub fn from_lexicons(lexicons: &[Lexicon]) -> Self {
        let patterns: Vec<PatternEntry> = lexicons
            .iter()
            .flat_map(|lexicon| {
                lexicon.words.iter().map(move |&word| PatternEntry {
                    dimension: lexicon.dimension,
                    level: lexicon.level,
                    word,
                })
            })
            .collect();

        let pattern_strings: Vec<&str> = patterns.iter().map(|p| p.word).collect();
        let pattern_matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&pattern_strings)
            .expect("Failed to build lexicon pattern matcher");

        Self {
            pattern_matcher,
            patterns,
        }
    }

    /// Every lexicon word in `text`, in order of appearance. A word that
    /// occurs several times is reported once.
    pub fn scan(&self, text: &str) -> Vec<LexiconHit> {
        let mut hits: Vec<LexiconHit> = Vec::new();
        for mat in self.pattern_matcher.find_overlapping_iter(text) {
            let entry = &self.patterns[mat.pattern().as_usize()];
            let hit = LexiconHit {
                dimension: entry.dimension,
                level: entry.level,
                word: entry.word,
            };
            if !hits.contains(&hit) {
                hits.push(hit);
            }
        }
        hits
    }
}

impl Default for LexiconMatcher {
    fn default() -> Self {
        Self::new()
    }
}
