//! Static archetype and career prototype tables.
//!
//! Targets are normalized values in [0, 1]. Only the listed dimensions take
//! part in matching; everything else is ignored for that prototype.
//!
//! Archetypes that reward high IQ target exactly 1.0 on that dimension so
//! their confidence can only grow as IQ rises.

use crate::profile::Dimension;

/// A single dimension target inside a prototype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub dimension: Dimension,
    pub value: f64,
    /// How diagnostic this dimension is for the prototype.
    pub weight: f64,
}

impl Target {
    /// Target with the default weight of 1.0.
    pub const fn new(dimension: Dimension, value: f64) -> Self {
        Self {
            dimension,
            value,
            weight: 1.0,
        }
    }

    pub const fn weighted(dimension: Dimension, value: f64, weight: f64) -> Self {
        Self {
            dimension,
            value,
            weight,
        }
    }
}

/// A named reference point in trait space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prototype {
    pub name: &'static str,
    pub description: &'static str,
    pub targets: &'static [Target],
}

use Dimension::*;

pub const ARCHETYPES: [Prototype; 8] = [
    Prototype {
        name: "Visionary Architect",
        description: "Abstract systems thinker who designs futures others cannot yet see \
            and is willing to bet on them.",
        targets: &[
            Target::weighted(Iq, 1.0, 2.0),
            Target::weighted(Openness, 0.95, 2.0),
            Target::new(RiskTolerance, 0.9),
        ],
    },
    Prototype {
        name: "Precision Engineer",
        description: "Exacting builder who turns raw analytical power into structures \
            that hold under load, unshaken by pressure.",
        targets: &[
            Target::weighted(Iq, 1.0, 2.0),
            Target::weighted(Conscientiousness, 0.95, 2.0),
            Target::new(Emotionality, 0.1),
        ],
    },
    Prototype {
        name: "Empathic Diplomat",
        description: "Reads the room before anyone speaks and steers groups toward \
            agreement with sincerity and warmth.",
        targets: &[
            Target::weighted(Eq, 1.0, 2.0),
            Target::weighted(Agreeableness, 0.92, 2.0),
            Target::new(Honesty, 0.9),
        ],
    },
    Prototype {
        name: "Bold Catalyst",
        description: "High-energy initiator who thrives in the spotlight and moves \
            first when the odds are uncertain.",
        targets: &[
            Target::weighted(Extraversion, 0.95, 2.0),
            Target::weighted(RiskTolerance, 1.0, 2.0),
            Target::new(Emotionality, 0.1),
        ],
    },
    Prototype {
        name: "Guardian Steward",
        description: "Principled keeper of standards who protects people and resources \
            from avoidable harm.",
        targets: &[
            Target::weighted(Conscientiousness, 0.95, 2.0),
            Target::weighted(Honesty, 0.95, 1.5),
            Target::weighted(RiskTolerance, 0.05, 1.5),
        ],
    },
    Prototype {
        name: "Sensitive Artist",
        description: "Feels everything at full volume and turns that intensity into \
            original, unconventional work.",
        targets: &[
            Target::weighted(Emotionality, 0.95, 2.0),
            Target::weighted(Openness, 0.95, 2.0),
            Target::new(Conscientiousness, 0.1),
        ],
    },
    Prototype {
        name: "Strategic Operator",
        description: "Sharp, outward-facing tactician who plays the long game and \
            treats rules as negotiable terrain.",
        targets: &[
            Target::new(Iq, 1.0),
            Target::weighted(Honesty, 0.05, 2.0),
            Target::new(Extraversion, 0.9),
            Target::new(RiskTolerance, 0.9),
        ],
    },
    Prototype {
        name: "Quiet Caretaker",
        description: "Gentle, attentive presence who notices what others need and \
            tends to it away from the spotlight.",
        targets: &[
            Target::weighted(Agreeableness, 0.95, 2.0),
            Target::new(Emotionality, 0.9),
            Target::new(Extraversion, 0.1),
        ],
    },
];

pub const CAREERS: [Prototype; 10] = [
    Prototype {
        name: "Research Scientist",
        description: "Open-ended inquiry with rigorous method.",
        targets: &[
            Target::new(Iq, 0.95),
            Target::new(Openness, 0.9),
            Target::new(Conscientiousness, 0.7),
        ],
    },
    Prototype {
        name: "Software Engineer",
        description: "Systematic problem solving in focused stretches.",
        targets: &[
            Target::new(Iq, 0.85),
            Target::new(Conscientiousness, 0.8),
            Target::new(Extraversion, 0.3),
        ],
    },
    Prototype {
        name: "Clinical Therapist",
        description: "Sustained one-on-one emotional work.",
        targets: &[
            Target::new(Eq, 0.9),
            Target::new(Agreeableness, 0.8),
            Target::new(Emotionality, 0.7),
        ],
    },
    Prototype {
        name: "School Counselor",
        description: "Guidance and support across many relationships.",
        targets: &[
            Target::new(Eq, 0.8),
            Target::new(Agreeableness, 0.9),
            Target::new(Extraversion, 0.6),
        ],
    },
    Prototype {
        name: "Venture Capitalist",
        description: "High-stakes bets on people and ideas.",
        targets: &[
            Target::new(RiskTolerance, 0.9),
            Target::new(Extraversion, 0.8),
            Target::new(Iq, 0.7),
        ],
    },
    Prototype {
        name: "Quantitative Trader",
        description: "Fast decisions under uncertainty with cold analysis.",
        targets: &[
            Target::new(RiskTolerance, 0.85),
            Target::new(Iq, 0.9),
            Target::new(Emotionality, 0.15),
        ],
    },
    Prototype {
        name: "Product Designer",
        description: "Translating human needs into novel artifacts.",
        targets: &[
            Target::new(Openness, 0.9),
            Target::new(Eq, 0.6),
            Target::new(Extraversion, 0.5),
        ],
    },
    Prototype {
        name: "Operations Manager",
        description: "Keeping complex systems running on time.",
        targets: &[
            Target::new(Conscientiousness, 0.9),
            Target::new(Extraversion, 0.6),
            Target::new(Honesty, 0.7),
        ],
    },
    Prototype {
        name: "Investigative Journalist",
        description: "Chasing uncomfortable truths.",
        targets: &[
            Target::new(Openness, 0.8),
            Target::new(Honesty, 0.85),
            Target::new(RiskTolerance, 0.6),
        ],
    },
    Prototype {
        name: "Diplomat",
        description: "Negotiating between parties with competing interests.",
        targets: &[
            Target::new(Eq, 0.8),
            Target::new(Agreeableness, 0.7),
            Target::new(Honesty, 0.8),
            Target::new(Extraversion, 0.7),
        ],
    },
];
