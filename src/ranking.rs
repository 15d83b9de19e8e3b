//! Ranking Classification
//!
//! Maps aggregate totals, the longest streak and the consistency percentage to
//! one of nine named tiers through an ordered threshold cascade. The cascade
//! is an exact contract: the most exclusive rules are checked first and the
//! first match wins, so the rule order may not be changed.

use serde::Serialize;
use std::fmt;

/// The nine ordered ranking tiers, top tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rank {
    NexusArchitect,
    Construct,
    PrimeArchitect,
    Architect,
    Cybermancer,
    Netrunner,
    Scripter,
    Neophyte,
    Ghost,
}

impl Rank {
    pub fn name(&self) -> &'static str {
        match self {
            Rank::NexusArchitect => "NEXUS_ARCHITECT",
            Rank::Construct => "CONSTRUCT",
            Rank::PrimeArchitect => "PRIME_ARCHITECT",
            Rank::Architect => "ARCHITECT",
            Rank::Cybermancer => "CYBERMANCER",
            Rank::Netrunner => "NETRUNNER",
            Rank::Scripter => "SCRIPTER",
            Rank::Neophyte => "NEOPHYTE",
            Rank::Ghost => "GHOST",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rank::NexusArchitect => "You have transcended the code. You ARE the system.",
            Rank::Construct => "A digital entity. You no longer write code, you manifest it.",
            Rank::PrimeArchitect => "Master builder. Every commit is a brick of your empire.",
            Rank::Architect => "You build cathedrals of logic.",
            Rank::Cybermancer => "Code flows through your veins. Digital sorcery.",
            Rank::Netrunner => "You navigate the matrix with ease.",
            Rank::Scripter => "You command the basic incantations.",
            Rank::Neophyte => "The awakening begins. Keep going.",
            Rank::Ghost => "A presence barely perceptible in the network.",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered cascade over (total, max streak, consistency). First match wins.
pub fn classify(total: u32, max_streak: u32, consistency: u32) -> Rank {
    if total > 5000 && consistency > 70 {
        Rank::NexusArchitect
    } else if total > 5000 {
        Rank::Construct
    } else if total > 2500 && max_streak > 30 {
        Rank::PrimeArchitect
    } else if total > 2500 {
        Rank::Architect
    } else if total > 1000 && consistency > 60 {
        Rank::Cybermancer
    } else if total > 1000 {
        Rank::Netrunner
    } else if total > 500 {
        Rank::Scripter
    } else if total > 100 {
        Rank::Neophyte
    } else {
        Rank::Ghost
    }
}
