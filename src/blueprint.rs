//! Blueprint Assembly
//!
//! The pipeline coordinator: normalizes the raw payload, runs the aggregation
//! components and composes their outputs into the single [`Blueprint`] handed
//! to rendering and UI collaborators.
//!
//! Pipeline: ingest -> { stats, floors, languages } -> events (needs floors +
//! days) -> ranking (needs aggregates) -> assembly. Every stage is a pure
//! function over the normalized record; a payload without usable data short-
//! circuits to the canonical empty blueprint instead of erroring.

use tracing::debug;

use crate::ingest::{self, Activity, RawPayload};
use crate::locale::Locale;
use crate::models::{
    Blueprint, ContributionBreakdown, DayHighlight, MonthHighlight, UserProfile, UserStats,
};
use crate::ranking::Rank;
use crate::{events, floors, languages, ranking, stats};

/// Description attached to the empty blueprint; the populated GHOST tier
/// carries its own sentence.
const NO_DATA_DESCRIPTION: &str = "No data detected.";

/// Sentinel month name in the empty blueprint.
const VOID_MONTH: &str = "VOID";

/// Build a blueprint from a raw provider payload. Absence of data yields the
/// canonical empty blueprint, never an error.
pub fn build_blueprint(payload: RawPayload, locale: Locale) -> Blueprint {
    match ingest::normalize(payload) {
        Some(activity) => assemble(activity, locale),
        None => Blueprint::empty(),
    }
}

/// Assemble a blueprint from an already-normalized activity record.
pub fn assemble(activity: Activity, locale: Locale) -> Blueprint {
    let Activity {
        total_contributions,
        weeks,
        profile,
        repositories,
        breakdown,
    } = activity;

    let summary = stats::aggregate(total_contributions, &weeks, locale);
    let mut floors = floors::build_floors(&weeks);
    let remarkable_events = events::detect_events(&weeks, &floors);
    events::mark_floors(&mut floors, &remarkable_events);
    let languages = languages::summarize_languages(&repositories);
    let rank = ranking::classify(total_contributions, summary.max_streak, summary.consistency);

    debug!(
        total_contributions,
        floors = floors.len(),
        events = remarkable_events.len(),
        rank = %rank,
        "blueprint assembled"
    );

    Blueprint {
        floors,
        stats: UserStats {
            total_contributions,
            max_streak: summary.max_streak,
            current_streak: summary.current_streak,
            busiest_day: summary.busiest_day,
            best_month: summary.best_month.unwrap_or(MonthHighlight {
                name: String::new(),
                count: 0,
            }),
            worst_month: summary.worst_month.unwrap_or(MonthHighlight {
                name: "N/A".to_string(),
                count: 0,
            }),
            weekend_ratio: summary.weekend_ratio,
            weekday_distribution: summary.weekday_distribution,
            ranking: rank,
            ranking_description: rank.description().to_string(),
            calendar: weeks,
            top_repos: repositories,
            languages,
            remarkable_events,
            profile,
            breakdown,
            average_per_day: summary.average_per_day,
            average_per_week: summary.average_per_week,
            total_active_days: summary.total_active_days,
            longest_drought: summary.longest_drought,
            consistency: summary.consistency,
        },
    }
}

impl Blueprint {
    /// Canonical fallback when no session or no data is available.
    /// Structurally identical in shape to a populated blueprint so
    /// collaborators never branch on emptiness.
    pub fn empty() -> Self {
        Blueprint {
            floors: Vec::new(),
            stats: UserStats {
                total_contributions: 0,
                max_streak: 0,
                current_streak: 0,
                busiest_day: DayHighlight::default(),
                best_month: MonthHighlight {
                    name: VOID_MONTH.to_string(),
                    count: 0,
                },
                worst_month: MonthHighlight {
                    name: VOID_MONTH.to_string(),
                    count: 0,
                },
                weekend_ratio: 0,
                weekday_distribution: [0; 7],
                ranking: Rank::Ghost,
                ranking_description: NO_DATA_DESCRIPTION.to_string(),
                calendar: Vec::new(),
                top_repos: Vec::new(),
                languages: Vec::new(),
                remarkable_events: Vec::new(),
                profile: UserProfile {
                    login: "unknown".to_string(),
                    name: None,
                    avatar_url: String::new(),
                    bio: None,
                    created_at: String::new(),
                    followers: 0,
                    following: 0,
                    total_repos: 0,
                },
                breakdown: ContributionBreakdown::default(),
                average_per_day: 0.0,
                average_per_week: 0.0,
                total_active_days: 0,
                longest_drought: 0,
                consistency: 0,
            },
        }
    }
}
