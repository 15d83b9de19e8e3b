//! Core Data Models
//!
//! This module defines the primary data structures used throughout the
//! contribution analytics engine. These models represent the complete pipeline
//! from the provider's contribution calendar to the assembled blueprint.
//!
//! ## Data Flow
//!
//! The data flows through these models in the following sequence:
//!
//! 1. **Calendar**: [`ContributionWeek`] / [`ContributionDay`] - the raw weekly
//!    calendar, carried verbatim from the provider
//! 2. **Derivation**: [`Floor`] - per-week geometric descriptors,
//!    [`RemarkableEvent`] - detected anomalies and milestones
//! 3. **Report**: [`UserStats`] - the aggregate statistics report
//! 4. **Output**: [`Blueprint`] - the single object handed to rendering and UI
//!    collaborators
//!
//! ## Wire Shape
//!
//! Every output type serializes with camelCase field names; downstream
//! collaborators index into the serialized structure unconditionally, so no
//! field is ever omitted from the output.

use serde::{Deserialize, Serialize};

/// A single day of the contribution calendar, carried verbatim from the
/// provider. `weekday` is 0=Sunday..6=Saturday when present; when absent it is
/// derived from `date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub contribution_count: u32,
    #[serde(default)]
    pub weekday: Option<u8>,
    #[serde(default)]
    pub color: Option<String>,
}

/// One calendar week: up to seven days plus the date of the week start.
/// Weeks are ordered chronologically ascending; that order is load-bearing
/// for streak, drought and milestone detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    #[serde(default)]
    pub contribution_days: Vec<ContributionDay>,
    #[serde(default)]
    pub first_day: String,
}

impl ContributionDay {
    pub fn is_active(&self) -> bool {
        self.contribution_count > 0
    }

    /// Weekday index 0=Sunday..6=Saturday, from the provider field when
    /// present, otherwise derived from the date. `None` when the date cannot
    /// be parsed either.
    pub fn weekday_index(&self) -> Option<usize> {
        if let Some(weekday) = self.weekday {
            return Some(usize::from(weekday) % 7);
        }
        let date = chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        Some(chrono::Datelike::weekday(&date).num_days_from_sunday() as usize)
    }
}

impl ContributionWeek {
    pub fn total(&self) -> u32 {
        self.contribution_days
            .iter()
            .map(|day| day.contribution_count)
            .sum()
    }

    pub fn active_days(&self) -> u32 {
        self.contribution_days
            .iter()
            .filter(|day| day.is_active())
            .count() as u32
    }

    /// Anchor date for the week: `firstDay` when the provider supplied it,
    /// otherwise the date of the first day in the week.
    pub fn anchor_date(&self) -> String {
        if !self.first_day.is_empty() {
            return self.first_day.clone();
        }
        self.contribution_days
            .first()
            .map(|day| day.date.clone())
            .unwrap_or_default()
    }
}

/// Read-only snapshot of the user's profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub login: String,
    pub name: Option<String>,
    pub avatar_url: String,
    pub bio: Option<String>,
    pub created_at: String,
    pub followers: u32,
    pub following: u32,
    pub total_repos: u32,
}

/// Summary of one repository from the provider's top-repository list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoSummary {
    pub name: String,
    pub stars: u32,
    pub forks: u32,
    pub language: Option<String>,
    pub language_color: Option<String>,
    pub updated_at: String,
    pub description: Option<String>,
}

/// Per-category contribution totals. The visible categories need not sum to
/// `totalContributions`: restricted contributions are invisible per-day but
/// counted in the total.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionBreakdown {
    pub commits: u32,
    pub pull_requests: u32,
    pub reviews: u32,
    pub issues: u32,
    pub repositories: u32,
    pub restricted: u32,
}

/// One language's share of the top-repository list.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageStat {
    pub name: String,
    pub color: String,
    pub count: u32,
    pub percentage: u32,
}

/// Kind of a detected remarkable event. `StreakStart` and `StreakEnd` are part
/// of the collaborator contract but are not emitted by the detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    Peak,
    Drought,
    StreakStart,
    StreakEnd,
    Milestone,
}

/// An algorithmically flagged anomalous week or milestone day.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemarkableEvent {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub date: String,
    pub week_index: usize,
    pub value: u32,
    pub label: String,
    pub description: String,
}

/// Categorical floor type: a strict three-way partition of the week's active
/// day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FloorKind {
    Solid,
    Wireframe,
    Void,
}

/// Marker kind stamped onto a floor by the event detector. Every non-peak,
/// non-drought event collapses to `Streak`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemarkableKind {
    Peak,
    Drought,
    Streak,
}

/// One week's derived geometric and categorical descriptor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: usize,
    pub height: f64,
    pub color: String,
    pub width: f64,
    #[serde(rename = "type")]
    pub kind: FloorKind,
    pub date: String,
    pub week_total: u32,
    pub active_days: u32,
    pub is_remarkable: bool,
    pub remarkable_type: Option<RemarkableKind>,
}

/// The single busiest day of the calendar. `date` is empty when no day was
/// active.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHighlight {
    pub date: String,
    pub count: u32,
}

/// A named month with its accumulated contribution total.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthHighlight {
    pub name: String,
    pub count: u32,
}

/// The aggregate statistics report embedded in every [`Blueprint`].
///
/// `calendar` re-exposes the raw weeks verbatim for heatmap rendering by the
/// UI collaborator; everything else is derived.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_contributions: u32,
    pub max_streak: u32,
    pub current_streak: u32,
    pub busiest_day: DayHighlight,
    pub best_month: MonthHighlight,
    pub worst_month: MonthHighlight,
    pub weekend_ratio: u32,
    pub weekday_distribution: [u32; 7],
    pub ranking: crate::ranking::Rank,
    pub ranking_description: String,
    pub calendar: Vec<ContributionWeek>,
    pub top_repos: Vec<RepoSummary>,
    pub languages: Vec<LanguageStat>,
    pub remarkable_events: Vec<RemarkableEvent>,
    pub profile: UserProfile,
    pub breakdown: ContributionBreakdown,
    pub average_per_day: f64,
    pub average_per_week: f64,
    pub total_active_days: u32,
    pub longest_drought: u32,
    pub consistency: u32,
}

/// The complete derived output for one user and time period: floor geometry
/// plus the statistics report. Built once per payload and never mutated after
/// assembly.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub floors: Vec<Floor>,
    pub stats: UserStats,
}
