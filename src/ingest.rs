//! Payload Ingest Boundary
//!
//! Deserializes the raw provider response and normalizes it into the canonical
//! [`Activity`] record consumed by the aggregation components.
//!
//! The provider nests the user record under either a named `user` key or the
//! session-bound `viewer` key, optionally wrapped in a GraphQL `data`
//! envelope. That shape probing happens exactly once here, producing an
//! explicit [`UserSource`]; downstream components never touch the raw payload.
//!
//! Absence of data is an expected, first-class outcome: a payload with no user
//! record or no contribution calendar normalizes to `None` (logged as a
//! warning), which the assembler maps to the canonical empty blueprint. Every
//! missing count defaults to 0, missing optional text to `None`, and missing
//! collections to empty sequences, so no partial-field absence ever surfaces
//! as an error.

use serde::Deserialize;
use tracing::warn;

use crate::models::{
    ContributionBreakdown, ContributionWeek, RepoSummary, UserProfile,
};

/// Raw provider response. Tolerates both the enveloped (`{"data": {...}}`) and
/// bare root shapes; unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPayload {
    #[serde(default)]
    pub data: Option<RawRoot>,
    #[serde(default)]
    pub user: Option<RawUser>,
    #[serde(default)]
    pub viewer: Option<RawUser>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRoot {
    #[serde(default)]
    pub user: Option<RawUser>,
    #[serde(default)]
    pub viewer: Option<RawUser>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub followers: Option<CountNode>,
    #[serde(default)]
    pub following: Option<CountNode>,
    #[serde(default)]
    pub pull_requests: Option<CountNode>,
    #[serde(default)]
    pub issues: Option<CountNode>,
    #[serde(default)]
    pub repositories: Option<RawRepositories>,
    #[serde(default)]
    pub contributions_collection: Option<RawContributions>,
}

/// GraphQL connection counter (`{ "totalCount": n }`).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountNode {
    #[serde(default)]
    pub total_count: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRepositories {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub nodes: Vec<RawRepo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRepo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub stargazer_count: u32,
    #[serde(default)]
    pub fork_count: u32,
    #[serde(default)]
    pub primary_language: Option<RawLanguage>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLanguage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContributions {
    #[serde(default)]
    pub total_commit_contributions: u32,
    #[serde(default)]
    pub total_pull_request_contributions: u32,
    #[serde(default)]
    pub total_pull_request_review_contributions: u32,
    #[serde(default)]
    pub total_issue_contributions: u32,
    #[serde(default)]
    pub total_repository_contributions: u32,
    #[serde(default)]
    pub restricted_contributions_count: u32,
    #[serde(default)]
    pub contribution_calendar: Option<RawCalendar>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCalendar {
    #[serde(default)]
    pub total_contributions: u32,
    #[serde(default)]
    pub weeks: Vec<ContributionWeek>,
}

/// Where the user record came from. Resolved once at the ingest boundary.
#[derive(Debug, Clone)]
pub enum UserSource {
    /// Found under the named `user` key.
    Named(RawUser),
    /// Found under the session-bound `viewer` key.
    Viewer(RawUser),
    /// Neither key was populated.
    Absent,
}

impl UserSource {
    pub fn into_user(self) -> Option<RawUser> {
        match self {
            UserSource::Named(user) | UserSource::Viewer(user) => Some(user),
            UserSource::Absent => None,
        }
    }
}

/// Canonical internal record: everything the aggregation components need,
/// fully defaulted.
#[derive(Debug, Clone)]
pub struct Activity {
    pub total_contributions: u32,
    pub weeks: Vec<ContributionWeek>,
    pub profile: UserProfile,
    pub repositories: Vec<RepoSummary>,
    pub breakdown: ContributionBreakdown,
}

/// Resolve the user/viewer envelope. A `data` envelope, when present, is used
/// exclusively; top-level keys are not consulted. The named key wins over the
/// viewer key when both are populated.
pub fn resolve_source(payload: RawPayload) -> UserSource {
    let (user, viewer) = match payload.data {
        Some(root) => (root.user, root.viewer),
        None => (payload.user, payload.viewer),
    };
    match (user, viewer) {
        (Some(user), _) => UserSource::Named(user),
        (None, Some(viewer)) => UserSource::Viewer(viewer),
        (None, None) => UserSource::Absent,
    }
}

/// Normalize the raw payload into the canonical [`Activity`] record.
///
/// Returns `None` when the payload carries no user record or no contribution
/// calendar; the caller maps that to the canonical empty blueprint.
pub fn normalize(payload: RawPayload) -> Option<Activity> {
    let Some(user) = resolve_source(payload).into_user() else {
        warn!("no user or viewer record in payload");
        return None;
    };

    let contributions = user.contributions_collection.unwrap_or_default();
    let Some(calendar) = contributions.contribution_calendar else {
        warn!("user record carries no contribution calendar");
        return None;
    };

    let repositories_node = user.repositories.unwrap_or_default();
    let profile = UserProfile {
        login: user.login.unwrap_or_else(|| "unknown".to_string()),
        name: user.name,
        avatar_url: user.avatar_url.unwrap_or_default(),
        bio: user.bio,
        created_at: user.created_at.unwrap_or_default(),
        followers: user.followers.map(|n| n.total_count).unwrap_or(0),
        following: user.following.map(|n| n.total_count).unwrap_or(0),
        total_repos: repositories_node.total_count,
    };

    let repositories = repositories_node
        .nodes
        .into_iter()
        .map(|repo| {
            let language = repo.primary_language.unwrap_or_default();
            RepoSummary {
                name: repo.name.unwrap_or_default(),
                stars: repo.stargazer_count,
                forks: repo.fork_count,
                language: language.name,
                language_color: language.color,
                updated_at: repo.updated_at.unwrap_or_default(),
                description: repo.description,
            }
        })
        .collect();

    let breakdown = ContributionBreakdown {
        commits: contributions.total_commit_contributions,
        pull_requests: contributions.total_pull_request_contributions,
        reviews: contributions.total_pull_request_review_contributions,
        issues: contributions.total_issue_contributions,
        repositories: contributions.total_repository_contributions,
        restricted: contributions.restricted_contributions_count,
    };

    Some(Activity {
        total_contributions: calendar.total_contributions,
        weeks: calendar.weeks,
        profile,
        repositories,
        breakdown,
    })
}
