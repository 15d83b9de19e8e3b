use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};

/// Build a provider week object starting at `first_day` (expected to be a
/// Sunday) with one day per entry in `counts`.
pub fn week(first_day: &str, counts: &[u32]) -> Value {
    let start = NaiveDate::parse_from_str(first_day, "%Y-%m-%d").unwrap();
    let days: Vec<Value> = counts
        .iter()
        .enumerate()
        .map(|(offset, &count)| {
            json!({
                "date": (start + Duration::days(offset as i64)).format("%Y-%m-%d").to_string(),
                "contributionCount": count,
                "color": "#216e39"
            })
        })
        .collect();
    json!({ "firstDay": first_day, "contributionDays": days })
}

/// Full provider payload with a `data.user` envelope around the given weeks.
pub fn payload_with_weeks(total: u32, weeks: Vec<Value>) -> Value {
    json!({
        "data": {
            "user": {
                "login": "octocat",
                "name": "The Octocat",
                "avatarUrl": "https://example.test/avatar.png",
                "bio": "Builds towers out of commits",
                "createdAt": "2015-04-01T00:00:00Z",
                "followers": {"totalCount": 120},
                "following": {"totalCount": 12},
                "repositories": {
                    "totalCount": 4,
                    "nodes": [
                        {
                            "name": "tower",
                            "stargazerCount": 42,
                            "forkCount": 3,
                            "primaryLanguage": {"name": "TypeScript", "color": "#3178c6"},
                            "updatedAt": "2024-11-02T10:00:00Z",
                            "description": "Year-in-review scene"
                        },
                        {
                            "name": "engine",
                            "stargazerCount": 17,
                            "forkCount": 1,
                            "primaryLanguage": {"name": "Rust", "color": "#dea584"},
                            "updatedAt": "2024-10-12T10:00:00Z",
                            "description": null
                        },
                        {
                            "name": "notes",
                            "stargazerCount": 0,
                            "forkCount": 0,
                            "primaryLanguage": null,
                            "updatedAt": "2024-02-20T10:00:00Z",
                            "description": "No language here"
                        },
                        {
                            "name": "scripts",
                            "stargazerCount": 2,
                            "forkCount": 0,
                            "primaryLanguage": {"name": "TypeScript", "color": "#3178c6"},
                            "updatedAt": "2024-07-07T10:00:00Z",
                            "description": null
                        }
                    ]
                },
                "pullRequests": {"totalCount": 80},
                "issues": {"totalCount": 31},
                "contributionsCollection": {
                    "totalCommitContributions": total.saturating_sub(10),
                    "totalPullRequestContributions": 5,
                    "totalPullRequestReviewContributions": 3,
                    "totalIssueContributions": 1,
                    "totalRepositoryContributions": 1,
                    "restrictedContributionsCount": 0,
                    "contributionCalendar": {
                        "totalContributions": total,
                        "weeks": weeks
                    }
                }
            }
        }
    })
}

/// A realistic eight-week payload: a surge, a drought, steady weeks and a
/// milestone crossing. Week totals sum to the declared calendar total.
pub fn fixture_payload() -> Value {
    let weeks = vec![
        week("2024-01-07", &[2, 3, 0, 1, 0, 0, 4]),    // 10
        week("2024-01-14", &[0, 5, 5, 5, 5, 5, 0]),    // 25
        week("2024-01-21", &[0, 0, 0, 0, 0, 0, 0]),    // drought after 25
        week("2024-01-28", &[1, 2, 3, 2, 1, 0, 0]),    // 9
        week("2024-02-04", &[8, 9, 9, 9, 9, 8, 8]),    // 60 -> crosses 100
        week("2024-02-11", &[2, 2, 2, 2, 2, 2, 2]),    // 14
        week("2024-02-18", &[0, 1, 0, 1, 0, 1, 0]),    // 3
        week("2024-02-25", &[3, 3, 3, 0, 0, 0, 3]),    // 12
    ];
    payload_with_weeks(133, weeks)
}
