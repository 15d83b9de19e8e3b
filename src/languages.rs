//! Language Summary
//!
//! Tallies repository primary languages into a top-5 percentage breakdown.
//! The tally is insertion-ordered and the final sort is stable, so languages
//! with equal counts keep their first-encountered order. Repositories without
//! a primary language are excluded from the percentage denominator.

use crate::models::{LanguageStat, RepoSummary};

const TOP_LANGUAGES: usize = 5;
const DEFAULT_LANGUAGE_COLOR: &str = "#888";

pub fn summarize_languages(repos: &[RepoSummary]) -> Vec<LanguageStat> {
    let mut tally: Vec<LanguageStat> = Vec::new();
    for repo in repos {
        let Some(name) = repo.language.as_deref() else {
            continue;
        };
        match tally.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.count += 1,
            None => tally.push(LanguageStat {
                name: name.to_string(),
                color: repo
                    .language_color
                    .clone()
                    .unwrap_or_else(|| DEFAULT_LANGUAGE_COLOR.to_string()),
                count: 1,
                percentage: 0,
            }),
        }
    }

    let tagged_repos: u32 = tally.iter().map(|entry| entry.count).sum();
    for entry in &mut tally {
        entry.percentage =
            (f64::from(entry.count) / f64::from(tagged_repos) * 100.0).round() as u32;
    }

    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally.truncate(TOP_LANGUAGES);
    tally
}
