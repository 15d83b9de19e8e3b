//! Activity Aggregation
//!
//! Single forward pass over the flattened day sequence, O(days), producing
//! streaks, droughts, the busiest day, monthly and weekday distributions,
//! the weekend ratio, consistency and per-day/per-week averages.
//!
//! Month buckets are keyed by localized month name via the injected
//! [`Locale`]; bucket insertion order is preserved so ties resolve to the
//! first-encountered month. All ratios round half-up and every division by
//! zero yields 0 rather than an error.

use chrono::Datelike;

use crate::locale::Locale;
use crate::models::{ContributionWeek, DayHighlight, MonthHighlight};

/// Saturday/Sunday weekday indices in the 0=Sunday..6=Saturday scheme.
const WEEKEND: [usize; 2] = [0, 6];

/// Aggregate counters derived from the day sequence. Embedded into
/// [`crate::models::UserStats`] by the assembler.
#[derive(Debug, Clone, Default)]
pub struct ActivitySummary {
    pub max_streak: u32,
    pub current_streak: u32,
    pub busiest_day: DayHighlight,
    pub best_month: Option<MonthHighlight>,
    pub worst_month: Option<MonthHighlight>,
    pub weekend_ratio: u32,
    pub weekday_distribution: [u32; 7],
    pub total_active_days: u32,
    pub longest_drought: u32,
    pub consistency: u32,
    pub average_per_day: f64,
    pub average_per_week: f64,
}

/// Round half-up to a whole percentage.
fn round_pct(value: f64) -> u32 {
    value.round() as u32
}

/// Round half-up to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scan the flattened day sequence and accumulate every running statistic.
pub fn aggregate(
    total_contributions: u32,
    weeks: &[ContributionWeek],
    locale: Locale,
) -> ActivitySummary {
    let mut summary = ActivitySummary::default();

    let mut streak = 0u32;
    let mut drought = 0u32;
    let mut weekend_total = 0u32;
    // Insertion-ordered so month ties resolve to the first-encountered month.
    let mut month_totals: Vec<(&'static str, u32)> = Vec::new();

    let days: Vec<_> = weeks
        .iter()
        .flat_map(|week| week.contribution_days.iter())
        .collect();

    for (index, day) in days.iter().enumerate() {
        if day.is_active() {
            summary.total_active_days += 1;
            streak += 1;
            drought = 0;
            if streak > summary.max_streak {
                summary.max_streak = streak;
            }

            if day.contribution_count > summary.busiest_day.count {
                summary.busiest_day = DayHighlight {
                    date: day.date.clone(),
                    count: day.contribution_count,
                };
            }

            if let Ok(date) = chrono::NaiveDate::parse_from_str(&day.date, "%Y-%m-%d") {
                let name = locale.month_name(date.month0() as usize);
                match month_totals.iter_mut().find(|(month, _)| *month == name) {
                    Some((_, count)) => *count += day.contribution_count,
                    None => month_totals.push((name, day.contribution_count)),
                }
            }

            if let Some(weekday) = day.weekday_index() {
                if WEEKEND.contains(&weekday) {
                    weekend_total += day.contribution_count;
                }
                summary.weekday_distribution[weekday] += day.contribution_count;
            }
        } else {
            drought += 1;
            if drought > summary.longest_drought {
                summary.longest_drought = drought;
            }
            streak = 0;
        }

        // The running streak only counts as "current" if it reaches the
        // final day of the sequence.
        if index == days.len() - 1 && day.is_active() {
            summary.current_streak = streak;
        }
    }

    for (name, count) in &month_totals {
        let beats_best = summary
            .best_month
            .as_ref()
            .map(|best| *count > best.count)
            .unwrap_or(true);
        if beats_best {
            summary.best_month = Some(MonthHighlight {
                name: name.to_string(),
                count: *count,
            });
        }
        // A month with zero accumulated total is never the worst month.
        let beats_worst = summary
            .worst_month
            .as_ref()
            .map(|worst| *count < worst.count)
            .unwrap_or(true);
        if *count > 0 && beats_worst {
            summary.worst_month = Some(MonthHighlight {
                name: name.to_string(),
                count: *count,
            });
        }
    }

    if total_contributions > 0 {
        summary.weekend_ratio =
            round_pct(f64::from(weekend_total) / f64::from(total_contributions) * 100.0);
    }
    if !days.is_empty() {
        summary.consistency = round_pct(
            f64::from(summary.total_active_days) / days.len() as f64 * 100.0,
        );
        summary.average_per_day = round1(f64::from(total_contributions) / days.len() as f64);
    }
    if !weeks.is_empty() {
        summary.average_per_week = round1(f64::from(total_contributions) / weeks.len() as f64);
    }

    summary
}
