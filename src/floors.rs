//! Floor Geometry Builder
//!
//! Maps each calendar week to a [`Floor`] descriptor through deterministic
//! numeric transforms: clamped height and width, a three-tier color step
//! function of the week total, and a strict three-way partition of the active
//! day count into SOLID/WIREFRAME/VOID.
//!
//! Remarkable flags are initialized false here and only ever set by the event
//! detector in a later pass.

use crate::models::{ContributionWeek, Floor, FloorKind};

const HEIGHT_PER_CONTRIBUTION: f64 = 0.5;
const MIN_HEIGHT: f64 = 0.2;
const MAX_HEIGHT: f64 = 10.0;

const WIDTH_PER_CONTRIBUTION: f64 = 0.2;
const MIN_WIDTH: f64 = 2.0;
const MAX_WIDTH: f64 = 8.0;

// Color tier boundaries are contractual: the renderer and the event detector
// both key off week totals around them.
const HOT_WEEK_TOTAL: u32 = 20;
const WARM_WEEK_TOTAL: u32 = 5;
const COLOR_HOT: &str = "#ff00ff";
const COLOR_WARM: &str = "#00f3ff";
const COLOR_DIM: &str = "#333";

impl FloorKind {
    /// SOLID above 4 active days, WIREFRAME above 2, VOID otherwise.
    pub fn from_active_days(active_days: u32) -> Self {
        if active_days > 4 {
            FloorKind::Solid
        } else if active_days > 2 {
            FloorKind::Wireframe
        } else {
            FloorKind::Void
        }
    }
}

fn week_color(week_total: u32) -> &'static str {
    if week_total > HOT_WEEK_TOTAL {
        COLOR_HOT
    } else if week_total > WARM_WEEK_TOTAL {
        COLOR_WARM
    } else {
        COLOR_DIM
    }
}

/// Build one floor per week, in week order.
pub fn build_floors(weeks: &[ContributionWeek]) -> Vec<Floor> {
    weeks
        .iter()
        .enumerate()
        .map(|(index, week)| {
            let week_total = week.total();
            let active_days = week.active_days();
            Floor {
                id: index,
                height: (f64::from(week_total) * HEIGHT_PER_CONTRIBUTION)
                    .clamp(MIN_HEIGHT, MAX_HEIGHT),
                color: week_color(week_total).to_string(),
                width: (f64::from(week_total) * WIDTH_PER_CONTRIBUTION)
                    .clamp(MIN_WIDTH, MAX_WIDTH),
                kind: FloorKind::from_active_days(active_days),
                date: week.anchor_date(),
                week_total,
                active_days,
                is_remarkable: false,
                remarkable_type: None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ContributionDay;

    fn week(counts: &[u32]) -> ContributionWeek {
        ContributionWeek {
            first_day: "2024-01-07".to_string(),
            contribution_days: counts
                .iter()
                .map(|&count| ContributionDay {
                    date: "2024-01-07".to_string(),
                    contribution_count: count,
                    weekday: None,
                    color: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_height_and_width_clamped() {
        let floors = build_floors(&[week(&[0; 7]), week(&[1, 1, 0, 0, 0, 0, 0]), week(&[99; 7])]);
        assert_eq!(floors[0].height, 0.2);
        assert_eq!(floors[0].width, 2.0);
        assert_eq!(floors[1].height, 1.0);
        assert_eq!(floors[1].width, 2.0);
        assert_eq!(floors[2].height, 10.0);
        assert_eq!(floors[2].width, 8.0);
        for floor in &floors {
            assert!(floor.height >= 0.2 && floor.height <= 10.0);
            assert!(floor.width >= 2.0 && floor.width <= 8.0);
        }
    }

    #[test]
    fn test_color_tier_boundaries() {
        let floors = build_floors(&[
            week(&[5, 0, 0, 0, 0, 0, 0]),
            week(&[6, 0, 0, 0, 0, 0, 0]),
            week(&[20, 0, 0, 0, 0, 0, 0]),
            week(&[21, 0, 0, 0, 0, 0, 0]),
        ]);
        assert_eq!(floors[0].color, "#333");
        assert_eq!(floors[1].color, "#00f3ff");
        assert_eq!(floors[2].color, "#00f3ff");
        assert_eq!(floors[3].color, "#ff00ff");
    }

    #[test]
    fn test_kind_partition_covers_all_active_day_counts() {
        for active in 0..=7u32 {
            let counts: Vec<u32> = (0..7).map(|i| u32::from(i < active)).collect();
            let floors = build_floors(&[week(&counts)]);
            let expected = match active {
                5..=7 => FloorKind::Solid,
                3..=4 => FloorKind::Wireframe,
                _ => FloorKind::Void,
            };
            assert_eq!(floors[0].kind, expected, "active_days = {active}");
        }
    }

    #[test]
    fn test_floors_start_unremarkable() {
        let floors = build_floors(&[week(&[30; 7])]);
        assert!(!floors[0].is_remarkable);
        assert!(floors[0].remarkable_type.is_none());
    }
}
