//! Remarkable Event Detection
//!
//! Post-processes the built floors and the raw day sequence to flag
//! statistically remarkable weeks and milestone days:
//!
//! 1. **Peak/Drought pass** over floors in index order. The peak threshold is
//!    the week total at the top-decile index of the descending-sorted totals;
//!    when that value is missing or zero it falls back to twice the mean. A
//!    zero week immediately after a week above 5 contributions is a drought.
//! 2. **Milestone pass** over the flattened days with an independent running
//!    total against fixed thresholds. Each threshold fires at most once, on
//!    the day the cumulative total first reaches it, however far the total
//!    overshoots.
//!
//! Peaks and droughts come first (interleaved in week scan order), milestones
//! are appended, and the combined list is hard-capped at ten events before any
//! floor is marked.

use crate::models::{
    ContributionWeek, EventKind, Floor, RemarkableEvent, RemarkableKind,
};

pub const MILESTONES: [u32; 5] = [100, 500, 1_000, 2_500, 5_000];
pub const MAX_EVENTS: usize = 10;

/// Peak threshold: top-decile week total, or twice the mean when the decile
/// index lands on nothing usable.
fn peak_threshold(totals: &[u32]) -> f64 {
    let mean = f64::from(totals.iter().sum::<u32>()) / totals.len() as f64;
    let mut sorted = totals.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    let index = (sorted.len() as f64 * 0.1).floor() as usize;
    match sorted.get(index) {
        Some(&total) if total > 0 => f64::from(total),
        _ => mean * 2.0,
    }
}

/// Run both detection passes and return at most [`MAX_EVENTS`] events.
pub fn detect_events(weeks: &[ContributionWeek], floors: &[Floor]) -> Vec<RemarkableEvent> {
    if floors.is_empty() {
        return Vec::new();
    }

    let totals: Vec<u32> = floors.iter().map(|floor| floor.week_total).collect();
    let threshold = peak_threshold(&totals);

    let mut events = Vec::new();
    let mut peaks = 0u32;
    let mut droughts = 0u32;

    for (index, floor) in floors.iter().enumerate() {
        if f64::from(floor.week_total) >= threshold && floor.week_total > 0 {
            peaks += 1;
            events.push(RemarkableEvent {
                kind: EventKind::Peak,
                date: floor.date.clone(),
                week_index: index,
                value: floor.week_total,
                label: format!("SURGE_{peaks:02}"),
                description: format!("Explosive week: {} contributions", floor.week_total),
            });
        }
        // A boundary week can never be a drought.
        if floor.week_total == 0 && index > 0 && floors[index - 1].week_total > 5 {
            droughts += 1;
            events.push(RemarkableEvent {
                kind: EventKind::Drought,
                date: floor.date.clone(),
                week_index: index,
                value: 0,
                label: format!("VOID_{droughts:02}"),
                description: "Silent week after an active period".to_string(),
            });
        }
    }

    let mut running_total = 0u32;
    for (week_index, week) in weeks.iter().enumerate() {
        for day in &week.contribution_days {
            let previous_total = running_total;
            running_total += day.contribution_count;
            for milestone in MILESTONES {
                if previous_total < milestone && running_total >= milestone {
                    events.push(RemarkableEvent {
                        kind: EventKind::Milestone,
                        date: day.date.clone(),
                        week_index,
                        value: milestone,
                        label: format!("MILESTONE_{milestone}"),
                        description: format!("Crossed the {milestone}-contribution mark"),
                    });
                }
            }
        }
    }

    events.truncate(MAX_EVENTS);
    events
}

/// Stamp each event's floor. Anything that is not a peak or a drought
/// collapses to the generic streak marker, matching the downstream contract.
pub fn mark_floors(floors: &mut [Floor], events: &[RemarkableEvent]) {
    for event in events {
        if let Some(floor) = floors.get_mut(event.week_index) {
            floor.is_remarkable = true;
            floor.remarkable_type = Some(match event.kind {
                EventKind::Peak => RemarkableKind::Peak,
                EventKind::Drought => RemarkableKind::Drought,
                _ => RemarkableKind::Streak,
            });
        }
    }
}
