//! Report Rendering
//!
//! Terminal-side collaborator of the analytics engine: walks the story
//! chapters and prints a blueprint as a colored, human-readable report, or
//! serializes it to JSON for programmatic consumption. The engine output is
//! consumed as-is; nothing here mutates the blueprint.

use colored::Colorize;

use crate::models::{Blueprint, Floor, FloorKind, UserStats};
use crate::story::{Chapter, StoryDirector};

const RULE_WIDTH: usize = 64;

pub struct ReportRenderer;

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Print the full narrated report, chapter by chapter.
    pub fn render(&self, blueprint: &Blueprint) {
        let mut director = StoryDirector::new();
        loop {
            match director.current() {
                Chapter::Idle => {}
                Chapter::Intro => self.render_intro(&blueprint.stats),
                Chapter::TotalFlux => self.render_total_flux(&blueprint.stats),
                Chapter::Chrono => self.render_chrono(&blueprint.stats),
                Chapter::SpireReveal => self.render_spire(&blueprint.floors, &blueprint.stats),
                Chapter::Outro => self.render_outro(&blueprint.stats),
            }
            if director.is_finished() {
                break;
            }
            director.next();
        }
    }

    /// Serialize the full blueprint to stdout.
    pub fn render_json(&self, blueprint: &Blueprint, pretty: bool) -> anyhow::Result<()> {
        let output = if pretty {
            serde_json::to_string_pretty(blueprint)?
        } else {
            serde_json::to_string(blueprint)?
        };
        println!("{output}");
        Ok(())
    }

    /// Print the floor table only.
    pub fn render_floors(&self, floors: &[Floor]) {
        println!("\n{}", "=".repeat(RULE_WIDTH).bright_cyan());
        println!("{}", "Tower Floors".bright_white().bold());
        println!("{}", "=".repeat(RULE_WIDTH).bright_cyan());
        println!(
            "{:>4}  {:>6}  {:>5}  {:<9}  {:>5}  {:>6}  {}",
            "id", "height", "width", "type", "total", "active", "flags"
        );
        for floor in floors {
            let kind = match floor.kind {
                FloorKind::Solid => "SOLID".bright_green(),
                FloorKind::Wireframe => "WIREFRAME".bright_cyan(),
                FloorKind::Void => "VOID".bright_black(),
            };
            let flag = match floor.remarkable_type {
                Some(kind) => format!("{kind:?}").to_uppercase().bright_magenta(),
                None => "".normal(),
            };
            println!(
                "{:>4}  {:>6.1}  {:>5.1}  {:<9}  {:>5}  {:>6}  {}",
                floor.id, floor.height, floor.width, kind, floor.week_total, floor.active_days, flag
            );
        }
        if floors.is_empty() {
            println!("{}", "(no floors - empty calendar)".bright_black());
        }
    }

    fn render_intro(&self, stats: &UserStats) {
        println!("\n{}", "=".repeat(RULE_WIDTH).bright_cyan());
        let title = match &stats.profile.name {
            Some(name) => format!("{} ({})", stats.profile.login, name),
            None => stats.profile.login.clone(),
        };
        println!(
            "{} {}",
            "Contribution Tower Report".bright_white().bold(),
            format!("// {title}").bright_black()
        );
        println!("{}", "=".repeat(RULE_WIDTH).bright_cyan());
        if let Some(bio) = &stats.profile.bio {
            println!("{}", bio.italic());
        }
        println!(
            "{} followers • {} following • {} repositories",
            stats.profile.followers.to_string().bright_white(),
            stats.profile.following.to_string().bright_white(),
            stats.profile.total_repos.to_string().bright_white()
        );
    }

    fn render_total_flux(&self, stats: &UserStats) {
        println!("\n{}", "-- TOTAL FLUX ".bright_magenta().bold());
        println!(
            "{} contributions this year ({} active days, {}% consistency)",
            stats.total_contributions.to_string().bright_green().bold(),
            stats.total_active_days,
            stats.consistency
        );
        let b = &stats.breakdown;
        println!(
            "commits {} • pull requests {} • reviews {} • issues {} • new repos {} • restricted {}",
            b.commits.to_string().bright_white(),
            b.pull_requests.to_string().bright_white(),
            b.reviews.to_string().bright_white(),
            b.issues.to_string().bright_white(),
            b.repositories.to_string().bright_white(),
            b.restricted.to_string().bright_black()
        );
    }

    fn render_chrono(&self, stats: &UserStats) {
        println!("\n{}", "-- CHRONOLOGY ".bright_magenta().bold());
        println!(
            "max streak {} days • current streak {} days • longest drought {} days",
            stats.max_streak.to_string().bright_green().bold(),
            stats.current_streak.to_string().bright_white(),
            stats.longest_drought.to_string().bright_red()
        );
        if !stats.busiest_day.date.is_empty() {
            println!(
                "busiest day {} with {} contributions",
                stats.busiest_day.date.bright_white(),
                stats.busiest_day.count.to_string().bright_green()
            );
        }
        println!(
            "best month {} ({}) • worst month {} ({})",
            stats.best_month.name.bright_white(),
            stats.best_month.count,
            stats.worst_month.name.bright_white(),
            stats.worst_month.count
        );
        println!(
            "averages: {}/day, {}/week • weekend share {}%",
            stats.average_per_day, stats.average_per_week, stats.weekend_ratio
        );

        const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
        let peak = stats.weekday_distribution.iter().copied().max().unwrap_or(0);
        for (name, &count) in WEEKDAYS.iter().zip(stats.weekday_distribution.iter()) {
            let bar_len = if peak > 0 {
                (count as usize * 24) / peak as usize
            } else {
                0
            };
            println!(
                "  {name} {:>6}  {}",
                count,
                "#".repeat(bar_len).bright_cyan()
            );
        }
    }

    fn render_spire(&self, floors: &[Floor], stats: &UserStats) {
        println!("\n{}", "-- THE SPIRE ".bright_magenta().bold());
        let solid = floors.iter().filter(|f| f.kind == FloorKind::Solid).count();
        let wireframe = floors
            .iter()
            .filter(|f| f.kind == FloorKind::Wireframe)
            .count();
        let void = floors.iter().filter(|f| f.kind == FloorKind::Void).count();
        println!(
            "{} floors: {} solid, {} wireframe, {} void",
            floors.len().to_string().bright_white().bold(),
            solid.to_string().bright_green(),
            wireframe.to_string().bright_cyan(),
            void.to_string().bright_black()
        );
        if let Some(tallest) = floors
            .iter()
            .max_by(|a, b| a.week_total.cmp(&b.week_total))
        {
            println!(
                "tallest floor: week of {} with {} contributions",
                tallest.date.bright_white(),
                tallest.week_total.to_string().bright_green()
            );
        }
        if !stats.remarkable_events.is_empty() {
            println!("{}", "remarkable events:".bright_white());
            for event in &stats.remarkable_events {
                println!(
                    "  {} {} — {}",
                    event.label.bright_magenta(),
                    event.date.bright_black(),
                    event.description
                );
            }
        }
    }

    fn render_outro(&self, stats: &UserStats) {
        println!("\n{}", "-- RANKING ".bright_magenta().bold());
        if !stats.languages.is_empty() {
            let summary: Vec<String> = stats
                .languages
                .iter()
                .map(|lang| format!("{} {}%", lang.name, lang.percentage))
                .collect();
            println!("languages: {}", summary.join(" • ").bright_white());
        }
        println!(
            "{}  {}",
            stats.ranking.to_string().bright_green().bold(),
            stats.ranking_description.italic()
        );
        println!("{}\n", "=".repeat(RULE_WIDTH).bright_cyan());
    }
}
