//! Plain-text views of page state. Pure functions; nothing here touches I/O.

use std::fmt::Write;

use crate::analysis::form::BUDGET_OPTIONS;
use crate::insights::{MarketReport, MarketSnapshot};
use crate::interview::Transcript;
use crate::listings::catalog::{provider_mark, CourseLevel, JobType};
use crate::listings::ListView;
use crate::models::analysis::{CareerSuggestion, SkillAnalysisResult};
use crate::models::interview::Speaker;
use crate::models::listing::{Course, Job};
use crate::progress::ProgressReport;

const RULE: &str = "────────────────────────────────────────";

fn join(items: &[String]) -> String {
    if items.is_empty() {
        "—".to_string()
    } else {
        items.join(", ")
    }
}

pub fn analysis(result: Option<&SkillAnalysisResult>) -> String {
    let Some(result) = result else {
        return "No analysis yet.".to_string();
    };
    let mut out = String::new();
    let _ = writeln!(out, "Skill level: {}", result.level);
    let _ = writeln!(out, "Current skills: {}", join(&result.current_skills));
    let _ = writeln!(out, "Skills to develop: {}", join(&result.missing_skills));
    let _ = writeln!(out, "Recommendations:");
    for (i, rec) in result.recommendations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {rec}", i + 1);
    }
    out.trim_end().to_string()
}

pub fn careers(careers: &[CareerSuggestion]) -> String {
    if careers.is_empty() {
        return "No career suggestions found.".to_string();
    }
    let mut out = String::new();
    for career in careers {
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{}", career.title);
        let _ = writeln!(out, "  {}", career.description);
        let _ = writeln!(out, "  Salary: {}   Growth: {}", career.salary_range, career.growth_rate);
        let _ = writeln!(out, "  Required skills: {}", join(&career.required_skills));
        let _ = writeln!(out, "  Learning path: {}", career.learning_path.join(" → "));
    }
    out.trim_end().to_string()
}

pub fn budgets() -> String {
    BUDGET_OPTIONS
        .iter()
        .map(|(value, label)| format!("  {value:>5}  {label}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn level_tag(level: CourseLevel) -> &'static str {
    match level {
        CourseLevel::Beginner => "[beginner]",
        CourseLevel::Intermediate => "[intermediate]",
        CourseLevel::Advanced => "[advanced]",
        CourseLevel::Other => "",
    }
}

pub fn courses(view: ListView<'_, Course>) -> String {
    let items = match view {
        ListView::Loading => return "Loading course recommendations...".to_string(),
        ListView::Empty => {
            return "No courses available at the moment. Type 'retry courses' to refresh."
                .to_string()
        }
        ListView::Items(items) => items,
    };

    let mut out = format!("{} courses found\n", items.len());
    for course in items {
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(
            out,
            "{} {} — {} {}",
            provider_mark(&course.provider),
            course.title,
            course.provider,
            level_tag(course.level_class())
        );
        let _ = writeln!(
            out,
            "  {} · ★ {:.1} · {}",
            course.duration, course.rating, course.price
        );
        let _ = writeln!(out, "  {}", course.description);
        let _ = writeln!(out, "  Skills: {}", join(&course.skills));
        let _ = writeln!(out, "  Enroll: {}", course.url);
    }
    out.trim_end().to_string()
}

fn type_tag(kind: JobType) -> &'static str {
    match kind {
        JobType::FullTime => "[full-time]",
        JobType::PartTime => "[part-time]",
        JobType::Contract => "[contract]",
        JobType::Remote => "[remote]",
        JobType::Other => "",
    }
}

pub fn jobs(view: ListView<'_, Job>) -> String {
    let items = match view {
        ListView::Loading => return "Loading job listings...".to_string(),
        ListView::Empty => {
            return "No job listings available at the moment. Type 'retry jobs' to refresh."
                .to_string()
        }
        ListView::Items(items) => items,
    };

    let mut out = format!("{} jobs found\n", items.len());
    for job in items {
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{} at {} {}", job.title, job.company, type_tag(job.kind()));
        let _ = writeln!(
            out,
            "  {} · {} · posted {}",
            job.location, job.salary, job.posted_date
        );
        let _ = writeln!(out, "  {}", job.description);
        let _ = writeln!(out, "  Requirements: {}", join(&job.requirements));
        let _ = writeln!(out, "  Apply: {}", job.apply_url);
    }
    out.trim_end().to_string()
}

pub fn transcript(transcript: &Transcript) -> String {
    if transcript.is_empty() {
        return "No interview in progress. Type 'interview start' to begin.".to_string();
    }
    let mut out = String::new();
    for turn in transcript.turns() {
        let who = match turn.speaker {
            Speaker::Ai => "Interviewer",
            Speaker::User => "You",
        };
        let _ = writeln!(out, "[{}] {who}: {}", turn.sent_at.format("%H:%M"), turn.text);
    }
    let unanswered = transcript.unanswered();
    if unanswered > 0 {
        let _ = writeln!(
            out,
            "({unanswered} answer(s) got no reply; submit again to continue)"
        );
    }
    out.trim_end().to_string()
}

pub fn progress(report: &ProgressReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Overall completion: {}%", report.overall_percent);
    for a in &report.achievements {
        let _ = writeln!(
            out,
            "  {:<16} {:>2}/{:<2} {:>3}%",
            a.category, a.completed, a.total, a.percent
        );
    }
    let _ = writeln!(out, "Badges earned: {}/{}", report.badges_earned, report.badges_total);
    let _ = writeln!(out, "Milestones completed: {}", report.milestones_completed);
    if let Some(next) = &report.next_milestone {
        let _ = writeln!(out, "Next milestone: {next}");
    }
    let _ = writeln!(out, "Skill growth:");
    for (skill, gained) in &report.skill_growth {
        let _ = writeln!(out, "  {skill:<10} {gained:+}");
    }
    let _ = writeln!(out, "Gaps to target:");
    for (area, gap) in &report.radar_gaps {
        let _ = writeln!(out, "  {area:<10} {gap}");
    }
    if let Some(widest) = &report.widest_gap {
        let _ = writeln!(out, "Focus next on: {widest}");
    }
    out.trim_end().to_string()
}

pub fn insights(snapshot: &MarketSnapshot, report: &MarketReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Skill demand:");
    for d in &snapshot.demand {
        let _ = writeln!(out, "  {:<10} {:>3}  +{}%", d.skill, d.demand, d.growth);
    }
    if let Some(top) = &report.most_demanded {
        let _ = writeln!(out, "Most demanded: {top}");
    }
    if let Some(fastest) = &report.fastest_growing_skill {
        let _ = writeln!(out, "Fastest growing skill: {fastest}");
    }

    let _ = writeln!(out, "Salary ranges (junior / mid / senior):");
    for (band, (_, premium)) in snapshot.salaries.iter().zip(&report.senior_premiums) {
        let _ = writeln!(
            out,
            "  {:<12} ${}k / ${}k / ${}k  (senior +{premium}%)",
            band.role, band.junior, band.mid, band.senior
        );
    }
    if let Some(best) = &report.best_paid_senior {
        let _ = writeln!(out, "Best paid at senior level: {best}");
    }

    let _ = writeln!(out, "Emerging roles ({} in high demand):", report.hot_roles);
    for role in &snapshot.emerging {
        let _ = writeln!(
            out,
            "  {:<20} [{}] avg ${}k, +{}%",
            role.title,
            role.demand.label(),
            role.avg_salary,
            role.growth
        );
    }
    if let Some(fastest) = &report.fastest_growing_role {
        let _ = writeln!(out, "Fastest growing role: {fastest}");
    }

    for prediction in &snapshot.predictions {
        let _ = writeln!(out, "{}: {}", prediction.headline, prediction.detail);
    }
    out.trim_end().to_string()
}
