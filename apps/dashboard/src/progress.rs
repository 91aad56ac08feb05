//! Derived statistics over a static progress snapshot.
//!
//! No backend call is involved; the dashboard ships with a sample snapshot.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SkillSample {
    pub month: String,
    /// (skill, score 0–100)
    pub scores: Vec<(String, u32)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub category: String,
    pub completed: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub title: String,
    pub description: String,
    pub earned: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Milestone {
    pub title: String,
    pub completed: bool,
    pub date: String,
}

/// One skill area on the radar: where the user is and where they want to be.
#[derive(Debug, Clone, Serialize)]
pub struct RadarArea {
    pub area: String,
    pub current: u32,
    pub target: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressSnapshot {
    pub skill_history: Vec<SkillSample>,
    pub achievements: Vec<Achievement>,
    pub badges: Vec<Badge>,
    pub milestones: Vec<Milestone>,
    pub radar: Vec<RadarArea>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AchievementProgress {
    pub category: String,
    pub completed: u32,
    pub total: u32,
    pub percent: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressReport {
    pub achievements: Vec<AchievementProgress>,
    pub overall_percent: u32,
    pub badges_earned: usize,
    pub badges_total: usize,
    pub milestones_completed: usize,
    pub next_milestone: Option<String>,
    /// (skill, points gained between the first and last sample)
    pub skill_growth: Vec<(String, i64)>,
    /// (area, target − current), floored at zero
    pub radar_gaps: Vec<(String, u32)>,
    pub widest_gap: Option<String>,
}

/// `completed * 100 / total`, rounded down; `0` when there is nothing to complete.
pub fn percent(completed: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (u64::from(completed) * 100 / u64::from(total)) as u32
}

impl ProgressSnapshot {
    pub fn report(&self) -> ProgressReport {
        let achievements: Vec<AchievementProgress> = self
            .achievements
            .iter()
            .map(|a| AchievementProgress {
                category: a.category.clone(),
                completed: a.completed,
                total: a.total,
                percent: percent(a.completed, a.total),
            })
            .collect();

        let (done, total) = self
            .achievements
            .iter()
            .fold((0, 0), |(d, t), a| (d + a.completed, t + a.total));

        let radar_gaps: Vec<(String, u32)> = self
            .radar
            .iter()
            .map(|r| (r.area.clone(), r.target.saturating_sub(r.current)))
            .collect();

        // First maximum wins on ties.
        let widest_gap = radar_gaps
            .iter()
            .filter(|(_, gap)| *gap > 0)
            .fold(None::<&(String, u32)>, |best, entry| match best {
                Some(b) if b.1 >= entry.1 => Some(b),
                _ => Some(entry),
            })
            .map(|(area, _)| area.clone());

        ProgressReport {
            achievements,
            overall_percent: percent(done, total),
            badges_earned: self.badges.iter().filter(|b| b.earned).count(),
            badges_total: self.badges.len(),
            milestones_completed: self.milestones.iter().filter(|m| m.completed).count(),
            next_milestone: self
                .milestones
                .iter()
                .find(|m| !m.completed)
                .map(|m| m.title.clone()),
            skill_growth: self.skill_growth(),
            radar_gaps,
            widest_gap,
        }
    }

    fn skill_growth(&self) -> Vec<(String, i64)> {
        let (Some(first), Some(last)) = (self.skill_history.first(), self.skill_history.last())
        else {
            return Vec::new();
        };

        first
            .scores
            .iter()
            .map(|(skill, start)| {
                let end = last
                    .scores
                    .iter()
                    .find(|(s, _)| s == skill)
                    .map(|(_, score)| *score)
                    .unwrap_or(*start);
                (skill.clone(), i64::from(end) - i64::from(*start))
            })
            .collect()
    }

    /// The dashboard's built-in sample data.
    pub fn sample() -> Self {
        let history = [
            ("Jan", 70, 45, 30),
            ("Feb", 75, 50, 35),
            ("Mar", 80, 55, 45),
            ("Apr", 82, 65, 50),
            ("May", 85, 70, 60),
            ("Jun", 85, 75, 65),
        ];
        let skill_history = history
            .iter()
            .map(|(month, react, python, aws)| SkillSample {
                month: month.to_string(),
                scores: vec![
                    ("React".to_string(), *react),
                    ("Python".to_string(), *python),
                    ("AWS".to_string(), *aws),
                ],
            })
            .collect();

        let achievements = [("Courses", 12, 15), ("Projects", 4, 6), ("Certifications", 2, 4)]
            .iter()
            .map(|(category, completed, total)| Achievement {
                category: category.to_string(),
                completed: *completed,
                total: *total,
            })
            .collect();

        let badges = [
            ("React Expert", "Completed 5+ React courses", true),
            ("Fast Learner", "Gained 20+ skill points in a month", true),
            ("Project Builder", "Built 3+ portfolio projects", false),
            ("AI Pioneer", "Complete ML certification", false),
        ]
        .iter()
        .map(|(title, description, earned)| Badge {
            title: title.to_string(),
            description: description.to_string(),
            earned: *earned,
        })
        .collect();

        let milestones = [
            ("First Certification", true, "March 2024"),
            ("10 Skills Mastered", true, "April 2024"),
            ("Portfolio Project", true, "May 2024"),
            ("Senior Level Skills", false, "Target: Aug 2024"),
            ("Dream Job Ready", false, "Target: Dec 2024"),
        ]
        .iter()
        .map(|(title, completed, date)| Milestone {
            title: title.to_string(),
            completed: *completed,
            date: date.to_string(),
        })
        .collect();

        let radar = [
            ("Frontend", 85, 95),
            ("Backend", 75, 85),
            ("DevOps", 60, 80),
            ("Mobile", 45, 70),
            ("AI/ML", 30, 75),
            ("Design", 55, 65),
        ]
        .iter()
        .map(|(area, current, target)| RadarArea {
            area: area.to_string(),
            current: *current,
            target: *target,
        })
        .collect();

        Self {
            skill_history,
            achievements,
            badges,
            milestones,
            radar,
        }
    }
}
