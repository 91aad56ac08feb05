//! Market insights over a static snapshot: skill demand, salary bands by
//! seniority and emerging roles. Like the progress view, nothing here calls
//! the backend.

use serde::Serialize;

use crate::progress::percent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DemandLevel {
    VeryHigh,
    High,
    Medium,
    Other,
}

impl DemandLevel {
    pub fn classify(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "very high" => DemandLevel::VeryHigh,
            "high" => DemandLevel::High,
            "medium" => DemandLevel::Medium,
            _ => DemandLevel::Other,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DemandLevel::VeryHigh => "Very High",
            DemandLevel::High => "High",
            DemandLevel::Medium => "Medium",
            DemandLevel::Other => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SkillDemand {
    pub skill: String,
    /// Demand index, 0–100.
    pub demand: u32,
    /// Year-over-year growth in percent.
    pub growth: u32,
}

/// Salary in thousands of USD at each seniority level.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryBand {
    pub role: String,
    pub junior: u32,
    pub mid: u32,
    pub senior: u32,
}

impl SalaryBand {
    /// How much more a senior earns than a junior, in percent of the junior salary.
    pub fn senior_premium(&self) -> u32 {
        percent(self.senior.saturating_sub(self.junior), self.junior)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EmergingRole {
    pub title: String,
    pub demand: DemandLevel,
    /// Average salary in thousands of USD.
    pub avg_salary: u32,
    pub growth: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub headline: String,
    pub detail: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketSnapshot {
    pub demand: Vec<SkillDemand>,
    pub salaries: Vec<SalaryBand>,
    pub emerging: Vec<EmergingRole>,
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MarketReport {
    pub most_demanded: Option<String>,
    pub fastest_growing_skill: Option<String>,
    /// (role, senior premium in percent)
    pub senior_premiums: Vec<(String, u32)>,
    pub best_paid_senior: Option<String>,
    pub fastest_growing_role: Option<String>,
    /// Emerging roles rated High or Very High.
    pub hot_roles: usize,
}

/// First maximum wins on ties, matching the progress report.
fn first_max<T, K: Ord>(items: &[T], key: impl Fn(&T) -> K) -> Option<&T> {
    items.iter().fold(None, |best, item| match best {
        Some(b) if key(b) >= key(item) => Some(b),
        _ => Some(item),
    })
}

impl MarketSnapshot {
    pub fn report(&self) -> MarketReport {
        MarketReport {
            most_demanded: first_max(&self.demand, |d| d.demand).map(|d| d.skill.clone()),
            fastest_growing_skill: first_max(&self.demand, |d| d.growth)
                .map(|d| d.skill.clone()),
            senior_premiums: self
                .salaries
                .iter()
                .map(|band| (band.role.clone(), band.senior_premium()))
                .collect(),
            best_paid_senior: first_max(&self.salaries, |band| band.senior)
                .map(|band| band.role.clone()),
            fastest_growing_role: first_max(&self.emerging, |role| role.growth)
                .map(|role| role.title.clone()),
            hot_roles: self
                .emerging
                .iter()
                .filter(|role| matches!(role.demand, DemandLevel::VeryHigh | DemandLevel::High))
                .count(),
        }
    }

    /// The dashboard's built-in market data.
    pub fn sample() -> Self {
        let demand = [
            ("AI/ML", 95, 25),
            ("React", 88, 18),
            ("Python", 85, 22),
            ("AWS", 82, 20),
            ("DevOps", 78, 15),
            ("Mobile", 65, 12),
        ]
        .iter()
        .map(|(skill, demand, growth)| SkillDemand {
            skill: skill.to_string(),
            demand: *demand,
            growth: *growth,
        })
        .collect();

        let salaries = [
            ("AI Engineer", 120, 160, 220),
            ("Full Stack", 85, 120, 180),
            ("DevOps", 95, 130, 190),
            ("Mobile Dev", 80, 110, 160),
        ]
        .iter()
        .map(|(role, junior, mid, senior)| SalaryBand {
            role: role.to_string(),
            junior: *junior,
            mid: *mid,
            senior: *senior,
        })
        .collect();

        let emerging = [
            ("AI Product Manager", "Very High", 180, 35),
            ("MLOps Engineer", "High", 170, 40),
            ("Prompt Engineer", "High", 160, 50),
            ("AR/VR Developer", "Medium", 140, 28),
        ]
        .iter()
        .map(|(title, demand, avg_salary, growth)| EmergingRole {
            title: title.to_string(),
            demand: DemandLevel::classify(demand),
            avg_salary: *avg_salary,
            growth: *growth,
        })
        .collect();

        let predictions = [
            (
                "Hot Prediction",
                "AI/ML roles are expected to grow 40% faster than average in the next 2 years. \
                 Your current Python skills give you a head start.",
            ),
            (
                "Market Shift",
                "Remote-first companies are prioritizing cloud and DevOps skills. \
                 Consider upskilling in AWS and Kubernetes.",
            ),
        ]
        .iter()
        .map(|(headline, detail)| Prediction {
            headline: headline.to_string(),
            detail: detail.to_string(),
        })
        .collect();

        Self {
            demand,
            salaries,
            emerging,
            predictions,
        }
    }
}
