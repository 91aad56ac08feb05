use crate::gateway::Endpoint;
use crate::listings::fetcher::{ListPage, ListSource};
use crate::models::listing::{Course, Job};

pub struct Courses;

impl ListSource for Courses {
    type Item = Course;

    const ENDPOINT: Endpoint = Endpoint::RecommendCourses;
    const FIELD: &'static str = "courses";
    const NOUN: &'static str = "course recommendations";
}

pub struct Jobs;

impl ListSource for Jobs {
    type Item = Job;

    const ENDPOINT: Endpoint = Endpoint::JobMatching;
    const FIELD: &'static str = "jobs";
    const NOUN: &'static str = "job listings";
}

pub type CoursePage = ListPage<Courses>;
pub type JobPage = ListPage<Jobs>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseLevel {
    Beginner,
    Intermediate,
    Advanced,
    Other,
}

impl CourseLevel {
    pub fn classify(level: &str) -> Self {
        match level.trim().to_lowercase().as_str() {
            "beginner" => CourseLevel::Beginner,
            "intermediate" => CourseLevel::Intermediate,
            "advanced" => CourseLevel::Advanced,
            _ => CourseLevel::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    FullTime,
    PartTime,
    Contract,
    Remote,
    Other,
}

impl JobType {
    pub fn classify(job_type: &str) -> Self {
        match job_type.trim().to_lowercase().as_str() {
            "full-time" => JobType::FullTime,
            "part-time" => JobType::PartTime,
            "contract" => JobType::Contract,
            "remote" => JobType::Remote,
            _ => JobType::Other,
        }
    }
}

const PROVIDER_MARKS: &[(&str, &str)] = &[
    ("Coursera", "🎓"),
    ("Udemy", "📚"),
    ("edX", "🏛️"),
    ("Pluralsight", "🔷"),
    ("LinkedIn Learning", "💼"),
    ("Khan Academy", "🦉"),
];

const GENERIC_PROVIDER_MARK: &str = "📖";

/// Glyph shown next to a course provider. Matching is exact, as providers are
/// proper names.
pub fn provider_mark(provider: &str) -> &'static str {
    PROVIDER_MARKS
        .iter()
        .find(|(name, _)| *name == provider)
        .map(|(_, mark)| *mark)
        .unwrap_or(GENERIC_PROVIDER_MARK)
}

impl Course {
    pub fn level_class(&self) -> CourseLevel {
        CourseLevel::classify(&self.level)
    }
}

impl Job {
    pub fn kind(&self) -> JobType {
        JobType::classify(&self.job_type)
    }
}
