use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// Every backend route the dashboard talks to. One per feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AnalyzeSkills,
    RecommendCareers,
    RecommendCourses,
    JobMatching,
    MockInterview,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::AnalyzeSkills => "/analyze-skills",
            Endpoint::RecommendCareers => "/recommend-careers",
            Endpoint::RecommendCourses => "/recommend-courses",
            Endpoint::JobMatching => "/job-matching",
            Endpoint::MockInterview => "/mock-interview",
        }
    }

    pub fn method(&self) -> Method {
        match self {
            Endpoint::RecommendCourses | Endpoint::JobMatching => Method::Get,
            Endpoint::AnalyzeSkills | Endpoint::RecommendCareers | Endpoint::MockInterview => {
                Method::Post
            }
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self.method() {
            Method::Get => "GET",
            Method::Post => "POST",
        };
        write!(f, "{method} {}", self.path())
    }
}
