//! Form-backed pages: skill analysis and career recommendations.
//! Free text is turned into request payloads here; nothing is validated beyond
//! trimming, splitting and the required-field checks.

pub mod careers;
pub mod form;
pub mod skills;

pub use careers::CareerPage;
pub use skills::SkillAnalysisPage;
