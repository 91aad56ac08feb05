use tracing::info;

use crate::analysis::form::split_list;
use crate::errors::AppError;
use crate::gateway::{send_json, Endpoint, Gateway};
use crate::models::analysis::{SkillAnalysisRequest, SkillAnalysisResult};
use crate::notify::{report, NoticeKind, Notifier, Outcome};

/// Skill analysis page: one comma-separated skills field and the latest result.
#[derive(Debug, Default)]
pub struct SkillAnalysisPage {
    pub skills_input: String,
    busy: bool,
    result: Option<SkillAnalysisResult>,
}

impl SkillAnalysisPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&SkillAnalysisResult> {
        self.result.as_ref()
    }

    pub fn build_request(&self) -> Result<SkillAnalysisRequest, AppError> {
        let skills = split_list(&self.skills_input);
        if skills.is_empty() {
            return Err(AppError::Validation(
                "Please enter your skills first".to_string(),
            ));
        }
        Ok(SkillAnalysisRequest { skills })
    }

    /// Sends the skills for analysis. A new result replaces the old one;
    /// a failed call leaves the previous result on screen.
    pub async fn submit(&mut self, gateway: &dyn Gateway, notifier: &dyn Notifier) -> Outcome {
        if self.busy {
            return Outcome::Ignored;
        }
        let request = match self.build_request() {
            Ok(request) => request,
            Err(e) => return report(notifier, "analyze skills", &e),
        };

        self.busy = true;
        let result =
            send_json::<_, SkillAnalysisResult>(gateway, Endpoint::AnalyzeSkills, &request).await;
        self.busy = false;

        match result {
            Ok(analysis) => {
                info!(
                    skills = request.skills.len(),
                    missing = analysis.missing_skills.len(),
                    level = %analysis.level,
                    "skill analysis complete"
                );
                self.result = Some(analysis);
                notifier.notify(
                    NoticeKind::Success,
                    "Analysis complete. Your skills have been analyzed successfully!",
                );
                Outcome::Completed
            }
            Err(e) => report(notifier, "analyze skills", &AppError::from(e)),
        }
    }
}
