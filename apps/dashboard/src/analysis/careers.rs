use tracing::info;

use crate::analysis::form::{parse_budget, split_list};
use crate::errors::AppError;
use crate::gateway::{send_json, Endpoint, Gateway};
use crate::models::analysis::{CareerRequest, CareerSuggestion, CareersResponse};
use crate::notify::{report, NoticeKind, Notifier, Outcome};

/// Career recommendation page: skills, interests and a learning budget.
#[derive(Debug, Default)]
pub struct CareerPage {
    pub skills_input: String,
    pub interests_input: String,
    pub budget_input: String,
    busy: bool,
    careers: Vec<CareerSuggestion>,
}

impl CareerPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn careers(&self) -> &[CareerSuggestion] {
        &self.careers
    }

    /// Skills and interests are both required; the budget never blocks submission.
    pub fn build_request(&self) -> Result<CareerRequest, AppError> {
        let skills = split_list(&self.skills_input);
        let interests = split_list(&self.interests_input);
        if skills.is_empty() || interests.is_empty() {
            return Err(AppError::Validation(
                "Please fill in your skills and interests".to_string(),
            ));
        }
        Ok(CareerRequest {
            skills,
            interests,
            budget: parse_budget(&self.budget_input),
        })
    }

    pub async fn submit(&mut self, gateway: &dyn Gateway, notifier: &dyn Notifier) -> Outcome {
        if self.busy {
            return Outcome::Ignored;
        }
        let request = match self.build_request() {
            Ok(request) => request,
            Err(e) => return report(notifier, "get career recommendations", &e),
        };

        self.busy = true;
        let result =
            send_json::<_, CareersResponse>(gateway, Endpoint::RecommendCareers, &request).await;
        self.busy = false;

        match result {
            Ok(response) => {
                self.careers = response.careers;
                info!(
                    budget = request.budget,
                    found = self.careers.len(),
                    "career recommendations ready"
                );
                notifier.notify(
                    NoticeKind::Success,
                    &format!(
                        "Recommendations ready. Found {} career suggestions for you!",
                        self.careers.len()
                    ),
                );
                Outcome::Completed
            }
            Err(e) => report(notifier, "get career recommendations", &AppError::from(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingNotifier, ScriptedGateway};
    use serde_json::json;

    fn filled_page() -> CareerPage {
        CareerPage {
            skills_input: "Python, SQL".to_string(),
            interests_input: "data, , AI".to_string(),
            budget_input: "1000".to_string(),
            ..CareerPage::default()
        }
    }

    #[test]
    fn test_build_request_derives_lists_and_budget() {
        let request = filled_page().build_request().unwrap();
        assert_eq!(request.skills, vec!["Python", "SQL"]);
        assert_eq!(request.interests, vec!["data", "AI"]);
        assert_eq!(request.budget, 1000);
    }

    #[test]
    fn test_missing_budget_defaults_to_zero() {
        let mut page = filled_page();
        page.budget_input.clear();
        assert_eq!(page.build_request().unwrap().budget, 0);
    }

    #[test]
    fn test_each_required_field_blocks_independently() {
        let mut no_skills = filled_page();
        no_skills.skills_input = " , ".to_string();
        assert!(matches!(no_skills.build_request(), Err(AppError::Validation(_))));

        let mut no_interests = filled_page();
        no_interests.interests_input.clear();
        assert!(matches!(no_interests.build_request(), Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_submit_replaces_collection() {
        let gateway = ScriptedGateway::new()
            .reply(json!({ "careers": [
                { "title": "Data Analyst", "job_growth": "25%" },
                { "title": "Data Engineer" }
            ]}))
            .reply(json!({ "careers": [{ "title": "ML Engineer" }] }));
        let notifier = RecordingNotifier::default();
        let mut page = filled_page();

        assert_eq!(page.submit(&gateway, &notifier).await, Outcome::Completed);
        assert_eq!(page.careers().len(), 2);
        assert_eq!(page.careers()[0].growth_rate, "25%");
        assert_eq!(
            notifier.last().unwrap().1,
            "Recommendations ready. Found 2 career suggestions for you!"
        );

        page.submit(&gateway, &notifier).await;
        assert_eq!(page.careers().len(), 1);
        assert_eq!(page.careers()[0].title, "ML Engineer");

        let (endpoint, body) = &gateway.calls()[0];
        assert_eq!(*endpoint, Endpoint::RecommendCareers);
        assert_eq!(
            body.as_ref().unwrap(),
            &json!({ "skills": ["Python", "SQL"], "interests": ["data", "AI"], "budget": 1000 })
        );
    }

    #[tokio::test]
    async fn test_response_without_careers_is_empty() {
        let gateway = ScriptedGateway::new().reply(json!({}));
        let notifier = RecordingNotifier::default();
        let mut page = filled_page();

        assert_eq!(page.submit(&gateway, &notifier).await, Outcome::Completed);
        assert!(page.careers().is_empty());
    }

    #[tokio::test]
    async fn test_null_careers_is_empty_success() {
        let gateway = ScriptedGateway::new().reply(json!({ "careers": null }));
        let notifier = RecordingNotifier::default();
        let mut page = filled_page();

        assert_eq!(page.submit(&gateway, &notifier).await, Outcome::Completed);
        assert!(page.careers().is_empty());
        assert!(!page.busy);
        assert_eq!(
            notifier.last(),
            Some((
                NoticeKind::Success,
                "Recommendations ready. Found 0 career suggestions for you!".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_null_fields_inside_a_career_are_tolerated() {
        let gateway = ScriptedGateway::new().reply(json!({ "careers": [
            { "title": "Data Analyst", "salary_range": null, "required_skills": null }
        ]}));
        let notifier = RecordingNotifier::default();
        let mut page = filled_page();

        assert_eq!(page.submit(&gateway, &notifier).await, Outcome::Completed);
        assert_eq!(page.careers()[0].title, "Data Analyst");
        assert!(page.careers()[0].required_skills.is_empty());
    }

    #[tokio::test]
    async fn test_validation_failure_sends_nothing() {
        let gateway = ScriptedGateway::new();
        let notifier = RecordingNotifier::default();
        let mut page = CareerPage::new();
        page.skills_input = "Rust".to_string();

        assert_eq!(page.submit(&gateway, &notifier).await, Outcome::Rejected);
        assert_eq!(gateway.call_count(), 0);
        assert_eq!(
            notifier.last(),
            Some((
                NoticeKind::ValidationError,
                "Please fill in your skills and interests".to_string()
            ))
        );
    }
}
