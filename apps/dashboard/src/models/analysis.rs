use serde::{Deserialize, Serialize};

/// POST /analyze-skills body.
#[derive(Debug, Clone, Serialize)]
pub struct SkillAnalysisRequest {
    pub skills: Vec<String>,
}

/// POST /analyze-skills response, replaced wholesale on every analysis.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SkillAnalysisResult {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub current_skills: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub missing_skills: Vec<String>,
    #[serde(
        rename = "skill_level",
        default,
        deserialize_with = "crate::models::null_as_default"
    )]
    pub level: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub recommendations: Vec<String>,
}

/// POST /recommend-careers body.
#[derive(Debug, Clone, Serialize)]
pub struct CareerRequest {
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub budget: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CareerSuggestion {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub salary_range: String,
    #[serde(
        rename = "job_growth",
        default,
        deserialize_with = "crate::models::null_as_default"
    )]
    pub growth_rate: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub learning_path: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CareersResponse {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub careers: Vec<CareerSuggestion>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_analysis_maps_skill_level() {
        let json = r#"{
            "current_skills": ["Python", "SQL"],
            "missing_skills": ["Docker"],
            "skill_level": "Intermediate",
            "recommendations": ["Learn containers"]
        }"#;
        let result: SkillAnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.level, "Intermediate");
        assert_eq!(result.current_skills, vec!["Python", "SQL"]);
        assert_eq!(result.missing_skills, vec!["Docker"]);
    }

    #[test]
    fn test_careers_response_missing_field_is_empty() {
        let response: CareersResponse = serde_json::from_str("{}").unwrap();
        assert!(response.careers.is_empty());
    }

    #[test]
    fn test_career_suggestion_maps_job_growth() {
        let json = r#"{
            "title": "ML Engineer",
            "description": "Builds models",
            "required_skills": ["Python", "PyTorch"],
            "salary_range": "$120k - $180k",
            "job_growth": "22%",
            "learning_path": ["Statistics", "Deep Learning"]
        }"#;
        let career: CareerSuggestion = serde_json::from_str(json).unwrap();
        assert_eq!(career.growth_rate, "22%");
        assert_eq!(career.learning_path.len(), 2);
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let result: SkillAnalysisResult = serde_json::from_str(
            r#"{"current_skills": null, "skill_level": null, "recommendations": ["Practice"]}"#,
        )
        .unwrap();
        assert_eq!(result.level, "");
        assert!(result.current_skills.is_empty());
        assert_eq!(result.recommendations, vec!["Practice"]);

        let response: CareersResponse = serde_json::from_str(r#"{"careers": null}"#).unwrap();
        assert!(response.careers.is_empty());

        let career: CareerSuggestion = serde_json::from_str(
            r#"{"title": "SRE", "salary_range": null, "job_growth": null, "learning_path": null}"#,
        )
        .unwrap();
        assert_eq!(career.title, "SRE");
        assert!(career.growth_rate.is_empty());
        assert!(career.learning_path.is_empty());
    }

    #[test]
    fn test_career_request_serializes_budget_as_number() {
        let req = CareerRequest {
            skills: vec!["Rust".to_string()],
            interests: vec!["Systems".to_string()],
            budget: 500,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["budget"], 500);
        assert_eq!(json["interests"][0], "Systems");
    }
}
