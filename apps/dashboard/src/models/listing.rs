use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Course {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub provider: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub duration: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub rating: f32,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub level: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub price: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Job {
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub salary: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "crate::models::null_as_default"
    )]
    pub job_type: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub requirements: Vec<String>,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub posted_date: String,
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub apply_url: String,
}
