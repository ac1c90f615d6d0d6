//! Job posting analyzer. Turns pasted posting text into structured fields.

use chrono::Utc;
use serde::Deserialize;

use crate::errors::AppError;
use crate::job_postings::prompts::{JOB_POSTING_PROMPT_TEMPLATE, JOB_POSTING_SYSTEM};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, MISSING_VALUE_INSTRUCTION};
use crate::llm_client::reply::{optional_list, optional_text};
use crate::llm_client::{parse_json_reply, Inference};
use crate::models::{ExperienceLevel, NewJobPosting, NOT_SPECIFIED};

/// Fields of the analysis reply. Every field is optional; defaults are applied
/// in `into_new_posting`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzedFields {
    #[serde(default, deserialize_with = "optional_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "optional_list")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default, deserialize_with = "optional_list")]
    pub preferred_skills: Option<Vec<String>>,
}

impl AnalyzedFields {
    pub fn into_new_posting(self, original_text: &str) -> NewJobPosting {
        NewJobPosting {
            company: self.company.unwrap_or_else(not_specified),
            position: self.position.unwrap_or_else(not_specified),
            experience: self
                .experience
                .as_deref()
                .map(ExperienceLevel::from_model_output)
                .unwrap_or_default(),
            tech_stack: self.tech_stack.unwrap_or_else(not_specified_list),
            preferred_skills: self.preferred_skills.unwrap_or_else(not_specified_list),
            original_text: original_text.to_string(),
            created_at: Utc::now(),
        }
    }
}

fn not_specified() -> String {
    NOT_SPECIFIED.to_string()
}

fn not_specified_list() -> Vec<String> {
    vec![NOT_SPECIFIED.to_string()]
}

pub fn build_prompt(job_posting_text: &str) -> String {
    let buckets = ExperienceLevel::BUCKETS
        .iter()
        .filter(|level| **level != ExperienceLevel::Any)
        .map(|level| format!("- \"{level}\""))
        .collect::<Vec<_>>()
        .join("\n");

    JOB_POSTING_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{missing_value}", MISSING_VALUE_INSTRUCTION)
        .replace("{experience_buckets}", &buckets)
        .replace("{job_posting_text}", job_posting_text)
}

/// Analyzes posting text with the model. A reply that is not a JSON object is an error.
pub async fn analyze_job_posting(
    llm: &dyn Inference,
    job_posting_text: &str,
) -> Result<NewJobPosting, AppError> {
    let prompt = build_prompt(job_posting_text);
    let reply = llm
        .complete_json(JOB_POSTING_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Job posting analysis failed: {e}")))?;

    let fields: AnalyzedFields = parse_json_reply(&reply).map_err(|e| {
        AppError::Llm(format!("Failed to parse job posting analysis as JSON: {e}"))
    })?;

    Ok(fields.into_new_posting(job_posting_text))
}
