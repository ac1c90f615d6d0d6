//! Skills preparation: cached, model-written advice for a (position, experience) pair.
//!
//! Flow on a cache miss:
//! 1. Sample up to `SAMPLE_SIZE` postings with the same position and experience.
//! 2. If fewer than `MIN_EXACT_MATCHES` match, sample by position alone.
//! 3. Ask the model for essential skills, bonus skills and recommendations.
//! 4. Store the result; later requests for the key return the stored copy.

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;
use crate::llm_client::reply::optional_list;
use crate::llm_client::{parse_json_reply, Inference};
use crate::models::skills::SkillsAdvice;
use crate::models::{ExperienceLevel, JobPosting, JobPostingFilter, SkillsPreparation};
use crate::skills::prompts::{
    NO_POSTINGS_NOTE, POSTING_SEPARATOR, SKILLS_PROMPT_TEMPLATE, SKILLS_SYSTEM,
};
use crate::store::Store;

pub const SAMPLE_SIZE: i64 = 5;
pub const MIN_EXACT_MATCHES: usize = 2;

const MISSING_SKILLS: &str = "관련 데이터가 부족합니다.";
const MISSING_RECOMMENDATIONS: &str = "충분한 채용공고 데이터가 없어 정확한 분석이 어렵습니다.";
const UNREADABLE_SKILLS: &str = "데이터 분석 중 오류가 발생했습니다.";
const UNREADABLE_RECOMMENDATIONS: &str = "잠시 후 다시 시도해주세요.";

/// Fields of the advice reply; defaults are applied in `into_advice`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceReply {
    #[serde(default, deserialize_with = "optional_list")]
    pub essential_skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "optional_list")]
    pub bonus_skills: Option<Vec<String>>,
    #[serde(default, deserialize_with = "optional_list")]
    pub recommendations: Option<Vec<String>>,
}

impl AdviceReply {
    pub fn into_advice(self) -> SkillsAdvice {
        SkillsAdvice {
            essential_skills: self
                .essential_skills
                .unwrap_or_else(|| vec![MISSING_SKILLS.to_string()]),
            bonus_skills: self
                .bonus_skills
                .unwrap_or_else(|| vec![MISSING_SKILLS.to_string()]),
            recommendations: self
                .recommendations
                .unwrap_or_else(|| vec![MISSING_RECOMMENDATIONS.to_string()]),
        }
    }
}

/// Advice stored when the model reply cannot be read at all.
pub fn unreadable_reply_advice() -> SkillsAdvice {
    SkillsAdvice {
        essential_skills: vec![UNREADABLE_SKILLS.to_string()],
        bonus_skills: vec![UNREADABLE_SKILLS.to_string()],
        recommendations: vec![UNREADABLE_RECOMMENDATIONS.to_string()],
    }
}

/// Reads the model reply. Never fails: an unreadable reply yields fixed fallback advice.
pub fn advice_from_reply(reply: &str) -> SkillsAdvice {
    match parse_json_reply::<AdviceReply>(reply) {
        Ok(parsed) => parsed.into_advice(),
        Err(e) => {
            warn!("Could not parse skills advice reply, using fallback: {e}");
            unreadable_reply_advice()
        }
    }
}

pub fn build_prompt(
    position: &str,
    experience: ExperienceLevel,
    postings: &[JobPosting],
) -> String {
    let quoted = postings
        .iter()
        .map(|p| {
            format!(
                "회사: {}\n기술스택: {}\n우대사항: {}",
                p.company,
                p.tech_stack.join(", "),
                p.preferred_skills.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join(POSTING_SEPARATOR);
    let quoted = if quoted.is_empty() {
        NO_POSTINGS_NOTE.to_string()
    } else {
        quoted
    };

    SKILLS_PROMPT_TEMPLATE
        .replace("{json_only}", JSON_ONLY_INSTRUCTION)
        .replace("{experience}", experience.as_str())
        .replace("{job_postings}", &quoted)
        .replace("{position}", position)
}

/// Picks the postings the advice is based on.
pub async fn sample_postings(
    store: &dyn Store,
    position: &str,
    experience: ExperienceLevel,
) -> Result<Vec<JobPosting>, AppError> {
    let exact = store
        .list_job_postings(&JobPostingFilter {
            position: Some(position.to_string()),
            experience: Some(experience),
            limit: Some(SAMPLE_SIZE),
        })
        .await?;

    if exact.len() >= MIN_EXACT_MATCHES {
        return Ok(exact);
    }

    store
        .list_job_postings(&JobPostingFilter {
            position: Some(position.to_string()),
            experience: None,
            limit: Some(SAMPLE_SIZE),
        })
        .await
}

/// Returns the cached preparation for the key, computing and storing it on a miss.
pub async fn prepare_skills(
    store: &dyn Store,
    llm: &dyn Inference,
    position: &str,
    experience: ExperienceLevel,
) -> Result<SkillsPreparation, AppError> {
    if let Some(cached) = store.find_skills_preparation(position, experience).await? {
        info!("Skills preparation cache hit for {position} ({experience})");
        return Ok(cached);
    }

    let postings = sample_postings(store, position, experience).await?;
    info!(
        "Computing skills preparation for {position} ({experience}) from {} postings",
        postings.len()
    );

    let prompt = build_prompt(position, experience, &postings);
    let reply = llm
        .complete_json(SKILLS_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Skills preparation failed: {e}")))?;

    let advice = advice_from_reply(&reply);
    store
        .insert_skills_preparation(position, experience, advice)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewJobPosting;
    use crate::store::memory::MemoryStore;
    use crate::testing::ScriptedInference;
    use chrono::Utc;

    const ADVICE_REPLY: &str = r#"{
        "essentialSkills": ["Java", "Spring Boot", "JPA", "MySQL", "Git"],
        "bonusSkills": ["Kafka", "Kubernetes", "AWS", "Redis", "MSA"],
        "recommendations": ["Spring 공식 가이드로 REST API를 만들어보세요.", "JPA N+1 문제를 정리해보세요.", "간단한 서비스를 배포해보세요."]
    }"#;

    async fn seed(store: &MemoryStore, company: &str, position: &str, level: ExperienceLevel) {
        store
            .insert_job_posting(NewJobPosting {
                company: company.to_string(),
                position: position.to_string(),
                experience: level,
                tech_stack: vec!["Java".to_string(), "Spring".to_string()],
                preferred_skills: vec!["Kafka".to_string()],
                original_text: String::new(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();
    }

    #[test]
    fn test_missing_fields_get_named_defaults() {
        let advice = advice_from_reply(r#"{"essentialSkills": ["Go"]}"#);
        assert_eq!(advice.essential_skills, vec!["Go"]);
        assert_eq!(advice.bonus_skills, vec![MISSING_SKILLS]);
        assert_eq!(advice.recommendations, vec![MISSING_RECOMMENDATIONS]);
    }

    #[test]
    fn test_blank_reply_gets_named_defaults() {
        let advice = advice_from_reply("");
        assert_eq!(advice.essential_skills, vec![MISSING_SKILLS]);
        assert_eq!(advice.bonus_skills, vec![MISSING_SKILLS]);
        assert_eq!(advice.recommendations, vec![MISSING_RECOMMENDATIONS]);
    }

    #[test]
    fn test_unreadable_reply_uses_fallback() {
        let advice = advice_from_reply("not json at all");
        assert_eq!(advice, unreadable_reply_advice());
        assert_eq!(advice.recommendations, vec![UNREADABLE_RECOMMENDATIONS]);
    }

    #[test]
    fn test_prompt_quotes_postings() {
        let postings = vec![NewJobPosting {
            company: "라인".to_string(),
            position: "백엔드 개발자".to_string(),
            experience: ExperienceLevel::OneToThree,
            tech_stack: vec!["Java".to_string(), "Armeria".to_string()],
            preferred_skills: vec!["오픈소스 기여".to_string()],
            original_text: String::new(),
            created_at: Utc::now(),
        }
        .into_posting(uuid::Uuid::new_v4())];

        let prompt = build_prompt("백엔드 개발자", ExperienceLevel::OneToThree, &postings);
        assert!(prompt.contains("회사: 라인"));
        assert!(prompt.contains("기술스택: Java, Armeria"));
        assert!(prompt.contains("백엔드 개발자 (1~3년)"));
        assert!(!prompt.contains(NO_POSTINGS_NOTE));
    }

    #[test]
    fn test_position_text_is_not_expanded() {
        let prompt = build_prompt("{job_postings} 개발자", ExperienceLevel::NewGrad, &[]);
        assert!(prompt.contains("당신은 {job_postings} 개발자 직무 분야의"));
        assert!(prompt.contains("{job_postings} 개발자 (신입)"));
        assert_eq!(prompt.matches(NO_POSTINGS_NOTE).count(), 1);
    }

    #[test]
    fn test_prompt_without_postings_says_so() {
        let prompt = build_prompt("QA 엔지니어", ExperienceLevel::NewGrad, &[]);
        assert!(prompt.contains(NO_POSTINGS_NOTE));
    }

    #[tokio::test]
    async fn test_sample_prefers_exact_matches() {
        let store = MemoryStore::new();
        seed(&store, "A", "백엔드 개발자", ExperienceLevel::OneToThree).await;
        seed(&store, "B", "백엔드 개발자", ExperienceLevel::OneToThree).await;
        seed(&store, "C", "백엔드 개발자", ExperienceLevel::TenPlus).await;

        let sample = sample_postings(&store, "백엔드 개발자", ExperienceLevel::OneToThree)
            .await
            .unwrap();
        assert_eq!(sample.len(), 2);
        assert!(sample
            .iter()
            .all(|p| p.experience == ExperienceLevel::OneToThree));
    }

    #[tokio::test]
    async fn test_sample_relaxes_to_position_when_sparse() {
        let store = MemoryStore::new();
        seed(&store, "A", "백엔드 개발자", ExperienceLevel::OneToThree).await;
        seed(&store, "B", "백엔드 개발자", ExperienceLevel::TenPlus).await;
        seed(&store, "C", "프론트엔드 개발자", ExperienceLevel::OneToThree).await;

        let sample = sample_postings(&store, "백엔드 개발자", ExperienceLevel::OneToThree)
            .await
            .unwrap();
        assert_eq!(sample.len(), 2);
        assert!(sample.iter().all(|p| p.position == "백엔드 개발자"));
    }

    #[tokio::test]
    async fn test_sample_caps_at_five() {
        let store = MemoryStore::new();
        for i in 0..8 {
            seed(&store, &format!("회사{i}"), "백엔드 개발자", ExperienceLevel::NewGrad).await;
        }

        let sample = sample_postings(&store, "백엔드 개발자", ExperienceLevel::NewGrad)
            .await
            .unwrap();
        assert_eq!(sample.len(), SAMPLE_SIZE as usize);
    }

    #[tokio::test]
    async fn test_second_request_is_served_from_cache() {
        let store = MemoryStore::new();
        let llm = ScriptedInference::replying(ADVICE_REPLY);

        let first = prepare_skills(&store, &llm, "백엔드 개발자", ExperienceLevel::NewGrad)
            .await
            .unwrap();
        let second = prepare_skills(&store, &llm, "백엔드 개발자", ExperienceLevel::NewGrad)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(llm.calls(), 1);
        assert_eq!(store.skills_preparation_count(), 1);
        assert_eq!(first.essential_skills.len(), 5);
    }

    #[tokio::test]
    async fn test_cache_is_keyed_by_experience() {
        let store = MemoryStore::new();
        let llm = ScriptedInference::replying(ADVICE_REPLY);

        prepare_skills(&store, &llm, "백엔드 개발자", ExperienceLevel::NewGrad)
            .await
            .unwrap();
        prepare_skills(&store, &llm, "백엔드 개발자", ExperienceLevel::TenPlus)
            .await
            .unwrap();

        assert_eq!(llm.calls(), 2);
        assert_eq!(store.skills_preparation_count(), 2);
    }

    #[tokio::test]
    async fn test_inference_failure_is_not_cached() {
        let store = MemoryStore::new();
        let llm = ScriptedInference::failing();

        let result = prepare_skills(&store, &llm, "백엔드 개발자", ExperienceLevel::NewGrad).await;
        assert!(matches!(result, Err(AppError::Llm(_))));
        assert_eq!(store.skills_preparation_count(), 0);
    }
}
