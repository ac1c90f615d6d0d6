// Prompt constants for job posting analysis.

/// System role line for job posting analysis.
pub const JOB_POSTING_SYSTEM: &str =
    "채용공고를 분석하여 구조화된 JSON 형태로 변환하는 비서입니다.";

/// Analysis prompt template.
/// Replace: {json_only}, {missing_value}, {experience_buckets}, {job_posting_text}
pub const JOB_POSTING_PROMPT_TEMPLATE: &str = r#"다음 채용공고 텍스트를 분석하여 JSON 형태로 정리해주세요. {json_only}
JSON 구조는 다음과 같습니다:
{
  "company": "회사명",
  "position": "직무",
  "experience": "년차",
  "techStack": ["기술스택1", "기술스택2", ...],
  "preferredSkills": ["우대사항1", "우대사항2", ...]
}

{missing_value}
기술 스택과 우대사항은 배열 형태로 반환해주세요.

년차(경력)의 경우 다음 카테고리 중 하나로 표준화해서 반환해주세요:
{experience_buckets}

만약 무관 및 경력사항이 있는 경우 "경력 무관"으로 표시해주세요.

채용공고 텍스트:
{job_posting_text}"#;
