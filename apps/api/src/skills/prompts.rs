// Prompt constants for skills preparation.

/// System role line for preparation advice.
pub const SKILLS_SYSTEM: &str = "당신은 채용 및 커리어 전문가입니다. \
    직무별 필요 역량과 준비 방법에 대해 구체적이고 실용적인 조언을 제공합니다.";

/// Preparation prompt template.
/// Replace: {position}, {experience}, {job_postings}, {json_only}
pub const SKILLS_PROMPT_TEMPLATE: &str = r#"당신은 {position} 직무 분야의 채용 및 커리어 전문가입니다. {experience} 경력의 사람이 이 직무에 필요한 준비사항을 알려주세요.

다음은 실제 채용공고 데이터입니다:
{job_postings}

위 데이터를 바탕으로 {position} ({experience}) 지원자에게 필요한 정보를 다음 JSON 형식으로 제공해주세요:

{
  "essentialSkills": ["필수 기술스택 1", "필수 기술스택 2", ...], // 5-8개 항목
  "bonusSkills": ["우대 기술/역량 1", "우대 기술/역량 2", ...], // 5-8개 항목
  "recommendations": ["준비 방법 및 추천 자료에 대한 구체적인 조언 1", "조언 2", ...] // 3-5개 항목
}

채용공고 데이터가 불충분한 경우, 해당 직무에 대한 일반적인 지식을 바탕으로 답변해주세요.
{json_only}"#;

/// Used in place of posting data when no postings match.
pub const NO_POSTINGS_NOTE: &str = "관련 채용공고 데이터가 충분하지 않습니다.";

/// Separator between quoted postings.
pub const POSTING_SEPARATOR: &str = "\n---\n";
