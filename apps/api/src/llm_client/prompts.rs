// Shared prompt fragments. Each feature that calls the model keeps its own
// prompts.rs next to it and pulls cross-cutting pieces from here.

/// Instruction appended to every prompt that expects a JSON object back.
pub const JSON_ONLY_INSTRUCTION: &str = "다른 설명은 필요없고 JSON만 반환해주세요.";

/// Instruction for fields the model cannot determine from the input.
pub const MISSING_VALUE_INSTRUCTION: &str =
    "각 필드에 해당하는 정보가 없거나 명확하지 않은 경우 \"내용 없음\"으로 표시해주세요.";
