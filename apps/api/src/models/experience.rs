use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel stored whenever the model could not determine a value.
pub const NOT_SPECIFIED: &str = "내용 없음";

/// Career-length bucket used to group postings and cached advice.
/// Serialized as the Korean label shown to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExperienceLevel {
    NewGrad,
    OneToThree,
    ThreeToFive,
    FiveToSeven,
    SevenToTen,
    TenPlus,
    Any,
    #[default]
    NotSpecified,
}

impl ExperienceLevel {
    /// Buckets a posting can be filed under, in display order. Excludes the sentinel.
    pub const BUCKETS: [ExperienceLevel; 7] = [
        ExperienceLevel::NewGrad,
        ExperienceLevel::OneToThree,
        ExperienceLevel::ThreeToFive,
        ExperienceLevel::FiveToSeven,
        ExperienceLevel::SevenToTen,
        ExperienceLevel::TenPlus,
        ExperienceLevel::Any,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::NewGrad => "신입",
            ExperienceLevel::OneToThree => "1~3년",
            ExperienceLevel::ThreeToFive => "3~5년",
            ExperienceLevel::FiveToSeven => "5~7년",
            ExperienceLevel::SevenToTen => "7~10년",
            ExperienceLevel::TenPlus => "10년 이상",
            ExperienceLevel::Any => "경력 무관",
            ExperienceLevel::NotSpecified => NOT_SPECIFIED,
        }
    }

    /// Strict lookup used for client input: the trimmed text must be a known label.
    pub fn parse_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::BUCKETS
            .into_iter()
            .chain(std::iter::once(ExperienceLevel::NotSpecified))
            .find(|level| level.as_str() == label)
    }

    /// Lenient lookup used for model output and stored rows: anything unknown is the sentinel.
    pub fn from_model_output(label: &str) -> Self {
        Self::parse_label(label).unwrap_or_default()
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ExperienceLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExperienceLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Self::parse_label(&label).ok_or_else(|| {
            serde::de::Error::custom(format!("unknown experience level: {label}"))
        })
    }
}
