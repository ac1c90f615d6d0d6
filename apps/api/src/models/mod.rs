pub mod experience;
pub mod job_posting;
pub mod scratch;
pub mod skills;

pub use experience::{ExperienceLevel, NOT_SPECIFIED};
pub use job_posting::{JobPosting, JobPostingFilter, NewJobPosting};
pub use scratch::ScratchItem;
pub use skills::SkillsPreparation;
