pub mod handlers;
pub mod preparation;
pub mod prompts;
