pub mod extractor;
pub mod llm_service;
pub mod prompt_builder;
pub mod storage;

pub use extractor::extract;
pub use llm_service::LlmService;
pub use prompt_builder::build_prompt;
pub use storage::QuestionStore;
