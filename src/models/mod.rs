pub mod format;
pub mod level;
pub mod question;
pub mod topic;

pub use format::QuestionFormat;
pub use level::DifficultyLevel;
pub use question::{CollectedAnswer, QuestionBatch, QuestionRecord, BATCH_SIZE, OPTION_COUNT};
pub use topic::Topic;
