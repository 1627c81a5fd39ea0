//! # Mental Math Quiz
//!
//! 一个调用生成式模型出题的心算练习应用
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 主题 / 难度 / 形式枚举与题目记录
//! - `QuestionBatch` - 校验后不可变的一套题目（恰好 20 条）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程
//! - `prompt_builder` - 构建出题提示词（纯函数）
//! - `extractor` - 把不可信的模型文本解析成校验过的题目（解析核心）
//! - `LlmService` - 模型调用能力
//! - `QuestionStore` - 题目存档能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"生成一套题目"的完整流程
//! - `QuizFlow` - 流程编排（提示词 -> LLM -> 解析 -> 存档）
//!
//! ### ④ 交互层（App）
//! - `app` - 终端问答界面，持有 `QuizSession` 并驱动评分
//! - `session` - 答题会话生命周期（计时 / 洗牌 / 提交）
//! - `scorer` - 评分（纯函数）

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod scorer;
pub mod services;
pub mod session;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{ExtractionError, SessionError};
pub use models::{
    CollectedAnswer, DifficultyLevel, QuestionBatch, QuestionFormat, QuestionRecord, Topic,
};
pub use scorer::{score, ScoreReport, Tier};
pub use services::{build_prompt, extract, LlmService, QuestionStore};
pub use session::QuizSession;
pub use workflow::{GenerateFailure, QuizFlow};
