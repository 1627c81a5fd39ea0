//! 出题流程 - 流程层
//!
//! 核心职责：定义"生成一套题目"的完整流程
//!
//! 流程顺序：
//! 1. 构建提示词
//! 2. 调用 LLM 拿原始文本
//! 3. 解析并校验
//! 4. 存档
//!
//! 任一步失败都不会留下部分状态；流程内不做自动重试，
//! 重试是用户在交互层重新触发的显式动作

use std::fmt;

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::ExtractionError;
use crate::models::{DifficultyLevel, QuestionBatch, QuestionFormat, Topic};
use crate::services::{build_prompt, extract, LlmService, QuestionStore};
use crate::utils::logging::truncate_text;

/// 出题流程失败
#[derive(Debug)]
pub enum GenerateFailure {
    /// 模型不可达或超时（可直接重试）
    Transport(anyhow::Error),
    /// 模型输出解析失败，附带原始文本供用户诊断
    Extraction {
        error: ExtractionError,
        raw_text: String,
    },
    /// 存档写入失败
    Storage(anyhow::Error),
}

impl fmt::Display for GenerateFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateFailure::Transport(e) => write!(f, "模型调用失败: {}", e),
            GenerateFailure::Extraction { error, .. } => write!(f, "模型输出解析失败: {}", error),
            GenerateFailure::Storage(e) => write!(f, "题目存档失败: {}", e),
        }
    }
}

impl std::error::Error for GenerateFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerateFailure::Transport(e) | GenerateFailure::Storage(e) => Some(e.as_ref()),
            GenerateFailure::Extraction { error, .. } => Some(error),
        }
    }
}

/// 出题流程
///
/// 职责：
/// - 编排 提示词 -> LLM -> 解析 -> 存档 的完整顺序
/// - 不持有会话状态
/// - 只依赖业务能力（services）
pub struct QuizFlow {
    llm_service: LlmService,
    store: QuestionStore,
}

impl QuizFlow {
    /// 创建新的出题流程
    pub fn new(config: &Config) -> Self {
        Self {
            llm_service: LlmService::new(config),
            store: QuestionStore::new(config.output_dir.clone()),
        }
    }

    /// 生成一套校验过的题目
    pub async fn generate(
        &self,
        topic: Topic,
        level: DifficultyLevel,
        format: QuestionFormat,
    ) -> Result<QuestionBatch, GenerateFailure> {
        info!(
            "🎲 开始出题: 主题 {} | {} | {}",
            topic,
            level.label(),
            format
        );

        let prompt = build_prompt(topic, level, format);

        let raw_text = self
            .llm_service
            .send_to_llm(&prompt, None)
            .await
            .map_err(GenerateFailure::Transport)?;

        debug!("模型输出预览: {}", truncate_text(&raw_text, 120));

        let batch = extract(&raw_text, topic, level, format).map_err(|error| {
            warn!("⚠️ 解析失败: {}", error);
            GenerateFailure::Extraction { error, raw_text }
        })?;

        let path = self
            .store
            .save(&batch)
            .await
            .map_err(GenerateFailure::Storage)?;

        info!("✅ 出题成功，已存档: {}", path.display());

        Ok(batch)
    }
}
