//! 题目存档服务 - 业务能力层
//!
//! 只负责"把一套校验过的题目写成 JSON 文件"能力，不关心流程
//!
//! 文件命名约定：
//! `questions_<topic>_L<level>_<format>_<YYYYMMDD_HHMMSS>.json`

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::fs;
use tracing::debug;

use crate::models::QuestionBatch;

/// 题目存档服务
///
/// 职责：
/// - 将校验过的一套题目序列化为带缩进的 JSON（UTF-8，非 ASCII 原样保留）
/// - 只写入校验通过的记录列表本身，不注入额外字段
pub struct QuestionStore {
    output_dir: String,
}

impl QuestionStore {
    /// 创建新的存档服务
    pub fn new(output_dir: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// 保存一套题目，返回写入的文件路径
    pub async fn save(&self, batch: &QuestionBatch) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .await
            .with_context(|| format!("无法创建存档目录: {}", self.output_dir))?;

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let filename = format!(
            "questions_{}_L{}_{}_{}.json",
            batch.topic().file_tag(),
            batch.level().code(),
            batch.format().file_tag(),
            timestamp
        );
        let path = PathBuf::from(&self.output_dir).join(filename);

        let content = serde_json::to_string_pretty(batch.records())?;

        fs::write(&path, content)
            .await
            .with_context(|| format!("无法写入存档文件: {}", path.display()))?;

        debug!("题目已存档: {}", path.display());

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DifficultyLevel, QuestionFormat, QuestionRecord, Topic, BATCH_SIZE};

    fn sample_batch() -> QuestionBatch {
        let records = (0..BATCH_SIZE)
            .map(|i| QuestionRecord {
                question: format!("What is {} + 1?", i),
                answer: format!("{}", i + 1),
                options: None,
            })
            .collect();
        QuestionBatch::new(
            Topic::Addition,
            DifficultyLevel::Level1,
            QuestionFormat::FillInBlank,
            records,
        )
    }

    #[tokio::test]
    async fn test_save_writes_records_as_validated() {
        let dir = std::env::temp_dir().join(format!(
            "mental_math_store_test_{}",
            std::process::id()
        ));
        let store = QuestionStore::new(dir.to_string_lossy().to_string());

        let batch = sample_batch();
        let path = store.save(&batch).await.unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("questions_addition_L1_Fill_in_Blank_"));
        assert!(name.ends_with(".json"));

        // 文件内容必须是记录列表本身，不多不少
        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), BATCH_SIZE);
        assert_eq!(parsed[0]["question"], "What is 0 + 1?");
        assert!(parsed[0].get("options").is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
