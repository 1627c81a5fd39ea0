use serde::{Deserialize, Serialize};

use crate::models::format::QuestionFormat;
use crate::models::level::DifficultyLevel;
use crate::models::topic::Topic;

/// 一套题目的固定数量
pub const BATCH_SIZE: usize = 20;

/// 单选题的固定选项数量
pub const OPTION_COUNT: usize = 5;

/// 单个题目记录（创建后不可变）
///
/// `options` 仅在单选形式下存在，且 `answer` 必须与其中一个选项完全一致
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

/// 一套经过校验的题目（恰好 20 条记录）
///
/// 由 ResponseExtractor 创建，携带出题时的主题、难度、形式标签。
/// 创建后不可变，生成新一套时整体替换而不是原地修改。
#[derive(Debug, Clone)]
pub struct QuestionBatch {
    topic: Topic,
    level: DifficultyLevel,
    format: QuestionFormat,
    records: Vec<QuestionRecord>,
}

impl QuestionBatch {
    /// 构造一套题目
    ///
    /// 仅供 extractor 在完成全部校验后调用，不做二次校验
    pub(crate) fn new(
        topic: Topic,
        level: DifficultyLevel,
        format: QuestionFormat,
        records: Vec<QuestionRecord>,
    ) -> Self {
        Self {
            topic,
            level,
            format,
            records,
        }
    }

    pub fn topic(&self) -> Topic {
        self.topic
    }

    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    pub fn format(&self) -> QuestionFormat {
        self.format
    }

    pub fn records(&self) -> &[QuestionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// 提交后冻结的单题作答记录
#[derive(Debug, Clone, Serialize)]
pub struct CollectedAnswer {
    /// 题干
    pub question: String,
    /// 标准答案
    pub correct_answer: String,
    /// 用户作答（已去除首尾空白，未作答为空字符串）
    pub user_answer: String,
}
