use std::fmt;

/// 模型输出解析错误
///
/// 解析采取"全有或全无"策略：任何一条记录不合格，整套题目都被拒绝，
/// 绝不把部分结果交给答题会话
#[derive(Debug)]
pub enum ExtractionError {
    /// 原始文本中找不到 JSON 数组
    NoArrayFound,
    /// 候选片段不是合法 JSON
    MalformedJson { source: serde_json::Error },
    /// 解析结果不是数组
    NotAnArray,
    /// 数组长度不是 20
    WrongCount { actual: usize },
    /// 某条记录不符合预期形式
    InvalidRecord { index: usize, reason: String },
}

impl fmt::Display for ExtractionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionError::NoArrayFound => {
                write!(f, "模型输出中未找到 JSON 数组")
            }
            ExtractionError::MalformedJson { source } => {
                write!(f, "JSON 解析失败: {}", source)
            }
            ExtractionError::NotAnArray => {
                write!(f, "解析结果不是数组")
            }
            ExtractionError::WrongCount { actual } => {
                write!(f, "题目数量错误: 期望 20 条，实际 {} 条", actual)
            }
            ExtractionError::InvalidRecord { index, reason } => {
                write!(f, "第 {} 条记录无效: {}", index + 1, reason)
            }
        }
    }
}

impl std::error::Error for ExtractionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractionError::MalformedJson { source } => Some(source),
            _ => None,
        }
    }
}

/// 答题会话错误
///
/// 均为用户操作错误，可通过 reset() 恢复，不会终止进程
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// 尚未开始答题（没有在用的题目）
    NotStarted,
    /// 已经提交过，不能重复提交
    AlreadySubmitted,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotStarted => write!(f, "会话尚未开始，没有可提交的题目"),
            SessionError::AlreadySubmitted => write!(f, "本套题目已经提交过"),
        }
    }
}

impl std::error::Error for SessionError {}
