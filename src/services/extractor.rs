//! 模型输出解析 - 业务能力层
//!
//! 只负责"把一段不可信的模型文本变成一套经过校验的题目"，不关心流程
//!
//! 定位上尽量宽容（允许围栏缺失、前后夹杂说明文字、结尾多余逗号），
//! 形状上绝对严格（必须恰好 20 条、每条字段完整）

use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashSet;
use tracing::debug;

use crate::error::ExtractionError;
use crate::models::{
    DifficultyLevel, QuestionBatch, QuestionFormat, QuestionRecord, Topic, BATCH_SIZE,
    OPTION_COUNT,
};

/// 匹配显式标注为 json 的围栏代码块中的对象数组
const FENCED_JSON_PATTERN: &str = r"(?si)```json\s*(\[\s*\{.*?\}\s*\])\s*```";

/// 匹配 `]` 或 `}` 前的多余逗号（模型常见的畸形 JSON）
const TRAILING_COMMA_PATTERN: &str = r",\s*([}\]])";

/// 从模型原始输出中提取并校验一套题目
///
/// 按顺序尝试定位候选片段：
/// 1. 显式标注为 json 的围栏代码块
/// 2. 整段文本中第一个 `[` 到最后一个 `]`（容忍模型忘记写围栏）
///
/// 定位成功后先做结尾逗号修复，再严格校验形状。
/// 主题、难度、形式标签由调用方提供，不从文本中推断。
pub fn extract(
    raw_text: &str,
    topic: Topic,
    level: DifficultyLevel,
    format: QuestionFormat,
) -> Result<QuestionBatch, ExtractionError> {
    let candidate = locate_candidate(raw_text).ok_or(ExtractionError::NoArrayFound)?;

    debug!("候选 JSON 片段长度: {} 字节", candidate.len());

    let repaired = strip_trailing_commas(candidate);

    let value: Value = serde_json::from_str(&repaired)
        .map_err(|source| ExtractionError::MalformedJson { source })?;

    let items = as_question_array(&value)?;

    if items.len() != BATCH_SIZE {
        return Err(ExtractionError::WrongCount {
            actual: items.len(),
        });
    }

    let mut records = Vec::with_capacity(BATCH_SIZE);
    for (index, item) in items.iter().enumerate() {
        records.push(parse_record(item, index, format)?);
    }

    Ok(QuestionBatch::new(topic, level, format, records))
}

/// 定位候选 JSON 片段
fn locate_candidate(raw_text: &str) -> Option<&str> {
    // 优先找围栏代码块
    if let Ok(re) = Regex::new(FENCED_JSON_PATTERN) {
        if let Some(caps) = re.captures(raw_text) {
            if let Some(m) = caps.get(1) {
                return Some(m.as_str());
            }
        }
    }

    // 回退：第一个 '[' 到最后一个 ']'
    let start = raw_text.find('[')?;
    let end = raw_text.rfind(']')?;
    if end < start {
        return None;
    }
    Some(&raw_text[start..=end])
}

/// 去掉 `]` / `}` 前的多余逗号
///
/// 这是针对模型常见错误的尽力而为的兼容处理，不是通用 JSON 修复：
/// 其他畸形输入仍然会在解析阶段干净地失败
fn strip_trailing_commas(candidate: &str) -> Cow<'_, str> {
    match Regex::new(TRAILING_COMMA_PATTERN) {
        Ok(re) => re.replace_all(candidate, "$1"),
        Err(_) => Cow::Borrowed(candidate),
    }
}

/// 解析结果必须是数组
fn as_question_array(value: &Value) -> Result<&Vec<Value>, ExtractionError> {
    value.as_array().ok_or(ExtractionError::NotAnArray)
}

/// 校验单条记录并转换为 QuestionRecord
fn parse_record(
    item: &Value,
    index: usize,
    format: QuestionFormat,
) -> Result<QuestionRecord, ExtractionError> {
    let invalid = |reason: &str| ExtractionError::InvalidRecord {
        index,
        reason: reason.to_string(),
    };

    let question = item
        .get("question")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("缺少 question 字符串字段"))?;
    if question.trim().is_empty() {
        return Err(invalid("question 字段为空"));
    }

    let answer = item
        .get("answer")
        .and_then(Value::as_str)
        .ok_or_else(|| invalid("缺少 answer 字符串字段"))?;
    if answer.trim().is_empty() {
        return Err(invalid("answer 字段为空"));
    }

    let options = match format {
        QuestionFormat::FillInBlank => {
            // 填空形式不允许携带 options，保证整套题目形式一致
            if item.get("options").is_some() {
                return Err(invalid("填空题不应包含 options 字段"));
            }
            None
        }
        QuestionFormat::MultipleChoice => {
            let raw_options = item
                .get("options")
                .and_then(Value::as_array)
                .ok_or_else(|| invalid("缺少 options 数组字段"))?;

            if raw_options.len() != OPTION_COUNT {
                return Err(invalid(&format!(
                    "options 数量错误: 期望 {} 个，实际 {} 个",
                    OPTION_COUNT,
                    raw_options.len()
                )));
            }

            let mut options = Vec::with_capacity(OPTION_COUNT);
            for opt in raw_options {
                let opt = opt
                    .as_str()
                    .ok_or_else(|| invalid("options 中存在非字符串选项"))?;
                if opt.trim().is_empty() {
                    return Err(invalid("options 中存在空选项"));
                }
                options.push(opt.to_string());
            }

            let distinct: HashSet<&str> = options.iter().map(String::as_str).collect();
            if distinct.len() != OPTION_COUNT {
                return Err(invalid("options 中存在重复选项"));
            }

            // 精确字符串比较，不做数值归一化
            if !options.iter().any(|opt| opt == answer) {
                return Err(invalid("answer 与任何选项都不一致"));
            }

            Some(options)
        }
    };

    Ok(QuestionRecord {
        question: question.to_string(),
        answer: answer.to_string(),
        options,
    })
}
