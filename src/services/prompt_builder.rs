//! 提示词构建 - 业务能力层
//!
//! 纯函数：同样的输入永远产出同样的提示词，不含随机性，无副作用
//!
//! 提示词要求模型恰好生成 20 条题目，并把 JSON 数组包在 ```json 围栏里，
//! 给 extractor 一个稳定的定位锚点

use crate::models::{DifficultyLevel, QuestionFormat, Topic, BATCH_SIZE};

/// 构建出题提示词
pub fn build_prompt(topic: Topic, level: DifficultyLevel, format: QuestionFormat) -> String {
    match format {
        QuestionFormat::FillInBlank => build_fill_in_prompt(topic, level),
        QuestionFormat::MultipleChoice => build_mcq_prompt(topic, level),
    }
}

fn build_fill_in_prompt(topic: Topic, level: DifficultyLevel) -> String {
    format!(
        r#"You're a friendly math tutor for a 10-12 year old Australian student (Year 6).
Topic: {topic}
Difficulty: {difficulty}.

Follow the difficulty guidance:
{rules}
Generate exactly {count} **mental math** questions on the topic (or a balanced mix if "Mixed").
The questions must be:
- short and solvable mentally (no calculators or long written methods)
- varied in structure and difficulty within the level
- age-appropriate and unambiguous
- answers should be **exact** (simplified fractions or exact decimals)

Output ONLY a JSON list (no explanation or intro), like:
[
  {{
    "question": "What is 25% of 60?",
    "answer": "15"
  }},
  ...
]
Wrap the JSON in a ```json code block.
"#,
        topic = topic.name(),
        difficulty = level.short_label(),
        rules = level.rules(),
        count = BATCH_SIZE,
    )
}

fn build_mcq_prompt(topic: Topic, level: DifficultyLevel) -> String {
    format!(
        r#"You're a friendly math tutor for a 10-12 year old Australian student (Year 6).
Topic: {topic}
Difficulty: {difficulty}.

Follow the difficulty guidance:
{rules}
Generate exactly {count} **mental math multiple choice (MCQ)** questions.
Each must have:
- A "question" string.
- An "options" list with exactly 5 choices (A-E).
- An "answer" string matching exactly one of the options.
- Distractors should be reasonable mistakes (not random nonsense).

Output ONLY a JSON list (no explanation or intro), like:
[
  {{
    "question": "What is 25% of 60?",
    "options": ["10", "12", "15", "18", "20"],
    "answer": "15"
  }},
  ...
]
Wrap the JSON in a ```json code block.
"#,
        topic = topic.name(),
        difficulty = level.short_label(),
        rules = level.rules(),
        count = BATCH_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let a = build_prompt(
            Topic::Fractions,
            DifficultyLevel::Level3,
            QuestionFormat::FillInBlank,
        );
        let b = build_prompt(
            Topic::Fractions,
            DifficultyLevel::Level3,
            QuestionFormat::FillInBlank,
        );
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_requests_exactly_20_and_fence() {
        for format in QuestionFormat::ALL {
            let prompt = build_prompt(Topic::Mixed, DifficultyLevel::Level1, format);
            assert!(prompt.contains("exactly 20"));
            assert!(prompt.contains("```json code block"));
        }
    }

    #[test]
    fn test_prompt_embeds_topic_and_level_rules() {
        let prompt = build_prompt(
            Topic::Percentages,
            DifficultyLevel::Level4,
            QuestionFormat::FillInBlank,
        );
        assert!(prompt.contains("Topic: Percentages"));
        assert!(prompt.contains("Difficulty: Level 4."));
        assert!(prompt.contains("Three-step mental chains."));
    }

    #[test]
    fn test_mcq_prompt_requires_five_options() {
        let prompt = build_prompt(
            Topic::Division,
            DifficultyLevel::Level2,
            QuestionFormat::MultipleChoice,
        );
        assert!(prompt.contains("exactly 5 choices"));
        assert!(prompt.contains(r#""options""#));
    }
}
