//! 评分
//!
//! 纯函数：比较采用去除首尾空白后的精确字符串相等。
//! 已知局限：不做数值归一化（"0.5" 与 "1/2" 即使数学上相等也判错），
//! 与 extractor 存储标准答案的方式保持一致，刻意不"修正"。

use serde::Serialize;

use crate::models::CollectedAnswer;

/// 成绩档位（阈值为固定业务规则，不可配置）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Tier {
    /// 答对 16 题及以上
    Hero,
    /// 答对 10 到 15 题
    Good,
    /// 答对不足 10 题
    KeepPracticing,
}

impl Tier {
    /// 按答对数量划档
    pub fn from_correct(correct_count: usize) -> Self {
        if correct_count >= 16 {
            Tier::Hero
        } else if correct_count >= 10 {
            Tier::Good
        } else {
            Tier::KeepPracticing
        }
    }

    /// 档位名称
    pub fn name(self) -> &'static str {
        match self {
            Tier::Hero => "Hero",
            Tier::Good => "Good",
            Tier::KeepPracticing => "Keep practicing",
        }
    }

    /// 展示给用户的鼓励语
    pub fn message(self) -> &'static str {
        match self {
            Tier::Hero => "🎉 Amazing work! You're a Math Hero!",
            Tier::Good => "👍 Good job! Keep practicing!",
            Tier::KeepPracticing => "📚 Don't give up! Try another round to improve!",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 评分结果
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    /// 每题是否答对（与作答记录同序）
    pub per_question: Vec<bool>,
    /// 答对数量
    pub correct_count: usize,
    /// 总题数（取作答记录数量，防御短于 20 的输入）
    pub total: usize,
    /// 成绩档位
    pub tier: Tier,
}

/// 对一组冻结的作答记录评分
pub fn score(answers: &[CollectedAnswer]) -> ScoreReport {
    let per_question: Vec<bool> = answers
        .iter()
        .map(|a| a.user_answer.trim() == a.correct_answer)
        .collect();
    let correct_count = per_question.iter().filter(|&&ok| ok).count();

    ScoreReport {
        correct_count,
        total: answers.len(),
        tier: Tier::from_correct(correct_count),
        per_question,
    }
}
