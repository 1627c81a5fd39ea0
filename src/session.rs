//! 答题会话
//!
//! 单个可变的会话对象，由交互层持有并传入核心函数，核心不读任何全局状态。
//! 同一时刻只有一套题目在用：开始新一套会整体替换旧状态，不合并、不留历史
//! （历史只通过存档服务落盘）。

use chrono::{DateTime, Local};
use rand::seq::SliceRandom;
use std::time::Duration;

use crate::error::SessionError;
use crate::models::{CollectedAnswer, QuestionBatch};

/// 答题会话状态
///
/// 生命周期：空 -> start() -> (多次 record_draft_answers) -> submit() -> reset() -> 空
#[derive(Debug, Default)]
pub struct QuizSession {
    /// 当前题目，未开始时为 None
    batch: Option<QuestionBatch>,
    /// 每题的选项展示顺序（仅单选形式），开始时洗牌一次，整个会话保持不变。
    /// 每次渲染重新洗牌会让界面在重绘之间不一致。
    display_orders: Vec<Option<Vec<String>>>,
    /// 草稿答案（按题目下标对齐），提交前不属于正式状态
    drafts: Vec<String>,
    started_at: Option<DateTime<Local>>,
    ended_at: Option<DateTime<Local>>,
    submitted: bool,
    /// 提交时冻结的作答记录
    collected_answers: Vec<CollectedAnswer>,
}

impl QuizSession {
    /// 创建空会话
    pub fn new() -> Self {
        Self::default()
    }

    /// 开始新一套题目，整体替换已有状态
    ///
    /// 单选形式下为每道题独立生成一个均匀随机排列并固定下来
    pub fn start(&mut self, batch: QuestionBatch, now: DateTime<Local>) {
        let mut rng = rand::thread_rng();
        let display_orders = batch
            .records()
            .iter()
            .map(|record| {
                record.options.as_ref().map(|options| {
                    let mut shuffled = options.clone();
                    shuffled.shuffle(&mut rng);
                    shuffled
                })
            })
            .collect();

        *self = Self {
            batch: Some(batch),
            display_orders,
            drafts: Vec::new(),
            started_at: Some(now),
            ended_at: None,
            submitted: false,
            collected_answers: Vec::new(),
        };
    }

    /// 暂存草稿答案（按题目下标对齐）
    ///
    /// 可以在每次渲染时重复调用，幂等，后写覆盖先写，不做任何校验
    pub fn record_draft_answers(&mut self, drafts: &[String]) {
        self.drafts = drafts.to_vec();
    }

    /// 提交答案，冻结作答记录并停表
    ///
    /// 逐题把 (题干, 标准答案, 去除首尾空白的草稿) 打包；
    /// 草稿缺失的题目按空字符串处理
    pub fn submit(
        &mut self,
        drafts: &[String],
        now: DateTime<Local>,
    ) -> Result<(), SessionError> {
        let batch = self.batch.as_ref().ok_or(SessionError::NotStarted)?;
        if self.submitted {
            return Err(SessionError::AlreadySubmitted);
        }

        self.collected_answers = batch
            .records()
            .iter()
            .enumerate()
            .map(|(i, record)| CollectedAnswer {
                question: record.question.clone(),
                correct_answer: record.answer.clone(),
                user_answer: drafts
                    .get(i)
                    .map(|d| d.trim().to_string())
                    .unwrap_or_default(),
            })
            .collect();

        self.drafts = drafts.to_vec();
        self.ended_at = Some(now);
        self.submitted = true;

        Ok(())
    }

    /// 已用时长
    ///
    /// 提交前相对当前时刻计算，提交后冻结在提交时刻。
    /// 时钟回拨时钳制为零，永不为负、永不报错。
    pub fn elapsed(&self, now: DateTime<Local>) -> Duration {
        let Some(started) = self.started_at else {
            return Duration::ZERO;
        };
        let end = if self.submitted {
            self.ended_at.unwrap_or(now)
        } else {
            now
        };
        (end - started).to_std().unwrap_or(Duration::ZERO)
    }

    /// 丢弃全部状态，回到空会话（与是否已提交无关）
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ========== 只读访问 ==========

    pub fn batch(&self) -> Option<&QuestionBatch> {
        self.batch.as_ref()
    }

    /// 第 index 题的选项展示顺序（仅单选形式返回 Some）
    pub fn display_options(&self, index: usize) -> Option<&[String]> {
        self.display_orders
            .get(index)
            .and_then(|o| o.as_deref())
    }

    pub fn drafts(&self) -> &[String] {
        &self.drafts
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn collected_answers(&self) -> &[CollectedAnswer] {
        &self.collected_answers
    }
}
