//! 交互层
//!
//! 终端问答界面：选主题/难度/形式 -> 出题 -> 逐题作答 -> 提交 -> 看成绩。
//! 会话对象由本层持有，按引用传入核心函数，核心不读任何全局状态。

use std::io::{self, Write};

use anyhow::Result;
use chrono::Local;
use tracing::{error, info};

use crate::config::Config;
use crate::models::{DifficultyLevel, QuestionFormat, Topic};
use crate::scorer::{score, ScoreReport};
use crate::session::QuizSession;
use crate::workflow::{GenerateFailure, QuizFlow};

/// 应用主结构
pub struct App {
    flow: QuizFlow,
    session: QuizSession,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Self {
        log_startup(&config);
        Self {
            flow: QuizFlow::new(&config),
            session: QuizSession::new(),
        }
    }

    /// 运行交互主循环
    ///
    /// 每轮：选择 -> 生成 -> 作答 -> 评分。任何失败都回到选择界面，
    /// 重试永远是用户重新触发的完整流程，不做自动重试。
    pub async fn run(&mut self) -> Result<()> {
        println!("🧠 Year 6 Mental Math Hero");
        println!("Practice your mental math skills with 20 quick questions!");

        loop {
            let topic = prompt_topic()?;
            let level = prompt_level()?;
            let format = prompt_format()?;

            match self.flow.generate(topic, level, format).await {
                Ok(batch) => {
                    self.session.start(batch, Local::now());
                    self.run_round()?;
                }
                Err(GenerateFailure::Extraction { error, raw_text }) => {
                    error!("解析模型输出失败: {}", error);
                    println!("\n⚠️ Couldn't parse a valid set of 20 Q&A items. Try again.");
                    println!("----- raw model output -----");
                    println!("{}", raw_text);
                    println!("----------------------------");
                }
                Err(failure) => {
                    error!("出题失败: {}", failure);
                    println!("\n⚠️ Couldn't reach the question generator. Please try again.");
                }
            }

            if !prompt_yes_no("\n🔁 Try another set? [y/N] ")? {
                break;
            }
            self.session.reset();
        }

        println!("👋 Bye! Keep practicing!");
        Ok(())
    }

    /// 一轮完整作答：逐题收集草稿 -> 提交 -> 展示成绩
    fn run_round(&mut self) -> Result<()> {
        let (questions, option_lists, total) = match self.session.batch() {
            Some(batch) => {
                let questions: Vec<String> =
                    batch.records().iter().map(|r| r.question.clone()).collect();
                let total = batch.len();
                let option_lists: Vec<Option<Vec<String>>> = (0..total)
                    .map(|i| self.session.display_options(i).map(|o| o.to_vec()))
                    .collect();
                (questions, option_lists, total)
            }
            None => return Ok(()),
        };

        println!("\n✍️ Answer the following:");

        let mut drafts: Vec<String> = Vec::with_capacity(total);
        for i in 0..total {
            let elapsed = self.session.elapsed(Local::now());
            let (m, s) = (elapsed.as_secs() / 60, elapsed.as_secs() % 60);
            println!("\n⏱️ Timer: {}m {}s", m, s);
            println!("{}. {}", i + 1, questions[i]);

            let draft = if let Some(options) = &option_lists[i] {
                for (j, opt) in options.iter().enumerate() {
                    println!("   {}. {}", letter(j), opt);
                }
                let input = read_line("Pick A-E > ")?;
                resolve_choice(&input, options)
            } else {
                read_line("Answer > ")?
            };

            drafts.push(draft);
            // 每轮渲染都暂存一次草稿，幂等
            self.session.record_draft_answers(&drafts);
        }

        match self.session.submit(&drafts, Local::now()) {
            Ok(()) => {}
            Err(e) => {
                // 用户操作错误，提示后返回选择界面即可恢复
                info!("提交被拒绝: {}", e);
                println!("⚠️ This set was already submitted.");
                return Ok(());
            }
        }

        let report = score(self.session.collected_answers());
        let elapsed = self.session.elapsed(Local::now());
        self.print_results(&report, elapsed.as_secs());

        Ok(())
    }

    /// 展示成绩汇总
    fn print_results(&self, report: &ScoreReport, elapsed_secs: u64) {
        let (m, s) = (elapsed_secs / 60, elapsed_secs % 60);
        println!("\n⏱️ You completed the quiz in {} minutes {} seconds!", m, s);

        for (answer, correct) in self
            .session
            .collected_answers()
            .iter()
            .zip(&report.per_question)
        {
            if *correct {
                println!("✅ {} -> Your answer: {}", answer.question, answer.user_answer);
            } else {
                let shown = if answer.user_answer.is_empty() {
                    "—"
                } else {
                    answer.user_answer.as_str()
                };
                println!(
                    "❌ {} -> Your answer: {} | Correct: {}",
                    answer.question, shown, answer.correct_answer
                );
            }
        }

        println!(
            "\n🏆 You got {} / {} correct!",
            report.correct_count, report.total
        );
        println!("{}", report.tier.message());
    }
}

// ========== 输入辅助函数 ==========

/// 打印提示并读取一行（去除首尾空白）
fn read_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// 把 A-E 字母映射为对应选项，其他输入原样作为答案
fn resolve_choice(input: &str, options: &[String]) -> String {
    let trimmed = input.trim();
    if trimmed.chars().count() == 1 {
        if let Some(c) = trimmed.chars().next() {
            let c = c.to_ascii_uppercase();
            if c.is_ascii_uppercase() {
                let idx = (c as u8 - b'A') as usize;
                if let Some(opt) = options.get(idx) {
                    return opt.clone();
                }
            }
        }
    }
    trimmed.to_string()
}

fn letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn prompt_topic() -> Result<Topic> {
    println!("\n📚 Choose your topic:");
    for (i, topic) in Topic::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, topic);
    }
    loop {
        let line = read_line("> ")?;
        let choice = line
            .parse::<usize>()
            .ok()
            .and_then(Topic::from_index)
            .or_else(|| Topic::find(&line));
        match choice {
            Some(topic) => return Ok(topic),
            None => println!("Please enter a number between 1 and {}.", Topic::ALL.len()),
        }
    }
}

fn prompt_level() -> Result<DifficultyLevel> {
    println!("\n🎯 Difficulty (1 = easiest, 4 = toughest):");
    for level in DifficultyLevel::ALL {
        println!("  {}. {}", level.code(), level.label());
    }
    loop {
        let line = read_line("> ")?;
        match line.parse::<u8>().ok().and_then(DifficultyLevel::from_code) {
            Some(level) => return Ok(level),
            None => println!("Please enter a number between 1 and 4."),
        }
    }
}

fn prompt_format() -> Result<QuestionFormat> {
    println!("\n📝 Question format:");
    for (i, format) in QuestionFormat::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, format);
    }
    loop {
        let line = read_line("> ")?;
        match line.parse::<usize>().ok().and_then(QuestionFormat::from_index) {
            Some(format) => return Ok(format),
            None => println!("Please enter 1 or 2."),
        }
    }
}

fn prompt_yes_no(prompt: &str) -> Result<bool> {
    let line = read_line(prompt)?;
    Ok(matches!(line.to_lowercase().as_str(), "y" | "yes"))
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 心算练习模式");
    info!("🤖 模型: {}", config.llm_model_name);
    info!("📁 存档目录: {}", config.output_dir);
    info!("{}", "=".repeat(60));
}
