/// 题目作答形式枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum QuestionFormat {
    /// 填空（自由输入答案）
    FillInBlank,
    /// 单选（5 个选项选一个）
    MultipleChoice,
}

impl QuestionFormat {
    pub const ALL: [QuestionFormat; 2] =
        [QuestionFormat::FillInBlank, QuestionFormat::MultipleChoice];

    /// 获取标准名称（用于界面显示）
    pub fn name(self) -> &'static str {
        match self {
            QuestionFormat::FillInBlank => "Fill in Blank",
            QuestionFormat::MultipleChoice => "Multiple Choice",
        }
    }

    /// 获取文件名片段（空格替换为下划线）
    pub fn file_tag(self) -> String {
        self.name().replace(' ', "_")
    }

    /// 按界面序号解析（1-based）
    pub fn from_index(index: usize) -> Option<Self> {
        if index == 0 {
            return None;
        }
        Self::ALL.get(index - 1).copied()
    }
}

impl std::fmt::Display for QuestionFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
