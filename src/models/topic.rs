/// 练习主题枚举
///
/// 对应界面上的 8 个可选主题，"Mixed" 表示混合出题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Topic {
    /// 加法
    Addition,
    /// 减法
    Subtraction,
    /// 乘法
    Multiplication,
    /// 除法
    Division,
    /// 分数
    Fractions,
    /// 小数
    Decimals,
    /// 百分数
    Percentages,
    /// 混合
    Mixed,
}

impl Topic {
    /// 全部主题，顺序与界面展示一致
    pub const ALL: [Topic; 8] = [
        Topic::Addition,
        Topic::Subtraction,
        Topic::Multiplication,
        Topic::Division,
        Topic::Fractions,
        Topic::Decimals,
        Topic::Percentages,
        Topic::Mixed,
    ];

    /// 获取标准名称（用于提示词和界面显示）
    pub fn name(self) -> &'static str {
        match self {
            Topic::Addition => "Addition",
            Topic::Subtraction => "Subtraction",
            Topic::Multiplication => "Multiplication",
            Topic::Division => "Division",
            Topic::Fractions => "Fractions",
            Topic::Decimals => "Decimals",
            Topic::Percentages => "Percentages",
            Topic::Mixed => "Mixed",
        }
    }

    /// 获取文件名片段（小写，空格替换为下划线）
    pub fn file_tag(self) -> String {
        self.name().replace(' ', "_").to_lowercase()
    }

    /// 按界面序号解析主题（1-based）
    pub fn from_index(index: usize) -> Option<Self> {
        if index == 0 {
            return None;
        }
        Self::ALL.get(index - 1).copied()
    }

    /// 尝试从字符串解析主题（不区分大小写）
    pub fn find(s: &str) -> Option<Self> {
        let s_lower = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|t| t.name().to_lowercase() == s_lower)
            .copied()
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
