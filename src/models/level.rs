/// 难度等级枚举（1 = 最简单，4 = 最难）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DifficultyLevel {
    Level1 = 1,
    Level2 = 2,
    Level3 = 3,
    Level4 = 4,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 4] = [
        DifficultyLevel::Level1,
        DifficultyLevel::Level2,
        DifficultyLevel::Level3,
        DifficultyLevel::Level4,
    ];

    /// 获取等级代码（1-4）
    pub fn code(self) -> u8 {
        self as u8
    }

    /// 从代码解析等级
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(DifficultyLevel::Level1),
            2 => Some(DifficultyLevel::Level2),
            3 => Some(DifficultyLevel::Level3),
            4 => Some(DifficultyLevel::Level4),
            _ => None,
        }
    }

    /// 获取完整标签（用于界面显示）
    pub fn label(self) -> &'static str {
        match self {
            DifficultyLevel::Level1 => "Level 1 - Normal",
            DifficultyLevel::Level2 => "Level 2 - Intermediate",
            DifficultyLevel::Level3 => "Level 3 - Advanced",
            DifficultyLevel::Level4 => "Level 4 - Very Challenging",
        }
    }

    /// 获取短名称（用于提示词中的 Difficulty 行）
    pub fn short_label(self) -> &'static str {
        match self {
            DifficultyLevel::Level1 => "Level 1",
            DifficultyLevel::Level2 => "Level 2",
            DifficultyLevel::Level3 => "Level 3",
            DifficultyLevel::Level4 => "Level 4",
        }
    }

    /// 获取该等级的出题规则表（嵌入提示词，固定不变）
    pub fn rules(self) -> &'static str {
        match self {
            DifficultyLevel::Level1 => {
                "\
Level 1 (Normal):
- Single-step questions.
- Friendly numbers; small integers up to 100.
- Simple halves/quarters, tenths; 1-2 digit x or division.
- Percentages like 10%, 20%, 50%.
"
            }
            DifficultyLevel::Level2 => {
                "\
Level 2 (Intermediate):
- One to two steps.
- Integers up to 1,000; decimals to 1 dp.
- Proper/improper fractions; short division; 2-digit x 2-digit.
- Percentages like 25%, 12.5%, 5%; rounding/estimation may help.
"
            }
            DifficultyLevel::Level3 => {
                "\
Level 3 (Advanced):
- Multi-step reasoning (2-3 steps).
- Integers to 10,000; decimals to 2 dp; mixed numbers.
- Percentage increase/decrease; simple ratios/rates; order of operations.
- Non-friendly numbers but still mental within ~30s.
- Mixed decimal and fraction operations, e.g. 10.5 * 22/7.
"
            }
            DifficultyLevel::Level4 => {
                "\
Level 4 (Very Challenging):
- Three-step mental chains.
- Decimals to 2-3 dp; fraction/decimal/percent conversions.
- 3-digit x 2-digit using mental strategies (answers exact).
- Ratio/proportion, remainders, divisibility; trickier combinations.
"
            }
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for level in DifficultyLevel::ALL {
            assert_eq!(DifficultyLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(DifficultyLevel::from_code(0), None);
        assert_eq!(DifficultyLevel::from_code(5), None);
    }

    #[test]
    fn test_rules_mention_level() {
        for level in DifficultyLevel::ALL {
            assert!(level.rules().contains(level.short_label()));
        }
    }
}
