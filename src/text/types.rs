//! 前端类型定义

use std::fmt;

use serde::{Deserialize, Serialize};

/// 发音单元的来源语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u32)]
pub enum Language {
    /// 无语言（保留位）
    #[default]
    None = 0,
    /// 中文
    Chinese = 1,
    /// 英文
    English = 2,
}

impl Language {
    /// 整数编码（下游模型特征使用）
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// 发音单元：音素 + 声调 + 语言
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronounce {
    /// 音素符号
    pub phone: String,
    /// 声调（中文 0-4，英文重音 0-5）
    pub tone: u32,
    /// 来源语言
    pub language: Language,
}

impl Pronounce {
    pub fn new(phone: impl Into<String>, tone: u32, language: Language) -> Self {
        Self {
            phone: phone.into(),
            tone,
            language,
        }
    }
}

impl fmt::Display for Pronounce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}|{}|{})", self.phone, self.tone, self.language.code())
    }
}

/// 分词结果的语言分类
///
/// 由分词适配层一次性给出，发音解析按此分类穷举匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenKind {
    /// 含汉字的词
    Chinese,
    /// 英文词（标签为 `eng`）
    English,
    /// 空白、标点等其他片段
    Other,
}

/// 分词结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// 原文片段
    pub text: String,
    /// 词性标签（原样保留，用于 `词|标签` 查表）
    pub tag: String,
    /// 语言分类
    pub kind: TokenKind,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}|{})", self.text, self.tag)
    }
}

/// 把序列格式化成 `(a)(b)(c)` 形式，用于调试日志
pub(crate) fn join_display<T: fmt::Display>(items: &[T]) -> String {
    items.iter().map(|item| item.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_code() {
        assert_eq!(Language::None.code(), 0);
        assert_eq!(Language::Chinese.code(), 1);
        assert_eq!(Language::English.code(), 2);
    }

    #[test]
    fn test_pronounce_display() {
        let units = vec![
            Pronounce::new("zh", 1, Language::Chinese),
            Pronounce::new("ah", 2, Language::English),
        ];
        assert_eq!(join_display(&units), "(zh|1|1)(ah|2|2)");
    }

    #[test]
    fn test_pronounce_serialize() {
        let unit = Pronounce::new("ong", 4, Language::Chinese);
        let json = serde_json::to_string(&unit).unwrap();
        assert_eq!(json, r#"{"phone":"ong","tone":4,"language":"chinese"}"#);
    }
}
