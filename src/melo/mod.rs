//! 声学模型输入准备
//!
//! 把规范化后的长句切成短块，把发音单元映射成 音素/声调/语言 三条整数序列，
//! 并在每个元素前后插入空白（0）

mod symbols;

use serde::{Deserialize, Serialize};

use crate::text::{is_canonical_punctuation, Language, Pronounce};

pub use symbols::{symbol_id, SYMBOLS, UNKNOWN_SYMBOL};

/// 中英混合模型的语言 id（所有单元统一使用）
pub const ZH_LANG_ID: i64 = 3;
/// 中文声调起点
pub const ZH_TONE_START: i64 = 0;
/// 英文重音起点
pub const EN_TONE_START: i64 = 7;

/// 模型输入序列
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MeloInput {
    pub phones: Vec<i64>,
    pub tones: Vec<i64>,
    pub langs: Vec<i64>,
}

impl MeloInput {
    /// 由发音单元构造（已插入空白）
    pub fn from_pronounces(units: &[Pronounce]) -> Self {
        let mut phones = Vec::with_capacity(units.len());
        let mut tones = Vec::with_capacity(units.len());
        let mut langs = Vec::with_capacity(units.len());

        for unit in units {
            phones.push(symbol_id(&unit.phone));
            let tone_start = match unit.language {
                Language::English => EN_TONE_START,
                Language::Chinese | Language::None => ZH_TONE_START,
            };
            tones.push(i64::from(unit.tone) + tone_start);
            langs.push(ZH_LANG_ID);
        }

        Self {
            phones: add_blank(&phones),
            tones: add_blank(&tones),
            langs: add_blank(&langs),
        }
    }

    /// 序列长度（三条序列等长）
    pub fn len(&self) -> usize {
        self.phones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}

/// `[a, b]` -> `[0, a, 0, b, 0]`
fn add_blank(data: &[i64]) -> Vec<i64> {
    let mut result = Vec::with_capacity(data.len() * 2 + 1);
    result.push(0);
    for &value in data {
        result.push(value);
        result.push(0);
    }
    result
}

/// 按标点把规范化后的句子切块
///
/// 块长度（UTF-8 字节）达到 `min_len` 后在下一个标点处收尾；
/// 不足 2 字节的尾巴并入上一块
pub fn split(normalized: &str, min_len: usize) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    let mut chunk = String::new();

    for ch in normalized.chars() {
        if ch == ' ' && chunk.is_empty() {
            continue;
        }
        chunk.push(ch);
        if is_canonical_punctuation(ch) && chunk.len() >= min_len {
            result.push(std::mem::take(&mut chunk));
        }
    }

    if !chunk.is_empty() {
        match result.last_mut() {
            Some(last) if chunk.len() < 2 => last.push_str(&chunk),
            _ => result.push(chunk),
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_blank() {
        assert_eq!(add_blank(&[5, 6]), vec![0, 5, 0, 6, 0]);
        assert_eq!(add_blank(&[]), vec![0]);
    }

    #[test]
    fn test_from_pronounces() {
        let units = vec![
            Pronounce::new(" ", 0, Language::Chinese),
            Pronounce::new("zh", 1, Language::Chinese),
            Pronounce::new("ah", 2, Language::English),
        ];
        let input = MeloInput::from_pronounces(&units);
        assert_eq!(input.phones, vec![0, 0, 0, 101, 0, 12, 0]);
        assert_eq!(input.tones, vec![0, 0, 0, 1, 0, 9, 0]);
        assert_eq!(input.langs, vec![0, 3, 0, 3, 0, 3, 0]);
        assert_eq!(input.len(), 7);
    }

    #[test]
    fn test_from_pronounces_empty() {
        let input = MeloInput::from_pronounces(&[]);
        assert_eq!(input.phones, vec![0]);
        assert!(!input.is_empty());
    }

    #[test]
    fn test_split_by_punctuation() {
        let chunks = split("你好, 世界. 今天天气很好.", 12);
        assert_eq!(chunks, vec!["你好, 世界.", "今天天气很好."]);
    }

    #[test]
    fn test_split_short_tail_merged() {
        assert_eq!(split("好的. a", 1), vec!["好的.a"]);
        assert_eq!(split("好的. ab", 1), vec!["好的.", "ab"]);
    }

    #[test]
    fn test_split_keeps_unterminated_text() {
        assert_eq!(split("hello world", 12), vec!["hello world"]);
        assert!(split("", 12).is_empty());
    }
}
