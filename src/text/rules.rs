//! 规范化规则定义
//!
//! 包含标准标点集合、全角/排版标点映射表、字符分类

use std::collections::{HashMap, HashSet};

/// CJK 统一表意文字区间起点
pub const CJK_BEGIN: u32 = 0x4E00;
/// CJK 统一表意文字区间终点（含）
pub const CJK_END: u32 = 0x9FA5;

/// 标准标点集合（规范化后只允许出现这些标点）
pub const CANONICAL_PUNCTUATIONS: [char; 6] = [',', '.', '!', '?', ':', ';'];

lazy_static::lazy_static! {
    /// 全局标点映射表（只读）
    pub static ref PUNCTUATION_MAP: PunctuationMap = PunctuationMap::new();
}

/// 标点映射
pub struct PunctuationMap {
    map: HashMap<char, char>,
    /// 标准标点集合（预计算，O(1) 查找）
    canonical: HashSet<char>,
}

impl PunctuationMap {
    pub fn new() -> Self {
        let map = HashMap::from([
            // 全角标点
            ('，', ','),
            ('。', '.'),
            ('！', '!'),
            ('？', '?'),
            ('：', ':'),
            ('；', ';'),
            // 顿号按逗号读
            ('、', ','),
            // 省略号
            ('…', '.'),
            // 连字符变体 -> 空格
            ('-', ' '),
            ('—', ' '),
        ]);

        let canonical: HashSet<char> = CANONICAL_PUNCTUATIONS.into_iter().collect();

        Self { map, canonical }
    }

    /// 映射单个字符，无映射时原样返回
    pub fn remap(&self, ch: char) -> char {
        self.map.get(&ch).copied().unwrap_or(ch)
    }

    /// 判断是否为标准标点
    pub fn is_canonical(&self, ch: char) -> bool {
        self.canonical.contains(&ch)
    }
}

impl Default for PunctuationMap {
    fn default() -> Self {
        Self::new()
    }
}

/// 判断是否为 CJK 统一表意文字（U+4E00 - U+9FA5）
pub fn is_cjk(ch: char) -> bool {
    (CJK_BEGIN..=CJK_END).contains(&(ch as u32))
}

/// 判断是否为标准标点
pub fn is_canonical_punctuation(ch: char) -> bool {
    PUNCTUATION_MAP.is_canonical(ch)
}

/// 判断是否为空格或标准标点
pub fn is_space_or_punctuation(ch: char) -> bool {
    ch == ' ' || is_canonical_punctuation(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_remap() {
        let map = PunctuationMap::new();
        assert_eq!(map.remap('，'), ',');
        assert_eq!(map.remap('。'), '.');
        assert_eq!(map.remap('、'), ',');
        assert_eq!(map.remap('…'), '.');
        assert_eq!(map.remap('—'), ' ');
        assert_eq!(map.remap('-'), ' ');
        assert_eq!(map.remap('好'), '好');
        assert_eq!(map.remap('a'), 'a');
    }

    #[test]
    fn test_canonical_punctuation() {
        for ch in CANONICAL_PUNCTUATIONS {
            assert!(is_canonical_punctuation(ch));
        }
        assert!(!is_canonical_punctuation('，'));
        assert!(!is_canonical_punctuation(' '));
        assert!(is_space_or_punctuation(' '));
    }

    #[test]
    fn test_is_cjk_range() {
        assert!(is_cjk('一'));
        assert!(is_cjk('\u{9FA5}'));
        assert!(!is_cjk('\u{9FA6}'));
        assert!(!is_cjk('\u{4DFF}'));
        assert!(!is_cjk('A'));
    }
}
