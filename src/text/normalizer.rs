//! 句子规范化
//!
//! 固定顺序的改写流程，输出可直接送入分词：
//! 1. 数字展开
//! 2. 标点映射（全角 → 半角，连字符 → 空格）
//! 3. 删除不可读字符
//! 4. 折叠连续的空格/标点
//! 5. 去除首尾空格/标点，补句号
//! 6. 汉字之间的空格改为逗号
//! 7. 标点后补空格
//! 8. 英文小写字母与大写字母之间补空格

use std::time::Instant;

use tracing::debug;

use crate::text::number::NumberExpander;
use crate::text::rules::{
    is_canonical_punctuation, is_cjk, is_space_or_punctuation, PUNCTUATION_MAP,
};

/// 句子规范化器（无状态）
pub struct SentenceNormalizer;

impl SentenceNormalizer {
    /// 规范化句子
    ///
    /// 纯函数，不可失败
    pub fn normalize(sentence: &str) -> String {
        let start = Instant::now();

        let expanded = NumberExpander::expand(sentence);
        let chars: Vec<char> = expanded.chars().collect();
        let chars = Self::remap_punctuation(&chars);
        let chars = Self::remove_unrecognized_chars(&chars);
        let chars = Self::collapse_separators(&chars);
        let chars = Self::strip_and_terminate(&chars);
        let chars = Self::replace_space_between_chinese(chars);
        let chars = Self::append_space_after_punctuation(&chars);
        let chars = Self::split_lower_upper(&chars);
        let result: String = chars.into_iter().collect();

        debug!(
            "规范化完成，耗时 {}us: [{}] -> [{}]",
            start.elapsed().as_micros(),
            sentence,
            result
        );
        result
    }

    fn remap_punctuation(chars: &[char]) -> Vec<char> {
        chars.iter().map(|&ch| PUNCTUATION_MAP.remap(ch)).collect()
    }

    /// 只保留汉字、字母、空格、标准标点
    fn remove_unrecognized_chars(chars: &[char]) -> Vec<char> {
        chars
            .iter()
            .copied()
            .filter(|&ch| is_cjk(ch) || ch.is_alphabetic() || is_space_or_punctuation(ch))
            .collect()
    }

    /// 连续的空格/标点折叠为一个字符
    ///
    /// 片段内有标点时取最右侧的标点，否则取空格
    fn collapse_separators(chars: &[char]) -> Vec<char> {
        let mut result = Vec::with_capacity(chars.len());
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];
            if !is_space_or_punctuation(ch) {
                result.push(ch);
                i += 1;
                continue;
            }

            let mut representative = ch;
            while i < chars.len() && is_space_or_punctuation(chars[i]) {
                if chars[i] != ' ' {
                    representative = chars[i];
                }
                i += 1;
            }
            result.push(representative);
        }

        result
    }

    /// 去除首尾空格/标点，非空时以句号结尾
    fn strip_and_terminate(chars: &[char]) -> Vec<char> {
        let begin = chars.iter().position(|&ch| !is_space_or_punctuation(ch));
        let end = chars.iter().rposition(|&ch| !is_space_or_punctuation(ch));

        let mut result = match (begin, end) {
            (Some(begin), Some(end)) => chars[begin..=end].to_vec(),
            _ => return Vec::new(),
        };
        if result.last() != Some(&'.') {
            result.push('.');
        }
        result
    }

    /// 汉字之间的单个空格视为隐式分句，改为逗号
    fn replace_space_between_chinese(mut chars: Vec<char>) -> Vec<char> {
        for i in 1..chars.len().saturating_sub(1) {
            if chars[i] == ' ' && is_cjk(chars[i - 1]) && is_cjk(chars[i + 1]) {
                chars[i] = ',';
            }
        }
        chars
    }

    fn append_space_after_punctuation(chars: &[char]) -> Vec<char> {
        let mut result = Vec::with_capacity(chars.len() * 2);
        for (i, &ch) in chars.iter().enumerate() {
            result.push(ch);
            if is_canonical_punctuation(ch) && chars.get(i + 1).is_some_and(|&next| next != ' ') {
                result.push(' ');
            }
        }
        result
    }

    /// `helloWorld` -> `hello World`
    fn split_lower_upper(chars: &[char]) -> Vec<char> {
        let mut result = Vec::with_capacity(chars.len() * 2);
        for (i, &ch) in chars.iter().enumerate() {
            result.push(ch);
            if ch.is_lowercase() && chars.get(i + 1).is_some_and(|next| next.is_uppercase()) {
                result.push(' ');
            }
        }
        result
    }
}

/// 便捷函数：规范化句子
pub fn normalize(sentence: &str) -> String {
    SentenceNormalizer::normalize(sentence)
}
