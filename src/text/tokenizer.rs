//! 分词适配层
//!
//! 分词 + 词性标注由外部分词器提供（[`Segmenter`]），本层只做后处理：
//! - 标签为 `x` 的单个英文字母改标为 `eng`
//! - 夹在两个 `eng` 之间的空格去掉，让英文片段连读
//! - 给每个词一次性打上语言分类 [`TokenKind`]

use tracing::debug;

use crate::text::rules::is_cjk;
use crate::text::types::{join_display, Token, TokenKind};

/// 英文词标签
pub const ENGLISH_TAG: &str = "eng";
/// 未知/符号标签
pub const UNKNOWN_TAG: &str = "x";
/// 数词标签
pub const NUMERAL_TAG: &str = "m";

/// 外部分词 + 词性标注能力
///
/// 输入一句话，按原文顺序返回 `(词, 词性)` 序列
pub trait Segmenter: Send + Sync {
    fn tag(&self, sentence: &str) -> Vec<(String, String)>;
}

impl<F> Segmenter for F
where
    F: Fn(&str) -> Vec<(String, String)> + Send + Sync,
{
    fn tag(&self, sentence: &str) -> Vec<(String, String)> {
        self(sentence)
    }
}

/// 字符类别
#[derive(Debug, Clone, Copy, PartialEq)]
enum CharClass {
    /// 汉字序列
    Chinese,
    /// ASCII 字母序列
    Letter,
    /// ASCII 数字序列
    Digit,
    /// 空白、标点等，逐字符成词
    Single,
}

/// 按字符类别切分的分词器
///
/// 不依赖词典，结果确定；在未启用 jieba 时作为默认分词器
#[derive(Debug, Clone, Copy, Default)]
pub struct CharClassSegmenter;

impl CharClassSegmenter {
    fn classify_char(ch: char) -> CharClass {
        if ch.is_ascii_alphabetic() {
            CharClass::Letter
        } else if ch.is_ascii_digit() {
            CharClass::Digit
        } else if is_cjk(ch) {
            CharClass::Chinese
        } else {
            CharClass::Single
        }
    }

    fn tag_for(class: CharClass) -> &'static str {
        match class {
            CharClass::Letter => ENGLISH_TAG,
            CharClass::Digit => NUMERAL_TAG,
            CharClass::Chinese | CharClass::Single => UNKNOWN_TAG,
        }
    }
}

impl Segmenter for CharClassSegmenter {
    fn tag(&self, sentence: &str) -> Vec<(String, String)> {
        let mut tokens = Vec::new();
        let mut current_class: Option<CharClass> = None;
        let mut current_text = String::new();

        for ch in sentence.chars() {
            let class = Self::classify_char(ch);

            // 类型切换或单字符类，保存当前 token
            if let Some(prev) = current_class {
                if prev != class || class == CharClass::Single {
                    tokens.push((
                        std::mem::take(&mut current_text),
                        Self::tag_for(prev).to_string(),
                    ));
                }
            }
            current_text.push(ch);
            current_class = Some(class);
        }

        if let Some(class) = current_class {
            tokens.push((current_text, Self::tag_for(class).to_string()));
        }

        tokens
    }
}

/// 分词适配器
pub struct Tokenizer;

impl Tokenizer {
    /// 调用外部分词器并做后处理
    pub fn tokenize(segmenter: &dyn Segmenter, sentence: &str) -> Vec<Token> {
        let mut tagged = segmenter.tag(sentence);

        for (text, tag) in tagged.iter_mut() {
            if Self::is_single_letter(text, tag) {
                *tag = ENGLISH_TAG.to_string();
            }
        }

        let merged = Self::merge_english_runs(tagged);
        let tokens: Vec<Token> = merged
            .into_iter()
            .map(|(text, tag)| {
                let kind = Self::classify(&text, &tag);
                Token { text, tag, kind }
            })
            .collect();

        debug!("分词结果: [{}]", join_display(&tokens));
        tokens
    }

    fn is_single_letter(text: &str, tag: &str) -> bool {
        let mut chars = text.chars();
        tag == UNKNOWN_TAG
            && matches!((chars.next(), chars.next()), (Some(ch), None) if ch.is_ascii_alphabetic())
    }

    /// 去掉两侧都是 `eng` 的空格（首尾 token 始终保留）
    fn merge_english_runs(tagged: Vec<(String, String)>) -> Vec<(String, String)> {
        if tagged.len() < 3 {
            return tagged;
        }

        let last = tagged.len() - 1;
        let keep: Vec<bool> = (0..tagged.len())
            .map(|i| {
                if i == 0 || i == last {
                    return true;
                }
                !(tagged[i].0 == " "
                    && tagged[i - 1].1 == ENGLISH_TAG
                    && tagged[i + 1].1 == ENGLISH_TAG)
            })
            .collect();

        tagged
            .into_iter()
            .zip(keep)
            .filter_map(|(token, keep)| keep.then_some(token))
            .collect()
    }

    fn classify(text: &str, tag: &str) -> TokenKind {
        if tag == ENGLISH_TAG {
            TokenKind::English
        } else if text.chars().any(is_cjk) {
            TokenKind::Chinese
        } else {
            TokenKind::Other
        }
    }
}
