//! 文本层：规范化 + 分词
//!
//! ## 处理流程
//! 1. 数字展开（阿拉伯数字 → 中文读法）
//! 2. 标点归一、字符过滤、分隔符折叠
//! 3. 外部分词 + 词性标注，后处理英文片段

mod normalizer;
mod number;
mod rules;
mod tokenizer;
mod types;

pub use normalizer::{normalize, SentenceNormalizer};
pub use number::{expand_number, NumberExpander};
pub use rules::{is_cjk, CANONICAL_PUNCTUATIONS, CJK_BEGIN, CJK_END};
pub use tokenizer::{
    CharClassSegmenter, Segmenter, Tokenizer, ENGLISH_TAG, NUMERAL_TAG, UNKNOWN_TAG,
};
pub use types::{Language, Pronounce, Token, TokenKind};

pub(crate) use rules::is_canonical_punctuation;
pub(crate) use types::join_display;
