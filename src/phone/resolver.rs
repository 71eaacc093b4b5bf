//! 发音解析
//!
//! 对每个词选择中文或英文策略，查词典得到音节，再交给 [`PhoneDecoder`]：
//! - 英文：大写查英文词表；未命中时按中文逐字处理
//! - 中文/其他：词表 → `词|词性` 表 → 逐字单字表（区间外字符读作 0 调字面量）

use std::time::Instant;

use tracing::{debug, warn};

use crate::phone::decoder::PhoneDecoder;
use crate::phone::dictionary::PronunciationDictionaries;
use crate::text::{join_display, Pronounce, Token, TokenKind, ENGLISH_TAG};

/// 发音解析器
pub struct PronunciationResolver<'a> {
    dictionaries: &'a PronunciationDictionaries,
    decoder: PhoneDecoder<'a>,
}

impl<'a> PronunciationResolver<'a> {
    pub fn new(dictionaries: &'a PronunciationDictionaries) -> Self {
        Self {
            dictionaries,
            decoder: PhoneDecoder::new(dictionaries),
        }
    }

    /// 把分词结果解析成有序的发音单元
    pub fn resolve(&self, tokens: &[Token]) -> Vec<Pronounce> {
        let start = Instant::now();
        let tokens = Self::spell_acronyms(tokens);

        let mut result = Vec::new();
        let mut syllable_log = String::new();

        for token in &tokens {
            match token.kind {
                TokenKind::English => {
                    if let Some(syllables) = self.english_syllables(&token.text) {
                        for syllable in syllables {
                            syllable_log.push_str(&format!("({})", syllable));
                            result.extend(PhoneDecoder::decode_english_syllable(syllable));
                        }
                        continue;
                    }
                    warn!("英文词 [{}] 不在词典中，按字符处理", token.text);
                }
                TokenKind::Chinese | TokenKind::Other => {}
            }

            for syllable in self.chinese_syllables(token) {
                syllable_log.push_str(&format!("({})", syllable));
                result.extend(self.decoder.decode_chinese_syllable(&syllable));
            }
        }

        debug!("拼音结果: [{}]", syllable_log);
        debug!(
            "发音结果，耗时 {}us: [{}]",
            start.elapsed().as_micros(),
            join_display(&result)
        );
        result
    }

    /// 全大写英文词按字母拼读：`NASA` -> `N.` `A.` `S.` `A.`
    fn spell_acronyms(tokens: &[Token]) -> Vec<Token> {
        let mut result = Vec::with_capacity(tokens.len());
        for token in tokens {
            let is_acronym = token.kind == TokenKind::English
                && !token.text.is_empty()
                && token.text.chars().all(|ch| ch.is_ascii_uppercase());
            if !is_acronym {
                result.push(token.clone());
                continue;
            }
            result.extend(token.text.chars().map(|ch| Token {
                text: format!("{}.", ch),
                tag: ENGLISH_TAG.to_string(),
                kind: TokenKind::English,
            }));
        }
        result
    }

    fn english_syllables(&self, word: &str) -> Option<Vec<&'a str>> {
        let entry = self.dictionaries.english_word(&word.to_uppercase())?;
        Some(entry.split(" - ").filter(|s| !s.is_empty()).collect())
    }

    fn chinese_syllables(&self, token: &Token) -> Vec<String> {
        let entry = self
            .dictionaries
            .chinese_word(&token.text)
            .or_else(|| self.dictionaries.tagged_word(&token.text, &token.tag));
        if let Some(entry) = entry {
            return entry
                .split(' ')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }

        if token.kind == TokenKind::Chinese && token.text.chars().count() > 1 {
            warn!("词 [{}|{}] 不在词典中，按单字读", token.text, token.tag);
        }
        token
            .text
            .chars()
            .map(|ch| match self.dictionaries.char_pinyin(ch) {
                Some(pinyin) => pinyin.to_string(),
                None => format!("{}0", ch),
            })
            .collect()
    }
}
