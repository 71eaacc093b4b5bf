//! 音节 → 音素
//!
//! 中文：带调拼音查拼音音素表，拆成声母/韵母两个单元；
//! 英文：音标码末位数字为重音，加一后作为声调

use tracing::{trace, warn};

use crate::phone::dictionary::PronunciationDictionaries;
use crate::text::{Language, Pronounce};

/// 音素解码器
pub struct PhoneDecoder<'a> {
    dictionaries: &'a PronunciationDictionaries,
}

impl<'a> PhoneDecoder<'a> {
    pub fn new(dictionaries: &'a PronunciationDictionaries) -> Self {
        Self { dictionaries }
    }

    /// 解码带调中文音节（如 `zhong1`）
    ///
    /// 音素表命中时返回两个单元（声母、韵母），否则原样返回一个单元
    pub fn decode_chinese_syllable(&self, syllable: &str) -> Vec<Pronounce> {
        let Some(last) = syllable.chars().last() else {
            return Vec::new();
        };
        let (pinyin, tone) = match last.to_digit(10) {
            Some(tone) => (&syllable[..syllable.len() - last.len_utf8()], tone),
            None => {
                warn!("音节 [{}] 缺少声调数字，按 0 调处理", syllable);
                (syllable, 0)
            }
        };

        match self
            .dictionaries
            .pinyin_phones(pinyin)
            .and_then(|phones| phones.split_once(' '))
        {
            Some((initial, final_)) => vec![
                Pronounce::new(initial, tone, Language::Chinese),
                Pronounce::new(final_, tone, Language::Chinese),
            ],
            None => {
                // 空格、标点等字面量本来就不在音素表里
                if pinyin.chars().any(char::is_alphanumeric) {
                    warn!("拼音 [{}] 不在音素表中，原样输出", pinyin);
                } else {
                    trace!("字面量 [{}] 原样输出", pinyin);
                }
                vec![Pronounce::new(pinyin, tone, Language::Chinese)]
            }
        }
    }

    /// 解码英文音节（如 `L IY1`），每个音标码一个单元
    pub fn decode_english_syllable(syllable: &str) -> Vec<Pronounce> {
        syllable
            .split(' ')
            .filter(|code| !code.is_empty())
            .map(|code| {
                let (code, tone) = match code.chars().last().and_then(|ch| ch.to_digit(10)) {
                    Some(stress) => (&code[..code.len() - 1], stress + 1),
                    None => (code, 0),
                };
                Pronounce::new(code.to_lowercase(), tone, Language::English)
            })
            .collect()
    }
}
