//! 前端入口
//!
//! [`Frontend`] 持有只读的词典与分词器，初始化后可在多线程间共享：
//! 规范化 → 分词 → 发音解析 → 模型输入

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::{FrontendConfig, DEFAULT_CHUNK_MIN_LEN};
use crate::melo::{self, MeloInput};
use crate::phone::{PronunciationDictionaries, PronunciationResolver};
use crate::text::{Pronounce, Segmenter, SentenceNormalizer, Token, Tokenizer};

pub struct Frontend {
    dictionaries: PronunciationDictionaries,
    segmenter: Box<dyn Segmenter>,
    chunk_min_len: usize,
}

impl Frontend {
    pub fn new(dictionaries: PronunciationDictionaries, segmenter: impl Segmenter + 'static) -> Self {
        Self {
            dictionaries,
            segmenter: Box::new(segmenter),
            chunk_min_len: DEFAULT_CHUNK_MIN_LEN,
        }
    }

    /// 按配置加载词典并创建分词器
    pub fn from_config(config: &FrontendConfig) -> Result<Self> {
        let start = Instant::now();
        let dictionaries = PronunciationDictionaries::load(&config.language_data_root)
            .with_context(|| format!("加载词典失败: {:?}", config.language_data_root))?;
        let segmenter = build_segmenter(config)?;

        info!("前端初始化完成，耗时 {}ms", start.elapsed().as_millis());
        Ok(Self {
            dictionaries,
            segmenter,
            chunk_min_len: config.chunk_min_len,
        })
    }

    pub fn with_chunk_min_len(mut self, chunk_min_len: usize) -> Self {
        self.chunk_min_len = chunk_min_len;
        self
    }

    pub fn dictionaries(&self) -> &PronunciationDictionaries {
        &self.dictionaries
    }

    pub fn normalize(&self, sentence: &str) -> String {
        SentenceNormalizer::normalize(sentence)
    }

    pub fn tokenize(&self, sentence: &str) -> Vec<Token> {
        Tokenizer::tokenize(self.segmenter.as_ref(), sentence)
    }

    /// 分词并解析发音（输入应已规范化）
    pub fn pronounce(&self, sentence: &str) -> Vec<Pronounce> {
        let tokens = self.tokenize(sentence);
        PronunciationResolver::new(&self.dictionaries).resolve(&tokens)
    }

    /// 规范化后按标点切块
    pub fn split(&self, sentence: &str) -> Vec<String> {
        let chunks = melo::split(&self.normalize(sentence), self.chunk_min_len);
        debug!("切块结果: {:?}", chunks);
        chunks
    }

    /// 单个文本块 → 模型输入，块前后各补一个空格
    pub fn preprocess(&self, chunk: &str) -> MeloInput {
        let padded = format!(" {} ", chunk);
        MeloInput::from_pronounces(&self.pronounce(&padded))
    }
}

#[cfg(feature = "jieba")]
fn build_segmenter(config: &FrontendConfig) -> Result<Box<dyn Segmenter>> {
    let segmenter = crate::jieba::JiebaSegmenter::new(config.jieba_user_dict.as_deref())?;
    Ok(Box::new(segmenter))
}

#[cfg(not(feature = "jieba"))]
fn build_segmenter(config: &FrontendConfig) -> Result<Box<dyn Segmenter>> {
    if let Some(dict) = &config.jieba_user_dict {
        tracing::warn!("未启用 jieba 特性，忽略用户词典: {:?}", dict);
    }
    Ok(Box::new(crate::text::CharClassSegmenter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phone::{sample_dictionaries, write_sample_data_files, CJK_CHAR_COUNT};
    use crate::text::{CharClassSegmenter, Language, TokenKind};

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    }

    /// 对固定句子给出 jieba 风格的切分，其余按字符类切分
    fn stub_segmenter(sentence: &str) -> Vec<(String, String)> {
        let tagged: &[(&str, &str)] = match sentence.trim() {
            "Lisa的电话是一万二千三百四十五." => &[
                ("Lisa", "eng"),
                ("的", "uj"),
                ("电话", "n"),
                ("是", "v"),
                ("一万二千三百四十五", "m"),
                (".", "x"),
            ],
            _ => return CharClassSegmenter.tag(sentence),
        };
        tagged
            .iter()
            .map(|(word, tag)| (word.to_string(), tag.to_string()))
            .collect()
    }

    fn frontend() -> Frontend {
        Frontend::new(sample_dictionaries(), stub_segmenter)
    }

    #[test]
    fn test_end_to_end_mixed_sentence() {
        init_tracing();
        let frontend = frontend();

        let normalized = frontend.normalize("Lisa的电话是12345");
        assert_eq!(normalized, "Lisa的电话是一万二千三百四十五.");

        let tokens = frontend.tokenize(&normalized);
        assert_eq!(tokens[0].text, "Lisa");
        assert_eq!(tokens[0].kind, TokenKind::English);
        assert_eq!(tokens[2].text, "电话");

        let units = frontend.pronounce(&normalized);
        let english: Vec<&str> = units
            .iter()
            .take_while(|u| u.language == Language::English)
            .map(|u| u.phone.as_str())
            .collect();
        assert_eq!(english, vec!["l", "iy", "s", "ah"]);
        assert!(units[4..].iter().all(|u| u.language == Language::Chinese));
        assert_eq!(units.last().map(|u| u.phone.as_str()), Some("."));
    }

    #[test]
    fn test_tone_ranges() {
        let frontend = frontend();
        let normalized = frontend.normalize("Hello, 你好! 中国有1000万人.");
        for unit in frontend.pronounce(&normalized) {
            match unit.language {
                Language::Chinese => assert!(unit.tone <= 4, "{}", unit),
                Language::English => assert!(unit.tone <= 5, "{}", unit),
                Language::None => panic!("unexpected unit {}", unit),
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let frontend = frontend();
        assert_eq!(frontend.normalize(""), "");
        assert!(frontend.pronounce("").is_empty());
        assert!(frontend.split("").is_empty());
    }

    #[test]
    fn test_preprocess_pads_chunk() {
        let frontend = frontend();
        let input = frontend.preprocess("你好.");

        // 空格 n i h ao . 空格，再插入空白
        assert_eq!(input.len(), 2 * 7 + 1);
        assert_eq!(input.phones[1], melo::symbol_id(" "));
        assert_eq!(input.phones[3], melo::symbol_id("n"));
        assert_eq!(input.phones[13], melo::symbol_id(" "));
        assert!(input.langs.iter().all(|&id| id == 0 || id == melo::ZH_LANG_ID));
        assert_eq!(input.tones.len(), input.phones.len());
    }

    #[test]
    fn test_preprocess_english_tone_offset() {
        let frontend = frontend();
        let input = frontend.preprocess("Lisa");

        // [0, ' ', 0, l, 0, iy, ...]
        assert_eq!(input.phones[3], melo::symbol_id("l"));
        assert_eq!(input.tones[3], melo::EN_TONE_START);
        assert_eq!(input.tones[5], melo::EN_TONE_START + 2);
    }

    #[test]
    fn test_split_uses_chunk_min_len() {
        let frontend = frontend().with_chunk_min_len(1);
        assert_eq!(frontend.split("你好，世界！"), vec!["你好,", "世界."]);
    }

    #[test]
    fn test_deterministic() {
        let frontend = frontend();
        let normalized = frontend.normalize("Lisa的电话是12345");
        let first = frontend.pronounce(&normalized);
        for _ in 0..3 {
            assert_eq!(frontend.pronounce(&normalized), first);
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let frontend = frontend();
        let normalized = frontend.normalize("Lisa的电话是12345");
        let expected = frontend.pronounce(&normalized);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| frontend.pronounce(&normalized)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    #[test]
    fn test_from_config() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        write_sample_data_files(dir.path(), CJK_CHAR_COUNT);

        let config = FrontendConfig {
            language_data_root: dir.path().to_path_buf(),
            jieba_user_dict: None,
            chunk_min_len: 5,
        };
        let frontend = Frontend::from_config(&config).unwrap();
        assert_eq!(frontend.chunk_min_len, 5);
        assert!(frontend.dictionaries().english_word("LISA").is_some());
        assert!(!frontend.pronounce(&frontend.normalize("Lisa")).is_empty());
    }

    #[test]
    fn test_from_config_missing_data() {
        let dir = tempfile::tempdir().unwrap();
        let config = FrontendConfig {
            language_data_root: dir.path().join("missing"),
            ..FrontendConfig::default()
        };
        assert!(Frontend::from_config(&config).is_err());
    }
}
