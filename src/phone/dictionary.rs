//! 发音词典
//!
//! 五张只读表，启动时加载一次：
//! - 单字拼音表：按码位排列，覆盖 U+4E00 - U+9FA5，每个码位一行
//! - 中文词 → 拼音
//! - `词|词性` → 拼音
//! - 英文词 → 音标音节（`" - "` 分隔）
//! - 拼音 → 声母/韵母音素对

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::text::{CJK_BEGIN, CJK_END};

pub const UNICODE_PINYIN_FILE_NAME: &str = "unicode.pinyin";
pub const CHINESE_PINYIN_PHONE_FILE_NAME: &str = "chinese_pinyin.phone";
pub const CHINESE_WORDS_PINYIN_FILE_NAME: &str = "chinese_words.pinyin";
pub const TAGGING_WORDS_PINYIN_FILE_NAME: &str = "tagging_words.pinyin";
pub const ENGLISH_WORDS_PINYIN_FILE_NAME: &str = "english_words.pinyin";

/// 单字拼音表的条目数
pub const CJK_CHAR_COUNT: usize = (CJK_END - CJK_BEGIN + 1) as usize;

/// 发音词典集合（构造后只读）
#[derive(Debug, Clone)]
pub struct PronunciationDictionaries {
    unicode_pinyin: Vec<String>,
    pinyin_phone: HashMap<String, String>,
    chinese_words: HashMap<String, String>,
    tagged_words: HashMap<String, String>,
    english_words: HashMap<String, String>,
}

impl PronunciationDictionaries {
    /// 由已解析的表构造
    ///
    /// 单字拼音表条目数必须恰好等于 CJK 区间长度
    pub fn new(
        unicode_pinyin: Vec<String>,
        pinyin_phone: HashMap<String, String>,
        chinese_words: HashMap<String, String>,
        tagged_words: HashMap<String, String>,
        english_words: HashMap<String, String>,
    ) -> Result<Self> {
        if unicode_pinyin.len() != CJK_CHAR_COUNT {
            anyhow::bail!(
                "单字拼音表条目数 {} 与 CJK 区间长度 {} 不符",
                unicode_pinyin.len(),
                CJK_CHAR_COUNT
            );
        }

        Ok(Self {
            unicode_pinyin,
            pinyin_phone,
            chinese_words,
            tagged_words,
            english_words,
        })
    }

    /// 从数据目录加载全部词典
    ///
    /// 任一文件缺失或格式错误都会失败，调用方应终止初始化
    pub fn load(root: &Path) -> Result<Self> {
        let start = Instant::now();
        info!("加载发音词典，目录: {:?}", root);

        let unicode_content = read_data_file(root, UNICODE_PINYIN_FILE_NAME)?;
        let unicode_pinyin = parse_unicode_pinyin(&unicode_content);
        let pinyin_phone = load_mapper(root, CHINESE_PINYIN_PHONE_FILE_NAME, parse_space_mapper)?;
        let chinese_words = load_mapper(root, CHINESE_WORDS_PINYIN_FILE_NAME, parse_space_mapper)?;
        let tagged_words = load_mapper(root, TAGGING_WORDS_PINYIN_FILE_NAME, parse_space_mapper)?;
        let english_words =
            load_mapper(root, ENGLISH_WORDS_PINYIN_FILE_NAME, parse_english_mapper)?;

        let dictionaries = Self::new(
            unicode_pinyin,
            pinyin_phone,
            chinese_words,
            tagged_words,
            english_words,
        )
        .with_context(|| format!("校验 {} 失败", UNICODE_PINYIN_FILE_NAME))?;

        info!(
            "发音词典加载完成，耗时 {}us: 拼音音素 {} 条，中文词 {} 条，标注词 {} 条，英文词 {} 条",
            start.elapsed().as_micros(),
            dictionaries.pinyin_phone.len(),
            dictionaries.chinese_words.len(),
            dictionaries.tagged_words.len(),
            dictionaries.english_words.len()
        );
        Ok(dictionaries)
    }

    /// 单字默认拼音（仅 CJK 区间内）
    pub fn char_pinyin(&self, ch: char) -> Option<&str> {
        let code = ch as u32;
        if !(CJK_BEGIN..=CJK_END).contains(&code) {
            return None;
        }
        self.unicode_pinyin
            .get((code - CJK_BEGIN) as usize)
            .map(String::as_str)
    }

    /// 拼音（不带声调）→ 音素对
    pub fn pinyin_phones(&self, pinyin: &str) -> Option<&str> {
        self.pinyin_phone.get(pinyin).map(String::as_str)
    }

    /// 中文词 → 拼音
    pub fn chinese_word(&self, word: &str) -> Option<&str> {
        self.chinese_words.get(word).map(String::as_str)
    }

    /// `词|词性` → 拼音
    pub fn tagged_word(&self, word: &str, tag: &str) -> Option<&str> {
        self.tagged_words
            .get(&format!("{}|{}", word, tag))
            .map(String::as_str)
    }

    /// 英文词（大写）→ 音标音节
    pub fn english_word(&self, word: &str) -> Option<&str> {
        self.english_words.get(word).map(String::as_str)
    }
}

fn read_data_file(root: &Path, file_name: &str) -> Result<String> {
    let path = root.join(file_name);
    debug!("读取词典文件: {:?}", path);
    std::fs::read_to_string(&path).with_context(|| format!("读取词典文件 {:?} 失败", path))
}

fn load_mapper(
    root: &Path,
    file_name: &str,
    parse: fn(&str) -> Result<HashMap<String, String>>,
) -> Result<HashMap<String, String>> {
    let content = read_data_file(root, file_name)?;
    parse(&content).with_context(|| format!("解析词典文件 {} 失败", file_name))
}

/// 解析单字拼音表：每行一个码位，去掉末尾空行
pub fn parse_unicode_pinyin(content: &str) -> Vec<String> {
    let mut lines: Vec<String> = content.lines().map(|line| line.trim().to_string()).collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// 解析 `键 值` 格式（按第一个空格切分）
pub fn parse_space_mapper(content: &str) -> Result<HashMap<String, String>> {
    parse_mapper(content, " ")
}

/// 解析英文词表 `键  值` 格式（按第一个双空格切分）
pub fn parse_english_mapper(content: &str) -> Result<HashMap<String, String>> {
    parse_mapper(content, "  ")
}

fn parse_mapper(content: &str, separator: &str) -> Result<HashMap<String, String>> {
    let mut mapper = HashMap::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(separator) else {
            anyhow::bail!("第 {} 行缺少分隔符 {:?}: {}", index + 1, separator, line);
        };
        mapper.insert(key.to_string(), value.to_string());
    }
    Ok(mapper)
}

#[cfg(test)]
pub(crate) fn sample_dictionaries() -> PronunciationDictionaries {
    fn mapper(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    let mut unicode_pinyin = vec!["a1".to_string(); CJK_CHAR_COUNT];
    for (ch, pinyin) in [
        ('的', "de1"),
        ('电', "dian4"),
        ('话', "hua4"),
        ('是', "shi4"),
        ('一', "yi1"),
        ('二', "er4"),
        ('三', "san1"),
        ('四', "si4"),
        ('五', "wu3"),
        ('十', "shi2"),
        ('百', "bai3"),
        ('千', "qian1"),
        ('万', "wan4"),
        ('你', "ni3"),
        ('好', "hao3"),
        ('中', "zhong1"),
        ('国', "guo2"),
    ] {
        unicode_pinyin[(ch as u32 - CJK_BEGIN) as usize] = pinyin.to_string();
    }

    let pinyin_phone = mapper(&[
        ("a", "AA a"),
        ("de", "d e"),
        ("dian", "d ian"),
        ("hua", "h ua"),
        ("shi", "sh i"),
        ("yi", "y i"),
        ("san", "s an"),
        ("si", "s i"),
        ("wu", "w u"),
        ("bai", "b ai"),
        ("qian", "q ian"),
        ("wan", "w an"),
        ("ni", "n i"),
        ("hao", "h ao"),
        ("zhong", "zh ong"),
        ("guo", "g uo"),
    ]);
    let chinese_words = mapper(&[("电话", "dian4 hua4"), ("你好", "ni2 hao3")]);
    let tagged_words = mapper(&[("中国|ns", "zhong1 guo2")]);
    let english_words = mapper(&[
        ("LISA", "L IY1 - S AH0"),
        ("HELLO", "HH AH0 - L OW1"),
        ("A.", "EY1"),
        ("N.", "EH1 N"),
    ]);

    match PronunciationDictionaries::new(
        unicode_pinyin,
        pinyin_phone,
        chinese_words,
        tagged_words,
        english_words,
    ) {
        Ok(dictionaries) => dictionaries,
        Err(err) => panic!("sample dictionaries: {err}"),
    }
}

/// 在 `root` 下写出一套最小的数据文件，单字表写 `unicode_lines` 行
#[cfg(test)]
pub(crate) fn write_sample_data_files(root: &Path, unicode_lines: usize) {
    let unicode: String = (0..unicode_lines).map(|_| "a1\n").collect();
    std::fs::write(root.join(UNICODE_PINYIN_FILE_NAME), unicode).unwrap();
    std::fs::write(root.join(CHINESE_PINYIN_PHONE_FILE_NAME), "a AA a\nzhong zh ong\n").unwrap();
    std::fs::write(root.join(CHINESE_WORDS_PINYIN_FILE_NAME), "电话 dian4 hua4\n").unwrap();
    std::fs::write(root.join(TAGGING_WORDS_PINYIN_FILE_NAME), "中国|ns zhong1 guo2\n").unwrap();
    std::fs::write(
        root.join(ENGLISH_WORDS_PINYIN_FILE_NAME),
        "LISA  L IY1 - S AH0\r\nOK  OW2 - K EY1\n",
    )
    .unwrap();
}
