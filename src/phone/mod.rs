//! 发音层：词典查询 + 音素拆分

mod decoder;
mod dictionary;
mod resolver;

pub use decoder::PhoneDecoder;
pub use dictionary::{
    parse_english_mapper, parse_space_mapper, parse_unicode_pinyin, PronunciationDictionaries,
    CHINESE_PINYIN_PHONE_FILE_NAME, CHINESE_WORDS_PINYIN_FILE_NAME, CJK_CHAR_COUNT,
    ENGLISH_WORDS_PINYIN_FILE_NAME, TAGGING_WORDS_PINYIN_FILE_NAME, UNICODE_PINYIN_FILE_NAME,
};
pub use resolver::PronunciationResolver;

#[cfg(test)]
pub(crate) use dictionary::{sample_dictionaries, write_sample_data_files};
