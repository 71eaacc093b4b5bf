//! 中英混合文本的 TTS 前端
//!
//! 输入任意句子，输出声学模型可直接使用的发音序列：
//! 1. [`text`]：数字展开、标点归一、分词与英文片段合并
//! 2. [`phone`]：查词典得到拼音 / ARPAbet 音节，再拆成音素 + 声调
//! 3. [`melo`]：切块，映射为 音素/声调/语言 整数序列
//!
//! [`Frontend`] 把上述步骤串起来，初始化后只读，可在线程间共享。

pub mod config;
pub mod frontend;
#[cfg(feature = "jieba")]
pub mod jieba;
pub mod melo;
pub mod phone;
pub mod text;

pub use config::FrontendConfig;
pub use frontend::Frontend;
#[cfg(feature = "jieba")]
pub use jieba::JiebaSegmenter;
pub use melo::MeloInput;
pub use phone::PronunciationDictionaries;
pub use text::{
    expand_number, normalize, CharClassSegmenter, Language, Pronounce, Segmenter, Token, TokenKind,
};
