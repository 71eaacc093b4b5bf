//! jieba 分词器
//!
//! 生产环境使用的 [`Segmenter`] 实现：jieba-rs 内置词典 + 可选用户词典，开启 HMM 新词发现

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use jieba_rs::Jieba;
use tracing::{debug, info};

use crate::text::Segmenter;

/// jieba 分词 + 词性标注
pub struct JiebaSegmenter {
    jieba: Jieba,
}

impl JiebaSegmenter {
    /// 创建分词器
    ///
    /// # Arguments
    /// * `user_dict` - 用户词典路径（jieba 词典格式：`词 词频 词性`）
    pub fn new(user_dict: Option<&Path>) -> Result<Self> {
        let start = Instant::now();
        let mut jieba = Jieba::new();

        if let Some(path) = user_dict {
            let file =
                File::open(path).with_context(|| format!("打开 jieba 用户词典 {:?} 失败", path))?;
            jieba
                .load_dict(&mut BufReader::new(file))
                .with_context(|| format!("加载 jieba 用户词典 {:?} 失败", path))?;
            info!("已加载 jieba 用户词典: {:?}", path);
        }

        debug!("jieba 初始化完成，耗时 {}us", start.elapsed().as_micros());
        Ok(Self { jieba })
    }
}

impl Segmenter for JiebaSegmenter {
    fn tag(&self, sentence: &str) -> Vec<(String, String)> {
        self.jieba
            .tag(sentence, true)
            .into_iter()
            .map(|tag| (tag.word.to_string(), tag.tag.to_string()))
            .collect()
    }
}
