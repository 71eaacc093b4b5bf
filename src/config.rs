// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 应用目录名（配置目录与数据目录下共用）
pub const APP_DIR_NAME: &str = "MeloFrontend";
/// 配置文件名
pub const CONFIG_FILE_NAME: &str = "frontend.json";

/// 覆盖数据目录的环境变量
pub const LANGUAGE_DATA_ROOT_ENV: &str = "MELO_LANGUAGE_DATA_ROOT";
/// 覆盖 jieba 用户词典的环境变量
pub const JIEBA_USER_DICT_ENV: &str = "MELO_JIEBA_USER_DICT";

/// 默认切块最小长度（UTF-8 字节）
pub const DEFAULT_CHUNK_MIN_LEN: usize = 12;

// ============================================================================
// 前端配置
// ============================================================================

/// 前端配置
///
/// 字段缺失时取默认值，旧配置文件可直接读取
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// 五个词典数据文件所在目录
    pub language_data_root: PathBuf,
    /// jieba 用户词典（可选）
    pub jieba_user_dict: Option<PathBuf>,
    /// 切块最小长度
    pub chunk_min_len: usize,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            language_data_root: default_language_data_root(),
            jieba_user_dict: None,
            chunk_min_len: DEFAULT_CHUNK_MIN_LEN,
        }
    }
}

/// `<数据目录>/MeloFrontend/language`，取不到数据目录时退回当前目录
fn default_language_data_root() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
        .join("language")
}

impl FrontendConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// 读取默认位置的配置文件（不存在则用默认值），再应用环境变量覆盖
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        let config = if path.exists() {
            Self::load_from_path(&path)?
        } else {
            tracing::info!("配置文件不存在，使用默认配置");
            Self::default()
        };

        Ok(config.with_env_overrides(|key| std::env::var_os(key)))
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("读取配置文件 {:?} 失败", path))?;
        let config: FrontendConfig = serde_json::from_str(&content)
            .with_context(|| format!("解析配置文件 {:?} 失败", path))?;
        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).with_context(|| format!("写入配置文件 {:?} 失败", path))?;
        tracing::info!("配置已保存到: {:?}", path);
        Ok(())
    }

    /// 应用环境变量覆盖，`lookup` 一般为 `std::env::var_os`
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        match lookup(LANGUAGE_DATA_ROOT_ENV) {
            Some(root) if !root.is_empty() => {
                tracing::info!("{} 覆盖数据目录: {:?}", LANGUAGE_DATA_ROOT_ENV, root);
                self.language_data_root = PathBuf::from(root);
            }
            _ if self.language_data_root == default_language_data_root() => {
                tracing::warn!(
                    "未设置 {}，使用默认数据目录: {:?}",
                    LANGUAGE_DATA_ROOT_ENV,
                    self.language_data_root
                );
            }
            _ => {}
        }

        if let Some(dict) = lookup(JIEBA_USER_DICT_ENV).filter(|dict| !dict.is_empty()) {
            tracing::info!("{} 覆盖 jieba 用户词典: {:?}", JIEBA_USER_DICT_ENV, dict);
            self.jieba_user_dict = Some(PathBuf::from(dict));
        }

        self
    }
}
