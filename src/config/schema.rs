use std::path::PathBuf;

use color_eyre::eyre::{Context, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::i18n::Language;

/// 全局配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default: DefaultConfig,
}

/// 默认设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultConfig {
    /// Interface language: "en" (default) or "pt".
    /// An empty value falls back to the `LANG` environment variable.
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for DefaultConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

/// 默认配置 TOML 模板
pub(crate) const DEFAULT_CONFIG_TOML: &str = r#"[default]
language = "en"     # Interface language: "en" or "pt"
"#;

impl Config {
    /// 返回 msgcast 主目录: `~/.msgcast`
    pub fn home_dir() -> Result<PathBuf> {
        let base_dirs = directories::BaseDirs::new()
            .ok_or_else(|| color_eyre::eyre::eyre!("无法获取 home 目录"))?;
        Ok(base_dirs.home_dir().join(".msgcast"))
    }

    /// 返回配置文件路径: `~/.msgcast/config.toml`
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("config.toml"))
    }

    /// 返回日志目录: `~/.msgcast/logs`
    pub fn log_dir() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("logs"))
    }

    pub fn language(&self) -> Language {
        Language::detect(&self.default.language)
    }

    /// 加载配置，如果配置文件不存在则创建默认配置
    pub fn load_or_init() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::init_at(&config_path)?;
        Self::load_from_path(&config_path)
    }

    /// 在指定路径写入默认配置（已存在则不动），返回是否新建
    pub fn init_at(path: &std::path::Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).wrap_err("创建配置目录失败")?;
        }
        std::fs::write(path, DEFAULT_CONFIG_TOML).wrap_err("写入默认配置失败")?;
        Ok(true)
    }

    /// 从指定路径加载配置（figment 多层合并）
    pub fn load_from_path(path: &std::path::Path) -> Result<Self> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("MSGCAST_").split("_"))
            .extract()
            .wrap_err("解析配置文件失败")?;

        Ok(config)
    }
}
