use std::path::Path;

use color_eyre::eyre::{Context, Result};
use dialoguer::Select;

use super::schema::Config;
use crate::i18n::Language;

const LANGUAGES: &[(Language, &str)] = &[
    (Language::English, "English"),
    (Language::Portuguese, "Português"),
];

/// 运行交互式配置向导
pub fn run_setup() -> Result<()> {
    println!("msgcast setup\n");

    let config_path = Config::config_path()?;
    let current = Config::load_from_path(&config_path)
        .map(|c| c.language())
        .unwrap_or_default();
    let current_idx = LANGUAGES
        .iter()
        .position(|(lang, _)| *lang == current)
        .unwrap_or(0);

    let labels: Vec<&str> = LANGUAGES.iter().map(|(_, label)| *label).collect();
    let idx = Select::new()
        .with_prompt("Interface language")
        .items(&labels)
        .default(current_idx)
        .interact()
        .wrap_err("选择语言失败")?;
    let (language, _) = LANGUAGES[idx];

    save_language_to_config(language, &config_path)?;

    println!("\n✅ Config saved to: {}", config_path.display());
    Ok(())
}

/// 更新 config.toml 的 [default].language，保留文件中的其他内容
pub fn save_language_to_config(language: Language, config_path: &Path) -> Result<()> {
    Config::init_at(config_path)?;

    let content = std::fs::read_to_string(config_path).wrap_err("读取配置文件失败")?;
    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| color_eyre::eyre::eyre!("解析配置文件失败: {}", e))?;

    if doc.get("default").is_none() {
        doc["default"] = toml_edit::Item::Table(toml_edit::Table::new());
    }
    doc["default"]["language"] = toml_edit::value(language.code());

    std::fs::write(config_path, doc.to_string()).wrap_err("写入配置文件失败")?;
    tracing::info!(language = language.code(), "interface language saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn save_language_updates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"# my notes
[default]
language = "en"

[extra]
keep = true
"#,
        )
        .unwrap();

        save_language_to_config(Language::Portuguese, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let doc: toml_edit::DocumentMut = content.parse().unwrap();
        assert_eq!(doc["default"]["language"].as_str(), Some("pt"));
        assert_eq!(doc["extra"]["keep"].as_bool(), Some(true));
        assert!(content.contains("# my notes"));
    }

    #[test]
    fn save_language_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        save_language_to_config(Language::Portuguese, &path).unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.language(), Language::Portuguese);
    }

    #[test]
    fn save_language_adds_missing_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        save_language_to_config(Language::English, &path).unwrap();

        let doc: toml_edit::DocumentMut = fs::read_to_string(&path).unwrap().parse().unwrap();
        assert_eq!(doc["default"]["language"].as_str(), Some("en"));
    }
}
