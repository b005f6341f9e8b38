use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// JSON array of notices.
    #[serde(default = "default_input")]
    pub input: String,
    #[serde(default = "default_output")]
    pub output: String,
    /// Document title while the list is showing.
    #[serde(default = "default_title")]
    pub title: String,
    /// Document title while a notice is showing.
    #[serde(default = "default_detail_title")]
    pub detail_title: String,
    #[serde(default = "default_empty_text")]
    pub empty_text: String,
    #[serde(default = "default_slider_class")]
    pub slider_class: String,
    #[serde(default = "default_list_class")]
    pub list_class: String,
    #[serde(default = "default_slide_duration_ms")]
    pub slide_duration_ms: u32,
    #[serde(default = "default_addr")]
    pub addr: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_input() -> String {
    String::from("./data.json")
}

fn default_output() -> String {
    String::from("./output")
}

fn default_title() -> String {
    "Notices".to_owned()
}

fn default_detail_title() -> String {
    "Notice Details".to_owned()
}

fn default_empty_text() -> String {
    "No notices have been posted yet.".to_owned()
}

fn default_slider_class() -> String {
    "notice-slider".to_owned()
}

fn default_list_class() -> String {
    "notice-board".to_owned()
}

fn default_slide_duration_ms() -> u32 {
    300
}

fn default_addr() -> String {
    String::from("0.0.0.0:8080")
}

fn default_lang() -> String {
    "en".to_owned()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            title: default_title(),
            detail_title: default_detail_title(),
            empty_text: default_empty_text(),
            slider_class: default_slider_class(),
            list_class: default_list_class(),
            slide_duration_ms: default_slide_duration_ms(),
            addr: default_addr(),
            lang: default_lang(),
        }
    }
}

impl BoardConfig {
    /// Reads `path`. A missing file means every setting is defaulted.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("{} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::Read {
                    path: path.to_owned(),
                    source,
                })
            }
        };
        toml::from_str(&text).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(toml::from_str::<BoardConfig>("").unwrap(), BoardConfig::default());
    }

    #[test]
    fn overrides() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
            title = "이용약관"
            detail_title = "공지사항 상세내용"
            empty_text = "아직 등록된 공지사항이 없습니다."
            slide_duration_ms = 0
            lang = "ko"
            "#
        )
        .unwrap();

        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.title, "이용약관");
        assert_eq!(config.detail_title, "공지사항 상세내용");
        assert_eq!(config.slide_duration_ms, 0);
        assert_eq!(config.lang, "ko");
        assert_eq!(config.slider_class, "notice-slider");
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = BoardConfig::load(dir.path().join("noticeboard.toml")).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "slide_duration_ms = \"slow\"").unwrap();
        assert!(matches!(
            BoardConfig::load(file.path()),
            Err(Error::Config { .. })
        ));
    }
}
