//! Loading build groups from JSON or YAML

use crate::builds::BuildGroup;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported builds file extension: {0}")]
    UnsupportedFormat(String),
}

/// Input encodings we accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Pick a format from a file extension. No extension means JSON.
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            None | Some("json") => Ok(InputFormat::Json),
            Some("yml") | Some("yaml") => Ok(InputFormat::Yaml),
            Some(other) => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse build groups from text
pub fn parse_build_groups(text: &str, format: InputFormat) -> Result<Vec<BuildGroup>, LoadError> {
    Ok(match format {
        InputFormat::Json => serde_json::from_str(text)?,
        InputFormat::Yaml => serde_yaml::from_str(text)?,
    })
}

/// Read build groups from a file, format chosen by extension
pub fn load_build_groups(path: &Path) -> Result<Vec<BuildGroup>, LoadError> {
    let format = InputFormat::from_path(path)?;
    let text = fs::read_to_string(path)?;
    parse_build_groups(&text, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::StatKey;
    use tempfile::TempDir;

    const YAML: &str = r#"
- characterId: Raiden
  builds:
    - composition: full-set
      set: EmblemOfSeveredFate
      mainStats:
        sands: [enerRech_, atk_]
        goblet: [atk_, electro_dmg_]
        circlet: [critRate_, critDMG_]
      substats: [enerRech_, critRate_, critDMG_, atk_]
      minStatCount: 3
- characterId: Bennett
  builds:
    - composition: half+half
      first: er20
      second: hp20
      substats: [enerRech_, hp_]
      visible: false
"#;

    #[test]
    fn test_parse_yaml() {
        let groups = parse_build_groups(YAML, InputFormat::Yaml).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].builds[0].min_stat_count, Some(3));
        assert_eq!(groups[0].builds[0].main_stats.sands[0], StatKey::EnergyRecharge);
        assert!(!groups[1].builds[0].visible);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("a.yml")).unwrap(), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.JSON")).unwrap(), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("builds")).unwrap(), InputFormat::Json);
        assert!(matches!(
            InputFormat::from_path(Path::new("a.toml")),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("builds.yaml");
        fs::write(&path, YAML).unwrap();
        let groups = load_build_groups(&path).unwrap();
        assert_eq!(groups[0].character_id, "Raiden");

        let json_path = dir.path().join("builds.json");
        fs::write(&json_path, serde_json::to_string(&groups).unwrap()).unwrap();
        assert_eq!(load_build_groups(&json_path).unwrap(), groups);
    }

    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_build_groups(&dir.path().join("missing.json")),
            Err(LoadError::Io(_))
        ));
        let path = dir.path().join("bad.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_build_groups(&path), Err(LoadError::Json(_))));
    }
}
