pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Encodings accepted for request documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// `.yaml` / `.yml` read as YAML; anything else as JSON.
    pub fn from_extension(ext: Option<&str>) -> Self {
        match ext {
            Some("yaml") | Some("yml") => InputFormat::Yaml,
            _ => InputFormat::Json,
        }
    }

    /// JSON documents open with `{`; anything else is treated as YAML.
    pub fn sniff(contents: &str) -> Self {
        if contents.trim_start().starts_with('{') {
            InputFormat::Json
        } else {
            InputFormat::Yaml
        }
    }
}

/// Deserialise a request document; `origin` names the source in errors.
pub fn parse<T: DeserializeOwned>(
    contents: &str,
    format: InputFormat,
    origin: &str,
) -> Result<T, Box<dyn std::error::Error>> {
    let parsed = match format {
        InputFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        InputFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
    };
    parsed.map_err(|e| format!("Failed to parse {origin}: {e}").into())
}
