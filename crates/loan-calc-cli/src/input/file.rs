use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

use super::InputFormat;

/// Read a JSON or YAML request file, choosing the format by extension.
pub fn read_input<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn std::error::Error>> {
    let resolved = resolve_path(path)?;
    let contents = fs::read_to_string(&resolved)
        .map_err(|e| format!("Failed to read '{}': {}", resolved.display(), e))?;

    let format = InputFormat::from_extension(resolved.extension().and_then(|e| e.to_str()));
    super::parse(&contents, format, &format!("'{}'", resolved.display()))
}

fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let resolved = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !resolved.is_file() {
        let reason = if resolved.exists() { "Not a file" } else { "File not found" };
        return Err(format!("{}: {}", reason, resolved.display()).into());
    }

    Ok(resolved)
}
