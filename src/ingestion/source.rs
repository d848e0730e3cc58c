use std::str::FromStr;

use crate::structures::SeedYamlIngestor;

/// Where a file-backed input lives, from its `url`.
#[derive(Debug, PartialEq, Eq)]
pub enum SourceLocation {
    Local(String),
    Remote(String),
}

impl FromStr for SourceLocation {
    type Err = String;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        if let Some(path) = url.strip_prefix("path:") {
            Ok(SourceLocation::Local(path.to_string()))
        } else if url.starts_with("http://") || url.starts_with("https://") {
            Ok(SourceLocation::Remote(url.to_string()))
        } else {
            Err(format!("unknown URL scheme: {url}"))
        }
    }
}

pub fn resolve_path(input: &SeedYamlIngestor) -> Result<String, String> {
    match input.url.parse() {
        Ok(SourceLocation::Local(path)) => Ok(path),
        Ok(SourceLocation::Remote(url)) => Err(format!("Remote download not yet implemented: {url}")),
        Err(e) => Err(format!("'{}': {e}", input.name)),
    }
}
