//! Test utilities for ngviz

use crate::symbols::{ProviderMeta, ProviderToken, SymbolRef};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const HTTP_CLIENT_PATH: &str = "/node_modules/@angular/common/http.d.ts";

pub fn symbol(name: &str, file_path: &str) -> SymbolRef {
    SymbolRef::new(name, file_path)
}

/// `HttpClient` as declared by @angular/common.
pub fn http_client() -> SymbolRef {
    symbol("HttpClient", HTTP_CLIENT_PATH)
}

pub fn literal_provider(value: impl Into<Value>) -> ProviderMeta {
    ProviderMeta::new(ProviderToken::literal(value))
}

pub fn reference_provider(name: &str, file_path: &str) -> ProviderMeta {
    ProviderMeta::new(ProviderToken::reference(symbol(name, file_path)))
}

/// A provider whose token has neither a literal nor an identifier.
pub fn opaque_provider() -> ProviderMeta {
    ProviderMeta::new(ProviderToken::default())
}

/// A token carrying both a literal and an identifier.
pub fn mixed_provider(value: impl Into<Value>, name: &str, file_path: &str) -> ProviderMeta {
    let mut token = ProviderToken::reference(symbol(name, file_path));
    token.value = Some(value.into());
    ProviderMeta::new(token)
}

/// Create a temporary directory holding the given files.
pub fn create_dir_with_files(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();

    for (path, content) in files {
        let full_path = temp_dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content).unwrap();
    }

    temp_dir
}

pub fn path_in(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_dir_with_files() {
        let dir = create_dir_with_files(&[("ngviz.json", "{}"), ("nested/ngviz.toml", "")]);

        assert!(path_in(&dir, "ngviz.json").exists());
        assert!(path_in(&dir, "nested/ngviz.toml").exists());
    }

    #[test]
    fn test_mixed_provider_has_both_parts() {
        let provider = mixed_provider("TOKEN", "Foo", "/src/foo.ts");
        let token = provider.token.unwrap();

        assert!(token.value.is_some());
        assert!(token.identifier.is_some());
    }
}
