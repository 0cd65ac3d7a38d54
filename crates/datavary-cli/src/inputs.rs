use std::path::Path;

use datavary_engine::DataSpec;
use datavary_registry::{Registry, base_data_types};
use tracing::info;

use crate::CliError;

/// Read a field specification file (`.json` or `.toml`).
pub fn load_data_spec(path: &Path) -> Result<DataSpec, CliError> {
    let content = std::fs::read_to_string(path)?;
    let spec = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => DataSpec::from_json_str(&content)?,
        Some("toml") => toml::from_str(&content)?,
        _ => {
            return Err(CliError::InvalidConfig(format!(
                "unsupported field spec format: {}",
                path.display()
            )));
        }
    };
    info!(path = %path.display(), fields = spec.len(), "field spec loaded");
    Ok(spec)
}

/// Built-in types for `seed`, with the optional registry file layered on top.
pub fn load_registry(seed: u64, overlay: Option<&Path>) -> Result<Registry, CliError> {
    let registry = base_data_types(seed);
    match overlay {
        Some(path) => Ok(registry.layered(Registry::load(path)?)),
        None => Ok(registry),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use datavary_engine::FieldSpec;
    use datavary_registry::ExampleValue;

    use super::*;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("datavary-inputs-{name}"));
        std::fs::write(&path, content).expect("write temp file");
        path
    }

    #[test]
    fn loads_json_field_spec() {
        let path = temp_file(
            "spec.json",
            r#"{"postName": "title", "username": {"valid": ["sample-username"]}}"#,
        );
        let spec = load_data_spec(&path).expect("load spec");
        let names: Vec<&str> = spec.names().collect();
        assert_eq!(names, vec!["postName", "username"]);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn loads_toml_field_spec_with_inline_table() {
        let path = temp_file(
            "spec.toml",
            r#"
postName = "title"
likeCount = "integer"

[username]
valid = ["sample-username"]
invalid = [""]
"#,
        );
        let spec = load_data_spec(&path).expect("load spec");

        assert!(matches!(spec.get("postName"), Some(FieldSpec::Generator(name)) if name == "title"));
        match spec.get("username") {
            Some(FieldSpec::Inline(entry)) => {
                assert_eq!(entry.valid, vec![ExampleValue::from("sample-username")]);
                assert_eq!(entry.invalid, vec![ExampleValue::from("")]);
            }
            other => panic!("expected inline entry, got {other:?}"),
        }
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn rejects_unsupported_spec_extension() {
        let path = temp_file("spec.yaml", "postName: title\n");
        let err = load_data_spec(&path).expect_err("unsupported format");
        assert!(matches!(err, CliError::InvalidConfig(_)));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn registry_file_is_layered_over_builtins() {
        let path = temp_file(
            "registry.json",
            r#"{"integer": {"valid": [42]}, "email": {"valid": ["a@example.com"]}}"#,
        );
        let registry = load_registry(3, Some(path.as_path())).expect("load registry");

        assert!(registry.contains("email"));
        assert!(registry.contains("paragraph"));
        let integer = registry.resolve("integer").expect("integer");
        assert_eq!(integer.valid, vec![ExampleValue::Int(42)]);
        assert!(integer.edge.is_empty());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn without_overlay_registry_is_the_builtin_set() {
        let registry = load_registry(3, None).expect("load registry");
        assert_eq!(registry, base_data_types(3));
    }
}
