//! The project manifest (`package.json`) and its merge rules.
//!
//! Only three tables are modelled: `dependencies`, `devDependencies` and
//! `scripts`. Every other field of the document is kept untouched, in the
//! order the generator wrote it.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::domain::error::DomainError;

const DEPENDENCIES: &str = "dependencies";
const DEV_DEPENDENCIES: &str = "devDependencies";
const SCRIPTS: &str = "scripts";

/// Ordered `name -> string` table (dependency ranges or shell commands).
pub type Table = IndexMap<String, String>;

/// In-memory project manifest.
///
/// A manifest with an empty document doubles as a *fragment*: the partial
/// set of scripts and dependencies a feature module contributes.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    document: Map<String, Value>,
    dependencies: Table,
    dev_dependencies: Table,
    scripts: Table,
}

impl Manifest {
    /// Empty manifest, equivalent to an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `package.json` document.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| DomainError::InvalidManifest(format!("not valid JSON: {e}")))?;

        let Value::Object(document) = value else {
            return Err(DomainError::InvalidManifest(
                "top-level value must be an object".into(),
            ));
        };

        Ok(Self {
            dependencies: read_table(&document, DEPENDENCIES)?,
            dev_dependencies: read_table(&document, DEV_DEPENDENCIES)?,
            scripts: read_table(&document, SCRIPTS)?,
            document,
        })
    }

    // ── Builders (fragments) ──────────────────────────────────────────────

    pub fn with_dependency(mut self, name: impl Into<String>, range: impl Into<String>) -> Self {
        self.dependencies.insert(name.into(), range.into());
        self
    }

    pub fn with_dev_dependency(
        mut self,
        name: impl Into<String>,
        range: impl Into<String>,
    ) -> Self {
        self.dev_dependencies.insert(name.into(), range.into());
        self
    }

    pub fn with_script(mut self, name: impl Into<String>, command: impl Into<String>) -> Self {
        self.scripts.insert(name.into(), command.into());
        self
    }

    // ── Merge ─────────────────────────────────────────────────────────────

    /// Merge `fragment` on top of `self`, returning a new manifest.
    ///
    /// Keys of `fragment` overwrite the same keys of `self`; keys absent from
    /// `fragment` are preserved. Existing keys keep their position, new keys
    /// are appended in the fragment's order. The document body of `self` is
    /// kept; the fragment's body is ignored.
    pub fn merge(&self, fragment: &Manifest) -> Manifest {
        let mut merged = self.clone();
        overlay(&mut merged.dependencies, &fragment.dependencies);
        overlay(&mut merged.dev_dependencies, &fragment.dev_dependencies);
        overlay(&mut merged.scripts, &fragment.scripts);
        merged
    }

    // ── Serialization ─────────────────────────────────────────────────────

    /// Serialize to pretty JSON with a trailing newline.
    ///
    /// Tables already present in the document are written back in place; new,
    /// non-empty tables are appended at the end.
    pub fn to_json_pretty(&self) -> Result<String, DomainError> {
        let mut document = self.document.clone();
        write_table(&mut document, DEPENDENCIES, &self.dependencies);
        write_table(&mut document, DEV_DEPENDENCIES, &self.dev_dependencies);
        write_table(&mut document, SCRIPTS, &self.scripts);

        let mut text = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| DomainError::InvalidManifest(format!("serialization failed: {e}")))?;
        text.push('\n');
        Ok(text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn dependencies(&self) -> &Table {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &Table {
        &self.dev_dependencies
    }

    pub fn scripts(&self) -> &Table {
        &self.scripts
    }

    pub fn script(&self, name: &str) -> Option<&str> {
        self.scripts.get(name).map(String::as_str)
    }

    pub fn dependency(&self, name: &str) -> Option<&str> {
        self.dependencies.get(name).map(String::as_str)
    }

    /// `true` when no table has any entry.
    pub fn is_empty_fragment(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty() && self.scripts.is_empty()
    }
}

impl PartialEq for Manifest {
    /// Tables are compared by content; the document body is compared without
    /// its (possibly stale) copies of the tables.
    fn eq(&self, other: &Self) -> bool {
        self.dependencies == other.dependencies
            && self.dev_dependencies == other.dev_dependencies
            && self.scripts == other.scripts
            && body(&self.document).eq(body(&other.document))
    }
}

fn body(document: &Map<String, Value>) -> impl Iterator<Item = (&String, &Value)> {
    document
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), DEPENDENCIES | DEV_DEPENDENCIES | SCRIPTS))
}

fn overlay(base: &mut Table, fragment: &Table) {
    for (key, value) in fragment {
        base.insert(key.clone(), value.clone());
    }
}

fn read_table(document: &Map<String, Value>, key: &str) -> Result<Table, DomainError> {
    let Some(value) = document.get(key) else {
        return Ok(Table::new());
    };

    let Value::Object(entries) = value else {
        return Err(DomainError::InvalidManifest(format!(
            "'{key}' must be an object"
        )));
    };

    entries
        .iter()
        .map(|(name, value)| match value {
            Value::String(s) => Ok((name.clone(), s.clone())),
            _ => Err(DomainError::InvalidManifest(format!(
                "'{key}.{name}' must be a string"
            ))),
        })
        .collect()
}

fn write_table(document: &mut Map<String, Value>, key: &str, table: &Table) {
    if table.is_empty() && !document.contains_key(key) {
        return;
    }

    let entries: Map<String, Value> = table
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    document.insert(key.to_string(), Value::Object(entries));
}

#[cfg(test)]
mod tests {
    use super::*;

    const GENERATED: &str = r#"{
  "name": "my-app",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "dev": "next dev",
    "build": "next build",
    "start": "next start",
    "lint": "next lint"
  },
  "dependencies": {
    "next": "14.2.5",
    "react": "^18"
  },
  "devDependencies": {
    "typescript": "^5"
  }
}
"#;

    fn generated() -> Manifest {
        Manifest::parse(GENERATED).unwrap()
    }

    #[test]
    fn parse_reads_all_tables() {
        let m = generated();
        assert_eq!(m.scripts().len(), 4);
        assert_eq!(m.dependency("next"), Some("14.2.5"));
        assert_eq!(m.dev_dependencies().get("typescript").map(String::as_str), Some("^5"));
    }

    #[test]
    fn parse_rejects_non_object() {
        assert!(matches!(
            Manifest::parse("[1, 2]"),
            Err(DomainError::InvalidManifest(_))
        ));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Manifest::parse("{ not json").is_err());
    }

    #[test]
    fn parse_rejects_non_string_script() {
        let err = Manifest::parse(r#"{"scripts": {"dev": 1}}"#).unwrap_err();
        assert!(err.to_string().contains("scripts.dev"));
    }

    #[test]
    fn merge_preserves_base_and_overwrites_collisions() {
        let base = generated();
        let fragment = Manifest::new()
            .with_script("build", "next build --profile")
            .with_script("test", "jest");

        let merged = base.merge(&fragment);

        assert_eq!(merged.script("dev"), Some("next dev"));
        assert_eq!(merged.script("build"), Some("next build --profile"));
        assert_eq!(merged.script("test"), Some("jest"));
        assert_eq!(merged.dependency("react"), Some("^18"));
    }

    #[test]
    fn merge_is_not_commutative() {
        let a = Manifest::new().with_script("build", "a");
        let b = Manifest::new().with_script("build", "b");

        assert_eq!(a.merge(&b).script("build"), Some("b"));
        assert_eq!(b.merge(&a).script("build"), Some("a"));
        assert_ne!(a.merge(&b), b.merge(&a));
    }

    #[test]
    fn merge_with_empty_fragment_is_identity() {
        let base = generated();
        assert_eq!(base.merge(&Manifest::new()), base);
    }

    #[test]
    fn merge_keeps_existing_order_then_appends() {
        let merged = generated().merge(
            &Manifest::new()
                .with_script("zeta", "z")
                .with_script("dev", "next dev --turbo")
                .with_script("alpha", "a"),
        );

        let keys: Vec<_> = merged.scripts().keys().map(String::as_str).collect();
        assert_eq!(keys, ["dev", "build", "start", "lint", "zeta", "alpha"]);
    }

    #[test]
    fn serialization_keeps_document_order() {
        let merged = generated().merge(&Manifest::new().with_dependency("axios", "^1.7.7"));
        let json = merged.to_json_pretty().unwrap();

        let name = json.find("\"name\"").unwrap();
        let scripts = json.find("\"scripts\"").unwrap();
        let deps = json.find("\"dependencies\"").unwrap();
        let axios = json.find("\"axios\"").unwrap();
        let react = json.find("\"react\"").unwrap();

        assert!(name < scripts && scripts < deps);
        assert!(react < axios);
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn serialization_is_deterministic() {
        let fragment = Manifest::new().with_script("test", "jest");
        let one = generated().merge(&fragment).to_json_pretty().unwrap();
        let two = generated().merge(&fragment).to_json_pretty().unwrap();
        assert_eq!(one, two);
    }

    #[test]
    fn serialization_round_trips_through_parse() {
        let merged = generated().merge(&Manifest::new().with_script("test", "jest"));
        let reparsed = Manifest::parse(&merged.to_json_pretty().unwrap()).unwrap();
        assert_eq!(reparsed, merged);
    }

    #[test]
    fn empty_absent_tables_are_not_emitted() {
        let m = Manifest::parse(r#"{"name": "x"}"#).unwrap();
        let json = m.to_json_pretty().unwrap();
        assert!(!json.contains("scripts"));
        assert!(!json.contains("devDependencies"));
    }

    #[test]
    fn new_tables_are_appended() {
        let m = Manifest::parse(r#"{"name": "x"}"#)
            .unwrap()
            .merge(&Manifest::new().with_script("test", "jest"));
        let json = m.to_json_pretty().unwrap();
        assert!(json.find("\"name\"").unwrap() < json.find("\"scripts\"").unwrap());
    }

    #[test]
    fn empty_fragment_detection() {
        assert!(Manifest::new().is_empty_fragment());
        assert!(!Manifest::new().with_dev_dependency("jest", "^29").is_empty_fragment());
    }
}
