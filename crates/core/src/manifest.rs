use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The persisted description of a project: its contracts (alias to contract
/// name) and its linked dependencies (name to version requirement).
///
/// Both maps keep declaration order, which is the order contracts and
/// dependencies are offered in when building choice lists.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ProjectManifest {
    pub name: String,
    pub version: Option<String>,
    #[serde(default)]
    pub contracts: IndexMap<String, String>,
    #[serde(default)]
    pub dependencies: IndexMap<String, String>,
}

/// A linked dependency's own manifest has the same shape as the local one.
pub type DependencyManifest = ProjectManifest;

impl ProjectManifest {
    /// Contract aliases in declaration order.
    pub fn contract_aliases(&self) -> impl Iterator<Item = &str> {
        self.contracts.keys().map(String::as_str)
    }

    /// The contract name an alias maps to, if declared.
    #[must_use]
    pub fn contract_name(&self, alias: &str) -> Option<&str> {
        self.contracts.get(alias).map(String::as_str)
    }

    /// Linked dependency names in declaration order.
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed_manifest() -> ProjectManifest {
        let yaml = r#"
name: my-project
version: "0.3.0"
contracts:
  Token: TokenImplV2
  Vault: Vault
dependencies:
  openlib: "^1.2.0"
"#;
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_manifest_deserializes() {
        let manifest = parsed_manifest();
        assert_eq!(manifest.name, "my-project");
        assert_eq!(manifest.contract_name("Token"), Some("TokenImplV2"));
        assert_eq!(manifest.contract_name("Vault"), Some("Vault"));
        assert_eq!(manifest.contract_name("Missing"), None);
    }

    #[test]
    fn test_contract_aliases_keep_declaration_order() {
        let manifest = parsed_manifest();
        let aliases: Vec<&str> = manifest.contract_aliases().collect();
        assert_eq!(aliases, vec!["Token", "Vault"]);
    }

    #[test]
    fn test_dependency_names() {
        let manifest = parsed_manifest();
        let names: Vec<&str> = manifest.dependency_names().collect();
        assert_eq!(names, vec!["openlib"]);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let manifest: ProjectManifest = serde_yaml::from_str("name: bare").unwrap();
        assert!(manifest.contracts.is_empty());
        assert!(manifest.dependencies.is_empty());
        assert!(manifest.version.is_none());
    }
}
