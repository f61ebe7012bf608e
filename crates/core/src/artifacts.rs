//! Compiled contract artifacts.
//!
//! Compilation itself happens elsewhere; this module only models the JSON
//! artifact files a build leaves behind, and the method introspection the
//! catalog needs from them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One input parameter of a contract method.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MethodInput {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One method of a compiled contract's interface.
///
/// `selector` disambiguates overloaded methods; `name` alone is the fallback
/// lookup key when no selector is recorded.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: String,
    pub selector: Option<String>,
    #[serde(default)]
    pub inputs: Vec<MethodInput>,
    #[serde(default)]
    pub initializer: bool,
}

impl MethodDescriptor {
    /// Human-readable signature: `name(arg0: type0, arg1: type1)`.
    #[must_use]
    pub fn signature(&self) -> String {
        let inputs: Vec<String> = self
            .inputs
            .iter()
            .map(|input| format!("{}: {}", input.name, input.kind))
            .collect();

        format!("{}({})", self.name, inputs.join(", "))
    }
}

/// A compiled contract as read from one artifact file.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ContractArtifact {
    #[serde(rename = "contractName")]
    pub contract_name: String,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ContractArtifact {
    /// Looks a method up by selector first, then by name.
    #[must_use]
    pub fn method(&self, name: &str, selector: Option<&str>) -> Option<&MethodDescriptor> {
        if let Some(selector) = selector {
            let by_selector = self
                .methods
                .iter()
                .find(|method| method.selector.as_deref() == Some(selector));
            if by_selector.is_some() {
                return by_selector;
            }
        }

        self.methods.iter().find(|method| method.name == name)
    }
}

/// All compiled contracts found in the build directory, keyed by contract
/// name in load order.
#[derive(Debug, Clone, Default)]
pub struct BuildArtifacts {
    pub contracts: IndexMap<String, ContractArtifact>,
}

impl BuildArtifacts {
    pub fn contract_names(&self) -> impl Iterator<Item = &str> {
        self.contracts.keys().map(String::as_str)
    }

    #[must_use]
    pub fn get(&self, contract_name: &str) -> Option<&ContractArtifact> {
        self.contracts.get(contract_name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_artifact() -> ContractArtifact {
        let json = r#"{
            "contractName": "Token",
            "methods": [
                {
                    "name": "initialize",
                    "selector": "0xfe4b84df",
                    "inputs": [{"name": "amount", "type": "uint256"}],
                    "initializer": true
                },
                {
                    "name": "transfer",
                    "selector": "0xa9059cbb",
                    "inputs": [
                        {"name": "to", "type": "address"},
                        {"name": "amount", "type": "uint256"}
                    ]
                },
                {
                    "name": "transfer",
                    "selector": "0x095ea7b3",
                    "inputs": [{"name": "to", "type": "address"}]
                }
            ]
        }"#;
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_signature_formatting() {
        let artifact = token_artifact();
        assert_eq!(
            artifact.methods[0].signature(),
            "initialize(amount: uint256)"
        );
        assert_eq!(
            artifact.methods[1].signature(),
            "transfer(to: address, amount: uint256)"
        );
    }

    #[test]
    fn test_signature_without_inputs() {
        let method = MethodDescriptor {
            name: "pause".to_string(),
            selector: None,
            inputs: vec![],
            initializer: false,
        };
        assert_eq!(method.signature(), "pause()");
    }

    #[test]
    fn test_method_lookup_prefers_selector() {
        let artifact = token_artifact();

        // Overloaded name: the selector picks the right one
        let method = artifact.method("transfer", Some("0x095ea7b3")).unwrap();
        assert_eq!(method.inputs.len(), 1);
    }

    #[test]
    fn test_method_lookup_falls_back_to_name() {
        let artifact = token_artifact();

        // Unknown selector falls back to the first name match
        let method = artifact.method("transfer", Some("0xdeadbeef")).unwrap();
        assert_eq!(method.selector.as_deref(), Some("0xa9059cbb"));

        let method = artifact.method("initialize", None).unwrap();
        assert!(method.initializer);
    }

    #[test]
    fn test_method_lookup_unknown_returns_none() {
        let artifact = token_artifact();
        assert!(artifact.method("burn", None).is_none());
    }

    #[test]
    fn test_initializer_defaults_to_false() {
        let artifact = token_artifact();
        assert!(!artifact.methods[1].initializer);
    }
}
