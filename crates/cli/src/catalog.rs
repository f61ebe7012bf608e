//! Contract and method catalogs.
//!
//! Aggregates locally-built contracts, manifest-declared contracts, and
//! linked-dependency contracts into selectable choice lists, and introspects
//! contract interfaces for method and argument questions.

use log::warn;

use proxup_core::artifacts::ContractArtifact;
use proxup_core::naming::ContractFullName;
use proxup_core::state::ProjectState;

use crate::questions::{AnswerValue, ChoiceItem, MethodRef};

/// Source mode string for build-artifact contracts.
pub const SOURCE_BUILD_DIR: &str = "fromBuildDir";
/// Source mode string for manifest-declared contracts.
pub const SOURCE_LOCAL: &str = "fromLocal";
/// Source mode string for the union of local and dependency contracts.
pub const SOURCE_ALL: &str = "all";

/// Group label for the local project's own contracts.
const LOCAL_GROUP_LABEL: &str = "Local contracts";

enum ContractSource {
    BuildDir,
    Local,
    All,
}

impl ContractSource {
    fn parse(value: &str) -> Option<Self> {
        match value {
            SOURCE_BUILD_DIR => Some(Self::BuildDir),
            SOURCE_LOCAL => Some(Self::Local),
            SOURCE_ALL => Some(Self::All),
            _ => None,
        }
    }
}

/// Contracts selectable from the given source mode.
///
/// Unknown source strings yield an empty list rather than failing; the
/// caller decides whether having nothing to offer is fatal.
pub fn list_contracts(state: &ProjectState, source: &str) -> Vec<ChoiceItem> {
    match ContractSource::parse(source) {
        None => {
            warn!("Unknown contract source `{source}`, offering no contracts");
            Vec::new()
        }
        Some(ContractSource::BuildDir) => built_contract_choices(state),
        Some(ContractSource::Local) => local_manifest_choices(state),
        Some(ContractSource::All) => all_contract_choices(state),
    }
}

fn built_contract_choices(state: &ProjectState) -> Vec<ChoiceItem> {
    state
        .artifacts
        .contract_names()
        .map(|name| ChoiceItem::choice(name, AnswerValue::text(name)))
        .collect()
}

fn local_manifest_choices(state: &ProjectState) -> Vec<ChoiceItem> {
    state
        .manifest
        .contracts
        .iter()
        .map(|(alias, contract_name)| {
            let label = if alias == contract_name {
                alias.clone()
            } else {
                format!("{alias}[{contract_name}]")
            };
            ChoiceItem::choice(label, AnswerValue::text(alias))
        })
        .collect()
}

fn all_contract_choices(state: &ProjectState) -> Vec<ChoiceItem> {
    let mut items = Vec::new();

    let built = built_contract_choices(state);
    if !built.is_empty() {
        items.push(ChoiceItem::separator(LOCAL_GROUP_LABEL));
        items.extend(built);
    }

    // One level deep: dependencies of dependencies are not offered
    for (name, dependency) in &state.dependencies {
        let aliases: Vec<&str> = dependency.contract_aliases().collect();
        if aliases.is_empty() {
            continue;
        }

        items.push(ChoiceItem::separator(name));
        for alias in aliases {
            let full_name = format!("{name}/{alias}");
            items.push(ChoiceItem::choice(
                full_name.clone(),
                AnswerValue::Text(full_name),
            ));
        }
    }

    items
}

/// The compiled artifact behind a (possibly package-qualified) full name.
/// Only locally-built contracts are introspectable; anything else is `None`.
fn resolve_artifact<'a>(state: &'a ProjectState, full_name: &str) -> Option<&'a ContractArtifact> {
    let name = ContractFullName::parse(full_name);

    match &name.package {
        Some(package) if package != state.local_package() => None,
        _ => {
            let contract_name = state
                .manifest
                .contract_name(&name.alias)
                .unwrap_or(&name.alias);
            state.artifacts.get(contract_name)
        }
    }
}

/// Method choices for one contract, labeled with their signatures and an
/// `[Initializable]` prefix for initializer methods. Unknown contracts yield
/// an empty list.
pub fn methods_for(state: &ProjectState, contract_full_name: &str) -> Vec<ChoiceItem> {
    let Some(artifact) = resolve_artifact(state, contract_full_name) else {
        return Vec::new();
    };

    artifact
        .methods
        .iter()
        .map(|method| {
            let label = if method.initializer {
                format!("[Initializable] {}", method.signature())
            } else {
                method.signature()
            };

            ChoiceItem::choice(
                label,
                AnswerValue::Method(MethodRef {
                    name: method.name.clone(),
                    selector: method.selector.clone(),
                }),
            )
        })
        .collect()
}

/// Input parameter names of one method, matched by selector first and name
/// second. No match yields an empty list.
pub fn arg_names_for(
    state: &ProjectState,
    contract_full_name: &str,
    method: &MethodRef,
) -> Vec<String> {
    resolve_artifact(state, contract_full_name)
        .and_then(|artifact| artifact.method(&method.name, method.selector.as_deref()))
        .map(|descriptor| {
            descriptor
                .inputs
                .iter()
                .map(|input| input.name.clone())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use proxup_core::artifacts::BuildArtifacts;
    use proxup_core::manifest::ProjectManifest;
    use crate::questions::Choice;

    fn artifact(json: &str) -> proxup_core::artifacts::ContractArtifact {
        serde_json::from_str(json).unwrap()
    }

    fn state(
        manifest_yaml: &str,
        dependency_yamls: &[(&str, &str)],
        artifact_jsons: &[&str],
    ) -> ProjectState {
        let manifest: ProjectManifest = serde_yaml::from_str(manifest_yaml).unwrap();

        let mut dependencies = IndexMap::new();
        for (name, yaml) in dependency_yamls {
            dependencies.insert((*name).to_string(), serde_yaml::from_str(yaml).unwrap());
        }

        let mut contracts = IndexMap::new();
        for json in artifact_jsons {
            let parsed = artifact(json);
            contracts.insert(parsed.contract_name.clone(), parsed);
        }

        ProjectState {
            manifest,
            dependencies,
            artifacts: BuildArtifacts { contracts },
        }
    }

    const TOKEN_ARTIFACT: &str = r#"{
        "contractName": "TokenImpl",
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
            }
        ]
    }"#;

    #[test]
    fn test_list_contracts_from_build_dir() {
        let state = state("name: my-project", &[], &[TOKEN_ARTIFACT]);
        let items = list_contracts(&state, SOURCE_BUILD_DIR);
        assert_eq!(
            items,
            vec![ChoiceItem::choice(
                "TokenImpl",
                AnswerValue::text("TokenImpl")
            )]
        );
    }

    #[test]
    fn test_list_contracts_from_local_labels() {
        let yaml = "name: my-project\ncontracts:\n  Token: TokenImpl\n  Vault: Vault\n";
        let state = state(yaml, &[], &[]);

        let items = list_contracts(&state, SOURCE_LOCAL);
        assert_eq!(
            items,
            vec![
                // Alias differs from contract name: label shows both
                ChoiceItem::Choice(Choice {
                    label: "Token[TokenImpl]".to_string(),
                    value: AnswerValue::text("Token"),
                }),
                ChoiceItem::Choice(Choice {
                    label: "Vault".to_string(),
                    value: AnswerValue::text("Vault"),
                }),
            ]
        );
    }

    #[test]
    fn test_list_contracts_all_skips_empty_sections() {
        // No build artifacts: no "Local contracts" separator
        let state = state(
            "name: my-project\ndependencies:\n  dep1: \"^1.0.0\"\n",
            &[("dep1", "name: dep1\ncontracts:\n  A: A\n  B: B\n")],
            &[],
        );

        let items = list_contracts(&state, SOURCE_ALL);
        assert_eq!(
            items,
            vec![
                ChoiceItem::separator("dep1"),
                ChoiceItem::choice("dep1/A", AnswerValue::text("dep1/A")),
                ChoiceItem::choice("dep1/B", AnswerValue::text("dep1/B")),
            ]
        );
    }

    #[test]
    fn test_list_contracts_all_with_both_sections() {
        let state = state(
            "name: my-project\ndependencies:\n  dep1: \"^1.0.0\"\n",
            &[("dep1", "name: dep1\ncontracts:\n  A: A\n")],
            &[TOKEN_ARTIFACT],
        );

        let items = list_contracts(&state, SOURCE_ALL);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], ChoiceItem::separator("Local contracts"));
        assert_eq!(items[2], ChoiceItem::separator("dep1"));
    }

    #[test]
    fn test_list_contracts_unknown_source_is_empty() {
        let state = state("name: my-project", &[], &[TOKEN_ARTIFACT]);
        assert!(list_contracts(&state, "fromSomewhere").is_empty());
    }

    #[test]
    fn test_methods_for_labels_initializer() {
        let yaml = "name: my-project\ncontracts:\n  Token: TokenImpl\n";
        let state = state(yaml, &[], &[TOKEN_ARTIFACT]);

        // Resolved through the manifest alias
        let items = methods_for(&state, "Token");
        assert_eq!(items.len(), 2);

        let ChoiceItem::Choice(first) = &items[0] else {
            panic!("expected a choice");
        };
        assert_eq!(first.label, "[Initializable] initialize(amount: uint256)");
        assert_eq!(
            first.value,
            AnswerValue::Method(MethodRef {
                name: "initialize".to_string(),
                selector: Some("0xfe4b84df".to_string()),
            })
        );

        let ChoiceItem::Choice(second) = &items[1] else {
            panic!("expected a choice");
        };
        assert_eq!(second.label, "transfer(to: address, amount: uint256)");
    }

    #[test]
    fn test_methods_for_unknown_contract_is_empty() {
        let state = state("name: my-project", &[], &[TOKEN_ARTIFACT]);
        assert!(methods_for(&state, "Ghost").is_empty());
        // Foreign packages are not locally introspectable
        assert!(methods_for(&state, "dep1/TokenImpl").is_empty());
    }

    #[test]
    fn test_methods_for_local_package_qualified_name() {
        let yaml = "name: my-project\ncontracts:\n  Token: TokenImpl\n";
        let state = state(yaml, &[], &[TOKEN_ARTIFACT]);
        assert_eq!(methods_for(&state, "my-project/Token").len(), 2);
    }

    #[test]
    fn test_arg_names_for() {
        let yaml = "name: my-project\ncontracts:\n  Token: TokenImpl\n";
        let state = state(yaml, &[], &[TOKEN_ARTIFACT]);

        let names = arg_names_for(
            &state,
            "Token",
            &MethodRef {
                name: "initialize".to_string(),
                selector: None,
            },
        );
        assert_eq!(names, vec!["amount"]);

        let names = arg_names_for(
            &state,
            "Token",
            &MethodRef {
                name: "transfer".to_string(),
                selector: Some("0xa9059cbb".to_string()),
            },
        );
        assert_eq!(names, vec!["to", "amount"]);
    }

    #[test]
    fn test_arg_names_for_unknown_method_is_empty() {
        let state = state("name: my-project", &[], &[TOKEN_ARTIFACT]);
        let names = arg_names_for(
            &state,
            "TokenImpl",
            &MethodRef {
                name: "burn".to_string(),
                selector: None,
            },
        );
        assert!(names.is_empty());
    }
}
