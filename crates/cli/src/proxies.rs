//! Proxy reference resolution.
//!
//! Turns a partial reference (contract alias and/or address) into one
//! canonical `{contract full name, address, proxy reference}` tuple against
//! a network's persisted proxy records, and builds the grouped,
//! package-partitioned proxy choice list.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use proxup_core::naming::ContractFullName;
use proxup_core::network::{NetworkFile, ProxyQuery, ProxyRecord};

use crate::questions::{AnswerSet, AnswerValue, ChoiceItem, ChoiceSource};

/// Prior-answer value selecting address-based proxy picking.
pub const PICK_BY_ADDRESS: &str = "byAddress";
/// Prior-answer value selecting name-based proxy picking.
pub const PICK_BY_NAME: &str = "byName";

/// Group label for the local project's own proxies.
const LOCAL_GROUP_LABEL: &str = "Local contracts";

/// A partial, human-supplied reference to a proxy.
#[derive(Debug, Clone, Default)]
pub struct ContractRef {
    pub contract_alias: Option<String>,
    pub proxy_address: Option<String>,
    pub package_name: Option<String>,
}

/// A resolved proxy reference. `proxy_reference` is whichever of the address
/// or the full name identifies the target for later operations; all fields
/// stay unset when nothing was given to resolve from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedProxy {
    pub contract_full_name: Option<String>,
    pub address: Option<String>,
    pub proxy_reference: Option<String>,
}

/// Resolves one partial reference against a network's proxy records.
///
/// With neither alias nor address given the result is empty and the caller
/// must prompt separately. When records match, the first match is taken and
/// its own package/contract rebuild the full name (the record is
/// authoritative over the caller's input). A caller-supplied address always
/// wins as the proxy reference.
#[must_use]
pub fn resolve_one(
    info: &ContractRef,
    network: &NetworkFile,
    local_package: &str,
) -> ResolvedProxy {
    if info.contract_alias.is_none() && info.proxy_address.is_none() {
        return ResolvedProxy::default();
    }

    let query = ProxyQuery {
        package: info.package_name.clone(),
        contract: info.contract_alias.clone(),
        address: info.proxy_address.clone(),
    };

    match network.find(&query).first() {
        None => {
            let contract_full_name = info.contract_alias.as_ref().map(|alias| {
                ContractFullName::qualified(info.package_name.as_deref(), alias, local_package)
                    .to_string()
            });
            let proxy_reference = info
                .proxy_address
                .clone()
                .or_else(|| contract_full_name.clone());

            ResolvedProxy {
                contract_full_name,
                address: None,
                proxy_reference,
            }
        }
        Some(record) => {
            let contract_full_name =
                ContractFullName::qualified(Some(&record.package), &record.contract, local_package)
                    .to_string();
            let proxy_reference = info
                .proxy_address
                .clone()
                .unwrap_or_else(|| contract_full_name.clone());

            ResolvedProxy {
                contract_full_name: Some(contract_full_name),
                address: Some(record.address.clone()),
                proxy_reference: Some(proxy_reference),
            }
        }
    }
}

/// Builds the grouped proxy choice list as a dynamic source.
///
/// The display mode comes from the prior answer named `mode_question`:
/// [`PICK_BY_ADDRESS`] shows `<contract> at <address>` and uses the address
/// as the reference value; anything else shows the contract alias and uses
/// the (possibly package-qualified) full name. Groups keep first-seen
/// package order, the local package is labeled "Local contracts", and
/// choices with identical display names within a group collapse to one.
pub fn proxy_choices_by_package(
    network: &NetworkFile,
    local_package: &str,
    mode_question: &str,
) -> ChoiceSource {
    let records: Vec<ProxyRecord> = network.proxies.clone();
    let local_package = local_package.to_string();
    let mode_question = mode_question.to_string();

    ChoiceSource::Dynamic(Box::new(move |prior: &AnswerSet| {
        let by_address = prior
            .get(&mode_question)
            .and_then(Option::as_ref)
            .and_then(AnswerValue::as_text)
            == Some(PICK_BY_ADDRESS);

        let mut groups: IndexMap<&str, Vec<&ProxyRecord>> = IndexMap::new();
        for record in &records {
            groups.entry(&record.package).or_default().push(record);
        }

        let mut items = Vec::new();
        for (package, group) in &groups {
            let label = if *package == local_package {
                LOCAL_GROUP_LABEL.to_string()
            } else {
                (*package).to_string()
            };

            let mut seen_labels: IndexSet<String> = IndexSet::new();
            let mut group_items = Vec::new();
            for record in group {
                let full_name = ContractFullName::qualified(
                    Some(&record.package),
                    &record.contract,
                    &local_package,
                )
                .to_string();

                let (display, value) = if by_address {
                    (
                        format!("{} at {}", record.contract, record.address),
                        record.address.clone(),
                    )
                } else {
                    (record.contract.clone(), full_name)
                };

                // Two proxies with the same display name collapse to one
                // choice; distinct instances behind one name are hidden.
                if !seen_labels.insert(display.clone()) {
                    continue;
                }

                group_items.push(ChoiceItem::choice(display, AnswerValue::Text(value)));
            }

            if group_items.is_empty() {
                continue;
            }

            items.push(ChoiceItem::separator(label));
            items.extend(group_items);
        }

        items
    }))
}
