//! Per-network persisted proxy state.
//!
//! Each network a project has deployed to gets one network file recording
//! the upgradeable-proxy instances created there. The same `{package,
//! contract}` pair may appear multiple times when several instances of one
//! contract exist.

use serde::{Deserialize, Serialize};

/// One deployed proxy instance recorded for a network.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ProxyRecord {
    pub package: String,
    pub contract: String,
    pub address: String,
}

/// The persisted proxy state of one network.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct NetworkFile {
    pub network: Option<String>,
    #[serde(default)]
    pub proxies: Vec<ProxyRecord>,
}

/// A partial filter over proxy records. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyQuery {
    pub package: Option<String>,
    pub contract: Option<String>,
    pub address: Option<String>,
}

impl ProxyQuery {
    #[must_use]
    pub fn matches(&self, record: &ProxyRecord) -> bool {
        let package_matches = self
            .package
            .as_ref()
            .map_or(true, |package| *package == record.package);
        let contract_matches = self
            .contract
            .as_ref()
            .map_or(true, |contract| *contract == record.contract);
        let address_matches = self
            .address
            .as_ref()
            .map_or(true, |address| *address == record.address);

        package_matches && contract_matches && address_matches
    }
}

impl NetworkFile {
    /// Records matching the query, in stored order.
    pub fn find(&self, query: &ProxyQuery) -> Vec<&ProxyRecord> {
        self.proxies
            .iter()
            .filter(|record| query.matches(record))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(package: &str, contract: &str, address: &str) -> ProxyRecord {
        ProxyRecord {
            package: package.to_string(),
            contract: contract.to_string(),
            address: address.to_string(),
        }
    }

    fn network() -> NetworkFile {
        NetworkFile {
            network: Some("dev".to_string()),
            proxies: vec![
                record("my-project", "Token", "0xA1"),
                record("my-project", "Token", "0xA2"),
                record("openlib", "Vault", "0xB1"),
            ],
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        let network = network();
        assert_eq!(network.find(&ProxyQuery::default()).len(), 3);
    }

    #[test]
    fn test_query_by_contract() {
        let network = network();
        let query = ProxyQuery {
            contract: Some("Token".to_string()),
            ..ProxyQuery::default()
        };

        let found = network.find(&query);
        assert_eq!(found.len(), 2);
        // Stored order is preserved
        assert_eq!(found[0].address, "0xA1");
        assert_eq!(found[1].address, "0xA2");
    }

    #[test]
    fn test_query_by_address_and_package() {
        let network = network();
        let query = ProxyQuery {
            package: Some("openlib".to_string()),
            address: Some("0xB1".to_string()),
            ..ProxyQuery::default()
        };

        let found = network.find(&query);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].contract, "Vault");
    }

    #[test]
    fn test_query_with_no_match() {
        let network = network();
        let query = ProxyQuery {
            contract: Some("Unknown".to_string()),
            ..ProxyQuery::default()
        };
        assert!(network.find(&query).is_empty());
    }

    #[test]
    fn test_network_file_deserializes() {
        let yaml = r#"
network: dev
proxies:
  - package: my-project
    contract: Token
    address: "0xA1"
"#;
        let network: NetworkFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(network.proxies.len(), 1);
        assert_eq!(network.proxies[0].contract, "Token");
    }
}
