//! Canonical contract naming.
//!
//! A contract is identified by an optional package name plus a contract
//! alias. The serialized form is `package/alias` for contracts coming from a
//! linked dependency and a bare `alias` for contracts owned by the local
//! project.

use std::fmt::{Display, Formatter};

/// Canonical identity of a contract: optional package plus required alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractFullName {
    pub package: Option<String>,
    pub alias: String,
}

impl ContractFullName {
    /// Parses a full name from its serialized form.
    ///
    /// Everything before the first `/` is the package; no `/` means the name
    /// belongs to the local project.
    pub fn parse(value: &str) -> Self {
        match value.split_once('/') {
            Some((package, alias)) => Self {
                package: Some(package.to_string()),
                alias: alias.to_string(),
            },
            None => Self {
                package: None,
                alias: value.to_string(),
            },
        }
    }

    /// Builds a full name, dropping the package when it is the local
    /// project's own name.
    pub fn qualified(package: Option<&str>, alias: &str, local_package: &str) -> Self {
        let package = package
            .filter(|package| *package != local_package)
            .map(ToString::to_string);

        Self {
            package,
            alias: alias.to_string(),
        }
    }

    #[must_use]
    pub fn is_local(&self) -> bool {
        self.package.is_none()
    }
}

impl Display for ContractFullName {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.package {
            Some(package) => write!(formatter, "{}/{}", package, self.alias),
            None => formatter.write_str(&self.alias),
        }
    }
}
