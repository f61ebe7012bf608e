//! Proxup CLI Library
//!
//! This crate provides the command-line interface for proxup, a tool that
//! manages upgradeable-contract deployments across multiple networks and
//! linked packages. It covers the interactive layer: filling in a command's
//! missing argument/option values and resolving ambiguous human-supplied
//! contract and proxy references into one canonical identity.
//!
//! # Key Features
//!
//! - **Parameter Resolution**: Merge supplied values, defaults, and batched
//!   interactive input into one answer set
//! - **Proxy Resolution**: Turn a partial contract/address reference into a
//!   canonical proxy identity against a network's persisted state
//! - **Contract Catalogs**: Aggregate built, manifest-declared, and
//!   dependency contracts into grouped, selectable choice lists
//! - **Method Introspection**: Offer method and argument questions derived
//!   from compiled contract interfaces
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`questions`]: Question specs, choice lists, and answer values
//! - [`prompt`]: The batched interactive-input seam and its stdin
//!   implementation
//! - [`resolver`]: The generic argument/option resolver
//! - [`proxies`]: Proxy reference resolution and grouped proxy listings
//! - [`catalog`]: Contract and method catalogs
//!
//! # Examples
//!
//! The CLI binary (`proxup`) can be used in several ways:
//!
//! ```bash
//! # List every contract this project can deploy or link
//! proxup contracts
//!
//! # List the interface of one contract
//! proxup methods Token
//!
//! # Resolve a call plan fully interactively
//! proxup call --network dev
//!
//! # Resolve a call plan without prompting
//! proxup -n call --network dev --contract Token -m transfer \
//!     -a to=0xAA -a amount=10
//! ```

pub mod catalog;
pub mod cli_args;
pub mod prompt;
pub mod proxies;
pub mod questions;
pub mod resolver;
