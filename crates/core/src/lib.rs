//! Proxup Core Library
//!
//! This crate provides the persisted-state model for proxup, a command-line
//! tool that manages upgradeable-contract deployments across multiple
//! networks and linked packages.
//!
//! # Key Features
//!
//! - **Project Manifest**: Parse and validate the YAML project description
//!   (contract aliases, linked dependencies)
//! - **Network State**: Per-network proxy records and partial-filter queries
//! - **Build Artifacts**: Compiled contract interfaces with method
//!   introspection
//! - **Contract Naming**: Canonical `package/alias` contract identities
//! - **Configuration Management**: Handle project, network, and build paths
//! - **Error Handling**: Comprehensive error types for all failure modes
//!
//! # Examples
//!
//! Loading the full project state for one command invocation:
//!
//! ```no_run
//! use proxup_core::file_handling::load_project_state;
//!
//! let state = load_project_state(".", &None)?;
//! println!("Project: {}", state.local_package());
//! # Ok::<(), proxup_core::error::Error>(())
//! ```

pub mod artifacts;
pub mod config;
pub mod error;
pub mod file_handling;
pub mod manifest;
pub mod naming;
pub mod network;
pub mod state;
