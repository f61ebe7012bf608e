//! Configuration path utilities for proxup.
//!
//! This module resolves where the project manifest, per-network files,
//! dependency manifests, and build artifacts live. Shell expansions like `~`
//! are resolved with `shellexpand`.

/// Default directory the project files are looked up in
const DEFAULT_PROJECT_DIR: &str = ".";
/// File name of the project manifest inside the project directory
pub const MANIFEST_FILE: &str = "proxup.yml";
/// Directory compiled contract artifacts are read from, relative to the
/// project directory
const DEFAULT_BUILD_DIR: &str = "build/contracts";
/// Directory linked dependency packages are unpacked under, relative to the
/// project directory
const PACKAGES_DIR: &str = "packages";

/// Resolves the project directory.
///
/// Uses the provided directory if given, otherwise the current directory.
/// Shell expansions like `~` are resolved.
pub fn get_project_dir(project_dir_arg: &Option<String>) -> String {
    let project_dir = match project_dir_arg {
        Some(project_dir) => project_dir,
        None => DEFAULT_PROJECT_DIR,
    };

    shellexpand::tilde(project_dir).to_string()
}

/// Path of the project manifest inside a project directory.
pub fn get_manifest_path(project_dir: &str) -> String {
    format!("{project_dir}/{MANIFEST_FILE}")
}

/// Path of the persisted proxy state for one network, e.g.
/// `proxup.mainnet.yml`.
pub fn get_network_path(project_dir: &str, network: &str) -> String {
    format!("{project_dir}/proxup.{network}.yml")
}

/// Resolves the build artifact directory.
///
/// Uses the provided directory if given, otherwise `build/contracts` inside
/// the project directory. Shell expansions like `~` are resolved.
pub fn get_build_dir(project_dir: &str, build_dir_arg: &Option<String>) -> String {
    match build_dir_arg {
        Some(build_dir) => shellexpand::tilde(build_dir).to_string(),
        None => format!("{project_dir}/{DEFAULT_BUILD_DIR}"),
    }
}

/// Path of a linked dependency's own manifest.
pub fn get_dependency_manifest_path(project_dir: &str, dependency: &str) -> String {
    format!("{project_dir}/{PACKAGES_DIR}/{dependency}/{MANIFEST_FILE}")
}
