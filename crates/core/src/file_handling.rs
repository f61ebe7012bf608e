//! File handling and validation for proxup project state.
//!
//! This module reads and validates the project manifest, per-network proxy
//! files, dependency manifests, and compiled build artifacts, and assembles
//! them into the in-memory [`ProjectState`] the resolution layer works on.

use std::fs::File;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::artifacts::{BuildArtifacts, ContractArtifact};
use crate::config;
use crate::error::Error::{
    AliasWithSlash, DependencyWithSlash, EmptyAlias, EmptyContractName, EmptyProjectName,
};
use crate::error::{Error, Result};
use crate::manifest::{DependencyManifest, ProjectManifest};
use crate::network::NetworkFile;
use crate::state::ProjectState;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

fn validate_manifest(manifest: &ProjectManifest, path: &str) -> Result<()> {
    if manifest.name.is_empty() {
        return Err(EmptyProjectName {
            path: path.to_string(),
        });
    }

    for (alias, contract_name) in &manifest.contracts {
        if alias.is_empty() {
            return Err(EmptyAlias);
        }

        if alias.contains('/') {
            return Err(AliasWithSlash(alias.clone()));
        }

        if contract_name.is_empty() {
            return Err(EmptyContractName(alias.clone()));
        }
    }

    for dependency in manifest.dependency_names() {
        if dependency.contains('/') {
            return Err(DependencyWithSlash(dependency.to_string()));
        }
    }

    Ok(())
}

/// Loads and validates the project manifest.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the YAML is malformed, or
/// validation fails (empty project name, empty or slash-containing aliases,
/// slash-containing dependency names).
pub fn get_project_manifest(path: &str) -> Result<ProjectManifest> {
    let reader = get_reader("project manifest", path)?;

    let parsing_result: serde_yaml::Result<ProjectManifest> = serde_yaml::from_reader(reader);

    let manifest = parsing_result.map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "project manifest".to_string(),
            path.to_string(),
            e,
        )
    })?;

    validate_manifest(&manifest, path)?;

    Ok(manifest)
}

/// Reads the persisted proxy state for one network.
///
/// A network the project has never deployed to has no file; that is normal
/// and yields an empty state rather than an error.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn get_network_file(path: &str) -> Result<NetworkFile> {
    if !Path::new(path).exists() {
        debug!("No network file at `{path}`, starting from empty proxy state");
        return Ok(NetworkFile::default());
    }

    let reader = get_reader("network", path)?;

    let parsing_result: serde_yaml::Result<NetworkFile> = serde_yaml::from_reader(reader);

    match parsing_result {
        Ok(network_file) => Ok(network_file),
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "network".to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Loads all compiled contract artifacts from the build directory.
///
/// A missing build directory yields an empty artifact set (nothing has been
/// compiled yet). Artifact files are read in file-name order so the catalog
/// is deterministic.
///
/// # Errors
///
/// Returns an error if the directory exists but cannot be listed, or if an
/// artifact file cannot be read or parsed.
pub fn get_build_artifacts(build_dir: &str) -> Result<BuildArtifacts> {
    if !Path::new(build_dir).is_dir() {
        debug!("No build directory at `{build_dir}`, no compiled contracts available");
        return Ok(BuildArtifacts::default());
    }

    let entries = std::fs::read_dir(build_dir)
        .map_err(|e| Error::io_error("build".to_string(), build_dir.to_string(), e))?;

    let mut paths: Vec<std::path::PathBuf> = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| Error::io_error("build".to_string(), build_dir.to_string(), e))?;
        let path = entry.path();

        if path.extension().and_then(|extension| extension.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut contracts = IndexMap::new();
    for path in paths {
        let path_string = path.to_string_lossy().to_string();
        let reader = get_reader("artifact", &path_string)?;

        let artifact: ContractArtifact = serde_json::from_reader(reader).map_err(|e| {
            Error::json_error(
                "reading".to_string(),
                "artifact".to_string(),
                path_string.clone(),
                e,
            )
        })?;

        contracts.insert(artifact.contract_name.clone(), artifact);
    }

    Ok(BuildArtifacts { contracts })
}

fn get_dependency_manifests(
    project_dir: &str,
    manifest: &ProjectManifest,
) -> Result<IndexMap<String, DependencyManifest>> {
    let mut dependencies = IndexMap::new();

    for name in manifest.dependency_names() {
        let path = config::get_dependency_manifest_path(project_dir, name);

        if !Path::new(&path).exists() {
            warn!("Linked dependency `{name}` has no manifest at `{path}`, skipping it");
            continue;
        }

        let dependency = get_project_manifest(&path)?;
        dependencies.insert(name.to_string(), dependency);
    }

    Ok(dependencies)
}

/// Assembles the full in-memory project state for one command invocation.
///
/// Loads the project manifest (required), the manifests of linked
/// dependencies (missing ones are skipped with a warning), and the build
/// artifacts (an absent build directory is empty, not an error).
///
/// # Errors
///
/// Returns an error if the project manifest is missing or invalid, or if any
/// present file cannot be read or parsed.
pub fn load_project_state(project_dir: &str, build_dir_arg: &Option<String>) -> Result<ProjectState> {
    let manifest_path = config::get_manifest_path(project_dir);
    debug!("Project manifest path: `{manifest_path}`");

    let manifest = get_project_manifest(&manifest_path)?;
    let dependencies = get_dependency_manifests(project_dir, &manifest)?;

    let build_dir = config::get_build_dir(project_dir, build_dir_arg);
    let artifacts = get_build_artifacts(&build_dir)?;

    Ok(ProjectState {
        manifest,
        dependencies,
        artifacts,
    })
}
