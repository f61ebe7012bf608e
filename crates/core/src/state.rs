use indexmap::IndexMap;

use crate::artifacts::BuildArtifacts;
use crate::manifest::{DependencyManifest, ProjectManifest};

/// The in-memory snapshot a resolution pass reads: the local manifest, the
/// manifests of linked dependencies (one level deep), and the compiled
/// build artifacts.
///
/// Assembled once per command invocation and never mutated; every derived
/// catalog or proxy listing is recomputed from it.
#[derive(Debug, Clone)]
pub struct ProjectState {
    pub manifest: ProjectManifest,
    pub dependencies: IndexMap<String, DependencyManifest>,
    pub artifacts: BuildArtifacts,
}

impl ProjectState {
    /// The local project's own package name.
    #[must_use]
    pub fn local_package(&self) -> &str {
        &self.manifest.name
    }

    /// The loaded manifest of a linked dependency, if its name is linked and
    /// its manifest was found on disk.
    #[must_use]
    pub fn dependency(&self, name: &str) -> Option<&DependencyManifest> {
        self.dependencies.get(name)
    }
}
