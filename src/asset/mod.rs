//! Assets - the nodes of the installer's dependency graph
//!
//! An asset is a named unit of installer output. It declares the assets it
//! depends on, knows how to generate itself from their materialized values,
//! and may know how to reconstitute itself from files persisted by an
//! earlier run. The [`AssetStore`] resolves a target asset and everything it
//! depends on.
//!
//! Concrete assets:
//! - [`installconfig`] - user inputs and the install config record
//! - [`templates`] - static custom resource definitions
//! - [`manifests`] - manifests compiled from the install config

use std::any::{type_name, Any, TypeId};
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::config::InstallInputs;
use crate::domain::entities::AssetFile;
use crate::domain::ports::FileFetcher;
use crate::error::{ClustergenError, ClustergenResult};

pub mod installconfig;
pub mod manifests;
pub mod templates;
mod store;

pub use store::{AssetState, AssetStore};

/// Upcast to `Any` so a materialized asset can be handed back as its
/// concrete type.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A node in the asset graph.
///
/// Identity is the concrete type: two values of the same type are the same
/// asset, and a resolution pass materializes it at most once.
pub trait Asset: AsAny {
    /// Human-readable name used in logs and error messages
    fn name(&self) -> &'static str;

    /// Assets whose materialized values `generate` reads
    fn dependencies(&self) -> Vec<Box<dyn Asset>> {
        Vec::new()
    }

    /// Populate this asset from its resolved dependencies
    fn generate(&mut self, parents: &Parents<'_>) -> ClustergenResult<()>;

    /// Reconstitute this asset from persisted files.
    ///
    /// `Ok(false)` means nothing was persisted and the asset must be
    /// generated. Absence is never an error.
    fn load(&mut self, _fetcher: &dyn FileFetcher) -> ClustergenResult<bool> {
        Ok(false)
    }

    /// Files this asset writes; empty until materialized
    fn files(&self) -> &[AssetFile] {
        &[]
    }
}

/// Identity of an asset within a resolution pass
pub fn asset_id(asset: &dyn Asset) -> TypeId {
    asset.as_any().type_id()
}

/// Read access to the materialized dependencies of the asset being
/// generated, plus the user inputs for the pass.
///
/// Only the declared dependencies are visible, whatever else the store
/// has resolved.
pub struct Parents<'a> {
    resolved: &'a HashMap<TypeId, Box<dyn Asset>>,
    declared: HashSet<TypeId>,
    inputs: &'a InstallInputs,
}

impl<'a> Parents<'a> {
    pub(crate) fn new(
        resolved: &'a HashMap<TypeId, Box<dyn Asset>>,
        declared: HashSet<TypeId>,
        inputs: &'a InstallInputs,
    ) -> Self {
        Self {
            resolved,
            declared,
            inputs,
        }
    }

    /// A materialized dependency by type
    pub fn get<T: Asset + 'static>(&self) -> ClustergenResult<&'a T> {
        if !self.declared.contains(&TypeId::of::<T>()) {
            return Err(ClustergenError::NotInitialized {
                accessor: type_name::<T>(),
            });
        }
        lookup(self.resolved)
    }

    /// User inputs for this resolution pass
    pub fn inputs(&self) -> &'a InstallInputs {
        self.inputs
    }
}

pub(crate) fn lookup<T: Asset + 'static>(
    resolved: &HashMap<TypeId, Box<dyn Asset>>,
) -> ClustergenResult<&T> {
    resolved
        .get(&TypeId::of::<T>())
        .and_then(|asset| (**asset).as_any().downcast_ref::<T>())
        .ok_or(ClustergenError::NotInitialized {
            accessor: type_name::<T>(),
        })
}

/// One asset and the assets it depends on, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyNode {
    pub name: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DependencyNode>,
    /// Set when this node closes a cycle; its children are not expanded
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub cycle: bool,
}

/// Expand the declared dependencies of `root` without materializing anything
pub fn dependency_tree(root: &dyn Asset) -> DependencyNode {
    let mut path = Vec::new();
    expand(root, &mut path)
}

fn expand(asset: &dyn Asset, path: &mut Vec<TypeId>) -> DependencyNode {
    let id = asset_id(asset);
    if path.contains(&id) {
        return DependencyNode {
            name: asset.name(),
            children: Vec::new(),
            cycle: true,
        };
    }

    path.push(id);
    let children = asset
        .dependencies()
        .iter()
        .map(|dep| expand(&**dep, path))
        .collect();
    path.pop();

    DependencyNode {
        name: asset.name(),
        children,
        cycle: false,
    }
}

impl DependencyNode {
    /// Render as an indented tree, one asset per line
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(0, &mut out);
        out
    }

    fn render_into(&self, depth: usize, out: &mut String) {
        out.push_str(&"  ".repeat(depth));
        out.push_str(self.name);
        if self.cycle {
            out.push_str(" (cycle)");
        }
        out.push('\n');
        for child in &self.children {
            child.render_into(depth + 1, out);
        }
    }
}
