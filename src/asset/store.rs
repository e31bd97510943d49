//! Asset store - resolves a target asset and its dependency graph
//!
//! Each asset is materialized at most once per store. Materializing tries
//! persisted state first; only when nothing was persisted are the
//! dependencies resolved and the asset generated. The first failure aborts
//! the pass.

use std::any::TypeId;
use std::collections::{HashMap, HashSet};

use tracing::{debug, info};

use super::{asset_id, lookup, Asset, Parents};
use crate::config::InstallInputs;
use crate::domain::entities::AssetFile;
use crate::domain::ports::FileFetcher;
use crate::error::{ClustergenError, ClustergenResult, ErrorKind, Stage};

/// Where an asset is in its lifecycle within one store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetState {
    Unresolved,
    /// Dependencies are being resolved; seeing this again means a cycle
    Resolving,
    /// Terminal. `loaded` is true when it came from persisted files
    Materialized { loaded: bool },
    /// Terminal. Not retried within the same store; `kind` is what it
    /// failed with
    Failed { kind: ErrorKind },
}

/// Memoizing resolver for one resolution pass
pub struct AssetStore<'a> {
    fetcher: &'a dyn FileFetcher,
    inputs: &'a InstallInputs,
    resolved: HashMap<TypeId, Box<dyn Asset>>,
    states: HashMap<TypeId, AssetState>,
    stack: Vec<&'static str>,
}

impl<'a> AssetStore<'a> {
    pub fn new(fetcher: &'a dyn FileFetcher, inputs: &'a InstallInputs) -> Self {
        Self {
            fetcher,
            inputs,
            resolved: HashMap::new(),
            states: HashMap::new(),
            stack: Vec::new(),
        }
    }

    /// Resolve the default instance of `T` and return it materialized
    pub fn fetch<T: Asset + Default + 'static>(&mut self) -> ClustergenResult<&T> {
        self.resolve_inner(Box::new(T::default()))?;
        self.get::<T>()
    }

    /// Resolve `asset` unless an asset of the same type is already
    /// materialized, in which case `asset` is discarded and the existing
    /// one returned.
    pub fn resolve(&mut self, asset: Box<dyn Asset>) -> ClustergenResult<&dyn Asset> {
        let id = asset_id(&*asset);
        let name = asset.name();
        self.resolve_inner(asset)?;
        self.resolved
            .get(&id)
            .map(|asset| &**asset)
            .ok_or(ClustergenError::NotInitialized { accessor: name })
    }

    pub fn state_of<T: Asset + 'static>(&self) -> AssetState {
        self.states
            .get(&TypeId::of::<T>())
            .copied()
            .unwrap_or(AssetState::Unresolved)
    }

    /// A materialized asset by type
    pub fn get<T: Asset + 'static>(&self) -> ClustergenResult<&T> {
        lookup(&self.resolved)
    }

    /// Files of a materialized asset
    pub fn files_of<T: Asset + 'static>(&self) -> ClustergenResult<&[AssetFile]> {
        Ok(self.get::<T>()?.files())
    }

    fn state(&self, id: TypeId) -> AssetState {
        self.states
            .get(&id)
            .copied()
            .unwrap_or(AssetState::Unresolved)
    }

    fn resolve_inner(&mut self, asset: Box<dyn Asset>) -> ClustergenResult<()> {
        let id = asset_id(&*asset);
        let name = asset.name();

        match self.state(id) {
            AssetState::Materialized { .. } => {
                debug!(asset = name, "reusing materialized asset");
                return Ok(());
            }
            AssetState::Resolving => {
                let start = self.stack.iter().position(|n| *n == name).unwrap_or(0);
                let mut chain = self.stack[start..].to_vec();
                chain.push(name);
                return Err(ClustergenError::DependencyCycle { chain });
            }
            AssetState::Failed { kind } => {
                return Err(ClustergenError::PreviouslyFailed { asset: name, kind });
            }
            AssetState::Unresolved => {}
        }

        self.states.insert(id, AssetState::Resolving);
        self.stack.push(name);
        let result = self.materialize(asset);
        self.stack.pop();

        match result {
            Ok((loaded, asset)) => {
                if loaded {
                    info!(asset = name, "loaded asset from persisted files");
                } else {
                    info!(asset = name, "generated asset");
                }
                self.states.insert(id, AssetState::Materialized { loaded });
                self.resolved.insert(id, asset);
                Ok(())
            }
            Err(err) => {
                debug!(asset = name, error = %err, "asset failed");
                self.states.insert(id, AssetState::Failed { kind: err.kind() });
                Err(err)
            }
        }
    }

    fn materialize(
        &mut self,
        mut asset: Box<dyn Asset>,
    ) -> ClustergenResult<(bool, Box<dyn Asset>)> {
        let name = asset.name();

        let found = asset
            .load(self.fetcher)
            .map_err(|err| ClustergenError::in_asset(name, Stage::Load, err))?;
        if found {
            return Ok((true, asset));
        }
        debug!(asset = name, "nothing persisted, generating");

        let mut declared = HashSet::new();
        for dependency in asset.dependencies() {
            declared.insert(asset_id(&*dependency));
            self.resolve_inner(dependency)
                .map_err(|err| ClustergenError::in_asset(name, Stage::Dependencies, err))?;
        }

        let parents = Parents::new(&self.resolved, declared, self.inputs);
        asset
            .generate(&parents)
            .map_err(|err| ClustergenError::in_asset(name, Stage::Generate, err))?;
        Ok((false, asset))
    }
}
