//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on the Domain layer (entities, policies, ports) and the asset graph
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and the asset store
//!
//! ## Use Cases
//!
//! - `CreateUseCase` - Resolves a target (install config or manifests) and writes its files

pub mod create;

pub use create::{CreateOptions, CreateResult, CreateTarget, CreateUseCase, WrittenFile};
