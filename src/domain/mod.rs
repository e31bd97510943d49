//! Domain Layer
//!
//! The records and rules of an installation, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Records that assets produce (InstallConfig, Network, AssetFile)
//! - `value_objects/` - Immutable value types (Cidr, ContentHash)
//! - `services/` - Pure transforms (schema upgrade)
//! - `policies/` - Pluggable rules (defaults, validation)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system directly
//! 2. **Pure Functions** - Upgrade, defaults and validation are deterministic
//! 3. **Ports & Adapters** - Persisted state is reached through `FileFetcher`

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
