//! Domain Services
//!
//! Pure transformations over domain entities. No I/O.

mod upgrade;

pub use upgrade::{upgrade_install_config, UpgradeError};
