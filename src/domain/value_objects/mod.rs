//! Domain Value Objects
//!
//! Immutable types compared by value.

mod cidr;
mod hash;
mod input_warning;

pub use cidr::{Cidr, CidrError};
pub use hash::ContentHash;
pub use input_warning::InputWarning;
