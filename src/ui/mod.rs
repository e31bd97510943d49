//! Terminal output helpers for the clustergen binary

pub mod json;
