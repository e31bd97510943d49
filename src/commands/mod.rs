pub mod create;
pub mod graph;
