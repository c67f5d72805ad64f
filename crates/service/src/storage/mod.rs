//! Storage abstractions for service layer
//!
//! Process-local insertion-ordered maps. Nothing here outlives the process.

pub mod memory_map_store;
