//! Tooling around an MPI SCC benchmark: an offline checker that compares a
//! solver's vertex -> component dump against SCCs recomputed from the edge
//! list, and a collector for the benchmark timing logs.

pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod usecase;
