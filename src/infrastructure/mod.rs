// Infrastructure layer: file readers, SCC detector, eventing
pub mod event_ndjson;
pub mod scc_kosaraju;
pub mod text_loader;
pub mod timing_log;
