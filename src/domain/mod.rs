//! System-information core: one reader per fact category plus the collector
//! that composes them into a `Snapshot`.

pub mod collector;
pub mod environment;
pub mod network;
pub mod orchestration;
pub mod platform;
pub mod probe;
pub mod request;
pub mod resources;
pub mod types;
