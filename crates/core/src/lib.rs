//! memories_core - shared types for the memories list manager.
//!
//! Pure data types, validation and storage contracts. Nothing in this crate
//! performs I/O; the server and client crates provide the imperative shell.

pub mod auth;
pub mod items;
pub mod storage;
