// Library target exists so integration tests can import the crate's types.
// The binary entry point is main.rs; this file re-declares the module tree so
// tests can reach `kaiwa::content::*` / `kaiwa::session::*` / `kaiwa::speech::*`.
// Some items are only exercised through the binary, so suppress dead_code.
#![allow(dead_code)]

// Public: used directly by integration tests
pub mod content;
pub mod services;
pub mod session;
pub mod speech;

// Private: compiled here as well so their unit tests run under `cargo test`
mod app;
mod config;
mod event;
