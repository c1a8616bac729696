//! # sherpa-client
//!
//! Leptos + WASM frontend for the SHERPA AI vulnerability management
//! dashboard. Replaces the React + Redux client with a Rust-native UI layer.
//!
//! This crate contains pages, components, the per-domain application state
//! stores, and the single outbound generate call the chat view makes. There
//! is no server and no persistence: all state lives in memory and resets on
//! reload. Browser-only dependencies sit behind the `csr` feature so the
//! stores and view logic stay unit-testable on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
