#[cfg(all(feature = "wasm", feature = "no-wasm"))]
compile_error!("features `wasm` and `no-wasm` are mutually exclusive; build wasm with --no-default-features");

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod initials;
pub mod interface;
pub mod logging;
pub mod model;
pub mod view;
