// src/config/mod.rs
// =============================================================================
// User settings.
//
// Settings live in a small TOML file:
//
//   enable-auto-convert = true
//   placeholder-text = "Untitled"
//   timeout-secs = 10
//
// Every key is optional. A missing file is only an error if the user asked
// for it with --config; otherwise the defaults are used.
// =============================================================================

mod settings;

pub use settings::{load_settings, Settings, DEFAULT_TIMEOUT_SECS};
