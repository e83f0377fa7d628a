// Library surface for headless/integration tests and reuse.
// Keep this lean to avoid coupling to bin-only types in main.rs.
pub mod dialog;
pub mod message;
pub mod runtime;
pub mod session;
pub mod settings;
pub mod ui;
