// src/core/mod.rs

// The `core` module holds everything that works without a terminal: data
// models, the record store, the simulated scanners, and evidence export.

/// Data structures shared across the application: scan records, outcomes,
/// errors, and label sanitization.
pub mod models;

/// The in-memory, newest-first store of saved scans and its chart dataset.
pub mod store;

/// Simulated URL and APK scans: target routing, fixed delays, random
/// risk scores.
pub mod scanner;

/// Evidence-kit export (a JSON file per saved scan).
pub mod evidence;
