//! Log output for the shoplist service.
//!
//! The binary calls [`init`] once at startup; tests that want to see
//! request and store events call [`tracing::init_for_tests`].

pub mod tracing;

/// Install the JSON log subscriber for the process.
///
/// Repeated calls leave the first subscriber in place.
pub fn init() {
    tracing::init();
}
