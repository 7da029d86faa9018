//! parachute_tests: End-to-end tests for the decorator surface.
//!
//! All tests live under `tests/`.
