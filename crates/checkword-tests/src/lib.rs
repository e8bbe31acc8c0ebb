//! Scenario and property test suite for checkword.
//!
//! Integration tests live under `tests/` and drive `checkword-core` only
//! through its public API. Shared fixtures are in [`helpers`].

pub mod helpers;
