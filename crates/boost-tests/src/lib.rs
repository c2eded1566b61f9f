//! Scenario and adversarial test suite for the boost ledger.
//!
//! Integration tests live under `tests/`; shared fixtures are in [`helpers`].

pub mod helpers;
