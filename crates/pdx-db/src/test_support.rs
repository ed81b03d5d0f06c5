//! Shared test utilities for pdx-db tests.
