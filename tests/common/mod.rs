//! Common test utilities and helpers
//!
//! Shared fixtures for building throwaway working copies in temporary
//! directories.

#![allow(dead_code)]

pub mod test_fixtures;
