//! Shared test utilities for the toolenv workspace.
//!
//! This crate provides a fixture that lays out a fake home directory with
//! an asdf root, installs and declaration files. It is a dev-dependency
//! only, never published.

pub mod asdf;

pub use asdf::TestAsdf;
