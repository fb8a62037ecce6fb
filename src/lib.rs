//! repo-lens crate
//!
//! This crate is an implementation detail of the `repo-lens` tool. This crate's API is fluid and may change without warning
//! and in a semver-incompatible way.
//
// # Module Organization
//
// - [`commands`]: Command-line interface and orchestration
// - [`facts`]: GitHub access and the extraction pipeline
// - [`analysis`]: Pure metrics computed from extracted facts
// - [`reports`]: Text report, console views and on-disk artifacts
// - [`misc`]: Small shared types

pub type Result<T, E = anyhow::Error> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod analysis;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod facts;

#[doc(hidden)]
pub mod misc;

#[doc(hidden)]
pub mod reports;

pub use crate::commands::{Host, run, run_with_lookup};
