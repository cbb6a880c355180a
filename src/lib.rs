//! Core library for the `tankrig` CLI.
//!
//! This crate provides the building blocks used by the binary: the ammo
//! request model and wire codec, load plan rendering, result log parsing,
//! quantile reduction, report persistence, and the blocking boundary to
//! the external load generator. The primary user-facing interface is the
//! `tankrig` command-line application.
pub mod ammo;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod logger;
pub mod plan;
pub mod probe;
pub mod process;
pub mod report;
pub mod results;
pub mod run;
pub mod stats;
pub mod synth;
