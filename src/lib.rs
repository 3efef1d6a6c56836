//! # file-index
//!
//! Offline indexer that walks filesystem roots and records a snapshot of the
//! directory hierarchy, the files in it and derived metadata tags into SQLite.
//!
//! ## Core Components
//!
//! - [`walker`]: depth-first walk, parent-id threading and skip-on-error handling
//! - [`boundary`]: mount point detection and the filesystem allow-list
//! - [`classify`]: size categories and folder depth
//! - [`tagger`] / [`formats`]: per-file tag derivation and the format identifier table
//! - [`owner`]: platform owner name lookup
//! - [`catalog`] / [`db`]: idempotent inserts and the schema they rely on
//! - [`config`] / [`roots`]: layered configuration and root planning
//!
//! The walk is single-threaded and writes through one transaction that is
//! committed once every root has been indexed.

pub mod boundary;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod db;
pub mod error;
pub mod formats;
pub mod owner;
pub mod roots;
pub mod tagger;
pub mod types;
pub mod walker;

#[cfg(test)]
mod tests;
