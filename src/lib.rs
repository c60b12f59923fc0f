//! # Tydo - In-Memory Todo Console
//!
//! An interactive console application for managing todo tasks that live
//! only for the lifetime of the process.
//!
//! ## Features
//!
//! - **Task Management**: Create, update, toggle and delete titled tasks
//! - **Short-Id Addressing**: Reference any task by a unique id prefix
//! - **Duplicate Guard**: Case-insensitive duplicate-title detection with confirm-to-force
//! - **Multi-Criteria Sorting**: Insertion order, creation time (both directions), incomplete-first
//! - **Display Preferences**: Configurable default sort mode and table layout
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tydo::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod storage;
