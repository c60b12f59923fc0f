//! Core library modules for the tydo application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Configuration, data storage paths, messaging
//! - **Domain**: Task entity and validation, sort modes
//! - **Business Rules**: Service layer with structured outcomes
//! - **User Interface**: Console table rendering
//!
//! ## Usage
//!
//! ```rust
//! use tydo::libs::service::TaskService;
//! use tydo::storage::MemoryStore;
//!
//! let mut service = TaskService::new(MemoryStore::new());
//! let outcome = service.add_task("Write release notes", "", false);
//! assert!(outcome.success);
//! ```

pub mod config;
pub mod data_storage;
pub mod messages;
pub mod service;
pub mod sort;
pub mod task;
pub mod view;
