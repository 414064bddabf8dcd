//! dlauncher Core Library
//!
//! This crate provides the core functionality for dlauncher, a personal command
//! launcher that expands a named shortcut template with parameters and hands
//! the result to a named executable definition.
//!
//! # Key Features
//!
//! - **Definitions**: Executables, shortcuts and the YAML config that holds them
//! - **Config Store**: Load, bootstrap and extend the config file
//! - **Resolution**: Turn a shortcut, an executable and parameters into an argv
//! - **Execution**: Spawn the resolved command without waiting on it
//!
//! # Examples
//!
//! ```no_run
//! use dlauncher_core::config::resolve_config_path;
//! use dlauncher_core::resolution::{build_command, SubstitutionPolicy};
//! use dlauncher_core::store::ConfigStore;
//!
//! let store = ConfigStore::load(&resolve_config_path(None))?;
//! let request = build_command(
//!     "chrome",
//!     store.get_executable("chrome")?,
//!     "google",
//!     store.get_shortcut("google")?,
//!     &["cats".to_string()],
//!     &SubstitutionPolicy::default(),
//! )?;
//! dlauncher_core::execution::launch(&request.command)?;
//! # Ok::<(), dlauncher_core::error::Error>(())
//! ```

pub mod config;
pub mod definitions;
pub mod error;
pub mod execution;
pub mod resolution;
pub mod store;
