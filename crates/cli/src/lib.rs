//! dlauncher CLI Library
//!
//! This crate provides the command-line interface for dlauncher. It parses
//! flags, talks to the user through a text or dialog [`interaction`], and
//! drives the [`launcher`] flows on top of `dlauncher-core`.
//!
//! # Examples
//!
//! ```bash
//! # Create ~/.config/dlauncher/config.yaml
//! dlauncher init
//!
//! # Search google for "cats" in a new chrome tab
//! dlauncher run -e chrome -s google -p cats
//!
//! # Prompt for the shortcut and params in dialogs
//! dlauncher run -e firefox --use-gui
//!
//! # Save a new shortcut
//! dlauncher add -s crates -t "https://crates.io/search?q=%s"
//! ```

pub mod cli_args;
pub mod interaction;
pub mod launcher;
