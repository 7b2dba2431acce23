//! # git-bylines
//!
//! A CLI tool to amend the most recent local commit with byLine
//! attribution trailers.
//!
//! This crate provides functionality to:
//! - Interactively select, add, and toggle byLines from a per-repo list
//! - Inject `Authored-by:`/`Co-authored-by:` trailers into the commit message
//! - Amend the commit after a confirmation
//! - Persist known byLines and the last-used selection in JSON config files
//!
//! ## Usage
//!
//! ```bash
//! # Direct invocation: always runs the selection workflow
//! git-bylines
//!
//! # Hook-style invocation (e.g. from a post-commit hook): respects the
//! # per-clone enabled flag
//! git-bylines commit
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface and main entry point
//! - [`git`] - Git command wrappers
//! - [`config`] - JSON-backed repo and per-clone config records
//! - [`selection`] - The byline selection set
//! - [`message`] - Trailer injection into the commit message
//! - [`prompt`] - User input abstractions
//! - [`banner`] - Decorative CLI banner

pub mod banner;
pub mod cli;
pub mod config;
pub mod git;
pub mod message;
pub mod prompt;
pub mod selection;
