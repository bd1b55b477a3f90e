//! Command implementations for skills-cli
//!
//! Each command exposes `run`, wired to the real git collaborator and stdin, and most
//! also a `run_with` taking those as parameters so tests can drive them.

pub mod completions;
pub mod doctor;
pub mod helpers;
pub mod install;
pub mod installed;
pub mod list;
pub mod pack;
pub mod remove;
pub mod sync;
pub mod validate;
