//! globfiles - expand a glob pattern into a forward-slash file list
//!
//! This library provides the pattern expansion and output rendering used by the
//! `globfiles` binary, a helper that build-configuration generators call to
//! collect source files without walking whole directory trees.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

pub mod expand;
pub mod output;
