//! # AMALGAM
//!
//! Build-time amalgamation of a header tree into a single file.
//!
//! AMALGAM walks a source directory, records which headers include which
//! other headers, and writes every file into one output in dependency-first
//! order. Local `#include "..."` directives are resolved against the
//! collected set and stripped; `#include <...>` directives are hoisted into
//! one sorted, deduplicated block at the top of the output.
//!
//! ## Output Layout
//!
//! - Optional attribution comment and an include-guard macro pair
//! - Sorted system includes, once each
//! - A single namespace block wrapping every transformed file body

pub mod core;
pub mod formatters;
