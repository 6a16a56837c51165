// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Tests unwrap and panic freely
#![cfg_attr(
    test,
    allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]

//! Navigation-rail selection animation and photo API user records.
//!
//! Two independent pieces:
//!
//! - [`rail`]: per-destination selection progress for a navigation rail.
//!   Selecting a destination plays it forward to 1 and the previous one in
//!   reverse to 0; the host advances time explicitly with
//!   [`rail::RailSelection::tick`] and reads back progress and label
//!   opacity.
//! - [`model`]: the photo API's `User` record, its builder, and the flat
//!   key/value wire codec.
//!
//! # Key entry points
//!
//! - [`rail::Rail`] - destinations with opaque host content
//! - [`rail::RailSelection`] - the bare selection state machine
//! - [`model::UserRecord`] - immutable user record
//! - [`options::Options`] - runtime configuration loaded from TOML

pub mod error;
pub mod model;
pub mod options;
pub mod rail;
pub mod util;

pub use error::{CodecError, RailError, RailkitError};
