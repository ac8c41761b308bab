//! # fxl-core
//!
//! Core types and error definitions for fxledger.
//!
//! This crate provides the building blocks shared by the other crates in the
//! workspace: the numeric type aliases, the error enum, and the `ensure!` /
//! `fail!` macros used for precondition checks.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A monetary amount expressed in some currency's units.
pub type Amount = Real;

/// An exchange rate: units of the implicit base per one unit of a currency.
pub type Rate = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
