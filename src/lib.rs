//! Casebook - a catalog of structural pattern matching in Rust.
//!
//! The interesting part of this repository is its test suite: one
//! integration-test module per pattern family (literal, alternation,
//! binding, wildcard, constant, group, sequence, mapping, guard, struct,
//! and `@` patterns), each demonstrating the family over short literal
//! inputs.
//!
//! This crate provides the small shared vocabulary those demonstrations
//! match against:
//! - [`Value`] - A dynamic value type for heterogeneous sequences and
//!   string-keyed mappings
//! - [`ValueMap`] - A persistent string-keyed map
//! - [`Color`], [`Product`], [`Point`] - Example record types for
//!   constant and struct patterns
//! - [`Error`] - Error type for the fallible accessors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod collections;
pub mod error;
pub mod value;

pub use catalog::{Color, Point, Product};
pub use collections::ValueMap;
pub use error::{Error, ErrorKind, Result};
pub use value::{Kind, Value};
