//! Scenario input parser
//!
//! This module transforms the scenario text into a [`spec::Scenario`]:
//! - [`spec`]: fold specification and scenario definitions
//! - [`parse`]: parsing (integer stream → scenario)
//!
//! # Input Format
//!
//! A whitespace-separated stream of integers:
//! 1. `t` — number of fold operations
//! 2. `t` records `mode param`, where mode 1=horizontal, 2=vertical,
//!    3=diagonal-rising, 4=diagonal-falling; for modes 3/4 one additional
//!    integer `b` (the crease intercept) follows on the same record
//! 3. `tmpx tmpy` — the punch coordinate, row then column
//!
//! Fold modes become tagged [`spec::FoldSpec`] variants, so an illegal mode
//! value is unrepresentable past the parse stage. Beyond mode dispatch the
//! input is assumed well formed; malformed streams fail fast with a
//! [`parse::ParseError`].

pub mod parse;
pub mod spec;
