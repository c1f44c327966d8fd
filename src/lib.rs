// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

//! Greeter
//!
//! Writes two fixed greetings, `Hello World1` followed by `Hello World2`, to
//! a writer. The `greeter` binary points that writer at standard output.
//!
//! # Quick Start
//!
//! ```
//! use greeter::io;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let mut out = Vec::new();
//!     io::greet(&mut out)?;
//!     assert_eq!(out, b"Hello World1Hello World2");
//!     Ok(())
//! }
//! ```
//!
//! Nothing is inserted between or after the greetings: no separator and no
//! trailing newline.

pub mod greeting;
pub mod io;
pub mod logger;

pub use greeting::Greeting;
