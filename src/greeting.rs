// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::fmt::{Display, Formatter, Result};

/// One of the two fixed greetings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Greeting {
    /// `Hello World1`
    A,
    /// `Hello World2`
    B,
}

impl Greeting {
    /// Greetings in the order they are written.
    pub const ALL: [Greeting; 2] = [Greeting::A, Greeting::B];

    /// The literal text of the greeting.
    pub const fn text(self) -> &'static str {
        match self {
            Self::A => "Hello World1",
            Self::B => "Hello World2",
        }
    }
}

impl Display for Greeting {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // verbatim, never a format string
        f.write_str(self.text())
    }
}
