// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::Greeting;

/// Writes `text` to `out` exactly as given. No separator or newline is
/// added and the text is never treated as a format string.
pub fn say<W: Write + ?Sized>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes())?;
    Ok(())
}

/// Writes every [Greeting] to `out` in order, then flushes. If the writer
/// fails an error naming the greeting being written will be returned.
pub fn greet<W: Write + ?Sized>(out: &mut W) -> Result<()> {
    for greeting in Greeting::ALL {
        debug!(%greeting, "writing greeting");
        say(out, greeting.text())
            .with_context(|| format!("failed to write greeting {greeting:?}"))?;
    }
    out.flush().context("failed to flush greetings")?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io;

    /// Accepts `limit` bytes, then fails every write.
    struct FailingWriter {
        written: Vec<u8>,
        limit: usize,
    }

    impl Write for FailingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() >= self.limit {
                return Err(io::Error::from(io::ErrorKind::BrokenPipe));
            }
            let n = buf.len().min(self.limit - self.written.len());
            self.written.extend_from_slice(&buf[..n]);
            Ok(n)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_say_is_verbatim() {
        let mut out = Vec::new();
        say(&mut out, "100% {} %s\\n").expect("say");
        assert_eq!(out, b"100% {} %s\\n");
    }

    #[test]
    fn test_greet() {
        let mut out = Vec::new();
        greet(&mut out).expect("greet");
        assert_eq!(String::from_utf8(out).expect("utf8"), "Hello World1Hello World2");
    }

    #[test]
    fn test_greet_is_deterministic() {
        let mut first = Vec::new();
        let mut second = Vec::new();
        greet(&mut first).expect("greet");
        greet(&mut second).expect("greet");
        assert_eq!(first, second);
    }

    #[test]
    fn test_greet_write_failure() {
        let mut out = FailingWriter {
            written: Vec::new(),
            limit: Greeting::A.text().len(),
        };
        let err = greet(&mut out).expect_err("broken pipe");

        // the first greeting lands whole before the second one fails
        assert_eq!(out.written, Greeting::A.text().as_bytes());
        assert_eq!(err.to_string(), "failed to write greeting B");
        let io_err = err.root_cause().downcast_ref::<io::Error>().expect("io error");
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }
}
