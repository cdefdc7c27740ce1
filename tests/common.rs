#![allow(unused_macros, unused_imports, dead_code)]

use std::io;
use std::sync::{Arc, Mutex};

pub use affirm::*;
pub use indoc::indoc;
pub use paste::paste;

macro_rules! assert_str_eq {
    ($actual:expr, $expected:expr) => {{
        let actual = &$actual[..];
        let expected = &$expected[..];
        if actual != expected {
            panic!(
                indoc! {"
                string not expected value:
                ============================EXPECTED==========================
                {}
                =============================ACTUAL===========================
                {}
                ==============================DIFF============================
                {}
                ==============================================================
            "},
                expected,
                actual,
                colored_diff::PrettyDifference { expected, actual },
            );
        }
    }};
}

macro_rules! caught {
    ($body:expr) => {
        affirm::catch(|| $body).unwrap_err()
    };
}

macro_rules! passes {
    ($body:expr) => {
        affirm::catch(|| $body).unwrap()
    };
}

/// Runs `f` under a bare unwind boundary, returning the panic payload as text
/// if it was a string.
pub fn panic_message<F>(f: F) -> Option<String>
where
    F: FnOnce(),
{
    let payload = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)).err()?;
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
}

/// An in-memory writer whose clones share one buffer.
#[derive(Debug, Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
