// src/exit.rs
//! Process exit codes for `wordgraph`.
//!
//! Scripts can rely on these staying stable.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum WordGraphExit {
    /// Query completed. "Not found" answers are still a success.
    Success = 0,
    /// Generic error (I/O, unreadable corpus).
    Error = 1,
    /// Empty corpus or invalid configuration.
    InvalidInput = 2,
    /// Graphviz was missing or failed to render the image.
    RenderFailure = 3,
}

impl WordGraphExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for WordGraphExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
