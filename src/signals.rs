//! Interrupt-signal disposition.
//!
//! The shell ignores SIGINT so that the interrupt key never kills it; every
//! spawned program gets the default disposition back before it starts, since
//! an ignored disposition would otherwise survive `exec`.

use nix::sys::signal::{self, SigHandler, Signal};

/// Makes the calling process ignore SIGINT; returns the previous handler.
pub fn ignore_interrupt() -> nix::Result<SigHandler> {
    // SAFETY: SIG_IGN installs no handler code.
    unsafe { signal::signal(Signal::SIGINT, SigHandler::SigIgn) }
}

/// Restores the default SIGINT disposition; returns the previous handler.
///
/// Only calls `sigaction`, so it is async-signal-safe and may run in a freshly
/// forked child before `exec`.
pub fn restore_default_interrupt() -> nix::Result<SigHandler> {
    // SAFETY: SIG_DFL installs no handler code.
    unsafe { signal::signal(Signal::SIGINT, SigHandler::SigDfl) }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard, OnceLock};

    /// Serializes tests that change the process-wide SIGINT disposition.
    pub(crate) fn lock_disposition() -> MutexGuard<'static, ()> {
        static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
        MUTEX
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[test]
    fn test_toggle_interrupt_disposition() {
        let _lock = lock_disposition();
        restore_default_interrupt().unwrap();

        assert_eq!(ignore_interrupt().unwrap(), SigHandler::SigDfl);
        assert_eq!(ignore_interrupt().unwrap(), SigHandler::SigIgn);
        assert_eq!(restore_default_interrupt().unwrap(), SigHandler::SigIgn);
        assert_eq!(restore_default_interrupt().unwrap(), SigHandler::SigDfl);
    }
}
