/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// Children killed by a signal are reported as `128 + signal`, like POSIX shells do.
pub type ExitCode = i32;

/// Continuation signal returned by every dispatched command.
///
/// Tells the main loop whether to prompt again or to stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Prompt for the next line.
    Continue,
    /// Leave the loop.
    Exit,
}

impl Flow {
    pub fn is_continue(self) -> bool {
        self == Flow::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::Flow;

    #[test]
    fn test_flow_is_continue() {
        assert!(Flow::Continue.is_continue());
        assert!(!Flow::Exit.is_continue());
    }
}
