//! Text output seam

use core::fmt;

/// A line-oriented text console
///
/// The report's console text is its only externally observable
/// behavior, and a restart can land while output is still sitting in a
/// buffer, so the routine forces delivery at each block boundary
/// rather than trusting the channel to drain in time.
pub trait Console: fmt::Write {
    /// Deliver any buffered output immediately
    ///
    /// The default is a no-op, for consoles which don't buffer.
    fn flush(&mut self) {}
}
