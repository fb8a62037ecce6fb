use std::io::Write;

/// Where a run writes its console output and how it terminates.
///
/// The binary wires this to the real process; tests capture everything instead.
pub trait Host {
    /// Destination for regular output.
    fn output(&mut self) -> impl Write;

    /// Destination for error messages.
    fn error(&mut self) -> impl Write;

    /// Ends the run with the given exit code.
    fn exit(&mut self, code: i32);
}
