/// Core evaluation logic.
///
/// Executes statements in order, evaluates expressions to values and writes
/// the output of `echo` statements.
pub mod core;

/// The variable environment.
///
/// Holds every bound variable of one interpreter run. Environments are plain
/// values, so several independent runs can coexist.
pub mod environment;
