/// Ordered map storage.
///
/// Defines `OrderedMap`, the insertion-ordered, key-unique mapping that backs
/// both `Value::Map` and the interpreter environment. Re-inserting a key
/// overwrites its value in place and keeps its original position.
pub mod map;

/// Runtime values and their canonical print form.
pub mod core;
