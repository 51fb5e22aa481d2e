/// Number formatting helpers.
///
/// This module renders `f64` values in the fixed-point form used by `echo`:
/// no exponent, no grouping, at most eight fractional digits and no trailing
/// zeros.
pub mod num;
