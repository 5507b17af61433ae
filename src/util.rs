/// Number formatting.
///
/// Renders `f64` values for display: integer-valued numbers without a decimal
/// point, everything else in the shortest form that reads back to the same
/// value. Used for results as well as for printing tokens and trees.
pub mod num;
