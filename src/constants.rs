/// Base of the logarithm used by entropy and split information.
pub const ENTROPY_BASE:       f64 = 2f64;
/// A candidate attribute must beat this gain ratio to be chosen.
pub const INITIAL_GAIN_RATIO: f64 = 0f64;
/// Gain ratios within this distance of `INITIAL_GAIN_RATIO`
/// are rounding noise and count as no gain.
pub const GAIN_RATIO_TOLERANCE: f64 = 1e-10;

/// The `value` carried by the root node.
pub const ROOT_VALUE:        &str = "root";
/// Name of the label column when the input has no header.
pub const LABEL_COLUMN_NAME: &str = "class";
/// Prefix of generated attribute names (`A0`, `A1`, ...).
pub const ATTRIBUTE_PREFIX:  &str = "A";

/// Width of the separator lines in `print_tree`.
pub const PRINT_WIDTH: usize = 40;
