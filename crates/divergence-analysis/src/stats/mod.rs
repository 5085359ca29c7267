//! Pure statistical primitives.
//!
//! Every function is total: empty input and zero denominators produce 0
//! instead of NaN or infinity.

pub mod correlation;
pub mod descriptive;
pub mod inference;
pub mod regression;
pub mod safe;

pub use correlation::correlation;
pub use descriptive::{max, mean, min, range, std_dev};
pub use inference::{standard_error, z_score, z_value_for_confidence};
pub use regression::ols_slope;
pub use safe::{relative_deviation, safe_div};
