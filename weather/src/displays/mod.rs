mod current;
mod running_average;
mod running_mean;

pub use current::CurrentValueDisplay;
pub use running_average::RunningAverageDisplay;
pub use running_mean::RunningMean;

pub const DEFAULT_PRECISION: usize = 2;
