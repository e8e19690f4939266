pub mod duration;
pub mod id;
pub mod timestamp;
pub mod window;

pub use crate::domain::model::{DurationUnit, LookbackDuration};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
