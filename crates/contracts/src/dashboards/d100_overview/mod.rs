pub mod dto;

pub use dto::{AttendanceRatio, WeeklySeries};
