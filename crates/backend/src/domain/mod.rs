pub mod a001_expense;
pub mod a002_egg_log;
pub mod a003_feed_log;
pub mod a004_employee;
pub mod a005_attendance;
pub mod a006_mortality_log;
