pub mod attendance;
pub mod employee;
pub mod user;
pub mod working_hours;
