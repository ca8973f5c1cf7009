pub mod attendance;
pub mod employee;
pub mod login_audit;
pub mod user;
pub mod working_hour;
