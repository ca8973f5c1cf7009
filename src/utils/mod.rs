pub mod db_utils;
pub mod time_rules;
