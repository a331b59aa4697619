pub mod error;
pub mod schedule;
pub mod theme;
pub mod today;
pub mod types;
pub mod view_state;
