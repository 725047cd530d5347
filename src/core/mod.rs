pub mod clock;
pub mod display;
pub mod log;
pub mod notify;
pub mod session;
pub mod store;
pub mod ticker;
pub mod worklog;
