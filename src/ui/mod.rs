pub mod messages;
pub mod notifier;
pub mod status;
