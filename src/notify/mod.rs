//! Price alert delivery over SMTP.

pub mod email;
pub mod message;

pub use email::{EmailNotifier, Notify};
