//! Notification module - messages fired by session lifecycle transitions.

mod message;

pub use message::{Notification, NotificationKind};
