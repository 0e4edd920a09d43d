//! Notification module for leetui
//!
//! Provides a transient message overlay used by every stage of the search
//! pipeline. Messages auto-dismiss after a fixed per-level delay and at most
//! one is visible at a time.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::NotificationState;
