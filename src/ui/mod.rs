pub mod browser_demo;
pub mod chat_demo;
pub mod contact_form;
pub mod icon;
pub mod language;
pub mod motion;
pub mod pages;
pub mod playback;
pub mod preview_wizard;
pub mod toast;

pub use icon::{Icon, icons};
pub use language::{provide_language_context, use_language_context};
pub use motion::{provide_motion_context, use_motion_context};
pub use toast::{ToastContainer, provide_toasts, use_toasts};
