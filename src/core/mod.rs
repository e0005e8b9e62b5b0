//! Core domain logic: scripted conversation playback, the lead-capture
//! wizard state machine, preview client, site copy, and server-side
//! configuration and lead persistence.

#[cfg(feature = "ssr")]
pub mod config;
pub mod conversation;
pub mod i18n;
#[cfg(feature = "ssr")]
pub mod leads;
pub mod preview;
pub mod wizard;
