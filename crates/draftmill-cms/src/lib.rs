//! Client for the external publishing target.
//!
//! Speaks a WordPress-style REST surface (`POST /wp-json/wp/v2/posts`) and
//! implements [`draftmill_core::Publisher`]. API-level rejections are
//! surfaced with the target's own message so the activity log shows what the
//! CMS actually said.

pub mod client;
pub mod error;
mod types;

pub use client::CmsClient;
pub use error::CmsError;
