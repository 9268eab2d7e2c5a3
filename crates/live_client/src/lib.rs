//! Client bootstrap for the live-update socket.
//!
//! The hosting document carries authentication tokens in `<meta>` elements;
//! the bootstrap reads them, assembles the connection parameters and hands
//! back an explicit [`LiveSocket`] handle. The caller owns the handle for
//! the page's lifetime and opens the actual connection through a
//! [`Transport`] of its choosing; the wire protocol behind it is not this
//! crate's business.

mod document;
mod socket;

pub use crate::document::meta_content;
pub use crate::socket::{LONG_POLL_FALLBACK_MS, LiveSocket, Transport};
