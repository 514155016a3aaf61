//! Talking to the link-shortening service
//!
//! Input normalization and endpoint construction live in `normalize`, the
//! network call itself in `client`.

pub mod client;
pub mod normalize;

pub use client::{ShortenClient, ShortenError, ShortenResult, TinyUrlClient};
pub use normalize::{build_endpoint, normalize_url};
