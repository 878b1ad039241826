//! Input Module
//!
//! Adapters between input sources and the byte-at-a-time tokenizer:
//! - TokenFeed: drives the tokenizer from any `Read` source

pub mod feed;

pub use feed::{FeedError, TokenFeed};
