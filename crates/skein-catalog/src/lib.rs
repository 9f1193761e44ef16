//! In-memory users, patterns and community posts for the skein backend.
//!
//! - [`Catalog`] - Concurrent in-memory store with list/filter/get/create
//! - [`User`], [`Pattern`], [`Post`] - Stored records
//! - [`NewUser`], [`NewPattern`], [`NewPost`] - Creation payloads
//! - [`Page`] and [`PatternFilter`] - List query parameters
//!
//! Records live only as long as the [`Catalog`] value; there is no
//! persistence layer.

#![doc(issue_tracker_base_url = "https://github.com/skein-community/skein/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod model;
mod store;

pub use model::{
    Difficulty, MAX_PAGE_LIMIT, NewPattern, NewPost, NewUser, Page, Pattern, PatternCategory,
    PatternFilter, Post, PostCategory, User,
};
pub use store::Catalog;
