//! Core types for the skein knitting community backend.
//!
//! This crate provides the data model shared by the estimator, catalog and
//! server crates:
//!
//! - [`PatternType`] and [`Size`] - What is being knitted and how big
//! - [`YarnWeight`] and [`Gauge`] - What it is knitted with and how tightly
//! - [`EstimationRequest`] / [`EstimationResult`] - Yarn calculator input and output
//! - [`SkeinError`] and [`InvalidInput`] - Error taxonomy

#![doc(issue_tracker_base_url = "https://github.com/skein-community/skein/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod project;
mod request;
mod yarn;

pub use error::{InvalidInput, Result, SkeinError};
pub use project::{PatternType, Size};
pub use request::{EstimationInput, EstimationRequest, EstimationResult};
pub use yarn::{Gauge, YarnWeight};
