//! Yarn quantity estimation for the skein knitting community backend.
//!
//! This crate turns a project description into a material requirement:
//!
//! - [`YarnEstimator`] - Computes grams, meters and skeins for a request
//! - [`YarnProfile`] - Fabric yield and density per yarn weight
//! - [`project_area`] - Finished-object area per pattern type and size
//!
//! # Example
//!
//! ```
//! use skein_estimate::YarnEstimator;
//!
//! let result = YarnEstimator::global()
//!     .estimate_str("hat", "adult", "worsted", Some(4))
//!     .unwrap();
//! assert_eq!(result.recommended_skeins, 2);
//! ```

#![doc(issue_tracker_base_url = "https://github.com/skein-community/skein/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coefficients;
mod estimator;

pub use coefficients::{YarnProfile, project_area};
pub use estimator::{DEFAULT_SAFETY_MARGIN, DEFAULT_SKEIN_GRAMS, YarnEstimator};
