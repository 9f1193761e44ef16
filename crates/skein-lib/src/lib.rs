//! Yarn estimation and knitting community catalog.
//!
//! This is a facade crate that re-exports functionality from the skein
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use skein_lib::prelude::*;
//!
//! let request = EstimationRequest::parse("hat", "adult", "worsted", Some(4))?;
//! let result = YarnEstimator::global().estimate(&request)?;
//!
//! assert_eq!(result.estimated_grams, 57.0);
//! assert_eq!(result.recommended_skeins, 2);
//! # Ok::<(), SkeinError>(())
//! ```

#![doc(issue_tracker_base_url = "https://github.com/skein-community/skein/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use skein_types::*;

// Re-export the estimator
pub use skein_estimate::{
    DEFAULT_SAFETY_MARGIN, DEFAULT_SKEIN_GRAMS, YarnEstimator, YarnProfile, project_area,
};

// Re-export the catalog
#[cfg(feature = "catalog")]
pub use skein_catalog::{
    Catalog, Difficulty, MAX_PAGE_LIMIT, NewPattern, NewPost, NewUser, Page, Pattern,
    PatternCategory, PatternFilter, Post, PostCategory, User,
};

// Re-export the HTTP server
#[cfg(feature = "server")]
pub use skein_server::{AppState, Config, EstimatorConfig, ServerConfig, router, serve};

/// Prelude module for convenient imports.
///
/// ```
/// use skein_lib::prelude::*;
/// ```
pub mod prelude {
    pub use skein_types::{
        EstimationInput, EstimationRequest, EstimationResult, Gauge, InvalidInput, PatternType,
        Result, SkeinError, Size, YarnWeight,
    };

    pub use skein_estimate::{YarnEstimator, YarnProfile};

    #[cfg(feature = "catalog")]
    pub use skein_catalog::{Catalog, Page, PatternFilter};

    #[cfg(feature = "server")]
    pub use skein_server::{Config, serve};
}
