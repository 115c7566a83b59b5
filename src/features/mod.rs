//! Feature vector modules
//!
//! - Schema-ordered feature vector type
//! - Builder mapping collected inputs onto the schema

pub mod builder;
pub mod vector;

pub use builder::build_feature_vector;
pub use vector::{FeatureValue, FeatureVector};
