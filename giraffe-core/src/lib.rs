//! Giraffe feature library
//!
//! Feature type registry, feature records with derived orientation, and the
//! structured record format handed to renderers.

pub mod types;
pub mod error;
pub mod feature_type;
pub mod feature;
pub mod declaration;

// Re-export commonly used types and functions
pub use types::{Position, Score, Span, Strand};
pub use error::{FeatureError, Result};
pub use feature_type::{
    all_types, by_id, by_label, id_of_choice, id_of_label, label_of_choice, label_of_id, labels,
    FeatureType, TypeChoice,
};
pub use feature::{AlignedFeature, Alignment, Feature, Record, DETECTED_FEATURES_LAYER};
pub use declaration::{parse_declarations, records_to_json, AnyFeature, FeatureDeclaration};

/// Version information for the giraffe core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
