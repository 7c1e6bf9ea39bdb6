//! Feature declarations as read from JSON, and batch export.
//!
//! A declaration carrying an `alignment` becomes an [`AlignedFeature`];
//! anything else becomes a plain [`Feature`]. Each built value is
//! independent; nothing here stores or indexes them.

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{FeatureError, Result};
use crate::feature::{AlignedFeature, Alignment, Feature, Record};
use crate::types::{Position, Score};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureDeclaration {
    #[serde(alias = "accession")]
    pub label: String,
    pub name: String,
    pub query_start: Position,
    pub query_end: Position,
    pub subject_start: Position,
    pub subject_end: Position,
    #[serde(rename = "type")]
    pub feature_type: String,
    #[serde(default)]
    pub layer: Option<String>,
    #[serde(default)]
    pub alignment: Option<Alignment>,
    #[serde(default)]
    pub evalue: Option<Score>,
    #[serde(default)]
    pub identities: Option<Score>,
}

impl FeatureDeclaration {
    /// Validate and construct. `default_layer` applies to plain features
    /// that name no layer; aligned features ignore any layer given.
    ///
    /// The type is checked before anything else, so an unknown type is
    /// reported as [`FeatureError::InvalidType`] whatever else is missing.
    /// `evalue` or `identities` without an `alignment` is rejected rather
    /// than dropped.
    pub fn build(self, default_layer: &str) -> Result<AnyFeature> {
        if self.alignment.is_some() && self.layer.is_some() {
            log::debug!("Ignoring layer on aligned feature {}", self.label);
        }
        let layer = self.layer.unwrap_or_else(|| default_layer.to_string());
        let feature = Feature::new(
            self.label,
            self.name,
            self.query_start,
            self.query_end,
            self.subject_start,
            self.subject_end,
            &self.feature_type,
            layer,
        )?;

        match (self.alignment, self.evalue, self.identities) {
            (Some(alignment), Some(evalue), Some(identities)) => Ok(AnyFeature::Aligned(
                AlignedFeature::from_feature(feature, alignment, evalue, identities),
            )),
            (Some(_), None, _) => Err(missing_field(&feature, "evalue")),
            (Some(_), _, None) => Err(missing_field(&feature, "identities")),
            (None, None, None) => Ok(AnyFeature::Plain(feature)),
            (None, _, _) => Err(missing_field(&feature, "alignment")),
        }
    }
}

fn missing_field(feature: &Feature, field: &'static str) -> FeatureError {
    FeatureError::MissingField {
        label: feature.label().to_string(),
        field,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AnyFeature {
    Plain(Feature),
    Aligned(AlignedFeature),
}

impl AnyFeature {
    pub fn feature(&self) -> &Feature {
        match self {
            AnyFeature::Plain(f) => f,
            AnyFeature::Aligned(a) => a.feature(),
        }
    }

    pub fn to_record(&self) -> Record {
        match self {
            AnyFeature::Plain(f) => f.to_record(),
            AnyFeature::Aligned(a) => a.to_record(),
        }
    }
}

impl From<Feature> for AnyFeature {
    fn from(f: Feature) -> Self {
        AnyFeature::Plain(f)
    }
}

impl From<AlignedFeature> for AnyFeature {
    fn from(a: AlignedFeature) -> Self {
        AnyFeature::Aligned(a)
    }
}

impl Serialize for AnyFeature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

/// Parse a JSON array of declarations.
pub fn parse_declarations(json: &str) -> Result<Vec<FeatureDeclaration>> {
    Ok(serde_json::from_str(json)?)
}

pub fn records_to_json(features: &[AnyFeature], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(features)?
    } else {
        serde_json::to_string(features)?
    };
    Ok(json)
}
