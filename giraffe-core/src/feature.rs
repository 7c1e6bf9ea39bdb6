//! Feature records and their serialization contract.
//!
//! A [`Feature`] is an immutable value: a labeled region shared by a query
//! and a subject sequence. Coordinates are stored exactly as supplied.
//! Orientation is never stored; it is read off the ordering of the subject
//! coordinates. Wraparound on a circular query shows up as
//! `query_start > query_end`; on a circular subject searched from a linear
//! query, as subject coordinates past the subject length.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Map, Value};

use crate::error::{FeatureError, Result};
use crate::feature_type::FeatureType;
use crate::types::{Position, Score, Span, Strand};

/// Layer every aligned feature reports, whatever its caller intended.
pub const DETECTED_FEATURES_LAYER: &str = "Detected Features";

/// Structured output record, keyed as renderers expect.
pub type Record = Map<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    label: String,
    name: String,
    query: Span,
    subject: Span,
    feature_type: FeatureType,
    layer: String,
}

impl Feature {
    /// Build a feature, validating `type_label` against the registry.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        label: impl Into<String>,
        name: impl Into<String>,
        query_start: Position,
        query_end: Position,
        subject_start: Position,
        subject_end: Position,
        type_label: &str,
        layer: impl Into<String>,
    ) -> Result<Self> {
        let feature_type = match FeatureType::from_label(type_label) {
            Some(t) => t,
            None => {
                log::warn!("Rejecting feature with invalid type: {:?}", type_label);
                return Err(FeatureError::InvalidType(type_label.to_string()));
            }
        };

        Ok(Self {
            label: label.into(),
            name: name.into(),
            query: Span::new(query_start, query_end),
            subject: Span::new(subject_start, subject_end),
            feature_type,
            layer: layer.into(),
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn query_start(&self) -> Position {
        self.query.start
    }

    pub fn query_end(&self) -> Position {
        self.query.end
    }

    pub fn subject_start(&self) -> Position {
        self.subject.start
    }

    pub fn subject_end(&self) -> Position {
        self.subject.end
    }

    pub fn query_span(&self) -> Span {
        self.query
    }

    pub fn subject_span(&self) -> Span {
        self.subject
    }

    pub fn feature_type(&self) -> FeatureType {
        self.feature_type
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    /// Forward when the subject runs along the query's forward strand,
    /// reverse when it matches the reverse complement.
    pub fn strand(&self) -> Strand {
        Strand::from_subject(self.subject.start, self.subject.end)
    }

    pub fn is_reverse(&self) -> bool {
        self.strand() == Strand::Reverse
    }

    /// The feature spans the origin of a circular query.
    pub fn query_wraps_origin(&self) -> bool {
        self.query.wraps_origin()
    }

    /// The match runs across the origin of a circular subject of
    /// `subject_length` bases.
    pub fn subject_exceeds(&self, subject_length: Position) -> bool {
        self.subject.exceeds(subject_length)
    }

    pub fn to_record(&self) -> Record {
        log::trace!("Serializing feature {} ({})", self.label, self.feature_type);
        let mut record = Map::new();
        record.insert("label".into(), json!(self.label));
        record.insert("name".into(), json!(self.name));
        record.insert("query_start".into(), json!(self.query.start));
        record.insert("query_end".into(), json!(self.query.end));
        record.insert("subject_start".into(), json!(self.subject.start));
        record.insert("subject_end".into(), json!(self.subject.end));
        record.insert("type_id".into(), json!(self.feature_type.id()));
        record.insert("layer".into(), json!(self.layer));
        record
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

/// The three lines of a pairwise alignment display. Gap characters pass
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    pub query: String,
    #[serde(rename = "match")]
    pub match_line: String,
    pub subject: String,
}

impl Alignment {
    pub fn new(
        query: impl Into<String>,
        match_line: impl Into<String>,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            query: query.into(),
            match_line: match_line.into(),
            subject: subject.into(),
        }
    }
}

/// A feature found by a search engine, carrying its alignment evidence.
/// Always placed on the [`DETECTED_FEATURES_LAYER`].
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedFeature {
    feature: Feature,
    alignment: Alignment,
    evalue: Score,
    identities: Score,
}

impl AlignedFeature {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        accession: impl Into<String>,
        name: impl Into<String>,
        query_start: Position,
        query_end: Position,
        subject_start: Position,
        subject_end: Position,
        type_label: &str,
        alignment: Alignment,
        evalue: impl Into<Score>,
        identities: impl Into<Score>,
    ) -> Result<Self> {
        let feature = Feature::new(
            accession,
            name,
            query_start,
            query_end,
            subject_start,
            subject_end,
            type_label,
            DETECTED_FEATURES_LAYER,
        )?;

        Ok(Self::from_feature(feature, alignment, evalue, identities))
    }

    /// Attach alignment evidence to an already validated feature, moving it
    /// onto the [`DETECTED_FEATURES_LAYER`].
    pub fn from_feature(
        mut feature: Feature,
        alignment: Alignment,
        evalue: impl Into<Score>,
        identities: impl Into<Score>,
    ) -> Self {
        feature.layer = DETECTED_FEATURES_LAYER.to_string();
        Self {
            feature,
            alignment,
            evalue: evalue.into(),
            identities: identities.into(),
        }
    }

    pub fn feature(&self) -> &Feature {
        &self.feature
    }

    pub fn alignment(&self) -> &Alignment {
        &self.alignment
    }

    pub fn evalue(&self) -> Score {
        self.evalue
    }

    pub fn identities(&self) -> Score {
        self.identities
    }

    /// The base record extended with `alignment`, `evalue` and `identities`.
    pub fn to_record(&self) -> Record {
        let mut record = self.feature.to_record();
        record.insert(
            "alignment".into(),
            json!({
                "query": self.alignment.query,
                "match": self.alignment.match_line,
                "subject": self.alignment.subject,
            }),
        );
        record.insert("evalue".into(), json!(self.evalue));
        record.insert("identities".into(), json!(self.identities));
        record
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl AsRef<Feature> for AlignedFeature {
    fn as_ref(&self) -> &Feature {
        &self.feature
    }
}

impl Serialize for AlignedFeature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lacz() -> AlignedFeature {
        AlignedFeature::new(
            "NM_001",
            "lacZ",
            10,
            200,
            500,
            310,
            "Gene",
            Alignment::new("ATG...", "|||...", "ATG..."),
            1e-30,
            190i64,
        )
        .unwrap()
    }

    #[test]
    fn test_gene_resolves_to_type_id() {
        let f = Feature::new("AB1", "ampR", 1, 861, 1, 861, "Gene", "Features").unwrap();
        assert_eq!(f.feature_type(), FeatureType::Gene);
        assert_eq!(f.to_record()["type_id"], json!(5));
    }

    #[test]
    fn test_invalid_type_fails_construction() {
        let err = Feature::new("x", "x", 1, 2, 1, 2, "NotAType", "Features").unwrap_err();
        assert!(matches!(err, FeatureError::InvalidType(ref v) if v == "NotAType"));

        let err = AlignedFeature::new(
            "x",
            "x",
            1,
            2,
            1,
            2,
            "NotAType",
            Alignment::new("A", "|", "A"),
            0.1,
            1i64,
        )
        .unwrap_err();
        assert!(matches!(err, FeatureError::InvalidType(_)));
    }

    #[test]
    fn test_record_has_exact_keys() {
        let f = Feature::new("P1", "T7", 5, 24, 1, 20, "Primer", "Primers").unwrap();
        let record = f.to_record();
        let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "label",
                "layer",
                "name",
                "query_end",
                "query_start",
                "subject_end",
                "subject_start",
                "type_id"
            ]
        );
        assert_eq!(record["layer"], json!("Primers"));
        assert_eq!(record["type_id"], json!(3));
    }

    #[test]
    fn test_query_wraparound_preserved() {
        let f = Feature::new("ori", "pUC ori", 100, 50, 1, 589, "Origin", "Features").unwrap();
        assert!(f.query_wraps_origin());
        let record = f.to_record();
        assert_eq!(record["query_start"], json!(100));
        assert_eq!(record["query_end"], json!(50));
    }

    #[test]
    fn test_subject_past_circular_length_preserved() {
        let f = Feature::new("s", "s", 1, 300, 4901, 5200, "Feature", "Features").unwrap();
        assert!(f.subject_exceeds(5000));
        assert!(!f.query_wraps_origin());
        assert_eq!(f.to_record()["subject_end"], json!(5200));
    }

    #[test]
    fn test_strand_is_derived_from_subject() {
        let f = Feature::new("a", "a", 1, 10, 1, 10, "Feature", "L").unwrap();
        assert_eq!(f.strand(), Strand::Forward);
        let r = Feature::new("a", "a", 1, 10, 10, 1, "Feature", "L").unwrap();
        assert!(r.is_reverse());
    }

    #[test]
    fn test_aligned_layer_is_fixed() {
        let f = lacz();
        assert_eq!(f.feature().layer(), DETECTED_FEATURES_LAYER);
        assert_eq!(f.to_record()["layer"], json!("Detected Features"));
    }

    #[test]
    fn test_aligned_record_extends_base() {
        let f = lacz();
        let base = f.feature().to_record();
        let record = f.to_record();
        for (key, value) in &base {
            assert_eq!(&record[key], value);
        }
        assert_eq!(record.len(), base.len() + 3);
        assert_eq!(
            record["alignment"],
            json!({"query": "ATG...", "match": "|||...", "subject": "ATG..."})
        );
        assert_eq!(record["evalue"], json!(1e-30));
        assert_eq!(record["identities"], json!(190));
        assert!(f.feature().is_reverse());
    }

    #[test]
    fn test_from_feature_moves_to_detected_layer() {
        let base = Feature::new("X1", "tetR", 1, 600, 600, 1, "Gene", "Custom Track").unwrap();
        let aligned =
            AlignedFeature::from_feature(base, Alignment::new("A", "|", "A"), 0i64, -5i64);
        let record = aligned.to_record();
        assert_eq!(record["layer"], json!("Detected Features"));
        assert_eq!(record["evalue"], json!(0));
        assert_eq!(record["identities"], json!(-5));
        assert_eq!(aligned.evalue().as_f64(), 0.0);
    }

    #[test]
    fn test_serialize_matches_record() {
        let f = lacz();
        let value = serde_json::to_value(&f).unwrap();
        assert_eq!(value, Value::Object(f.to_record()));
        assert_eq!(f.to_record(), f.to_record());
    }
}
