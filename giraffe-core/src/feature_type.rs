//! Closed vocabulary of feature kinds.
//!
//! Ids and labels form a stable external contract: consumers match on either,
//! so new kinds may only be appended. Renumbering or relabeling an existing
//! entry breaks every renderer reading exported records.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FeatureError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[repr(u32)]
pub enum FeatureType {
    Feature = 1,
    Promoter = 2,
    Primer = 3,
    Enzyme = 4,
    Gene = 5,
    Origin = 6,
    Regulatory = 7,
    Terminator = 8,
    Custom = 9,
    Orf = 10,
    Protein = 11,
    Custom2 = 12,
    Custom3 = 13,
    Custom4 = 14,
}

impl FeatureType {
    /// Every kind, ordered by id.
    pub const ALL: [FeatureType; 14] = [
        FeatureType::Feature,
        FeatureType::Promoter,
        FeatureType::Primer,
        FeatureType::Enzyme,
        FeatureType::Gene,
        FeatureType::Origin,
        FeatureType::Regulatory,
        FeatureType::Terminator,
        FeatureType::Custom,
        FeatureType::Orf,
        FeatureType::Protein,
        FeatureType::Custom2,
        FeatureType::Custom3,
        FeatureType::Custom4,
    ];

    pub fn id(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Feature => "Feature",
            Self::Promoter => "Promoter",
            Self::Primer => "Primer",
            Self::Enzyme => "Restriction Enzyme",
            Self::Gene => "Gene",
            Self::Origin => "Origin",
            Self::Regulatory => "Regulatory",
            Self::Terminator => "Terminator",
            Self::Custom => "Custom",
            Self::Orf => "Orf",
            Self::Protein => "Protein",
            Self::Custom2 => "Custom2",
            Self::Custom3 => "Custom3",
            Self::Custom4 => "Custom4",
        }
    }

    pub fn from_id(id: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.id() == id)
    }

    /// Exact, case-sensitive label match.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.label() == label)
    }

    pub fn choice(self) -> TypeChoice {
        TypeChoice {
            id: Some(self.id()),
            label: Some(self.label()),
        }
    }
}

impl fmt::Display for FeatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FeatureType {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| FeatureError::InvalidType(s.to_string()))
    }
}

impl TryFrom<String> for FeatureType {
    type Error = FeatureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<u32> for FeatureType {
    type Error = FeatureError;

    fn try_from(id: u32) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(FeatureError::UnknownTypeId(id))
    }
}

impl From<FeatureType> for &'static str {
    fn from(t: FeatureType) -> Self {
        t.label()
    }
}

/// An (id, label) pair as returned by the permissive lookups. A miss is the
/// [`TypeChoice::NOT_FOUND`] sentinel with both halves absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TypeChoice {
    pub id: Option<u32>,
    pub label: Option<&'static str>,
}

impl TypeChoice {
    pub const NOT_FOUND: TypeChoice = TypeChoice { id: None, label: None };

    pub fn is_found(&self) -> bool {
        self.id.is_some() && self.label.is_some()
    }

    pub fn feature_type(&self) -> Option<FeatureType> {
        self.id.and_then(FeatureType::from_id)
    }
}

impl From<FeatureType> for TypeChoice {
    fn from(t: FeatureType) -> Self {
        t.choice()
    }
}

impl From<Option<FeatureType>> for TypeChoice {
    fn from(t: Option<FeatureType>) -> Self {
        t.map_or(TypeChoice::NOT_FOUND, FeatureType::choice)
    }
}

pub fn all_types() -> Vec<TypeChoice> {
    FeatureType::ALL.iter().map(|t| t.choice()).collect()
}

pub fn labels() -> Vec<&'static str> {
    FeatureType::ALL.iter().map(|t| t.label()).collect()
}

pub fn by_id(id: u32) -> TypeChoice {
    FeatureType::from_id(id).into()
}

pub fn by_label(label: &str) -> TypeChoice {
    FeatureType::from_label(label).into()
}

pub fn label_of_id(id: u32) -> Option<&'static str> {
    by_id(id).label
}

/// The pair's own label, without consulting the registry.
pub fn label_of_choice(choice: &TypeChoice) -> Option<&'static str> {
    choice.label
}

pub fn id_of_label(label: &str) -> Option<u32> {
    by_label(label).id
}

/// The pair's own id, without consulting the registry.
pub fn id_of_choice(choice: &TypeChoice) -> Option<u32> {
    choice.id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_is_ordered_and_complete() {
        let all = all_types();
        assert_eq!(all.len(), 14);
        for (i, choice) in all.iter().enumerate() {
            assert_eq!(choice.id, Some(i as u32 + 1));
        }
        assert_eq!(all[3].label, Some("Restriction Enzyme"));
        assert_eq!(all[13].label, Some("Custom4"));
    }

    #[test]
    fn test_labels_are_unique() {
        let mut seen = labels();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 14);
        assert!(seen.iter().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_round_trips_for_every_type() {
        for t in FeatureType::ALL {
            let label = t.label();
            let id = t.id();
            assert_eq!(by_id(id_of_label(label).unwrap()), t.choice());
            assert_eq!(by_label(label_of_id(id).unwrap()), t.choice());
        }
    }

    #[test]
    fn test_lookup_miss_returns_sentinel() {
        assert_eq!(by_id(999), TypeChoice::NOT_FOUND);
        assert_eq!(by_id(0), TypeChoice::NOT_FOUND);
        assert_eq!(by_label("Nonexistent"), TypeChoice::NOT_FOUND);
        assert_eq!(by_label("gene"), TypeChoice::NOT_FOUND);
        assert!(!by_id(999).is_found());
        assert_eq!(label_of_id(999), None);
        assert_eq!(id_of_label("Nonexistent"), None);
    }

    #[test]
    fn test_pair_accessors_use_the_pair() {
        let gene = by_label("Gene");
        assert_eq!(id_of_choice(&gene), Some(5));
        assert_eq!(label_of_choice(&gene), Some("Gene"));
        assert_eq!(id_of_choice(&TypeChoice::NOT_FOUND), None);
        assert_eq!(gene.feature_type(), Some(FeatureType::Gene));
    }

    #[test]
    fn test_strict_conversions() {
        assert_eq!("Promoter".parse::<FeatureType>().unwrap(), FeatureType::Promoter);
        assert!(matches!(
            "NotAType".parse::<FeatureType>(),
            Err(FeatureError::InvalidType(ref v)) if v == "NotAType"
        ));
        assert_eq!(FeatureType::try_from(4u32).unwrap(), FeatureType::Enzyme);
        assert!(matches!(FeatureType::try_from(15u32), Err(FeatureError::UnknownTypeId(15))));
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&FeatureType::Enzyme).unwrap();
        assert_eq!(json, "\"Restriction Enzyme\"");
        let parsed: FeatureType = serde_json::from_str("\"Orf\"").unwrap();
        assert_eq!(parsed, FeatureType::Orf);
        assert!(serde_json::from_str::<FeatureType>("\"Exon\"").is_err());
    }
}
