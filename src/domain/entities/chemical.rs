use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChemicalId(pub String);

impl From<&str> for ChemicalId {
    fn from(value: &str) -> Self {
        ChemicalId(value.to_string())
    }
}

impl From<String> for ChemicalId {
    fn from(value: String) -> Self {
        ChemicalId(value)
    }
}

impl std::fmt::Display for ChemicalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of the browsable catalog.
///
/// `molecular_weight` keeps the text it was loaded with; comparisons go
/// through [`ChemicalRecord::molecular_weight_value`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChemicalRecord {
    pub id: ChemicalId,
    pub name: String,
    pub formula: Option<String>,
    pub cas_number: Option<String>,
    pub molecular_weight: Option<String>,
    pub tags: Vec<String>,
}

impl ChemicalRecord {
    /// Missing, non-numeric and non-finite weights all count as zero.
    pub fn molecular_weight_value(&self) -> f64 {
        self.molecular_weight
            .as_deref()
            .map(parse_weight)
            .unwrap_or(0.0)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn parse_weight(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicalProperty {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfpaRating {
    pub health: u8,
    pub flammability: u8,
    pub reactivity: u8,
    #[serde(default)]
    pub special: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstAid {
    pub eye: String,
    pub skin: String,
    pub inhalation: String,
    pub ingestion: String,
}

/// Everything the detail page shows for one substance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChemicalDetail {
    pub id: ChemicalId,
    pub name: String,
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default)]
    pub cas_number: Option<String>,
    #[serde(default)]
    pub molecular_weight: Option<String>,
    #[serde(default)]
    pub iupac_name: Option<String>,
    #[serde(default)]
    pub smiles: Option<String>,
    #[serde(default)]
    pub mol_data: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub properties: Vec<PhysicalProperty>,
    #[serde(default)]
    pub safety_pictograms: Vec<String>,
    #[serde(default)]
    pub hazard_statements: Vec<String>,
    #[serde(default)]
    pub precautionary_statements: Vec<String>,
    #[serde(default)]
    pub nfpa_rating: Option<NfpaRating>,
    #[serde(default)]
    pub first_aid: Option<FirstAid>,
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub sds_url: Option<String>,
}
