#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    Lanthanide,
    Actinide,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Unknown,
}

impl ElementCategory {
    pub const LEGEND: [ElementCategory; 10] = [
        ElementCategory::AlkaliMetal,
        ElementCategory::AlkalineEarthMetal,
        ElementCategory::TransitionMetal,
        ElementCategory::PostTransitionMetal,
        ElementCategory::Metalloid,
        ElementCategory::Nonmetal,
        ElementCategory::Halogen,
        ElementCategory::NobleGas,
        ElementCategory::Lanthanide,
        ElementCategory::Actinide,
    ];

    /// Unrecognised slugs fall back to [`ElementCategory::Unknown`].
    pub fn from_slug(slug: &str) -> Self {
        match slug.trim() {
            "alkali-metal" => ElementCategory::AlkaliMetal,
            "alkaline-earth-metal" => ElementCategory::AlkalineEarthMetal,
            "lanthanide" => ElementCategory::Lanthanide,
            "actinide" => ElementCategory::Actinide,
            "transition-metal" => ElementCategory::TransitionMetal,
            "post-transition-metal" => ElementCategory::PostTransitionMetal,
            "metalloid" => ElementCategory::Metalloid,
            "nonmetal" => ElementCategory::Nonmetal,
            "halogen" => ElementCategory::Halogen,
            "noble-gas" => ElementCategory::NobleGas,
            _ => ElementCategory::Unknown,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ElementCategory::AlkaliMetal => "alkali-metal",
            ElementCategory::AlkalineEarthMetal => "alkaline-earth-metal",
            ElementCategory::Lanthanide => "lanthanide",
            ElementCategory::Actinide => "actinide",
            ElementCategory::TransitionMetal => "transition-metal",
            ElementCategory::PostTransitionMetal => "post-transition-metal",
            ElementCategory::Metalloid => "metalloid",
            ElementCategory::Nonmetal => "nonmetal",
            ElementCategory::Halogen => "halogen",
            ElementCategory::NobleGas => "noble-gas",
            ElementCategory::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub category: ElementCategory,
    pub atomic_mass: Option<String>,
    pub period: u32,
    pub group: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodicCell {
    Element(Element),
    Empty,
    Marker {
        label: &'static str,
        category: ElementCategory,
    },
}
