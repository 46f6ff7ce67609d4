use crate::domain::entities::reference::{GlossaryTerm, UnitExplanation};

pub const GLOSSARY_TERMS: &[GlossaryTerm] = &[
    GlossaryTerm {
        term: "CAS Number",
        definition: "A unique numerical identifier assigned by the Chemical Abstracts Service (CAS) to every chemical substance described in the open scientific literature.",
    },
    GlossaryTerm {
        term: "SMILES",
        definition: "Simplified Molecular Input Line Entry System, a linear notation for describing the structure of chemical molecules.",
    },
    GlossaryTerm {
        term: "SDS",
        definition: "Safety Data Sheet, a document that provides comprehensive information about a substance or mixture for use in workplace chemical management.",
    },
    GlossaryTerm {
        term: "GHS",
        definition: "Globally Harmonized System of Classification and Labelling of Chemicals, an internationally agreed-upon standard managed by the United Nations that was set up to replace the various classification and labelling standards used in different countries.",
    },
    GlossaryTerm {
        term: "NFPA 704",
        definition: "A standard maintained by the U.S.-based National Fire Protection Association. It defines the \"fire diamond\" used by emergency personnel to quickly and easily identify the risks posed by hazardous materials.",
    },
];

pub const UNIT_EXPLANATIONS: &[UnitExplanation] = &[
    UnitExplanation {
        symbol: "°C",
        name: "Degrees Celsius",
        description: "Unit of temperature.",
    },
    UnitExplanation {
        symbol: "g/mol",
        name: "Grams per mole",
        description: "Unit of molar mass.",
    },
    UnitExplanation {
        symbol: "g/cm³",
        name: "Grams per cubic centimeter",
        description: "Unit of density.",
    },
    UnitExplanation {
        symbol: "ppm",
        name: "Parts per million",
        description: "Unit of concentration.",
    },
];

pub const SAFETY_GUIDELINES: &[&str] = &[
    "Always wear appropriate Personal Protective Equipment (PPE), including safety goggles, gloves, and lab coats.",
    "Know the location and operation of safety equipment (e.g., eyewash stations, safety showers, fire extinguishers).",
    "Never eat, drink, or smoke in the laboratory.",
    "Handle chemicals with care, and be aware of their specific hazards.",
    "Dispose of chemical waste properly according to established procedures.",
];

pub const SAFETY_NOTE: &str = "This is not an exhaustive list. Always follow your institution's safety protocols and consult specific Safety Data Sheets (SDS).";

pub const DATA_SOURCES: &str = "Information on ChemInfoHub is compiled from publicly available databases, scientific literature, and regulatory sources. While we strive for accuracy, data may not always be complete or up-to-date.";

pub const DISCLAIMER: &str = "The information provided on ChemInfoHub is for informational and educational purposes only. It is not intended as a substitute for professional advice, diagnosis, or treatment. Always seek the advice of qualified professionals for any questions you may have regarding a chemical substance or its handling. ChemInfoHub and its contributors assume no liability for any damages or loss arising from the use of information on this site.";
