#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlossaryTerm {
    pub term: &'static str,
    pub definition: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitExplanation {
    pub symbol: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}
