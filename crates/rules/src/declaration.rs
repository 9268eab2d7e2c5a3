/// One CSS property/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self { property: property.into(), value: value.into() }
    }
}

/// One entry of a rule body.
///
/// Repeated properties are allowed and kept in order; a pair like
/// `block-size: 0.75em; block-size: 1cap` is a deliberate fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Declaration(Declaration),
    /// A nested rule. The selector contains `&` standing for the generated
    /// class (`& > :first-child`, `&:only-child`).
    Block {
        selector: String,
        declarations: Vec<Declaration>,
    },
}

impl Entry {
    pub fn block(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self::Block { selector: selector.into(), declarations }
    }
}

/// Shorthand for a top-level declaration entry.
pub fn decl(property: impl Into<String>, value: impl Into<String>) -> Entry {
    Entry::Declaration(Declaration::new(property, value))
}
