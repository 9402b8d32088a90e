use std::fmt;

pub type Identifier = String;
pub type UniverseName = Identifier;
pub type ConditionName = Identifier;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct UniverseId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RulebaseId(pub usize);

impl fmt::Display for UniverseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for RulebaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Outcome of looking a name up in the symbol tables. Unresolved references
/// are rendered as `-1` in generated code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution<T> {
    Resolved(T),
    Unresolved,
}

impl<T> Resolution<T> {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved(_))
    }

    pub fn resolved(self) -> Option<T> {
        match self {
            Resolution::Resolved(value) => Some(value),
            Resolution::Unresolved => None,
        }
    }
}

impl<T> From<Option<T>> for Resolution<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Resolution::Unresolved, Resolution::Resolved)
    }
}

impl<T: fmt::Display> fmt::Display for Resolution<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Resolved(value) => value.fmt(f),
            Resolution::Unresolved => f.write_str("-1"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub name: ConditionName,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Universe {
    pub id: UniverseId,
    pub name: UniverseName,
    pub elements: Vec<Element>,
}

impl Universe {
    /// Index of the first element called `name`.
    pub fn condition_index(&self, name: &str) -> Option<usize> {
        self.elements.iter().position(|element| element.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Antecedent {
    pub universe: UniverseName,
    pub condition: ConditionName,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Kept as written; never resolved against the universes.
    pub consequent: Identifier,
    pub antecedents: Vec<Antecedent>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rulebase {
    pub id: RulebaseId,
    pub name: Identifier,
    /// The universe sharing the rulebase's name, if one was declared before it.
    pub consequent: Resolution<UniverseId>,
    pub rules: Vec<Rule>,
}
