use thiserror::Error;

/// Conditions that abort a compilation run without producing any output.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CompileError {
    #[error("duplicate rulebase name {name:?}, aborting generation")]
    DuplicateRulebase { name: String },
}
