//! Rendering of compiled blocks as calls against the FRI host API.
//!
//! Element and antecedent calls carry no universe or rule argument; the host
//! applies them to the most recently initialized universe or rule, so the
//! order of the generated lines is significant.

use itertools::Itertools;

use crate::ast::{Element, Rule, Rulebase, Universe};
use crate::symbols::{AntecedentTarget, SymbolTable};

pub const ENTRY_PROLOGUE: &str = "int main(){\n\n";
pub const ENTRY_EPILOGUE: &str = "\nreturn 0;\n}\n";

pub fn init_call(universe_count: usize, rulebase_count: usize) -> String {
    format!("FRI_init({}, {});\n\n", universe_count, rulebase_count)
}

/// Non-finite values are spelled with the `math.h` macros; negative zero
/// prints as `0`.
pub fn coordinate(x: f64) -> String {
    if x.is_nan() {
        "NAN".to_owned()
    } else if x.is_infinite() {
        let name = if x > 0.0 { "INFINITY" } else { "-INFINITY" };
        name.to_owned()
    } else if x == 0.0 {
        "0".to_owned()
    } else {
        x.to_string()
    }
}

impl Element {
    pub fn to_c(&self) -> String {
        format!(
            "FRI_addUniverseElement({}, {});\n",
            coordinate(self.x),
            coordinate(self.y)
        )
    }
}

impl Universe {
    pub fn to_c(&self) -> String {
        let mut s = format!(
            "FRI_initUniverseById({}, {}); // Universe: {}\n",
            self.id,
            self.elements.len(),
            self.name
        );
        s.push_str(&self.elements.iter().map(Element::to_c).join(""));
        s.push('\n');
        s
    }
}

impl Rule {
    /// Antecedents are resolved against `symbols` as they stand now.
    pub fn to_c(&self, index: usize, symbols: &SymbolTable) -> String {
        let mut s = format!(
            "FRI_addRuleToRulebase({}, {});\n",
            index,
            self.antecedents.len()
        );
        for antecedent in &self.antecedents {
            let AntecedentTarget {
                universe,
                condition,
            } = symbols.resolve_antecedent(antecedent);
            s.push_str(&format!(
                "FRI_addAntecedentToRule({}, {});\n",
                universe, condition
            ));
        }
        s.push('\n');
        s
    }
}

impl Rulebase {
    pub fn to_c(&self, symbols: &SymbolTable) -> String {
        let mut s = format!(
            "FRI_initRuleBaseById({}, {}, {}); // Rulebase: {}",
            self.id,
            self.rules.len(),
            self.consequent,
            self.name
        );

        if !self.consequent.is_resolved() {
            s.push_str(" (INVALID)\n\n");
            return s;
        }

        s.push('\n');
        for (index, rule) in self.rules.iter().enumerate() {
            s.push_str(&rule.to_c(index, symbols));
        }
        s.push('\n');
        s
    }
}
