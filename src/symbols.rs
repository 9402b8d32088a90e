use std::collections::{hash_map, HashMap, HashSet};

use tracing::warn;

use crate::ast::{
    Antecedent, Element, Identifier, Resolution, RulebaseId, Universe, UniverseId, UniverseName,
};
use crate::error::CompileError;

/// Names declared so far in one compilation run.
///
/// Blocks are registered strictly in source order, so lookups only ever see
/// declarations that precede the block being compiled.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    universes: Vec<Universe>,
    universe_ids: HashMap<UniverseName, UniverseId>,
    rulebase_names: HashSet<Identifier>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AntecedentTarget {
    pub universe: Resolution<UniverseId>,
    pub condition: Resolution<usize>,
}

impl SymbolTable {
    pub fn register_universe(&mut self, name: UniverseName, elements: Vec<Element>) -> &Universe {
        let id = UniverseId(self.universes.len());

        // Later universes with the same name stay reachable by id only.
        if let hash_map::Entry::Vacant(vacant) = self.universe_ids.entry(name.clone()) {
            vacant.insert(id);
        }

        self.universes.push(Universe { id, name, elements });
        &self.universes[id.0]
    }

    pub fn universes(&self) -> &[Universe] {
        &self.universes
    }

    pub fn universe(&self, id: UniverseId) -> Option<&Universe> {
        self.universes.get(id.0)
    }

    pub fn universe_id(&self, name: &str) -> Resolution<UniverseId> {
        self.universe_ids.get(name).copied().into()
    }

    /// Reserves a rulebase name and hands out the next rulebase id.
    pub fn claim_rulebase(&mut self, name: &str) -> Result<RulebaseId, CompileError> {
        let id = RulebaseId(self.rulebase_names.len());
        if !self.rulebase_names.insert(name.to_owned()) {
            return Err(CompileError::DuplicateRulebase {
                name: name.to_owned(),
            });
        }
        Ok(id)
    }

    pub fn resolve_antecedent(&self, antecedent: &Antecedent) -> AntecedentTarget {
        let Antecedent {
            universe: universe_name,
            condition: condition_name,
        } = antecedent;

        let universe = self.universe_id(universe_name);
        if !universe.is_resolved() {
            warn!(universe = %universe_name, "antecedent universe not found");
        }

        let condition: Resolution<usize> = universe
            .resolved()
            .and_then(|id| self.universe(id))
            .and_then(|universe| universe.condition_index(condition_name))
            .into();
        if let Resolution::Unresolved = condition {
            warn!(
                universe = %universe_name,
                condition = %condition_name,
                "antecedent condition not found"
            );
        }

        AntecedentTarget {
            universe,
            condition,
        }
    }
}
