//! Ordered plan catalog
//!
//! Insertion order is display order. IDs are unique: inserts reject
//! duplicates, updates and removals silently ignore unknown IDs.

use aura_types::{Plan, PlanId};

use crate::error::CoreError;
use crate::seed::seed_plans;

/// Ordered, ID-keyed plan collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding the seed plans
    pub fn seeded() -> Self {
        Self { plans: seed_plans() }
    }

    /// Build a catalog from plans, rejecting duplicate IDs
    pub fn from_plans(plans: impl IntoIterator<Item = Plan>) -> Result<Self, CoreError> {
        let mut catalog = Self::new();
        for plan in plans {
            catalog.insert(plan)?;
        }
        Ok(catalog)
    }

    /// Plans in display order
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Iterate plans in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Plan> {
        self.plans.iter()
    }

    /// Number of plans
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Look up a plan by ID
    pub fn get(&self, id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|p| &p.id == id)
    }

    /// Whether a plan with this ID exists
    pub fn contains(&self, id: &PlanId) -> bool {
        self.position(id).is_some()
    }

    /// Time-derived ID not yet used in the catalog.
    ///
    /// Plans created within the same millisecond get `_2`, `_3`, ...
    /// appended to the shared timestamp ID.
    pub fn fresh_id(&self) -> PlanId {
        let base = PlanId::generate();
        if !self.contains(&base) {
            return base;
        }
        let mut n = 2u64;
        loop {
            let candidate = PlanId::new(format!("{base}_{n}"));
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn position(&self, id: &PlanId) -> Option<usize> {
        self.plans.iter().position(|p| &p.id == id)
    }

    /// Append a plan
    pub fn insert(&mut self, plan: Plan) -> Result<(), CoreError> {
        if self.contains(&plan.id) {
            return Err(CoreError::DuplicatePlanId(plan.id));
        }
        self.plans.push(plan);
        Ok(())
    }

    /// Replace the plan with the same ID in place.
    ///
    /// Returns `false` (and changes nothing) when no plan matches.
    pub fn update(&mut self, plan: Plan) -> bool {
        match self.position(&plan.id) {
            Some(idx) => {
                self.plans[idx] = plan;
                true
            }
            None => false,
        }
    }

    /// Remove a plan, returning it if it was present
    pub fn remove(&mut self, id: &PlanId) -> Option<Plan> {
        self.position(id).map(|idx| self.plans.remove(idx))
    }
}

impl<'a> IntoIterator for &'a PlanCatalog {
    type Item = &'a Plan;
    type IntoIter = std::slice::Iter<'a, Plan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
