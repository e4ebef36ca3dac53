//! Property-based tests for the plan catalog and store actions
//!
//! These tests verify:
//! - Any sequence of add/update/delete keeps plan IDs unique
//! - Rejected adds leave the catalog unchanged
//! - Update and delete never change the catalog for unknown IDs
//! - Completing a subscription needs both a user and a selection

use std::collections::HashSet;

use aura_core::AppStore;
use aura_types::{Plan, PlanId, PlanTier, SubscriptionStatus};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(Plan),
    Update(Plan),
    Delete(PlanId),
}

/// IDs drawn from a small pool so collisions with seed and earlier plans happen
fn arb_plan_id() -> impl Strategy<Value = PlanId> {
    prop_oneof![
        Just(PlanId::new("plan_basic")),
        Just(PlanId::new("plan_pro")),
        Just(PlanId::new("plan_ent")),
        "plan_[a-c]".prop_map(PlanId::new),
    ]
}

fn arb_plan() -> impl Strategy<Value = Plan> {
    (
        arb_plan_id(),
        "[A-Z][a-z]{2,10}",
        prop::sample::select(PlanTier::ALL.to_vec()),
        0i64..100_000,
        0i64..1_000_000,
        prop::collection::vec("[a-zA-Z0-9 ]{1,20}", 0..5),
    )
        .prop_map(|(id, name, tier, monthly, yearly, features)| Plan {
            id,
            name,
            tier,
            price_monthly_cents: monthly,
            price_yearly_cents: yearly,
            features,
            recommended_for: String::new(),
        })
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_plan().prop_map(Op::Add),
        arb_plan().prop_map(Op::Update),
        arb_plan_id().prop_map(Op::Delete),
    ]
}

fn assert_unique(store: &AppStore) -> Result<(), TestCaseError> {
    let ids: HashSet<_> = store.plans().iter().map(|p| p.id.clone()).collect();
    prop_assert_eq!(ids.len(), store.plans().len());
    Ok(())
}

// ============================================================================
// Catalog Properties
// ============================================================================

proptest! {
    /// Property: plan IDs stay unique after any sequence of admin actions
    #[test]
    fn catalog_ids_stay_unique(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut store = AppStore::new();

        for op in ops {
            match op {
                Op::Add(plan) => {
                    let existed = store.catalog().contains(&plan.id);
                    let before = store.plans().len();
                    let result = store.add_plan(plan);
                    prop_assert_eq!(result.is_err(), existed);
                    prop_assert_eq!(store.plans().len(), before + usize::from(!existed));
                }
                Op::Update(plan) => {
                    let before = store.plans().len();
                    store.update_plan(plan);
                    prop_assert_eq!(store.plans().len(), before);
                }
                Op::Delete(id) => {
                    store.delete_plan(&id);
                    prop_assert!(!store.catalog().contains(&id));
                }
            }
            assert_unique(&store)?;
        }
    }

    /// Property: updating a missing plan changes nothing
    #[test]
    fn update_of_unknown_id_is_noop(mut plan in arb_plan()) {
        let mut store = AppStore::new();
        plan.id = PlanId::new("plan_missing");
        let before = store.catalog().clone();

        prop_assert!(!store.update_plan(plan));
        prop_assert_eq!(store.catalog(), &before);
    }

    /// Property: updates keep the plan's position in display order
    #[test]
    fn update_preserves_order(mut plan in arb_plan(), index in 0usize..3) {
        let mut store = AppStore::new();
        let ids: Vec<_> = store.plans().iter().map(|p| p.id.clone()).collect();
        plan.id = ids[index].clone();

        prop_assert!(store.update_plan(plan.clone()));
        prop_assert_eq!(&store.plans()[index], &plan);
        let after: Vec<_> = store.plans().iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(after, ids);
    }
}

// ============================================================================
// Subscription Properties
// ============================================================================

proptest! {
    /// Property: completion happens exactly when both a user and a plan exist
    #[test]
    fn completion_requires_user_and_plan(
        login in any::<bool>(),
        select in any::<bool>(),
        name in "[A-Z][a-z]{1,8}( [A-Z][a-z]{1,8}){0,2}",
    ) {
        let mut store = AppStore::new();
        if select {
            let plan = store.plans()[1].clone();
            store.select_plan(plan);
        }
        if login {
            store.login(&name);
        }

        let completed = store.complete_subscription();
        prop_assert_eq!(completed, login && select);
        if login {
            let expected = if select { SubscriptionStatus::Active } else { SubscriptionStatus::Inactive };
            prop_assert_eq!(store.user().unwrap().subscription_status, expected);
        }
    }

    /// Property: two AI toggles restore the flag
    #[test]
    fn toggle_ai_is_an_involution(times in 0usize..6) {
        let mut store = AppStore::new();
        for _ in 0..times * 2 {
            store.toggle_ai();
        }
        prop_assert!(store.is_ai_enabled());
    }
}
