//! Prompt and response-schema construction

use serde::Serialize;
use serde_json::{json, Value};

use aura_types::{cents_to_dollars, Plan};

use crate::provider::RecommendationRequest;
use crate::usage::UsageAnalysis;

const NO_USAGE_CONTEXT: &str = "No historical usage data available.";

/// Plan as presented to the model, prices in dollars
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PromptPlan<'a> {
    id: &'a str,
    name: &'a str,
    price_monthly: f64,
    price_yearly: f64,
    features: &'a [String],
    recommended_for: &'a str,
}

impl<'a> From<&'a Plan> for PromptPlan<'a> {
    fn from(plan: &'a Plan) -> Self {
        Self {
            id: plan.id.as_str(),
            name: &plan.name,
            price_monthly: cents_to_dollars(plan.price_monthly_cents),
            price_yearly: cents_to_dollars(plan.price_yearly_cents),
            features: &plan.features,
            recommended_for: &plan.recommended_for,
        }
    }
}

/// Serialize the catalog the way the prompt quotes it
pub fn plans_json(plans: &[Plan]) -> String {
    let prompt_plans: Vec<PromptPlan<'_>> = plans.iter().map(PromptPlan::from).collect();
    serde_json::to_string(&prompt_plans).unwrap_or_else(|_| "[]".to_string())
}

/// Budget line; zero and missing budgets read as flexible
fn budget_line(budget: Option<f64>) -> String {
    match budget {
        Some(b) if b > 0.0 => format!("${b}"),
        _ => "Flexible".to_string(),
    }
}

fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}

/// Build the full recommendation prompt
pub fn build_prompt(request: &RecommendationRequest) -> String {
    let usage_context = request
        .usage_history
        .as_deref()
        .and_then(UsageAnalysis::from_history)
        .map_or_else(|| NO_USAGE_CONTEXT.to_string(), |a| a.prompt_context());

    format!(
        r#"You are a sales expert for AuraStream.
Available Plans: {plans}

User Profile & Requirements:
- User Query/Needs: "{description}"
- Max Monthly Budget: {budget}
- Desired Features: "{features}"
{usage_context}

Task: Recommend the single best plan ID based on the user's constraints and usage patterns.

Decision Logic:
1. Budget Check: If a budget is set, strictly try to respect it.
2. Usage Check:
   - If estimated usage is HIGH (>500GB/mo), strongly lean towards 'Enterprise' (Ultra Stream) or at least 'Pro' to avoid quality throttling, unless the budget strictly forbids it.
   - If usage is MODERATE, 'Pro' is usually best.
   - If usage is LOW, 'Basic' is sufficient.
3. Feature Check: If specific features (4K, multiple users) are requested, prioritize the plan that has them.

Output:
Provide a JSON object with:
- recommendedPlanId: The ID of the plan.
- reasoning: A persuasive, friendly sentence explaining why this plan fits their specific needs (mention their usage stats if relevant, e.g., "Given your high monthly usage of X GB...")."#,
        plans = plans_json(&request.available_plans),
        description = or_default(Some(request.description.as_str()), "Not specified"),
        budget = budget_line(request.budget),
        features = or_default(request.features.as_deref(), "Any"),
    )
}

/// Response schema forcing `{recommendedPlanId, reasoning}`
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "recommendedPlanId": { "type": "STRING" },
            "reasoning": { "type": "STRING" }
        },
        "required": ["recommendedPlanId", "reasoning"]
    })
}
