//! Scenario runner for repeated projections
//!
//! The interactive collaborator recomputes the projection on every input
//! change; this runner holds one household's base parameters and expense
//! snapshot so variants can be projected cheaply without rebuilding inputs.

use crate::household::{HousingPlan, OneTimeExpense, ProjectionParameters};
use crate::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};

/// Pre-loaded runner for projecting one household under varying inputs
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new(params).with_expenses(expenses);
/// for plan in plans {
///     let result = runner.run_with_housing(config.clone(), plan);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_params: ProjectionParameters,
    one_time: Vec<OneTimeExpense>,
}

impl ScenarioRunner {
    /// Create a runner with base parameters and no one-time expenses
    pub fn new(base_params: ProjectionParameters) -> Self {
        Self {
            base_params,
            one_time: Vec::new(),
        }
    }

    /// Attach a one-time expense snapshot
    pub fn with_expenses(mut self, one_time: Vec<OneTimeExpense>) -> Self {
        self.one_time = one_time;
        self
    }

    /// Run a single projection with the given config
    pub fn run(&self, config: ProjectionConfig) -> ProjectionResult {
        let engine = ProjectionEngine::new(config);
        engine.project(&self.base_params, &self.one_time)
    }

    /// Run a projection with the housing plan swapped out
    pub fn run_with_housing(&self, config: ProjectionConfig, housing: HousingPlan) -> ProjectionResult {
        let mut params = self.base_params.clone();
        params.housing = housing;
        let engine = ProjectionEngine::new(config);
        engine.project(&params, &self.one_time)
    }

    /// Run one projection per housing plan with the same config
    pub fn run_housing_variants(
        &self,
        config: &ProjectionConfig,
        plans: &[HousingPlan],
    ) -> Vec<ProjectionResult> {
        plans
            .iter()
            .map(|plan| self.run_with_housing(config.clone(), plan.clone()))
            .collect()
    }

    /// Get reference to base parameters for inspection
    pub fn params(&self) -> &ProjectionParameters {
        &self.base_params
    }

    /// Get mutable reference to base parameters for customization
    pub fn params_mut(&mut self) -> &mut ProjectionParameters {
        &mut self.base_params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::household::ChildStatus;
    use chrono::NaiveDate;

    fn base_params() -> ProjectionParameters {
        ProjectionParameters {
            monthly_income: 6_000.0,
            monthly_expenses: 2_000.0,
            monthly_child_expenses: 0.0,
            annual_insurance: 0.0,
            annual_tax: 0.0,
            annual_bonus: 0.0,
            childcare_monthly: 0.0,
            preschool_monthly: 0.0,
            primary_school_monthly: 0.0,
            child_status: ChildStatus::Planned,
            child_reference_date: NaiveDate::from_ymd_opt(2099, 1, 1).unwrap(),
            initial_funds: 50_000.0,
            housing: HousingPlan::NotPlanned,
        }
    }

    #[test]
    fn test_housing_variants() {
        let runner = ScenarioRunner::new(base_params());
        let config = ProjectionConfig::starting_at(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());

        let plans = vec![
            HousingPlan::NotPlanned,
            HousingPlan::AlreadyOwned {
                monthly_mortgage: 1_500.0,
                property_value: 700_000.0,
                outstanding_loan: 200_000.0,
            },
        ];
        let results = runner.run_housing_variants(&config, &plans);
        assert_eq!(results.len(), 2);

        // Renting saves more cash, but owning holds more total assets here
        let renting = results[0].summary();
        let owning = results[1].summary();
        assert!(renting.final_cumulative_savings > owning.final_cumulative_savings);
        assert!(owning.final_total_assets > renting.final_total_assets);
    }

    #[test]
    fn test_params_mut() {
        let mut runner = ScenarioRunner::new(base_params());
        runner.params_mut().monthly_income = 8_000.0;
        let config = ProjectionConfig::starting_at(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        let result = runner.run(config);
        assert_eq!(result.records[0].income, 8_000.0);
    }
}
