//! ROI estimate models
//!
//! A conservative estimator that puts time spent chasing suppliers, fixing
//! re-submissions and preparing audits, plus incident costs, into annual
//! money terms for each plan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Plan;

/// Weeks per year used to annualise weekly effort
const WEEKS_PER_YEAR: i64 = 52;
/// Months per year used to annualise monthly effort
const MONTHS_PER_YEAR: i64 = 12;

/// Inputs to the ROI calculator, bounded to the ranges the form offers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RoiInputs {
    #[validate(range(min = 5, max = 2000))]
    pub suppliers: u32,
    #[validate(range(min = 10, max = 20000))]
    pub certificates: u32,
    /// Internal cost per hour (USD)
    #[validate(range(min = 5, max = 250))]
    pub hourly_cost: u32,
    #[validate(range(max = 60))]
    pub chase_hours_week: u32,
    #[validate(range(max = 60))]
    pub rework_hours_week: u32,
    #[validate(range(max = 120))]
    pub audit_hours_month: u32,
    #[validate(range(max = 24))]
    pub delay_incidents_year: u32,
    #[validate(range(max = 500000))]
    pub avg_delay_cost: u32,
    #[validate(range(max = 24))]
    pub compliance_incidents_year: u32,
    #[validate(range(max = 500000))]
    pub avg_compliance_cost: u32,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            suppliers: 60,
            certificates: 180,
            hourly_cost: 25,
            chase_hours_week: 6,
            rework_hours_week: 3,
            audit_hours_month: 12,
            delay_incidents_year: 2,
            avg_delay_cost: 8000,
            compliance_incidents_year: 1,
            avg_compliance_cost: 15000,
        }
    }
}

/// Fractional reductions each plan is assumed to deliver
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoiAssumptions {
    /// Basic: reduction of all admin time
    pub basic_time_reduction: Decimal,
    pub core_chase_reduction: Decimal,
    pub core_rework_reduction: Decimal,
    pub core_audit_reduction: Decimal,
    pub core_incident_reduction: Decimal,
}

impl Default for RoiAssumptions {
    fn default() -> Self {
        Self {
            basic_time_reduction: Decimal::new(20, 2),
            core_chase_reduction: Decimal::new(70, 2),
            core_rework_reduction: Decimal::new(45, 2),
            core_audit_reduction: Decimal::new(50, 2),
            core_incident_reduction: Decimal::new(20, 2),
        }
    }
}

/// Savings for one plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSavings {
    pub plan: Plan,
    /// Placeholder annual price (USD)
    pub price: Decimal,
    pub annual_total: Decimal,
    pub savings: Decimal,
    pub net_after_fee: Decimal,
    /// `None` when the plan saves nothing
    pub payback_months: Option<Decimal>,
}

/// Full ROI estimate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoiEstimate {
    pub annual_chase_cost: Decimal,
    pub annual_rework_cost: Decimal,
    pub annual_audit_cost: Decimal,
    pub annual_time_cost: Decimal,
    pub annual_incident_cost: Decimal,
    pub baseline_total: Decimal,
    pub basic: PlanSavings,
    pub core: PlanSavings,
}

impl RoiEstimate {
    pub fn calculate(inputs: &RoiInputs) -> Self {
        Self::calculate_with(inputs, &RoiAssumptions::default())
    }

    pub fn calculate_with(inputs: &RoiInputs, assumptions: &RoiAssumptions) -> Self {
        let hourly = Decimal::from(inputs.hourly_cost);
        let weeks = Decimal::from(WEEKS_PER_YEAR);
        let months = Decimal::from(MONTHS_PER_YEAR);

        let annual_chase_cost = Decimal::from(inputs.chase_hours_week) * weeks * hourly;
        let annual_rework_cost = Decimal::from(inputs.rework_hours_week) * weeks * hourly;
        let annual_audit_cost = Decimal::from(inputs.audit_hours_month) * months * hourly;
        let annual_time_cost = annual_chase_cost + annual_rework_cost + annual_audit_cost;

        let annual_incident_cost = Decimal::from(inputs.delay_incidents_year)
            * Decimal::from(inputs.avg_delay_cost)
            + Decimal::from(inputs.compliance_incidents_year)
                * Decimal::from(inputs.avg_compliance_cost);
        let baseline_total = annual_time_cost + annual_incident_cost;

        let basic_total = annual_time_cost * (Decimal::ONE - assumptions.basic_time_reduction)
            + annual_incident_cost;

        let core_time = annual_chase_cost * (Decimal::ONE - assumptions.core_chase_reduction)
            + annual_rework_cost * (Decimal::ONE - assumptions.core_rework_reduction)
            + annual_audit_cost * (Decimal::ONE - assumptions.core_audit_reduction);
        let core_total =
            core_time + annual_incident_cost * (Decimal::ONE - assumptions.core_incident_reduction);

        Self {
            annual_chase_cost,
            annual_rework_cost,
            annual_audit_cost,
            annual_time_cost,
            annual_incident_cost,
            baseline_total,
            basic: PlanSavings::new(Plan::Basic, baseline_total, basic_total),
            core: PlanSavings::new(Plan::Core, baseline_total, core_total),
        }
    }
}

impl PlanSavings {
    fn new(plan: Plan, baseline_total: Decimal, annual_total: Decimal) -> Self {
        let price = plan.annual_price();
        let savings = baseline_total - annual_total;
        Self {
            plan,
            price,
            annual_total,
            savings,
            net_after_fee: savings - price,
            payback_months: payback_months(price, savings),
        }
    }
}

/// Months until the plan pays for itself, to one decimal place
pub fn payback_months(price: Decimal, savings: Decimal) -> Option<Decimal> {
    if savings <= Decimal::ZERO {
        return None;
    }
    Some((price / savings * Decimal::from(MONTHS_PER_YEAR)).round_dp(1))
}
