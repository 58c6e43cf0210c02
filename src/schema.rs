use crate::error::Result;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Business assumptions that drive a 12-month projection.
///
/// All amounts are expected to be finite and non-negative. Raw user input
/// should go through [`crate::RawAssumptions::coerce`] (or
/// [`Assumptions::sanitized`]) before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Assumptions {
    #[schemars(description = "Average order value in currency units for a single end-user order")]
    pub average_order_value: f64,

    #[schemars(description = "Monthly subscription sales on the eCommerce plan")]
    pub ecommerce_subscription_revenue: f64,

    #[schemars(description = "Monthly subscription sales on the Wholesale plan")]
    pub wholesale_subscription_revenue: f64,

    #[schemars(description = "Number of end-user sales orders placed per month")]
    pub end_user_monthly_sales_orders: f64,

    #[schemars(
        description = "Annual churn rate in percent. Collected for reference only; the projection does not apply it."
    )]
    pub annual_churn_rate: f64,
}

impl Assumptions {
    /// Commission earned per sale for each shipment. Not user-editable.
    pub const COMMISSION_PER_SHIPMENT: f64 = 0.5;

    /// Commission rate earned on credit card processing volume. Not user-editable.
    pub const CREDIT_CARD_COMMISSION_RATE: f64 = 0.0071;

    pub fn new(
        average_order_value: f64,
        ecommerce_subscription_revenue: f64,
        wholesale_subscription_revenue: f64,
        end_user_monthly_sales_orders: f64,
    ) -> Self {
        Self {
            average_order_value,
            ecommerce_subscription_revenue,
            wholesale_subscription_revenue,
            end_user_monthly_sales_orders,
            annual_churn_rate: 0.0,
        }
    }

    pub fn with_annual_churn_rate(mut self, annual_churn_rate: f64) -> Self {
        self.annual_churn_rate = annual_churn_rate;
        self
    }

    pub fn commission_per_shipment(&self) -> f64 {
        Self::COMMISSION_PER_SHIPMENT
    }

    pub fn credit_card_commission_rate(&self) -> f64 {
        Self::CREDIT_CARD_COMMISSION_RATE
    }

    /// Combined eCommerce and Wholesale subscription sales.
    pub fn total_subscription_revenue(&self) -> f64 {
        self.ecommerce_subscription_revenue + self.wholesale_subscription_revenue
    }

    /// Returns a copy with every negative or non-finite field replaced by zero.
    pub fn sanitized(&self) -> Self {
        Self {
            average_order_value: clamp_non_negative(self.average_order_value),
            ecommerce_subscription_revenue: clamp_non_negative(self.ecommerce_subscription_revenue),
            wholesale_subscription_revenue: clamp_non_negative(self.wholesale_subscription_revenue),
            end_user_monthly_sales_orders: clamp_non_negative(self.end_user_monthly_sales_orders),
            annual_churn_rate: clamp_non_negative(self.annual_churn_rate),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let assumptions: Self = serde_json::from_str(json)?;
        Ok(assumptions)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Assumptions)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

pub(crate) fn clamp_non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
