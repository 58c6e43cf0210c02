use crate::schema::Assumptions;
use crate::utils::period_labels;
use crate::{MonthlyRecord, Projection};
use log::{debug, info};

/// bCommerce subscription revenue per unit of eCommerce plan sales.
pub const BCOMMERCE_ECOMMERCE_MULTIPLIER: f64 = 498.0;
/// bCommerce subscription revenue per unit of Wholesale plan sales.
pub const BCOMMERCE_WHOLESALE_MULTIPLIER: f64 = 4000.0;
/// Shipments generated per unit of subscription sales.
pub const SHIPMENTS_PER_SUBSCRIPTION: f64 = 120.0;

/// Monthly growth of credit card commissions from the third period on.
pub const CREDIT_CARD_MONTHLY_STEP: f64 = 2340.0;
/// Monthly growth of shipping profits from the third period on.
pub const SHIPPING_MONTHLY_STEP: f64 = 3900.0;

pub const COGS_DIVISOR: f64 = 2.0;
pub const SALARIES_RATIO: f64 = 0.3;

pub const FACEBOOK_ADS: f64 = 1300.0;
pub const SOFTWARE_SUBSCRIPTIONS: f64 = 700.0;
pub const INDEED_RECRUITING: f64 = 500.0;
/// One-time bCommerce reseller initiation fee, charged in the first period only.
pub const RESELLER_FEE: f64 = 10000.0;

/// Quantities derived once from the assumptions and reused by every period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseQuantities {
    pub credit_card: f64,
    pub shipping: f64,
    pub b_commerce: f64,
}

impl BaseQuantities {
    pub fn from_assumptions(assumptions: &Assumptions) -> Self {
        let subscriptions = assumptions.total_subscription_revenue();

        Self {
            credit_card: subscriptions
                * assumptions.end_user_monthly_sales_orders
                * assumptions.average_order_value
                * Assumptions::CREDIT_CARD_COMMISSION_RATE,
            shipping: subscriptions
                * SHIPMENTS_PER_SUBSCRIPTION
                * Assumptions::COMMISSION_PER_SHIPMENT,
            b_commerce: BCOMMERCE_ECOMMERCE_MULTIPLIER * assumptions.ecommerce_subscription_revenue
                + BCOMMERCE_WHOLESALE_MULTIPLIER * assumptions.wholesale_subscription_revenue,
        }
    }
}

// The only state carried from one period to the next.
#[derive(Debug, Clone, Copy, Default)]
struct RunningRevenue {
    credit_card: f64,
    shipping: f64,
}

/// Three-phase ramp shared by the credit card and shipping lines:
/// base in period 0, double the base in period 1, then a fixed step per period.
fn ramp(base: f64, previous: f64, index: usize, step: f64) -> f64 {
    match index {
        0 => base,
        1 => base * 2.0,
        _ => previous + step,
    }
}

pub struct ProjectionEngine {
    assumptions: Assumptions,
}

impl ProjectionEngine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn base_quantities(&self) -> BaseQuantities {
        BaseQuantities::from_assumptions(&self.assumptions)
    }

    /// Builds all twelve periods in one left-to-right pass.
    pub fn project(&self) -> Projection {
        let base = self.base_quantities();
        debug!(
            "Base quantities: credit card {}, shipping {}, bCommerce {}",
            base.credit_card, base.shipping, base.b_commerce
        );

        let records: Vec<MonthlyRecord> = period_labels()
            .into_iter()
            .enumerate()
            .scan(RunningRevenue::default(), |running, (index, label)| {
                running.credit_card = ramp(
                    base.credit_card,
                    running.credit_card,
                    index,
                    CREDIT_CARD_MONTHLY_STEP,
                );
                running.shipping =
                    ramp(base.shipping, running.shipping, index, SHIPPING_MONTHLY_STEP);

                Some(build_record(index, label, &base, *running))
            })
            .collect();

        let projection = Projection::from_engine(records);

        if let Some(last) = projection.records().last() {
            info!(
                "Projected {} periods: {} revenue {}, annual net income {}",
                projection.len(),
                last.month,
                last.total_revenue,
                projection.totals().net_income
            );
        }

        projection
    }
}

fn build_record(
    index: usize,
    label: &str,
    base: &BaseQuantities,
    running: RunningRevenue,
) -> MonthlyRecord {
    let b_commerce_subscriptions = base.b_commerce;
    let credit_card_commissions = running.credit_card;
    let shipping_profits = running.shipping;
    // Reserved revenue stream, currently inactive.
    let three_pl_easy = 0.0;
    let total_revenue =
        b_commerce_subscriptions + credit_card_commissions + shipping_profits + three_pl_easy;

    let cogs_b_commerce = b_commerce_subscriptions / COGS_DIVISOR;
    let cogs_credit_card = credit_card_commissions / COGS_DIVISOR;
    let cogs_shipping = shipping_profits / COGS_DIVISOR;
    let cogs_three_pl = three_pl_easy / COGS_DIVISOR;
    let other_cogs = 0.0;
    let total_cogs = cogs_b_commerce + cogs_credit_card + cogs_shipping + cogs_three_pl + other_cogs;

    let gross_profit = total_revenue - total_cogs;

    let salaries = total_revenue * SALARIES_RATIO;
    let payroll_taxes = 0.0;
    let rent = 0.0;
    let utilities = 0.0;
    let facebook_ads = FACEBOOK_ADS;
    let insurance = 0.0;
    let reseller_fee = if index == 0 { RESELLER_FEE } else { 0.0 };
    let software_subscriptions = SOFTWARE_SUBSCRIPTIONS;
    let indeed_recruiting = INDEED_RECRUITING;
    let total_operating_expenses = salaries
        + payroll_taxes
        + rent
        + utilities
        + facebook_ads
        + insurance
        + reseller_fee
        + software_subscriptions
        + indeed_recruiting;

    let net_operating_income = gross_profit - total_operating_expenses;

    let other_income = 0.0;
    let interest_expense = 0.0;
    let taxes = 0.0;
    let depreciation = 0.0;
    let total_other = other_income - interest_expense - taxes - depreciation;

    let net_income_pre_draw = net_operating_income + total_other;
    let owners_draw = 0.0;
    let net_income = net_income_pre_draw - owners_draw;

    MonthlyRecord {
        month: label.to_string(),
        b_commerce_subscriptions,
        credit_card_commissions,
        shipping_profits,
        three_pl_easy,
        total_revenue,
        cogs_b_commerce,
        cogs_credit_card,
        cogs_shipping,
        cogs_three_pl,
        other_cogs,
        total_cogs,
        gross_profit,
        salaries,
        payroll_taxes,
        rent,
        utilities,
        facebook_ads,
        insurance,
        reseller_fee,
        software_subscriptions,
        indeed_recruiting,
        total_operating_expenses,
        net_operating_income,
        other_income,
        interest_expense,
        taxes,
        depreciation,
        total_other,
        net_income_pre_draw,
        owners_draw,
        net_income,
    }
}

/// Computes the 12-month projection for a set of assumptions.
pub fn compute_projection(assumptions: &Assumptions) -> Projection {
    ProjectionEngine::new(*assumptions).project()
}
