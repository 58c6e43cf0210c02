//! # Pro Forma Projection
//!
//! A library for turning a handful of business assumptions into a 12-month
//! pro forma income statement.
//!
//! ## Core Concepts
//!
//! - **Assumptions**: average order value, subscription sales per plan and end-user order volume
//! - **Projection**: twelve fully populated monthly records, January through December
//! - **Ramps**: credit card commissions and shipping profits start at a base, double, then grow by a fixed step
//! - **Statement Integrity**: every subtotal is the exact sum of its lines in every period
//!
//! ## Example
//!
//! ```rust
//! use proforma_projection::*;
//!
//! let assumptions = Assumptions::new(100.0, 10.0, 0.0, 5.0);
//! let projection = compute_projection(&assumptions);
//!
//! assert_eq!(projection.len(), 12);
//! assert_eq!(projection.records()[0].month, "Jan");
//! assert_eq!(projection.records()[0].reseller_fee, 10000.0);
//!
//! let summary = StatementTable::build(StatementSection::Summary, &projection);
//! println!("{}", summary.to_markdown());
//! ```

pub mod chart;
pub mod engine;
pub mod error;
pub mod ingestion;
pub mod line_items;
pub mod schema;
pub mod statement;
pub mod utils;
pub mod verification;

pub use chart::{chart_series, ChartSeries, CHART_LINES};
pub use engine::{compute_projection, BaseQuantities, ProjectionEngine};
pub use error::{ProformaError, Result};
pub use ingestion::{coerce_amount, RawAssumptions};
pub use line_items::LineItem;
pub use schema::Assumptions;
pub use statement::{StatementSection, StatementTable, TableRow};
pub use utils::*;
pub use verification::verify_projection;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One period of the projected income statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRecord {
    pub month: String,

    // Revenue
    pub b_commerce_subscriptions: f64,
    pub credit_card_commissions: f64,
    pub shipping_profits: f64,
    #[serde(rename = "threePLEasy")]
    pub three_pl_easy: f64,
    pub total_revenue: f64,

    // Cost of goods sold
    #[serde(rename = "cogsBCommerce")]
    pub cogs_b_commerce: f64,
    pub cogs_credit_card: f64,
    pub cogs_shipping: f64,
    #[serde(rename = "cogsThreePL")]
    pub cogs_three_pl: f64,
    #[serde(rename = "otherCOGS")]
    pub other_cogs: f64,
    #[serde(rename = "totalCOGS")]
    pub total_cogs: f64,

    pub gross_profit: f64,

    // Operating expenses
    pub salaries: f64,
    pub payroll_taxes: f64,
    pub rent: f64,
    pub utilities: f64,
    pub facebook_ads: f64,
    pub insurance: f64,
    pub reseller_fee: f64,
    pub software_subscriptions: f64,
    pub indeed_recruiting: f64,
    pub total_operating_expenses: f64,

    pub net_operating_income: f64,

    // Other income and expenses
    pub other_income: f64,
    pub interest_expense: f64,
    pub taxes: f64,
    pub depreciation: f64,
    pub total_other: f64,

    pub net_income_pre_draw: f64,
    pub owners_draw: f64,
    pub net_income: f64,
}

impl MonthlyRecord {
    /// A record with every line set to zero.
    pub fn zeroed(month: &str) -> Self {
        Self {
            month: month.to_string(),
            b_commerce_subscriptions: 0.0,
            credit_card_commissions: 0.0,
            shipping_profits: 0.0,
            three_pl_easy: 0.0,
            total_revenue: 0.0,
            cogs_b_commerce: 0.0,
            cogs_credit_card: 0.0,
            cogs_shipping: 0.0,
            cogs_three_pl: 0.0,
            other_cogs: 0.0,
            total_cogs: 0.0,
            gross_profit: 0.0,
            salaries: 0.0,
            payroll_taxes: 0.0,
            rent: 0.0,
            utilities: 0.0,
            facebook_ads: 0.0,
            insurance: 0.0,
            reseller_fee: 0.0,
            software_subscriptions: 0.0,
            indeed_recruiting: 0.0,
            total_operating_expenses: 0.0,
            net_operating_income: 0.0,
            other_income: 0.0,
            interest_expense: 0.0,
            taxes: 0.0,
            depreciation: 0.0,
            total_other: 0.0,
            net_income_pre_draw: 0.0,
            owners_draw: 0.0,
            net_income: 0.0,
        }
    }

    pub fn value(&self, item: LineItem) -> f64 {
        item.value(self)
    }
}

/// Projection records keyed by the month-end date of each period.
pub type DatedProjection = BTreeMap<NaiveDate, MonthlyRecord>;

/// The twelve records of one projection run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Projection {
    records: Vec<MonthlyRecord>,
}

impl Projection {
    pub(crate) fn from_engine(records: Vec<MonthlyRecord>) -> Self {
        debug_assert_eq!(records.len(), PROJECTION_MONTHS);
        Self { records }
    }

    /// Wraps records produced elsewhere, rejecting anything but exactly 12 periods.
    pub fn from_records(records: Vec<MonthlyRecord>) -> Result<Self> {
        if records.len() != PROJECTION_MONTHS {
            return Err(ProformaError::ProjectionLength(records.len()));
        }
        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<MonthlyRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    pub fn records(&self) -> &[MonthlyRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthlyRecord> {
        self.records.iter()
    }

    pub fn get(&self, index: usize) -> Option<&MonthlyRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<MonthlyRecord> {
        self.records
    }

    /// Values of a single line across all periods.
    pub fn series(&self, item: LineItem) -> Vec<f64> {
        self.records.iter().map(|r| item.value(r)).collect()
    }

    pub fn total_for(&self, item: LineItem) -> f64 {
        self.records.iter().map(|r| item.value(r)).sum()
    }

    /// Aggregate row labelled "Total": each line summed across all periods.
    pub fn totals(&self) -> MonthlyRecord {
        let mut totals = MonthlyRecord::zeroed("Total");
        for record in &self.records {
            for item in LineItem::ALL {
                *item.value_mut(&mut totals) += item.value(record);
            }
        }
        totals
    }

    /// Keys each record by its month-end date, with period 0 in January of `year`.
    pub fn dated(&self, year: i32) -> Result<DatedProjection> {
        let mut dated = BTreeMap::new();
        for (index, record) in self.records.iter().enumerate() {
            dated.insert(period_end_date(year, index)?, record.clone());
        }
        debug!("Dated projection for {} across {} periods", year, dated.len());
        Ok(dated)
    }
}

impl<'a> IntoIterator for &'a Projection {
    type Item = &'a MonthlyRecord;
    type IntoIter = std::slice::Iter<'a, MonthlyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

pub struct ProjectionProcessor;

impl ProjectionProcessor {
    pub fn process(assumptions: &Assumptions) -> Projection {
        compute_projection(assumptions)
    }

    pub fn process_raw(raw: &RawAssumptions) -> Projection {
        compute_projection(&raw.coerce())
    }

    pub fn process_with_verification(
        assumptions: &Assumptions,
        tolerance: f64,
    ) -> Result<Projection> {
        let projection = Self::process(assumptions);

        verify_projection(&projection, tolerance)?;

        Ok(projection)
    }
}

pub fn compute_with_verification(assumptions: &Assumptions, tolerance: f64) -> Result<Projection> {
    ProjectionProcessor::process_with_verification(assumptions, tolerance)
}
