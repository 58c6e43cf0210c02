use crate::error::{ProformaError, Result};
use crate::line_items::LineItem;
use crate::utils::{period_labels, PROJECTION_MONTHS};
use crate::{MonthlyRecord, Projection};
use log::debug;

/// Checks the shape of a projection and every subtotal identity in every period.
///
/// Fails on the first mismatch larger than `tolerance`.
pub fn verify_projection(projection: &Projection, tolerance: f64) -> Result<()> {
    if projection.len() != PROJECTION_MONTHS {
        return Err(ProformaError::ProjectionLength(projection.len()));
    }

    for (index, (record, expected_label)) in
        projection.iter().zip(period_labels()).enumerate()
    {
        if record.month != expected_label {
            return Err(ProformaError::PeriodOrder {
                index,
                expected: expected_label.to_string(),
                actual: record.month.clone(),
            });
        }
        verify_record(record, tolerance)?;
    }

    debug!("Verified {} periods within tolerance {}", projection.len(), tolerance);

    Ok(())
}

fn verify_record(record: &MonthlyRecord, tolerance: f64) -> Result<()> {
    let checks = [
        (
            LineItem::TotalRevenue,
            record.b_commerce_subscriptions
                + record.credit_card_commissions
                + record.shipping_profits
                + record.three_pl_easy,
        ),
        (
            LineItem::TotalCogs,
            record.cogs_b_commerce
                + record.cogs_credit_card
                + record.cogs_shipping
                + record.cogs_three_pl
                + record.other_cogs,
        ),
        (
            LineItem::GrossProfit,
            record.total_revenue - record.total_cogs,
        ),
        (
            LineItem::TotalOperatingExpenses,
            record.salaries
                + record.payroll_taxes
                + record.rent
                + record.utilities
                + record.facebook_ads
                + record.insurance
                + record.reseller_fee
                + record.software_subscriptions
                + record.indeed_recruiting,
        ),
        (
            LineItem::NetOperatingIncome,
            record.gross_profit - record.total_operating_expenses,
        ),
        (
            LineItem::TotalOther,
            record.other_income - record.interest_expense - record.taxes - record.depreciation,
        ),
        (
            LineItem::NetIncomePreDraw,
            record.net_operating_income + record.total_other,
        ),
        (
            LineItem::NetIncome,
            record.net_income_pre_draw - record.owners_draw,
        ),
    ];

    for (line, expected) in checks {
        let actual = line.value(record);
        if (expected - actual).abs() > tolerance {
            return Err(ProformaError::InvariantViolation {
                period: record.month.clone(),
                line: line.label().to_string(),
                expected,
                actual,
            });
        }
    }

    Ok(())
}
