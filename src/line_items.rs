use crate::MonthlyRecord;
use serde::{Deserialize, Serialize};

/// Every numeric line of a [`MonthlyRecord`], in income statement order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItem {
    BCommerceSubscriptions,
    CreditCardCommissions,
    ShippingProfits,
    ThreePlEasy,
    TotalRevenue,
    CogsBCommerce,
    CogsCreditCard,
    CogsShipping,
    CogsThreePl,
    OtherCogs,
    TotalCogs,
    GrossProfit,
    Salaries,
    PayrollTaxes,
    Rent,
    Utilities,
    FacebookAds,
    Insurance,
    ResellerFee,
    SoftwareSubscriptions,
    IndeedRecruiting,
    TotalOperatingExpenses,
    NetOperatingIncome,
    OtherIncome,
    InterestExpense,
    Taxes,
    Depreciation,
    TotalOther,
    NetIncomePreDraw,
    OwnersDraw,
    NetIncome,
}

impl LineItem {
    pub const ALL: [LineItem; 31] = [
        LineItem::BCommerceSubscriptions,
        LineItem::CreditCardCommissions,
        LineItem::ShippingProfits,
        LineItem::ThreePlEasy,
        LineItem::TotalRevenue,
        LineItem::CogsBCommerce,
        LineItem::CogsCreditCard,
        LineItem::CogsShipping,
        LineItem::CogsThreePl,
        LineItem::OtherCogs,
        LineItem::TotalCogs,
        LineItem::GrossProfit,
        LineItem::Salaries,
        LineItem::PayrollTaxes,
        LineItem::Rent,
        LineItem::Utilities,
        LineItem::FacebookAds,
        LineItem::Insurance,
        LineItem::ResellerFee,
        LineItem::SoftwareSubscriptions,
        LineItem::IndeedRecruiting,
        LineItem::TotalOperatingExpenses,
        LineItem::NetOperatingIncome,
        LineItem::OtherIncome,
        LineItem::InterestExpense,
        LineItem::Taxes,
        LineItem::Depreciation,
        LineItem::TotalOther,
        LineItem::NetIncomePreDraw,
        LineItem::OwnersDraw,
        LineItem::NetIncome,
    ];

    /// Field name used in the serialized record.
    pub fn key(self) -> &'static str {
        match self {
            LineItem::BCommerceSubscriptions => "bCommerceSubscriptions",
            LineItem::CreditCardCommissions => "creditCardCommissions",
            LineItem::ShippingProfits => "shippingProfits",
            LineItem::ThreePlEasy => "threePLEasy",
            LineItem::TotalRevenue => "totalRevenue",
            LineItem::CogsBCommerce => "cogsBCommerce",
            LineItem::CogsCreditCard => "cogsCreditCard",
            LineItem::CogsShipping => "cogsShipping",
            LineItem::CogsThreePl => "cogsThreePL",
            LineItem::OtherCogs => "otherCOGS",
            LineItem::TotalCogs => "totalCOGS",
            LineItem::GrossProfit => "grossProfit",
            LineItem::Salaries => "salaries",
            LineItem::PayrollTaxes => "payrollTaxes",
            LineItem::Rent => "rent",
            LineItem::Utilities => "utilities",
            LineItem::FacebookAds => "facebookAds",
            LineItem::Insurance => "insurance",
            LineItem::ResellerFee => "resellerFee",
            LineItem::SoftwareSubscriptions => "softwareSubscriptions",
            LineItem::IndeedRecruiting => "indeedRecruiting",
            LineItem::TotalOperatingExpenses => "totalOperatingExpenses",
            LineItem::NetOperatingIncome => "netOperatingIncome",
            LineItem::OtherIncome => "otherIncome",
            LineItem::InterestExpense => "interestExpense",
            LineItem::Taxes => "taxes",
            LineItem::Depreciation => "depreciation",
            LineItem::TotalOther => "totalOther",
            LineItem::NetIncomePreDraw => "netIncomePreDraw",
            LineItem::OwnersDraw => "ownersDraw",
            LineItem::NetIncome => "netIncome",
        }
    }

    /// Column heading used by the statement tables.
    pub fn label(self) -> &'static str {
        match self {
            LineItem::BCommerceSubscriptions => "bCommerce Subscriptions",
            LineItem::CreditCardCommissions => "Credit Card Commissions",
            LineItem::ShippingProfits => "Shipping Profits",
            LineItem::ThreePlEasy => "3PL Easy",
            LineItem::TotalRevenue => "Total Revenue",
            LineItem::CogsBCommerce => "Costs of bCommerce",
            LineItem::CogsCreditCard => "Costs of Credit Card",
            LineItem::CogsShipping => "Costs of Shipping",
            LineItem::CogsThreePl => "Costs of 3PL Easy",
            LineItem::OtherCogs => "Other COGS",
            LineItem::TotalCogs => "Total COGS",
            LineItem::GrossProfit => "Gross Profit",
            LineItem::Salaries => "Salaries & Commission",
            LineItem::PayrollTaxes => "Payroll Taxes",
            LineItem::Rent => "Rent",
            LineItem::Utilities => "Utilities",
            LineItem::FacebookAds => "Facebook Ads",
            LineItem::Insurance => "Insurance",
            LineItem::ResellerFee => "Reseller Fee",
            LineItem::SoftwareSubscriptions => "Software & Subscriptions",
            LineItem::IndeedRecruiting => "Indeed Recruiting",
            LineItem::TotalOperatingExpenses => "Total Operating Expenses",
            LineItem::NetOperatingIncome => "Net Operating Income",
            LineItem::OtherIncome => "Other Income",
            LineItem::InterestExpense => "Interest Expense",
            LineItem::Taxes => "Taxes",
            LineItem::Depreciation => "Depreciation",
            LineItem::TotalOther => "Total Other",
            LineItem::NetIncomePreDraw => "Net Income (Pre-Draw)",
            LineItem::OwnersDraw => "Owner's Draw",
            LineItem::NetIncome => "Net Income (After Draw)",
        }
    }

    /// True for lines derived from other lines rather than computed directly.
    pub fn is_subtotal(self) -> bool {
        matches!(
            self,
            LineItem::TotalRevenue
                | LineItem::TotalCogs
                | LineItem::GrossProfit
                | LineItem::TotalOperatingExpenses
                | LineItem::NetOperatingIncome
                | LineItem::TotalOther
                | LineItem::NetIncomePreDraw
                | LineItem::NetIncome
        )
    }

    pub fn value(self, record: &MonthlyRecord) -> f64 {
        match self {
            LineItem::BCommerceSubscriptions => record.b_commerce_subscriptions,
            LineItem::CreditCardCommissions => record.credit_card_commissions,
            LineItem::ShippingProfits => record.shipping_profits,
            LineItem::ThreePlEasy => record.three_pl_easy,
            LineItem::TotalRevenue => record.total_revenue,
            LineItem::CogsBCommerce => record.cogs_b_commerce,
            LineItem::CogsCreditCard => record.cogs_credit_card,
            LineItem::CogsShipping => record.cogs_shipping,
            LineItem::CogsThreePl => record.cogs_three_pl,
            LineItem::OtherCogs => record.other_cogs,
            LineItem::TotalCogs => record.total_cogs,
            LineItem::GrossProfit => record.gross_profit,
            LineItem::Salaries => record.salaries,
            LineItem::PayrollTaxes => record.payroll_taxes,
            LineItem::Rent => record.rent,
            LineItem::Utilities => record.utilities,
            LineItem::FacebookAds => record.facebook_ads,
            LineItem::Insurance => record.insurance,
            LineItem::ResellerFee => record.reseller_fee,
            LineItem::SoftwareSubscriptions => record.software_subscriptions,
            LineItem::IndeedRecruiting => record.indeed_recruiting,
            LineItem::TotalOperatingExpenses => record.total_operating_expenses,
            LineItem::NetOperatingIncome => record.net_operating_income,
            LineItem::OtherIncome => record.other_income,
            LineItem::InterestExpense => record.interest_expense,
            LineItem::Taxes => record.taxes,
            LineItem::Depreciation => record.depreciation,
            LineItem::TotalOther => record.total_other,
            LineItem::NetIncomePreDraw => record.net_income_pre_draw,
            LineItem::OwnersDraw => record.owners_draw,
            LineItem::NetIncome => record.net_income,
        }
    }

    pub(crate) fn value_mut(self, record: &mut MonthlyRecord) -> &mut f64 {
        match self {
            LineItem::BCommerceSubscriptions => &mut record.b_commerce_subscriptions,
            LineItem::CreditCardCommissions => &mut record.credit_card_commissions,
            LineItem::ShippingProfits => &mut record.shipping_profits,
            LineItem::ThreePlEasy => &mut record.three_pl_easy,
            LineItem::TotalRevenue => &mut record.total_revenue,
            LineItem::CogsBCommerce => &mut record.cogs_b_commerce,
            LineItem::CogsCreditCard => &mut record.cogs_credit_card,
            LineItem::CogsShipping => &mut record.cogs_shipping,
            LineItem::CogsThreePl => &mut record.cogs_three_pl,
            LineItem::OtherCogs => &mut record.other_cogs,
            LineItem::TotalCogs => &mut record.total_cogs,
            LineItem::GrossProfit => &mut record.gross_profit,
            LineItem::Salaries => &mut record.salaries,
            LineItem::PayrollTaxes => &mut record.payroll_taxes,
            LineItem::Rent => &mut record.rent,
            LineItem::Utilities => &mut record.utilities,
            LineItem::FacebookAds => &mut record.facebook_ads,
            LineItem::Insurance => &mut record.insurance,
            LineItem::ResellerFee => &mut record.reseller_fee,
            LineItem::SoftwareSubscriptions => &mut record.software_subscriptions,
            LineItem::IndeedRecruiting => &mut record.indeed_recruiting,
            LineItem::TotalOperatingExpenses => &mut record.total_operating_expenses,
            LineItem::NetOperatingIncome => &mut record.net_operating_income,
            LineItem::OtherIncome => &mut record.other_income,
            LineItem::InterestExpense => &mut record.interest_expense,
            LineItem::Taxes => &mut record.taxes,
            LineItem::Depreciation => &mut record.depreciation,
            LineItem::TotalOther => &mut record.total_other,
            LineItem::NetIncomePreDraw => &mut record.net_income_pre_draw,
            LineItem::OwnersDraw => &mut record.owners_draw,
            LineItem::NetIncome => &mut record.net_income,
        }
    }
}

impl std::fmt::Display for LineItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<&str> = LineItem::ALL.iter().map(|item| item.key()).collect();
        assert_eq!(keys.len(), LineItem::ALL.len());
    }

    #[test]
    fn test_subtotals() {
        let subtotals: Vec<LineItem> = LineItem::ALL.into_iter().filter(|i| i.is_subtotal()).collect();
        assert_eq!(subtotals.len(), 8);
        assert!(subtotals.contains(&LineItem::GrossProfit));
        assert!(!LineItem::Salaries.is_subtotal());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(LineItem::Salaries.to_string(), "Salaries & Commission");
        assert_eq!(LineItem::ThreePlEasy.to_string(), "3PL Easy");
    }

    #[test]
    fn test_value_mut_targets_same_field_as_value() {
        let mut record = MonthlyRecord::zeroed("Jan");
        for (i, item) in LineItem::ALL.iter().enumerate() {
            *item.value_mut(&mut record) = i as f64 + 1.0;
        }
        for (i, item) in LineItem::ALL.iter().enumerate() {
            assert_eq!(item.value(&record), i as f64 + 1.0, "{:?}", item);
        }
    }

    #[test]
    fn test_keys_match_serialized_record() {
        let json = serde_json::to_value(MonthlyRecord::zeroed("Jan")).unwrap();
        for item in LineItem::ALL {
            assert!(json.get(item.key()).is_some(), "missing {}", item.key());
        }
    }
}
