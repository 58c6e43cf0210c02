use crate::line_items::LineItem;
use crate::Projection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementSection {
    Summary,
    Revenue,
    Cogs,
    OperatingExpenses,
    IncomeStatement,
}

impl StatementSection {
    /// The four tabbed breakdowns, in the order they are offered.
    pub fn tabs() -> [StatementSection; 4] {
        [
            StatementSection::Revenue,
            StatementSection::Cogs,
            StatementSection::OperatingExpenses,
            StatementSection::IncomeStatement,
        ]
    }

    pub fn title(self) -> &'static str {
        match self {
            StatementSection::Summary => "Key Financial Metrics Summary",
            StatementSection::Revenue => "Revenue",
            StatementSection::Cogs => "COGS",
            StatementSection::OperatingExpenses => "Operating Expenses",
            StatementSection::IncomeStatement => "Income Statement",
        }
    }

    pub fn columns(self) -> &'static [LineItem] {
        match self {
            StatementSection::Summary => &[
                LineItem::TotalRevenue,
                LineItem::TotalCogs,
                LineItem::GrossProfit,
                LineItem::TotalOperatingExpenses,
                LineItem::NetOperatingIncome,
                LineItem::NetIncomePreDraw,
                LineItem::NetIncome,
            ],
            StatementSection::Revenue => &[
                LineItem::BCommerceSubscriptions,
                LineItem::CreditCardCommissions,
                LineItem::ShippingProfits,
                LineItem::ThreePlEasy,
                LineItem::TotalRevenue,
            ],
            StatementSection::Cogs => &[
                LineItem::CogsBCommerce,
                LineItem::CogsCreditCard,
                LineItem::CogsShipping,
                LineItem::CogsThreePl,
                LineItem::OtherCogs,
                LineItem::TotalCogs,
            ],
            StatementSection::OperatingExpenses => &[
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
            ],
            StatementSection::IncomeStatement => &[
                LineItem::TotalRevenue,
                LineItem::TotalCogs,
                LineItem::GrossProfit,
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
            ],
        }
    }

    /// Heading for a column; the summary shortens the final net income line.
    pub fn column_label(self, item: LineItem) -> &'static str {
        match (self, item) {
            (StatementSection::Summary, LineItem::NetIncome) => "Net Income",
            _ => item.label(),
        }
    }

    /// Only the summary carries a trailing aggregate row.
    pub fn has_total_row(self) -> bool {
        matches!(self, StatementSection::Summary)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub label: String,
    pub values: Vec<f64>,
}

/// A projection laid out as one row per period for a single statement section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementTable {
    pub section: StatementSection,
    pub columns: Vec<LineItem>,
    pub rows: Vec<TableRow>,
    pub total: Option<TableRow>,
}

impl StatementTable {
    pub fn build(section: StatementSection, projection: &Projection) -> Self {
        let columns = section.columns().to_vec();

        let rows: Vec<TableRow> = projection
            .iter()
            .map(|record| TableRow {
                label: record.month.clone(),
                values: columns.iter().map(|item| item.value(record)).collect(),
            })
            .collect();

        let total = section.has_total_row().then(|| TableRow {
            label: "Total".to_string(),
            values: columns
                .iter()
                .map(|item| projection.total_for(*item))
                .collect(),
        });

        Self {
            section,
            columns,
            rows,
            total,
        }
    }

    pub fn headers(&self) -> Vec<&'static str> {
        std::iter::once("Month")
            .chain(self.columns.iter().map(|item| self.section.column_label(*item)))
            .collect()
    }

    /// Column sums across the period rows, whether or not a total row is shown.
    pub fn column_totals(&self) -> Vec<f64> {
        (0..self.columns.len())
            .map(|col| self.rows.iter().map(|row| row.values[col]).sum())
            .collect()
    }

    fn all_rows(&self) -> impl Iterator<Item = &TableRow> {
        self.rows.iter().chain(self.total.iter())
    }

    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        output.push_str(
            &self
                .headers()
                .iter()
                .map(|h| csv_field(h))
                .collect::<Vec<_>>()
                .join(","),
        );
        output.push('\n');

        for row in self.all_rows() {
            output.push_str(&row.label);
            for value in &row.values {
                output.push_str(&format!(",{:.2}", value));
            }
            output.push('\n');
        }

        output
    }

    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("## {}\n\n", self.section.title()));

        let headers = self.headers();
        output.push_str(&format!("| {} |\n", headers.join(" | ")));
        output.push_str(&format!(
            "|{}\n",
            std::iter::once(" --- |")
                .chain(std::iter::repeat(" ---: |").take(self.columns.len()))
                .collect::<String>()
        ));

        for row in &self.rows {
            output.push_str(&markdown_row(&row.label, &row.values, false));
        }

        if let Some(total) = &self.total {
            output.push_str(&markdown_row(&total.label, &total.values, true));
        }

        output
    }
}

fn markdown_row(label: &str, values: &[f64], bold: bool) -> String {
    let cells: Vec<String> = values
        .iter()
        .map(|v| {
            if bold {
                format!("**{:.2}**", v)
            } else {
                format!("{:.2}", v)
            }
        })
        .collect();

    if bold {
        format!("| **{}** | {} |\n", label, cells.join(" | "))
    } else {
        format!("| {} | {} |\n", label, cells.join(" | "))
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compute_projection, Assumptions};

    #[test]
    fn test_summary_has_total_row() {
        let projection = compute_projection(&Assumptions::new(100.0, 10.0, 0.0, 5.0));
        let table = StatementTable::build(StatementSection::Summary, &projection);

        assert_eq!(table.rows.len(), 12);
        assert_eq!(table.columns.len(), 7);
        let total = table.total.as_ref().unwrap();
        assert_eq!(total.label, "Total");

        for (col, item) in table.columns.iter().enumerate() {
            assert!((total.values[col] - projection.total_for(*item)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_tabs_have_no_total_row() {
        let projection = compute_projection(&Assumptions::default());
        for section in StatementSection::tabs() {
            let table = StatementTable::build(section, &projection);
            assert!(table.total.is_none(), "{:?}", section);
            assert_eq!(table.rows.len(), 12);
        }
    }

    #[test]
    fn test_headers() {
        let projection = compute_projection(&Assumptions::default());
        let table = StatementTable::build(StatementSection::Revenue, &projection);
        assert_eq!(
            table.headers(),
            vec![
                "Month",
                "bCommerce Subscriptions",
                "Credit Card Commissions",
                "Shipping Profits",
                "3PL Easy",
                "Total Revenue"
            ]
        );
    }

    #[test]
    fn test_to_csv() {
        let projection = compute_projection(&Assumptions::default());
        let csv = StatementTable::build(StatementSection::OperatingExpenses, &projection).to_csv();

        assert!(csv.starts_with("Month,Salaries & Commission,Payroll Taxes"));
        assert!(csv.contains("\nJan,0.00,0.00,0.00,0.00,1300.00,0.00,10000.00,700.00,500.00,12500.00\n"));
        assert!(csv.contains("\nFeb,0.00,0.00,0.00,0.00,1300.00,0.00,0.00,700.00,500.00,2500.00\n"));
    }

    #[test]
    fn test_to_markdown() {
        let projection = compute_projection(&Assumptions::default());
        let markdown = StatementTable::build(StatementSection::Summary, &projection).to_markdown();

        assert!(markdown.contains("## Key Financial Metrics Summary"));
        assert!(markdown.contains("| Month | Total Revenue |"));
        assert!(markdown.contains("| **Total** |"));
        assert!(markdown.contains("| Net Income |"));
    }

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("Owner's Draw"), "Owner's Draw");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
