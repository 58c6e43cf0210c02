use crate::line_items::LineItem;
use crate::statement::StatementSection;
use crate::Projection;
use serde::{Deserialize, Serialize};

/// Lines plotted on the monthly overview chart.
pub const CHART_LINES: [LineItem; 7] = [
    LineItem::TotalRevenue,
    LineItem::TotalCogs,
    LineItem::GrossProfit,
    LineItem::TotalOperatingExpenses,
    LineItem::NetOperatingIncome,
    LineItem::NetIncomePreDraw,
    LineItem::NetIncome,
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub key: String,
    pub label: String,
    /// (month label, value) in period order
    pub points: Vec<(String, f64)>,
}

pub fn chart_series(projection: &Projection) -> Vec<ChartSeries> {
    CHART_LINES
        .iter()
        .map(|item| ChartSeries {
            key: item.key().to_string(),
            label: StatementSection::Summary.column_label(*item).to_string(),
            points: projection
                .iter()
                .map(|record| (record.month.clone(), item.value(record)))
                .collect(),
        })
        .collect()
}
