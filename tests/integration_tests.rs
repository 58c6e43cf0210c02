use chrono::{Datelike, NaiveDate};
use proforma_projection::*;

const EPS: f64 = 1e-9;

fn sample_assumptions() -> Vec<Assumptions> {
    vec![
        Assumptions::default(),
        Assumptions::new(100.0, 10.0, 0.0, 5.0),
        Assumptions::new(0.0, 0.0, 3.0, 0.0),
        Assumptions::new(42.17, 7.5, 1.25, 310.0),
        Assumptions::new(1_250.0, 120.0, 45.0, 9_800.0).with_annual_churn_rate(18.0),
        Assumptions::new(0.01, 0.01, 0.01, 1.0),
        Assumptions::new(1e6, 1e3, 1e3, 1e4),
    ]
}

fn tolerance_for(projection: &Projection) -> f64 {
    let scale = projection
        .iter()
        .map(|r| r.total_revenue.abs())
        .fold(1.0, f64::max);
    scale * 1e-12
}

#[test]
fn test_projection_is_deterministic() {
    for assumptions in sample_assumptions() {
        let first = compute_projection(&assumptions);
        let second = compute_projection(&assumptions);
        assert_eq!(first, second);
    }
}

#[test]
fn test_twelve_periods_labelled_jan_to_dec() {
    let expected = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    for assumptions in sample_assumptions() {
        let projection = compute_projection(&assumptions);
        assert_eq!(projection.len(), 12);
        let labels: Vec<&str> = projection.iter().map(|r| r.month.as_str()).collect();
        assert_eq!(labels, expected);
    }
}

#[test]
fn test_statement_invariants_hold_for_all_samples() {
    for assumptions in sample_assumptions() {
        let projection = compute_projection(&assumptions);
        let tolerance = tolerance_for(&projection);

        let verification = verify_projection(&projection, tolerance);
        if let Err(e) = &verification {
            println!("Verification error for {:?}: {}", assumptions, e);
        }
        assert!(verification.is_ok());

        for record in &projection {
            assert!(
                (record.total_revenue
                    - (record.b_commerce_subscriptions
                        + record.credit_card_commissions
                        + record.shipping_profits
                        + record.three_pl_easy))
                    .abs()
                    <= tolerance
            );
            assert!((record.gross_profit - (record.total_revenue - record.total_cogs)).abs() <= tolerance);
            assert!(
                (record.net_income - (record.net_income_pre_draw - record.owners_draw)).abs()
                    <= tolerance
            );
        }
    }
}

#[test]
fn test_recurrence_example() {
    let projection = compute_projection(&Assumptions::new(100.0, 10.0, 0.0, 5.0));
    let cc = projection.series(LineItem::CreditCardCommissions);
    let sp = projection.series(LineItem::ShippingProfits);

    assert!((cc[0] - 35.5).abs() < EPS);
    assert!((cc[1] - 71.0).abs() < EPS);
    assert!((cc[2] - 2411.0).abs() < EPS);
    assert!((cc[3] - 4751.0).abs() < EPS);

    assert!((sp[0] - 600.0).abs() < EPS);
    assert!((sp[1] - 1200.0).abs() < EPS);
    assert!((sp[2] - 5100.0).abs() < EPS);
}

#[test]
fn test_recurrence_steps_are_fixed_after_second_period() {
    for assumptions in sample_assumptions() {
        let projection = compute_projection(&assumptions);
        let cc = projection.series(LineItem::CreditCardCommissions);
        let sp = projection.series(LineItem::ShippingProfits);

        assert_eq!(cc[1], cc[0] * 2.0);
        assert_eq!(sp[1], sp[0] * 2.0);
        for i in 2..12 {
            assert_eq!(cc[i], cc[i - 1] + 2340.0, "credit card period {}", i);
            assert_eq!(sp[i], sp[i - 1] + 3900.0, "shipping period {}", i);
        }
    }
}

#[test]
fn test_constant_lines() {
    let projection = compute_projection(&Assumptions::new(80.0, 6.0, 2.0, 40.0));
    let base = ProjectionEngine::new(Assumptions::new(80.0, 6.0, 2.0, 40.0)).base_quantities();

    for (index, record) in projection.iter().enumerate() {
        assert_eq!(record.b_commerce_subscriptions, base.b_commerce);
        assert_eq!(record.three_pl_easy, 0.0);
        assert_eq!(record.other_cogs, 0.0);
        assert_eq!(record.facebook_ads, 1300.0);
        assert_eq!(record.software_subscriptions, 700.0);
        assert_eq!(record.indeed_recruiting, 500.0);
        assert_eq!(record.total_other, 0.0);
        assert_eq!(record.owners_draw, 0.0);
        assert_eq!(record.reseller_fee, if index == 0 { 10000.0 } else { 0.0 });
        assert_eq!(record.cogs_credit_card, record.credit_card_commissions / 2.0);
        assert_eq!(record.cogs_shipping, record.shipping_profits / 2.0);
        assert_eq!(record.salaries, record.total_revenue * 0.3);
    }
}

#[test]
fn test_zero_input_boundary() {
    let projection = compute_projection(&Assumptions::default());
    let jan = projection.get(0).unwrap();

    assert_eq!(jan.total_operating_expenses, 12500.0);
    assert_eq!(jan.net_operating_income, -12500.0);
    assert_eq!(jan.net_income, -12500.0);

    for (index, record) in projection.iter().enumerate() {
        assert_eq!(record.b_commerce_subscriptions, 0.0);
        assert_eq!(record.cogs_b_commerce, 0.0);
        if index >= 2 {
            // The ramps keep stepping even from a zero base.
            assert_eq!(record.credit_card_commissions, 2340.0 * (index as f64 - 1.0));
            assert_eq!(record.shipping_profits, 3900.0 * (index as f64 - 1.0));
        } else {
            assert_eq!(record.total_revenue, 0.0);
            assert_eq!(record.total_cogs, 0.0);
            assert_eq!(record.salaries, 0.0);
            assert_eq!(record.gross_profit, 0.0);
        }
    }

    let feb = projection.get(1).unwrap();
    assert_eq!(feb.total_operating_expenses, 2500.0);
    assert_eq!(feb.net_income, -2500.0);
}

#[test]
fn test_summary_total_row_equals_column_sum() {
    for assumptions in sample_assumptions() {
        let projection = compute_projection(&assumptions);
        let table = StatementTable::build(StatementSection::Summary, &projection);
        let total = table.total.as_ref().unwrap();
        let sums = table.column_totals();

        for (col, item) in table.columns.iter().enumerate() {
            let expected: f64 = projection.iter().map(|r| r.value(*item)).sum();
            assert!((total.values[col] - expected).abs() <= EPS * expected.abs().max(1.0));
            assert!((sums[col] - expected).abs() <= EPS * expected.abs().max(1.0));
        }
    }
}

#[test]
fn test_negative_and_garbage_input_is_coerced() {
    let raw = RawAssumptions {
        average_order_value: "-100".to_string(),
        ecommerce_subscription_revenue: "ten".to_string(),
        wholesale_subscription_revenue: "".to_string(),
        end_user_monthly_sales_orders: "NaN".to_string(),
        annual_churn_rate: "5%".to_string(),
    };

    let assumptions = raw.coerce();
    assert_eq!(assumptions.average_order_value, 0.0);
    assert_eq!(assumptions.ecommerce_subscription_revenue, 0.0);
    assert_eq!(assumptions.end_user_monthly_sales_orders, 0.0);
    assert_eq!(assumptions.annual_churn_rate, 5.0);

    let projection = ProjectionProcessor::process_raw(&raw);
    assert_eq!(projection, compute_projection(&Assumptions::default()));
}

#[test]
fn test_csv_export_parses() -> anyhow::Result<()> {
    let projection = compute_projection(&Assumptions::new(100.0, 10.0, 0.0, 5.0));
    let csv_text = StatementTable::build(StatementSection::Summary, &projection).to_csv();

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = reader.headers()?.clone();
    assert_eq!(headers.len(), 8);
    assert_eq!(&headers[0], "Month");
    assert_eq!(&headers[7], "Net Income");

    let rows: Vec<csv::StringRecord> = reader
        .records()
        .collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), 13);
    assert_eq!(&rows[0][0], "Jan");
    assert_eq!(&rows[12][0], "Total");

    let jan_revenue: f64 = rows[0][1].parse()?;
    assert!((jan_revenue - 5615.5).abs() < 0.005);

    let total_revenue: f64 = rows[12][1].parse()?;
    assert!((total_revenue - projection.total_for(LineItem::TotalRevenue)).abs() < 0.005);

    Ok(())
}

#[test]
fn test_every_tab_renders() {
    let projection = compute_projection(&Assumptions::new(55.0, 3.0, 1.0, 80.0));

    for section in StatementSection::tabs() {
        let table = StatementTable::build(section, &projection);
        let markdown = table.to_markdown();
        assert!(markdown.contains(section.title()));
        assert_eq!(markdown.lines().filter(|l| l.starts_with("| ")).count(), 14);

        let csv_text = table.to_csv();
        assert_eq!(csv_text.lines().count(), 13);
    }
}

#[test]
fn test_dated_projection_uses_month_ends() {
    let projection = compute_projection(&Assumptions::new(100.0, 10.0, 0.0, 5.0));
    let dated = projection.dated(2023).unwrap();

    let dates: Vec<NaiveDate> = dated.keys().copied().collect();
    assert_eq!(dates.first(), NaiveDate::from_ymd_opt(2023, 1, 31).as_ref());
    assert_eq!(dates.last(), NaiveDate::from_ymd_opt(2023, 12, 31).as_ref());

    for (date, record) in &dated {
        assert_eq!(period_label(date.month0() as usize).unwrap(), record.month);
    }
}

#[test]
fn test_assumptions_file_round_trip() -> anyhow::Result<()> {
    let assumptions = Assumptions::new(100.0, 10.0, 2.0, 5.0).with_annual_churn_rate(7.0);

    let path = std::env::temp_dir().join("proforma_projection_assumptions_test.json");
    std::fs::write(&path, assumptions.to_json()?)?;
    let loaded = Assumptions::from_json_file(&path)?;
    std::fs::remove_file(&path)?;

    assert_eq!(loaded, assumptions);
    assert_eq!(compute_projection(&loaded), compute_projection(&assumptions));
    Ok(())
}

#[test]
fn test_missing_assumptions_file_is_io_error() {
    let result = Assumptions::from_json_file("/nonexistent/proforma/assumptions.json");
    assert!(matches!(result, Err(ProformaError::IoError(_))));
}

#[test]
fn test_schema_generation() {
    let schema_json = Assumptions::schema_as_json().unwrap();
    println!("Generated schema:\n{}", schema_json);

    assert!(schema_json.contains("average_order_value"));
    assert!(schema_json.contains("ecommerce_subscription_revenue"));
    assert!(schema_json.contains("wholesale_subscription_revenue"));
}
