use proforma_projection::*;

fn main() {
    println!("📊 12-Month Pro Forma Demo\n");

    let raw = RawAssumptions {
        average_order_value: "85".to_string(),
        ecommerce_subscription_revenue: "12".to_string(),
        wholesale_subscription_revenue: "3".to_string(),
        end_user_monthly_sales_orders: "450".to_string(),
        annual_churn_rate: "8.5".to_string(),
    };

    let assumptions = raw.coerce();
    println!("📋 Assumptions:");
    println!("  Average order value:       ${:>10.2}", assumptions.average_order_value);
    println!("  eCommerce subscriptions:   {:>11.2}", assumptions.ecommerce_subscription_revenue);
    println!("  Wholesale subscriptions:   {:>11.2}", assumptions.wholesale_subscription_revenue);
    println!("  End-user orders per month: {:>11.0}", assumptions.end_user_monthly_sales_orders);
    println!("  Commission per shipment:   ${:>10.2}", assumptions.commission_per_shipment());
    println!("  Credit card rate:          {:>11.4}", assumptions.credit_card_commission_rate());
    println!();

    match compute_with_verification(&assumptions, 1e-6) {
        Ok(projection) => {
            println!("{}", StatementTable::build(StatementSection::Summary, &projection).to_markdown());
            println!("{}", StatementTable::build(StatementSection::Revenue, &projection).to_markdown());

            let totals = projection.totals();
            println!("✅ Annual net income: ${:.2}", totals.net_income);
        }
        Err(e) => {
            eprintln!("❌ Error: {}", e);
        }
    }

    match Assumptions::schema_as_json() {
        Ok(schema) => println!("\n🧾 Assumptions schema:\n{}", schema),
        Err(e) => eprintln!("❌ Error: {}", e),
    }
}
