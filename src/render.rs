//! Terminal rendering of dashboard reports.

use analytics::{CancellationBreakdown, CancellationShare, DashboardReport, Stats};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Table};
use core_types::CategoryFilter;
use record_store::FilterOptions;
use rust_decimal::Decimal;

/// Formats a currency amount with two decimals.
fn money(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

fn percent(value: Decimal) -> String {
    format!("{:.2}%", value.round_dp(2))
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

fn right(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

fn section(title: &str, table: Table) {
    println!("\n{title}\n{table}");
}

fn describe_filter(report: &DashboardReport) -> String {
    let bound = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_else(|| "*".to_string());
    let category = match &report.filter.category {
        CategoryFilter::All => "all categories".to_string(),
        CategoryFilter::Only(c) => c.clone(),
    };
    format!(
        "{} .. {} | {}",
        bound(report.filter.start_date),
        bound(report.filter.end_date),
        category
    )
}

pub fn print_report(report: &DashboardReport) {
    println!("Sales dashboard: {}", describe_filter(report));

    let k = &report.kpis;
    let mut kpis = new_table(vec!["Total Orders", "Total Revenue", "Cancellation Rate", "Avg. Order Value"]);
    kpis.add_row(vec![
        right(k.total_orders.to_string()),
        right(money(k.total_revenue)),
        right(percent(k.cancellation_rate)),
        right(money(k.avg_order_value)),
    ]);
    section("Key metrics", kpis);

    let mut daily = new_table(vec!["Date", "Orders", "Revenue", "7-point Avg"]);
    for point in &report.daily_series {
        daily.add_row(vec![
            Cell::new(point.date),
            right(point.order_count.to_string()),
            right(money(point.revenue)),
            right(money(point.rolling_avg_revenue)),
        ]);
    }
    section("Daily sales", daily);

    for (title, groups) in [
        ("Top categories by revenue", &report.top_categories),
        ("Top states by revenue", &report.top_states),
    ] {
        let mut table = new_table(vec!["Key", "Revenue", "Orders"]);
        for g in groups {
            table.add_row(vec![Cell::new(&g.key), right(money(g.revenue)), right(g.order_count.to_string())]);
        }
        section(title, table);
    }

    let mut fulfillment = new_table(vec!["Fulfillment", "Revenue", "Orders", "Share"]);
    for f in &report.fulfillment {
        fulfillment.add_row(vec![
            Cell::new(&f.key),
            right(money(f.revenue)),
            right(f.order_count.to_string()),
            right(percent(f.revenue_share_pct)),
        ]);
    }
    section("Sales by fulfillment type", fulfillment);

    print_cancellations("Cancellations by category", &report.category_cancellations);
    print_cancellations("Cancellations by state (volume)", &report.state_cancellations);
    print_cancellation_share(&report.state_cancellation_share);

    let pivot = &report.state_category_pivot;
    let mut header = vec!["State"];
    header.extend(pivot.categories.iter().map(String::as_str));
    let mut heatmap = new_table(header);
    for (state, row) in pivot.states.iter().zip(&pivot.counts) {
        let mut cells = vec![Cell::new(state)];
        cells.extend(row.iter().map(|count| right(count.to_string())));
        heatmap.add_row(cells);
    }
    section("Orders by state and category", heatmap);

    let mut segments = new_table(vec!["Segment", "Revenue", "Orders", "Avg. Order Value"]);
    for (label, stats) in [
        ("With promotion", &report.promotion_impact.with_promo),
        ("No promotion", &report.promotion_impact.without_promo),
        ("B2B", &report.business_segments.b2b),
        ("B2C", &report.business_segments.b2c),
    ] {
        segments.add_row(stats_row(label, stats));
    }
    section("Promotion and business segments", segments);

    let mut monthly = new_table(vec!["Month", "Category", "Orders"]);
    for m in &report.monthly_top_categories {
        monthly.add_row(vec![
            Cell::new(format!("{}-{:02}", m.year, m.month)),
            Cell::new(&m.category),
            right(m.order_count.to_string()),
        ]);
    }
    section("Monthly orders of the leading categories", monthly);
}

fn stats_row(label: &str, stats: &Stats) -> Vec<Cell> {
    vec![
        Cell::new(label),
        right(money(stats.total_revenue)),
        right(stats.order_count.to_string()),
        right(money(stats.avg_order_value)),
    ]
}

fn print_cancellations(title: &str, breakdown: &CancellationBreakdown) {
    if !breakdown.has_cancellations() {
        println!("\n{title}\nNo cancellation data available");
        return;
    }
    let mut table = new_table(vec!["Key", "Cancelled", "Not Cancelled", "Total", "Rate"]);
    for g in breakdown.groups() {
        table.add_row(vec![
            Cell::new(&g.key),
            right(g.cancelled_count.to_string()),
            right(g.not_cancelled_count().to_string()),
            right(g.total_count.to_string()),
            right(percent(g.cancellation_rate)),
        ]);
    }
    section(title, table);
}

fn print_cancellation_share(share: &CancellationShare) {
    let title = "Share of cancellations by state";
    if matches!(share, CancellationShare::NoCancellations) {
        println!("\n{title}\nNo cancellation data available");
        return;
    }
    let mut table = new_table(vec!["State", "Cancelled", "Share"]);
    for g in share.groups() {
        table.add_row(vec![
            Cell::new(&g.key),
            right(g.cancelled_count.to_string()),
            right(percent(g.share_pct)),
        ]);
    }
    section(title, table);
}

pub fn print_filter_options(options: &FilterOptions) {
    let range = match (options.min_date, options.max_date) {
        (Some(min), Some(max)) => format!("{min} .. {max}"),
        _ => "no orders loaded".to_string(),
    };
    println!("Date range: {range}");

    let mut table = new_table(vec!["Category"]);
    for category in &options.categories {
        table.add_row(vec![category]);
    }
    println!("{table}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn amounts_render_with_two_decimals() {
        assert_eq!(money(dec!(1234.5)), "1234.50");
        assert_eq!(money(dec!(0.005)), "0.00");
        assert_eq!(percent(dec!(33.33333)), "33.33%");
    }
}
