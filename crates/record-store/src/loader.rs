use crate::error::StoreError;
use core_types::{parse_order_date, OrderRecord};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// Stands in for a blank categorical cell, so that grouping never silently
/// drops an order from the counts.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Cell values that mean "no value" in exported reports, matched exactly.
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// One raw row of the order report. Every column is optional at this level;
/// `into_record` decides which absences are fatal.
#[derive(Debug, Deserialize)]
struct CsvOrderRow {
    #[serde(rename = "Order_ID")]
    order_id: Option<String>,
    #[serde(rename = "Order_Date")]
    order_date: Option<String>,
    #[serde(rename = "Order_Status")]
    order_status: Option<String>,
    #[serde(rename = "Fulfillment_Type")]
    fulfillment_type: Option<String>,
    #[serde(rename = "Product_Category")]
    product_category: Option<String>,
    #[serde(rename = "Sale_Amount")]
    sale_amount: Option<String>,
    #[serde(rename = "Shipping_State")]
    shipping_state: Option<String>,
    #[serde(rename = "Business_to_Business")]
    business_to_business: Option<String>,
    #[serde(rename = "Promotion_IDs")]
    promotion_ids: Option<String>,
}

impl CsvOrderRow {
    fn into_record(self, line: u64) -> Result<OrderRecord, StoreError> {
        let order_id = non_blank(self.order_id).ok_or(StoreError::MissingField {
            line,
            field: "Order_ID",
        })?;

        let raw_date = non_blank(self.order_date).ok_or(StoreError::MissingField {
            line,
            field: "Order_Date",
        })?;
        let order_date = parse_order_date(&raw_date).map_err(|_| StoreError::InvalidField {
            line,
            field: "Order_Date",
            value: raw_date.clone(),
        })?;

        Ok(OrderRecord {
            order_id,
            order_date,
            order_status: label(self.order_status),
            sale_amount: parse_amount(self.sale_amount, line)?,
            product_category: label(self.product_category),
            fulfillment_type: label(self.fulfillment_type),
            shipping_state: label(self.shipping_state),
            business_to_business: parse_flag(self.business_to_business, line)?,
            promotion_ids: non_blank(self.promotion_ids),
        })
    }
}

/// Loads every order from a CSV export on disk.
pub fn load_orders(path: impl AsRef<Path>) -> Result<Vec<OrderRecord>, StoreError> {
    let path = path.as_ref();
    tracing::info!(path = %path.display(), "Loading order table.");
    let file = fs::File::open(path)?;
    let orders = load_orders_from_reader(file)?;
    tracing::info!(orders = orders.len(), "Order table loaded.");
    Ok(orders)
}

/// Loads every order from any CSV source with a header row.
///
/// Columns are matched by name; unknown columns are ignored and a leading
/// UTF-8 byte order mark is stripped.
pub fn load_orders_from_reader<R: Read>(mut source: R) -> Result<Vec<OrderRecord>, StoreError> {
    let mut text = String::new();
    source.read_to_string(&mut text)?;
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut orders = Vec::new();
    let mut seen_ids = HashSet::new();

    for result in reader.records() {
        let row = result?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let parsed: CsvOrderRow = row.deserialize(Some(&headers))?;
        let order = parsed.into_record(line)?;
        if !seen_ids.insert(order.order_id.clone()) {
            return Err(StoreError::DuplicateOrderId {
                line,
                order_id: order.order_id,
            });
        }
        orders.push(order);
    }

    Ok(orders)
}

/// Drops blank cells and the usual missing-value markers.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| {
        let v = v.trim();
        !v.is_empty() && !MISSING_MARKERS.contains(&v)
    })
}

fn label(value: Option<String>) -> String {
    non_blank(value).unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// Blank and NaN amounts are absent; anything else must be a non-negative number.
fn parse_amount(value: Option<String>, line: u64) -> Result<Option<Decimal>, StoreError> {
    let Some(raw) = non_blank(value) else {
        return Ok(None);
    };
    if raw.eq_ignore_ascii_case("nan") {
        return Ok(None);
    }

    let invalid = || StoreError::InvalidField {
        line,
        field: "Sale_Amount",
        value: raw.clone(),
    };
    let amount = Decimal::from_str(&raw)
        .or_else(|_| Decimal::from_scientific(&raw))
        .map_err(|_| invalid())?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(invalid());
    }
    Ok(Some(amount))
}

fn parse_flag(value: Option<String>, line: u64) -> Result<bool, StoreError> {
    let Some(raw) = non_blank(value) else {
        return Ok(false);
    };
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => Err(StoreError::InvalidField {
            line,
            field: "Business_to_Business",
            value: raw,
        }),
    }
}
