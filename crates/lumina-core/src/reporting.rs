//! # Reporting Aggregator
//!
//! Pure, read-only derivation of metrics from snapshots of the products,
//! sales and expenses collections. Every function here is deterministic
//! given its inputs and performs no I/O.
//!
//! ## Windows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  "today"       sales whose UTC calendar date equals the given date  │
//! │  "this month"  sales whose UTC year-month equals the given pair     │
//! │  daily series  per-day buckets, ascending, most recent 30 kept      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Windowing is explicit calendar-date extraction in UTC. Stores that
//! care about local-midnight boundaries must normalize timestamps to a
//! consistent zone before persisting; the grouping itself does not guess.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CartItem, Expense, Product, Sale};

// =============================================================================
// Per-Sale Metrics
// =============================================================================

/// Profit of a single sale: `final_total − Σ cost_or_zero × quantity`.
///
/// Items without a recorded cost contribute zero cost, so profit
/// over-reports for them. Known and documented; fixing it is a cost
/// backfill decision, not an aggregator change.
pub fn sale_profit(sale: &Sale) -> Money {
    let total_cost: Money = sale.items.iter().map(CartItem::line_cost).sum();
    sale.final_total - total_cost
}

/// Summed `final_total` over a window of sales.
pub fn revenue<'a>(sales: impl IntoIterator<Item = &'a Sale>) -> Money {
    sales.into_iter().map(|s| s.final_total).sum()
}

/// Summed [`sale_profit`] over a window of sales.
pub fn profit<'a>(sales: impl IntoIterator<Item = &'a Sale>) -> Money {
    sales.into_iter().map(sale_profit).sum()
}

// =============================================================================
// Time Windows
// =============================================================================

/// Sales whose UTC calendar date equals `date`.
pub fn sales_on(sales: &[Sale], date: NaiveDate) -> Vec<&Sale> {
    sales.iter().filter(|s| s.date.date_naive() == date).collect()
}

/// Sales within the given UTC year-month.
pub fn sales_in_month(sales: &[Sale], year: i32, month: u32) -> Vec<&Sale> {
    sales
        .iter()
        .filter(|s| {
            let d = s.date.date_naive();
            d.year() == year && d.month() == month
        })
        .collect()
}

// =============================================================================
// Top Product
// =============================================================================

/// The best-selling product of a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_id: String,
    pub name: String,
    pub quantity: i64,
}

/// Product with the maximum summed quantity across the window's line items.
///
/// Tie-break is the first-encountered product id in line-item order. That
/// ordering is implementation-defined, not mathematically meaningful; an
/// empty window yields `None`, never an error.
pub fn top_product<'a>(sales: impl IntoIterator<Item = &'a Sale>) -> Option<TopProduct> {
    let mut order: Vec<&'a CartItem> = Vec::new();
    let mut totals: HashMap<&str, i64> = HashMap::new();

    for sale in sales {
        for item in &sale.items {
            if !totals.contains_key(item.product_id.as_str()) {
                order.push(item);
            }
            *totals.entry(item.product_id.as_str()).or_insert(0) += item.quantity;
        }
    }

    let mut best: Option<TopProduct> = None;
    for item in order {
        let quantity = totals[item.product_id.as_str()];
        // Strict > keeps the first-encountered id on ties
        if best.as_ref().map_or(true, |b| quantity > b.quantity) {
            best = Some(TopProduct {
                product_id: item.product_id.clone(),
                name: item.name.clone(),
                quantity,
            });
        }
    }
    best
}

// =============================================================================
// Daily Series
// =============================================================================

/// One day's bucket in the revenue/profit/expense chart data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub revenue: Money,
    pub profit: Money,
    pub expenses: Money,
}

/// How many trailing days the chart series keeps.
pub const SERIES_WINDOW_DAYS: usize = 30;

/// Groups sales and expenses by calendar date.
///
/// Revenue and profit accumulate from sales, expenses accumulate
/// separately. Result is ascending by date and truncated to the most
/// recent [`SERIES_WINDOW_DAYS`] buckets.
pub fn daily_series(sales: &[Sale], expenses: &[Expense]) -> Vec<DailyPoint> {
    let mut days: BTreeMap<NaiveDate, DailyPoint> = BTreeMap::new();

    for sale in sales {
        let date = sale.date.date_naive();
        let point = days.entry(date).or_insert_with(|| empty_point(date));
        point.revenue += sale.final_total;
        point.profit += sale_profit(sale);
    }

    for expense in expenses {
        let point = days
            .entry(expense.date)
            .or_insert_with(|| empty_point(expense.date));
        point.expenses += expense.amount;
    }

    let points: Vec<DailyPoint> = days.into_values().collect();
    let skip = points.len().saturating_sub(SERIES_WINDOW_DAYS);
    points.into_iter().skip(skip).collect()
}

fn empty_point(date: NaiveDate) -> DailyPoint {
    DailyPoint {
        date,
        revenue: Money::zero(),
        profit: Money::zero(),
        expenses: Money::zero(),
    }
}

// =============================================================================
// Expense Breakdown
// =============================================================================

/// Normalizes a free-text category into a bucket key.
///
/// Lowercased, trimmed, internal whitespace collapsed to single spaces.
/// "Rent" and "rent " land in the same bucket; manual entry noise is
/// tolerated by design. Empty input falls back to `"other"`.
pub fn normalize_category(category: &str) -> String {
    let key = category
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    if key.is_empty() {
        "other".to_string()
    } else {
        key
    }
}

/// Summed expense amounts per normalized category, sorted by key.
pub fn expense_totals_by_category(expenses: &[Expense]) -> Vec<(String, Money)> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        *totals
            .entry(normalize_category(&expense.category))
            .or_insert_with(Money::zero) += expense.amount;
    }
    totals.into_iter().collect()
}

// =============================================================================
// Inventory Valuation
// =============================================================================

/// Snapshot valuation of the product catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockValuation {
    /// `Σ cost_or_zero × stock`, what the shelf inventory cost.
    pub cost_value: Money,
    /// `Σ price × stock`, what it would sell for.
    pub retail_value: Money,
    /// Products with `stock <= threshold` (zero and negative included).
    pub low_stock_count: usize,
}

/// Values the catalog at cost and at retail, and counts low-stock lines.
pub fn inventory_valuation(products: &[Product], low_stock_threshold: i64) -> StockValuation {
    let mut valuation = StockValuation {
        cost_value: Money::zero(),
        retail_value: Money::zero(),
        low_stock_count: 0,
    };

    for product in products {
        valuation.cost_value += product.cost_or_zero().multiply_quantity(product.stock);
        valuation.retail_value += product.price.multiply_quantity(product.stock);
        if product.stock <= low_stock_threshold {
            valuation.low_stock_count += 1;
        }
    }

    valuation
}

// =============================================================================
// Unit Tests
// =============================================================================
