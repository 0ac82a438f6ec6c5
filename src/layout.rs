//! Static page geometry, fonts and line-item tables for the salary statement.
//!
//! All coordinates are in PostScript points (1 inch = 72 pt) measured from
//! the bottom-left corner of an A4 page.  The values are normative: they
//! reproduce the layout of the statements already in circulation and must not
//! drift.

/// Points per inch.
pub const INCH: f64 = 72.0;

/// Document title drawn at the top of the page.
pub const TITLE: &str = "SALARY SLIP";
/// Statement period label.  Updated manually when a new period is issued.
pub const PERIOD_LABEL: &str = "Period: Nov-2025";
/// Delivery aggregator the statements are issued for.
pub const AGGREGATOR_LABEL: &str = "Aggregator: Talabat";
/// Currency prefix on the net-pay line.
pub const CURRENCY_PREFIX: &str = "AED";

/// Left edge of the horizontal rules.
pub const RULE_LEFT_X: f64 = 0.5 * INCH;
/// Right edge of the horizontal rules.
pub const RULE_RIGHT_X: f64 = 7.5 * INCH;
/// Label column of the left half (header fields and earnings).
pub const LEFT_COLUMN_X: f64 = 1.0 * INCH;
/// Label column of the right half (header fields and deductions).
pub const RIGHT_COLUMN_X: f64 = 4.5 * INCH;
/// Right alignment edge for earnings amounts.
pub const LEFT_AMOUNT_X: f64 = 3.5 * INCH;
/// Right alignment edge for deduction amounts.
pub const RIGHT_AMOUNT_X: f64 = 7.5 * INCH;

/// Baseline of the document title.
pub const TITLE_Y: f64 = 10.5 * INCH;
/// Baseline of the City / Rider ID header row.
pub const HEADER_ROW1_Y: f64 = 10.0 * INCH;
/// Baseline of the Name / Bike No header row.
pub const HEADER_ROW2_Y: f64 = 9.75 * INCH;
/// Baseline of the Period / Aggregator header row.
pub const HEADER_ROW3_Y: f64 = 9.5 * INCH;
/// Rule separating the header block from the itemized section.
pub const HEADER_RULE_Y: f64 = 9.2 * INCH;
/// Baseline of the EARNINGS / DEDUCTIONS column headers.
pub const SECTION_HEADER_Y: f64 = 8.8 * INCH;
/// Gap between the column headers and the first itemized row.
pub const SECTION_HEADER_GAP: f64 = 0.3 * INCH;
/// Vertical advance per itemized row.
pub const ROW_STEP: f64 = 0.2 * INCH;
/// Itemized rows never draw below this floor; see [`crate::slip`].
pub const ROW_FLOOR_Y: f64 = 1.5 * INCH;
/// Gap between the lower column end and the totals baseline.
pub const TOTALS_GAP: f64 = 0.5 * INCH;
/// The totals rule sits this far above the totals baseline.
pub const TOTALS_RULE_LIFT: f64 = 0.15 * INCH;
/// Gap between the totals baseline and the net-pay line.
pub const NET_GAP: f64 = 0.4 * INCH;
/// X position of the net-pay label.
pub const NET_LABEL_X: f64 = 2.0 * INCH;
/// X position of the net-pay amount.
pub const NET_AMOUNT_X: f64 = 5.5 * INCH;

/// Title font size (bold).
pub const TITLE_SIZE: f64 = 16.0;
/// Header and itemized row font size.
pub const BODY_SIZE: f64 = 10.0;
/// EARNINGS / DEDUCTIONS header font size (bold).
pub const SECTION_SIZE: f64 = 12.0;
/// Totals line font size (bold).
pub const TOTALS_SIZE: f64 = 10.0;
/// Net-pay line font size (bold), the largest on the page.
pub const NET_SIZE: f64 = 14.0;

/// Header field names, matched byte-for-byte against the upstream table.
pub const CITY_FIELD: &str = "City";
pub const RIDER_ID_FIELD: &str = "Rider ID";
pub const RIDER_NAME_FIELD: &str = "Rider Name";
pub const BIKE_FIELD: &str = "Nov-25 Bike";

/// Pre-aggregated totals supplied by the spreadsheet and trusted as-is.
pub const GROSS_FIELD: &str = "Gross salary";
/// The upstream header carries a stray trailing quote; it must be preserved
/// exactly for the lookup to succeed.  Known data-labeling defect, do not fix.
pub const TOTAL_DEDUCTION_FIELD: &str = "Total Deduction'";
pub const NET_FIELD: &str = "Net Riders Salaries";

/// A conditionally drawn statement row: display label plus the exact source
/// field name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineItem {
    /// Label printed on the statement.
    pub label: &'static str,
    /// Column name in the upstream table.
    pub field: &'static str,
}

const fn item(label: &'static str, field: &'static str) -> LineItem {
    LineItem { label, field }
}

/// Earnings rows in vertical draw order.
pub const EARNINGS: &[LineItem] = &[
    item("Pickups Payment", "Rider Pickup Payment"),
    item("Dropoffs Payment", "Rider Dropoff Payment"),
    item("TDS Bonus", "TDS Bonus"),
    // Upstream header is misspelled; kept verbatim.
    item("Arrears", "Arears"),
    item("Returns (LC)", "Deliveries - Return (LC)"),
];

/// Deduction rows in vertical draw order.
pub const DEDUCTIONS: &[LineItem] = &[
    item("COD Deficit", "COD Deficit"),
    item("Clawback", "Clawback Deduction"),
    item("Salik", "Salik"),
    item("Low Perf (LP)", "LP"),
    item("Extra Sim", "Extra Sim"),
    item("Traffic Fines", "Fine"),
    item("Bike Repair", "Bike Repair"),
    item("Visa/Loan", "Visa"),
    item("Insurance", "Insurance"),
    item("Advance", "Advance"),
    item("C3 Charges", "C3 Charges"),
    item("Prev. Minus", "Oct Minus salaries"),
    item("Other", "Others"),
    item("RTA", "RTA"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_item_tables_match_the_statement_template() {
        assert_eq!(EARNINGS.len(), 5);
        assert_eq!(DEDUCTIONS.len(), 14);
    }

    #[test]
    fn all_rows_fit_above_the_floor() {
        // The longer table drawn in full must stay clear of the truncation
        // floor, otherwise the template itself is broken.
        let first_row_y = SECTION_HEADER_Y - SECTION_HEADER_GAP;
        let last_row_y = first_row_y - (DEDUCTIONS.len() as f64 - 1.0) * ROW_STEP;
        assert!(last_row_y > ROW_FLOOR_Y);
    }

    #[test]
    fn aggregate_field_names_preserve_upstream_quirks() {
        assert!(TOTAL_DEDUCTION_FIELD.ends_with('\''));
        assert_eq!(EARNINGS[3].field, "Arears");
    }
}
