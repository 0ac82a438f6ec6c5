//! The row-to-document rendering routine.
//!
//! One validated [`Record`] goes in, one single-page A4 salary statement
//! comes out as an in-memory PDF byte buffer.  Rendering is a single linear
//! pass: header block, two independently-cursored itemized columns, then the
//! totals and net-pay footer.  The three totals are read from the record's
//! pre-aggregated fields and are deliberately never recomputed from the
//! itemized rows; the source spreadsheet is trusted to carry correct
//! subtotals.

use log::{debug, warn};

use crate::canvas::{Canvas, Font};
use crate::error::RenderError;
use crate::layout::{self, LineItem};
use crate::record::Record;

/// Renders `record` into a complete PDF byte buffer.
///
/// Composition cannot fail; the only error path is the backend serialization
/// at the end.  No partial documents are ever returned.
pub fn render(record: &Record) -> Result<Vec<u8>, RenderError> {
    let mut canvas = Canvas::new();
    compose(record, &mut canvas);
    let bytes = canvas.finish(layout::TITLE)?;
    debug!(
        "rendered statement for rider '{}' ({} bytes)",
        record.text(layout::RIDER_ID_FIELD),
        bytes.len()
    );
    Ok(bytes)
}

/// Suggested download filename for a rendered statement.
pub fn download_filename(rider_id: &str) -> String {
    format!("Salary_{rider_id}.pdf")
}

/// Composes the full statement onto `canvas` without serializing it.
///
/// Exposed so the draw-operation trace can be inspected directly; `render`
/// is `compose` followed by [`Canvas::finish`].
pub fn compose(record: &Record, canvas: &mut Canvas) {
    draw_header(record, canvas);

    canvas.set_font(Font::HelveticaBold, layout::SECTION_SIZE);
    canvas.draw_string(layout::LEFT_COLUMN_X, layout::SECTION_HEADER_Y, "EARNINGS");
    canvas.draw_string(
        layout::RIGHT_COLUMN_X,
        layout::SECTION_HEADER_Y,
        "DEDUCTIONS",
    );

    let start_y = layout::SECTION_HEADER_Y - layout::SECTION_HEADER_GAP;
    canvas.set_font(Font::Helvetica, layout::BODY_SIZE);
    let earnings_end = draw_column(
        record,
        canvas,
        layout::EARNINGS,
        layout::LEFT_COLUMN_X,
        layout::LEFT_AMOUNT_X,
        start_y,
    );
    let deductions_end = draw_column(
        record,
        canvas,
        layout::DEDUCTIONS,
        layout::RIGHT_COLUMN_X,
        layout::RIGHT_AMOUNT_X,
        start_y,
    );

    draw_totals(record, canvas, earnings_end.min(deductions_end));
}

fn draw_header(record: &Record, canvas: &mut Canvas) {
    canvas.set_font(Font::HelveticaBold, layout::TITLE_SIZE);
    canvas.draw_string(layout::LEFT_COLUMN_X, layout::TITLE_Y, layout::TITLE);

    canvas.set_font(Font::Helvetica, layout::BODY_SIZE);
    canvas.draw_string(
        layout::LEFT_COLUMN_X,
        layout::HEADER_ROW1_Y,
        format!("City: {}", record.text(layout::CITY_FIELD)),
    );
    canvas.draw_string(
        layout::RIGHT_COLUMN_X,
        layout::HEADER_ROW1_Y,
        format!("Rider ID: {}", record.text(layout::RIDER_ID_FIELD)),
    );
    canvas.draw_string(
        layout::LEFT_COLUMN_X,
        layout::HEADER_ROW2_Y,
        format!("Name: {}", record.text(layout::RIDER_NAME_FIELD)),
    );
    canvas.draw_string(
        layout::RIGHT_COLUMN_X,
        layout::HEADER_ROW2_Y,
        format!("Bike No: {}", record.text(layout::BIKE_FIELD)),
    );
    canvas.draw_string(
        layout::LEFT_COLUMN_X,
        layout::HEADER_ROW3_Y,
        layout::PERIOD_LABEL,
    );
    canvas.draw_string(
        layout::RIGHT_COLUMN_X,
        layout::HEADER_ROW3_Y,
        layout::AGGREGATOR_LABEL,
    );

    canvas.rule(
        layout::RULE_LEFT_X,
        layout::HEADER_RULE_Y,
        layout::RULE_RIGHT_X,
        layout::HEADER_RULE_Y,
    );
}

/// Walks one itemized column top to bottom and returns the final cursor
/// position.  Rows with an amount of exactly zero are omitted entirely rather
/// than shown as "0.00", so the two columns routinely end at different
/// heights.
fn draw_column(
    record: &Record,
    canvas: &mut Canvas,
    items: &[LineItem],
    label_x: f64,
    amount_x: f64,
    start_y: f64,
) -> f64 {
    let mut y = start_y;
    for item in items {
        let amount = record.amount(item.field);
        if amount == 0.0 {
            continue;
        }
        if y < layout::ROW_FLOOR_Y {
            warn!(
                "itemized column overflowed the page; dropping '{}' and later rows",
                item.label
            );
            break;
        }
        canvas.draw_string(label_x, y, item.label);
        canvas.draw_right_string(amount_x, y, format_amount(amount));
        y -= layout::ROW_STEP;
    }
    y
}

fn draw_totals(record: &Record, canvas: &mut Canvas, columns_end: f64) {
    let totals_y = columns_end - layout::TOTALS_GAP;
    let rule_y = totals_y + layout::TOTALS_RULE_LIFT;
    canvas.rule(layout::RULE_LEFT_X, rule_y, layout::RULE_RIGHT_X, rule_y);

    canvas.set_font(Font::HelveticaBold, layout::TOTALS_SIZE);
    canvas.draw_string(layout::LEFT_COLUMN_X, totals_y, "Total Earnings");
    canvas.draw_right_string(
        layout::LEFT_AMOUNT_X,
        totals_y,
        format_amount(record.amount(layout::GROSS_FIELD)),
    );
    canvas.draw_string(layout::RIGHT_COLUMN_X, totals_y, "Total Deductions");
    canvas.draw_right_string(
        layout::RIGHT_AMOUNT_X,
        totals_y,
        format_amount(record.amount(layout::TOTAL_DEDUCTION_FIELD)),
    );

    let net_y = totals_y - layout::NET_GAP;
    canvas.set_font(Font::HelveticaBold, layout::NET_SIZE);
    canvas.draw_string(layout::NET_LABEL_X, net_y, "NET SALARY PAYABLE:");
    canvas.draw_string(
        layout::NET_AMOUNT_X,
        net_y,
        format!(
            "{} {}",
            layout::CURRENCY_PREFIX,
            format_amount(record.amount(layout::NET_FIELD))
        ),
    );
}

/// Formats an amount with thousands separators and exactly two decimals.
///
/// Negative values keep their leading minus; the input is always finite
/// because [`Record::amount`] never yields anything else.
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (index, digit) in int_part.chars().enumerate() {
        if index > 0 && (int_part.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Op;
    use crate::layout::{self, LineItem};
    use crate::record::Record;

    fn ops_for(record: &Record) -> Vec<Op> {
        let mut canvas = Canvas::new();
        compose(record, &mut canvas);
        canvas.operations().to_vec()
    }

    fn text_ops(ops: &[Op]) -> Vec<(String, f64, f64)> {
        ops.iter()
            .filter_map(|op| match op {
                Op::Text { text, x, y, .. } => Some((text.clone(), *x, *y)),
                Op::Rule { .. } => None,
            })
            .collect()
    }

    fn find_text<'a>(ops: &'a [Op], needle: &str) -> Option<&'a Op> {
        ops.iter().find(|op| matches!(op, Op::Text { text, .. } if text == needle))
    }

    fn first_row_y() -> f64 {
        layout::SECTION_HEADER_Y - layout::SECTION_HEADER_GAP
    }

    #[test]
    fn formats_amounts_with_grouping_and_two_decimals() {
        assert_eq!(format_amount(500.0), "500.00");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(1234567.891), "1,234,567.89");
        assert_eq!(format_amount(-1234.5), "-1,234.50");
        assert_eq!(format_amount(999.0), "999.00");
        assert_eq!(format_amount(1000.0), "1,000.00");
    }

    #[test]
    fn zero_amount_rows_are_suppressed() {
        let record = Record::new()
            .with_field("Rider Pickup Payment", 500.0)
            .with_field("COD Deficit", 0.0);
        let ops = ops_for(&record);

        assert!(find_text(&ops, "Pickups Payment").is_some());
        assert!(find_text(&ops, "COD Deficit").is_none());
    }

    #[test]
    fn single_earning_scenario_matches_the_statement() {
        // Record straight out of the acceptance scenario: one earnings row,
        // no deduction rows, aggregates 500 / 0 / 500.
        let record = Record::new()
            .with_field("Rider Pickup Payment", 500.0)
            .with_field("COD Deficit", 0.0)
            .with_field("Gross salary", 500.0)
            .with_field("Total Deduction'", 0.0)
            .with_field("Net Riders Salaries", 500.0);
        let ops = ops_for(&record);

        let row = match find_text(&ops, "Pickups Payment") {
            Some(Op::Text { y, .. }) => *y,
            _ => panic!("earnings row missing"),
        };
        assert!((row - first_row_y()).abs() < 1e-9);

        for item in layout::DEDUCTIONS {
            assert!(find_text(&ops, item.label).is_none());
        }

        let texts: Vec<_> = text_ops(&ops).into_iter().map(|(t, _, _)| t).collect();
        assert_eq!(texts.iter().filter(|t| *t == "500.00").count(), 2);
        assert!(texts.contains(&"0.00".to_owned()));
        assert!(texts.contains(&"AED 500.00".to_owned()));
    }

    #[test]
    fn empty_record_still_renders_header_and_totals() {
        let ops = ops_for(&Record::new());

        assert!(find_text(&ops, "SALARY SLIP").is_some());
        assert!(find_text(&ops, "EARNINGS").is_some());
        assert!(find_text(&ops, "Total Earnings").is_some());
        assert!(find_text(&ops, "NET SALARY PAYABLE:").is_some());
        assert!(find_text(&ops, "AED 0.00").is_some());
        for item in layout::EARNINGS.iter().chain(layout::DEDUCTIONS) {
            assert!(find_text(&ops, item.label).is_none());
        }
    }

    #[test]
    fn columns_advance_independently() {
        let base = Record::new()
            .with_field("Rider Pickup Payment", 100.0)
            .with_field("Rider Dropoff Payment", 100.0)
            .with_field("TDS Bonus", 100.0)
            .with_field("Salik", 16.0);
        let sparse = Record::new()
            .with_field("Rider Pickup Payment", 100.0)
            .with_field("Salik", 16.0);

        let row_of = |ops: &[Op]| match find_text(ops, "Salik") {
            Some(Op::Text { y, .. }) => *y,
            _ => panic!("deduction row missing"),
        };

        let with_three_earnings = row_of(&ops_for(&base));
        let with_one_earning = row_of(&ops_for(&sparse));
        assert_eq!(with_three_earnings, with_one_earning);
        assert!((with_three_earnings - first_row_y()).abs() < 1e-9);
    }

    #[test]
    fn totals_reflect_aggregates_not_the_itemized_sum() {
        // Itemized sum is 100, but the stated aggregates deliberately
        // disagree; the statement must echo the aggregates verbatim.
        let record = Record::new()
            .with_field("Rider Pickup Payment", 100.0)
            .with_field("Gross salary", 999.0)
            .with_field("Total Deduction'", 44.0)
            .with_field("Net Riders Salaries", 955.0);
        let ops = ops_for(&record);
        let texts = text_ops(&ops);

        let totals_y = match find_text(&ops, "Total Earnings") {
            Some(Op::Text { y, .. }) => *y,
            _ => panic!("totals line missing"),
        };
        let at_totals: Vec<_> = texts
            .iter()
            .filter(|(_, _, y)| (*y - totals_y).abs() < 1e-9)
            .map(|(t, _, _)| t.as_str())
            .collect();
        assert!(at_totals.contains(&"999.00"));
        assert!(at_totals.contains(&"44.00"));
        assert!(!at_totals.contains(&"100.00"));
        assert!(find_text(&ops, "AED 955.00").is_some());
    }

    #[test]
    fn totals_baseline_follows_the_longer_column() {
        let record = Record::new()
            .with_field("Rider Pickup Payment", 100.0)
            .with_field("COD Deficit", 10.0)
            .with_field("Salik", 10.0)
            .with_field("Fine", 10.0);
        let ops = ops_for(&record);

        // Three deduction rows: the cursor ends three steps below the first
        // row, and the totals baseline hangs a fixed gap under that.
        let expected = first_row_y() - 3.0 * layout::ROW_STEP - layout::TOTALS_GAP;
        match find_text(&ops, "Total Earnings") {
            Some(Op::Text { y, .. }) => assert!((y - expected).abs() < 1e-9),
            _ => panic!("totals line missing"),
        }
    }

    #[test]
    fn amounts_right_align_to_their_column_edge() {
        let record = Record::new().with_field("Rider Pickup Payment", 1250.0);
        let ops = ops_for(&record);

        match find_text(&ops, "1,250.00") {
            Some(Op::Text { x, size, font, text, .. }) => {
                let width = crate::metrics::string_width(*font, *size, text);
                assert!((x + width - layout::LEFT_AMOUNT_X).abs() < 1e-9);
            }
            _ => panic!("amount missing"),
        }
    }

    #[test]
    fn composition_is_deterministic() {
        let record = Record::new()
            .with_field("Rider Pickup Payment", 321.09)
            .with_field("Salik", 16.0)
            .with_field("Gross salary", 321.09);
        assert_eq!(ops_for(&record), ops_for(&record));
    }

    #[test]
    fn overlong_columns_truncate_at_the_floor() {
        const MANY: &[LineItem] = &[LineItem {
            label: "Synthetic",
            field: "Synthetic",
        }; 60];
        let record = Record::new().with_field("Synthetic", 1.0);

        let mut canvas = Canvas::new();
        canvas.set_font(Font::Helvetica, layout::BODY_SIZE);
        let end = draw_column(
            &record,
            &mut canvas,
            MANY,
            layout::LEFT_COLUMN_X,
            layout::LEFT_AMOUNT_X,
            first_row_y(),
        );

        assert!(end >= layout::ROW_FLOOR_Y - layout::ROW_STEP);
        let drawn = canvas
            .operations()
            .iter()
            .filter(|op| matches!(op, Op::Text { text, .. } if text == "Synthetic"))
            .count();
        assert!(drawn < MANY.len());
    }

    #[test]
    fn download_filename_follows_the_convention() {
        assert_eq!(download_filename("1001"), "Salary_1001.pdf");
    }
}
