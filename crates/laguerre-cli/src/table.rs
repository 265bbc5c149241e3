//! Coefficient tables.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use laguerre_algebra::RationalPolynomial;
use num_traits::{Signed, ToPrimitive};

/// One row per power of x, ascending, including zero coefficients.
pub fn coefficient_table(polynomial: &RationalPolynomial) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("k"),
        header_cell("coefficient of x^k"),
        header_cell("decimal"),
    ]);
    apply_table_style(&mut table);
    for column in [0, 2] {
        if let Some(column) = table.column_mut(column) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (power, coefficient) in polynomial.coefficients().iter().enumerate() {
        let decimal = coefficient
            .to_f64()
            .map_or_else(|| "-".to_string(), |value| format!("{value:.6e}"));
        let exact = Cell::new(coefficient);
        let exact = if coefficient.is_negative() {
            exact.fg(Color::Red)
        } else {
            exact
        };
        table.add_row(vec![Cell::new(power), exact, Cell::new(decimal)]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use laguerre_algebra::LaguerreEvaluator;
    use laguerre_model::PolynomialRequest;

    #[test]
    fn test_one_row_per_power() {
        let expansion = LaguerreEvaluator::default()
            .expand(PolynomialRequest::new(3, 1))
            .unwrap();
        let mut table = coefficient_table(&expansion.polynomial);
        table.force_no_tty();
        assert_eq!(table.row_count(), 4);

        let text = table.to_string();
        assert!(text.contains("-1/6"));
        assert!(text.contains("-6"));
        assert!(text.contains("4.000000e0"));
    }
}
