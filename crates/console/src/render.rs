//! Plain-text tables for the console.

use stockroom_inventory::{MovementRecord, Product};
use stockroom_reports::{Dashboard, RequirementsRow, RequirementsStatus, REQUIREMENTS_EXPRESSION};

pub fn products_table(products: &[Product]) -> String {
    let mut out = format!(
        "{:<24} {:<16} {:>8} {:>12} {:<16} {:<9}\n",
        "Name", "Category", "Qty", "Price", "Location", "Available"
    );
    for p in products {
        let available = match p.available {
            Some(true) => "yes",
            Some(false) => "no",
            None => "-",
        };
        out.push_str(&format!(
            "{:<24} {:<16} {:>8} {:>12.2} {:<16} {:<9}\n",
            p.name, p.category, p.quantity, p.unit_price, p.location, available
        ));
    }
    out
}

pub fn movements_table(movements: &[MovementRecord]) -> String {
    let mut out = format!(
        "{:<24} {:<9} {:>8} {:<20}\n",
        "Product", "Type", "Qty", "Responsible"
    );
    for m in movements {
        out.push_str(&format!(
            "{:<24} {:<9} {:>8} {:<20}\n",
            m.product, m.movement_type, m.quantity, m.responsible
        ));
    }
    out
}

pub fn dashboard(view: Option<&Dashboard>) -> String {
    match view {
        None => "No products registered yet.\n".to_string(),
        Some(d) => format!(
            "Total products: {}\nTotal quantity: {}\nTotal value:    {}\n",
            d.totals.distinct_product_count, d.totals.total_quantity, d.formatted_value
        ),
    }
}

pub fn truth_table(rows: &[RequirementsRow], status: RequirementsStatus) -> String {
    let mut out = format!(
        "{:<6} {:<6} {:<6} {:<6} {}\n",
        "P", "E", "L", "R", REQUIREMENTS_EXPRESSION
    );
    for row in rows {
        let [p, e, l, r] = row.inputs();
        out.push_str(&format!(
            "{:<6} {:<6} {:<6} {:<6} {}\n",
            p,
            e,
            l,
            r,
            row.complete()
        ));
    }
    out.push_str(&format!(
        "{REQUIREMENTS_EXPRESSION} is true only when every requirement is met.\n"
    ));

    let [p, e, l, r] = status.0.inputs();
    out.push_str(&format!(
        "This system: P={p} E={e} L={l} R={r} -> complete solution: {}\n",
        status.complete()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use stockroom_inventory::MovementType;
    use stockroom_reports::requirements_truth_table;

    #[test]
    fn product_rows_show_price_with_two_decimals() {
        let products = vec![Product {
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            quantity: 3,
            unit_price: Decimal::new(125, 1),
            location: "A1".to_string(),
            available: Some(false),
        }];
        let table = products_table(&products);
        let row = table.lines().nth(1).unwrap();
        assert!(row.starts_with("Widget"));
        assert!(row.contains("12.50"));
        assert!(row.contains("no"));
    }

    #[test]
    fn movement_rows_use_type_label() {
        let movements = vec![MovementRecord {
            product: "Widget".to_string(),
            movement_type: MovementType::Outbound,
            quantity: 1,
            responsible: "Bob".to_string(),
        }];
        let table = movements_table(&movements);
        assert!(table.lines().nth(1).unwrap().contains("Outbound"));
    }

    #[test]
    fn truth_table_has_header_rows_and_footer() {
        let text = truth_table(&requirements_truth_table(), RequirementsStatus::current());
        assert_eq!(text.lines().count(), 11);
        assert!(text.lines().nth(1).unwrap().trim_end().ends_with("true"));
        assert!(text.lines().nth(2).unwrap().trim_end().ends_with("false"));
    }

    #[test]
    fn truth_table_reports_current_system_status() {
        let text = truth_table(&requirements_truth_table(), RequirementsStatus::current());
        assert_eq!(
            text.lines().last().unwrap(),
            "This system: P=true E=true L=true R=true -> complete solution: true"
        );
    }

    #[test]
    fn empty_dashboard_shows_notice() {
        assert_eq!(dashboard(None), "No products registered yet.\n");
    }
}
