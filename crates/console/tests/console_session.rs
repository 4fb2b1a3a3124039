use rust_decimal::Decimal;

use stockroom_console::{Config, Session, Step};
use stockroom_inventory::{MovementRecord, MovementType};
use stockroom_reports::{aggregate_totals, low_stock, LOW_STOCK_THRESHOLD};

fn run(session: &mut Session, line: &str) -> String {
    match session.handle_line(line) {
        Step::Continue(out) => out,
        Step::Quit => panic!("unexpected quit on '{line}'"),
    }
}

#[test]
fn add_report_remove_scenario() {
    let mut session = Session::new(&Config::default());

    assert_eq!(run(&mut session, "add A;Misc;10;1.00;Shelf 1"), "Product registered.\n");
    assert_eq!(run(&mut session, "add B;Misc;2;3.00;Shelf 2"), "Product registered.\n");

    let low = low_stock(session.ledger().products(), LOW_STOCK_THRESHOLD);
    let names: Vec<&str> = low.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["B"]);

    let report = run(&mut session, "reports");
    assert!(report.contains("Products with low stock (<= 5 units)"));
    assert!(report.contains("No movements recorded."));

    assert_eq!(run(&mut session, "remove A"), "Product 'A' removed.\n");
    let snapshot = session.ledger().snapshot();
    assert_eq!(snapshot.products.len(), 1);
    assert_eq!(snapshot.products[0].name, "B");
    assert!(snapshot.movements.is_empty());

    assert_eq!(run(&mut session, "remove A"), "No product named 'A'.\n");
}

#[test]
fn movement_updates_quantity_and_history() {
    let mut session = Session::new(&Config::default());
    run(&mut session, "add Widget;Tools;3;2.50;A1");

    assert_eq!(
        run(&mut session, "move Widget;12;Entrada;Alice"),
        "Movement recorded for product 'Widget'.\n"
    );

    let snapshot = session.ledger().snapshot();
    assert_eq!(snapshot.products[0].quantity, 12);
    assert_eq!(
        snapshot.movements,
        vec![MovementRecord {
            product: "Widget".to_string(),
            movement_type: MovementType::Inbound,
            quantity: 12,
            responsible: "Alice".to_string(),
        }]
    );

    let report = run(&mut session, "reports");
    assert!(report.contains("No products with low stock."));
    assert!(report.contains("Alice"));
}

#[test]
fn dashboard_totals_follow_the_catalog() {
    let mut session = Session::new(&Config::default());
    assert_eq!(run(&mut session, "dashboard"), "No products registered yet.\n");

    run(&mut session, "add Bolt;;2;10.0;");
    run(&mut session, "add Nut;;3;5.0;");

    let totals = aggregate_totals(session.ledger().products());
    assert_eq!(totals.total_quantity, 5);
    assert_eq!(totals.total_value, Decimal::new(35, 0));

    let dashboard = run(&mut session, "dashboard");
    assert!(dashboard.contains("Total products: 2"));
    assert!(dashboard.contains("Total quantity: 5"));
    assert!(dashboard.contains("35.00"));
}

#[test]
fn dashboard_survives_quantity_overflow() {
    let mut session = Session::new(&Config::default());
    for name in ["A", "B", "C"] {
        let line = format!("add {name};;9000000000000000000;0;");
        assert_eq!(run(&mut session, &line), "Product registered.\n");
    }

    let dashboard = run(&mut session, "dashboard");
    assert!(dashboard.contains("Total products: 3"));
    assert!(dashboard.contains(&format!("Total quantity: {}", u64::MAX)));
    assert!(dashboard.contains("Total value:    0.00"));
}

#[test]
fn dashboard_survives_value_overflow() {
    let mut session = Session::new(&Config::default());
    run(&mut session, "add A;;9000000000000000000;99999999999999;");

    let totals = aggregate_totals(session.ledger().products());
    assert_eq!(totals.total_value, Decimal::MAX);

    let dashboard = run(&mut session, "dashboard");
    assert!(dashboard.contains("Total quantity: 9000000000000000000"));
    assert!(dashboard.contains("79,228,162,514,264,337,593,543,950,335"));
}

#[test]
fn custom_threshold_changes_the_report() {
    let config = Config {
        low_stock_threshold: 10,
        ..Config::default()
    };
    let mut session = Session::new(&config);
    run(&mut session, "add Crate;;8;1;");

    let report = run(&mut session, "reports");
    assert!(report.contains("Products with low stock (<= 10 units)"));
    assert!(report.contains("Crate"));
}

#[test]
fn json_view_serializes_the_snapshot() {
    let mut session = Session::new(&Config::default());
    run(&mut session, "add Widget;Tools;3;2.50;A1;yes");

    let json: serde_json::Value = serde_json::from_str(&run(&mut session, "json")).unwrap();
    assert_eq!(json["products"][0]["name"], "Widget");
    assert_eq!(json["products"][0]["quantity"], 3);
    assert_eq!(json["products"][0]["available"], true);
    assert_eq!(json["movements"].as_array().unwrap().len(), 0);
}

#[test]
fn truth_view_shows_table_and_system_status() {
    let mut session = Session::new(&Config::default());
    let text = run(&mut session, "truth");
    assert!(text.starts_with("P "));
    assert!(text.contains("complete solution: true"));
}
