//! One interactive session: owns its ledger and turns actions into output.

use stockroom_core::DomainError;
use stockroom_inventory::{CommandOutcome, InventoryLedger, LedgerCommand};
use stockroom_reports::{low_stock, requirements_truth_table, Dashboard, RequirementsStatus};

use crate::config::Config;
use crate::render;
use crate::surface::{parse_action, Action, HELP};

/// Result of handling one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

/// Session state. Created at session start, dropped at session end.
#[derive(Debug)]
pub struct Session {
    ledger: InventoryLedger,
    low_stock_threshold: u64,
}

impl Session {
    pub fn new(config: &Config) -> Self {
        Self {
            ledger: InventoryLedger::new(),
            low_stock_threshold: config.low_stock_threshold,
        }
    }

    pub fn ledger(&self) -> &InventoryLedger {
        &self.ledger
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        match parse_action(line) {
            Ok(Action::Quit) => Step::Quit,
            Ok(action) => Step::Continue(self.handle(action)),
            Err(err) => Step::Continue(warning(&err)),
        }
    }

    fn handle(&mut self, action: Action) -> String {
        match action {
            Action::Nothing | Action::Quit => String::new(),
            Action::Help => format!("{HELP}\n"),
            Action::Dashboard => {
                render::dashboard(Dashboard::from_products(self.ledger.products()).as_ref())
            }
            Action::List => {
                if self.ledger.is_empty() {
                    "No products registered yet.\n".to_string()
                } else {
                    render::products_table(self.ledger.products())
                }
            }
            Action::Add(cmd) => self.run(LedgerCommand::AddProduct(cmd)),
            Action::Move(cmd) => {
                if self.ledger.is_empty() {
                    return "Register products before moving stock.\n".to_string();
                }
                let name = cmd.name.clone();
                match self.run_outcome(LedgerCommand::UpdateQuantity(cmd)) {
                    Ok(_) => format!("Movement recorded for product '{name}'.\n"),
                    Err(msg) => msg,
                }
            }
            Action::Remove(cmd) => {
                if self.ledger.is_empty() {
                    return "No products registered to remove.\n".to_string();
                }
                let name = cmd.name.clone();
                match self.run_outcome(LedgerCommand::RemoveProduct(cmd)) {
                    Ok(CommandOutcome::Removed { rows: 0 }) => {
                        format!("No product named '{name}'.\n")
                    }
                    Ok(_) => format!("Product '{name}' removed.\n"),
                    Err(msg) => msg,
                }
            }
            Action::Reports => self.reports(),
            Action::TruthTable => {
                render::truth_table(&requirements_truth_table(), RequirementsStatus::current())
            }
            Action::Json => match self.run_outcome(LedgerCommand::Query) {
                Ok(CommandOutcome::Snapshot(snapshot)) => {
                    match serde_json::to_string_pretty(&snapshot) {
                        Ok(json) => format!("{json}\n"),
                        Err(e) => {
                            tracing::error!(error = %e, "failed to serialize snapshot");
                            format!("error: {e}\n")
                        }
                    }
                }
                Ok(_) => String::new(),
                Err(msg) => msg,
            },
        }
    }

    fn run(&mut self, command: LedgerCommand) -> String {
        match self.run_outcome(command) {
            Ok(CommandOutcome::Added) => "Product registered.\n".to_string(),
            Ok(_) => String::new(),
            Err(msg) => msg,
        }
    }

    fn run_outcome(&mut self, command: LedgerCommand) -> Result<CommandOutcome, String> {
        self.ledger.dispatch(command).map_err(|err| warning(&err))
    }

    fn reports(&self) -> String {
        let mut out = String::new();

        if self.ledger.is_empty() {
            out.push_str("No data to generate reports.\n");
        } else {
            let low = low_stock(self.ledger.products(), self.low_stock_threshold);
            if low.is_empty() {
                out.push_str("No products with low stock.\n");
            } else {
                out.push_str(&format!(
                    "Products with low stock (<= {} units)\n",
                    self.low_stock_threshold
                ));
                out.push_str(&render::products_table(&low));
            }
        }

        out.push_str("\nMovement history\n");
        if self.ledger.movements().is_empty() {
            out.push_str("No movements recorded.\n");
        } else {
            out.push_str(&render::movements_table(self.ledger.movements()));
        }
        out
    }
}

fn warning(err: &DomainError) -> String {
    if err.is_user_correctable() {
        format!("warning: {err}\n")
    } else {
        format!("error: {err}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&Config::default())
    }

    fn output(step: Step) -> String {
        match step {
            Step::Continue(out) => out,
            Step::Quit => panic!("Expected Continue"),
        }
    }

    #[test]
    fn blank_name_is_reported_inline_and_nothing_is_added() {
        let mut s = session();
        let out = output(s.handle_line("add ;Tools;1;1;A1"));
        assert!(out.starts_with("warning:"));
        assert!(s.ledger().is_empty());
    }

    #[test]
    fn move_and_remove_need_a_catalog() {
        let mut s = session();
        assert_eq!(
            output(s.handle_line("move Widget;1;in;Alice")),
            "Register products before moving stock.\n"
        );
        assert_eq!(
            output(s.handle_line("remove Widget")),
            "No products registered to remove.\n"
        );
    }

    #[test]
    fn moving_an_unknown_product_is_an_error() {
        let mut s = session();
        output(s.handle_line("add Widget;;3;1;"));
        let out = output(s.handle_line("move Gizmo;1;in;Alice"));
        assert!(out.starts_with("error: not found"));
        assert!(s.ledger().movements().is_empty());
    }

    #[test]
    fn quit_ends_the_session() {
        assert_eq!(session().handle_line("quit"), Step::Quit);
    }
}
