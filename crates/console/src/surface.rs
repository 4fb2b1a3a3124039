//! Input parsing and form validation.
//!
//! The ledger trusts the surface for numeric ranges: quantities and prices are
//! clamped to zero here, and the name field is checked before anything is
//! dispatched.

use rust_decimal::Decimal;

use stockroom_core::{DomainError, DomainResult};
use stockroom_inventory::{AddProduct, MovementType, RemoveProduct, UpdateQuantity};

/// One user action, as typed on the console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Dashboard,
    Add(AddProduct),
    List,
    Move(UpdateQuantity),
    Remove(RemoveProduct),
    Reports,
    TruthTable,
    Json,
    Help,
    Quit,
    Nothing,
}

pub const HELP: &str = "\
commands:
  dashboard                                           stock overview
  add <name>;<category>;<qty>;<price>;<location>[;<available yes/no>]
  list                                                registered products
  move <name>;<new qty>;<in|out>;<responsible>        record a stock movement
  remove <name>                                       remove a product
  reports                                             low stock + movement history
  truth                                               requirements truth table
  json                                                snapshot as JSON
  help | quit";

pub fn parse_action(line: &str) -> DomainResult<Action> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Action::Nothing);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_ascii_lowercase().as_str() {
        "dashboard" => Ok(Action::Dashboard),
        "add" => parse_add(rest).map(Action::Add),
        "list" => Ok(Action::List),
        "move" => parse_move(rest).map(Action::Move),
        "remove" => Ok(Action::Remove(RemoveProduct {
            name: required("product name", rest)?,
        })),
        "reports" => Ok(Action::Reports),
        "truth" => Ok(Action::TruthTable),
        "json" => Ok(Action::Json),
        "help" | "?" => Ok(Action::Help),
        "quit" | "exit" => Ok(Action::Quit),
        other => Err(DomainError::validation(format!(
            "unknown command '{other}' (type 'help')"
        ))),
    }
}

fn parse_add(rest: &str) -> DomainResult<AddProduct> {
    let fields: Vec<&str> = rest.split(';').map(str::trim).collect();
    if !(5..=6).contains(&fields.len()) {
        return Err(DomainError::validation(
            "add expects <name>;<category>;<qty>;<price>;<location>[;<available>]",
        ));
    }

    Ok(AddProduct {
        name: required("product name", fields[0])?,
        category: fields[1].to_string(),
        quantity: parse_quantity(fields[2])?,
        unit_price: parse_price(fields[3])?,
        location: fields[4].to_string(),
        available: fields.get(5).map(|f| parse_flag(f)).transpose()?,
    })
}

fn parse_move(rest: &str) -> DomainResult<UpdateQuantity> {
    let fields: Vec<&str> = rest.split(';').map(str::trim).collect();
    if fields.len() != 4 {
        return Err(DomainError::validation(
            "move expects <name>;<new qty>;<in|out>;<responsible>",
        ));
    }

    Ok(UpdateQuantity {
        name: required("product name", fields[0])?,
        new_quantity: parse_quantity(fields[1])?,
        movement_type: fields[2].parse::<MovementType>()?,
        responsible: fields[3].to_string(),
    })
}

fn required(field: &str, value: &str) -> DomainResult<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}

/// Whole units; negatives clamp to zero, values past `u64::MAX` clamp to it.
/// Empty means zero.
fn parse_quantity(raw: &str) -> DomainResult<u64> {
    if raw.is_empty() {
        return Ok(0);
    }
    let value: i128 = raw
        .parse()
        .map_err(|_| DomainError::validation(format!("quantity '{raw}' is not a whole number")))?;
    Ok(u64::try_from(value.max(0)).unwrap_or(u64::MAX))
}

/// Rounded to cents; negatives clamp to zero. Empty means zero.
fn parse_price(raw: &str) -> DomainResult<Decimal> {
    if raw.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value: Decimal = raw
        .parse()
        .map_err(|_| DomainError::validation(format!("price '{raw}' is not a number")))?;
    Ok(value.max(Decimal::ZERO).round_dp(2))
}

fn parse_flag(raw: &str) -> DomainResult<bool> {
    match raw.to_lowercase().as_str() {
        "yes" | "y" | "true" | "sim" | "s" => Ok(true),
        "no" | "n" | "false" | "nao" | "não" => Ok(false),
        other => Err(DomainError::validation(format!(
            "available must be yes or no, got '{other}'"
        ))),
    }
}
