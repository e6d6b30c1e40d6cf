//! Demo driver: exercises the registry and the issuance log end to end.
//!
//! Seeds a small warehouse, issues some stock, records each issuance, then
//! dumps both structures as JSON on stdout. Logs go to stderr.

use anyhow::Result;
use tracing::{info, warn};

use stockring_inventory::ItemRegistry;
use stockring_issuance::IssuanceLog;

fn main() -> Result<()> {
    stockring_observability::init();

    let mut registry = ItemRegistry::new();
    let mut log = IssuanceLog::system();

    for (name, quantity) in [("Laptop", 10), ("Printer", 5), ("Scanner", 3)] {
        registry.add_item(name, quantity)?;
        info!(name, quantity, "item stocked");
    }

    println!("{}", serde_json::to_string_pretty(&registry.display_items())?);

    for (name, quantity) in [("Laptop", 2), ("Printer", 1), ("Scanner", 1)] {
        match registry.remove_item(name, quantity) {
            Ok(remaining) => {
                log.add_log(name, quantity)?;
                info!(name, quantity, remaining, "stock issued");
            }
            Err(err) => warn!(name, quantity, %err, "issuance refused"),
        }
    }

    println!("{}", serde_json::to_string_pretty(&registry.display_items())?);
    println!("{}", serde_json::to_string_pretty(&log.display_logs())?);

    Ok(())
}
