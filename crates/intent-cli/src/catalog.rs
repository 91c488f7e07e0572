//! Catalog command handler.

use intent_core::SignalCatalog;

/// Print the active category / type / weight table.
pub(crate) fn run_catalog(catalog: &SignalCatalog) {
    println!("{:<26} {:<12} {:>6}", "category", "type", "weight");
    for (category, signal_type, weight) in catalog.entries() {
        println!(
            "{:<26} {:<12} {:>6}",
            category.as_str(),
            signal_type.to_string(),
            weight
        );
    }
}
