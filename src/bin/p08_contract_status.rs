//! Chapter 8: Enums
//!
//! Run with: cargo run --bin p08_contract_status

use syntax_tour::config::TourConfig;
use syntax_tour::contract::ContractStatus;
use syntax_tour::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&TourConfig::load()?);

    let employee_status = ContractStatus::Temp;
    println!("{}", employee_status.index());
    println!("{}", employee_status);

    // Reverse lookup from the number back to the name
    if let Some(status) = ContractStatus::from_index(employee_status.index()) {
        println!("{} -> {}", status.index(), status.name());
    }

    Ok(())
}
