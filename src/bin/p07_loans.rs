//! Chapter 7: Interfaces
//! Example: Record types as function parameters
//!
//! Run with: cargo run --bin p07_loans

use syntax_tour::config::TourConfig;
use syntax_tour::loan::{describe_conventional, describe_interest_only, ConventionalLoan, Loan};
use syntax_tour::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&TourConfig::load()?);

    let interest_only = describe_interest_only(&Loan {
        principal: 30_000.0,
        interest_rate: 5.0,
    });
    println!("{}", interest_only);

    let conventional = describe_conventional(&ConventionalLoan {
        principal: 30_000.0,
        interest_rate: 5.0,
        months: 180,
    });
    println!("{}", conventional);

    Ok(())
}
