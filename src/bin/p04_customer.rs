//! Chapter 4: Class Definition
//! Example: Private fields behind getters and setters
//!
//! Run with: cargo run --bin p04_customer

use syntax_tour::config::TourConfig;
use syntax_tour::logging;
use syntax_tour::people::Customer;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&TourConfig::load()?);

    let mut customer = Customer::new("Grace", "Hopper");
    println!("{:?}", customer);

    customer.set_first_name("Alan");
    customer.set_last_name("Turing");
    println!("The first name is: {}", customer.first_name());
    println!("The last name is: {}", customer.last_name());

    Ok(())
}
