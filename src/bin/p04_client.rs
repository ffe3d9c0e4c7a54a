//! Chapter 4: Class Definition
//! Example: Constructor arguments become fields directly
//!
//! Run with: cargo run --bin p04_client

use syntax_tour::config::TourConfig;
use syntax_tour::logging;
use syntax_tour::people::{Client, Emp};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&TourConfig::load()?);

    let mut client = Client::new("Grace", "Hopper");
    println!("{:?}", client);

    client.set_first_name("Barbara");
    client.set_last_name("Liskov");
    println!("The first name is: {}", client.first_name());
    println!("The last name is: {}", client.last_name());

    // Record literal with a derived value
    let emp = Emp {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
    };
    println!("{}", emp.full_name());

    Ok(())
}
