//! Chapter 2: Variables and Union Types
//!
//! Run with: cargo run --bin p02_sample_types

use colored::Colorize;
use serde_json::json;
use syntax_tour::config::TourConfig;
use syntax_tour::logging;
use syntax_tour::variables::{add, greeting, greeting_concat, value_kind, MultiType, Operand};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&TourConfig::load()?);

    let found: bool = true;
    let grade: f64 = 88.6;
    let first_name = "Ada";
    let last_name = "Lovelace";

    // Type inferred from the initializer
    let y = 1;

    println!("{}", "Declarations".bold());
    println!("{}", found);
    println!("The grade is: {}", grade);
    println!("{}", greeting_concat(first_name, last_name));
    println!("{}", greeting(first_name, last_name));
    println!("y = {}", y);

    // A variable that accepts any type
    let mut random_value = json!(10);
    println!("random_value = {} ({})", random_value, value_kind(&random_value));
    random_value = json!(first_name);
    println!("random_value = {} ({})", random_value, value_kind(&random_value));
    random_value = json!(true);
    println!("random_value = {} ({})", random_value, value_kind(&random_value));

    // A variable that holds either a number or a boolean
    let mut multi_type = MultiType::Number(20.0);
    println!("multi_type = {}", multi_type);
    multi_type = MultiType::Flag(true);
    println!("multi_type = {}", multi_type);

    println!("\n{}", "Union add".bold());
    println!("{}", add(Operand::Number(34.0), Operand::Number(44.0))?);
    println!("{}", add("one".into(), "two".into())?);

    match add(Operand::Number(1.0), "one".into()) {
        Ok(value) => println!("{}", value),
        Err(e) => println!("{} {}", "Rejected:".red(), e),
    }

    Ok(())
}
