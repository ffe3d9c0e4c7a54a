//! Chapter 7: Interfaces
//! Example: Extending records, literal types, optional and indexable fields
//!
//! Run with: cargo run --bin p07_desserts

use syntax_tour::config::TourConfig;
use syntax_tour::dessert::{too_many_scoops, IceCream, IceCreamArray, Sauce, Sundae};
use syntax_tour::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&TourConfig::load()?);

    let my_ice_cream = IceCream {
        flavor: "vanilla".to_string(),
        scoops: 2,
    };
    println!("{}", my_ice_cream.flavor);
    println!(
        "{}",
        too_many_scoops(&IceCream {
            flavor: "vanilla".to_string(),
            scoops: 5,
        })
    );

    // Only three sauces exist; optional toppings may be left out
    let my_sundae = Sundae::new(my_ice_cream, Sauce::Caramel).with_nuts(true);
    println!("{} sauce, nuts: {:?}", my_sundae.sauce, my_sundae.nuts);
    println!("{}", serde_json::to_string(&my_sundae)?);

    let flavors: IceCreamArray = ["chocolate", "vanilla", "strawberry"].into_iter().collect();
    println!("{}", flavors[0]);

    Ok(())
}
