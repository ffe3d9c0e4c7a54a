//! Chapter 7: Interfaces
//! Example: Unrelated types behind one capability
//!
//! Run with: cargo run --bin p07_coaches

use syntax_tour::coach::{Coach, CricketCoach, GolfCoach};
use syntax_tour::config::TourConfig;
use syntax_tour::logging;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&TourConfig::load()?);

    let mut the_coaches: Vec<Box<dyn Coach>> = Vec::new();
    the_coaches.push(Box::new(CricketCoach));
    the_coaches.push(Box::new(GolfCoach));

    for coach in &the_coaches {
        println!("{}", coach.daily_workout());
    }

    Ok(())
}
