//! Chapter 6: Abstract Shapes
//! Example: Every shape in the list must compute an area
//!
//! Run with: cargo run --bin p06_abstract_shapes

use syntax_tour::config::TourConfig;
use syntax_tour::logging;
use syntax_tour::shapes::{AreaShape, Shape};
use tracing::warn;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&TourConfig::load()?);

    let the_shapes = vec![
        AreaShape::circle(5.0, 10.0, 20.0),
        AreaShape::rectangle(0.0, 0.0, 3.0, 7.0),
    ];

    for shape in &the_shapes {
        println!("{}", shape.info());
        println!("Area= {}", shape.area());
        println!();
    }

    // A bare position cannot join the list
    if let Err(e) = AreaShape::try_from(Shape::new(10.0, 15.0)) {
        warn!(error = %e, "skipping shape");
    }

    Ok(())
}
