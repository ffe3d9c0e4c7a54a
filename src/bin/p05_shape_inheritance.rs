//! Chapter 5: Inheritance
//! Example: A shared position extended by circles and rectangles
//!
//! Run with: cargo run --bin p05_shape_inheritance

use syntax_tour::config::TourConfig;
use syntax_tour::logging;
use syntax_tour::shapes::Shape;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&TourConfig::load()?);

    let my_shape = Shape::new(10.0, 15.0);
    let my_circle = Shape::circle(5.0, 10.0, 20.0);
    let my_rectangle = Shape::rectangle(0.0, 0.0, 3.0, 7.0);

    // One homogeneous list, dispatch happens inside info()
    let mut the_shapes: Vec<Shape> = Vec::new();
    the_shapes.push(my_shape);
    the_shapes.push(my_circle);
    the_shapes.push(my_rectangle);

    for shape in &the_shapes {
        println!("{}", shape.info());
    }

    Ok(())
}
