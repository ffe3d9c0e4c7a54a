//! Chapters 5 and 6: Shape Hierarchy
//!
//! Every shape shares a position; what it adds on top is carried by
//! [`ShapeKind`]. Descriptions and areas are computed by matching on the
//! kind rather than through virtual dispatch.
//!
//! [`AreaShape`] is the abstract-base version: only kinds that can compute
//! an area are representable, so its `area` is total.

use std::f64::consts::PI;
use thiserror::Error;

// =============================================================================
// Payloads
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, value: f64) {
        self.radius = value;
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn set_width(&mut self, value: f64) {
        self.width = value;
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn set_height(&mut self, value: f64) {
        self.height = value;
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

// =============================================================================
// Shape = position + kind
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeKind {
    Plain,
    Circle(Circle),
    Rectangle(Rectangle),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    x: f64,
    y: f64,
    kind: ShapeKind,
}

impl Shape {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            kind: ShapeKind::Plain,
        }
    }

    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        Self {
            x,
            y,
            kind: ShapeKind::Circle(Circle::new(radius)),
        }
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            kind: ShapeKind::Rectangle(Rectangle::new(width, height)),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn set_x(&mut self, value: f64) {
        self.x = value;
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_y(&mut self, value: f64) {
        self.y = value;
    }

    pub fn kind(&self) -> &ShapeKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut ShapeKind {
        &mut self.kind
    }

    /// Base description followed by whatever the kind appends.
    pub fn info(&self) -> String {
        let mut info = format!("x={}, y={}", self.x, self.y);
        match &self.kind {
            ShapeKind::Plain => {}
            ShapeKind::Circle(c) => info.push_str(&format!(", radius={}", c.radius)),
            ShapeKind::Rectangle(r) => {
                info.push_str(&format!(", width={}, height={}", r.width, r.height))
            }
        }
        info
    }

    /// `None` for a plain shape, which has nothing to measure.
    pub fn area(&self) -> Option<f64> {
        match &self.kind {
            ShapeKind::Plain => None,
            ShapeKind::Circle(c) => Some(c.area()),
            ShapeKind::Rectangle(r) => Some(r.area()),
        }
    }
}

// =============================================================================
// Shapes that must provide an area
// =============================================================================

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("shape at ({x}, {y}) has no area")]
    NoArea { x: f64, y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaShape {
    Circle { x: f64, y: f64, circle: Circle },
    Rectangle { x: f64, y: f64, rectangle: Rectangle },
}

impl AreaShape {
    pub fn circle(x: f64, y: f64, radius: f64) -> Self {
        AreaShape::Circle {
            x,
            y,
            circle: Circle::new(radius),
        }
    }

    pub fn rectangle(x: f64, y: f64, width: f64, height: f64) -> Self {
        AreaShape::Rectangle {
            x,
            y,
            rectangle: Rectangle::new(width, height),
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            AreaShape::Circle { circle, .. } => circle.area(),
            AreaShape::Rectangle { rectangle, .. } => rectangle.area(),
        }
    }

    pub fn info(&self) -> String {
        Shape::from(*self).info()
    }
}

impl TryFrom<Shape> for AreaShape {
    type Error = ShapeError;

    fn try_from(shape: Shape) -> Result<Self, Self::Error> {
        match shape.kind {
            ShapeKind::Plain => Err(ShapeError::NoArea {
                x: shape.x,
                y: shape.y,
            }),
            ShapeKind::Circle(circle) => Ok(AreaShape::Circle {
                x: shape.x,
                y: shape.y,
                circle,
            }),
            ShapeKind::Rectangle(rectangle) => Ok(AreaShape::Rectangle {
                x: shape.x,
                y: shape.y,
                rectangle,
            }),
        }
    }
}

impl From<AreaShape> for Shape {
    fn from(shape: AreaShape) -> Self {
        match shape {
            AreaShape::Circle { x, y, circle } => Shape {
                x,
                y,
                kind: ShapeKind::Circle(circle),
            },
            AreaShape::Rectangle { x, y, rectangle } => Shape {
                x,
                y,
                kind: ShapeKind::Rectangle(rectangle),
            },
        }
    }
}
