//! Syntax Tour - Runnable Walkthroughs
//!
//! Each module backs one walkthrough binary under `src/bin/`:
//! variables and union types, records with accessors, a shape hierarchy
//! modelled as a sum type, capability traits, loan math, record-typed
//! contracts, an enum, and a JSON fetch over HTTP.
//!
//! Run any walkthrough with:
//! ```bash
//! cargo run --bin <walkthrough_name>
//! ```
//!
//! For example:
//! ```bash
//! cargo run --bin p05_shape_inheritance
//! ```

pub mod coach;
pub mod config;
pub mod contract;
pub mod dessert;
pub mod loan;
pub mod logging;
pub mod people;
pub mod posts;
pub mod shapes;
pub mod staff;
pub mod variables;
