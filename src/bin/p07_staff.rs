//! Chapter 7: Interfaces
//! Example: Intersection and union record types
//!
//! Run with: cargo run --bin p07_staff

use syntax_tour::config::TourConfig;
use syntax_tour::logging;
use syntax_tour::staff::{Employee, ManagementEmployee, Manager, StaffRecord};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init(&TourConfig::load()?);

    let new_manager = ManagementEmployee {
        employee: Employee {
            employee_id: 44,
            age: 54,
        },
        manager: Manager { stock_plan: true },
    };
    println!("{:?}", new_manager);
    println!("{}", serde_json::to_string(&new_manager)?);

    let records: Vec<StaffRecord> =
        serde_json::from_str(r#"[{"employeeId":12,"age":31},{"stockPlan":false}]"#)?;
    for record in &records {
        println!("{}", record.describe());
    }

    Ok(())
}
