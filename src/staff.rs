//! Chapter 7: Intersection and Union Records
//!
//! `ManagementEmployee` has every field of both records; `StaffRecord` is
//! exactly one of them, told apart by which fields are present. A value
//! carrying the fields of both is not a `StaffRecord`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Employee {
    pub employee_id: u32,
    pub age: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Manager {
    pub stock_plan: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagementEmployee {
    #[serde(flatten)]
    pub employee: Employee,
    #[serde(flatten)]
    pub manager: Manager,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StaffRecord {
    Employee(Employee),
    Manager(Manager),
}

impl StaffRecord {
    pub fn describe(&self) -> String {
        match self {
            StaffRecord::Employee(e) => format!("employee #{} (age {})", e.employee_id, e.age),
            StaffRecord::Manager(m) => format!(
                "manager ({} stock plan)",
                if m.stock_plan { "with" } else { "without" }
            ),
        }
    }
}
