//! Chapter 8: Enums
//!
//! Discriminants start at 0, so a status can be printed either as its
//! number or as its name.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ContractStatus {
    Permanent = 0,
    Temp,
    Apprentice,
}

impl ContractStatus {
    pub const ALL: [ContractStatus; 3] = [
        ContractStatus::Permanent,
        ContractStatus::Temp,
        ContractStatus::Apprentice,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            ContractStatus::Permanent => "Permanent",
            ContractStatus::Temp => "Temp",
            ContractStatus::Apprentice => "Apprentice",
        }
    }

    /// Reverse lookup from the numeric value.
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
