//! Chapter 7: Capability Contracts
//!
//! Coaches share no state and no base type, only the ability to hand out
//! a daily workout.

pub trait Coach {
    fn daily_workout(&self) -> &str;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CricketCoach;

impl Coach for CricketCoach {
    fn daily_workout(&self) -> &str {
        "Practice your spin bowling technique!"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct GolfCoach;

impl Coach for GolfCoach {
    fn daily_workout(&self) -> &str {
        "Practice your putting skills for 2 hours today!"
    }
}

/// Collects one workout line per coach, in order.
pub fn daily_plan(coaches: &[Box<dyn Coach>]) -> Vec<String> {
    coaches
        .iter()
        .map(|coach| coach.daily_workout().to_string())
        .collect()
}
