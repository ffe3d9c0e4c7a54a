//! Chapter 7: Loan Terms
//!
//! Loan terms are plain records passed by reference into pure functions.
//! Rates are annual percentages; nothing is validated, so a zero-month term
//! gives a non-finite payment rather than an error.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loan {
    pub principal: f64,
    /// Annual interest rate, as a percentage.
    pub interest_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConventionalLoan {
    pub principal: f64,
    pub interest_rate: f64,
    pub months: u32,
}

fn monthly_rate(annual_percent: f64) -> f64 {
    annual_percent / 1200.0
}

pub fn interest_only_payment(loan: &Loan) -> f64 {
    loan.principal * monthly_rate(loan.interest_rate)
}

pub fn conventional_payment(loan: &ConventionalLoan) -> f64 {
    let rate = monthly_rate(loan.interest_rate);
    loan.principal * rate / (1.0 - (1.0 + rate).powf(-f64::from(loan.months)))
}

pub fn format_payment(payment: f64) -> String {
    format!("{:.2}", payment)
}

pub fn describe_interest_only(loan: &Loan) -> String {
    format!(
        "The interest only loan payment is {}",
        format_payment(interest_only_payment(loan))
    )
}

pub fn describe_conventional(loan: &ConventionalLoan) -> String {
    format!(
        "The conventional loan payment is {}",
        format_payment(conventional_payment(loan))
    )
}
