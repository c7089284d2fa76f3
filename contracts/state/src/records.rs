//! Records produced by the program handlers.

use pinocchio::pubkey::Pubkey;

use crate::SECONDS_PER_MONTH;

/// Registered policy holder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub active: bool,
}

impl UserProfile {
    pub fn new(name: String, email: String) -> Self {
        Self {
            name,
            email,
            active: true,
        }
    }
}

/// Purchased coverage.
///
/// `id` is the policy PDA; dates are unix seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct Policy {
    pub id: Pubkey,
    pub holder: Pubkey,
    pub product_id: String,
    pub coverage_amount: f64,
    pub premium: f64,
    pub start_date: u64,
    pub end_date: u64,
    pub active: bool,
}

impl Policy {
    pub fn new(
        id: Pubkey,
        holder: Pubkey,
        product_id: String,
        coverage_amount: f64,
        premium: f64,
        duration_months: u32,
        start_date: u64,
    ) -> Self {
        Self {
            id,
            holder,
            product_id,
            coverage_amount,
            premium,
            start_date,
            end_date: policy_end_date(start_date, duration_months),
            active: true,
        }
    }
}

/// End of a policy term, counting every month as 30 days.
pub fn policy_end_date(start_date: u64, duration_months: u32) -> u64 {
    start_date.saturating_add(u64::from(duration_months).saturating_mul(SECONDS_PER_MONTH))
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimStatus {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
}

impl ClaimStatus {
    /// Status resulting from an adjudication decision.
    pub fn from_decision(approved: bool) -> Self {
        if approved {
            ClaimStatus::Approved
        } else {
            ClaimStatus::Rejected
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        }
    }
}

/// Claim filed against a policy.
///
/// `id` is the claim PDA and `policy` the policy PDA it was filed against.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    pub id: Pubkey,
    pub policy: Pubkey,
    pub amount: f64,
    pub description: String,
    pub timestamp: u64,
    pub status: ClaimStatus,
}

impl Claim {
    /// A freshly filed claim, always `Pending`.
    pub fn file(
        id: Pubkey,
        policy: Pubkey,
        amount: f64,
        description: String,
        timestamp: u64,
    ) -> Self {
        Self {
            id,
            policy,
            amount,
            description,
            timestamp,
            status: ClaimStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_term_counts_thirty_day_months() {
        let policy = Policy::new(
            [1; 32],
            [2; 32],
            "health-basic".to_string(),
            50_000.0,
            120.5,
            12,
            1_700_000_000,
        );
        assert_eq!(policy.end_date, 1_700_000_000 + 12 * 30 * 24 * 60 * 60);
        assert!(policy.active);
    }

    #[test]
    fn policy_end_date_saturates() {
        assert_eq!(policy_end_date(u64::MAX - 5, 1), u64::MAX);
    }

    #[test]
    fn filed_claim_starts_pending() {
        let claim = Claim::file([3; 32], [4; 32], 900.0, "water damage".into(), 42);
        assert_eq!(claim.status, ClaimStatus::Pending);
        assert_eq!(claim.status.as_str(), "pending");
    }

    #[test]
    fn decision_maps_to_status() {
        assert_eq!(ClaimStatus::from_decision(true), ClaimStatus::Approved);
        assert_eq!(ClaimStatus::from_decision(false).as_str(), "rejected");
    }
}
