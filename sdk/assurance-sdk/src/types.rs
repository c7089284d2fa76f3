use solana_sdk::instruction::Instruction;
use solana_sdk::pubkey::Pubkey;

/// An encoded instruction plus the record it targets.
#[derive(Debug, Clone)]
pub struct PreparedInstruction {
    pub instruction: Instruction,

    /// PDA of the profile, policy or claim the instruction addresses
    pub address: Pubkey,

    /// Policy or claim identifier used as the PDA seed. Keep it: filing a
    /// claim or paying a premium later needs the same policy id.
    pub record_id: Option<String>,
}

impl PreparedInstruction {
    pub fn into_instruction(self) -> Instruction {
        self.instruction
    }
}

/// Outcome of a claim review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimDecision {
    Approve,
    Reject,
}

impl ClaimDecision {
    pub fn is_approved(self) -> bool {
        matches!(self, ClaimDecision::Approve)
    }
}

impl From<bool> for ClaimDecision {
    fn from(approved: bool) -> Self {
        if approved {
            ClaimDecision::Approve
        } else {
            ClaimDecision::Reject
        }
    }
}
