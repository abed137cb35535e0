//! Two-step confirmation for destructive actions.
//!
//! Deleting a company, removing a member and transferring ownership must be
//! requested first and confirmed second; dispatch sites require a
//! [`Confirmed`] token that only [`ConfirmationGate::confirm`] can mint.

use atrium_core::{CompanyId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestructiveAction {
    DeleteCompany(CompanyId),
    RemoveMember {
        company_id: CompanyId,
        user_id: UserId,
    },
    TransferOwnership {
        company_id: CompanyId,
        new_owner_id: UserId,
    },
}

/// Proof that the pending action went through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmed {
    action: DestructiveAction,
}

impl Confirmed {
    pub fn action(&self) -> &DestructiveAction {
        &self.action
    }

    pub fn into_action(self) -> DestructiveAction {
        self.action
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfirmationGate {
    pending: Option<DestructiveAction>,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage an action; a second request replaces the first.
    pub fn request(&mut self, action: DestructiveAction) {
        self.pending = Some(action);
    }

    pub fn pending(&self) -> Option<&DestructiveAction> {
        self.pending.as_ref()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Confirm the staged action. Returns `None` when nothing was staged,
    /// so an unconfirmed request can never dispatch.
    pub fn confirm(&mut self) -> Option<Confirmed> {
        self.pending.take().map(|action| Confirmed { action })
    }
}
