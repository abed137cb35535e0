//! Client-side state store.
//!
//! An explicit, injectable store: per-feature slices holding entity lists
//! plus `loading`/`error` flags, and async actions that follow a fixed
//! three-phase protocol — pending (loading on, error cleared), fulfilled
//! (whole-entity replacement), rejected (error message recorded). The
//! backend stays authoritative: mutations reload the affected lists rather
//! than patching them locally.
//!
//! Actions take `&mut self`; concurrent triggers are not serialized and
//! resolutions apply in arrival order.

use std::sync::Arc;

use atrium_client::{CompanyApi, PaymentsApi};

pub mod auth;
pub mod companies;
pub mod finance;
pub mod invitations;
pub mod members;

pub use auth::{AuthSlice, Session};
pub use companies::CompanySlice;
pub use finance::FinanceSlice;
pub use invitations::InvitationSlice;
pub use members::MemberSlice;

/// The console's whole client-side state plus its backend handles.
pub struct Store {
    pub(crate) company_api: Arc<dyn CompanyApi>,
    pub(crate) payments_api: Arc<dyn PaymentsApi>,

    pub auth: AuthSlice,
    pub companies: CompanySlice,
    pub members: MemberSlice,
    pub invitations: InvitationSlice,
    pub finance: FinanceSlice,
}

impl Store {
    pub fn new(company_api: Arc<dyn CompanyApi>, payments_api: Arc<dyn PaymentsApi>) -> Self {
        Self {
            company_api,
            payments_api,
            auth: AuthSlice::default(),
            companies: CompanySlice::default(),
            members: MemberSlice::default(),
            invitations: InvitationSlice::default(),
            finance: FinanceSlice::default(),
        }
    }

    /// Current bearer token, cloned so actions can keep borrowing `self`.
    pub(crate) fn token(&self) -> Option<String> {
        self.auth.token().map(str::to_string)
    }
}
