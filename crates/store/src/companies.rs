//! Company directory slice.

use atrium_client::sample::sample_companies;
use atrium_client::types::{Company, CompanyDraft};
use atrium_client::ApiError;
use atrium_core::CompanyId;

use crate::Store;

#[derive(Debug, Clone, Default)]
pub struct CompanySlice {
    pub list: Vec<Company>,
    pub selected: Option<Company>,
    pub loading: bool,
    pub error: Option<String>,
}

impl CompanySlice {
    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn fulfill(&mut self) {
        self.loading = false;
    }

    fn reject(&mut self, err: &ApiError) {
        self.loading = false;
        self.error = Some(err.to_string());
    }
}

impl Store {
    /// Fetch the full company directory, falling back to the built-in
    /// sample directory when the backend is unreachable.
    pub async fn fetch_companies(&mut self) {
        self.companies.begin();
        let token = self.token();
        match self.company_api.list_companies(token.as_deref()).await {
            Ok(list) => {
                self.companies.list = list;
                self.companies.fulfill();
            }
            Err(err) if err.is_unreachable() => {
                tracing::warn!(error = %err, "general API unreachable, serving sample directory");
                self.companies.list = sample_companies();
                self.companies.fulfill();
            }
            Err(err) => self.companies.reject(&err),
        }
    }

    /// Fetch only the companies the signed-in user belongs to. Same
    /// unreachable fallback as [`Store::fetch_companies`].
    pub async fn fetch_user_companies(&mut self) {
        self.companies.begin();
        let token = self.token();
        match self.company_api.list_user_companies(token.as_deref()).await {
            Ok(list) => {
                self.companies.list = list;
                self.companies.fulfill();
            }
            Err(err) if err.is_unreachable() => {
                tracing::warn!(error = %err, "general API unreachable, serving sample directory");
                self.companies.list = sample_companies();
                self.companies.fulfill();
            }
            Err(err) => self.companies.reject(&err),
        }
    }

    /// Create a company and append the server-issued record.
    pub async fn create_company(&mut self, draft: &CompanyDraft) {
        self.companies.begin();
        let token = self.token();
        match self
            .company_api
            .create_company(draft, token.as_deref())
            .await
        {
            Ok(created) => {
                self.companies.list.push(created);
                self.companies.fulfill();
            }
            Err(err) => self.companies.reject(&err),
        }
    }

    /// Update a company, replacing the matching list entry wholesale.
    pub async fn update_company(&mut self, company: &Company) {
        self.companies.begin();
        let token = self.token();
        match self
            .company_api
            .update_company(company, token.as_deref())
            .await
        {
            Ok(updated) => {
                if let Some(slot) = self.companies.list.iter_mut().find(|c| c.id == updated.id) {
                    *slot = updated.clone();
                }
                if self
                    .companies
                    .selected
                    .as_ref()
                    .is_some_and(|c| c.id == updated.id)
                {
                    self.companies.selected = Some(updated);
                }
                self.companies.fulfill();
            }
            Err(err) => self.companies.reject(&err),
        }
    }

    /// Delete a company and drop it from the list.
    pub async fn delete_company(&mut self, id: &CompanyId) {
        self.companies.begin();
        let token = self.token();
        match self.company_api.delete_company(id, token.as_deref()).await {
            Ok(()) => {
                self.companies.list.retain(|c| &c.id != id);
                if self
                    .companies
                    .selected
                    .as_ref()
                    .is_some_and(|c| &c.id == id)
                {
                    self.companies.selected = None;
                }
                self.companies.fulfill();
            }
            Err(err) => self.companies.reject(&err),
        }
    }

    pub fn select_company(&mut self, id: &CompanyId) {
        self.companies.selected = self.companies.list.iter().find(|c| &c.id == id).cloned();
    }
}
