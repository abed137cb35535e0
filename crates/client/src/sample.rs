//! Built-in sample company directory.
//!
//! Used only as a company-list fallback when the general API is
//! unreachable, to keep the console usable offline; also seeds the
//! in-memory backend for tests and demos.

use crate::types::{Company, CompanyStatus};

/// The placeholder company directory (one entry deliberately DELETED).
pub fn sample_companies() -> Vec<Company> {
    vec![
        company(
            "1",
            "Tech Solutions Ltd",
            "123 Tech Street, Silicon Valley, CA 94000",
            "+1 (555) 123-4567",
            "contact@techsolutions.com",
            "https://techsolutions.com",
            CompanyStatus::Active,
        ),
        company(
            "2",
            "Global Logistics Corp",
            "456 Logistics Ave, New York, NY 10001",
            "+1 (555) 987-6543",
            "info@globallogistics.com",
            "https://globallogistics.com",
            CompanyStatus::Active,
        ),
        company(
            "3",
            "Creative Design Studio",
            "789 Design Blvd, Los Angeles, CA 90210",
            "+1 (555) 456-7890",
            "hello@creativedesign.com",
            "https://creativedesign.com",
            CompanyStatus::Active,
        ),
        company(
            "4",
            "Financial Services Inc",
            "321 Finance Way, Boston, MA 02101",
            "+1 (555) 321-9876",
            "support@financialservices.com",
            "https://financialservices.com",
            CompanyStatus::Active,
        ),
        company(
            "5",
            "Old Company Name",
            "999 Obsolete Road, Nowhere, TX 00000",
            "+1 (555) 000-0000",
            "old@company.com",
            "https://oldcompany.com",
            CompanyStatus::Deleted,
        ),
    ]
}

fn company(
    id: &str,
    name: &str,
    address: &str,
    phone: &str,
    email: &str,
    website: &str,
    status: CompanyStatus,
) -> Company {
    Company {
        id: id.into(),
        name: name.to_string(),
        address: address.to_string(),
        phone: phone.to_string(),
        email: Some(email.to_string()),
        website: Some(website.to_string()),
        status,
        industry: None,
        description: None,
        logo_url: None,
    }
}
