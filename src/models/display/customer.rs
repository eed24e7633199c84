//! Customer display model

use tabled::Tabled;

use super::{Describe, Row};
use crate::client::models::Customer;
use crate::output::formatters::{format_date, or_na};

/// Customer display model for table output.
#[derive(Debug, Clone, Tabled)]
pub struct CustomerDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,

    #[tabled(rename = "KIND")]
    pub kind: String,

    #[tabled(rename = "SINCE")]
    pub since: String,
}

impl From<&Customer> for CustomerDisplay {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            name: or_na(customer.name.as_deref()),
            email: or_na(customer.email.as_deref()),
            phone: or_na(customer.phone.as_deref()),
            kind: or_na(customer.kind.as_deref()),
            since: format_date(customer.created_at.as_deref()),
        }
    }
}

impl Row for Customer {
    type Display = CustomerDisplay;

    fn row(&self) -> CustomerDisplay {
        CustomerDisplay::from(self)
    }
}

impl Describe for Customer {
    fn describe(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id.to_string()),
            ("Name", or_na(self.name.as_deref())),
            ("Email", or_na(self.email.as_deref())),
            ("Phone", or_na(self.phone.as_deref())),
            ("CPF", or_na(self.cpf.as_deref())),
            ("Kind", or_na(self.kind.as_deref())),
            ("Since", format_date(self.created_at.as_deref())),
        ]
    }
}
