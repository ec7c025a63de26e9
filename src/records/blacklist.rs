use serde::{Deserialize, Serialize};

use super::{FieldMatch, FieldValue, FilterField, Record};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlacklistEntry {
    pub name: String,
    pub company_name: String,
    pub phone_no: String,
    pub order_by: String,
    pub reason: String,
    pub image: Option<String>,
    pub status: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BlacklistField {
    Name,
    CompanyName,
    PhoneNo,
    OrderBy,
    Reason,
    Status,
}

impl FilterField for BlacklistField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::CompanyName,
        Self::PhoneNo,
        Self::OrderBy,
        Self::Reason,
        Self::Status,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::CompanyName => "company_name",
            Self::PhoneNo => "phone_no",
            Self::OrderBy => "order_by",
            Self::Reason => "reason",
            Self::Status => "status",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::CompanyName => "Company",
            Self::PhoneNo => "Phone No",
            Self::OrderBy => "Ordered By",
            Self::Reason => "Reason",
            Self::Status => "Status",
        }
    }

    fn matching(self) -> FieldMatch {
        match self {
            Self::Status => FieldMatch::SubstringOrAll,
            _ => FieldMatch::Substring,
        }
    }
}

impl Record for BlacklistEntry {
    type Field = BlacklistField;
    const LIST: &'static str = "blacklist";

    fn value(&self, field: BlacklistField) -> FieldValue<'_> {
        match field {
            BlacklistField::Name => (&self.name).into(),
            BlacklistField::CompanyName => (&self.company_name).into(),
            BlacklistField::PhoneNo => (&self.phone_no).into(),
            BlacklistField::OrderBy => (&self.order_by).into(),
            BlacklistField::Reason => (&self.reason).into(),
            BlacklistField::Status => (&self.status).into(),
        }
    }
}
