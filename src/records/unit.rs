use serde::{Deserialize, Serialize};

use super::{FieldMatch, FieldValue, FilterField, Record};

/// Staff member listed on the unit-wise details page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitMember {
    pub id: u64,
    pub unit_name: String,
    pub name: String,
    pub designation: String,
    pub email_addresses: String,
    pub mobile_number: String,
    pub active: bool,
}

impl UnitMember {
    pub fn status_label(&self) -> &'static str {
        if self.active {
            "Active"
        } else {
            "Inactive"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitMemberField {
    UnitName,
    Name,
    Designation,
    EmailAddresses,
    MobileNumber,
    Status,
}

impl FilterField for UnitMemberField {
    const ALL: &'static [Self] = &[
        Self::UnitName,
        Self::Name,
        Self::Designation,
        Self::EmailAddresses,
        Self::MobileNumber,
        Self::Status,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::UnitName => "unit_name",
            Self::Name => "name",
            Self::Designation => "designation",
            Self::EmailAddresses => "email_addresses",
            Self::MobileNumber => "mobile_number",
            Self::Status => "status",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::UnitName => "Unit",
            Self::Name => "Name",
            Self::Designation => "Designation",
            Self::EmailAddresses => "Email",
            Self::MobileNumber => "Mobile No",
            Self::Status => "Status",
        }
    }

    fn matching(self) -> FieldMatch {
        match self {
            Self::Status => FieldMatch::Choice,
            _ => FieldMatch::Substring,
        }
    }
}

impl Record for UnitMember {
    type Field = UnitMemberField;
    const LIST: &'static str = "units";

    fn value(&self, field: UnitMemberField) -> FieldValue<'_> {
        match field {
            UnitMemberField::UnitName => (&self.unit_name).into(),
            UnitMemberField::Name => (&self.name).into(),
            UnitMemberField::Designation => (&self.designation).into(),
            UnitMemberField::EmailAddresses => (&self.email_addresses).into(),
            UnitMemberField::MobileNumber => (&self.mobile_number).into(),
            UnitMemberField::Status => FieldValue::Text(self.status_label()),
        }
    }

    fn id(&self) -> Option<u64> {
        Some(self.id)
    }
}
