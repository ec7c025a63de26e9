use serde::{Deserialize, Serialize};

use super::{FieldValue, FilterField, Record};

/// Login account managed from the admin pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: u64,
    pub user_name: String,
    pub user_login: String,
    pub designation: String,
    pub email_id: String,
    pub department: String,
    pub date_of_creation: String,
    pub unit_name: String,
    pub status: String,
    pub role: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UserAccountField {
    UserName,
    UserLogin,
    Designation,
    EmailId,
    Department,
    DateOfCreation,
    UnitName,
    Status,
}

impl FilterField for UserAccountField {
    const ALL: &'static [Self] = &[
        Self::UserName,
        Self::UserLogin,
        Self::Designation,
        Self::EmailId,
        Self::Department,
        Self::DateOfCreation,
        Self::UnitName,
        Self::Status,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::UserName => "user_name",
            Self::UserLogin => "user_login",
            Self::Designation => "designation",
            Self::EmailId => "email_id",
            Self::Department => "department",
            Self::DateOfCreation => "date_of_creation",
            Self::UnitName => "unit_name",
            Self::Status => "status",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::UserName => "User Name",
            Self::UserLogin => "Login",
            Self::Designation => "Designation",
            Self::EmailId => "Email",
            Self::Department => "Department",
            Self::DateOfCreation => "Created",
            Self::UnitName => "Unit",
            Self::Status => "Status",
        }
    }
}

impl Record for UserAccount {
    type Field = UserAccountField;
    const LIST: &'static str = "users";

    fn value(&self, field: UserAccountField) -> FieldValue<'_> {
        match field {
            UserAccountField::UserName => (&self.user_name).into(),
            UserAccountField::UserLogin => (&self.user_login).into(),
            UserAccountField::Designation => (&self.designation).into(),
            UserAccountField::EmailId => (&self.email_id).into(),
            UserAccountField::Department => (&self.department).into(),
            UserAccountField::DateOfCreation => (&self.date_of_creation).into(),
            UserAccountField::UnitName => (&self.unit_name).into(),
            UserAccountField::Status => (&self.status).into(),
        }
    }

    fn id(&self) -> Option<u64> {
        Some(self.id)
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date_of_creation)
    }
}
