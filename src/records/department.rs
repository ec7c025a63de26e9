use serde::{Deserialize, Serialize};

use super::{FieldValue, FilterField, Record};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: u64,
    pub organization_type: String,
    pub department_name: String,
    pub description: String,
    pub created_at: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DepartmentField {
    OrganizationType,
    DepartmentName,
    Description,
    CreatedAt,
}

impl FilterField for DepartmentField {
    const ALL: &'static [Self] = &[
        Self::OrganizationType,
        Self::DepartmentName,
        Self::Description,
        Self::CreatedAt,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::OrganizationType => "organization_type",
            Self::DepartmentName => "department_name",
            Self::Description => "description",
            Self::CreatedAt => "created_at",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::OrganizationType => "Organization Type",
            Self::DepartmentName => "Department Name",
            Self::Description => "Description",
            Self::CreatedAt => "Created Date",
        }
    }
}

impl Record for Department {
    type Field = DepartmentField;
    const LIST: &'static str = "departments";

    fn value(&self, field: DepartmentField) -> FieldValue<'_> {
        match field {
            DepartmentField::OrganizationType => (&self.organization_type).into(),
            DepartmentField::DepartmentName => (&self.department_name).into(),
            DepartmentField::Description => (&self.description).into(),
            DepartmentField::CreatedAt => (&self.created_at).into(),
        }
    }

    fn id(&self) -> Option<u64> {
        Some(self.id)
    }

    fn date(&self) -> Option<&str> {
        Some(&self.created_at)
    }
}
