use serde::{Deserialize, Serialize};

use super::{FieldValue, FilterField, Record};

/// Registered visitor, as listed on the visitor details page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    pub visitor_name: String,
    pub company_name: String,
    pub visitor_designation: String,
    pub phone_no: String,
    pub house_no: String,
    pub area_street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub image: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VisitorField {
    VisitorName,
    CompanyName,
    VisitorDesignation,
    PhoneNo,
    HouseNo,
    AreaStreet,
    City,
    State,
    Pincode,
}

impl FilterField for VisitorField {
    const ALL: &'static [Self] = &[
        Self::VisitorName,
        Self::CompanyName,
        Self::VisitorDesignation,
        Self::PhoneNo,
        Self::HouseNo,
        Self::AreaStreet,
        Self::City,
        Self::State,
        Self::Pincode,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::VisitorName => "visitor_name",
            Self::CompanyName => "company_name",
            Self::VisitorDesignation => "visitor_designation",
            Self::PhoneNo => "phone_no",
            Self::HouseNo => "house_no",
            Self::AreaStreet => "area_street",
            Self::City => "city",
            Self::State => "state",
            Self::Pincode => "pincode",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::VisitorName => "Visitor Name",
            Self::CompanyName => "Company",
            Self::VisitorDesignation => "Designation",
            Self::PhoneNo => "Phone No",
            Self::HouseNo => "House No",
            Self::AreaStreet => "Area/Street",
            Self::City => "City",
            Self::State => "State",
            Self::Pincode => "Pincode",
        }
    }
}

impl Record for Visitor {
    type Field = VisitorField;
    const LIST: &'static str = "visitors";

    fn value(&self, field: VisitorField) -> FieldValue<'_> {
        match field {
            VisitorField::VisitorName => (&self.visitor_name).into(),
            VisitorField::CompanyName => (&self.company_name).into(),
            VisitorField::VisitorDesignation => (&self.visitor_designation).into(),
            VisitorField::PhoneNo => (&self.phone_no).into(),
            VisitorField::HouseNo => (&self.house_no).into(),
            VisitorField::AreaStreet => (&self.area_street).into(),
            VisitorField::City => (&self.city).into(),
            VisitorField::State => (&self.state).into(),
            VisitorField::Pincode => (&self.pincode).into(),
        }
    }
}
