use serde::{Deserialize, Serialize};

use super::{FieldValue, FilterField, Record};

/// Visitor currently on site, as listed on the checked-in page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedInVisitor {
    pub visitor_id: String,
    pub visitor_name: String,
    pub from: String,
    /// `YYYY-MM-DD HH:MM`
    pub in_date_time: String,
    pub meeting: String,
    pub phone_no: String,
    pub purpose_of_visit: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckedInField {
    VisitorId,
    VisitorName,
    From,
    InDateTime,
    Meeting,
    PhoneNo,
    PurposeOfVisit,
}

impl FilterField for CheckedInField {
    const ALL: &'static [Self] = &[
        Self::VisitorId,
        Self::VisitorName,
        Self::From,
        Self::InDateTime,
        Self::Meeting,
        Self::PhoneNo,
        Self::PurposeOfVisit,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::VisitorId => "visitor_id",
            Self::VisitorName => "visitor_name",
            Self::From => "from",
            Self::InDateTime => "in_date_time",
            Self::Meeting => "meeting",
            Self::PhoneNo => "phone_no",
            Self::PurposeOfVisit => "purpose_of_visit",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::VisitorId => "Visitor ID",
            Self::VisitorName => "Visitor Name",
            Self::From => "From",
            Self::InDateTime => "In Date/Time",
            Self::Meeting => "Meeting",
            Self::PhoneNo => "Phone No",
            Self::PurposeOfVisit => "Purpose",
        }
    }
}

impl Record for CheckedInVisitor {
    type Field = CheckedInField;
    const LIST: &'static str = "checked-in";

    fn value(&self, field: CheckedInField) -> FieldValue<'_> {
        match field {
            CheckedInField::VisitorId => (&self.visitor_id).into(),
            CheckedInField::VisitorName => (&self.visitor_name).into(),
            CheckedInField::From => (&self.from).into(),
            CheckedInField::InDateTime => (&self.in_date_time).into(),
            CheckedInField::Meeting => (&self.meeting).into(),
            CheckedInField::PhoneNo => (&self.phone_no).into(),
            CheckedInField::PurposeOfVisit => (&self.purpose_of_visit).into(),
        }
    }

    /// Day part of the check-in timestamp.
    fn date(&self) -> Option<&str> {
        self.in_date_time.get(..10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_is_the_check_in_day() {
        let v = CheckedInVisitor {
            visitor_id: "V1001".to_string(),
            visitor_name: "Visitor 1".to_string(),
            from: "City 1".to_string(),
            in_date_time: "2023-11-15 10:01".to_string(),
            meeting: "Employee 1".to_string(),
            phone_no: "9876543201".to_string(),
            purpose_of_visit: "Purpose 1".to_string(),
        };
        assert_eq!(v.date(), Some("2023-11-15"));

        let odd = CheckedInVisitor {
            in_date_time: "today".to_string(),
            ..v
        };
        assert_eq!(odd.date(), None);
    }
}
