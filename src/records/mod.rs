mod appointment;
mod approval;
mod blacklist;
mod checked_in;
mod department;
mod unit;
mod user;
mod visitor;

use std::borrow::Cow;
use std::fmt::Debug;
use std::hash::Hash;

pub use appointment::{Appointment, AppointmentField};
pub use approval::{
    Approvable, Decision, GateRegistration, GateRegistrationField, PendingAppointment,
    PendingAppointmentField,
};
pub use blacklist::{BlacklistEntry, BlacklistField};
pub use checked_in::{CheckedInField, CheckedInVisitor};
pub use department::{Department, DepartmentField};
pub use unit::{UnitMember, UnitMemberField};
pub use user::{UserAccount, UserAccountField};
pub use visitor::{Visitor, VisitorField};

/// How a filter pattern is compared with a field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldMatch {
    /// Case-insensitive substring.
    Substring,
    /// Substring, except that "All" matches everything.
    SubstringOrAll,
    /// Select control: "All" matches everything, anything else must equal the value.
    Choice,
}

/// Scalar value of a record field as it would be displayed.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
    Flag(bool),
    Empty,
}

impl<'a> FieldValue<'a> {
    pub fn display(&self) -> Cow<'a, str> {
        match self {
            FieldValue::Text(s) => Cow::Borrowed(*s),
            FieldValue::Number(n) => Cow::Owned(n.to_string()),
            FieldValue::Flag(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            FieldValue::Empty => Cow::Borrowed(""),
        }
    }

    pub fn to_lowercase(&self) -> String {
        self.display().to_lowercase()
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        FieldValue::Text(value.as_str())
    }
}

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Empty)
    }
}

/// The closed set of filterable columns of one record type.
pub trait FilterField: Copy + Eq + Ord + Hash + Debug + 'static {
    const ALL: &'static [Self];

    fn key(self) -> &'static str;

    fn label(self) -> &'static str;

    fn matching(self) -> FieldMatch {
        FieldMatch::Substring
    }

    fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.key().eq_ignore_ascii_case(key))
    }

    fn keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.key()).collect()
    }
}

/// A row shown in one of the list views.
pub trait Record {
    type Field: FilterField;

    /// List name used in messages and output.
    const LIST: &'static str;

    fn value(&self, field: Self::Field) -> FieldValue<'_>;

    /// Correlation key for edit and delete.
    fn id(&self) -> Option<u64> {
        None
    }

    /// ISO `YYYY-MM-DD` date the list's date-range filter applies to.
    fn date(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_value_display() {
        assert_eq!(FieldValue::Text("Visitor 1").display(), "Visitor 1");
        assert_eq!(FieldValue::Number(42).display(), "42");
        assert_eq!(FieldValue::Flag(true).display(), "true");
        assert_eq!(FieldValue::Empty.to_lowercase(), "");
        assert_eq!(FieldValue::from(None::<&str>), FieldValue::Empty);
    }

    #[test]
    fn parse_field_key_ignores_case_and_whitespace() {
        assert_eq!(VisitorField::parse(" City "), Some(VisitorField::City));
        assert_eq!(VisitorField::parse("visitor_name"), Some(VisitorField::VisitorName));
        assert_eq!(VisitorField::parse("salary"), None);
    }

    #[test]
    fn every_field_key_round_trips() {
        fn check<F: FilterField>() {
            for f in F::ALL {
                assert_eq!(F::parse(f.key()), Some(*f));
            }
        }
        check::<VisitorField>();
        check::<AppointmentField>();
        check::<BlacklistField>();
        check::<DepartmentField>();
        check::<UserAccountField>();
        check::<UnitMemberField>();
        check::<CheckedInField>();
        check::<PendingAppointmentField>();
        check::<GateRegistrationField>();
    }
}
