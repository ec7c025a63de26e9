use serde::{Deserialize, Serialize};

use super::{FieldValue, FilterField, Record};

/// Scheduled visit awaiting or past approval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: String,
    pub visitor_name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    pub time: String,
    pub meeting: String,
    pub user_name: String,
    pub mobile_no: String,
    pub unit_name: String,
    pub status: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppointmentField {
    AppointmentId,
    VisitorName,
    Date,
    Time,
    Meeting,
    UserName,
    MobileNo,
    UnitName,
    Status,
}

impl FilterField for AppointmentField {
    const ALL: &'static [Self] = &[
        Self::AppointmentId,
        Self::VisitorName,
        Self::Date,
        Self::Time,
        Self::Meeting,
        Self::UserName,
        Self::MobileNo,
        Self::UnitName,
        Self::Status,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::AppointmentId => "appointment_id",
            Self::VisitorName => "visitor_name",
            Self::Date => "date",
            Self::Time => "time",
            Self::Meeting => "meeting",
            Self::UserName => "user_name",
            Self::MobileNo => "mobile_no",
            Self::UnitName => "unit_name",
            Self::Status => "status",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::AppointmentId => "Appointment ID",
            Self::VisitorName => "Visitor Name",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Meeting => "Meeting",
            Self::UserName => "User Name",
            Self::MobileNo => "Mobile No",
            Self::UnitName => "Unit",
            Self::Status => "Status",
        }
    }
}

impl Record for Appointment {
    type Field = AppointmentField;
    const LIST: &'static str = "appointments";

    fn value(&self, field: AppointmentField) -> FieldValue<'_> {
        match field {
            AppointmentField::AppointmentId => (&self.appointment_id).into(),
            AppointmentField::VisitorName => (&self.visitor_name).into(),
            AppointmentField::Date => (&self.date).into(),
            AppointmentField::Time => (&self.time).into(),
            AppointmentField::Meeting => (&self.meeting).into(),
            AppointmentField::UserName => (&self.user_name).into(),
            AppointmentField::MobileNo => (&self.mobile_no).into(),
            AppointmentField::UnitName => (&self.unit_name).into(),
            AppointmentField::Status => (&self.status).into(),
        }
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }
}
