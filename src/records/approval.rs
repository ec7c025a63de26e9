use serde::{Deserialize, Serialize};

use super::{FieldValue, FilterField, Record};

const PENDING: &str = "Pending";

/// Outcome an approver gives a queued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

impl Decision {
    /// Status the request carries afterwards.
    pub fn status(self) -> &'static str {
        match self {
            Decision::Approve => "Approved",
            Decision::Reject => "Rejected",
        }
    }
}

/// A record that waits in an approval queue until decided.
pub trait Approvable: Record {
    fn status(&self) -> &str;

    fn set_status(&mut self, status: &str);

    fn is_pending(&self) -> bool {
        self.status().eq_ignore_ascii_case(PENDING)
    }
}

/// Scheduled appointment waiting for host approval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAppointment {
    pub id: u64,
    pub name: String,
    pub mobile_no: String,
    pub nationality: String,
    pub meeting: String,
    pub date: String,
    pub company: String,
    pub status: String,
    pub unit_name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PendingAppointmentField {
    Name,
    MobileNo,
    Nationality,
    Meeting,
    Date,
    Company,
    Status,
    UnitName,
}

impl FilterField for PendingAppointmentField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::MobileNo,
        Self::Nationality,
        Self::Meeting,
        Self::Date,
        Self::Company,
        Self::Status,
        Self::UnitName,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::MobileNo => "mobile_no",
            Self::Nationality => "nationality",
            Self::Meeting => "meeting",
            Self::Date => "date",
            Self::Company => "company",
            Self::Status => "status",
            Self::UnitName => "unit_name",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::MobileNo => "Mobile No",
            Self::Nationality => "Nationality",
            Self::Meeting => "Meeting",
            Self::Date => "Date",
            Self::Company => "Company",
            Self::Status => "Status",
            Self::UnitName => "Unit",
        }
    }
}

impl Record for PendingAppointment {
    type Field = PendingAppointmentField;
    const LIST: &'static str = "pending-approvals";

    fn value(&self, field: PendingAppointmentField) -> FieldValue<'_> {
        match field {
            PendingAppointmentField::Name => (&self.name).into(),
            PendingAppointmentField::MobileNo => (&self.mobile_no).into(),
            PendingAppointmentField::Nationality => (&self.nationality).into(),
            PendingAppointmentField::Meeting => (&self.meeting).into(),
            PendingAppointmentField::Date => (&self.date).into(),
            PendingAppointmentField::Company => (&self.company).into(),
            PendingAppointmentField::Status => (&self.status).into(),
            PendingAppointmentField::UnitName => (&self.unit_name).into(),
        }
    }

    fn id(&self) -> Option<u64> {
        Some(self.id)
    }

    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl Approvable for PendingAppointment {
    fn status(&self) -> &str {
        &self.status
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Walk-in registration raised at the gate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateRegistration {
    pub id: u64,
    pub visitor_name: String,
    pub mobile_number: String,
    pub meeting: String,
    pub company_name: String,
    pub status: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GateRegistrationField {
    VisitorName,
    MobileNumber,
    Meeting,
    CompanyName,
    Status,
}

impl FilterField for GateRegistrationField {
    const ALL: &'static [Self] = &[
        Self::VisitorName,
        Self::MobileNumber,
        Self::Meeting,
        Self::CompanyName,
        Self::Status,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::VisitorName => "visitor_name",
            Self::MobileNumber => "mobile_number",
            Self::Meeting => "meeting",
            Self::CompanyName => "company_name",
            Self::Status => "status",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::VisitorName => "Visitor Name",
            Self::MobileNumber => "Mobile No",
            Self::Meeting => "Meeting",
            Self::CompanyName => "Company",
            Self::Status => "Status",
        }
    }
}

impl Record for GateRegistration {
    type Field = GateRegistrationField;
    const LIST: &'static str = "gate-approvals";

    fn value(&self, field: GateRegistrationField) -> FieldValue<'_> {
        match field {
            GateRegistrationField::VisitorName => (&self.visitor_name).into(),
            GateRegistrationField::MobileNumber => (&self.mobile_number).into(),
            GateRegistrationField::Meeting => (&self.meeting).into(),
            GateRegistrationField::CompanyName => (&self.company_name).into(),
            GateRegistrationField::Status => (&self.status).into(),
        }
    }

    fn id(&self) -> Option<u64> {
        Some(self.id)
    }
}

impl Approvable for GateRegistration {
    fn status(&self) -> &str {
        &self.status
    }

    fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}
