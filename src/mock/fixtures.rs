use super::MockRecord;
use crate::records::{
    Appointment, BlacklistEntry, CheckedInVisitor, Department, GateRegistration,
    PendingAppointment, UnitMember, UserAccount, Visitor,
};

const COMPANIES: &[&str] = &["Microsoft", "Wipro", "TCS", "Infosys", "Google"];
const VISITOR_DESIGNATIONS: &[&str] = &["Manager", "Civilian", "Engineer", "Analyst", "Director"];
const CITIES: &[&str] = &["Hyderabad", "Itanagar", "Mumbai", "Delhi", "Bangalore"];
const STATES: &[&str] = &[
    "TELANGANA",
    "ARUNACHAL PRADESH",
    "MAHARASHTRA",
    "DELHI",
    "KARNATAKA",
];
const APPOINTMENT_STATUSES: &[&str] = &["Pending", "Approved", "Rejected"];
const ORGANIZATION_TYPES: &[&str] = &["Corporate", "Manufacturing", "Services"];
const DEPARTMENT_NAMES: &[&str] = &[
    "Information Technology",
    "Human Resources",
    "Finance",
    "Operations",
    "Marketing",
    "Sales",
    "Research & Development",
    "Quality Assurance",
    "Security",
    "Legal",
    "Customer Support",
    "Product Management",
    "Engineering",
    "Design",
    "Data Analytics",
];
const USER_DEPARTMENTS: &[&str] = &["Information Technology", "Security", "HR"];
const USER_STATUSES: &[&str] = &["Active", "Inactive"];
const UNIT_NAMES: &[&str] = &[
    "Tata Advanced Systems Ltd.",
    "Tata Sikorsky Aerospace Ltd.",
    "Tata Lockheed Martin Aerostructure Ltd.",
    "Tata Boeing Aerospace Ltd.",
    "TATA Center of Excellence (TCOE)",
];
const FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Taylor", "Morgan", "Casey", "Riley", "Jamie", "Avery", "Peyton", "Drew",
];
const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Lee", "Patel", "Brown", "Garcia", "Martinez", "Davis", "Clark", "Lewis",
];
const MAIL_DOMAINS: &[&str] = &["example.com", "mail.com", "test.org", "company.in"];
const PLACEHOLDER_IMAGE: &str = "https://i.scdn.co/image/ab67616d00001e02e27ec71c111b88de91a51600";

fn pick(values: &'static [&'static str], index: usize) -> &'static str {
    values[index % values.len()]
}

// last `n` digits of `value`, zero padded
fn tail_digits(value: usize, n: u32) -> String {
    let modulus = 10usize.pow(n);
    format!("{:0width$}", value % modulus, width = n as usize)
}

impl MockRecord for Visitor {
    const DEFAULT_COUNT: usize = 200;

    fn mock(i: usize) -> Self {
        Visitor {
            visitor_name: format!("Visitor {i}"),
            company_name: pick(COMPANIES, i).to_string(),
            visitor_designation: pick(VISITOR_DESIGNATIONS, i).to_string(),
            phone_no: format!("98765{}", tail_digits(10_000 + i, 5)),
            house_no: format!("{}-{}", i % 100 + 1, i % 10),
            area_street: format!("Area {}", i % 20),
            city: pick(CITIES, i).to_string(),
            state: pick(STATES, i).to_string(),
            pincode: format!("50{}", tail_digits(100 + i, 3)),
            image: Some(PLACEHOLDER_IMAGE.to_string()),
        }
    }
}

impl MockRecord for Appointment {
    const DEFAULT_COUNT: usize = 200;

    fn mock(i: usize) -> Self {
        Appointment {
            appointment_id: format!("ID{}", 1000 + i),
            visitor_name: format!("Visitor {i}"),
            date: "2023-11-15".to_string(),
            time: "10:30".to_string(),
            meeting: format!("Employee {i}"),
            user_name: format!("user{i}"),
            mobile_no: format!("123456789{}", i % 10),
            unit_name: format!("Unit {}", i % 5),
            status: pick(APPOINTMENT_STATUSES, i).to_string(),
        }
    }
}

impl MockRecord for BlacklistEntry {
    const DEFAULT_COUNT: usize = 75;

    fn mock(i: usize) -> Self {
        BlacklistEntry {
            name: format!("Blacklisted Person {i}"),
            company_name: format!("Bad Company {}", i % 10),
            phone_no: format!("555-010-{i}"),
            order_by: format!("Admin {}", i % 5),
            reason: format!("Reason #{i}"),
            image: Some(PLACEHOLDER_IMAGE.to_string()),
            status: if i % 2 == 0 { "Active" } else { "Inactive" }.to_string(),
        }
    }
}

impl MockRecord for Department {
    const DEFAULT_COUNT: usize = 25;

    fn mock(i: usize) -> Self {
        let name = pick(DEPARTMENT_NAMES, i);
        Department {
            id: i as u64,
            organization_type: pick(ORGANIZATION_TYPES, i).to_string(),
            department_name: name.to_string(),
            description: format!(
                "This is the {name} department responsible for various organizational functions."
            ),
            created_at: format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
        }
    }
}

impl MockRecord for UserAccount {
    const DEFAULT_COUNT: usize = 2600;

    fn mock(i: usize) -> Self {
        UserAccount {
            id: i as u64,
            user_name: format!("User {i}"),
            user_login: format!("user{i}"),
            designation: "HOD".to_string(),
            email_id: format!("user{i}@example.com"),
            department: pick(USER_DEPARTMENTS, i).to_string(),
            date_of_creation: "2023-01-01".to_string(),
            unit_name: UNIT_NAMES[0].to_string(),
            status: pick(USER_STATUSES, i).to_string(),
            role: "HOD".to_string(),
        }
    }
}

impl MockRecord for UnitMember {
    const DEFAULT_COUNT: usize = 15;

    fn mock(i: usize) -> Self {
        let first = pick(FIRST_NAMES, i);
        let last = pick(LAST_NAMES, i / FIRST_NAMES.len() + i * 3);
        UnitMember {
            id: i as u64,
            unit_name: pick(UNIT_NAMES, i).to_string(),
            name: format!("{first} {last}"),
            designation: if i % 2 == 0 { "admin" } else { "customsofficer" }.to_string(),
            email_addresses: format!(
                "{}.{}{i}@{}",
                first.to_lowercase(),
                last.to_lowercase(),
                pick(MAIL_DOMAINS, i)
            ),
            mobile_number: format!("9{}", tail_digits(i * 7_919_113, 9)),
            // roughly one in five inactive
            active: i % 5 != 0,
        }
    }
}

impl MockRecord for CheckedInVisitor {
    const DEFAULT_COUNT: usize = 200;

    fn mock(i: usize) -> Self {
        CheckedInVisitor {
            visitor_id: format!("V{}", 1000 + i),
            visitor_name: format!("Visitor {i}"),
            from: format!("City {}", i % 10),
            in_date_time: format!("2023-11-15 10:{}", tail_digits(i % 60, 2)),
            meeting: format!("Employee {}", i % 20),
            phone_no: format!("98765432{}", tail_digits(i, 2)),
            purpose_of_visit: format!("Purpose {}", i % 5),
        }
    }
}

impl MockRecord for PendingAppointment {
    const DEFAULT_COUNT: usize = 12;

    fn mock(i: usize) -> Self {
        PendingAppointment {
            id: i as u64,
            name: format!("Visitor {i}"),
            mobile_no: format!("90000000{i}"),
            nationality: "Indian".to_string(),
            meeting: format!("Employee {i}"),
            date: "2024-06-01".to_string(),
            company: format!("Company {i}"),
            status: "Pending".to_string(),
            unit_name: format!("Unit {}", (i + 2) % 3 + 1),
        }
    }
}

impl MockRecord for GateRegistration {
    const DEFAULT_COUNT: usize = 7;

    fn mock(i: usize) -> Self {
        GateRegistration {
            id: i as u64,
            visitor_name: format!("GateVisitor {i}"),
            mobile_number: format!("80000000{i}"),
            meeting: format!("Employee {i}"),
            company_name: format!("Company {i}"),
            status: "Pending".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visitor_rows_follow_index() {
        let v = Visitor::mock(7);
        assert_eq!(v.visitor_name, "Visitor 7");
        assert_eq!(v.phone_no, "9876510007");
        assert_eq!(v.pincode, "50107");
        assert_eq!(v.city, "Mumbai");
    }

    #[test]
    fn mock_many_is_one_based() {
        let rows = Appointment::mock_many(3);
        let ids: Vec<_> = rows.iter().map(|a| a.appointment_id.as_str()).collect();
        assert_eq!(ids, vec!["ID1001", "ID1002", "ID1003"]);
    }

    #[test]
    fn department_dates_are_iso() {
        for d in Department::mock_many(25) {
            assert!(crate::filter::is_iso_date(&d.created_at), "{}", d.created_at);
        }
    }

    #[test]
    fn unit_members_have_ten_digit_numbers() {
        for m in UnitMember::mock_many(15) {
            assert_eq!(m.mobile_number.len(), 10);
        }
        assert_eq!(UnitMember::mock_many(15).iter().filter(|m| !m.active).count(), 3);
    }

    #[test]
    fn checked_in_rows_follow_index() {
        let v = CheckedInVisitor::mock(65);
        assert_eq!(v.visitor_id, "V1065");
        assert_eq!(v.from, "City 5");
        assert_eq!(v.in_date_time, "2023-11-15 10:05");
        assert_eq!(v.phone_no, "9876543265");
        assert_eq!(CheckedInVisitor::mock(100).phone_no, "9876543200");
    }

    #[test]
    fn approval_queues_start_pending() {
        let units: Vec<_> = PendingAppointment::mock_many(4)
            .into_iter()
            .map(|p| p.unit_name)
            .collect();
        assert_eq!(units, vec!["Unit 1", "Unit 2", "Unit 3", "Unit 1"]);
        assert!(GateRegistration::mock_many(7).iter().all(|g| g.status == "Pending"));
    }
}
