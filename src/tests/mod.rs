use std::time::Duration;

use tokio::time::Instant;

use crate::controller::ListController;
use crate::filter::FilterCriteria;
use crate::mock::{MockBackend, MockRecord};
use crate::pagination::PageToken;
use crate::records::{Appointment, AppointmentField, UserAccount, UserAccountField, Visitor};
use crate::store::RecordStore;

#[test]
fn pending_appointments_fit_on_one_page() {
    let mut c = ListController::new(RecordStore::new(Appointment::mock_many(12)), 5).unwrap();
    assert_eq!(c.total_pages(), 3);

    c.set_filter(FilterCriteria::new().with(AppointmentField::Status, "Pending"));
    assert_eq!(c.total_pages(), 1);
    let page = c.derived_page();
    assert_eq!(page.len(), 4);
    assert!(page.iter().all(|a| a.status == "Pending"));
}

#[test]
fn narrowing_filter_from_page_three_resets_to_first_page() {
    let mut c = ListController::new(RecordStore::new(Appointment::mock_many(12)), 5).unwrap();
    assert!(c.goto_page(3));
    c.set_filter(FilterCriteria::new().with(AppointmentField::Status, "pending"));
    assert_eq!(c.total_pages(), 1);
    assert_eq!(c.current_page(), 1);
}

#[test]
fn goto_page_outside_bounds_is_a_no_op() {
    let mut c = ListController::new(RecordStore::new(Appointment::mock_many(12)), 5).unwrap();
    assert!(c.goto_page(2));
    assert!(!c.goto_page(0));
    assert!(!c.goto_page(c.total_pages() + 1));
    assert_eq!(c.current_page(), 2);
}

#[test]
fn same_filter_twice_yields_same_page() {
    let mut c = ListController::new(RecordStore::new(Visitor::mock_many(200)), 10).unwrap();
    let criteria = FilterCriteria::new().with(crate::records::VisitorField::City, "mum");
    c.set_filter(criteria.clone());
    let first: Vec<Visitor> = c.derived_page().into_iter().cloned().collect();
    c.set_filter(criteria);
    let second: Vec<Visitor> = c.derived_page().into_iter().cloned().collect();
    assert_eq!(first, second);
    assert_eq!(c.filtered_count(), 40);
}

#[test]
fn empty_criteria_keep_every_record() {
    let records = Visitor::mock_many(57);
    let mut c = ListController::new(RecordStore::default(), 10).unwrap();
    c.set_source(records);
    c.set_filter(FilterCriteria::new());
    assert_eq!(c.filtered_count(), 57);
    assert_eq!(c.total_pages(), 6);
}

#[test]
fn user_list_pager_centers_on_current_page() {
    let mut c = ListController::new(RecordStore::new(UserAccount::mock_many(200)), 10).unwrap();
    assert!(c.goto_page(10));
    assert_eq!(
        c.pages(5),
        vec![
            PageToken::Page(1),
            PageToken::Ellipsis,
            PageToken::Page(8),
            PageToken::Page(9),
            PageToken::Page(10),
            PageToken::Page(11),
            PageToken::Page(12),
            PageToken::Ellipsis,
            PageToken::Page(20),
        ]
    );
}

#[test]
fn admin_edits_flow_through_the_view() {
    let mut c = ListController::new(RecordStore::new(UserAccount::mock_many(30)), 10).unwrap();
    c.set_field(UserAccountField::Status, "inactive");
    assert_eq!(c.filtered_count(), 15);

    assert!(c.update(2, |u| u.status = "Inactive".to_string()));
    assert_eq!(c.filtered_count(), 16);

    assert!(c.remove(1));
    assert!(!c.remove(1));
    assert_eq!(c.filtered_count(), 15);

    let mut fresh = UserAccount::mock(31);
    fresh.status = "Inactive".to_string();
    c.insert(fresh);
    assert_eq!(c.derived_page()[0].id, 31);
}

#[tokio::test]
async fn mock_backend_resolves_after_fixed_delay() {
    let backend = MockBackend::new(Duration::from_millis(20));
    let started = Instant::now();
    let visitors = backend.fetch::<Visitor>(None).await;
    assert!(started.elapsed() >= Duration::from_millis(20));
    assert_eq!(visitors.len(), Visitor::DEFAULT_COUNT);
}

#[tokio::test]
async fn mock_backend_honors_requested_count() {
    let backend = MockBackend::new(Duration::ZERO);
    let appointments = backend.fetch::<Appointment>(Some(12)).await;
    assert_eq!(appointments.len(), 12);
    assert_eq!(appointments[11].appointment_id, "ID1012");
}
