use crate::error::ListError;
use crate::filter::{DateRange, FilterCriteria};
use crate::pagination::{self, PageState, PageToken};
use crate::records::{Approvable, Decision, Record};
use crate::store::RecordStore;

/// Filtered, paginated view over one list's records.
///
/// Every mutation re-derives the filtered set before returning, so reads
/// always see a view consistent with the current source, criteria and page.
#[derive(Clone, Debug)]
pub struct ListController<R: Record> {
    store: RecordStore<R>,
    criteria: FilterCriteria<R::Field>,
    date_range: DateRange,
    // indices into the store, in source order
    filtered: Vec<usize>,
    current_page: usize,
    items_per_page: usize,
}

impl<R: Record> ListController<R> {
    pub fn new(store: RecordStore<R>, items_per_page: usize) -> Result<Self, ListError> {
        if items_per_page == 0 {
            return Err(ListError::ZeroItemsPerPage);
        }
        let mut controller = Self {
            store,
            criteria: FilterCriteria::new(),
            date_range: DateRange::unbounded(),
            filtered: Vec::new(),
            current_page: 1,
            items_per_page,
        };
        controller.recompute();
        Ok(controller)
    }

    pub fn store(&self) -> &RecordStore<R> {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria<R::Field> {
        &self.criteria
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len(), self.items_per_page)
    }

    pub fn page_state(&self) -> PageState {
        PageState {
            current_page: self.current_page,
            items_per_page: self.items_per_page,
            total_items: self.filtered.len(),
        }
    }

    /// Replaces the record set. The page is kept unless it no longer exists.
    pub fn set_source(&mut self, records: Vec<R>) {
        self.store.replace(records);
        self.recompute();
        if self.current_page > self.total_pages() {
            self.current_page = 1;
        }
    }

    pub fn set_filter(&mut self, criteria: FilterCriteria<R::Field>) {
        self.criteria = criteria;
        self.refilter();
    }

    pub fn set_field(&mut self, field: R::Field, pattern: impl Into<String>) {
        self.criteria.set(field, pattern);
        self.refilter();
    }

    pub fn clear_filter(&mut self, field: R::Field) {
        self.criteria.clear(field);
        self.refilter();
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.date_range = range;
        self.refilter();
    }

    pub fn set_items_per_page(&mut self, items_per_page: usize) -> Result<(), ListError> {
        if items_per_page == 0 {
            return Err(ListError::ZeroItemsPerPage);
        }
        self.items_per_page = items_per_page;
        self.current_page = 1;
        Ok(())
    }

    /// Moves to `page` if it exists. Out-of-range requests are ignored.
    pub fn goto_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
            true
        } else {
            false
        }
    }

    pub fn next_page(&mut self) -> bool {
        self.goto_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        match self.current_page.checked_sub(1) {
            Some(page) => self.goto_page(page),
            None => false,
        }
    }

    pub fn filtered(&self) -> impl Iterator<Item = &R> + '_ {
        let records = self.store.records();
        self.filtered.iter().map(move |&i| &records[i])
    }

    pub fn derived_page(&self) -> Vec<&R> {
        let (start, end) = self.page_state().bounds();
        let records = self.store.records();
        self.filtered[start..end].iter().map(|&i| &records[i]).collect()
    }

    pub fn pages(&self, max_pages: usize) -> Vec<PageToken> {
        pagination::pagination_pages(self.current_page, self.total_pages(), max_pages)
    }

    /// Adds a record at the top of the list.
    pub fn insert(&mut self, record: R) {
        self.store.prepend(record);
        self.recompute();
    }

    pub fn update<E>(&mut self, id: u64, edit: E) -> bool
    where
        E: FnOnce(&mut R),
    {
        let found = self.store.update_by_id(id, edit);
        if found {
            self.recompute();
            self.settle_page();
        }
        found
    }

    pub fn remove(&mut self, id: u64) -> bool {
        self.remove_where(|r| r.id() == Some(id)) > 0
    }

    /// Deletes matching records. If the current page empties, steps back to
    /// the last page that still has rows.
    pub fn remove_where<P>(&mut self, mut pred: P) -> usize
    where
        P: FnMut(&R) -> bool,
    {
        let removed = self.store.retain(|r| !pred(r));
        if removed > 0 {
            self.recompute();
            self.settle_page();
        }
        removed
    }

    fn refilter(&mut self) {
        self.recompute();
        self.current_page = 1;
    }

    fn settle_page(&mut self) {
        let total = self.total_pages();
        if self.current_page > total {
            self.current_page = total.max(1);
        }
    }

    fn recompute(&mut self) {
        let criteria = &self.criteria;
        let range = &self.date_range;
        self.filtered = self
            .store
            .records()
            .iter()
            .enumerate()
            .filter(|(_, r)| range.contains(r.date()) && criteria.matches(*r))
            .map(|(i, _)| i)
            .collect();
    }
}

impl<R: Approvable> ListController<R> {
    /// Approves or rejects a queued request. Only pending requests can be decided.
    pub fn decide(&mut self, id: u64, decision: Decision) -> Result<(), ListError> {
        let record = self
            .store
            .find_by_id(id)
            .ok_or(ListError::RecordNotFound { list: R::LIST, id })?;
        if !record.is_pending() {
            return Err(ListError::AlreadyDecided {
                list: R::LIST,
                id,
                status: record.status().to_string(),
            });
        }
        self.update(id, |r| r.set_status(decision.status()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRecord;
    use crate::records::{
        Appointment, AppointmentField, BlacklistEntry, BlacklistField, UnitMember, UnitMemberField,
        GateRegistration, PendingAppointment, PendingAppointmentField, UserAccount,
        UserAccountField,
    };

    fn appointments(n: usize) -> Vec<Appointment> {
        Appointment::mock_many(n)
    }

    fn controller(n: usize, per_page: usize) -> ListController<Appointment> {
        ListController::new(RecordStore::new(appointments(n)), per_page).unwrap()
    }

    #[test]
    fn rejects_zero_items_per_page() {
        let err = ListController::new(RecordStore::new(appointments(3)), 0).unwrap_err();
        assert_eq!(err, ListError::ZeroItemsPerPage);

        let mut c = controller(3, 2);
        assert_eq!(c.set_items_per_page(0), Err(ListError::ZeroItemsPerPage));
        assert_eq!(c.items_per_page(), 2);
    }

    #[test]
    fn empty_source_has_no_pages() {
        let c = controller(0, 10);
        assert_eq!(c.total_pages(), 0);
        assert!(c.derived_page().is_empty());
        assert!(c.pages(5).is_empty());
        assert_eq!(c.current_page(), 1);
    }

    #[test]
    fn derived_page_slices_filtered_set() {
        let mut c = controller(23, 10);
        assert_eq!(c.total_pages(), 3);
        assert_eq!(c.derived_page().len(), 10);
        assert!(c.goto_page(3));
        let last = c.derived_page();
        assert_eq!(last.len(), 3);
        assert_eq!(last[0].appointment_id, "ID1021");
    }

    #[test]
    fn goto_page_ignores_out_of_range() {
        let mut c = controller(23, 10);
        assert!(c.goto_page(2));
        assert!(!c.goto_page(0));
        assert!(!c.goto_page(4));
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn next_and_previous_stop_at_edges() {
        let mut c = controller(12, 5);
        assert!(!c.previous_page());
        assert!(c.next_page());
        assert!(c.next_page());
        assert!(!c.next_page());
        assert_eq!(c.current_page(), 3);
        assert!(c.previous_page());
        assert_eq!(c.current_page(), 2);
    }

    #[test]
    fn filter_change_resets_to_first_page() {
        let mut c = controller(40, 5);
        assert!(c.goto_page(3));
        c.set_field(AppointmentField::VisitorName, "visitor 1");
        assert_eq!(c.current_page(), 1);
        // Visitor 1 and Visitor 10..19
        assert_eq!(c.filtered_count(), 11);

        c.clear_filter(AppointmentField::VisitorName);
        assert_eq!(c.filtered_count(), 40);
    }

    #[test]
    fn date_fields_filter_as_substrings() {
        let mut c = controller(20, 5);
        c.set_field(AppointmentField::Date, "2023-11");
        assert_eq!(c.filtered_count(), 20);
        c.set_field(AppointmentField::Date, "2024");
        assert_eq!(c.filtered_count(), 0);
    }

    #[test]
    fn date_range_narrows_and_resets_page() {
        let mut records = appointments(10);
        for (i, r) in records.iter_mut().enumerate() {
            r.date = format!("2023-11-{:02}", i + 1);
        }
        let mut c = ListController::new(RecordStore::new(records), 2).unwrap();
        assert!(c.goto_page(4));
        c.set_date_range(DateRange::new(Some("2023-11-03"), Some("2023-11-05")).unwrap());
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.filtered_count(), 3);
    }

    #[test]
    fn set_source_keeps_valid_page_and_resets_invalid_one() {
        let mut c = controller(30, 10);
        assert!(c.goto_page(2));
        c.set_source(appointments(25));
        assert_eq!(c.current_page(), 2);

        assert!(c.goto_page(3));
        c.set_source(appointments(8));
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.filtered_count(), 8);
    }

    #[test]
    fn set_source_reapplies_current_filter() {
        let mut c = controller(10, 5);
        c.set_field(AppointmentField::UnitName, "unit 0");
        assert_eq!(c.filtered_count(), 2);
        c.set_source(appointments(20));
        assert_eq!(c.filtered_count(), 4);
    }

    #[test]
    fn removing_last_row_steps_back_a_page() {
        let entries = BlacklistEntry::mock_many(21);
        let mut c = ListController::new(RecordStore::new(entries), 10).unwrap();
        assert!(c.goto_page(3));
        let removed = c.remove_where(|e| e.name == "Blacklisted Person 21");
        assert_eq!(removed, 1);
        assert_eq!(c.current_page(), 2);
        assert_eq!(c.derived_page().len(), 10);
    }

    #[test]
    fn removing_from_middle_page_keeps_position() {
        let entries = BlacklistEntry::mock_many(21);
        let mut c = ListController::new(RecordStore::new(entries), 10).unwrap();
        assert!(c.goto_page(2));
        c.remove_where(|e| e.name == "Blacklisted Person 1");
        assert_eq!(c.current_page(), 2);
        assert_eq!(c.filtered_count(), 20);
    }

    #[test]
    fn page_size_change_returns_to_first_page() {
        let mut c = controller(40, 5);
        assert!(c.goto_page(3));
        assert_eq!(c.set_items_per_page(8), Ok(()));
        assert_eq!(c.current_page(), 1);
        assert_eq!(c.total_pages(), 5);
        assert_eq!(c.derived_page().len(), 8);
    }

    #[test]
    fn edit_leaving_filter_on_last_page_steps_back() {
        let mut c = ListController::new(RecordStore::new(UserAccount::mock_many(30)), 7).unwrap();
        c.set_field(UserAccountField::Status, "inactive");
        // odd ids: 7 + 7 + 1
        assert_eq!(c.total_pages(), 3);
        assert!(c.goto_page(3));
        assert_eq!(c.derived_page()[0].id, 29);

        assert!(c.update(29, |u| u.status = "Active".to_string()));
        assert_eq!(c.filtered_count(), 14);
        assert_eq!(c.total_pages(), 2);
        assert_eq!(c.current_page(), 2);
        assert_eq!(c.derived_page().len(), 7);
    }

    #[test]
    fn edit_keeping_page_valid_leaves_position() {
        let mut c = ListController::new(RecordStore::new(UserAccount::mock_many(30)), 5).unwrap();
        c.set_field(UserAccountField::Status, "inactive");
        assert!(c.goto_page(2));
        assert!(c.update(1, |u| u.status = "Active".to_string()));
        assert_eq!(c.current_page(), 2);
        assert!(!c.update(999, |_| {}));
    }

    #[test]
    fn blacklist_status_filter_is_substring_with_all() {
        let mut c = ListController::new(RecordStore::new(BlacklistEntry::mock_many(75)), 10).unwrap();
        c.set_field(BlacklistField::Status, "All");
        assert_eq!(c.filtered_count(), 75);
        c.set_field(BlacklistField::Status, "act");
        assert_eq!(c.filtered_count(), 75);
        c.set_field(BlacklistField::Status, "Active");
        assert_eq!(c.filtered_count(), 75);
        c.set_field(BlacklistField::Status, "Inactive");
        assert_eq!(c.filtered_count(), 38);
    }

    #[test]
    fn unit_status_filter_is_exact() {
        let mut c = ListController::new(RecordStore::new(UnitMember::mock_many(15)), 10).unwrap();
        c.set_field(UnitMemberField::Status, "all");
        assert_eq!(c.filtered_count(), 15);
        c.set_field(UnitMemberField::Status, "Active");
        assert_eq!(c.filtered_count(), 12);
        c.set_field(UnitMemberField::Status, "inactive");
        assert_eq!(c.filtered_count(), 3);
    }

    #[test]
    fn approving_moves_request_out_of_pending_view() {
        let mut c =
            ListController::new(RecordStore::new(PendingAppointment::mock_many(12)), 5).unwrap();
        c.set_field(PendingAppointmentField::Status, "pending");
        assert!(c.goto_page(3));

        assert_eq!(c.decide(11, Decision::Approve), Ok(()));
        assert_eq!(c.decide(12, Decision::Reject), Ok(()));
        assert_eq!(c.filtered_count(), 10);
        assert_eq!(c.current_page(), 2);
        assert_eq!(
            c.store().find_by_id(11).map(|p| p.status.as_str()),
            Some("Approved")
        );
        assert_eq!(
            c.store().find_by_id(12).map(|p| p.status.as_str()),
            Some("Rejected")
        );
    }

    #[test]
    fn decide_rejects_unknown_and_settled_requests() {
        let mut c = ListController::new(RecordStore::new(GateRegistration::mock_many(7)), 5).unwrap();
        assert_eq!(
            c.decide(8, Decision::Approve),
            Err(ListError::RecordNotFound {
                list: "gate-approvals",
                id: 8
            })
        );
        assert_eq!(c.decide(3, Decision::Reject), Ok(()));
        assert_eq!(
            c.decide(3, Decision::Approve),
            Err(ListError::AlreadyDecided {
                list: "gate-approvals",
                id: 3,
                status: "Rejected".to_string()
            })
        );
    }
}
