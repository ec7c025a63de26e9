use crate::records::Record;

/// Owns the full record set of one list view.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordStore<R> {
    records: Vec<R>,
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R> From<Vec<R>> for RecordStore<R> {
    fn from(records: Vec<R>) -> Self {
        Self { records }
    }
}

impl<R> RecordStore<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Swaps in a new record set and hands back the previous one.
    pub fn replace(&mut self, records: Vec<R>) -> Vec<R> {
        std::mem::replace(&mut self.records, records)
    }

    pub fn prepend(&mut self, record: R) {
        self.records.insert(0, record);
    }

    /// Returns how many records were dropped.
    pub fn retain<P>(&mut self, mut keep: P) -> usize
    where
        P: FnMut(&R) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|r| keep(r));
        before - self.records.len()
    }
}

impl<R: Record> RecordStore<R> {
    pub fn find_by_id(&self, id: u64) -> Option<&R> {
        self.records.iter().find(|r| r.id() == Some(id))
    }

    pub fn update_by_id<E>(&mut self, id: u64, edit: E) -> bool
    where
        E: FnOnce(&mut R),
    {
        match self.records.iter_mut().find(|r| r.id() == Some(id)) {
            Some(record) => {
                edit(record);
                true
            }
            None => false,
        }
    }
}
