use crate::models::DrawRecord;

/// Session-scoped, append-only draw history. Insertion order is entry
/// order, not draw-date order. Nothing here outlives the owning session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawHistory {
    records: Vec<DrawRecord>,
}

impl DrawHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[DrawRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawRecord> {
        self.records.iter()
    }

    /// The most recent `n` entries, oldest first.
    pub fn last_n(&self, n: usize) -> &[DrawRecord] {
        let start = self.records.len().saturating_sub(n);
        &self.records[start..]
    }

    pub fn append(&mut self, record: DrawRecord) {
        self.records.push(record);
    }
}

impl Extend<DrawRecord> for DrawHistory {
    fn extend<I: IntoIterator<Item = DrawRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

impl FromIterator<DrawRecord> for DrawHistory {
    fn from_iter<I: IntoIterator<Item = DrawRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DrawHistory {
    type Item = &'a DrawRecord;
    type IntoIter = std::slice::Iter<'a, DrawRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
