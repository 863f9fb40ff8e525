use crate::record::Record;
use crate::record::RowId;

/// How an open overlay was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Close without touching the collection ("Keep").
    Dismiss,
    /// Remove the targeted record ("Delete").
    Confirm,
}

/// Single confirmation overlay targeting at most one row.
///
/// Opening while already open retargets the overlay; there is never more than one outstanding
/// target. Both resolutions return to [`OverlayState::Closed`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Closed,
    OpenFor(RowId),
}

impl OverlayState {
    pub fn is_open(&self) -> bool {
        matches!(self, OverlayState::OpenFor(_))
    }

    pub fn active_row(&self) -> Option<&RowId> {
        match self {
            OverlayState::Closed => None,
            OverlayState::OpenFor(id) => Some(id),
        }
    }

    pub fn open(&mut self, row_id: RowId) {
        match self {
            OverlayState::OpenFor(current) if *current != row_id => {
                log::debug!("[overlay] retarget {current} -> {row_id}");
            }
            OverlayState::OpenFor(_) => {}
            OverlayState::Closed => log::debug!("[overlay] open for {row_id}"),
        }
        *self = OverlayState::OpenFor(row_id);
    }

    /// Closes without any mutation.
    pub fn dismiss(&mut self) {
        if let OverlayState::OpenFor(id) = self {
            log::debug!("[overlay] dismissed for {id}");
        }
        *self = OverlayState::Closed;
    }

    /// Closes and hands the targeted row to `remove`. Does nothing when already closed.
    pub fn confirm(&mut self, remove: impl FnOnce(&RowId)) {
        if let OverlayState::OpenFor(id) = std::mem::take(self) {
            log::debug!("[overlay] confirmed for {id}");
            remove(&id);
        }
    }

    pub fn resolve(&mut self, resolution: Resolution, remove: impl FnOnce(&RowId)) {
        match resolution {
            Resolution::Dismiss => self.dismiss(),
            Resolution::Confirm => self.confirm(remove),
        }
    }
}

/// Removes every record whose [`Record::row_id`] matches `row_id`. Returns how many were removed; a
/// missing id is not an error. Ids that collide once stringified are removed together.
pub fn remove_record(records: &mut Vec<Record>, row_id: &RowId) -> usize {
    let before = records.len();
    records.retain(|r| r.row_id() != *row_id);
    let removed = before - records.len();
    log::debug!("[overlay] removed {removed} record(s) with id {row_id}");
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<Record> {
        vec![Record::new(1), Record::new(2), Record::new(3)]
    }

    #[test]
    fn second_open_retargets() {
        let mut s = OverlayState::default();
        s.open(RowId::new("A"));
        s.open(RowId::new("B"));
        assert_eq!(s, OverlayState::OpenFor(RowId::new("B")));
        assert_eq!(s.active_row(), Some(&RowId::new("B")));
    }

    #[test]
    fn dismiss_keeps_collection() {
        let mut data = records();
        let mut s = OverlayState::default();
        s.open(RowId::new("2"));
        s.resolve(Resolution::Dismiss, |id| {
            remove_record(&mut data, id);
        });
        assert!(!s.is_open());
        assert_eq!(data.len(), 3);
    }

    #[test]
    fn confirm_removes_active_row_and_closes() {
        let mut data = records();
        let mut s = OverlayState::default();
        s.open(RowId::new("2"));
        s.resolve(Resolution::Confirm, |id| {
            remove_record(&mut data, id);
        });
        assert_eq!(s, OverlayState::Closed);
        let ids: Vec<RowId> = data.iter().map(Record::row_id).collect();
        assert_eq!(ids, vec![RowId::new("1"), RowId::new("3")]);
    }

    #[test]
    fn remove_only_touches_the_matching_id() {
        let mut data = vec![Record::new(1), Record::new(10), Record::new("11")];
        assert_eq!(remove_record(&mut data, &RowId::new("1")), 1);
        let ids: Vec<RowId> = data.iter().map(Record::row_id).collect();
        assert_eq!(ids, vec![RowId::new("10"), RowId::new("11")]);
    }

    #[test]
    fn confirm_on_missing_row_is_a_noop() {
        let mut data = records();
        let mut s = OverlayState::default();
        s.open(RowId::new("99"));
        let mut removed = None;
        s.confirm(|id| removed = Some(remove_record(&mut data, id)));
        assert_eq!(removed, Some(0));
        assert_eq!(data.len(), 3);
        assert!(!s.is_open());
    }

    #[test]
    fn confirm_while_closed_does_not_call_back() {
        let mut s = OverlayState::Closed;
        let mut called = false;
        s.confirm(|_| called = true);
        assert!(!called);
    }
}
