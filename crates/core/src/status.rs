//! Status reporting seam between the session and whatever displays progress.

use crate::types::Status;

/// Receives progress after every scoring or level event.
pub trait StatusSink {
    fn report(&mut self, status: Status);
}

/// Discards reports
impl StatusSink for () {
    fn report(&mut self, _status: Status) {}
}

/// Records every report in order
impl StatusSink for Vec<Status> {
    fn report(&mut self, status: Status) {
        self.push(status);
    }
}

impl<S: StatusSink + ?Sized> StatusSink for &mut S {
    fn report(&mut self, status: Status) {
        (**self).report(status);
    }
}
