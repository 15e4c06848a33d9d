//! ReportSink port - where violations go
//!
//! The engine calls `report` exactly once per detected violation, at the point
//! of detection. It never retries or batches.

use crate::domain::value_objects::{Location, Violation};

pub trait ReportSink {
    fn report(&mut self, location: &Location, violation: Violation);
}

impl ReportSink for Vec<(Location, Violation)> {
    fn report(&mut self, location: &Location, violation: Violation) {
        self.push((location.clone(), violation));
    }
}
