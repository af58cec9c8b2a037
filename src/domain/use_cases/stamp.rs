use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

use crate::entities::schema::InsertRecord;

/// Assigns the system fields of a new record.
pub trait Stamper: Send + Sync {
    fn new_id(&self) -> String;
    fn now(&self) -> DateTime<Utc>;

    fn stamp<I: InsertRecord>(&self, draft: I) -> I::Record
    where
        Self: Sized,
    {
        draft.into_record_at(self.new_id(), self.now())
    }
}

/// UUID v4 identifiers and the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemStamper;

impl Stamper for SystemStamper {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }

    // Millisecond precision, the resolution of a JS `Date`.
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}
