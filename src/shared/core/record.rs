// Identity shared by every record kept in a record file.
//
// Ids are derived from the collection itself rather than from a persisted counter:
// the next id is one past the highest id present, or 1 for an empty collection.
// Removing the record holding the highest id therefore frees that id for reuse,
// while removing lower ids never fills the gap.

use thiserror::Error;

pub type RecordId = u64;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("record ids exhausted: {0} is the highest assignable id")]
pub struct IdsExhausted(pub RecordId);

pub trait Record {
    fn id(&self) -> RecordId;
}

pub fn next_id<R: Record>(records: &[R]) -> Result<RecordId, IdsExhausted> {
    match records.iter().map(Record::id).max() {
        None => Ok(1),
        Some(highest) => highest.checked_add(1).ok_or(IdsExhausted(highest)),
    }
}
