use crate::shared::core::record::{Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: RecordId,
    pub name: String,
    pub date: String,
}

impl Record for Event {
    fn id(&self) -> RecordId {
        self.id
    }
}
