use crate::domain::ports::IdGenerator;
use uuid::Uuid;

/// Default id source: random UUID v4, rendered as the usual hyphenated
/// string.
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
