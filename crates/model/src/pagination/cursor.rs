use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Position of the last row handed out on a page.
///
/// Field order matters: the derived `Ord` compares `created_at`, then
/// `resource_type`, then `resource_id`, which is the pagination order
/// (pages walk it from greatest to least). A row with this exact tuple need
/// not exist in the store; the position is only ever used as an exclusive
/// upper bound for the next page.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CursorPosition {
    pub created_at: DateTime<Utc>,
    pub resource_type: String,
    pub resource_id: String,
}

impl CursorPosition {
    pub fn new(
        created_at: DateTime<Utc>,
        resource_type: impl Into<String>,
        resource_id: impl Into<String>,
    ) -> Self {
        CursorPosition {
            created_at,
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn test_order_breaks_ties_left_to_right() {
        let a = CursorPosition::new(at(10), "user", "1");
        let b = CursorPosition::new(at(10), "user", "2");
        let c = CursorPosition::new(at(10), "vendor", "0");
        let d = CursorPosition::new(at(11), "a", "0");

        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
    }
}
