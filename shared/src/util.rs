/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date as `YYYY-MM-DD` (used as the default `joined_at`)
pub fn today() -> String {
    chrono::Utc::now().date_naive().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_format() {
        let d = today();
        // YYYY-MM-DD
        assert_eq!(d.len(), 10);
        assert_eq!(d.as_bytes()[4], b'-');
        assert_eq!(d.as_bytes()[7], b'-');
    }

    #[test]
    fn test_now_millis_is_recent() {
        // Sometime after 2024-01-01
        assert!(now_millis() > 1_704_067_200_000);
    }
}
