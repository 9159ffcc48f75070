use paginator::paginator::DEFAULT_PAGE_SIZE;

/// Largest page a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Parses a user-supplied page size. Missing, unparsable or non-positive
/// values fall back to the default; anything above the cap is capped.
pub fn page_size_param(raw: Option<&str>) -> i64 {
    let default = DEFAULT_PAGE_SIZE as i64;
    match raw.map(str::trim).and_then(|s| s.parse::<i64>().ok()) {
        Some(size) if size > MAX_PAGE_SIZE => MAX_PAGE_SIZE,
        Some(size) if size > 0 => size,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_param() {
        assert_eq!(page_size_param(None), 5);
        assert_eq!(page_size_param(Some("")), 5);
        assert_eq!(page_size_param(Some("abc")), 5);
        assert_eq!(page_size_param(Some("0")), 5);
        assert_eq!(page_size_param(Some("-7")), 5);
        assert_eq!(page_size_param(Some("1")), 1);
        assert_eq!(page_size_param(Some(" 42 ")), 42);
        assert_eq!(page_size_param(Some("100")), 100);
        assert_eq!(page_size_param(Some("101")), 100);
        assert_eq!(page_size_param(Some("99999999999999999999")), 5);
    }
}
