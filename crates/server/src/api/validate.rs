pub(super) const PROJECT_STATUSES: &[&str] = &["planning", "in_progress", "completed"];

pub(super) fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !email.contains(char::is_whitespace)
}

pub(super) fn non_negative(value: Option<f64>) -> bool {
    value.is_none_or(|value| value >= 0.0)
}

pub(super) fn valid_project_status(status: &str) -> bool {
    PROJECT_STATUSES.contains(&status)
}

/// ISO-8601 dates compare correctly as strings; an open side always passes.
pub(super) fn dates_ordered(start_date: Option<&str>, end_date: Option<&str>) -> bool {
    match (start_date, end_date) {
        (Some(start), Some(end)) => start <= end,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_email_accepts_plain_addresses() {
        assert!(valid_email("info@techcorp.com"));
        assert!(!valid_email("not-an-email"));
        assert!(!valid_email("@techcorp.com"));
        assert!(!valid_email("info@"));
        assert!(!valid_email("info@localhost"));
        assert!(!valid_email("info @techcorp.com"));
        assert!(!valid_email("info@.com"));
    }

    #[test]
    fn non_negative_allows_missing_values() {
        assert!(non_negative(None));
        assert!(non_negative(Some(0.0)));
        assert!(non_negative(Some(500_000.0)));
        assert!(!non_negative(Some(-1.0)));
    }

    #[test]
    fn project_status_must_be_known() {
        assert!(valid_project_status("planning"));
        assert!(valid_project_status("in_progress"));
        assert!(valid_project_status("completed"));
        assert!(!valid_project_status("cancelled"));
        assert!(!valid_project_status(""));
    }

    #[test]
    fn dates_ordered_compares_iso_strings() {
        assert!(dates_ordered(Some("2024-01-15"), Some("2024-06-15")));
        assert!(dates_ordered(Some("2024-06-15"), Some("2024-06-15")));
        assert!(!dates_ordered(Some("2024-06-16"), Some("2024-06-15")));
        assert!(dates_ordered(None, Some("2024-06-15")));
        assert!(dates_ordered(Some("2024-01-15"), None));
    }
}
