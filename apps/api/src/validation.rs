//! Field-level validation rules, checked by handlers before any persistence.

/// Job titles must carry at least 2 characters.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.chars().count() < 2 {
        return Err("Title should have at least 2 characters".to_string());
    }
    Ok(())
}

/// Salaries must full-match `\d+K`, e.g. "15K".
pub fn validate_salary(salary: &str) -> Result<(), String> {
    let digits_then_k = salary
        .strip_suffix('K')
        .map(|d| !d.is_empty() && d.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false);
    if !digits_then_k {
        return Err("Salary should be in the format 'numK'".to_string());
    }
    Ok(())
}

/// Basic syntactic email check: a single `@` with non-empty local part and
/// domain, and no whitespace.
pub fn validate_email(email: &str) -> Result<(), String> {
    let mut parts = email.split('@');
    let valid = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !email.chars().any(char::is_whitespace)
        }
        _ => false,
    };
    if !valid {
        return Err("Invalid email address".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_requires_two_characters() {
        assert!(validate_title("J").is_err());
        assert!(validate_title("").is_err());
        assert!(validate_title("QA").is_ok());
        assert!(validate_title("Java Developer").is_ok());
    }

    #[test]
    fn salary_must_be_digits_followed_by_k() {
        assert!(validate_salary("15K").is_ok());
        assert!(validate_salary("100K").is_ok());
        assert!(validate_salary("K").is_err());
        assert!(validate_salary("15").is_err());
        assert!(validate_salary("15k").is_err());
        assert!(validate_salary("15K extra").is_err());
        assert!(validate_salary("1a5K").is_err());
    }

    #[test]
    fn email_requires_single_at_with_both_sides() {
        assert!(validate_email("barak@x.com").is_ok());
        assert!(validate_email("barak@x").is_ok());
        assert!(validate_email("barak").is_err());
        assert!(validate_email("@x.com").is_err());
        assert!(validate_email("barak@").is_err());
        assert!(validate_email("a@b@c").is_err());
        assert!(validate_email("bar ak@x.com").is_err());
    }
}
