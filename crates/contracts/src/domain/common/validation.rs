/// Trimmed non-empty text, or `message`.
pub fn require_text(value: &str, message: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(message.to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Human codes such as department and division ids must be all digits.
pub fn require_digits(value: &str, message: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        Ok(trimmed.to_string())
    } else {
        Err(message.to_string())
    }
}

/// Strip everything but digits, as numeric code inputs do while typing.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_digits() {
        assert_eq!(require_digits(" 042 ", "bad"), Ok("042".to_string()));
        assert_eq!(require_digits("4a", "bad"), Err("bad".to_string()));
        assert_eq!(require_digits("", "bad"), Err("bad".to_string()));
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("12-3a4"), "1234");
    }

    #[test]
    fn test_require_text() {
        assert!(require_text("   ", "Name is required").is_err());
        assert_eq!(require_text(" HQ ", "x"), Ok("HQ".to_string()));
    }
}
