/// Why a resource name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    #[error("Resource name is empty")]
    Empty,

    #[error("Resource name is {len} characters, limit is {max}")]
    TooLong { len: usize, max: usize },

    #[error("Resource name contains `{0}`; only letters, digits, `-` and `_` are allowed")]
    InvalidChar(char),
}

/// Checks a name against the naming rules most AWS services share: non-empty, at
/// most `max_len` characters, ASCII letters, digits, `-` and `_`.
pub fn validate_resource_name(name: &str, max_len: usize) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    let len = name.chars().count();
    if len > max_len {
        return Err(NameError::TooLong { len, max: max_len });
    }
    match name
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
    {
        Some(c) => Err(NameError::InvalidChar(c)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_resource_name() {
        assert_eq!(validate_resource_name("orders-table_1", 255), Ok(()));
        assert_eq!(validate_resource_name("", 255), Err(NameError::Empty));
        assert_eq!(
            validate_resource_name("abcdef", 5),
            Err(NameError::TooLong { len: 6, max: 5 })
        );
        assert_eq!(
            validate_resource_name("my.bucket", 63),
            Err(NameError::InvalidChar('.'))
        );
        assert_eq!(
            validate_resource_name("café", 63),
            Err(NameError::InvalidChar('é'))
        );
    }
}
