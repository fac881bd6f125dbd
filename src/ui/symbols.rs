//! UI symbols (controls, bullets, badges)

/// Close control used in the dialog header and the error banner
pub const CLOSE: &str = "[x]";

/// Bullet before each change line
pub const BULLET: &str = "•";

/// Marker appended to the trigger while a fetch is in flight
pub const LOADING: &str = "…";

/// Marker before the error text in the alert banner
pub const ALERT: &str = "!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_control_is_ascii() {
        assert!(CLOSE.is_ascii());
        assert_eq!(CLOSE.len(), 3);
    }

    #[test]
    fn test_bullet_is_single_char() {
        assert_eq!(BULLET.chars().count(), 1);
        assert_eq!(LOADING.chars().count(), 1);
    }
}
