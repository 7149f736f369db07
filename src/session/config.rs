use chrono::Duration;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// How long a session stays valid after it is established.
    pub session_lifetime: Duration,
    /// When true, every successful resolve pushes the expiry forward by a
    /// full lifetime (sliding window).
    pub sliding: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_lifetime: Duration::hours(2),
            sliding: false,
        }
    }
}

impl SessionConfig {
    /// Creates a configuration suitable for development/testing.
    ///
    /// Long-lived sessions with a sliding window.
    pub fn development() -> Self {
        Self {
            session_lifetime: Duration::hours(24),
            sliding: true,
        }
    }

    /// Creates a configuration with stricter settings.
    pub fn strict() -> Self {
        Self {
            session_lifetime: Duration::minutes(30),
            sliding: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.session_lifetime, Duration::hours(2));
        assert!(!config.sliding);
    }

    #[test]
    fn test_development_slides() {
        assert!(SessionConfig::development().sliding);
    }
}
