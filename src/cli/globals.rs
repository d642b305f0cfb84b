use std::{convert::Infallible, fmt, str::FromStr};

/// Deployment environment. Only `development` changes behaviour: it exposes
/// panic details in `500` responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    #[must_use]
    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("development") {
            Ok(Self::Development)
        } else {
            Ok(Self::Production)
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalArgs {
    pub environment: Environment,
}

impl GlobalArgs {
    #[must_use]
    pub const fn new(environment: Environment) -> Self {
        Self { environment }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_args() {
        let args = GlobalArgs::new(Environment::Development);
        assert!(args.environment.is_development());
        assert!(!GlobalArgs::default().environment.is_development());
    }

    #[test]
    fn test_environment_from_str() {
        assert_eq!("development".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("Development".parse::<Environment>(), Ok(Environment::Development));
        assert_eq!("production".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("staging".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("".parse::<Environment>(), Ok(Environment::Production));
    }
}
