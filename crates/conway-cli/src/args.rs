//! Positional launch arguments.
//!
//! `conway [DIMENSION] [WAIT_MS]`. Either argument may be omitted. An
//! argument that does not parse is ignored with a warning and the configured
//! value is kept. Arguments that are not valid UTF-8 count as unparsable.

use std::ffi::OsStr;

use conway_core::LifeConfig;
use tracing::warn;

/// Values taken from the command line, each optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LaunchArgs {
    /// Board side length.
    pub dimension: Option<i64>,
    /// Milliseconds between generations.
    pub tick_interval_ms: Option<u64>,
}

impl LaunchArgs {
    /// Parse the arguments that follow the program name.
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut args = args.into_iter();
        let dimension = args
            .next()
            .and_then(|raw| parse_arg(raw.as_ref(), "dimension"));
        let tick_interval_ms = args
            .next()
            .and_then(|raw| parse_arg(raw.as_ref(), "wait_ms"));
        Self {
            dimension,
            tick_interval_ms,
        }
    }

    /// Override the configured values with any that were given.
    pub fn apply(self, config: &mut LifeConfig) {
        if let Some(dimension) = self.dimension {
            config.board.dimension = dimension;
        }
        if let Some(tick_interval_ms) = self.tick_interval_ms {
            config.run.tick_interval_ms = tick_interval_ms;
        }
    }
}

fn parse_arg<T: std::str::FromStr>(raw: &OsStr, name: &str) -> Option<T> {
    let parsed = raw.to_str().and_then(|text| text.trim().parse().ok());
    if parsed.is_none() {
        warn!(argument = name, value = ?raw, "Ignoring unparsable argument");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_keeps_defaults() {
        let args = LaunchArgs::parse(Vec::<String>::new());
        assert_eq!(args, LaunchArgs::default());

        let mut config = LifeConfig::default();
        args.apply(&mut config);
        assert_eq!(config.board.dimension, 20);
        assert_eq!(config.run.tick_interval_ms, 500);
    }

    #[test]
    fn both_arguments_override_config() {
        let args = LaunchArgs::parse(["12", "250"]);
        assert_eq!(args.dimension, Some(12));
        assert_eq!(args.tick_interval_ms, Some(250));

        let mut config = LifeConfig::default();
        args.apply(&mut config);
        assert_eq!(config.board.dimension, 12);
        assert_eq!(config.run.tick_interval_ms, 250);
    }

    #[test]
    fn unparsable_arguments_fall_back() {
        let args = LaunchArgs::parse(["big", "-5"]);
        assert_eq!(args, LaunchArgs::default());

        let mut config = LifeConfig::default();
        config.board.dimension = 30;
        args.apply(&mut config);
        assert_eq!(config.board.dimension, 30);
        assert_eq!(config.run.tick_interval_ms, 500);
    }

    #[test]
    fn non_positive_dimension_is_passed_through() {
        // Rejected later by board construction, not replaced here.
        let args = LaunchArgs::parse(["0"]);
        assert_eq!(args.dimension, Some(0));
        assert_eq!(args.tick_interval_ms, None);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_argument_falls_back() {
        use std::os::unix::ffi::OsStrExt;

        let args = LaunchArgs::parse([OsStr::from_bytes(b"\xff"), OsStr::new("250")]);
        assert_eq!(args.dimension, None);
        assert_eq!(args.tick_interval_ms, Some(250));
    }
}
