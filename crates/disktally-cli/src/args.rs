/// Command-line handling.
///
/// The surface is deliberately tiny: positional target paths plus a single
/// `-walk` switch. Arguments pasted from Explorer or a shell script often
/// arrive wrapped in literal double quotes, so one leading and one trailing
/// `"` are stripped before anything else looks at them.
use disktally_core::stats::DEFAULT_TOP_COUNT;
use std::path::PathBuf;

/// The trace-mode switch, matched case-insensitively.
pub const WALK_FLAG: &str = "-walk";

/// Everything a run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Roots to scan, in the order given.
    pub targets: Vec<PathBuf>,
    /// `true` for the per-entry trace, `false` for the live summary panel.
    pub walk: bool,
    /// Size of the largest-files listing.
    pub top_count: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            walk: false,
            top_count: DEFAULT_TOP_COUNT,
        }
    }
}

/// Remove at most one leading and one trailing `"`.
pub fn strip_quotes(arg: &str) -> &str {
    let arg = arg.strip_prefix('"').unwrap_or(arg);
    arg.strip_suffix('"').unwrap_or(arg)
}

/// Build a [`RunConfig`] from the arguments after the program name.
///
/// Anything that is not the walk switch is a target path. With no targets,
/// `default_target` (normally the working directory) is scanned.
pub fn parse_args<I, A>(args: I, default_target: PathBuf) -> RunConfig
where
    I: IntoIterator<Item = A>,
    A: AsRef<str>,
{
    let mut config = RunConfig::default();
    for raw in args {
        let arg = strip_quotes(raw.as_ref());
        if arg.eq_ignore_ascii_case(WALK_FLAG) {
            config.walk = true;
        } else {
            config.targets.push(PathBuf::from(arg));
        }
    }
    if config.targets.is_empty() {
        config.targets.push(default_target);
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> PathBuf {
        PathBuf::from("/current")
    }

    #[test]
    fn no_arguments_scans_default_target() {
        let config = parse_args(Vec::<String>::new(), cwd());
        assert_eq!(config.targets, vec![cwd()]);
        assert!(!config.walk);
        assert_eq!(config.top_count, 500);
    }

    #[test]
    fn walk_flag_is_case_insensitive() {
        for flag in ["-walk", "-WALK", "-Walk"] {
            let config = parse_args([flag, "/data"], cwd());
            assert!(config.walk, "{flag} should enable walk mode");
            assert_eq!(config.targets, vec![PathBuf::from("/data")]);
        }
    }

    /// The switch alone still scans the default target.
    #[test]
    fn walk_flag_without_targets() {
        let config = parse_args(["-walk"], cwd());
        assert!(config.walk);
        assert_eq!(config.targets, vec![cwd()]);
    }

    #[test]
    fn quotes_are_stripped_once_per_side() {
        assert_eq!(strip_quotes("\"C:\\Program Files\""), "C:\\Program Files");
        assert_eq!(strip_quotes("\"open"), "open");
        assert_eq!(strip_quotes("close\""), "close");
        assert_eq!(strip_quotes("\"\"twice\"\""), "\"twice\"");
        assert_eq!(strip_quotes("\""), "");
        assert_eq!(strip_quotes("plain"), "plain");
    }

    #[test]
    fn quoted_walk_flag_is_recognised() {
        let config = parse_args(["\"-walk\""], cwd());
        assert!(config.walk);
    }

    /// Unknown dash tokens are paths too, and target case is preserved.
    #[test]
    fn other_tokens_are_targets_in_order() {
        let config = parse_args(["B", "-verbose", "a/Dir"], cwd());
        assert_eq!(
            config.targets,
            vec![
                PathBuf::from("B"),
                PathBuf::from("-verbose"),
                PathBuf::from("a/Dir")
            ]
        );
    }
}
