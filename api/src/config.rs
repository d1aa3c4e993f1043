use clap::{Parser, ValueEnum};

/// How endpoint outcomes are translated into HTTP status codes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StatusPolicy {
    /// 200 on success, 404 when the astronaut is missing, 500 otherwise
    #[default]
    Conventional,
    /// The historical codes (504, 300, 454, 403 ...) expected by older clients
    Legacy,
}

#[derive(Debug, Parser)]
#[clap(version, about = "Spaceship admin REST service")]
pub struct Cli {
    #[clap(action, short = 'v', long, global = true, help = "Show debug messages")]
    pub verbose: bool,

    #[clap(
        value_parser,
        short = 'u',
        long,
        env = "DATABASE_URL",
        default_value = "sqlite:./spaceship.db?mode=rwc",
        help = "Database URL"
    )]
    pub database_url: String,

    #[clap(value_parser, long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[clap(value_parser, short = 'p', long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[clap(
        value_enum,
        long,
        env = "STATUS_POLICY",
        default_value_t = StatusPolicy::Conventional,
        long_help = "Status codes used by the astronaut endpoints\n \
                    - conventional: 200 / 404 / 500\n \
                    - legacy: the original codes, for clients that depend on them"
    )]
    pub status_policy: StatusPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_conventional_codes() {
        let cli = Cli::try_parse_from(["spaceship-admin", "-u", "sqlite::memory:"]).unwrap();

        assert_eq!(cli.status_policy, StatusPolicy::Conventional);
        assert_eq!(cli.database_url, "sqlite::memory:");
        assert_eq!(cli.port, 8000);
        assert!(!cli.verbose);
    }

    #[test]
    fn legacy_policy_is_selectable() {
        let cli = Cli::try_parse_from([
            "spaceship-admin",
            "--status-policy",
            "legacy",
            "--port",
            "3001",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.status_policy, StatusPolicy::Legacy);
        assert_eq!(cli.port, 3001);
        assert!(cli.verbose);
    }
}
