//! Run configuration from command-line flags and the environment.

use anyhow::{bail, Context};

/// Environment variable consulted when `--seed` is not given.
pub const SEED_ENV: &str = "PRISONSIM_SEED";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimConfig {
    /// Seed for a reproducible run; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Log at debug level instead of warn.
    pub verbose: bool,
    /// Print a JSON snapshot of the generated prison and exit.
    pub snapshot: bool,
    pub help: bool,
}

impl SimConfig {
    /// Build from the process arguments and environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::parse(std::env::args().skip(1), std::env::var(SEED_ENV).ok())
    }

    /// Parse flags. `env_seed` is used only when no `--seed` flag is given.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        env_seed: Option<String>,
    ) -> anyhow::Result<Self> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let raw = args.next().context("missing value for --seed")?;
                    config.seed = Some(parse_seed(&raw)?);
                }
                "--verbose" | "-v" => config.verbose = true,
                "--snapshot" => config.snapshot = true,
                "--help" | "-h" => config.help = true,
                other => bail!("unknown argument: {other}"),
            }
        }

        if config.seed.is_none() {
            if let Some(raw) = env_seed.filter(|value| !value.trim().is_empty()) {
                config.seed = Some(parse_seed(&raw).with_context(|| format!("from {SEED_ENV}"))?);
            }
        }

        Ok(config)
    }
}

fn parse_seed(raw: &str) -> anyhow::Result<u64> {
    raw.trim()
        .parse::<u64>()
        .with_context(|| format!("invalid seed: {raw}"))
}

pub fn print_usage() {
    println!("prisonsim [options]");
    println!("options:");
    println!("  --seed <n>    reproducible run (default: ${SEED_ENV}, else random)");
    println!("  --verbose     log placement detail to stderr");
    println!("  --snapshot    print the generated prison as JSON and exit");
    println!("  --help        show this message");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags() {
        let config = SimConfig::parse(args(&[]), None).unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn reads_every_flag() {
        let config =
            SimConfig::parse(args(&["--seed", "42", "--verbose", "--snapshot"]), None).unwrap();
        assert_eq!(config.seed, Some(42));
        assert!(config.verbose);
        assert!(config.snapshot);
        assert!(!config.help);
    }

    #[test]
    fn flag_seed_beats_environment() {
        let config = SimConfig::parse(args(&["--seed", "1"]), Some("2".into())).unwrap();
        assert_eq!(config.seed, Some(1));
    }

    #[test]
    fn environment_seed_is_a_fallback() {
        let config = SimConfig::parse(args(&[]), Some(" 99 ".into())).unwrap();
        assert_eq!(config.seed, Some(99));
        let config = SimConfig::parse(args(&[]), Some("".into())).unwrap();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(SimConfig::parse(args(&["--seed"]), None).is_err());
        assert!(SimConfig::parse(args(&["--seed", "abc"]), None).is_err());
        assert!(SimConfig::parse(args(&["--bogus"]), None).is_err());
        assert!(SimConfig::parse(args(&[]), Some("-3".into())).is_err());
    }
}
