use clap::Parser;
use std::time::Duration;

/// How the gateway should run for this invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Show the banner and wait for the user to press Enter.
    Interactive,
    /// Show the banner, pause, and exit without reading input.
    Test { pause: Duration },
    /// Exercise the console logger and exit.
    SelfTest,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "onyx-gate", version)]
#[command(about = "ONYX-GATE - The elegant gateway to unbreakable security")]
pub struct AppArgs {
    #[arg(long, help = "Show the banner once and exit without waiting for input")]
    pub test: bool,

    #[arg(long, help = "Run the console logger self test and exit")]
    pub self_test: bool,

    #[arg(long, hide = true, default_value_t = 2000)]
    pub pause_ms: u64,

    /// Anything after the recognised flags. Accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }

    pub fn mode(&self) -> Mode {
        if self.self_test {
            Mode::SelfTest
        } else if self.test {
            Mode::Test {
                pause: Duration::from_millis(self.pause_ms),
            }
        } else {
            Mode::Interactive
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<AppArgs, clap::Error> {
        AppArgs::try_parse_from(std::iter::once("onyx-gate").chain(argv.iter().copied()))
    }

    #[test]
    fn no_arguments_is_interactive() {
        assert_eq!(parse(&[]).unwrap().mode(), Mode::Interactive);
    }

    #[test]
    fn test_flag_pauses_two_seconds_by_default() {
        assert_eq!(
            parse(&["--test"]).unwrap().mode(),
            Mode::Test {
                pause: Duration::from_secs(2)
            }
        );
    }

    #[test]
    fn pause_can_be_shortened() {
        let args = parse(&["--test", "--pause-ms", "0"]).unwrap();
        assert_eq!(
            args.mode(),
            Mode::Test {
                pause: Duration::ZERO
            }
        );
    }

    #[test]
    fn self_test_flag() {
        assert_eq!(parse(&["--self-test"]).unwrap().mode(), Mode::SelfTest);
    }

    #[test]
    fn self_test_wins_over_test() {
        assert_eq!(
            parse(&["--test", "--self-test"]).unwrap().mode(),
            Mode::SelfTest
        );
    }

    #[test]
    fn trailing_arguments_are_ignored() {
        let args = parse(&["--test", "extra", "--unlock"]).unwrap();
        assert!(matches!(args.mode(), Mode::Test { .. }));
        assert_eq!(args.rest, ["extra", "--unlock"]);
    }

    #[test]
    fn stray_argument_stays_interactive() {
        assert_eq!(parse(&["foo"]).unwrap().mode(), Mode::Interactive);
    }

    #[test]
    fn test_flag_after_a_stray_argument_is_ignored() {
        let args = parse(&["foo", "--test"]).unwrap();
        assert_eq!(args.mode(), Mode::Interactive);
        assert_eq!(args.rest, ["foo", "--test"]);
    }
}
