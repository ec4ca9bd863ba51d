use clkdiv::{Config, ConfigError};
use thiserror::Error;

pub const USAGE: &str = "\
usage: clkdiv_bin [--divisor N] [--idle-low] [--pattern BITS] [--repeat N]

  --divisor N     ticks per output period (>= 2, default 8)
  --idle-low      park the clock low instead of high
  --pattern BITS  enable sample per tick: 1 or - is high, 0 or _ is low
                  (default: 20 ticks high, 12 ticks low)
  --repeat N      feed the pattern N times (default 1)
";

const DEFAULT_DIVISOR: u32 = 8;
const DEFAULT_PATTERN: &str = "11111111111111111111000000000000";

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("unknown argument `{0}`")]
    Unknown(String),
    #[error("missing value for `{0}`")]
    MissingValue(&'static str),
    #[error("invalid value `{value}` for `{flag}`")]
    InvalidValue { flag: &'static str, value: String },
    #[error("invalid enable sample `{0}`, expected one of 0 1 _ -")]
    InvalidSample(char),
    #[error("enable pattern is empty")]
    EmptyPattern,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug)]
pub struct Args {
    pub config: Config,
    pub pattern: Vec<bool>,
    pub repeat: usize,
    pub help: bool,
}

/// Parses `argv`, including the program name in `args[0]`.
pub fn parse_args(args: &[String]) -> Result<Args, ArgsError> {
    let mut divisor = DEFAULT_DIVISOR;
    let mut idle_high = true;
    let mut pattern = parse_pattern(DEFAULT_PATTERN)?;
    let mut repeat = 1;
    let mut help = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--divisor" => {
                let value = iter.next().ok_or(ArgsError::MissingValue("--divisor"))?;
                divisor = value.parse().map_err(|_| ArgsError::InvalidValue {
                    flag: "--divisor",
                    value: value.clone(),
                })?;
            }
            "--idle-low" => idle_high = false,
            "--pattern" => {
                let value = iter.next().ok_or(ArgsError::MissingValue("--pattern"))?;
                pattern = parse_pattern(value)?;
            }
            "--repeat" => {
                let value = iter.next().ok_or(ArgsError::MissingValue("--repeat"))?;
                repeat = match value.parse() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        return Err(ArgsError::InvalidValue {
                            flag: "--repeat",
                            value: value.clone(),
                        })
                    }
                };
            }
            "-h" | "--help" => help = true,
            other => return Err(ArgsError::Unknown(other.to_owned())),
        }
    }

    let config = Config::new(divisor).with_idle_high(idle_high);
    config.validate()?;

    Ok(Args {
        config,
        pattern,
        repeat,
        help,
    })
}

pub fn parse_pattern(bits: &str) -> Result<Vec<bool>, ArgsError> {
    let pattern = bits
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '1' | '-' => Ok(true),
            '0' | '_' => Ok(false),
            c => Err(ArgsError::InvalidSample(c)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if pattern.is_empty() {
        return Err(ArgsError::EmptyPattern);
    }
    Ok(pattern)
}
