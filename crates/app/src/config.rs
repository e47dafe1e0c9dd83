//! Configuration for the huffman-text application.
//!
//! Handles parsing command-line arguments. With ZERO arguments the tool
//! starts the interactive prompt; subcommands run one encode, decode or
//! sample generation and exit.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;

/// What the run should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive encode/decode/quit prompt
    Interactive,

    /// Encode a text file into a scheme file and a packed payload file
    Encode {
        input: PathBuf,
        scheme: PathBuf,
        output: PathBuf,
    },

    /// Decode a packed payload file with its scheme file
    Decode {
        scheme: PathBuf,
        input: PathBuf,
        output: PathBuf,
    },

    /// Write a generated sample text
    Sample {
        output: PathBuf,
        seed: u64,
        size_chars: usize,
    },

    /// Print usage and exit
    Help,
}

/// Complete configuration for a run.
#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,

    // === Logging ===
    /// Maximum log level written to stderr
    pub log_level: log::LevelFilter,

    // === Behavior ===
    /// Whether to print the resolved config
    pub print_config: bool,

    /// Whether to print a compression summary after encoding
    pub print_stats: bool,
}

impl Config {
    /// Parse configuration from command-line arguments (without the program
    /// name).
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut subcommand: Option<&str> = None;
        let mut input: Option<PathBuf> = None;
        let mut output: Option<PathBuf> = None;
        let mut scheme: Option<PathBuf> = None;
        let mut seed: Option<u64> = None;
        let mut size_chars: Option<usize> = None;
        let mut log_level = log::LevelFilter::Warn;
        let mut print_config = false;
        let mut print_stats = false;
        let mut help = false;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--in" => {
                    input = Some(PathBuf::from(value_of(args, &mut i, "--in requires a path")?));
                }
                "--out" => {
                    output = Some(PathBuf::from(value_of(args, &mut i, "--out requires a path")?));
                }
                "--scheme" => {
                    let value = value_of(args, &mut i, "--scheme requires a path")?;
                    scheme = Some(PathBuf::from(value));
                }
                "--seed" => {
                    let value = value_of(args, &mut i, "--seed requires a number")?;
                    seed = Some(value.parse().map_err(|_| "invalid seed")?);
                }
                "--size" => {
                    let value = value_of(args, &mut i, "--size requires a number")?;
                    size_chars = Some(value.parse().map_err(|_| "invalid size")?);
                }
                "--verbose" | "-v" => {
                    log_level = log::LevelFilter::Debug;
                }
                "--quiet" | "-q" => {
                    log_level = log::LevelFilter::Error;
                }
                "--stats" => {
                    print_stats = true;
                }
                "--print-config" => {
                    print_config = true;
                }
                "--help" | "-h" => {
                    help = true;
                }
                cmd @ ("encode" | "decode" | "sample" | "interactive") if subcommand.is_none() => {
                    subcommand = Some(cmd);
                }
                other => {
                    return Err(format!("unknown argument: {}", other));
                }
            }
            i += 1;
        }

        let command = if help {
            Command::Help
        } else {
            let given = [
                ("--in", input.is_some()),
                ("--out", output.is_some()),
                ("--scheme", scheme.is_some()),
                ("--seed", seed.is_some()),
                ("--size", size_chars.is_some()),
            ];
            let allowed: &[&str] = match subcommand {
                None | Some("interactive") => &[],
                Some("sample") => &["--out", "--seed", "--size"],
                Some(_) => &["--in", "--out", "--scheme"],
            };
            if let Some((flag, _)) = given
                .iter()
                .find(|(flag, set)| *set && !allowed.contains(flag))
            {
                let name = subcommand.unwrap_or("interactive");
                return Err(format!("{} does not accept {}", name, flag));
            }

            match subcommand {
                None | Some("interactive") => Command::Interactive,
                Some("encode") => Command::Encode {
                    input: input.ok_or("encode requires --in <TEXT>")?,
                    scheme: scheme.ok_or("encode requires --scheme <SCHEME>")?,
                    output: output.ok_or("encode requires --out <ENCODED>")?,
                },
                Some("decode") => Command::Decode {
                    scheme: scheme.ok_or("decode requires --scheme <SCHEME>")?,
                    input: input.ok_or("decode requires --in <ENCODED>")?,
                    output: output.ok_or("decode requires --out <TEXT>")?,
                },
                Some(_) => {
                    // Determine seed (explicit or time-based)
                    let seed = seed.unwrap_or_else(time_seed);
                    let mut rng = ChaCha8Rng::seed_from_u64(seed);
                    Command::Sample {
                        output: output.unwrap_or_else(|| PathBuf::from("./sample.txt")),
                        seed,
                        size_chars: size_chars.unwrap_or_else(|| rng.gen_range(1_000..=20_000)),
                    }
                }
            }
        };

        Ok(Config {
            command,
            log_level,
            print_config,
            print_stats,
        })
    }

    /// Print the configuration in human-readable form.
    pub fn print(&self) {
        println!("=== Configuration ===");
        match &self.command {
            Command::Interactive => println!("Mode: interactive"),
            Command::Encode {
                input,
                scheme,
                output,
            } => {
                println!("Mode: encode");
                println!("Text:    {}", input.display());
                println!("Scheme:  {}", scheme.display());
                println!("Encoded: {}", output.display());
            }
            Command::Decode {
                scheme,
                input,
                output,
            } => {
                println!("Mode: decode");
                println!("Scheme:  {}", scheme.display());
                println!("Encoded: {}", input.display());
                println!("Text:    {}", output.display());
            }
            Command::Sample {
                output,
                seed,
                size_chars,
            } => {
                println!("Mode: sample");
                println!("Output: {}", output.display());
                println!("Seed: {}", seed);
                println!("Size: {} chars", size_chars);
            }
            Command::Help => println!("Mode: help"),
        }
        println!("Log level: {}", self.log_level);
        println!("Stats: {}", if self.print_stats { "on" } else { "off" });
        println!();
    }
}

/// Advance past a flag and return its value.
fn value_of<'a>(args: &'a [String], i: &mut usize, missing: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| missing.to_string())
}

fn time_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |t| t.as_millis() as u64)
}

pub fn print_help() {
    println!("huffman-text: Compress and decompress text files with Huffman coding");
    println!();
    println!("USAGE:");
    println!("    huffman-text [OPTIONS]                 Interactive prompt");
    println!("    huffman-text encode --in <TEXT> --scheme <SCHEME> --out <ENCODED>");
    println!("    huffman-text decode --scheme <SCHEME> --in <ENCODED> --out <TEXT>");
    println!("    huffman-text sample [--out <PATH>] [--seed <N>] [--size <N>]");
    println!();
    println!("OPTIONS:");
    println!("    --in <PATH>             Input file");
    println!("    --out <PATH>            Output file (sample default: ./sample.txt)");
    println!("    --scheme <PATH>         Encoding scheme file");
    println!("    --seed <N>              Random seed for sample generation");
    println!("    --size <N>              Sample length in chars (default: random 1000-20000)");
    println!();
    println!("    --stats                 Print a compression summary after encoding");
    println!("    --print-config          Print resolved configuration");
    println!("    --verbose, -v           Log debug output to stderr");
    println!("    --quiet, -q             Only log errors");
    println!("    --help, -h              Print this help");
    println!();
    println!("EXAMPLES:");
    println!("    huffman-text sample --seed 42 --out t.txt");
    println!("    huffman-text encode --in t.txt --scheme t.scheme --out t.huff --stats");
    println!("    huffman-text decode --scheme t.scheme --in t.huff --out t.out.txt");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_interactive() {
        let config = Config::from_args(&[]).unwrap();
        assert_eq!(config.command, Command::Interactive);
        assert_eq!(config.log_level, log::LevelFilter::Warn);
        assert!(!config.print_stats);
    }

    #[test]
    fn test_encode_args() {
        let config = Config::from_args(&args(&[
            "encode", "--in", "a.txt", "--scheme", "a.scheme", "--out", "a.huff", "--stats", "-v",
        ]))
        .unwrap();

        assert_eq!(
            config.command,
            Command::Encode {
                input: PathBuf::from("a.txt"),
                scheme: PathBuf::from("a.scheme"),
                output: PathBuf::from("a.huff"),
            }
        );
        assert!(config.print_stats);
        assert_eq!(config.log_level, log::LevelFilter::Debug);
    }

    #[test]
    fn test_decode_requires_scheme() {
        let err =
            Config::from_args(&args(&["decode", "--in", "a.huff", "--out", "a.txt"])).unwrap_err();
        assert!(err.contains("--scheme"));
    }

    #[test]
    fn test_missing_flag_value() {
        let err = Config::from_args(&args(&["encode", "--in"])).unwrap_err();
        assert_eq!(err, "--in requires a path");
    }

    #[test]
    fn test_unknown_argument() {
        let err = Config::from_args(&args(&["--bogus"])).unwrap_err();
        assert_eq!(err, "unknown argument: --bogus");

        // A second subcommand is not accepted.
        assert!(Config::from_args(&args(&["encode", "decode"])).is_err());
    }

    #[test]
    fn test_sample_defaults_are_seeded() {
        let first = Config::from_args(&args(&["sample", "--seed", "9"])).unwrap();
        let second = Config::from_args(&args(&["sample", "--seed", "9"])).unwrap();
        assert_eq!(first.command, second.command);

        match first.command {
            Command::Sample {
                output,
                seed,
                size_chars,
            } => {
                assert_eq!(output, PathBuf::from("./sample.txt"));
                assert_eq!(seed, 9);
                assert!((1_000..=20_000).contains(&size_chars));
            }
            other => panic!("expected sample, got {other:?}"),
        }
    }

    #[test]
    fn test_flags_outside_their_command() {
        let err = Config::from_args(&args(&[
            "encode", "--in", "a.txt", "--scheme", "a.scheme", "--out", "a.huff", "--seed", "5",
        ]))
        .unwrap_err();
        assert_eq!(err, "encode does not accept --seed");

        let err = Config::from_args(&args(&[
            "decode", "--scheme", "a.scheme", "--in", "a.huff", "--out", "a.txt", "--size", "3",
        ]))
        .unwrap_err();
        assert_eq!(err, "decode does not accept --size");

        let err = Config::from_args(&args(&["sample", "--in", "a.txt"])).unwrap_err();
        assert_eq!(err, "sample does not accept --in");

        let err = Config::from_args(&args(&["--out", "a.txt"])).unwrap_err();
        assert_eq!(err, "interactive does not accept --out");
    }

    #[test]
    fn test_help_wins() {
        let config = Config::from_args(&args(&["decode", "--help"])).unwrap();
        assert_eq!(config.command, Command::Help);
    }
}
