//! huffman-text: compress and decompress text files with Huffman coding.

mod commands;
mod config;
mod files;
mod input_gen;
mod logger;
mod repl;

use std::io;
use std::process::ExitCode;

use config::{Command, Config};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let config = match Config::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("run with --help for usage");
            return ExitCode::from(2);
        }
    };

    logger::init(config.log_level);

    if config.print_config {
        config.print();
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> huffman_text_core::Result<()> {
    match &config.command {
        Command::Help => config::print_help(),
        Command::Interactive => {
            let cwd = std::env::current_dir()?;
            let stdin = io::stdin();
            repl::Session::new(stdin.lock(), io::stdout(), cwd).run()?;
        }
        Command::Encode {
            input,
            scheme,
            output,
        } => {
            let stats = commands::encode_file(input, scheme, output)?;
            if config.print_stats {
                stats.print_summary();
            }
        }
        Command::Decode {
            scheme,
            input,
            output,
        } => {
            commands::decode_file(scheme, input, output)?;
        }
        Command::Sample {
            output,
            seed,
            size_chars,
        } => {
            input_gen::write_sample_file(output, *seed, *size_chars)?;
            println!("Wrote {} chars to {} (seed {})", size_chars, output.display(), seed);
        }
    }
    Ok(())
}
