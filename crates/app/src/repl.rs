//! Interactive encode / decode / quit prompt.
//!
//! The session reads commands and paths line by line. Input paths are asked
//! for again until the file exists; output paths only until they are
//! well-formed. Relative paths resolve against the working directory shown in
//! each prompt. A failed command is reported and the prompt continues; end of
//! input ends the session like `q`.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::commands;

/// Commands offered at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    Encode,
    Decode,
    Quit,
}

impl ReplCommand {
    /// Parse `e`/`encode`, `d`/`decode` or `q`/`quit` (case-insensitive).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "e" | "encode" => Some(ReplCommand::Encode),
            "d" | "decode" => Some(ReplCommand::Decode),
            "q" | "quit" => Some(ReplCommand::Quit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Stop,
}

/// A prompt session over any line source and output sink.
pub struct Session<R, W> {
    input: R,
    output: W,
    cwd: PathBuf,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, cwd: PathBuf) -> Self {
        Self { input, output, cwd }
    }

    /// Run until `q` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            write!(self.output, "\nWhat do you want to do? (e)ncode, (d)ecode, (q)uit\n> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(());
            };

            let flow = match ReplCommand::parse(&line) {
                Some(ReplCommand::Encode) => self.encode()?,
                Some(ReplCommand::Decode) => self.decode()?,
                Some(ReplCommand::Quit) => Flow::Stop,
                None => {
                    writeln!(self.output, "Unknown command {:?}.", line.trim())?;
                    Flow::Continue
                }
            };

            if let Flow::Stop = flow {
                return Ok(());
            }
        }
    }

    fn encode(&mut self) -> io::Result<Flow> {
        let Some(text) = self.ask_for_existing_path("text")? else {
            return Ok(Flow::Stop);
        };
        let Some(scheme) = self.ask_for_output_path("encoding scheme")? else {
            return Ok(Flow::Stop);
        };
        let Some(encoded) = self.ask_for_output_path("encoded text")? else {
            return Ok(Flow::Stop);
        };

        match commands::encode_file(&text, &scheme, &encoded) {
            Ok(stats) => writeln!(
                self.output,
                "Encoded {} symbols into {} bytes (scheme: {} bytes).",
                stats.input_symbols, stats.packed_bytes, stats.scheme_bytes
            )?,
            Err(err) => {
                log::error!("encode failed: {}", err);
                writeln!(self.output, "Encoding failed: {}", err)?;
            }
        }
        Ok(Flow::Continue)
    }

    fn decode(&mut self) -> io::Result<Flow> {
        let Some(scheme) = self.ask_for_existing_path("encoding scheme")? else {
            return Ok(Flow::Stop);
        };
        let Some(encoded) = self.ask_for_existing_path("encoded text")? else {
            return Ok(Flow::Stop);
        };
        let Some(text) = self.ask_for_output_path("decoded text")? else {
            return Ok(Flow::Stop);
        };

        match commands::decode_file(&scheme, &encoded, &text) {
            Ok(chars) => writeln!(self.output, "Decoded {} symbols.", chars)?,
            Err(err) => {
                log::error!("decode failed: {}", err);
                writeln!(self.output, "Decoding failed: {}", err)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Ask until the answer names an existing file. `None` at end of input.
    fn ask_for_existing_path(&mut self, description: &str) -> io::Result<Option<PathBuf>> {
        loop {
            write!(
                self.output,
                "Where is the {} stored?\nCurrent working directory is \"{}\".\n> ",
                description,
                self.cwd.display()
            )?;
            self.output.flush()?;

            let Some(path) = self.read_path()? else {
                return Ok(None);
            };
            if path.is_file() {
                return Ok(Some(path));
            }
            writeln!(self.output, "File \"{}\" not found.", path.display())?;
        }
    }

    /// Ask until the answer is a well-formed path. `None` at end of input.
    fn ask_for_output_path(&mut self, description: &str) -> io::Result<Option<PathBuf>> {
        loop {
            write!(
                self.output,
                "Where should the {} be stored?\nCurrent working directory is \"{}\".\n> ",
                description,
                self.cwd.display()
            )?;
            self.output.flush()?;

            let Some(path) = self.read_path()? else {
                return Ok(None);
            };
            if path.file_name().is_some() {
                return Ok(Some(path));
            }
            writeln!(self.output, "Invalid path \"{}\".", path.display())?;
        }
    }

    /// Read one answer and resolve it against the working directory.
    ///
    /// Blank or NUL-containing answers become the empty path, which neither
    /// prompt accepts.
    fn read_path(&mut self) -> io::Result<Option<PathBuf>> {
        let Some(line) = self.read_line()? else {
            return Ok(None);
        };
        let answer = line.trim();
        if answer.is_empty() || answer.contains('\0') {
            return Ok(Some(PathBuf::new()));
        }
        Ok(Some(resolve(&self.cwd, Path::new(answer))))
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

fn resolve(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
