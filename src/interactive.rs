//! Line-oriented terminal front end for a [`Session`]

use crate::image_source::{ImageSource, TextSink};
use crate::session::{Confirm, Notice, Session};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Paste,
    Copy,
    Clear,
    Quit,
    Help,
}

impl Command {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "p" | "paste" => Some(Self::Paste),
            "c" | "copy" => Some(Self::Copy),
            "n" | "new" | "clear" => Some(Self::Clear),
            "q" | "quit" | "exit" => Some(Self::Quit),
            "h" | "help" | "?" => Some(Self::Help),
            _ => None,
        }
    }
}

const HELP: &str = "Commands: [p]aste image, [c]opy numbers, [n]ew query, [q]uit";

/// Yes/no prompt on the same terminal streams
struct Prompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Confirm for Prompt<'_, R, W> {
    fn confirm(&mut self, title: &str, prompt: &str) -> bool {
        if write!(self.output, "[{}] {} [y/N] ", title, prompt)
            .and_then(|_| self.output.flush())
            .is_err()
        {
            return false;
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        }
    }
}

/// Read commands until quit is confirmed or input ends
pub fn run<R: BufRead, W: Write>(
    session: &mut Session,
    source: &mut dyn ImageSource,
    sink: &mut dyn TextSink,
    mut input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{}", HELP)?;

    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let notice = match Command::parse(line) {
            Some(Command::Paste) => session.paste(source),
            Some(Command::Copy) => session.copy(sink),
            Some(Command::Clear) => session.clear(&mut Prompt {
                input: &mut input,
                output: &mut output,
            }),
            Some(Command::Quit) => session.exit(&mut Prompt {
                input: &mut input,
                output: &mut output,
            }),
            Some(Command::Help) => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            None => {
                writeln!(output, "Unknown command '{}'. {}", line, HELP)?;
                continue;
            }
        };

        writeln!(output, "[{}] {}", notice.title(), notice)?;
        if notice == Notice::Exit {
            break;
        }
    }

    Ok(())
}
