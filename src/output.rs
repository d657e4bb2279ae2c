//! Terminal output for scan and lookup results

use crate::dictionary::{EmojiRecord, LookupResult, Match};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print each match as `start..end  emoji  descriptor  shortcodes`
pub fn print_matches(text: &str, matches: &[Match], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    if matches.is_empty() {
        return Ok(());
    }

    print_highlighted(&mut stdout, text, matches)?;

    for m in matches {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{:>5}..{:<5}", m.start, m.end)?;
        stdout.reset()?;
        write!(stdout, " {} ", m.as_str(text))?;
        write_record_details(&mut stdout, &m.record)?;
    }

    Ok(())
}

/// Print the scanned text with every match highlighted
fn print_highlighted(stdout: &mut StandardStream, text: &str, matches: &[Match]) -> io::Result<()> {
    let mut last = 0;
    for m in matches {
        write!(stdout, "{}", &text[last..m.start])?;
        stdout.set_color(ColorSpec::new().set_bg(Some(Color::Yellow)).set_bold(true))?;
        write!(stdout, "{}", m.as_str(text))?;
        stdout.reset()?;
        last = m.end;
    }
    writeln!(stdout, "{}", &text[last..])?;
    writeln!(stdout)?;
    Ok(())
}

/// Print one record per line
pub fn print_records<'a, I>(records: I, color: bool) -> io::Result<()>
where
    I: IntoIterator<Item = &'a EmojiRecord>,
{
    let mut stdout = stdout(color);
    for record in records {
        write!(stdout, "{} ", record.value)?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, "{:<24}", record.key)?;
        stdout.reset()?;
        write!(stdout, " ")?;
        write_record_details(&mut stdout, record)?;
    }
    Ok(())
}

/// Print batch lookup results, keeping misses inline
pub fn print_lookup_results(results: &[LookupResult], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);
    for result in results {
        match result {
            LookupResult::Found(record) => {
                write!(stdout, "{} ", record.value)?;
                write_record_details(&mut stdout, record)?;
            }
            LookupResult::NotFound { input } => {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
                write!(stdout, "not found")?;
                stdout.reset()?;
                writeln!(stdout, ": {input}")?;
            }
        }
    }
    Ok(())
}

fn write_record_details(stdout: &mut StandardStream, record: &EmojiRecord) -> io::Result<()> {
    stdout.set_color(ColorSpec::new().set_bold(true))?;
    write!(stdout, "{}", record.descriptor)?;
    stdout.reset()?;

    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
    writeln!(stdout, "  {}", record.shortcodes.join(" "))?;
    stdout.reset()?;
    Ok(())
}

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)
}
