// src/report/console.rs
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub level: Level,
    pub text: String,
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Destination for the human-readable report.
pub trait Console {
    fn emit(&mut self, line: Line);

    fn info(&mut self, text: impl Into<String>) {
        self.emit(Line {
            level: Level::Info,
            text: text.into(),
        });
    }

    fn warn(&mut self, text: impl Into<String>) {
        self.emit(Line {
            level: Level::Warn,
            text: text.into(),
        });
    }

    fn error(&mut self, text: impl Into<String>) {
        self.emit(Line {
            level: Level::Error,
            text: text.into(),
        });
    }
}

/// Info on stdout, warnings and errors on stderr.
#[derive(Debug, Default)]
pub struct Stdio;

impl Console for Stdio {
    fn emit(&mut self, line: Line) {
        match line.level {
            Level::Info => println!("{}", line),
            Level::Warn | Level::Error => eprintln!("{}", line),
        }
    }
}

/// Keeps every line in memory.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &str> + '_ {
        self.lines
            .iter()
            .filter(move |line| line.level == level)
            .map(|line| line.text.as_str())
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.text.contains(needle))
    }
}

impl Console for Transcript {
    fn emit(&mut self, line: Line) {
        self.lines.push(line);
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
