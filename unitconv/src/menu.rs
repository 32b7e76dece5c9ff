//! Interactive menu
//!
//! Line-based prompt loop over any `BufRead`/`Write` pair. Conversion and
//! input errors are printed and the loop resumes; only I/O failures end the
//! session with an error.

use std::io::{self, BufRead, Write};
use thiserror::Error;
use unitconv_units::{Category, ConversionError, Converter};

const CUSTOM_CHOICE: usize = Category::ALL.len() + 1;
const EXIT_CHOICE: usize = Category::ALL.len() + 2;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("Invalid unit selection")]
    InvalidSelection,

    #[error("Error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("end of input")]
    EndOfInput,
}

/// A main menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Category(Category),
    Custom,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let n: usize = input.trim().parse().ok()?;
        match n {
            CUSTOM_CHOICE => Some(MenuChoice::Custom),
            EXIT_CHOICE => Some(MenuChoice::Exit),
            n if (1..CUSTOM_CHOICE).contains(&n) => Some(MenuChoice::Category(Category::ALL[n - 1])),
            _ => None,
        }
    }
}

/// Pick a unit by 1-based menu index, or pass a typed name through
fn resolve_selection(input: &str, units: &[&str]) -> Result<String, MenuError> {
    let input = input.trim();
    match input.parse::<usize>() {
        Ok(n) if (1..=units.len()).contains(&n) => Ok(units[n - 1].to_string()),
        Ok(_) => Err(MenuError::InvalidSelection),
        Err(_) if input.is_empty() => Err(MenuError::InvalidSelection),
        Err(_) => Ok(input.to_string()),
    }
}

fn parse_value(input: &str) -> Result<f64, MenuError> {
    let input = input.trim();
    match input.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(MenuError::InvalidNumber(input.to_string())),
    }
}

pub struct Session<'t, R, W> {
    converter: Converter<'t>,
    reader: R,
    writer: W,
}

impl<'t, R: BufRead, W: Write> Session<'t, R, W> {
    pub fn new(converter: Converter<'t>, reader: R, writer: W) -> Self {
        Session { converter, reader, writer }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Run until the user picks Exit or input ends
    pub fn run(&mut self) -> Result<(), MenuError> {
        loop {
            self.print_menu()?;

            let line = match self.prompt("\nEnter choice: ") {
                Ok(line) => line,
                Err(MenuError::EndOfInput) => {
                    tracing::info!("input closed");
                    break;
                }
                Err(e) => return Err(e),
            };

            let outcome = match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => break,
                Some(MenuChoice::Category(category)) => self.category_conversion(category),
                Some(MenuChoice::Custom) => self.custom_conversion(),
                None => {
                    writeln!(self.writer, "Invalid choice")?;
                    continue;
                }
            };

            match outcome {
                Ok(()) => {}
                Err(MenuError::EndOfInput) => {
                    tracing::info!("input closed mid-conversion");
                    break;
                }
                Err(e @ MenuError::Io(_)) => return Err(e),
                Err(e) => {
                    tracing::debug!("{}", e);
                    writeln!(self.writer, "{}", e)?;
                }
            }
        }

        self.writer.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.writer, "\n=== Unit Converter ===")?;
        for (i, category) in Category::ALL.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, category)?;
        }
        writeln!(self.writer, "{}. Custom Conversion", CUSTOM_CHOICE)?;
        writeln!(self.writer, "{}. Exit", EXIT_CHOICE)
    }

    fn prompt(&mut self, text: &str) -> Result<String, MenuError> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(MenuError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    fn category_conversion(&mut self, category: Category) -> Result<(), MenuError> {
        let table = self.converter.table();
        let units = table.units_in_category(category);

        writeln!(self.writer, "\nAvailable units:")?;
        for (i, name) in units.iter().enumerate() {
            writeln!(self.writer, "{}. {}", i + 1, name)?;
        }

        let from = self.prompt("\nFrom unit number: ")?;
        let to = self.prompt("To unit number: ")?;
        let from = resolve_selection(&from, &units)?;
        let to = resolve_selection(&to, &units)?;

        let value = parse_value(&self.prompt("Value to convert: ")?)?;
        self.convert_and_report(value, &from, &to)
    }

    fn custom_conversion(&mut self) -> Result<(), MenuError> {
        let from = self.prompt("\nFrom unit: ")?;
        let to = self.prompt("To unit: ")?;
        let value = parse_value(&self.prompt("Value: ")?)?;
        self.convert_and_report(value, &from, &to)
    }

    fn convert_and_report(&mut self, value: f64, from: &str, to: &str) -> Result<(), MenuError> {
        let result = self.converter.convert(value, from, to)?;
        writeln!(self.writer, "\nResult: {} {} = {:.4} {}", value, from, result, to)?;
        Ok(())
    }
}
