// src/core/console.rs

//! Numbered-menu front end over a [`Collection`].

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use log::{debug, info, warn};
use crate::config::PolystackConfig;
use crate::core::collection::Collection;
use crate::core::serialization::{load, save};
use crate::error::PolystackError;
use crate::polynomial::{arithmetic, Polynomial};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    Print,
    Add,
    Subtract,
    Multiply,
    StackOperation,
    Save,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::Load,
        MenuChoice::Print,
        MenuChoice::Add,
        MenuChoice::Subtract,
        MenuChoice::Multiply,
        MenuChoice::StackOperation,
        MenuChoice::Save,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> usize {
        self as usize + 1
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Load => "Load polynomials from file",
            MenuChoice::Print => "Print loaded polynomials",
            MenuChoice::Add => "Add two polynomials",
            MenuChoice::Subtract => "Subtract two polynomials",
            MenuChoice::Multiply => "Multiply two polynomials",
            MenuChoice::StackOperation => "Perform operation on stack",
            MenuChoice::Save => "Save polynomial to file",
            MenuChoice::Exit => "Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number: usize = s.trim().parse().map_err(|_| ())?;
        MenuChoice::ALL
            .into_iter()
            .find(|choice| choice.number() == number)
            .ok_or(())
    }
}

type BinaryOperation = fn(&Polynomial, &Polynomial) -> Result<Polynomial, PolystackError>;

/// Interactive loop reading requests from `input` and reporting to `output`.
///
/// Every error is reported as a message and the loop keeps going; only
/// failures of the input or output streams end it.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    config: PolystackConfig,
    collection: Collection,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, config: PolystackConfig) -> Self {
        Console {
            input,
            output,
            config,
            collection: Collection::new(),
        }
    }

    pub fn into_collection(self) -> Collection {
        self.collection
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            if self.config.prompt {
                self.print_menu()?;
            }

            let Some(line) = self.read_line()? else {
                debug!("Input closed, leaving menu loop");
                return Ok(());
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting program.")?;
                    return Ok(());
                }
                Ok(choice) => self.dispatch(choice)?,
                Err(()) => {
                    warn!("Invalid menu choice {:?}", line);
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                }
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> io::Result<()> {
        debug!("Menu choice {:?}", choice);
        match choice {
            MenuChoice::Load => self.load(),
            MenuChoice::Print => self.print_all(),
            MenuChoice::Add => self.combine("addition", arithmetic::add),
            MenuChoice::Subtract => self.combine("subtraction", arithmetic::subtract),
            MenuChoice::Multiply => self.combine("multiplication", arithmetic::multiply),
            MenuChoice::StackOperation => writeln!(self.output, "No stack operation is defined."),
            MenuChoice::Save => self.save_top(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Menu:")?;
        for choice in MenuChoice::ALL {
            writeln!(self.output, "{}. {}", choice.number(), choice.label())?;
        }
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()
    }

    /// Next trimmed line, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn load(&mut self) -> io::Result<()> {
        if self.config.prompt {
            write!(self.output, "Enter filename to load: ")?;
            self.output.flush()?;
        }
        let Some(path) = self.read_line()? else {
            return Ok(());
        };

        match load::polynomials(&mut self.collection, &path) {
            Ok(report) => {
                for rejected in &report.rejected {
                    writeln!(self.output, "{} (line {})", rejected.error, rejected.line)?;
                }
                writeln!(self.output, "{} polynomials loaded successfully from file.", report.loaded)
            }
            Err(e) => {
                warn!("Load failed: {}", e);
                writeln!(self.output, "Error opening file: {}", e)
            }
        }
    }

    fn print_all(&mut self) -> io::Result<()> {
        writeln!(self.output, "Stack contents:")?;
        for polynomial in self.collection.iter() {
            writeln!(self.output, "{}", polynomial)?;
        }
        Ok(())
    }

    fn combine(&mut self, name: &str, operation: BinaryOperation) -> io::Result<()> {
        match self.collection.apply(operation) {
            Ok(result) => {
                info!("{} produced {} terms", name, result.len());
                writeln!(self.output, "Result of {}: {}", name, result)
            }
            Err(e) => {
                warn!("{} failed: {}", name, e);
                writeln!(self.output, "{}", e)
            }
        }
    }

    fn save_top(&mut self) -> io::Result<()> {
        let saved = self
            .collection
            .top()
            .ok_or(PolystackError::EmptyCollection)
            .and_then(|top| save::polynomial(top, &self.config.output_path));

        match saved {
            Ok(()) => writeln!(self.output, "Polynomial saved to file {}.", self.config.output_path),
            Err(e) => {
                warn!("Save failed: {}", e);
                writeln!(self.output, "{}", e)
            }
        }
    }
}
