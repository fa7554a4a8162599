//! Line-oriented driver: read a line, route it to a meta-command or through
//! prepare and execute, print the outcome.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use tracing::debug;

use crate::execute::{Executed, execute};
use crate::meta::MetaCommand;
use crate::page::PAGE_SIZE;
use crate::row::{EMAIL_SIZE, ID_SIZE, ROW_SIZE, USERNAME_SIZE};
use crate::statement::prepare;
use crate::table::{ROWS_PER_PAGE, TABLE_MAX_PAGES, TABLE_MAX_ROWS, Table};

pub const DEFAULT_PROMPT: &str = "db > ";

#[derive(Debug, Clone)]
pub struct ReplConfig {
    pub prompt: String,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }
}

struct InputBuffer {
    buffer: String,
}

impl InputBuffer {
    fn new() -> Self {
        Self {
            buffer: String::new(),
        }
    }

    /// Reads the next line. Returns `false` at end of input.
    fn read_input<R: BufRead>(&mut self, reader: &mut R) -> io::Result<bool> {
        self.buffer.clear();
        if reader.read_line(&mut self.buffer)? == 0 {
            return Ok(false);
        }
        self.buffer = self.buffer.trim().to_string();
        Ok(true)
    }
}

pub struct Repl<R, W> {
    input: R,
    output: W,
    table: Table,
    config: ReplConfig,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub fn new(input: R, output: W, config: ReplConfig) -> Self {
        Self {
            input,
            output,
            table: Table::new(),
            config,
        }
    }

    /// Runs until `.exit` or end of input, then closes the table and hands the
    /// writer back.
    pub fn run(mut self) -> io::Result<W> {
        let mut input_buffer = InputBuffer::new();

        loop {
            self.print_prompt()?;
            if !input_buffer.read_input(&mut self.input)? {
                debug!("end of input");
                break;
            }
            if self.handle_line(&input_buffer.buffer)?.is_break() {
                break;
            }
        }

        self.table.close();
        Ok(self.output)
    }

    fn print_prompt(&mut self) -> io::Result<()> {
        write!(self.output, "{}", self.config.prompt)?;
        self.output.flush()
    }

    fn handle_line(&mut self, line: &str) -> io::Result<ControlFlow<()>> {
        if let Some(meta) = MetaCommand::parse(line) {
            return self.do_meta_command(meta);
        }

        let statement = match prepare(line) {
            Ok(statement) => statement,
            Err(e) => {
                debug!(input = line, error = %e, "prepare failed");
                writeln!(self.output, "{e}")?;
                return Ok(ControlFlow::Continue(()));
            }
        };

        match execute(&statement, &mut self.table) {
            Ok(Executed::Inserted) => writeln!(self.output, "Executed.")?,
            Ok(Executed::Selected(rows)) => {
                for row in &rows {
                    writeln!(self.output, "{row}")?;
                }
                writeln!(self.output, "Executed.")?;
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }
        Ok(ControlFlow::Continue(()))
    }

    fn do_meta_command(&mut self, meta: MetaCommand) -> io::Result<ControlFlow<()>> {
        match meta {
            MetaCommand::Exit => return Ok(ControlFlow::Break(())),
            MetaCommand::Constants => self.print_constants()?,
            MetaCommand::Unrecognized(command) => {
                debug!(command = %command, "unrecognized meta-command");
                writeln!(self.output, "Unrecognized command '{command}'.")?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn print_constants(&mut self) -> io::Result<()> {
        writeln!(self.output, "Constants:")?;
        for (name, value) in [
            ("ID_SIZE", ID_SIZE),
            ("USERNAME_SIZE", USERNAME_SIZE),
            ("EMAIL_SIZE", EMAIL_SIZE),
            ("ROW_SIZE", ROW_SIZE),
            ("PAGE_SIZE", PAGE_SIZE),
            ("ROWS_PER_PAGE", ROWS_PER_PAGE),
            ("TABLE_MAX_PAGES", TABLE_MAX_PAGES),
            ("TABLE_MAX_ROWS", TABLE_MAX_ROWS),
        ] {
            writeln!(self.output, "{name}: {value}")?;
        }
        Ok(())
    }
}
