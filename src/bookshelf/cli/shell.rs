//! Interactive menu loop.
//!
//! Reads numbered choices and field values line by line, converts them to
//! typed arguments, and calls the API. Bad input and failed operations are
//! reported and the menu is shown again; only EOF or the exit choice end the
//! session.

use super::render::{render_messages, render_records};
use bookshelf::api::{BookshelfApi, CmdMessage, CmdResult};
use bookshelf::catalog::SearchQuery;
use bookshelf::error::Result as ShelfResult;
use bookshelf::model::RecordId;
use bookshelf::store::StorageBackend;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
Book catalog
1. Add a book
2. Delete a book
3. Search books
4. List all books
5. Change a book's status
6. Exit";

pub struct Shell<'a, B: StorageBackend, R: BufRead, W: Write> {
    api: &'a mut BookshelfApi<B>,
    input: R,
    output: W,
}

impl<'a, B: StorageBackend, R: BufRead, W: Write> Shell<'a, B, R, W> {
    pub fn new(api: &'a mut BookshelfApi<B>, input: R, output: W) -> Self {
        Self { api, input, output }
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };
            let keep_going = match choice.trim() {
                "1" => self.add()?,
                "2" => self.delete()?,
                "3" => self.search()?,
                "4" => {
                    let result = self.api.list_books();
                    self.show(result)?;
                    true
                }
                "5" => self.change_status()?,
                "6" | "q" | "quit" | "exit" => false,
                other => {
                    self.problem(&format!("Unknown choice '{}'. Try again.", other))?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        writeln!(self.output, "Bye.")?;
        self.output.flush()
    }

    fn add(&mut self) -> io::Result<bool> {
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(false);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(false);
        };
        let Some(year) = self.prompt("Year: ")? else {
            return Ok(false);
        };
        let Some(year) = self.parse_or_complain::<i32>(&year, "Year must be a whole number.")?
        else {
            return Ok(true);
        };
        let result = self.api.add_book(title, author, year);
        self.show(result)?;
        Ok(true)
    }

    fn delete(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt("Id of the book to delete: ")? else {
            return Ok(false);
        };
        let Some(id) = self.parse_or_complain::<RecordId>(&id, "Id must be a positive number.")?
        else {
            return Ok(true);
        };
        let result = self.api.delete_books(&[id]);
        self.show(result)?;
        Ok(true)
    }

    fn search(&mut self) -> io::Result<bool> {
        let Some(title) = self.prompt("Title (leave empty to skip): ")? else {
            return Ok(false);
        };
        let Some(author) = self.prompt("Author (leave empty to skip): ")? else {
            return Ok(false);
        };
        let Some(year) = self.prompt("Year (leave empty to skip): ")? else {
            return Ok(false);
        };

        let mut query = SearchQuery::new().title(title).author(author);
        if !year.trim().is_empty() {
            let Some(year) =
                self.parse_or_complain::<i32>(&year, "Year must be a whole number.")?
            else {
                return Ok(true);
            };
            query = query.year(year);
        }
        let result = self.api.search_books(&query);
        self.show(result)?;
        Ok(true)
    }

    fn change_status(&mut self) -> io::Result<bool> {
        let Some(id) = self.prompt("Id of the book: ")? else {
            return Ok(false);
        };
        let Some(id) = self.parse_or_complain::<RecordId>(&id, "Id must be a positive number.")?
        else {
            return Ok(true);
        };
        let Some(status) = self.prompt("New status ('available' or 'checked out'): ")? else {
            return Ok(false);
        };
        let result = self.api.change_status(id, status.trim().to_string());
        self.show(result)?;
        Ok(true)
    }

    /// Print a prompt and read one line without its terminator. `None` on EOF.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn parse_or_complain<T: std::str::FromStr>(
        &mut self,
        raw: &str,
        complaint: &str,
    ) -> io::Result<Option<T>> {
        match raw.trim().parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.problem(complaint)?;
                Ok(None)
            }
        }
    }

    fn show(&mut self, result: ShelfResult<CmdResult>) -> io::Result<()> {
        match result {
            Ok(result) => {
                if !result.listed_records.is_empty() {
                    write!(self.output, "{}", render_records(&result.listed_records))?;
                }
                write!(self.output, "{}", render_messages(&result.messages))
            }
            Err(e) => {
                tracing::error!(error = %e, "operation failed");
                self.problem(&format!("Error: {}", e))
            }
        }
    }

    fn problem(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", render_messages(&[CmdMessage::error(text)]))
    }
}
