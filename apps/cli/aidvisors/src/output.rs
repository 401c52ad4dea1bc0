//! Rendering of command results to stdout.

use crate::error::AidvisorsError;

use common::ErrorLocation;

use models::{Budget, Category, HealthStatus, Transaction, User};

use std::io::Write;
use std::panic::Location;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// One-line text form of a record.
pub trait Row {
    fn row(&self) -> String;
}

impl Row for Budget {
    fn row(&self) -> String {
        format!(
            "#{:<4} {:<24} {:>12}  {} .. {}",
            self.id,
            self.name,
            self.amount.to_string(),
            self.start_date,
            self.end_date
        )
    }
}

impl Row for Category {
    fn row(&self) -> String {
        format!(
            "#{:<4} {:<24} {:>12}  budget #{}",
            self.id,
            self.name,
            self.planned_amount.to_string(),
            self.budget_id
        )
    }
}

impl Row for Transaction {
    fn row(&self) -> String {
        let category = self
            .category_id
            .map(|id| format!("  category #{id}"))
            .unwrap_or_default();
        let kind = if self.is_expense() { "expense" } else { "income" };
        format!(
            "#{:<4} {}  {:<7} {:>12}  {}{}",
            self.id,
            self.date,
            kind,
            self.amount.to_string(),
            self.description.as_deref().unwrap_or("-"),
            category
        )
    }
}

impl Row for User {
    fn row(&self) -> String {
        format!("#{:<4} {:<20} {}", self.id, self.username, self.email)
    }
}

impl Row for HealthStatus {
    fn row(&self) -> String {
        format!("{} at {}", self.status, self.timestamp)
    }
}

/// Writes records as text rows or JSON.
pub struct Output<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> Output<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn list<T: Row + Serialize>(&mut self, items: &[T]) -> Result<(), AidvisorsError> {
        match self.format {
            OutputFormat::Json => self.json(items),
            OutputFormat::Text if items.is_empty() => self.line("(none)"),
            OutputFormat::Text => {
                for item in items {
                    writeln!(self.writer, "{}", item.row())?;
                }
                Ok(())
            }
        }
    }

    pub fn one<T: Row + Serialize>(&mut self, item: &T) -> Result<(), AidvisorsError> {
        match self.format {
            OutputFormat::Json => self.json(item),
            OutputFormat::Text => self.line(&item.row()),
        }
    }

    /// Plain message. In JSON mode it is wrapped as `{"message": ...}`.
    pub fn message(&mut self, text: &str) -> Result<(), AidvisorsError> {
        match self.format {
            OutputFormat::Json => self.json(&serde_json::json!({ "message": text })),
            OutputFormat::Text => self.line(text),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn line(&mut self, text: &str) -> Result<(), AidvisorsError> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    #[track_caller]
    fn json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), AidvisorsError> {
        let text = serde_json::to_string_pretty(value).map_err(|e| AidvisorsError::Output {
            message: format!("Failed to encode output: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;
        self.line(&text)
    }
}
