//! List command - show the published reports, newest first

use super::SiteArgs;
use crate::core::{ReportIndex, ReportRecord};
use crate::utils::write_csv;
use clap::Args;
use serde::Serialize;
use std::io;
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct ListCommand {
    /// Output as JSON instead of formatted table
    #[arg(long, conflicts_with = "csv")]
    json: bool,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,

    #[command(flatten)]
    site: SiteArgs,
}

impl ListCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let index = ReportIndex::load(&self.site.site().index_path())?;

        if self.json {
            println!("{}", index.to_json()?);
        } else if self.csv {
            write_csv(index.records().iter().map(CsvRow::from), io::stdout())?;
        } else {
            self.print_table(&index);
        }
        Ok(())
    }

    fn print_table(&self, index: &ReportIndex) {
        if index.is_empty() {
            println!("No reports published yet");
            return;
        }

        let rows: Vec<ReportRow> = index.records().iter().map(ReportRow::from).collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        println!("{}", table);
        println!("{} report(s)", index.len());
    }
}

#[derive(Debug, Clone, Tabled)]
struct ReportRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Path")]
    path: String,
}

impl From<&ReportRecord> for ReportRow {
    fn from(record: &ReportRecord) -> Self {
        Self {
            date: record.date.clone(),
            symbol: record.symbol.clone(),
            title: record.title.clone(),
            path: record.path.clone(),
        }
    }
}

/// Flat CSV line. Hand-added index keys are left out so every row has the same columns.
#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    date: &'a str,
    title: &'a str,
    symbol: &'a str,
    notes: &'a str,
    path: &'a str,
    created_at: &'a str,
}

impl<'a> From<&'a ReportRecord> for CsvRow<'a> {
    fn from(record: &'a ReportRecord) -> Self {
        Self {
            date: &record.date,
            title: &record.title,
            symbol: &record.symbol,
            notes: &record.notes,
            path: &record.path,
            created_at: &record.created_at,
        }
    }
}
