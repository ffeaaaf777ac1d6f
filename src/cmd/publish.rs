//! Publish command - archive a report, record it in the index, re-render the home page

use super::{open_home, SiteArgs};
use crate::core::{NewReport, ReportIndex, ReportRecord, Site, SourceReport, DATE_FORMAT};
use crate::core::site::HOME_FILE;
use crate::html;
use chrono::{Local, NaiveDateTime};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct PublishCommand {
    /// Source HTML report path
    #[arg(long, value_name = "FILE", required = true)]
    source: Option<PathBuf>,

    /// Display title in index
    #[arg(long, required = true)]
    title: Option<String>,

    /// Ticker/symbol shown in the card subtitle
    #[arg(long, default_value = "")]
    symbol: String,

    /// Display date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<String>,

    /// Optional note shown on the card
    #[arg(long, default_value = "")]
    notes: String,

    /// Open the home page in a browser afterwards
    #[arg(long)]
    open: bool,

    #[command(flatten)]
    site: SiteArgs,
}

impl PublishCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let (Some(source), Some(title)) = (&self.source, &self.title) else {
            anyhow::bail!("--source and --title are required to publish a report");
        };
        let source = SourceReport::validate(source)?;

        let now = Local::now().naive_local();
        let report = NewReport {
            title: title.clone(),
            symbol: self.symbol.clone(),
            date: self
                .date
                .clone()
                .unwrap_or_else(|| now.format(DATE_FORMAT).to_string()),
            notes: self.notes.clone(),
        };

        let site = self.site.site();
        let record = publish(&site, &source, report, now)?;

        println!("Added: {}", record.path);
        println!("Updated: {}", Site::index_link());
        println!("Updated: {}", HOME_FILE);

        if self.open {
            open_home(&site.home_path())?;
        }
        Ok(())
    }
}

/// Archive `source`, prepend its record to the index and re-render the home page.
///
/// Steps run strictly in that order and each write completes before the next
/// step starts. A failure part way leaves earlier steps in place.
pub fn publish(
    site: &Site,
    source: &SourceReport,
    report: NewReport,
    now: NaiveDateTime,
) -> anyhow::Result<ReportRecord> {
    let file_name = source.archive_into(&site.reports_dir(), now)?;
    let record = report.into_record(Site::report_link(&file_name), now);

    let index_path = site.index_path();
    let mut index = ReportIndex::load(&index_path)?;
    index.prepend(record.clone());
    index.save(&index_path)?;

    html::write_home(site, &index)?;
    log::info!(
        "Published {:?} to {} ({} reports total)",
        record.title,
        site.root().display(),
        index.len()
    );
    Ok(record)
}
