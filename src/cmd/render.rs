//! Render command - regenerate the home page from the current index

use super::{open_home, SiteArgs};
use crate::core::site::HOME_FILE;
use crate::core::ReportIndex;
use crate::html;
use clap::Args;

#[derive(Args, Debug)]
pub struct RenderCommand {
    /// Open the home page in a browser afterwards
    #[arg(long)]
    open: bool,

    #[command(flatten)]
    site: SiteArgs,
}

impl RenderCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let site = self.site.site();
        let index = ReportIndex::load(&site.index_path())?;
        let home = html::write_home(&site, &index)?;
        println!("Updated: {}", HOME_FILE);

        if self.open {
            open_home(&home)?;
        }
        Ok(())
    }
}
