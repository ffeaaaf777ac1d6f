pub mod list;
pub mod publish;
pub mod render;
pub mod schema;

use crate::core::Site;
use clap::Args;
use std::path::PathBuf;

/// Location of the reports site shared by every command.
#[derive(Args, Debug, Clone)]
pub struct SiteArgs {
    /// Site root holding `reports/` and `index.html`
    #[arg(long, value_name = "DIR", default_value = ".")]
    root: PathBuf,
}

impl SiteArgs {
    pub fn site(&self) -> Site {
        Site::new(&self.root)
    }
}

/// Open the rendered home page in the default browser.
fn open_home(path: &std::path::Path) -> anyhow::Result<()> {
    opener::open(path)?;
    log::info!("Opened {} in browser", path.display());
    Ok(())
}
