mod cmd;
mod core;
mod html;
mod utils;

use clap::{Parser, Subcommand};

/// Publish a static HTML report into `reports/` and regenerate the home page.
///
/// Run without a subcommand to publish (`--source` and `--title` required).
#[derive(Parser, Debug)]
#[command(
    name = "publish-report",
    version,
    about = "Add an HTML report and update the reports home page",
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    publish: cmd::publish::PublishCommand,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List published reports, newest first
    List(cmd::list::ListCommand),
    /// Regenerate index.html from reports/index.json
    Render(cmd::render::RenderCommand),
    /// Print the JSON schema of reports/index.json
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::List(list)) => list.exec(),
        Some(Command::Render(render)) => render.exec(),
        Some(Command::Schema(schema)) => schema.exec(),
        None => cli.publish.exec(),
    }
}
