//! ogn notebookfiles - Clone the companion notebook repositories

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human};
use crate::error::Result;
use crate::notebooks::NotebookCollection;

#[derive(Args, Debug)]
pub struct NotebookfilesArgs {
    /// Delete the notebook folder before cloning
    #[arg(long)]
    pub clean: bool,

    /// Folder to clone into (default from settings)
    #[arg(long, value_name = "NAME")]
    pub folder: Option<String>,
}

pub fn run(ctx: &AppContext, args: &NotebookfilesArgs) -> Result<()> {
    let folder = args
        .folder
        .clone()
        .unwrap_or_else(|| ctx.settings.notebook_folder.clone());
    let collection = NotebookCollection::new(&ctx.root, folder, ctx.settings.repos.clone());
    collection.fetch(args.clean)?;

    let mut layout = HumanLayout::new();
    layout
        .title("Notebook collection")
        .kv("folder", &collection.folder_path().display().to_string());
    for repo in &ctx.settings.repos {
        layout.bullet(repo);
    }
    emit_human(layout);
    Ok(())
}
