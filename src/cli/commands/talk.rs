//! ogn talk - Assemble a talk bundle

use clap::Args;

use crate::app::AppContext;
use crate::bundle::BundleAssembler;
use crate::cli::output::{HumanLayout, emit_human};
use crate::error::Result;

#[derive(Args, Debug)]
pub struct TalkArgs {
    /// Name of the talk in talks.yml
    pub talk_name: String,

    /// Delete the talk directory before assembling
    #[arg(long)]
    pub clean: bool,
}

pub fn run(ctx: &AppContext, args: &TalkArgs) -> Result<()> {
    let talks = ctx.load_talks()?;
    let notebooks = ctx.notebook_collection();
    let assembler = BundleAssembler::new(&ctx.root, &talks, &notebooks);
    let report = assembler.assemble(&args.talk_name, args.clean)?;

    let mut layout = HumanLayout::new();
    layout
        .title(&format!("Talk bundle: {}", report.talk))
        .kv("destination", &report.dest.display().to_string());
    for file in &report.files_copied {
        layout.bullet(&format!("copied {file}"));
    }
    for folder in &report.folders_copied {
        layout.bullet(&format!("copied folder {folder}"));
    }
    for folder in &report.folders_skipped {
        layout.bullet(&format!("kept existing folder {folder}"));
    }
    for (old, new) in &report.renames_applied {
        layout.bullet(&format!("renamed {old} -> {new}"));
    }
    emit_human(layout);
    Ok(())
}
