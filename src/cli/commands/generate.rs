//! `worklister generate` command - worklist generation for a cabinet or order

use std::path::PathBuf;

use console::style;
use miette::Result;

use crate::cli::review::ConsoleUi;
use crate::cli::GlobalOpts;
use crate::core::{Config, Mode, Workflow, ERROR_LOG_FILE};

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Cabinet or order folder to process
    pub folder: PathBuf,

    /// Review each cabinet interactively (reorder parts, adjust quantities)
    #[arg(long, short = 'r')]
    pub review: bool,

    /// Root path the CNC controller uses for program files
    /// (default from config or WORKLISTER_MACHINE_ROOT)
    #[arg(long)]
    pub machine_root: Option<String>,
}

pub fn run(args: GenerateArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let machine_root = args.machine_root.unwrap_or(config.machine_root);
    let mode = if args.review {
        Mode::Review
    } else {
        Mode::Direct
    };

    let mut ui = ConsoleUi::new(global.quiet);
    let workflow = Workflow::new(&args.folder, mode, &machine_root);

    match workflow.run(&mut ui) {
        Ok(summary) => {
            if global.verbose {
                for document in &summary.documents {
                    println!("  {}", style(document.display()).dim());
                }
            }
            Ok(())
        }
        // The workflow already notified the operator and logged the failure.
        Err(_) => Err(miette::miette!(
            "worklist generation aborted; details appended to {}",
            ERROR_LOG_FILE
        )),
    }
}
