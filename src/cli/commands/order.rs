//! `worklister order` command - preview the default machining order

use std::path::PathBuf;

use console::style;
use miette::Result;

use crate::cli::GlobalOpts;
use crate::core::{scan_cabinet, sort_files, PartFile};

#[derive(clap::Args, Debug)]
pub struct OrderArgs {
    /// Cabinet folder to inspect
    pub folder: PathBuf,
}

pub fn run(args: OrderArgs, global: &GlobalOpts) -> Result<()> {
    let names = scan_cabinet(&args.folder).map_err(|e| miette::miette!("{}", e))?;
    if names.is_empty() {
        println!("No part files found in {}", args.folder.display());
        return Ok(());
    }

    let sorted = sort_files(names);
    for (index, file_name) in sorted.iter().enumerate() {
        let part = PartFile::read(&args.folder.join(file_name));
        if part.description.is_empty() {
            println!("{:>3}. {}", index + 1, file_name);
        } else {
            println!(
                "{:>3}. {:<28} {}",
                index + 1,
                file_name,
                style(&part.description).dim()
            );
        }
    }

    if !global.quiet {
        println!("{} part(s)", style(sorted.len()).cyan());
    }
    Ok(())
}
