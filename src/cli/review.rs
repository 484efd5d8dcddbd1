//! Terminal implementation of the operator interaction boundary
//!
//! Renders the review screen for one cabinet and turns dialoguer prompts
//! into [`ReviewAction`] values. Rendering happens on every call, so the
//! screen always reflects the session state after the previous action.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::core::{NoticeKind, OperatorUi, ReviewAction, ReviewScreen, WorklistError};

const ACTIONS: &[&str] = &[
    "Move a part up",
    "Move a part down",
    "Set a quantity",
    "Increase a quantity",
    "Decrease a quantity",
    "Save and continue",
    "Save and finish",
];

pub struct ConsoleUi {
    quiet: bool,
}

impl ConsoleUi {
    pub fn new(quiet: bool) -> Self {
        ConsoleUi { quiet }
    }

    /// Ask for a 1-based part number, retrying until it is valid.
    fn prompt_part_index(&self, screen: &ReviewScreen<'_>) -> Result<usize, WorklistError> {
        loop {
            let raw: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(format!("Part number (1-{})", screen.parts.len()))
                .interact_text()
                .map_err(prompt_error)?;
            if let Ok(number) = raw.trim().parse::<usize>() {
                if (1..=screen.parts.len()).contains(&number) {
                    return Ok(number - 1);
                }
            }
            println!(
                "{}",
                style(format!("Enter a number between 1 and {}", screen.parts.len())).yellow()
            );
        }
    }
}

impl OperatorUi for ConsoleUi {
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Info => {
                if !self.quiet {
                    println!("{} {}", style("✓").green(), message);
                }
            }
            NoticeKind::Error => eprintln!("{} {}", style("✗").red(), message),
        }
    }

    fn review(&mut self, screen: &ReviewScreen<'_>) -> Result<ReviewAction, WorklistError> {
        println!();
        println!(
            "{} {}   {} {}/{}",
            style("Cabinet:").bold(),
            style(screen.cabinet).cyan(),
            progress_bar(screen.current, screen.total),
            screen.current,
            screen.total,
        );
        for (index, part) in screen.parts.iter().enumerate() {
            println!(
                "{:>3}. {:<28} x{}",
                index + 1,
                part,
                screen.quantities.get(index).copied().unwrap_or(1)
            );
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Action")
            .items(ACTIONS)
            .default(5)
            .interact()
            .map_err(prompt_error)?;

        match choice {
            0 => Ok(ReviewAction::MoveUp(self.prompt_part_index(screen)?)),
            1 => Ok(ReviewAction::MoveDown(self.prompt_part_index(screen)?)),
            2 => {
                let index = self.prompt_part_index(screen)?;
                let raw: String = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Quantity")
                    .interact_text()
                    .map_err(prompt_error)?;
                Ok(ReviewAction::SetQuantity {
                    name: screen.parts[index].clone(),
                    raw,
                })
            }
            3 | 4 => {
                let index = self.prompt_part_index(screen)?;
                Ok(ReviewAction::AdjustQuantity {
                    name: screen.parts[index].clone(),
                    delta: if choice == 3 { 1 } else { -1 },
                })
            }
            5 => Ok(ReviewAction::SaveAndContinue),
            _ => Ok(ReviewAction::SaveAndFinish),
        }
    }
}

fn prompt_error(e: dialoguer::Error) -> WorklistError {
    WorklistError::Prompt {
        message: e.to_string(),
    }
}

/// Textual progress bar over the cabinets of the run.
fn progress_bar(current: usize, total: usize) -> String {
    const WIDTH: usize = 20;
    let filled = (WIDTH * current) / total.max(1);
    let filled = filled.min(WIDTH);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}
