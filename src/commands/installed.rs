//! Installed command implementation
//!
//! Lists what is in the personal and project skills directories, or in a custom one.

use std::path::PathBuf;

use crate::cli::InstalledArgs;
use crate::common::paths::{Scope, distinct_roots};
use crate::error::Result;
use crate::skill::scan_children;
use crate::ui::Printer;
use crate::ui::formatter;

/// Run installed command
pub fn run(args: InstalledArgs, printer: &Printer) -> Result<()> {
    let sections: Vec<(&str, PathBuf)> = match &args.target.target {
        Some(dir) => {
            if !dir.is_dir() {
                printer.warning(format!("Directory not found: {}", dir.display()));
                return Ok(());
            }
            vec![("CUSTOM", dir.clone())]
        }
        None => {
            let mut sections = Vec::new();
            if !args.target.project {
                sections.push(("PERSONAL", Scope::Personal.skills_dir()?));
            }
            sections.push(("PROJECT", Scope::Project.skills_dir()?));
            distinct_roots(sections)
        }
    };

    let list = formatter::for_detail(args.detail, true);
    let mut total = 0;

    for (label, dir) in &sections {
        println!(
            "\n{} Location: {}",
            printer.bold(format!("[{label}]")),
            dir.display()
        );

        let skills = scan_children(dir);
        if skills.is_empty() {
            println!("  {}", printer.yellow("No skills installed"));
            continue;
        }
        total += skills.len();
        print!("{}", list.format(&skills, printer));
    }

    println!("\n{}", printer.bold(format!("Total: {total} skills")));
    Ok(())
}
