//! Sync command implementation
//!
//! Replaces every local copy of the repository's skills with the current version,
//! regardless of what is installed.

use super::helpers::{locate_skills, open_source};
use crate::cli::SyncArgs;
use crate::common::fs::{CopyOptions, copy_dir_recursive, remove_dir_all};
use crate::common::paths::target_dir;
use crate::error::{Result, file_write_failed};
use crate::git::{GitCli, Vcs};
use crate::installer::{ProvenanceRecord, ensure_separate, provenance};
use crate::interrupt;
use crate::skill::scan_children;
use crate::ui::Printer;
use crate::ui::formatter::{SimpleFormatter, SkillListFormatter};

/// Run sync command
pub fn run(args: SyncArgs, printer: &Printer) -> Result<()> {
    run_with(&GitCli, args, printer)
}

pub(crate) fn run_with(vcs: &dyn Vcs, args: SyncArgs, printer: &Printer) -> Result<()> {
    let target = target_dir(args.target.target.as_deref(), args.target.project)?;
    printer.info(format!("Syncing {} into {}", args.source.repo, target.display()));

    let source = open_source(vcs, &args.source.repo, args.source.branch.as_deref(), printer)?;
    let located = locate_skills(&source, printer);
    if located.skills.is_empty() {
        printer.warning(format!("No skills found in {}", args.source.repo));
        return Ok(());
    }

    for skill in &located.skills {
        ensure_separate(skill, &target.join(&skill.folder_name))?;
    }

    std::fs::create_dir_all(&target).map_err(|e| file_write_failed(&target, e))?;
    let record = ProvenanceRecord::new(&source.locator, source.tree.commit(vcs));

    for skill in &located.skills {
        interrupt::check()?;
        let dest = target.join(&skill.folder_name);
        if dest.exists() {
            remove_dir_all(&dest)?;
        }
        copy_dir_recursive(&skill.path, &dest, &CopyOptions::exclude_git())?;
        provenance::write(&dest, &record)?;
        printer.success(format!("Synced: {}", skill.display_name()));
    }

    let installed = scan_children(&target);
    println!("\n{}", printer.bold(format!("Installed skills in {}:", target.display())));
    print!("{}", SimpleFormatter.format(&installed, printer));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use crate::cli::{RepoArgs, TargetArgs};
    use crate::git::fake::FakeVcs;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial(interrupt)]
    fn test_sync_overwrites_local_copies() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("skills");
        fs::create_dir_all(target.join("pdf")).unwrap();
        fs::write(target.join("pdf/SKILL.md"), "stale").unwrap();
        fs::write(target.join("pdf/local-only.txt"), "gone after sync").unwrap();

        let vcs = FakeVcs::serving(&[("pdf/SKILL.md", "---\nname: pdf\n---\nfresh\n")]);
        let args = SyncArgs {
            source: RepoArgs {
                repo: "https://github.com/o/r".to_string(),
                branch: Some("main".to_string()),
            },
            target: TargetArgs {
                project: false,
                target: Some(target.clone()),
            },
        };

        run_with(&vcs, args, &Printer::new(false, false)).unwrap();

        assert!(fs::read_to_string(target.join("pdf/SKILL.md")).unwrap().contains("fresh"));
        assert!(!target.join("pdf/local-only.txt").exists());
        assert!(provenance::read(&target.join("pdf")).is_some());
    }

    #[test]
    #[serial(interrupt)]
    fn test_sync_from_the_target_itself_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("skills");
        fs::create_dir_all(target.join("pdf")).unwrap();
        fs::write(target.join("pdf/SKILL.md"), "---\nname: pdf\n---\nOnly copy\n").unwrap();

        let vcs = FakeVcs::default();
        let args = SyncArgs {
            source: RepoArgs {
                repo: temp.path().to_string_lossy().into_owned(),
                branch: None,
            },
            target: TargetArgs {
                project: false,
                target: Some(target.clone()),
            },
        };

        let err = run_with(&vcs, args, &Printer::new(false, false)).unwrap_err();

        assert!(matches!(err, crate::error::SkillsError::SourceOverlapsDestination { .. }));
        assert!(vcs.calls().is_empty());
        assert!(fs::read_to_string(target.join("pdf/SKILL.md")).unwrap().contains("Only copy"));
        assert!(provenance::read(&target.join("pdf")).is_none());
    }
}
