//! Prune command - delete images the JSON does not reference

use anyhow::Result;

use super::{Outcome, PipelineOptions};
use crate::execute;
use crate::reconcile;
use crate::storage;
use crate::ui::{self, Confirm};

pub fn run(opts: &PipelineOptions, confirm: &mut dyn Confirm) -> Result<Outcome> {
    ui::info(&format!("Loading JSON data from: {}", opts.json_file.display()));
    let document = storage::load(&opts.json_file)?;

    let referenced = reconcile::referenced_filenames(&document);
    ui::info(&format!("Found {} referenced images in JSON", referenced.len()));

    ui::info(&format!("Scanning folder: {}", opts.data_folder.display()));
    let listing = reconcile::list_folder(&opts.data_folder)?;
    ui::info(&format!("Found {} images in folder", reconcile::count_images(&listing)));

    let unused = reconcile::find_unused(&document, &listing);

    if unused.is_empty() {
        ui::success("No unused images found. All images are referenced in the JSON data.");
        return Ok(Outcome::NothingToDo);
    }

    ui::warn(&format!("Found {} unused image(s):", unused.len()));
    for name in &unused {
        println!("  - {}", name);
    }

    if opts.dry_run {
        ui::info("Dry run mode: no files were deleted");
        return Ok(Outcome::DryRun { planned: unused.len() });
    }

    let question = format!("Do you want to delete these {} unused images?", unused.len());
    if !confirm.confirm(&question)? {
        ui::info("Operation cancelled");
        return Ok(Outcome::Cancelled);
    }

    let report = execute::delete_unused(&opts.data_folder, &unused);

    for name in &report.deleted {
        ui::debug(&format!("Deleted: {}", name));
    }
    for (name, e) in &report.failures {
        ui::error(&format!("Error deleting {}: {}", name, e));
    }

    ui::summary("Deleted", report.deleted.len(), 0, report.failures.len());
    ui::success(&format!("Successfully deleted {} unused images", report.deleted.len()));

    Ok(Outcome::Applied {
        succeeded: report.deleted.len(),
        failed: report.failures.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::AssumeYes;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct Decline;

    impl Confirm for Decline {
        fn confirm(&mut self, _question: &str) -> std::io::Result<bool> {
            Ok(false)
        }
    }

    struct Forbidden;

    impl Confirm for Forbidden {
        fn confirm(&mut self, question: &str) -> std::io::Result<bool> {
            panic!("unexpected prompt: {}", question);
        }
    }

    fn fixture() -> (TempDir, PipelineOptions) {
        let dir = TempDir::new().unwrap();
        let imgs = dir.path().join("imgs");
        fs::create_dir(&imgs).unwrap();
        fs::write(imgs.join("a.png"), b"a").unwrap();
        fs::write(imgs.join("b.png"), b"b").unwrap();
        fs::write(imgs.join("readme.txt"), b"r").unwrap();

        let json_file = dir.path().join("data.json");
        fs::write(&json_file, r#"[{"title": "A", "image_url": "imgs/a.png"}]"#).unwrap();

        let opts = PipelineOptions { json_file, data_folder: imgs, dry_run: false };
        (dir, opts)
    }

    fn exists(dir: &Path, name: &str) -> bool {
        dir.join(name).exists()
    }

    #[test]
    fn confirmed_run_deletes_only_unreferenced_images() {
        let (_dir, opts) = fixture();

        let outcome = run(&opts, &mut AssumeYes).unwrap();

        assert_eq!(outcome, Outcome::Applied { succeeded: 1, failed: 0 });
        assert!(exists(&opts.data_folder, "a.png"));
        assert!(!exists(&opts.data_folder, "b.png"));
        assert!(exists(&opts.data_folder, "readme.txt"));

        assert_eq!(run(&opts, &mut Forbidden).unwrap(), Outcome::NothingToDo);
    }

    #[test]
    fn dry_run_never_prompts_or_deletes() {
        let (_dir, mut opts) = fixture();
        opts.dry_run = true;

        let outcome = run(&opts, &mut Forbidden).unwrap();

        assert_eq!(outcome, Outcome::DryRun { planned: 1 });
        assert!(exists(&opts.data_folder, "b.png"));
    }

    #[test]
    fn declined_prompt_cancels() {
        let (_dir, opts) = fixture();

        assert_eq!(run(&opts, &mut Decline).unwrap(), Outcome::Cancelled);
        assert!(exists(&opts.data_folder, "b.png"));
    }

    #[test]
    fn missing_folder_is_fatal() {
        let (dir, mut opts) = fixture();
        opts.data_folder = dir.path().join("nope");

        let err = run(&opts, &mut Forbidden).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::FolderNotFound(_))));
    }
}
