//! Zip archives of skills for upload to Claude Desktop
//!
//! Each skill becomes `<output>/<folder>.zip` with every entry prefixed by the folder
//! name, and `manifest.json` lists what was packed.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::{Result, SkillsError, file_read_failed, file_write_failed};
use crate::skill::Skill;

/// Name of the manifest written next to the archives
pub const MANIFEST_FILE: &str = "manifest.json";

/// One packed skill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub folder: String,
    pub description: Option<String>,
    /// Archive file name, relative to the manifest
    pub zip: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub skills: Vec<ManifestEntry>,
}

fn pack_failed(path: &Path, reason: impl ToString) -> SkillsError {
    SkillsError::PackFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Archive `skill` into `output_dir/<folder>.zip`, replacing an older archive.
pub fn pack_skill(skill: &Skill, output_dir: &Path) -> Result<ManifestEntry> {
    fs::create_dir_all(output_dir).map_err(|e| file_write_failed(output_dir, e))?;

    let zip_name = format!("{}.zip", skill.folder_name);
    let zip_path = output_dir.join(&zip_name);
    let file = File::create(&zip_path).map_err(|e| file_write_failed(&zip_path, e))?;

    let mut writer = zip::ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(&skill.path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(&skill.path)
            .map_err(|e| pack_failed(entry.path(), e))?;
        let name = entry_name(&skill.folder_name, relative);

        let bytes = fs::read(entry.path()).map_err(|e| file_read_failed(entry.path(), e))?;
        writer.start_file(name, options)?;
        writer.write_all(&bytes).map_err(|e| pack_failed(&zip_path, e))?;
    }

    let mut inner = writer.finish()?;
    inner.flush().map_err(|e| pack_failed(&zip_path, e))?;

    Ok(ManifestEntry {
        name: skill.display_name().to_string(),
        folder: skill.folder_name.clone(),
        description: skill.description.clone(),
        zip: zip_name,
    })
}

/// `folder/a/b.txt` with forward slashes on every platform
fn entry_name(folder: &str, relative: &Path) -> String {
    std::iter::once(folder.to_string())
        .chain(
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned()),
        )
        .collect::<Vec<_>>()
        .join("/")
}

/// Write `manifest` as `output_dir/manifest.json` and return its path.
pub fn write_manifest(output_dir: &Path, manifest: &Manifest) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(&path, json).map_err(|e| file_write_failed(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use tempfile::TempDir;

    fn make_skill(root: &Path) -> Skill {
        let dir = root.join("pdf");
        fs::create_dir_all(dir.join("scripts")).unwrap();
        fs::write(
            dir.join("SKILL.md"),
            "---\nname: PDF\ndescription: PDF tools\n---\nUse it\n",
        )
        .unwrap();
        fs::write(dir.join("scripts/run.py"), "print('hi')\n").unwrap();
        Skill::from_dir(&dir).unwrap()
    }

    #[test]
    fn test_pack_prefixes_entries_with_folder() {
        let temp = TempDir::new().unwrap();
        let skill = make_skill(temp.path());
        let out = temp.path().join("dist");

        let entry = pack_skill(&skill, &out).unwrap();
        assert_eq!(entry.zip, "pdf.zip");
        assert_eq!(entry.name, "PDF");

        let mut archive = zip::ZipArchive::new(File::open(out.join("pdf.zip")).unwrap()).unwrap();
        let mut names: Vec<String> = archive.file_names().map(ToString::to_string).collect();
        names.sort();
        assert_eq!(names, vec!["pdf/SKILL.md", "pdf/scripts/run.py"]);

        let mut content = String::new();
        archive
            .by_name("pdf/scripts/run.py")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "print('hi')\n");
    }

    #[test]
    fn test_manifest_shape() {
        let temp = TempDir::new().unwrap();
        let skill = make_skill(temp.path());
        let out = temp.path().join("dist");
        let manifest = Manifest {
            skills: vec![pack_skill(&skill, &out).unwrap()],
        };

        let path = write_manifest(&out, &manifest).unwrap();

        let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        let first = &value["skills"][0];
        assert_eq!(first["name"], "PDF");
        assert_eq!(first["folder"], "pdf");
        assert_eq!(first["description"], "PDF tools");
        assert_eq!(first["zip"], "pdf.zip");
    }

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name("pdf", Path::new("a/b.txt")), "pdf/a/b.txt");
        assert_eq!(entry_name("pdf", Path::new("SKILL.md")), "pdf/SKILL.md");
    }
}
