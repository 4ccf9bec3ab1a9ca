// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Export of composites and their notes to disk.
//!
//! The composite is written as a PNG; the notes go into a sidecar file
//! next to it in YAML or JSON, chosen by the sidecar's extension.

use crate::compositor::CompositedImage;
use crate::models::{project::ProjectData, Note};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

fn write_sidecar(data: &ProjectData, path: &Path, json: bool) -> Result<()> {
    let text = if json {
        serde_json::to_string_pretty(data)?
    } else {
        serde_yaml::to_string(data)?
    };
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}

/// Write the composite PNG to `image_path` and a notes sidecar to `sidecar_path`.
///
/// Returns the sidecar path. The sidecar records the image by file name so
/// the pair can be moved together.
pub fn export_composite(
    composite: &CompositedImage,
    notes: &[Note],
    image_path: &Path,
    sidecar_path: &Path,
) -> Result<PathBuf> {
    let extension = sidecar_path.extension().and_then(|s| s.to_str());
    if !matches!(extension, Some("yaml") | Some("yml") | Some("json")) {
        bail!("Unsupported file extension: {:?}", extension);
    }

    std::fs::write(image_path, composite.png_bytes())
        .with_context(|| format!("Failed to write {}", image_path.display()))?;

    let image_file = image_path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();
    let data = ProjectData::new(
        image_file,
        composite.width(),
        composite.height(),
        notes.to_vec(),
    );

    write_sidecar(&data, sidecar_path, extension == Some("json"))?;

    log::info!(
        "Exported composite to {} with {} notes",
        image_path.display(),
        notes.len()
    );
    Ok(sidecar_path.to_path_buf())
}

/// Sidecar path next to an exported PNG (`shot.png` -> `shot.yaml`).
pub fn sidecar_for(image_path: &Path) -> PathBuf {
    image_path.with_extension("yaml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaletteColor;
    use image::RgbaImage;

    fn notes() -> Vec<Note> {
        vec![
            Note::new("first", PaletteColor::Red).unwrap(),
            Note::new("second", PaletteColor::Yellow).unwrap(),
        ]
    }

    #[test]
    fn test_export_yaml_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("annotated.png");
        let composite = CompositedImage::encode(&RgbaImage::new(30, 20)).unwrap();

        let sidecar = export_composite(&composite, &notes(), &image_path, &sidecar_for(&image_path)).unwrap();
        assert_eq!(sidecar, dir.path().join("annotated.yaml"));

        let written = std::fs::read(&image_path).unwrap();
        assert_eq!(written, composite.png_bytes());

        let data: ProjectData =
            serde_yaml::from_str(&std::fs::read_to_string(&sidecar).unwrap()).unwrap();
        assert_eq!(data.image_file, "annotated.png");
        assert_eq!((data.image_width, data.image_height), (30, 20));
        assert_eq!(data.notes, notes());
    }

    #[test]
    fn test_export_json_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("out.png");
        let sidecar_path = dir.path().join("out.json");
        let composite = CompositedImage::encode(&RgbaImage::new(4, 4)).unwrap();

        export_composite(&composite, &notes(), &image_path, &sidecar_path).unwrap();
        let data: ProjectData =
            serde_json::from_str(&std::fs::read_to_string(&sidecar_path).unwrap()).unwrap();
        assert_eq!(data.notes[1].color(), PaletteColor::Yellow);
    }

    #[test]
    fn test_sidecar_with_blank_note_is_rejected() {
        let json = r#"{"image_file":"x.png","image_width":1,"image_height":1,"notes":[{"text":"   ","color":"red"}]}"#;
        assert!(serde_json::from_str::<ProjectData>(json).is_err());
    }

    #[test]
    fn test_unsupported_sidecar_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("out.png");
        let composite = CompositedImage::encode(&RgbaImage::new(4, 4)).unwrap();

        let result = export_composite(&composite, &[], &image_path, &dir.path().join("out.txt"));
        assert!(result.is_err());
        assert!(!image_path.exists());
    }
}
