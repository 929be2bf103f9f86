//! Platform packaging tables and the icon writer.
//!
//! The rasterizer and encoder know nothing about Android or Flutter. This
//! module is the thin orchestration layer on top of them: per-platform data
//! tables describing which sizes land in which directories, a writer that
//! owns every file-system side effect, and a JSON manifest describing what
//! was written.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::png;
use crate::raster::{IconRasterizer, IconStyle};

// ============================================================================
// Target tables
// ============================================================================

/// One row of a platform's icon table: where a file goes, how large it is,
/// and which background treatment it gets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconTarget {
    /// Directory relative to the output root, e.g. `mipmap-xhdpi`.
    pub dir: String,

    /// File name within `dir`.
    pub file_name: String,

    /// Canvas size in pixels (icons are always square).
    pub size: u32,

    /// Background treatment.
    pub style: IconStyle,
}

impl IconTarget {
    pub fn new(dir: &str, file_name: &str, size: u32, style: IconStyle) -> Self {
        Self {
            dir: dir.to_string(),
            file_name: file_name.to_string(),
            size,
            style,
        }
    }

    /// The target's path relative to the output root.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.file_name)
    }
}

/// Android mipmap density classes and their legacy launcher sizes.
const ANDROID_DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// The Android launcher-icon table.
///
/// Each density gets the legacy and round launcher icons at its native size,
/// plus an adaptive-icon foreground scaled from the 48 dp base grid to the
/// 108 dp adaptive canvas.
pub fn android_targets() -> Vec<IconTarget> {
    let mut targets = Vec::with_capacity(ANDROID_DENSITIES.len() * 3);
    for (density, size) in ANDROID_DENSITIES {
        let dir = format!("mipmap-{density}");
        targets.push(IconTarget::new(&dir, "ic_launcher.png", size, IconStyle::Opaque));
        targets.push(IconTarget::new(
            &dir,
            "ic_launcher_round.png",
            size,
            IconStyle::Opaque,
        ));
        targets.push(IconTarget::new(
            &dir,
            "ic_launcher_foreground.png",
            size * 108 / 48,
            IconStyle::Transparent,
        ));
    }
    targets
}

/// The Flutter asset-icon table: one opaque launcher icon and one
/// transparent adaptive foreground, both at 1024 px.
pub fn flutter_targets() -> Vec<IconTarget> {
    vec![
        IconTarget::new("assets/icon", "app_icon.png", 1024, IconStyle::Opaque),
        IconTarget::new(
            "assets/icon",
            "app_icon_foreground.png",
            1024,
            IconStyle::Transparent,
        ),
    ]
}

// ============================================================================
// Manifest
// ============================================================================

/// One generated file, as recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry {
    /// Path relative to the output root, with `/` separators.
    pub path: String,
    pub size: u32,
    pub style: IconStyle,
}

/// JSON descriptor of a generation run, emitted next to the icons so
/// packaging tooling can reference the file names without re-deriving the
/// tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub icons: Vec<ManifestEntry>,
}

impl Manifest {
    /// Serializes the manifest to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the manifest to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserializes a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// IconWriter
// ============================================================================

/// Renders, encodes, and writes a table of icon targets beneath a root
/// directory.
///
/// This is the only part of the crate that touches the file system. Each
/// file is fully encoded in memory before anything is written, so a failed
/// run never leaves a truncated PNG behind.
pub struct IconWriter {
    root: PathBuf,
}

impl IconWriter {
    /// Creates a writer rooted at `root`. The directory is created lazily as
    /// targets are written.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes every target in the table, returning a manifest of the files
    /// produced.
    ///
    /// Stops at the first failure; files already written remain on disk.
    pub fn write_targets(&self, targets: &[IconTarget]) -> Result<Manifest> {
        let mut manifest = Manifest::default();
        for target in targets {
            let buffer = IconRasterizer::render(target.size, target.style)?;
            let bytes = png::encode(&buffer)?;

            let dir = self.root.join(&target.dir);
            fs::create_dir_all(&dir)?;
            let path = dir.join(&target.file_name);
            fs::write(&path, &bytes)?;
            log::info!(
                "wrote {} ({}x{}, {} bytes)",
                path.display(),
                target.size,
                target.size,
                bytes.len()
            );

            manifest.icons.push(ManifestEntry {
                path: format!("{}/{}", target.dir, target.file_name),
                size: target.size,
                style: target.style,
            });
        }
        Ok(manifest)
    }

    /// Writes the manifest as `icons.json` under the root, returning its
    /// path.
    pub fn write_manifest(&self, manifest: &Manifest) -> Result<PathBuf> {
        fs::create_dir_all(&self.root)?;
        let path = self.root.join("icons.json");
        fs::write(&path, manifest.to_json_pretty()?)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_table_matches_density_map() {
        let targets = android_targets();
        assert_eq!(targets.len(), 15);

        let launcher = |density: &str| {
            targets
                .iter()
                .find(|t| t.dir == format!("mipmap-{density}") && t.file_name == "ic_launcher.png")
                .unwrap()
        };
        assert_eq!(launcher("mdpi").size, 48);
        assert_eq!(launcher("xxxhdpi").size, 192);

        // Adaptive foregrounds scale by 108/48 and are transparent.
        let fg = targets
            .iter()
            .find(|t| t.dir == "mipmap-xxxhdpi" && t.file_name == "ic_launcher_foreground.png")
            .unwrap();
        assert_eq!(fg.size, 432);
        assert_eq!(fg.style, IconStyle::Transparent);
    }

    #[test]
    fn flutter_table() {
        let targets = flutter_targets();
        assert_eq!(targets.len(), 2);
        assert!(targets.iter().all(|t| t.size == 1024));
        assert_eq!(targets[0].style, IconStyle::Opaque);
        assert_eq!(targets[1].style, IconStyle::Transparent);
    }

    #[test]
    fn writer_produces_decodable_files() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = IconWriter::new(tmp.path());

        let targets = vec![
            IconTarget::new("a", "one.png", 16, IconStyle::Opaque),
            IconTarget::new("a/b", "two.png", 24, IconStyle::Transparent),
        ];
        let manifest = writer.write_targets(&targets).unwrap();
        assert_eq!(manifest.icons.len(), 2);

        for target in &targets {
            let path = tmp.path().join(target.relative_path());
            let bytes = fs::read(&path).unwrap();
            let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
            assert_eq!(decoded.width(), target.size);
            assert_eq!(decoded.height(), target.size);
        }
    }

    #[test]
    fn manifest_json_round_trip() {
        let manifest = Manifest {
            icons: vec![ManifestEntry {
                path: "mipmap-mdpi/ic_launcher.png".into(),
                size: 48,
                style: IconStyle::Opaque,
            }],
        };

        let json = manifest.to_json().unwrap();
        // kebab-case styles, per IconStyle's serde representation.
        assert!(json.contains("\"icons\""));
        assert!(json.contains("\"opaque\""));

        let restored = Manifest::from_json(&json).unwrap();
        assert_eq!(restored, manifest);
    }

    #[test]
    fn manifest_file_written_under_root() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = IconWriter::new(tmp.path());

        let manifest = writer
            .write_targets(&[IconTarget::new(".", "icon.png", 8, IconStyle::Opaque)])
            .unwrap();
        let path = writer.write_manifest(&manifest).unwrap();

        assert!(path.ends_with("icons.json"));
        let restored = Manifest::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(restored, manifest);
    }
}
