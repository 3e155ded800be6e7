use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use exif::{In, Reader, Tag, Value};
use log::{debug, warn};
use raylib::prelude::*;
use crate::error::{Result, SlideshowError};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Image files directly inside `dir`, sorted by file name.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| SlideshowError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| SlideshowError::ReadDir {
                dir: dir.to_path_buf(),
                source,
            })?
            .path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        Err(SlideshowError::NoImages { dir: dir.to_path_buf() })
    } else {
        Ok(paths)
    }
}

fn has_image_extension(path: &Path) -> bool {
    extension_of(path)
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().and_then(|s| s.to_str()).map(str::to_lowercase)
}

/// Quarter turns needed to show an image upright.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Rotation {
    None,
    Clockwise,
    Half,
    CounterClockwise,
}

impl Rotation {
    // 1 = normal, 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Flips are ignored.
    pub fn from_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }

    fn apply(self, image: &mut Image) {
        match self {
            Rotation::None => {}
            Rotation::Clockwise => image.rotate_cw(),
            Rotation::Half => {
                image.rotate_cw();
                image.rotate_cw();
            }
            Rotation::CounterClockwise => image.rotate_ccw(),
        }
    }
}

fn read_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // not fatal, the image is shown as stored
            warn!("Could not read EXIF data for {}: {}", path.display(), e);
            1
        }
    }
}

/// Loads an image, turns it upright according to its EXIF orientation
/// (JPEG only) and uploads it as a texture.
pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D> {
    let bytes = fs::read(path).map_err(|source| SlideshowError::ReadImage {
        path: path.to_path_buf(),
        source,
    })?;

    let extension = extension_of(path).unwrap_or_default();
    let rotation = if extension == "jpg" || extension == "jpeg" {
        Rotation::from_orientation(read_orientation(path, &bytes))
    } else {
        Rotation::None
    };

    let mut image = Image::load_image_from_mem(&format!(".{}", extension), &bytes).map_err(|e| {
        SlideshowError::DecodeImage {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    if rotation != Rotation::None {
        debug!("Rotating {} ({:?})", path.display(), rotation);
        rotation.apply(&mut image);
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| SlideshowError::Texture {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn keeps_only_images_sorted_by_name() {
        let dir = tempdir().expect("create temp dir");
        for name in ["c.PNG", "a.jpg", "notes.txt", "b.jpeg", "d.gif", "e.bmp", "noext"] {
            fs::write(dir.path().join(name), b"x").expect("write file");
        }
        fs::create_dir(dir.path().join("z.png")).expect("create subdir");

        let paths = load_sorted_image_paths(dir.path()).expect("images found");
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.jpg", "b.jpeg", "c.PNG", "d.gif", "e.bmp"]);
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let dir = tempdir().expect("create temp dir");
        fs::write(dir.path().join("readme.md"), b"x").expect("write file");
        let err = load_sorted_image_paths(dir.path()).unwrap_err();
        assert!(matches!(err, SlideshowError::NoImages { .. }));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().expect("create temp dir");
        let err = load_sorted_image_paths(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, SlideshowError::ReadDir { .. }));
    }

    #[test]
    fn orientation_maps_to_rotation() {
        assert_eq!(Rotation::from_orientation(1), Rotation::None);
        assert_eq!(Rotation::from_orientation(3), Rotation::Half);
        assert_eq!(Rotation::from_orientation(6), Rotation::Clockwise);
        assert_eq!(Rotation::from_orientation(8), Rotation::CounterClockwise);
        assert_eq!(Rotation::from_orientation(2), Rotation::None);
    }

    #[test]
    fn unreadable_exif_defaults_to_upright() {
        assert_eq!(read_orientation(Path::new("x.jpg"), b"not a jpeg"), 1);
    }
}
