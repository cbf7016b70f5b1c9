use crate::error::{MarkerOcrError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
}

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Lists images directly inside `folder`, sorted by file name.
pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.is_dir() {
        return Err(MarkerOcrError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|source| MarkerOcrError::Enumeration {
            path: folder.display().to_string(),
            source,
        })?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let is_image = path
            .extension()
            .map(|ext| is_image_extension(&ext.to_string_lossy()))
            .unwrap_or(false);

        if is_image {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            images.push(ImageInfo {
                path: path.to_path_buf(),
                file_name,
            });
        }
    }

    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

fn is_image_extension(ext: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_is_image_extension() {
        assert!(is_image_extension("jpg"));
        assert!(is_image_extension("JPG"));
        assert!(is_image_extension("jpeg"));
        assert!(is_image_extension("JpEg"));
        assert!(is_image_extension("png"));
        assert!(!is_image_extension("txt"));
        assert!(!is_image_extension("gif"));
        assert!(!is_image_extension("webp"));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(matches!(result, Err(MarkerOcrError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_file_instead_of_folder() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("map.png");
        File::create(&file).unwrap();

        assert!(scan_folder(&file).is_err());
    }

    #[test]
    fn test_scan_folder_filters_extensions() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("a.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("b.PNG")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("c.Jpeg")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("notes.txt")).unwrap().write_all(b"text").unwrap();
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let result = scan_folder(dir.path()).unwrap();
        let names: Vec<&str> = result.iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.PNG", "c.Jpeg"]);
    }

    #[test]
    fn test_scan_folder_does_not_recurse() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("inner.png")).unwrap();

        assert!(scan_folder(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_images_sorted_by_filename() {
        let dir = tempdir().unwrap();

        File::create(dir.path().join("c.jpg")).unwrap();
        File::create(dir.path().join("a.jpg")).unwrap();
        File::create(dir.path().join("b.jpg")).unwrap();

        let result = scan_folder(dir.path()).unwrap();
        assert_eq!(result[0].file_name, "a.jpg");
        assert_eq!(result[1].file_name, "b.jpg");
        assert_eq!(result[2].file_name, "c.jpg");
    }
}
