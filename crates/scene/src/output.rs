use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::scene::Scene;
use crate::SceneError;

/// On-disk layout of a generated dataset split.
///
/// Images go to `<root>/images/<split>/synthetic_<n>.<ext>` and labels to
/// `<root>/labels/<split>/synthetic_<n>.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    images_dir: PathBuf,
    labels_dir: PathBuf,
    extension: String,
}

impl DatasetLayout {
    /// Layout for `split` under `root`, writing PNG images.
    pub fn new(root: impl AsRef<Path>, split: &str) -> Self {
        let root = root.as_ref();
        Self {
            images_dir: root.join("images").join(split),
            labels_dir: root.join("labels").join(split),
            extension: "png".to_string(),
        }
    }

    /// Encode images with another format, chosen by file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Create both output directories.
    pub fn create_dirs(&self) -> Result<(), SceneError> {
        fs::create_dir_all(&self.images_dir)?;
        fs::create_dir_all(&self.labels_dir)?;
        Ok(())
    }

    /// Directory holding images.
    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Image path for `index`.
    pub fn image_path(&self, index: u64) -> PathBuf {
        self.images_dir
            .join(format!("synthetic_{index}.{}", self.extension))
    }

    /// Label path for `index`.
    pub fn label_path(&self, index: u64) -> PathBuf {
        self.labels_dir.join(format!("synthetic_{index}.txt"))
    }

    /// Write the image and its sidecar for `index`. A scene without labels
    /// still produces an (empty) sidecar.
    pub fn write(&self, index: u64, scene: &Scene) -> Result<(), SceneError> {
        scene.canvas.to_rgb().save(self.image_path(index))?;
        fs::write(self.label_path(index), scene.labels())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_share_index() {
        let layout = DatasetLayout::new("datasets/icon", "train");
        assert_eq!(
            layout.image_path(7),
            PathBuf::from("datasets/icon/images/train/synthetic_7.png")
        );
        assert_eq!(
            layout.label_path(7),
            PathBuf::from("datasets/icon/labels/train/synthetic_7.txt")
        );
        let jpg = layout.with_extension("jpg");
        assert_eq!(
            jpg.image_path(0),
            PathBuf::from("datasets/icon/images/train/synthetic_0.jpg")
        );
    }
}
