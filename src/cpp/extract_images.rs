use super::write_icondata::write_image;
use crate::dom::{DomImage, DomUI};
use crate::driver::Driver;
use crate::option::Options;
use crate::treewalker::TreeWalker;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Writes every embedded image to `images/<name>.<ext>` next to the resource
/// collection file and lists them in that file.
pub struct ExtractImages<'a> {
    driver: &'a mut Driver,
    options: &'a Options,
    images_dir: PathBuf,
    manifest: String,
}

impl<'a> ExtractImages<'a> {
    pub fn new(driver: &'a mut Driver, options: &'a Options) -> Self {
        ExtractImages { driver, options, images_dir: PathBuf::new(), manifest: String::new() }
    }

    fn report(&mut self, message: String) {
        tracing::error!("{}: {message}", self.options.message_prefix());
        self.driver.add_problem(message);
    }
}

impl TreeWalker for ExtractImages<'_> {
    fn accept_ui(&mut self, ui: &DomUI) {
        if !self.options.extract_images {
            return;
        }
        let Some(images) = &ui.images else {
            return;
        };
        let Some(qrc) = self.options.qrc_output_file.as_deref() else {
            tracing::debug!("no resource file given, images stay embedded");
            return;
        };

        // no image is written unless the manifest can be
        let mut manifest_file = match fs::File::create(qrc) {
            Ok(file) => file,
            Err(e) => {
                self.report(format!("could not create resource file {}: {e}", qrc.display()));
                return;
            }
        };

        let dir = qrc.parent().map_or_else(|| Path::new(".").to_path_buf(), Path::to_path_buf);
        let images_dir = dir.join("images");
        if !images_dir.is_dir() {
            if let Err(e) = fs::create_dir_all(&images_dir) {
                self.report(format!("could not create image dir {}: {e}", images_dir.display()));
                return;
            }
        }
        self.images_dir = images_dir;

        let class_name = format!("{}{}", ui.class_name(), self.options.postfix);
        self.manifest.clear();
        emitln!(self.manifest, "<RCC>");
        emitln!(self.manifest, "    <qresource prefix=\"/{class_name}\" >");
        self.accept_images(images);
        emitln!(self.manifest, "    </qresource>");
        emitln!(self.manifest, "</RCC>");

        if let Err(e) = manifest_file.write_all(self.manifest.as_bytes()) {
            self.report(format!("could not write resource file {}: {e}", qrc.display()));
        }
    }

    fn accept_image(&mut self, image: &DomImage) {
        let file_name = format!("{}.{}", image.name(), image.extension());
        emitln!(self.manifest, "        <file>images/{file_name}</file>");

        let path = self.images_dir.join(&file_name);
        let contents = if image.is_xpm_gz() {
            let mut text = String::new();
            write_image(&mut text, "", false, image);
            text.into_bytes()
        } else {
            image.bytes()
        };
        match fs::write(&path, contents) {
            Ok(()) => tracing::debug!(path = %path.display(), "extracted image"),
            Err(e) => self.report(format!("could not create image file {}: {e}", path.display())),
        }
    }
}
