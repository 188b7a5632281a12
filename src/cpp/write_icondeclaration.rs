use crate::dom::{DomImage, DomUI};
use crate::driver::Driver;
use crate::option::Options;
use crate::treewalker::TreeWalker;

/// Writes one `IconID` enumerator per embedded image, in document order.
pub struct WriteIconDeclaration<'a> {
    driver: &'a mut Driver,
    options: &'a Options,
    out: &'a mut String,
}

impl<'a> WriteIconDeclaration<'a> {
    pub fn new(driver: &'a mut Driver, options: &'a Options, out: &'a mut String) -> Self {
        WriteIconDeclaration { driver, options, out }
    }
}

impl TreeWalker for WriteIconDeclaration<'_> {
    fn accept_ui(&mut self, ui: &DomUI) {
        if let Some(images) = &ui.images {
            self.accept_images(images);
        }
    }

    fn accept_image(&mut self, image: &DomImage) {
        let name = image.name();
        if name.is_empty() || self.driver.contains_pixmap(name) {
            return;
        }
        self.driver.insert_pixmap(name);
        let indent = &self.options.indent;
        emitln!(self.out, "{indent}{indent}{name}_ID,");
    }
}
