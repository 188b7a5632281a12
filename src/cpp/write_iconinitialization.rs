use super::WriteIconData;
use crate::dom::{DomImage, DomUI};
use crate::driver::Driver;
use crate::option::Options;
use crate::treewalker::TreeWalker;
use crate::utils::fix_string;
use std::collections::HashSet;

/// Name of the generated function turning an `IconID` into a pixmap.
pub const ICON_FROM_DATA_FUNCTION: &str = "qt_get_icon";

/// Writes the icon lookup function: the image data arrays followed by a
/// `switch` with one `case` per image and a catch-all `default`.
pub struct WriteIconInitialization<'a> {
    driver: &'a Driver,
    options: &'a Options,
    out: &'a mut String,
    cases: HashSet<String>,
}

impl<'a> WriteIconInitialization<'a> {
    pub fn new(driver: &'a Driver, options: &'a Options, out: &'a mut String) -> Self {
        WriteIconInitialization { driver, options, out, cases: HashSet::new() }
    }
}

impl TreeWalker for WriteIconInitialization<'_> {
    fn accept_ui(&mut self, ui: &DomUI) {
        let Some(images) = &ui.images else {
            return;
        };
        let indent = &self.options.indent;
        emitln!(self.out, "{indent}static QPixmap {ICON_FROM_DATA_FUNCTION}(IconID id)");
        emitln!(self.out, "{indent}{{");
        WriteIconData::new(self.driver, self.options, self.out).accept_ui(ui);
        emitln!(self.out, "{indent}switch (id) {{");
        self.accept_images(images);
        emitln!(self.out, "{indent}{indent}default: return QPixmap();");
        emitln!(self.out, "{indent}}} // switch");
        emitln!(self.out, "{indent}}} // icon\n");
    }

    fn accept_image(&mut self, image: &DomImage) {
        let name = image.name();
        if name.is_empty() || !self.cases.insert(name.to_owned()) {
            return;
        }
        let ind = format!("{0}{0}", self.options.indent);
        let data = format!("{name}_data");
        emit!(self.out, "{ind}case {name}_ID: ");
        if image.is_xpm_gz() {
            emitln!(self.out, "return QPixmap((const char**){data});");
        } else {
            emitln!(
                self.out,
                "{{ QImage img; img.loadFromData({data}, sizeof({data}) - 1, {}); return QPixmap::fromImage(img); }}",
                fix_string(image.format(), &ind)
            );
        }
    }
}
