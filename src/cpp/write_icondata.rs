use crate::dom::{DomImage, DomUI};
use crate::driver::Driver;
use crate::option::Options;
use crate::treewalker::TreeWalker;
use crate::utils::fix_bytes;
use std::collections::HashSet;

/// Columns after which a quoted XPM row is broken into adjacent literals.
const XPM_LINE_LIMIT: usize = 512;

/// Writes the `<name>_data` array of every image declared in the `IconID` enum.
pub struct WriteIconData<'a> {
    driver: &'a Driver,
    options: &'a Options,
    out: &'a mut String,
    written: HashSet<String>,
}

impl<'a> WriteIconData<'a> {
    pub fn new(driver: &'a Driver, options: &'a Options, out: &'a mut String) -> Self {
        WriteIconData { driver, options, out, written: HashSet::new() }
    }
}

impl TreeWalker for WriteIconData<'_> {
    fn accept_ui(&mut self, ui: &DomUI) {
        if let Some(images) = &ui.images {
            self.accept_images(images);
        }
    }

    fn accept_image(&mut self, image: &DomImage) {
        let name = image.name();
        if !self.driver.contains_pixmap(name) || !self.written.insert(name.to_owned()) {
            return;
        }
        write_image(self.out, &self.options.indent, true, image);
    }
}

/// Writes `image` as a C array. `XPM.GZ` payloads are XPM source text and are
/// copied from their first row on; everything else becomes an escaped byte
/// literal.
pub fn write_image(out: &mut String, indent: &str, limit_xpm_lines: bool, image: &DomImage) {
    let name = image.name();
    let bytes = image.bytes();
    if image.is_xpm_gz() {
        let text = String::from_utf8_lossy(&bytes);
        emitln!(out, "{indent}/* XPM */");
        emitln!(out, "{indent}static const char* const {name}_data[] = {{ ");
        let body = text.find('"').map_or("", |start| &text[start..]);
        let mut column = 0;
        let mut in_quote = false;
        for c in body.chars() {
            out.push(c);
            match c {
                '\n' => column = 0,
                '"' => in_quote = !in_quote,
                _ => {}
            }
            column += 1;
            if limit_xpm_lines && column >= XPM_LINE_LIMIT && in_quote {
                out.push_str("\"\n\"");
                column = 1;
            }
        }
        if !body.trim_end().ends_with("};") {
            out.push_str("};");
        }
        emitln!(out, "\n");
    } else {
        emitln!(out, "{indent}static const unsigned char {name}_data[] =");
        emitln!(out, "{indent}{};\n", fix_bytes(&bytes, indent));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::DomImageData;

    fn image(name: &str, format: &str, hex: &str) -> DomImage {
        DomImage {
            attr_name: Some(name.to_owned()),
            data: Some(Box::new(DomImageData {
                attr_format: Some(format.to_owned()),
                text: hex.to_owned(),
                ..Default::default()
            })),
            ..Default::default()
        }
    }

    fn hex(text: &str) -> String {
        text.bytes().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn binary_image_is_escaped_literal() {
        let mut out = String::new();
        write_image(&mut out, "    ", true, &image("logo", "PNG", "89504e47"));
        assert_eq!(
            out,
            "    static const unsigned char logo_data[] =\n    \"\\211PNG\";\n\n"
        );
    }

    #[test]
    fn xpm_is_copied_as_text() {
        let xpm = "/* XPM */\nstatic char *x[] = {\n\"1 1 1 1\",\n\"a c None\",\n\"a\"\n};\n";
        let mut out = String::new();
        write_image(&mut out, "", false, &image("x", "XPM.GZ", &hex(xpm)));
        assert_eq!(
            out,
            "/* XPM */\nstatic const char* const x_data[] = { \n\"1 1 1 1\",\n\"a c None\",\n\"a\"\n};\n\n\n"
        );
    }

    #[test]
    fn only_declared_images_are_written() {
        let ui = DomUI::from_xml(
            r#"<ui version="4.0"><widget class="QWidget" name="Form"/>
              <images>
                <image name="a"><data format="PNG" length="1">00</data></image>
                <image name="b"><data format="PNG" length="1">01</data></image>
              </images></ui>"#,
        )
        .unwrap();
        let mut driver = Driver::new();
        driver.insert_pixmap("b");
        let options = Options::default();
        let mut out = String::new();
        WriteIconData::new(&driver, &options, &mut out).accept_ui(&ui);
        assert!(!out.contains("a_data"));
        assert!(out.contains("b_data"));
    }
}
