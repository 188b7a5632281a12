use std::path::PathBuf;

/// Code generation settings for one compilation.
#[derive(Debug, Clone)]
pub struct Options {
    /// Wrap the output in an `#ifndef`/`#define` include guard.
    pub header_protection: bool,
    /// Emit the "generated file" banner.
    pub copyright_header: bool,
    /// Emit `namespace Ui { class X: public Ui_X {}; }`.
    pub generate_namespace: bool,
    /// Call `QMetaObject::connectSlotsByName` at the end of `setupUi`.
    pub auto_connection: bool,
    /// Write embedded images to files plus a `.qrc` manifest instead of
    /// compiling them into the header.
    pub extract_images: bool,
    /// Guess `<classname>.h` for classes without a known header.
    pub implicit_includes: bool,
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub qrc_output_file: Option<PathBuf>,
    pub indent: String,
    pub prefix: String,
    pub postfix: String,
    /// Replaces `QApplication::translate("Class", ...)` by `func(...)`.
    pub translate_function: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            header_protection: true,
            copyright_header: true,
            generate_namespace: true,
            auto_connection: true,
            extract_images: false,
            implicit_includes: true,
            input_file: None,
            output_file: None,
            qrc_output_file: None,
            indent: " ".repeat(4),
            prefix: "Ui_".to_owned(),
            postfix: String::new(),
            translate_function: String::new(),
        }
    }
}

impl Options {
    /// Name used to prefix diagnostics.
    pub fn message_prefix(&self) -> String {
        match &self.input_file {
            Some(path) => path.display().to_string(),
            None => "stdin".to_owned(),
        }
    }
}
