//! Whole-file compilation: load a form, run the generators in order and write
//! the resulting header.

use crate::cpp::{WriteDeclaration, WriteIncludes};
use crate::customwidgets::CustomWidgetsInfo;
use crate::dom::DomUI;
use crate::driver::Driver;
use crate::error::{Error, Result};
use crate::option::Options;
use crate::treewalker::TreeWalker;
use std::io;
use std::path::Path;

pub struct Uic<'a> {
    driver: &'a mut Driver,
    options: &'a Options,
    custom_widgets: CustomWidgetsInfo,
}

impl<'a> Uic<'a> {
    pub fn new(driver: &'a mut Driver, options: &'a Options) -> Self {
        Uic { driver, options, custom_widgets: CustomWidgetsInfo::new() }
    }

    pub fn driver(&self) -> &Driver {
        self.driver
    }

    pub fn options(&self) -> &Options {
        self.options
    }

    pub fn custom_widgets(&self) -> &CustomWidgetsInfo {
        &self.custom_widgets
    }

    /// Parses the contents of a `.ui` file.
    pub fn load(&self, src: &str) -> Result<DomUI> {
        let ui = DomUI::from_xml(src)?;
        tracing::debug!(
            class = ui.class_name(),
            version = ui.attr_version.as_deref().unwrap_or_default(),
            "loaded form"
        );
        Ok(ui)
    }

    /// Compiles `ui` into a C++ header. Nothing is written to `out` unless
    /// every pass has run.
    pub fn write(&mut self, ui: &DomUI, out: &mut impl io::Write) -> Result<()> {
        if ui.widget.is_none() {
            return Err(Error::NoRootWidget);
        }
        self.custom_widgets = CustomWidgetsInfo::from_ui(ui);
        let options = self.options;

        let mut header = String::new();
        if options.copyright_header {
            self.write_copyright_header(ui, &mut header);
        }

        let guard = if options.header_protection {
            let file = match (&options.output_file, &options.input_file) {
                (Some(output), _) => output.clone(),
                (None, Some(input)) => {
                    let name = input.file_name().map(|n| n.to_string_lossy().into_owned());
                    format!("ui_{}", name.unwrap_or_default()).into()
                }
                (None, None) => "ui_noname.h".into(),
            };
            let guard = Driver::header_file_name(&file);
            emitln!(header, "#ifndef {guard}");
            emitln!(header, "#define {guard}\n");
            Some(guard)
        } else {
            None
        };

        WriteIncludes::new(options, &self.custom_widgets, &mut header).accept_ui(ui);
        WriteDeclaration::new(self.driver, options, &self.custom_widgets, &mut header).accept_ui(ui);

        if let Some(guard) = guard {
            emitln!(header, "#endif // {guard}");
        }

        out.write_all(header.as_bytes())?;
        out.flush()?;
        Ok(())
    }

    fn write_copyright_header(&self, ui: &DomUI, out: &mut String) {
        if let Some(comment) = ui.comment.as_deref().filter(|c| !c.trim().is_empty()) {
            emitln!(out, "/*\n{}\n*/\n", comment.trim());
        }
        let file_name = self
            .options
            .input_file
            .as_deref()
            .and_then(Path::file_name)
            .map_or_else(|| "stdin".into(), |n| n.to_string_lossy());

        emitln!(out, "/{}", "*".repeat(80));
        emitln!(out, "** Form generated from reading UI file '{file_name}'");
        emitln!(out, "**");
        emitln!(out, "**      by: Qt User Interface Compiler version {}", env!("CARGO_PKG_VERSION"));
        emitln!(out, "**");
        emitln!(out, "** WARNING! All changes made in this file will be lost when recompiling UI file!");
        emitln!(out, "{}/\n", "*".repeat(80));
    }

    pub fn is_button(&self, class: &str) -> bool {
        self.custom_widgets.is_button(class)
    }

    pub fn is_container(&self, class: &str) -> bool {
        self.custom_widgets.is_container(class)
    }

    pub fn is_menu(&self, class: &str) -> bool {
        self.custom_widgets.is_menu(class)
    }
}
