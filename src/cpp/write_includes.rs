use crate::classinfo;
use crate::customwidgets::CustomWidgetsInfo;
use crate::dom::*;
use crate::option::Options;
use crate::treewalker::{self, TreeWalker};
use std::collections::{BTreeSet, HashSet};

/// Collects the headers the generated code needs and writes the `#include` block.
pub struct WriteIncludes<'a> {
    options: &'a Options,
    custom_widgets: &'a CustomWidgetsInfo,
    out: &'a mut String,
    known_classes: HashSet<String>,
    globals: BTreeSet<String>,
    locals: BTreeSet<String>,
    laid_out: bool,
}

impl<'a> WriteIncludes<'a> {
    pub fn new(
        options: &'a Options,
        custom_widgets: &'a CustomWidgetsInfo,
        out: &'a mut String,
    ) -> Self {
        WriteIncludes {
            options,
            custom_widgets,
            out,
            known_classes: HashSet::new(),
            globals: BTreeSet::new(),
            locals: BTreeSet::new(),
            laid_out: false,
        }
    }

    fn insert(&mut self, header: &str, global: bool) {
        if header.is_empty() {
            return;
        }
        if global {
            self.globals.insert(header.to_owned());
        } else {
            self.locals.insert(header.to_owned());
        }
    }

    /// Registers `class` and the header that declares it.
    pub fn add(&mut self, class: &str) {
        if class.is_empty() || !self.known_classes.insert(class.to_owned()) {
            return;
        }
        if !self.laid_out && self.custom_widgets.extends(class, "QToolBox") {
            // the tabSpacing property goes through QToolBox::layout()
            self.add("QLayout");
        }
        if class == "Line" {
            self.add("QFrame");
            return;
        }

        let custom_widgets = self.custom_widgets;
        if let Some(header) = classinfo::header_for(class) {
            self.insert(header, true);
        } else if let Some(custom_widget) = custom_widgets.custom_widget(class) {
            let header = custom_widget.header.as_deref();
            let path = header.map(|h| h.text.trim()).unwrap_or_default();
            if path.is_empty() {
                tracing::warn!(
                    "{}: no header given for custom widget {class}",
                    self.options.message_prefix()
                );
            } else {
                let global = header.and_then(|h| h.attr_location.as_deref()) == Some("global");
                self.insert(path, global);
            }
        } else if self.options.implicit_includes {
            let header = format!("{}.h", class.to_lowercase());
            tracing::warn!(
                "{}: no header known for class {class}, using <{header}>",
                self.options.message_prefix()
            );
            self.insert(&header, true);
        }
    }

    fn write(&mut self) {
        for header in &self.globals {
            emitln!(self.out, "#include <{header}>");
        }
        for header in &self.locals {
            emitln!(self.out, "#include \"{header}\"");
        }
        emitln!(self.out);
    }
}

impl TreeWalker for WriteIncludes<'_> {
    fn accept_ui(&mut self, ui: &DomUI) {
        self.known_classes.clear();
        self.globals.clear();
        self.locals.clear();
        self.laid_out = false;

        treewalker::walk_ui(self, ui);

        for class in ["QApplication", "QVariant", "QAction", "QButtonGroup", "QHeaderView"] {
            self.add(class);
        }
        self.write();
    }

    fn accept_widget(&mut self, widget: &DomWidget) {
        self.add(widget.class_name());
        treewalker::walk_widget(self, widget);
    }

    fn accept_layout(&mut self, layout: &DomLayout) {
        self.add(layout.class_name());
        self.laid_out = true;
        treewalker::walk_layout(self, layout);
    }

    fn accept_spacer(&mut self, spacer: &DomSpacer) {
        self.add("QSpacerItem");
        treewalker::walk_spacer(self, spacer);
    }

    fn accept_property(&mut self, property: &DomProperty) {
        match property.kind() {
            PropertyKind::Date => self.add("QDate"),
            PropertyKind::Time => self.add("QTime"),
            PropertyKind::DateTime => self.add("QDateTime"),
            PropertyKind::Locale => self.add("QLocale"),
            _ => {}
        }
        treewalker::walk_property(self, property);
    }

    fn accept_action_group(&mut self, action_group: &DomActionGroup) {
        self.add("QActionGroup");
        treewalker::walk_action_group(self, action_group);
    }

    fn accept_action(&mut self, action: &DomAction) {
        self.add("QAction");
        treewalker::walk_action(self, action);
    }

    fn accept_button_group(&mut self, button_group: &DomButtonGroup) {
        self.add("QButtonGroup");
        treewalker::walk_button_group(self, button_group);
    }

    fn accept_custom_widget(&mut self, custom_widget: &DomCustomWidget) {
        self.add(custom_widget.class_name());
    }

    fn accept_include(&mut self, include: &DomInclude) {
        let impldecl = include.attr_impldecl.as_deref().unwrap_or_default();
        if impldecl.is_empty() || impldecl == "in declaration" {
            let global = include.attr_location.as_deref() == Some("global");
            self.insert(include.text.trim(), global);
        }
    }
}
