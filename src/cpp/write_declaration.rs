use super::{ExtractImages, WriteIconDeclaration, WriteIconInitialization, WriteInitialization};
use crate::customwidgets::CustomWidgetsInfo;
use crate::dom::*;
use crate::driver::Driver;
use crate::option::Options;
use crate::treewalker::{self, TreeWalker};
use std::collections::HashSet;

/// Writes the `Ui_<Form>` class: one member per object of the form, the setup
/// and retranslate functions and the embedded icon table.
pub struct WriteDeclaration<'a> {
    driver: &'a mut Driver,
    options: &'a Options,
    custom_widgets: &'a CustomWidgetsInfo,
    out: &'a mut String,
    /// Button groups share one member per declared name.
    declared_button_groups: HashSet<String>,
}

impl<'a> WriteDeclaration<'a> {
    pub fn new(
        driver: &'a mut Driver,
        options: &'a Options,
        custom_widgets: &'a CustomWidgetsInfo,
        out: &'a mut String,
    ) -> Self {
        WriteDeclaration {
            driver,
            options,
            custom_widgets,
            out,
            declared_button_groups: HashSet::new(),
        }
    }

    fn member(&mut self, class: &str, name: &str) {
        emitln!(self.out, "{}{class} *{name};", self.options.indent);
    }
}

fn open_namespaces(out: &mut String, namespaces: &[&str]) {
    for ns in namespaces.iter().filter(|ns| !ns.is_empty()) {
        emitln!(out, "namespace {ns} {{");
    }
}

fn close_namespaces(out: &mut String, namespaces: &[&str]) {
    for ns in namespaces.iter().rev().filter(|ns| !ns.is_empty()) {
        emitln!(out, "}} // namespace {ns}");
    }
}

impl TreeWalker for WriteDeclaration<'_> {
    fn accept_ui(&mut self, ui: &DomUI) {
        let Some(root) = &ui.widget else {
            return;
        };
        let options = self.options;
        let qualified = format!("{}{}", ui.class_name(), options.postfix);
        let mut namespaces: Vec<&str> = qualified.split("::").collect();
        let class_name = namespaces.pop().unwrap_or_default();
        let export_macro = match ui.exportmacro.as_deref() {
            Some(m) if !m.is_empty() => format!("{m} "),
            _ => String::new(),
        };

        // the form itself is the setupUi() argument, not a member
        self.driver.find_or_insert_widget(root);

        emitln!(self.out, "QT_BEGIN_NAMESPACE\n");
        open_namespaces(self.out, &namespaces);
        if !namespaces.is_empty() {
            emitln!(self.out);
        }
        emitln!(self.out, "class {export_macro}{}{class_name}", options.prefix);
        emitln!(self.out, "{{");
        emitln!(self.out, "public:");

        treewalker::walk_widget(self, root);
        if let Some(button_groups) = &ui.buttongroups {
            self.accept_button_groups(button_groups);
        }
        emitln!(self.out);

        WriteInitialization::new(self.driver, options, self.custom_widgets, self.out).accept_ui(ui);

        if ui.images.is_some() {
            if options.extract_images {
                ExtractImages::new(self.driver, options).accept_ui(ui);
            } else {
                let indent = &options.indent;
                emitln!(self.out, "\nprotected:");
                emitln!(self.out, "{indent}enum IconID");
                emitln!(self.out, "{indent}{{");
                WriteIconDeclaration::new(self.driver, options, self.out).accept_ui(ui);
                emitln!(self.out, "{indent}{indent}unknown_ID");
                emitln!(self.out, "{indent}}};");
                WriteIconInitialization::new(self.driver, options, self.out).accept_ui(ui);
            }
        }

        emitln!(self.out, "}};\n");
        close_namespaces(self.out, &namespaces);
        if !namespaces.is_empty() {
            emitln!(self.out);
        }

        if options.generate_namespace && !class_name.is_empty() {
            open_namespaces(self.out, &namespaces);
            emitln!(self.out, "namespace Ui {{");
            emitln!(
                self.out,
                "{}class {export_macro}{class_name}: public {}{class_name} {{}};",
                options.indent,
                options.prefix
            );
            emitln!(self.out, "}} // namespace Ui");
            close_namespaces(self.out, &namespaces);
            emitln!(self.out);
        }

        emitln!(self.out, "QT_END_NAMESPACE\n");
    }

    fn accept_widget(&mut self, widget: &DomWidget) {
        let class = match widget.class_name() {
            "" => "QWidget",
            class => self.custom_widgets.real_class_name(class),
        };
        let name = self.driver.find_or_insert_widget(widget);
        self.member(class, &name);
        treewalker::walk_widget(self, widget);
    }

    fn accept_layout(&mut self, layout: &DomLayout) {
        let class = match layout.class_name() {
            "" => "QLayout",
            class => class,
        };
        let name = self.driver.find_or_insert_layout(layout);
        self.member(class, &name);
        treewalker::walk_layout(self, layout);
    }

    fn accept_spacer(&mut self, spacer: &DomSpacer) {
        let name = self.driver.find_or_insert_spacer(spacer);
        self.member("QSpacerItem", &name);
        treewalker::walk_spacer(self, spacer);
    }

    fn accept_action_group(&mut self, action_group: &DomActionGroup) {
        let name = self.driver.find_or_insert_action_group(action_group);
        self.member("QActionGroup", &name);
        treewalker::walk_action_group(self, action_group);
    }

    fn accept_action(&mut self, action: &DomAction) {
        let name = self.driver.find_or_insert_action(action);
        self.member("QAction", &name);
        treewalker::walk_action(self, action);
    }

    fn accept_button_group(&mut self, button_group: &DomButtonGroup) {
        let name = self.driver.find_or_insert_button_group(button_group);
        if self.declared_button_groups.insert(name.clone()) {
            self.member("QButtonGroup", &name);
        }
        treewalker::walk_button_group(self, button_group);
    }
}
