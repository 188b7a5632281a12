//! Symbol tables shared by the code generation passes of one form.
//!
//! Dom nodes are identified by address. The tree is borrowed immutably for the
//! whole run and its nodes are boxed or stored in vectors that are not resized
//! meanwhile, so an address stays valid as a key from one pass to the next.

use crate::dom::{
    DomAction, DomActionGroup, DomButtonGroup, DomLayout, DomLayoutItem, DomSpacer, DomWidget,
    LayoutItemValue,
};
use std::collections::{HashMap, HashSet};
use std::path::Path;

type NodeKey = usize;

fn key<T>(node: &T) -> NodeKey {
    node as *const T as NodeKey
}

#[derive(Debug, Default)]
pub struct Driver {
    name_repository: HashSet<String>,
    widgets: HashMap<NodeKey, String>,
    spacers: HashMap<NodeKey, String>,
    layouts: HashMap<NodeKey, String>,
    action_groups: HashMap<NodeKey, String>,
    actions: HashMap<NodeKey, String>,
    button_groups: HashMap<String, (String, DomButtonGroup)>,
    /// generated widget name -> class
    widget_classes: HashMap<String, String>,
    /// generated action name -> has a `menu` attribute
    action_menus: HashMap<String, bool>,
    action_group_names: HashSet<String>,
    pixmaps: HashSet<String>,
    problems: Vec<String>,
}

impl Driver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets everything, ready for the next form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns a name that has not been handed out before and registers it.
    ///
    /// `instance` is taken verbatim (after normalization) when free, otherwise
    /// suffixed with 1, 2, ... Without an instance name the class name is turned
    /// into one by [`Driver::qtify`]; without either, `var` is used.
    pub fn unique(&mut self, instance: &str, class: &str) -> String {
        let mut already_used = false;
        let name = if !instance.is_empty() {
            let base = Self::normalized_name(instance);
            let mut name = base.clone();
            let mut id = 1;
            while self.name_repository.contains(&name) {
                already_used = true;
                name = format!("{base}{id}");
                id += 1;
            }
            name
        } else if !class.is_empty() {
            self.unique(&Self::qtify(class), "")
        } else {
            self.unique("var", "")
        };

        if already_used && !class.is_empty() {
            tracing::warn!(
                "the name '{instance}' ({class}) is already in use, defaulting to '{name}'"
            );
        }
        self.name_repository.insert(name.clone());
        name
    }

    pub fn has_name(&self, name: &str) -> bool {
        self.name_repository.contains(name)
    }

    /// `QPushButton` -> `pushButton`, `QVBoxLayout` -> `vboxLayout`.
    pub fn qtify(name: &str) -> String {
        let stripped = match name.strip_prefix(['Q', 'K']) {
            Some(rest) if !rest.is_empty() => rest,
            _ => name,
        };
        let mut out = String::with_capacity(stripped.len());
        let mut leading = true;
        for c in stripped.chars() {
            if leading && c.is_uppercase() {
                out.extend(c.to_lowercase());
            } else {
                leading = false;
                out.push(c);
            }
        }
        out
    }

    /// Replaces everything that cannot appear in an identifier by `_`.
    pub fn normalized_name(name: &str) -> String {
        name.chars().map(|c| if c.is_alphanumeric() { c } else { '_' }).collect()
    }

    /// Include guard for `file`, built from the file name up to its first dot:
    /// `ui_form.h` gives `UI_FORM_H`.
    pub fn header_file_name(file: &Path) -> String {
        let file_name = file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        let base = file_name.split('.').next().unwrap_or_default();
        let base = if base.is_empty() { "noname" } else { base };
        let mut guard = String::with_capacity(base.len() + 3);
        if base.starts_with(|c: char| c.is_ascii_digit()) {
            guard.push('_');
        }
        guard.extend(base.chars().map(|c| if c.is_alphanumeric() { c } else { '_' }));
        guard.make_ascii_uppercase();
        guard.push_str("_H");
        guard
    }

    pub fn find_or_insert_widget(&mut self, widget: &DomWidget) -> String {
        if let Some(name) = self.widgets.get(&key(widget)) {
            return name.clone();
        }
        let name = self.unique(widget.name(), widget.class_name());
        self.widgets.insert(key(widget), name.clone());
        self.widget_classes.insert(name.clone(), widget.class_name().to_owned());
        name
    }

    pub fn find_or_insert_spacer(&mut self, spacer: &DomSpacer) -> String {
        if let Some(name) = self.spacers.get(&key(spacer)) {
            return name.clone();
        }
        let name = self.unique(spacer.attr_name.as_deref().unwrap_or_default(), "QSpacerItem");
        self.spacers.insert(key(spacer), name.clone());
        name
    }

    pub fn find_or_insert_layout(&mut self, layout: &DomLayout) -> String {
        if let Some(name) = self.layouts.get(&key(layout)) {
            return name.clone();
        }
        let name = self.unique(layout.name(), layout.class_name());
        self.layouts.insert(key(layout), name.clone());
        name
    }

    /// Name of whatever the layout item holds; empty for an empty item.
    pub fn find_or_insert_layout_item(&mut self, item: &DomLayoutItem) -> String {
        match &item.value {
            LayoutItemValue::Widget(widget) => self.find_or_insert_widget(widget),
            LayoutItemValue::Layout(layout) => self.find_or_insert_layout(layout),
            LayoutItemValue::Spacer(spacer) => self.find_or_insert_spacer(spacer),
            LayoutItemValue::Unknown => String::new(),
        }
    }

    pub fn find_or_insert_action_group(&mut self, group: &DomActionGroup) -> String {
        if let Some(name) = self.action_groups.get(&key(group)) {
            return name.clone();
        }
        let name = self.unique(group.name(), "QActionGroup");
        self.action_groups.insert(key(group), name.clone());
        self.action_group_names.insert(name.clone());
        name
    }

    pub fn find_or_insert_action(&mut self, action: &DomAction) -> String {
        if let Some(name) = self.actions.get(&key(action)) {
            return name.clone();
        }
        let name = self.unique(action.name(), "QAction");
        self.actions.insert(key(action), name.clone());
        self.action_menus.insert(name.clone(), action.attr_menu.is_some());
        name
    }

    /// Button groups are tracked by their declared name, so a group created on
    /// the fly for a dangling reference resolves to the same member later on.
    pub fn find_or_insert_button_group(&mut self, group: &DomButtonGroup) -> String {
        if let Some((name, _)) = self.button_groups.get(group.name()) {
            return name.clone();
        }
        let name = self.unique(group.name(), "QButtonGroup");
        self.button_groups.insert(group.name().to_owned(), (name.clone(), group.clone()));
        name
    }

    pub fn find_button_group(&self, name: &str) -> Option<&DomButtonGroup> {
        self.button_groups.get(name).map(|(_, group)| group)
    }

    /// Class of the widget that was given the generated name `name`.
    pub fn widget_by_name(&self, name: &str) -> Option<&str> {
        self.widget_classes.get(name).map(String::as_str)
    }

    /// Whether `name` was generated for an action, and if so whether that action
    /// stands for a menu.
    pub fn action_by_name(&self, name: &str) -> Option<bool> {
        self.action_menus.get(name).copied()
    }

    pub fn action_group_by_name(&self, name: &str) -> bool {
        self.action_group_names.contains(name)
    }

    pub fn insert_pixmap(&mut self, name: &str) {
        self.pixmaps.insert(name.to_owned());
    }

    pub fn contains_pixmap(&self, name: &str) -> bool {
        self.pixmaps.contains(name)
    }

    pub fn add_problem(&mut self, problem: impl Into<String>) {
        let problem = problem.into();
        tracing::debug!(problem, "recorded problem");
        self.problems.push(problem);
    }

    pub fn problems(&self) -> &[String] {
        &self.problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qtify_class_names() {
        assert_eq!(Driver::qtify("QPushButton"), "pushButton");
        assert_eq!(Driver::qtify("QVBoxLayout"), "vboxLayout");
        assert_eq!(Driver::qtify("KLineEdit"), "lineEdit");
        assert_eq!(Driver::qtify("MyWidget"), "myWidget");
        assert_eq!(Driver::qtify("Q"), "q");
    }

    #[test]
    fn unique_numbers_collisions() {
        let mut d = Driver::new();
        assert_eq!(d.unique("foo", "QPushButton"), "foo");
        assert_eq!(d.unique("foo", "QPushButton"), "foo1");
        assert_eq!(d.unique("foo", "QPushButton"), "foo2");
        assert!(d.has_name("foo1"));
    }

    #[test]
    fn unique_falls_back_to_class_then_var() {
        let mut d = Driver::new();
        assert_eq!(d.unique("", "QPushButton"), "pushButton");
        assert_eq!(d.unique("", "QPushButton"), "pushButton1");
        assert_eq!(d.unique("", ""), "var");
        assert_eq!(d.unique("", ""), "var1");
        assert_eq!(d.unique("my widget", ""), "my_widget");
    }

    #[test]
    fn header_guards() {
        assert_eq!(Driver::header_file_name(Path::new("ui_form.h")), "UI_FORM_H");
        assert_eq!(Driver::header_file_name(Path::new("dir/ui-main.window.h")), "UI_MAIN_H");
        assert_eq!(Driver::header_file_name(Path::new("3d.h")), "_3D_H");
        assert_eq!(Driver::header_file_name(Path::new("")), "NONAME_H");
    }

    #[test]
    fn reset_forgets_names() {
        let mut d = Driver::new();
        d.unique("a", "");
        d.insert_pixmap("img");
        d.add_problem("oops");
        d.reset();
        assert!(!d.has_name("a"));
        assert!(!d.contains_pixmap("img"));
        assert!(d.problems().is_empty());
    }
}
