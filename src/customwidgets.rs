//! What the form declares about its custom widget classes.

use crate::dom::{DomCustomWidget, DomCustomWidgets, DomUI};
use crate::treewalker::TreeWalker;
use std::collections::HashMap;

const BUTTON_CLASSES: &[&str] =
    &["QRadioButton", "QToolButton", "QCheckBox", "QPushButton", "QCommandLinkButton"];

const CONTAINER_CLASSES: &[&str] = &[
    "QStackedWidget",
    "QToolBox",
    "QTabWidget",
    "QScrollArea",
    "QMdiArea",
    "QWizard",
    "QDockWidget",
];

const MENU_CLASSES: &[&str] = &["QMenu", "QPopupMenu"];

#[derive(Debug, Default)]
pub struct CustomWidgetsInfo {
    custom_widgets: HashMap<String, DomCustomWidget>,
}

impl CustomWidgetsInfo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the `<customwidgets>` section of `ui`.
    pub fn from_ui(ui: &DomUI) -> Self {
        let mut info = Self::new();
        info.accept_ui(ui);
        info
    }

    pub fn custom_widget(&self, name: &str) -> Option<&DomCustomWidget> {
        self.custom_widgets.get(name)
    }

    /// Whether `class` is `base` or derives from it through `<extends>` chains.
    pub fn extends(&self, class: &str, base: &str) -> bool {
        if class == base {
            return true;
        }
        let mut current = class;
        // a chain longer than the table means a cycle
        for _ in 0..=self.custom_widgets.len() {
            let Some(extends) = self.custom_widgets.get(current).and_then(|c| c.extends.as_deref())
            else {
                return false;
            };
            if extends == base {
                return true;
            }
            if extends == current {
                return false;
            }
            current = extends;
        }
        false
    }

    /// Class actually instantiated for `class`; `Line` is a `QFrame`.
    pub fn real_class_name<'a>(&self, class: &'a str) -> &'a str {
        if class == "Line" {
            "QFrame"
        } else {
            class
        }
    }

    pub fn add_page_method(&self, class: &str) -> Option<&str> {
        self.custom_widgets
            .get(class)
            .and_then(|c| c.addpagemethod.as_deref())
            .filter(|m| !m.is_empty())
    }

    pub fn is_custom_widget_container(&self, class: &str) -> bool {
        self.custom_widgets.get(class).and_then(|c| c.container).map_or(false, |c| c != 0)
    }

    pub fn is_button(&self, class: &str) -> bool {
        BUTTON_CLASSES.iter().any(|base| self.extends(class, base))
    }

    pub fn is_container(&self, class: &str) -> bool {
        CONTAINER_CLASSES.iter().any(|base| self.extends(class, base))
            || self.is_custom_widget_container(class)
    }

    pub fn is_menu(&self, class: &str) -> bool {
        MENU_CLASSES.iter().any(|base| self.extends(class, base))
    }
}

impl TreeWalker for CustomWidgetsInfo {
    fn accept_ui(&mut self, ui: &DomUI) {
        if let Some(custom_widgets) = &ui.customwidgets {
            self.accept_custom_widgets(custom_widgets);
        }
    }

    fn accept_custom_widgets(&mut self, custom_widgets: &DomCustomWidgets) {
        for custom_widget in &custom_widgets.customwidget {
            self.accept_custom_widget(custom_widget);
        }
    }

    fn accept_custom_widget(&mut self, custom_widget: &DomCustomWidget) {
        let class = custom_widget.class_name();
        if !class.is_empty() {
            self.custom_widgets.insert(class.to_owned(), custom_widget.clone());
        }
    }
}
