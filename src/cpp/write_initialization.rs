//! `setupUi()` and `retranslateUi()`.
//!
//! Object creation and everything that does not depend on the current language
//! goes to the setup function; translatable texts go to the retranslate
//! function so that they can be refreshed at runtime. A few setters that only
//! make sense once all children exist (current index, current row) are delayed
//! to the end of the setup function, as are the `addAction` calls.

use super::write_iconinitialization::ICON_FROM_DATA_FUNCTION;
use crate::customwidgets::CustomWidgetsInfo;
use crate::dom::*;
use crate::driver::Driver;
use crate::option::Options;
use crate::treewalker::{self, TreeWalker};
use crate::utils::{fix_string, property_map, to_bool, upper_first};
use std::collections::{HashMap, HashSet};

const ACCESSIBILITY_DEFINE: &str = "QT_NO_ACCESSIBILITY";
const TOOL_TIP_DEFINE: &str = "QT_NO_TOOLTIP";
const WHATS_THIS_DEFINE: &str = "QT_NO_WHATSTHIS";
const STATUS_TIP_DEFINE: &str = "QT_NO_STATUSTIP";
const SHORTCUT_DEFINE: &str = "QT_NO_SHORTCUT";

const IGNORE_MARGIN: u32 = 1;
const IGNORE_SPACING: u32 = 2;
const IGNORE_OBJECT_NAME: u32 = 4;

type PropertyMap<'p> = HashMap<&'p str, &'p DomProperty>;

/// Where a layout sits, which decides the style default of its margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarginType {
    Use43UiFile,
    TopLevel,
    Child,
    SubLayout,
}

impl MarginType {
    fn default_margin(self) -> i32 {
        match self {
            MarginType::Use43UiFile => -1,
            MarginType::TopLevel | MarginType::Child => 9,
            MarginType::SubLayout => 0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum LayoutProperty {
    Margin,
    Spacing,
}

impl LayoutProperty {
    fn setter(self) -> &'static str {
        match self {
            LayoutProperty::Margin => "setMargin",
            LayoutProperty::Spacing => "setSpacing",
        }
    }
}

#[derive(Debug, Default)]
struct LayoutDefault {
    value: Option<i32>,
    function: Option<String>,
}

/// Form-wide layout defaults from `<layoutdefault>` and `<layoutfunction>`.
#[derive(Debug, Default)]
struct LayoutDefaultHandler {
    margin: LayoutDefault,
    spacing: LayoutDefault,
}

impl LayoutDefaultHandler {
    fn accept_layout_default(&mut self, node: &DomLayoutDefault) {
        if let Some(margin) = node.attr_margin {
            self.margin.value = Some(margin);
        }
        if let Some(spacing) = node.attr_spacing {
            self.spacing.value = Some(spacing);
        }
    }

    fn accept_layout_function(&mut self, node: &DomLayoutFunction) {
        if let Some(margin) = &node.attr_margin {
            self.margin.function = Some(format!("{margin}()"));
        }
        if let Some(spacing) = &node.attr_spacing {
            self.spacing.function = Some(format!("{spacing}()"));
        }
    }

    fn state(&self, which: LayoutProperty) -> &LayoutDefault {
        match which {
            LayoutProperty::Margin => &self.margin,
            LayoutProperty::Spacing => &self.spacing,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn write_property(
        &self,
        out: &mut String,
        indent: &str,
        object: &str,
        which: LayoutProperty,
        user_value: Option<i32>,
        style_default: i32,
        suppress_default: bool,
    ) {
        let state = self.state(which);
        if let Some(value) = user_value {
            // a value equal to the form default stands for the layout function
            let use_function = !suppress_default
                && state.function.is_some()
                && state.value == Some(value);
            if !use_function {
                let ifndef_mac =
                    state.value.is_none() && state.function.is_none() && value == style_default;
                if ifndef_mac {
                    emitln!(out, "#if ! defined(Q_OS_DARWIN)");
                }
                write_layout_value(out, indent, object, which, value);
                if ifndef_mac {
                    emitln!(out, "#endif\n");
                }
                return;
            }
        }
        if suppress_default {
            return;
        }
        if let Some(function) = &state.function {
            emitln!(out, "{indent}{object}->{}({function});", which.setter());
        } else if let Some(value) = state.value {
            write_layout_value(out, indent, object, which, value);
        }
    }

    fn write_properties(
        &self,
        out: &mut String,
        indent: &str,
        object: &str,
        properties: &PropertyMap<'_>,
        margin_type: MarginType,
        suppress_margin_default: bool,
    ) {
        let number = |name: &str| properties.get(name).map(|p| p.element_number().copied().unwrap_or(0));
        let spacing_default = if margin_type == MarginType::Use43UiFile { -1 } else { 6 };
        self.write_property(
            out,
            indent,
            object,
            LayoutProperty::Spacing,
            number("spacing"),
            spacing_default,
            false,
        );
        self.write_property(
            out,
            indent,
            object,
            LayoutProperty::Margin,
            number("margin"),
            margin_type.default_margin(),
            suppress_margin_default,
        );
    }
}

fn write_layout_value(out: &mut String, indent: &str, object: &str, which: LayoutProperty, value: i32) {
    match which {
        LayoutProperty::Margin => {
            emitln!(out, "{indent}{object}->setContentsMargins({value}, {value}, {value}, {value});")
        }
        LayoutProperty::Spacing => emitln!(out, "{indent}{object}->setSpacing({value});"),
    }
}

/// Generated name and class of an enclosing widget or layout.
#[derive(Debug, Clone)]
struct Frame {
    name: String,
    class: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sink {
    Setup,
    Retranslate,
}

pub struct WriteInitialization<'a> {
    driver: &'a mut Driver,
    options: &'a Options,
    custom_widgets: &'a CustomWidgetsInfo,
    out: &'a mut String,
    indent: String,
    dindent: String,
    stdsetdef: bool,
    layout_defaults: LayoutDefaultHandler,
    layout_margin_type: MarginType,
    generated_class: String,
    main_form: String,
    pixmap_function: String,
    widget_chain: Vec<Option<Frame>>,
    layout_chain: Vec<Option<Frame>>,
    action_group_chain: Vec<Option<String>>,
    registered_widgets: HashSet<String>,
    registered_actions: HashSet<String>,
    /// image name -> file extension
    registered_images: HashMap<String, String>,
    buddies: Vec<(String, String)>,
    button_groups: HashSet<String>,
    fonts: Vec<(DomFont, String)>,
    icons: Vec<(DomResourceIcon, String)>,
    size_policies: Vec<(DomSizePolicy, String)>,
    color_brushes: HashMap<u32, String>,
    retranslate: String,
    delayed: String,
    delayed_actions: String,
    main_form_used_in_retranslate: bool,
    layout_widget: bool,
    first_theme_icon: bool,
}

impl<'a> WriteInitialization<'a> {
    pub fn new(
        driver: &'a mut Driver,
        options: &'a Options,
        custom_widgets: &'a CustomWidgetsInfo,
        out: &'a mut String,
    ) -> Self {
        WriteInitialization {
            driver,
            options,
            custom_widgets,
            out,
            indent: options.indent.repeat(2),
            dindent: options.indent.repeat(3),
            stdsetdef: true,
            layout_defaults: LayoutDefaultHandler::default(),
            layout_margin_type: MarginType::TopLevel,
            generated_class: String::new(),
            main_form: String::new(),
            pixmap_function: String::new(),
            widget_chain: vec![],
            layout_chain: vec![],
            action_group_chain: vec![],
            registered_widgets: HashSet::new(),
            registered_actions: HashSet::new(),
            registered_images: HashMap::new(),
            buddies: vec![],
            button_groups: HashSet::new(),
            fonts: vec![],
            icons: vec![],
            size_policies: vec![],
            color_brushes: HashMap::new(),
            retranslate: String::new(),
            delayed: String::new(),
            delayed_actions: String::new(),
            main_form_used_in_retranslate: false,
            layout_widget: false,
            first_theme_icon: true,
        }
    }

    fn sink(&mut self, sink: Sink) -> &mut String {
        match sink {
            Sink::Setup => &mut *self.out,
            Sink::Retranslate => &mut self.retranslate,
        }
    }

    fn parent_widget(&self) -> Option<&Frame> {
        self.widget_chain.last().and_then(Option::as_ref)
    }

    fn parent_widget_name(&self) -> String {
        self.parent_widget().map_or_else(|| self.main_form.clone(), |f| f.name.clone())
    }

    fn warn(&self, message: std::fmt::Arguments<'_>) {
        tracing::warn!("{}: {message}", self.options.message_prefix());
    }

    // ---- translations ----

    fn tr_call(&self, text: &str, comment: &str) -> String {
        if text.is_empty() {
            return "QString()".to_owned();
        }
        let comment = if comment.is_empty() {
            "nullptr".to_owned()
        } else {
            fix_string(comment, &self.dindent)
        };
        let function = if self.options.translate_function.is_empty() {
            format!("QApplication::translate(\"{}\", ", self.generated_class)
        } else {
            format!("{}(", self.options.translate_function)
        };
        format!("{function}{}, {comment})", fix_string(text, &self.dindent))
    }

    fn tr_call_string(&self, string: Option<&DomString>, default: &str) -> String {
        match string {
            Some(s) => self.tr_call(&s.text, s.attr_comment.as_deref().unwrap_or_default()),
            None => self.tr_call(default, ""),
        }
    }

    fn no_tr_call(&self, string: Option<&DomString>, default: &str) -> String {
        if string.is_none() && default.is_empty() {
            return String::new();
        }
        let value = string.map_or(default, |s| s.text.as_str());
        format!("QString::fromUtf8({})", fix_string(value, &self.dindent))
    }

    fn auto_tr_call(&self, string: Option<&DomString>, default: &str) -> String {
        if (string.is_none() && !default.is_empty()) || string_needs_translation(string) {
            self.tr_call_string(string, default)
        } else {
            self.no_tr_call(string, default)
        }
    }

    fn auto_tr_sink(string: Option<&DomString>, default: &str) -> Sink {
        if (string.is_none() && !default.is_empty()) || string_needs_translation(string) {
            Sink::Retranslate
        } else {
            Sink::Setup
        }
    }

    fn property_sink(property: &DomProperty) -> Sink {
        match &property.value {
            PropertyValue::String(s) => Self::auto_tr_sink(Some(s), ""),
            PropertyValue::StringList(list) if needs_translation(list.attr_notr.as_deref()) => {
                Sink::Retranslate
            }
            _ => Sink::Setup,
        }
    }

    // ---- widgets ----

    fn add_button_group(&mut self, button: &DomWidget, var: &str) {
        let attributes = property_map(&button.attribute);
        let Some(property) = attributes.get("buttonGroup") else {
            return;
        };
        let declared = property.element_string().map(|s| s.text.clone()).unwrap_or_default();
        let (group, on_the_fly) = match self.driver.find_button_group(&declared) {
            Some(group) => (group.clone(), false),
            None => {
                // groups referenced before Designer supported declaring them
                self.warn(format_args!("creating button group `{declared}'"));
                let group = DomButtonGroup { attr_name: Some(declared), ..Default::default() };
                (group, true)
            }
        };
        let group_name = self.driver.find_or_insert_button_group(&group);
        let indent = self.indent.clone();
        if self.button_groups.insert(group_name.clone()) {
            let declaration = if on_the_fly { "QButtonGroup *" } else { "" };
            emitln!(self.out, "{indent}{declaration}{group_name} = new QButtonGroup({});", self.main_form);
            self.write_properties(&group_name, "QButtonGroup", &group.property, 0);
        }
        emitln!(self.out, "{indent}{group_name}->addButton({var});");
    }

    fn initialize_combo_box(&mut self, widget: &DomWidget, var: &str) {
        if widget.item.is_empty() {
            return;
        }
        let indent = self.indent.clone();

        // one insertItems() call when all items are plain texts of the same kind
        let mut string_list = true;
        let mut translatable = false;
        let mut texts = vec![];
        for (i, item) in widget.item.iter().enumerate() {
            let properties = property_map(&item.property);
            let text = properties.get("text").and_then(|p| p.element_string());
            let needs_tr = string_needs_translation(text);
            if properties.contains_key("icon") || (i > 0 && translatable != needs_tr) {
                string_list = false;
                break;
            }
            translatable = needs_tr;
            texts.push(self.auto_tr_call(text, ""));
        }

        if string_list {
            let out = if translatable { &mut self.retranslate } else { &mut *self.out };
            if translatable {
                emitln!(out, "{indent}{var}->clear();");
            }
            emitln!(out, "{indent}{var}->insertItems(0, QStringList()");
            for text in &texts {
                emitln!(out, "{indent} << {text}");
            }
            emitln!(out, "{indent});");
            return;
        }

        for (i, item) in widget.item.iter().enumerate() {
            let properties = property_map(&item.property);
            let text = properties.get("text").and_then(|p| p.element_string());
            let icon = properties.get("icon").map(|p| self.icon_call(p));
            emit!(self.out, "{indent}{var}->addItem(");
            if let Some(icon) = icon {
                emit!(self.out, "{icon}, ");
            }
            if string_needs_translation(text) {
                emitln!(self.out, "QString());");
                let call = self.tr_call_string(text, "");
                emitln!(self.retranslate, "{indent}{var}->setItemText({i}, {call});");
            } else {
                let call = self.no_tr_call(text, "");
                emitln!(self.out, "{call});");
            }
        }
        emitln!(self.retranslate);
    }

    fn initialize_menu(&mut self, menu: &str) {
        let menu_action = format!("{menu}Action");
        if self.driver.action_by_name(&menu_action) == Some(true) {
            emitln!(self.out, "{}{menu_action} = {menu}->menuAction();", self.indent);
        }
    }

    fn add_wizard_page(&mut self, page: &str, widget: &DomWidget, parent: &str) {
        let id = widget
            .attribute
            .iter()
            .find(|p| p.name() == "pageId")
            .and_then(|p| p.element_string())
            .map(|s| s.text.clone())
            .unwrap_or_default();
        if id.is_empty() {
            emitln!(self.out, "{}{parent}->addPage({page});", self.indent);
        } else {
            emitln!(self.out, "{}{parent}->setPage({id}, {page});", self.indent);
        }
    }

    /// Places a finished widget into its container or main window.
    fn add_to_parent(&mut self, widget: &DomWidget, var: &str, parent: &str, parent_class: &str) {
        let cwi = self.custom_widgets;
        let class = widget.class_name();
        let attributes = property_map(&widget.attribute);
        let indent = self.indent.clone();
        const PAGE: &str = "Page";

        if cwi.extends(parent_class, "QMainWindow") {
            if cwi.extends(class, "QMenuBar") {
                emitln!(self.out, "{indent}{parent}->setMenuBar({var});");
            } else if cwi.extends(class, "QToolBar") {
                let area = tool_bar_area(&attributes);
                emitln!(self.out, "{indent}{parent}->addToolBar({area}{var});");
                let tool_bar_break = attributes.get("toolBarBreak").and_then(|p| p.element_bool());
                if tool_bar_break.map(String::as_str) == Some("true") {
                    emitln!(self.out, "{indent}{parent}->insertToolBarBreak({var});");
                }
            } else if cwi.extends(class, "QDockWidget") {
                let area = attributes.get("dockWidgetArea").map_or(String::new(), |p| {
                    let area = p.element_number().copied().unwrap_or_default();
                    format!("static_cast<Qt::DockWidgetArea>({area}), ")
                });
                emitln!(self.out, "{indent}{parent}->addDockWidget({area}{var});");
            } else if cwi.extends(class, "QStatusBar") {
                emitln!(self.out, "{indent}{parent}->setStatusBar({var});");
            } else {
                emitln!(self.out, "{indent}{parent}->setCentralWidget({var});");
            }
        }

        if let Some(method) = cwi.add_page_method(parent_class) {
            emitln!(self.out, "{indent}{parent}->{method}({var});");
        } else if cwi.extends(parent_class, "QStackedWidget")
            || cwi.extends(parent_class, "QToolBar")
            || cwi.extends(parent_class, "QSplitter")
        {
            emitln!(self.out, "{indent}{parent}->addWidget({var});");
        } else if cwi.extends(parent_class, "QDockWidget") || cwi.extends(parent_class, "QScrollArea") {
            emitln!(self.out, "{indent}{parent}->setWidget({var});");
        } else if cwi.extends(parent_class, "QMdiArea") {
            emitln!(self.out, "{indent}{parent}->addSubWindow({var});");
        } else if cwi.extends(parent_class, "QWizard") {
            self.add_wizard_page(var, widget, parent);
        } else if cwi.extends(parent_class, "QToolBox") {
            let icon = attributes.get("icon").map_or(String::new(), |p| format!(", {}", self.icon_call(p)));
            let label = attributes.get("label").and_then(|p| p.element_string());
            let text = self.no_tr_call(label, PAGE);
            emitln!(self.out, "{indent}{parent}->addItem({var}{icon}, {text});");

            let call = self.auto_tr_call(label, PAGE);
            let out = self.sink(Self::auto_tr_sink(label, PAGE));
            emitln!(out, "{indent}{parent}->setItemText({parent}->indexOf({var}), {call});");

            if let Some(tool_tip) = attributes.get("toolTip").and_then(|p| p.element_string()) {
                let call = self.auto_tr_call(Some(tool_tip), "");
                let out = self.sink(Self::auto_tr_sink(Some(tool_tip), ""));
                emitln!(out, "{indent}{parent}->setItemToolTip({parent}->indexOf({var}), {call});");
            }
        } else if cwi.extends(parent_class, "QTabWidget") {
            let icon = attributes.get("icon").map_or(String::new(), |p| format!(", {}", self.icon_call(p)));
            let title = attributes.get("title").and_then(|p| p.element_string());
            emitln!(self.out, "{indent}{parent}->addTab({var}{icon}, QString());");

            let call = self.auto_tr_call(title, PAGE);
            let out = self.sink(Self::auto_tr_sink(title, PAGE));
            emitln!(out, "{indent}{parent}->setTabText({parent}->indexOf({var}), {call});");

            for (attribute, setter) in [("toolTip", "setTabToolTip"), ("whatsThis", "setTabWhatsThis")] {
                if let Some(s) = attributes.get(attribute).and_then(|p| p.element_string()) {
                    let call = self.auto_tr_call(Some(s), "");
                    let out = self.sink(Self::auto_tr_sink(Some(s), ""));
                    emitln!(out, "{indent}{parent}->{setter}({parent}->indexOf({var}), {call});");
                }
            }
        }
    }

    // ---- properties ----

    /// Filters out empty legacy pixmap and icon properties.
    fn check_property(&self, property: &DomProperty) -> bool {
        match &property.value {
            PropertyValue::IconSet(icon) => {
                let format44 = icon.has_state_pixmaps()
                    || icon.attr_theme.as_deref().map_or(false, |t| !t.is_empty());
                if !format44 && icon.text.is_empty() {
                    self.warn(format_args!("invalid icon property '{}'", property.name()));
                    return false;
                }
                true
            }
            PropertyValue::Pixmap(pixmap) if pixmap.text.is_empty() => {
                self.warn(format_args!("invalid pixmap property '{}'", property.name()));
                false
            }
            _ => true,
        }
    }

    fn write_properties(&mut self, var: &str, class: &str, properties: &[DomProperty], flags: u32) {
        let cwi = self.custom_widgets;
        let is_top_level = self.widget_chain.len() == 1;
        let indent = self.indent.clone();
        let dindent = self.dindent.clone();

        let in_form = self.parent_widget().is_some();
        if !in_form {
            emitln!(self.out, "{indent}if ({var}->objectName().isEmpty()) {{");
        }
        if flags & IGNORE_OBJECT_NAME == 0 {
            let extra = if in_form { "" } else { self.options.indent.as_str() };
            emitln!(
                self.out,
                "{indent}{extra}{var}->setObjectName(QString::fromUtf8({}));",
                fix_string(var, &dindent)
            );
        }
        if !in_form {
            emitln!(self.out, "{indent}}}");
        }

        // left, top, right, bottom
        let mut margins = [-1; 4];
        let mut frame_shadow = false;

        for property in properties {
            if !self.check_property(property) {
                continue;
            }
            let name = property.name();
            let number = property.element_number().copied();

            if is_top_level && name == "geometry" {
                if let Some(rect) = property.element_rect() {
                    let (w, h) = (rect.width.unwrap_or_default(), rect.height.unwrap_or_default());
                    emitln!(self.out, "{indent}{var}->resize({w}, {h});");
                    continue;
                }
            }
            if name == "buttonGroupId" {
                continue;
            }
            if name == "currentRow" && cwi.extends(class, "QListWidget") {
                emitln!(self.delayed, "{indent}{var}->setCurrentRow({});", number.unwrap_or_default());
                continue;
            }
            if name == "currentIndex"
                && ["QComboBox", "QStackedWidget", "QTabWidget", "QToolBox"]
                    .iter()
                    .any(|base| cwi.extends(class, base))
            {
                emitln!(self.delayed, "{indent}{var}->setCurrentIndex({});", number.unwrap_or_default());
                continue;
            }
            if name == "tabSpacing" && cwi.extends(class, "QToolBox") {
                emitln!(self.delayed, "{indent}{var}->layout()->setSpacing({});", number.unwrap_or_default());
                continue;
            }
            if name == "database" && property.has_element_string_list() {
                continue;
            }
            if name == "frameworkCode" && property.has_element_bool() {
                continue;
            }
            if name == "orientation" && cwi.extends(class, "Line") {
                let vertical = property.element_enum().map(String::as_str) == Some("Qt::Vertical");
                let shape = if vertical { "QFrame::VLine" } else { "QFrame::HLine" };
                emitln!(self.out, "{indent}{var}->setFrameShape({shape});");
                // QFrame defaults to a plain shadow
                if !frame_shadow {
                    emitln!(self.out, "{indent}{var}->setFrameShadow(QFrame::Sunken);");
                }
                continue;
            }
            if (flags & IGNORE_MARGIN != 0 && name == "margin")
                || (flags & IGNORE_SPACING != 0 && name == "spacing")
            {
                continue;
            }
            if let Some(n) = number {
                let side = ["leftMargin", "topMargin", "rightMargin", "bottomMargin"]
                    .iter()
                    .position(|side| *side == name);
                if let Some(side) = side {
                    margins[side] = n;
                    continue;
                }
            }
            if name == "frameShadow" {
                frame_shadow = true;
            }

            let stdset = property.attr_stdset.map_or(self.stdsetdef, |s| s != 0);
            let set_function = if stdset {
                format!("->set{}(", upper_first(name))
            } else {
                format!("->setProperty(\"{name}\", QVariant(")
            };
            let mut target = var.to_owned();

            let value = match &property.value {
                PropertyValue::Bool(v) => v.clone(),
                PropertyValue::Color(c) => dom_color(c),
                PropertyValue::Cstring(v) => {
                    if name == "buddy" && cwi.extends(class, "QLabel") {
                        self.buddies.push((var.to_owned(), v.clone()));
                        String::new()
                    } else if stdset {
                        fix_string(v, &dindent)
                    } else {
                        format!("QByteArray({})", fix_string(v, &dindent))
                    }
                }
                PropertyValue::Cursor(v) => format!("QCursor(static_cast<Qt::CursorShape>({v}))"),
                PropertyValue::CursorShape(v) => {
                    if property.attr_stdset == Some(0) {
                        target.push_str("->viewport()");
                    }
                    format!("QCursor(Qt::{v})")
                }
                PropertyValue::Enum(v) if v.contains("::") => v.clone(),
                PropertyValue::Enum(v) => format!("{class}::{v}"),
                PropertyValue::Set(v) => v.clone(),
                PropertyValue::Font(font) => self.write_font(font),
                PropertyValue::IconSet(icon) => self.write_icon(icon),
                PropertyValue::Pixmap(_) => self.pix_call_property(property),
                PropertyValue::Palette(palette) => {
                    let palette_name = self.driver.unique("palette", "");
                    emitln!(self.out, "{indent}QPalette {palette_name};");
                    self.write_color_group(palette.active.as_deref(), "QPalette::Active", &palette_name);
                    self.write_color_group(palette.inactive.as_deref(), "QPalette::Inactive", &palette_name);
                    self.write_color_group(palette.disabled.as_deref(), "QPalette::Disabled", &palette_name);
                    palette_name
                }
                PropertyValue::Point(p) => {
                    format!("QPoint({}, {})", p.x.unwrap_or_default(), p.y.unwrap_or_default())
                }
                PropertyValue::PointF(p) => format!("QPointF({}, {})", float(p.x), float(p.y)),
                PropertyValue::Rect(r) => format!(
                    "QRect({}, {}, {}, {})",
                    r.x.unwrap_or_default(),
                    r.y.unwrap_or_default(),
                    r.width.unwrap_or_default(),
                    r.height.unwrap_or_default()
                ),
                PropertyValue::RectF(r) => format!(
                    "QRectF({}, {}, {}, {})",
                    float(r.x),
                    float(r.y),
                    float(r.width),
                    float(r.height)
                ),
                PropertyValue::Locale(locale) => format!(
                    "QLocale(QLocale::{}, QLocale::{})",
                    locale.attr_language.as_deref().unwrap_or_default(),
                    locale.attr_country.as_deref().unwrap_or_default()
                ),
                PropertyValue::SizePolicy(policy) => {
                    let policy_name = self.write_size_policy(policy);
                    emitln!(
                        self.out,
                        "{indent}{policy_name}.setHeightForWidth({var}->sizePolicy().hasHeightForWidth());"
                    );
                    policy_name
                }
                PropertyValue::Size(s) => {
                    format!("QSize({}, {})", s.width.unwrap_or_default(), s.height.unwrap_or_default())
                }
                PropertyValue::SizeF(s) => format!("QSizeF({}, {})", float(s.width), float(s.height)),
                PropertyValue::String(s) if name == "objectName" && s.text == var => String::new(),
                PropertyValue::String(s) => self.auto_tr_call(Some(s), ""),
                PropertyValue::Number(n) => n.to_string(),
                PropertyValue::UInt(n) => format!("{n}u"),
                PropertyValue::LongLong(n) => format!("Q_INT64_C({n})"),
                PropertyValue::ULongLong(n) => format!("Q_UINT64_C({n})"),
                PropertyValue::Float(f) => number_g(f64::from(*f)),
                PropertyValue::Double(d) => number_g(*d),
                PropertyValue::Char(c) => format!("QChar({})", c.unicode.unwrap_or_default()),
                PropertyValue::Date(d) => format!(
                    "QDate({}, {}, {})",
                    d.year.unwrap_or_default(),
                    d.month.unwrap_or_default(),
                    d.day.unwrap_or_default()
                ),
                PropertyValue::Time(t) => format!(
                    "QTime({}, {}, {})",
                    t.hour.unwrap_or_default(),
                    t.minute.unwrap_or_default(),
                    t.second.unwrap_or_default()
                ),
                PropertyValue::DateTime(dt) => format!(
                    "QDateTime(QDate({}, {}, {}), QTime({}, {}, {}))",
                    dt.year.unwrap_or_default(),
                    dt.month.unwrap_or_default(),
                    dt.day.unwrap_or_default(),
                    dt.hour.unwrap_or_default(),
                    dt.minute.unwrap_or_default(),
                    dt.second.unwrap_or_default()
                ),
                PropertyValue::StringList(list) => self.write_string_list(list),
                PropertyValue::Url(url) => {
                    let text = url.string.as_ref().map_or("", |s| s.text.as_str());
                    format!("QUrl(QString::fromUtf8({}))", fix_string(text, &dindent))
                }
                PropertyValue::Brush(brush) => self.write_brush_initialization(brush),
                PropertyValue::Unknown => String::new(),
            };
            if value.is_empty() {
                continue;
            }

            let define = match name {
                "toolTip" => Some(TOOL_TIP_DEFINE),
                "whatsThis" => Some(WHATS_THIS_DEFINE),
                "statusTip" => Some(STATUS_TIP_DEFINE),
                "accessibleName" | "accessibleDescription" => Some(ACCESSIBILITY_DEFINE),
                _ => None,
            };
            let sink = Self::property_sink(property);
            let close = if stdset { ");" } else { "));" };
            let out = self.sink(sink);
            if let Some(define) = define {
                open_ifndef(out, define);
            }
            emitln!(out, "{indent}{target}{set_function}{value}{close}");
            if let Some(define) = define {
                close_ifndef(out, define);
            }
            if var == self.main_form && sink == Sink::Retranslate {
                self.main_form_used_in_retranslate = true;
            }
        }

        if margins.iter().any(|m| *m != -1) {
            let [left, top, right, bottom] = margins;
            emitln!(self.out, "{indent}{var}->setContentsMargins({left}, {top}, {right}, {bottom});");
        }
    }

    fn write_string_list(&self, list: &DomStringList) -> String {
        let mut value = String::from("QStringList()");
        if needs_translation(list.attr_notr.as_deref()) {
            let comment = list.attr_comment.as_deref().unwrap_or_default();
            for s in &list.string {
                emit!(value, "\n{}    << {}", self.indent, self.tr_call(s, comment));
            }
        } else {
            for s in &list.string {
                emit!(value, " << {}", fix_string(s, &self.dindent));
            }
        }
        value
    }

    fn write_size_policy(&mut self, policy: &DomSizePolicy) -> String {
        if let Some((_, name)) = self.size_policies.iter().find(|(p, _)| p == policy) {
            return name.clone();
        }
        let name = self.driver.unique("sizePolicy", "");
        self.size_policies.push((policy.clone(), name.clone()));

        let indent = &self.indent;
        emit!(self.out, "{indent}QSizePolicy {name}");
        match (
            policy.hsizetype,
            policy.vsizetype,
            policy.attr_hsizetype.as_deref(),
            policy.attr_vsizetype.as_deref(),
        ) {
            (Some(h), Some(v), _, _) => emitln!(
                self.out,
                "(static_cast<QSizePolicy::Policy>({h}), static_cast<QSizePolicy::Policy>({v}));"
            ),
            (_, _, Some(h), Some(v)) => emitln!(self.out, "(QSizePolicy::{h}, QSizePolicy::{v});"),
            _ => emitln!(self.out, ";"),
        }
        emitln!(self.out, "{indent}{name}.setHorizontalStretch({});", policy.horstretch.unwrap_or_default());
        emitln!(self.out, "{indent}{name}.setVerticalStretch({});", policy.verstretch.unwrap_or_default());
        name
    }

    fn write_font(&mut self, font: &DomFont) -> String {
        if let Some((_, name)) = self.fonts.iter().find(|(f, _)| f == font) {
            return name.clone();
        }
        let name = self.driver.unique("font", "");
        self.fonts.push((font.clone(), name.clone()));

        let indent = &self.indent;
        emitln!(self.out, "{indent}QFont {name};");
        if let Some(family) = font.family.as_deref().filter(|f| !f.is_empty()) {
            let family = fix_string(family, &self.dindent);
            emitln!(self.out, "{indent}{name}.setFamily(QString::fromUtf8({family}));");
        }
        if let Some(size) = font.pointsize.filter(|s| *s > 0) {
            emitln!(self.out, "{indent}{name}.setPointSize({size});");
        }
        if let Some(bold) = font.bold {
            emitln!(self.out, "{indent}{name}.setBold({bold});");
        }
        if let Some(italic) = font.italic {
            emitln!(self.out, "{indent}{name}.setItalic({italic});");
        }
        if let Some(underline) = font.underline {
            emitln!(self.out, "{indent}{name}.setUnderline({underline});");
        }
        if let Some(weight) = font.weight.filter(|w| *w > 0) {
            emitln!(self.out, "{indent}{name}.setWeight({weight});");
        }
        if let Some(strike_out) = font.strikeout {
            emitln!(self.out, "{indent}{name}.setStrikeOut({strike_out});");
        }
        if let Some(kerning) = font.kerning {
            emitln!(self.out, "{indent}{name}.setKerning({kerning});");
        }
        if let Some(antialiasing) = font.antialiasing {
            let strategy = if antialiasing { "QFont::PreferDefault" } else { "QFont::NoAntialias" };
            emitln!(self.out, "{indent}{name}.setStyleStrategy({strategy});");
        }
        if let Some(strategy) = &font.stylestrategy {
            emitln!(self.out, "{indent}{name}.setStyleStrategy(QFont::{strategy});");
        }
        name
    }

    fn write_icon(&mut self, icon: &DomResourceIcon) -> String {
        if let Some((_, name)) = self.icons.iter().find(|(i, _)| i == icon) {
            return name.clone();
        }
        let name = self.driver.unique("icon", "");
        self.icons.push((icon.clone(), name.clone()));

        let indent = self.indent.clone();
        let theme = icon.attr_theme.as_deref().unwrap_or_default();
        if !icon.has_state_pixmaps() && theme.is_empty() {
            let call = self.pix_call("QIcon", &icon.text);
            emitln!(self.out, "{indent}const QIcon {name} = {call};");
        } else if theme.is_empty() {
            emitln!(self.out, "{indent}QIcon {name};");
            write_resource_icon(self.out, &name, &indent, icon);
        } else if icon.has_state_pixmaps() {
            // theme icon if available, the state pixmaps otherwise
            let theme = fix_string(theme, "");
            let declaration = if std::mem::take(&mut self.first_theme_icon) { "QString " } else { "" };
            emitln!(self.out, "{indent}QIcon {name};");
            emitln!(self.out, "{indent}{declaration}iconThemeName = QString::fromUtf8({theme});");
            emitln!(self.out, "{indent}if (QIcon::hasThemeIcon(iconThemeName)) {{");
            emitln!(self.out, "{}{name} = QIcon::fromTheme(iconThemeName);", self.dindent);
            emitln!(self.out, "{indent}}} else {{");
            write_resource_icon(self.out, &name, &self.dindent, icon);
            emitln!(self.out, "{indent}}}");
        } else {
            let theme = fix_string(theme, "");
            emitln!(self.out, "{indent}QIcon {name}(QIcon::fromTheme(QString::fromUtf8({theme})));");
        }
        name
    }

    fn write_color_group(&mut self, group: Option<&DomColorGroup>, role_group: &str, palette: &str) {
        let Some(group) = group else {
            return;
        };
        let indent = self.indent.clone();
        for (i, color) in group.color.iter().enumerate() {
            emitln!(
                self.out,
                "{indent}{palette}.setColor({role_group}, static_cast<QPalette::ColorRole>({i}), {});",
                dom_color(color)
            );
        }
        for color_role in &group.colorrole {
            let Some(role) = color_role.attr_role.as_deref() else {
                continue;
            };
            let default_brush = DomBrush::default();
            let brush = color_role.brush.as_deref().unwrap_or(&default_brush);
            let brush_name = self.write_brush_initialization(brush);
            emitln!(self.out, "{indent}{palette}.setBrush({role_group}, QPalette::{role}, {brush_name});");
        }
    }

    /// Declares a brush unless an identical solid color brush exists already.
    fn write_brush_initialization(&mut self, brush: &DomBrush) -> String {
        let solid = brush.attr_brushstyle.as_deref().map_or(true, |s| s == "SolidPattern");
        let mut rgb = 0u32;
        if solid {
            if let Some(color) = brush.element_color() {
                let channel = |v: Option<i32>| (v.unwrap_or_default() & 0xff) as u32;
                rgb = channel(color.red) << 24
                    | channel(color.green) << 16
                    | channel(color.blue) << 8
                    | channel(color.attr_alpha);
                if let Some(name) = self.color_brushes.get(&rgb) {
                    return name.clone();
                }
            }
        }
        let name = self.driver.unique("brush", "");
        self.write_brush(brush, &name);
        if solid {
            self.color_brushes.insert(rgb, name.clone());
        }
        name
    }

    fn write_brush(&mut self, brush: &DomBrush, name: &str) {
        let indent = self.indent.clone();
        let style = brush.attr_brushstyle.as_deref().unwrap_or("SolidPattern");
        let default_color = DomColor::default();
        match style {
            "LinearGradientPattern" | "RadialGradientPattern" | "ConicalGradientPattern" => {
                let default_gradient = DomGradient::default();
                let gradient = brush.element_gradient().unwrap_or(&default_gradient);
                let gradient_name = self.driver.unique("gradient", "");
                match gradient.attr_type.as_deref() {
                    Some("LinearGradient") => emitln!(
                        self.out,
                        "{indent}QLinearGradient {gradient_name}({}, {}, {}, {});",
                        float(gradient.attr_startx),
                        float(gradient.attr_starty),
                        float(gradient.attr_endx),
                        float(gradient.attr_endy)
                    ),
                    Some("RadialGradient") => emitln!(
                        self.out,
                        "{indent}QRadialGradient {gradient_name}({}, {}, {}, {}, {});",
                        float(gradient.attr_centralx),
                        float(gradient.attr_centraly),
                        float(gradient.attr_radius),
                        float(gradient.attr_focalx),
                        float(gradient.attr_focaly)
                    ),
                    Some("ConicalGradient") => emitln!(
                        self.out,
                        "{indent}QConicalGradient {gradient_name}({}, {}, {});",
                        float(gradient.attr_centralx),
                        float(gradient.attr_centraly),
                        float(gradient.attr_angle)
                    ),
                    _ => {}
                }
                emitln!(
                    self.out,
                    "{indent}{gradient_name}.setSpread(QGradient::{});",
                    gradient.attr_spread.as_deref().unwrap_or_default()
                );
                if let Some(mode) = &gradient.attr_coordinatemode {
                    emitln!(self.out, "{indent}{gradient_name}.setCoordinateMode(QGradient::{mode});");
                }
                for stop in &gradient.gradientstop {
                    let color = stop.color.as_deref().unwrap_or(&default_color);
                    emitln!(
                        self.out,
                        "{indent}{gradient_name}.setColorAt({}, {});",
                        float(stop.attr_position),
                        dom_color(color)
                    );
                }
                emitln!(self.out, "{indent}QBrush {name}({gradient_name});");
            }
            "TexturePattern" => {
                let texture = match brush.element_texture() {
                    Some(property) => self.icon_call(property),
                    None => "QIcon()".to_owned(),
                };
                emitln!(self.out, "{indent}QBrush {name} = QBrush({texture});");
            }
            _ => {
                let color = brush.element_color().unwrap_or(&default_color);
                emitln!(self.out, "{indent}QBrush {name}({});", dom_color(color));
                emitln!(self.out, "{indent}{name}.setStyle(Qt::{style});");
            }
        }
    }

    fn icon_call(&mut self, property: &DomProperty) -> String {
        match property.element_icon_set() {
            Some(icon) => self.write_icon(icon),
            None => self.pix_call_property(property),
        }
    }

    fn pix_call_property(&self, property: &DomProperty) -> String {
        match &property.value {
            PropertyValue::IconSet(icon) => self.pix_call("QIcon", &icon.text),
            PropertyValue::Pixmap(pixmap) => self.pix_call("QPixmap", &pixmap.text),
            _ => {
                self.warn(format_args!("unknown icon format in property '{}'", property.name()));
                "QIcon()".to_owned()
            }
        }
    }

    /// Expression producing a pixmap or icon of type `ty` from `text`, which
    /// names either an embedded image or a file.
    fn pix_call(&self, ty: &str, text: &str) -> String {
        if text.is_empty() {
            return format!("{ty}()");
        }
        if let Some(extension) = self.registered_images.get(text) {
            return if self.options.extract_images {
                format!(
                    "QPixmap(QString::fromUtf8(\":/{}/images/{text}.{extension}\"))",
                    self.generated_class
                )
            } else {
                format!("{ICON_FROM_DATA_FUNCTION}({text}_ID)")
            };
        }
        let function = match self.pixmap_function.as_str() {
            "" => "QString::fromUtf8",
            function => function,
        };
        format!("{ty}({function}({}))", fix_string(text, &self.dindent))
    }

    fn write_property_list(&mut self, var: &str, setter: &str, value: Option<&str>) {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return;
        };
        for (i, v) in value.split(',').enumerate() {
            if v != "0" {
                emitln!(self.out, "{}{var}->{setter}({i}, {v});", self.indent);
            }
        }
    }

    /// Variable of a widget, action or button group named `name` in the form.
    fn find_declaration(&mut self, name: &str) -> Option<String> {
        let normalized = Driver::normalized_name(name);
        if self.driver.widget_by_name(&normalized).is_some()
            || self.driver.action_by_name(&normalized).is_some()
        {
            return Some(normalized);
        }
        let group = self.driver.find_button_group(&normalized)?.clone();
        Some(self.driver.find_or_insert_button_group(&group))
    }
}

impl TreeWalker for WriteInitialization<'_> {
    fn accept_ui(&mut self, ui: &DomUI) {
        let Some(root) = &ui.widget else {
            return;
        };
        let options = self.options;
        self.registered_images.clear();
        self.action_group_chain.push(None);
        self.widget_chain.push(None);
        self.layout_chain.push(None);

        if let Some(layout_default) = &ui.layoutdefault {
            self.layout_defaults.accept_layout_default(layout_default);
        }
        if let Some(layout_function) = &ui.layoutfunction {
            self.layout_defaults.accept_layout_function(layout_function);
        }
        if let Some(images) = &ui.images {
            self.accept_images(images);
        }

        self.stdsetdef = ui.stdsetdef();
        self.generated_class = format!("{}{}", ui.class_name(), options.postfix);
        self.pixmap_function = match ui.pixmapfunction.as_deref().unwrap_or_default() {
            "QPixmap::fromMimeSource" => "qPixmapFromMimeSource".to_owned(),
            function => function.to_owned(),
        };

        let var = self.driver.find_or_insert_widget(root);
        self.main_form = var.clone();
        self.registered_widgets.insert(var.clone());
        let widget_class = root.class_name();

        emitln!(self.out, "{}void setupUi({widget_class} *{var})", options.indent);
        emitln!(self.out, "{}{{", options.indent);

        self.accept_widget(root);

        let buddies = std::mem::take(&mut self.buddies);
        if !buddies.is_empty() {
            open_ifndef(self.out, SHORTCUT_DEFINE);
        }
        for (label, buddy) in &buddies {
            if let Some(invalid) = [label, buddy].into_iter().find(|n| !self.registered_widgets.contains(*n)) {
                self.warn(format_args!("buddy assignment '{invalid}' is not a valid widget"));
                continue;
            }
            emitln!(self.out, "{}{label}->setBuddy({buddy});", self.indent);
        }
        if !buddies.is_empty() {
            close_ifndef(self.out, SHORTCUT_DEFINE);
        }

        if let Some(tab_stops) = &ui.tabstops {
            self.accept_tab_stops(tab_stops);
        }
        if !self.delayed_actions.is_empty() {
            emit!(self.out, "\n{}", self.delayed_actions);
        }
        emitln!(self.out, "\n{}retranslateUi({var});", self.indent);

        if let Some(connections) = &ui.connections {
            self.accept_connections(connections);
        }
        if !self.delayed.is_empty() {
            emitln!(self.out, "\n{}", self.delayed);
        }
        if options.auto_connection {
            emitln!(self.out, "\n{}QMetaObject::connectSlotsByName({var});", self.indent);
        }
        emitln!(self.out, "{}}}\n", options.indent);

        if !self.main_form_used_in_retranslate {
            emitln!(self.retranslate, "{}(void) {var};", self.indent);
        }
        emitln!(self.out, "{}void retranslateUi({widget_class} *{var})", options.indent);
        emitln!(self.out, "{}{{", options.indent);
        self.out.push_str(&self.retranslate);
        emitln!(self.out, "{}}}\n", options.indent);

        self.layout_chain.pop();
        self.widget_chain.pop();
        self.action_group_chain.pop();
    }

    fn accept_widget(&mut self, widget: &DomWidget) {
        let cwi = self.custom_widgets;
        self.layout_margin_type =
            if self.widget_chain.len() == 1 { MarginType::TopLevel } else { MarginType::Child };
        let class = widget.class_name();
        let var = self.driver.find_or_insert_widget(widget);
        self.registered_widgets.insert(var.clone());

        let (parent, parent_class) = match self.parent_widget() {
            Some(frame) => (frame.name.clone(), frame.class.clone()),
            None => (String::new(), String::new()),
        };

        if self.widget_chain.len() != 1 {
            // pages are reparented by the container when added
            let constructor_parent = if cwi.is_container(&parent_class) { "" } else { parent.as_str() };
            emitln!(
                self.out,
                "{}{var} = new {}({constructor_parent});",
                self.indent,
                cwi.real_class_name(class)
            );
        }

        if cwi.extends(class, "QComboBox") {
            self.initialize_combo_box(widget, &var);
        }
        if cwi.is_button(class) {
            self.add_button_group(widget, &var);
        }
        self.write_properties(&var, class, &widget.property, 0);
        if cwi.extends(class, "QMenu") && !parent.is_empty() {
            self.initialize_menu(&var);
        }

        if widget.layout.is_empty() {
            self.layout_chain.push(None);
        }

        // a plain QWidget holding a layout inside another layout gets no margins
        self.layout_widget = class == "QWidget"
            && widget.attr_native.is_none()
            && self.parent_widget().is_some()
            && parent_class != "QMainWindow"
            && !cwi.is_custom_widget_container(&parent_class)
            && !cwi.is_container(&parent_class);

        self.widget_chain.push(Some(Frame { name: var.clone(), class: class.to_owned() }));
        self.layout_chain.push(None);
        treewalker::walk_widget(self, widget);
        self.layout_chain.pop();
        self.widget_chain.pop();
        self.layout_widget = false;

        self.add_to_parent(widget, &var, &parent, &parent_class);

        if widget.layout.is_empty() {
            self.layout_chain.pop();
        }

        for name in &widget.zorder {
            if !self.registered_widgets.contains(name) {
                self.warn(format_args!("z-order assignment of '{name}' is not a valid widget"));
                continue;
            }
            if !name.is_empty() {
                emitln!(self.out, "{}{name}->raise();", self.indent);
            }
        }
    }

    fn accept_layout(&mut self, layout: &DomLayout) {
        let class = layout.class_name();
        let var = self.driver.find_or_insert_layout(layout);
        let indent = self.indent.clone();
        let properties = property_map(&layout.property);
        let old_layout_properties = properties.contains_key("margin");

        let nested = matches!(self.layout_chain.last(), Some(Some(_)));
        let parent = if nested { String::new() } else { self.parent_widget_name() };
        emitln!(self.out, "{indent}{var} = new {class}({parent});");

        let margin_type =
            if old_layout_properties { self.layout_margin_type } else { MarginType::Use43UiFile };
        self.layout_defaults.write_properties(self.out, &indent, &var, &properties, margin_type, nested);
        self.layout_margin_type = MarginType::SubLayout;

        let mut layout_properties = layout.property.clone();
        if self.layout_widget {
            for side in ["leftMargin", "topMargin", "rightMargin", "bottomMargin"] {
                let present = layout_properties
                    .iter()
                    .any(|p| p.name() == side && p.kind() == PropertyKind::Number);
                if !present {
                    let mut margin = DomProperty::new(side);
                    margin.set_element_number(0);
                    layout_properties.push(margin);
                }
            }
            self.layout_widget = false;
        }
        self.write_properties(&var, class, &layout_properties, IGNORE_MARGIN | IGNORE_SPACING);

        self.layout_chain.push(Some(Frame { name: var.clone(), class: class.to_owned() }));
        treewalker::walk_layout(self, layout);
        self.layout_chain.pop();

        self.write_property_list(&var, "setStretch", layout.attr_stretch.as_deref());
        self.write_property_list(&var, "setRowStretch", layout.attr_rowstretch.as_deref());
        self.write_property_list(&var, "setColumnStretch", layout.attr_columnstretch.as_deref());
        self.write_property_list(
            &var,
            "setColumnMinimumWidth",
            layout.attr_columnminimumwidth.as_deref(),
        );
        self.write_property_list(&var, "setRowMinimumHeight", layout.attr_rowminimumheight.as_deref());
    }

    fn accept_spacer(&mut self, spacer: &DomSpacer) {
        let name = self.driver.find_or_insert_spacer(spacer);
        emitln!(self.out, "{}{name} = {};", self.indent, spacer_item(spacer));
    }

    fn accept_layout_item(&mut self, item: &DomLayoutItem) {
        treewalker::walk_layout_item(self, item);

        let Some(Some(layout)) = self.layout_chain.last().cloned() else {
            return;
        };
        let item_name = self.driver.find_or_insert_layout_item(item);
        let row = item.attr_row.unwrap_or_default();
        let column = item.attr_column.unwrap_or_default();
        let col_span = item.attr_colspan.unwrap_or(1);
        let alignment = item.attr_alignment.as_deref().filter(|a| !a.is_empty());

        let (prefix, args) = match layout.class.as_str() {
            "QGridLayout" => {
                let row_span = item.attr_rowspan.unwrap_or(1);
                let mut args = format!("{item_name}, {row}, {column}, {row_span}, {col_span}");
                if let Some(alignment) = alignment {
                    emit!(args, ", {alignment}");
                }
                ("add", args)
            }
            "QFormLayout" => {
                let role = if col_span > 1 {
                    "QFormLayout::SpanningRole"
                } else if column == 0 {
                    "QFormLayout::LabelRole"
                } else {
                    "QFormLayout::FieldRole"
                };
                ("set", format!("{row}, {role}, {item_name}"))
            }
            class => {
                let mut args = item_name;
                if let Some(alignment) = alignment.filter(|_| class.contains("Box")) {
                    emit!(args, ", 0, {alignment}");
                }
                ("add", args)
            }
        };
        let method = match item.kind() {
            LayoutItemKind::Widget => "Widget",
            LayoutItemKind::Layout => "Layout",
            LayoutItemKind::Spacer => "Item",
            LayoutItemKind::Unknown => return,
        };
        emitln!(self.out, "\n{}{}->{prefix}{method}({args});\n", self.indent, layout.name);
    }

    fn accept_action_group(&mut self, action_group: &DomActionGroup) {
        let name = self.driver.find_or_insert_action_group(action_group);
        let parent = match self.action_group_chain.last() {
            Some(Some(group)) => group.clone(),
            _ => self.parent_widget_name(),
        };
        emitln!(self.out, "{}{name} = new QActionGroup({parent});", self.indent);
        self.write_properties(&name, "QActionGroup", &action_group.property, 0);

        self.action_group_chain.push(Some(name));
        treewalker::walk_action_group(self, action_group);
        self.action_group_chain.pop();
    }

    fn accept_action(&mut self, action: &DomAction) {
        if action.attr_menu.is_some() {
            return;
        }
        let name = self.driver.find_or_insert_action(action);
        self.registered_actions.insert(name.clone());
        let parent = match self.action_group_chain.last() {
            Some(Some(group)) => group.clone(),
            _ => self.parent_widget_name(),
        };
        emitln!(self.out, "{}{name} = new QAction({parent});", self.indent);
        self.write_properties(&name, "QAction", &action.property, 0);
    }

    fn accept_action_ref(&mut self, action_ref: &DomActionRef) {
        let name = action_ref.attr_name.as_deref().unwrap_or_default();
        let Some(widget) = self.parent_widget().map(|f| f.name.clone()) else {
            return;
        };
        if name.is_empty() || self.driver.action_group_by_name(name) {
            return;
        }
        let separator = name == "separator";
        let is_menu = match self.driver.widget_by_name(name) {
            Some(class) => self.custom_widgets.is_menu(class),
            None => {
                if self.driver.action_by_name(name).is_none() && !separator {
                    self.warn(format_args!("action `{name}' not declared"));
                    return;
                }
                false
            }
        };

        let indent = &self.indent;
        if separator {
            emitln!(self.delayed_actions, "{indent}{widget}->addSeparator();");
        } else if is_menu {
            emitln!(self.delayed_actions, "{indent}{widget}->addAction({name}->menuAction());");
        } else {
            emitln!(self.delayed_actions, "{indent}{widget}->addAction({name});");
        }
    }

    fn accept_tab_stops(&mut self, tab_stops: &DomTabStops) {
        let mut last = String::new();
        for (i, name) in tab_stops.tabstop.iter().enumerate() {
            if !self.registered_widgets.contains(name) {
                self.warn(format_args!("tab stop assignment '{name}' is not a valid widget"));
                continue;
            }
            if i == 0 {
                last = name.clone();
                continue;
            }
            if name.is_empty() || last.is_empty() {
                continue;
            }
            emitln!(self.out, "{}QWidget::setTabOrder({last}, {name});", self.indent);
            last = name.clone();
        }
    }

    fn accept_connection(&mut self, connection: &DomConnection) {
        let sender = self.find_declaration(connection.sender.as_deref().unwrap_or_default());
        let receiver = self.find_declaration(connection.receiver.as_deref().unwrap_or_default());
        let (Some(sender), Some(receiver)) = (sender, receiver) else {
            return;
        };
        emitln!(
            self.out,
            "{}QObject::connect({sender}, SIGNAL({}), {receiver}, SLOT({}));",
            self.indent,
            connection.signal.as_deref().unwrap_or_default(),
            connection.slot.as_deref().unwrap_or_default()
        );
    }

    fn accept_image(&mut self, image: &DomImage) {
        if image.attr_name.is_some() {
            self.registered_images.insert(image.name().to_owned(), image.extension());
        }
    }

    fn accept_custom_widgets(&mut self, _custom_widgets: &DomCustomWidgets) {}
}

fn needs_translation(notr: Option<&str>) -> bool {
    notr.map_or(true, |notr| !to_bool(notr))
}

fn string_needs_translation(string: Option<&DomString>) -> bool {
    string.map_or(false, |s| needs_translation(s.attr_notr.as_deref()))
}

fn open_ifndef(out: &mut String, symbol: &str) {
    if !symbol.is_empty() {
        emitln!(out, "#if ! defined({symbol})");
    }
}

fn close_ifndef(out: &mut String, symbol: &str) {
    if !symbol.is_empty() {
        emitln!(out, "#endif\n");
    }
}

fn dom_color(color: &DomColor) -> String {
    let (r, g, b) = (
        color.red.unwrap_or_default(),
        color.green.unwrap_or_default(),
        color.blue.unwrap_or_default(),
    );
    match color.attr_alpha {
        Some(a) => format!("QColor({r}, {g}, {b}, {a})"),
        None => format!("QColor({r}, {g}, {b})"),
    }
}

fn write_resource_icon(out: &mut String, icon: &str, indent: &str, resource: &DomResourceIcon) {
    let states = [
        (&resource.normaloff, "Normal", "Off"),
        (&resource.normalon, "Normal", "On"),
        (&resource.disabledoff, "Disabled", "Off"),
        (&resource.disabledon, "Disabled", "On"),
        (&resource.activeoff, "Active", "Off"),
        (&resource.activeon, "Active", "On"),
        (&resource.selectedoff, "Selected", "Off"),
        (&resource.selectedon, "Selected", "On"),
    ];
    for (pixmap, mode, state) in states {
        if let Some(pixmap) = pixmap {
            emitln!(
                out,
                "{indent}{icon}.addFile(QString::fromUtf8({}), QSize(), QIcon::{mode}, QIcon::{state});",
                fix_string(&pixmap.text, indent)
            );
        }
    }
}

/// `new QSpacerItem(...)` for a spacer; horizontal and expanding unless told
/// otherwise.
fn spacer_item(spacer: &DomSpacer) -> String {
    let properties = property_map(&spacer.property);
    let mut item = String::from("new QSpacerItem(");
    if let Some(size) = properties.get("sizeHint").and_then(|p| p.element_size()) {
        emit!(item, "{}, {}, ", size.width.unwrap_or_default(), size.height.unwrap_or_default());
    }

    let mut size_type = properties
        .get("sizeType")
        .and_then(|p| p.element_enum())
        .cloned()
        .unwrap_or_else(|| "Expanding".to_owned());
    if !size_type.starts_with("QSizePolicy::") {
        size_type.insert_str(0, "QSizePolicy::");
    }

    let vertical = properties
        .get("orientation")
        .and_then(|p| p.element_enum())
        .map_or(false, |o| o == "Qt::Vertical" || o == "Vertical");
    if vertical {
        emit!(item, "QSizePolicy::Minimum, {size_type})");
    } else {
        emit!(item, "{size_type}, QSizePolicy::Minimum)");
    }
    item
}

/// Toolbar area argument of `addToolBar`; legacy files store it as a number.
fn tool_bar_area(attributes: &PropertyMap<'_>) -> String {
    let Some(property) = attributes.get("toolBarArea") else {
        return String::new();
    };
    match &property.value {
        PropertyValue::Number(n) => format!("static_cast<Qt::ToolBarArea>({n}), "),
        PropertyValue::Enum(area) if area.starts_with("Qt::") => format!("{area}, "),
        PropertyValue::Enum(area) => format!("Qt::{area}, "),
        _ => String::new(),
    }
}

fn float(value: Option<f64>) -> String {
    number_g(value.unwrap_or_default())
}

/// Renders like printf's `%g`: six significant digits, no trailing zeros.
fn number_g(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    // the exponent is the one of the value rounded to six digits
    let scientific = format!("{value:.5e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or_default();
    if !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs());
    }
    let decimals = (5 - exponent).max(0) as usize;
    trim_fraction(&format!("{value:.decimals$}")).to_owned()
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printf_g_numbers() {
        assert_eq!(number_g(1.5), "1.5");
        assert_eq!(number_g(f64::from(1.1f32)), "1.1");
        assert_eq!(number_g(100.0), "100");
        assert_eq!(number_g(0.25), "0.25");
        assert_eq!(number_g(1234567.0), "1.23457e+06");
        assert_eq!(number_g(0.00001), "1e-05");
        assert_eq!(number_g(-2.0), "-2");
        assert_eq!(number_g(0.0001), "0.0001");
        assert_eq!(number_g(999999.5), "1e+06");
        assert_eq!(number_g(-999999.5), "-1e+06");
    }

    #[test]
    fn spacer_defaults_to_horizontal_expanding() {
        let spacer = DomSpacer::default();
        assert_eq!(spacer_item(&spacer), "new QSpacerItem(QSizePolicy::Expanding, QSizePolicy::Minimum)");
    }

    #[test]
    fn vertical_spacer_with_size_hint() {
        let spacer: DomSpacer = crate::dom::from_str(
            r#"<spacer name="s">
                 <property name="orientation"><enum>Qt::Vertical</enum></property>
                 <property name="sizeHint"><size><width>20</width><height>40</height></size></property>
               </spacer>"#,
        )
        .unwrap();
        assert_eq!(
            spacer_item(&spacer),
            "new QSpacerItem(20, 40, QSizePolicy::Minimum, QSizePolicy::Expanding)"
        );
    }
}
