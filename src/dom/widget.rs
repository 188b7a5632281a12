use super::DomProperty;

dom_element! {
    pub struct DomWidget = "widget" {
        attributes {
            attr_class: String = "class",
            attr_name: String = "name",
            attr_native: bool = "native",
        }
        elements {
            many class: String = "class",
            many property: DomProperty = "property",
            many script: DomScript = "script",
            many widgetdata: DomWidgetData = "widgetdata",
            many attribute: DomProperty = "attribute",
            many row: DomRow = "row",
            many column: DomColumn = "column",
            many item: DomItem = "item",
            many layout: DomLayout = "layout",
            many widget: DomWidget = "widget",
            many action: DomAction = "action",
            many actiongroup: DomActionGroup = "actiongroup",
            many addaction: DomActionRef = "addaction",
            many zorder: String = "zorder",
        }
    }
}

impl DomWidget {
    pub fn new(class: impl Into<String>, name: impl Into<String>) -> Self {
        DomWidget {
            attr_class: Some(class.into()),
            attr_name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn class_name(&self) -> &str {
        self.attr_class.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.attr_name.as_deref().unwrap_or_default()
    }
}

dom_element! {
    pub struct DomLayout = "layout" {
        attributes {
            attr_class: String = "class",
            attr_name: String = "name",
            attr_stretch: String = "stretch",
            attr_rowstretch: String = "rowstretch",
            attr_columnstretch: String = "columnstretch",
            attr_rowminimumheight: String = "rowminimumheight",
            attr_columnminimumwidth: String = "columnminimumwidth",
        }
        elements {
            many property: DomProperty = "property",
            many attribute: DomProperty = "attribute",
            many item: DomLayoutItem = "item",
        }
    }
}

impl DomLayout {
    pub fn class_name(&self) -> &str {
        self.attr_class.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.attr_name.as_deref().unwrap_or_default()
    }
}

dom_union! {
    /// Cell of a layout holding a widget, a nested layout or a spacer.
    pub struct DomLayoutItem = "layoutitem" {
        attributes {
            attr_row: i32 = "row",
            attr_column: i32 = "column",
            attr_rowspan: i32 = "rowspan",
            attr_colspan: i32 = "colspan",
            attr_alignment: String = "alignment",
        }
        pub enum LayoutItemValue / LayoutItemKind {
            Widget(child DomWidget) = "widget",
            Layout(child DomLayout) = "layout",
            Spacer(child DomSpacer) = "spacer",
        }
    }
}

dom_element! {
    pub struct DomRow = "row" {
        attributes {}
        elements {
            many property: DomProperty = "property",
        }
    }
}

dom_element! {
    pub struct DomColumn = "column" {
        attributes {}
        elements {
            many property: DomProperty = "property",
        }
    }
}

dom_element! {
    /// Model item of an item view or combo box; items nest for trees.
    pub struct DomItem = "item" {
        attributes {
            attr_row: i32 = "row",
            attr_column: i32 = "column",
        }
        elements {
            many property: DomProperty = "property",
            many item: DomItem = "item",
        }
    }
}

dom_element! {
    pub struct DomSpacer = "spacer" {
        attributes {
            attr_name: String = "name",
        }
        elements {
            many property: DomProperty = "property",
        }
    }
}

dom_element! {
    /// Script attached to a widget; the code is `text`.
    pub struct DomScript = "script" {
        attributes {
            attr_source: String = "source",
            attr_language: String = "language",
        }
        elements {}
    }
}

dom_element! {
    pub struct DomWidgetData = "widgetdata" {
        attributes {}
        elements {
            many property: DomProperty = "property",
        }
    }
}

dom_element! {
    pub struct DomAction = "action" {
        attributes {
            attr_name: String = "name",
            attr_menu: String = "menu",
        }
        elements {
            many property: DomProperty = "property",
            many attribute: DomProperty = "attribute",
        }
    }
}

impl DomAction {
    pub fn name(&self) -> &str {
        self.attr_name.as_deref().unwrap_or_default()
    }
}

dom_element! {
    pub struct DomActionGroup = "actiongroup" {
        attributes {
            attr_name: String = "name",
        }
        elements {
            many action: DomAction = "action",
            many actiongroup: DomActionGroup = "actiongroup",
            many property: DomProperty = "property",
            many attribute: DomProperty = "attribute",
        }
    }
}

impl DomActionGroup {
    pub fn name(&self) -> &str {
        self.attr_name.as_deref().unwrap_or_default()
    }
}

dom_element! {
    /// `<addaction name="..."/>`: places an action (or a menu, or a separator)
    /// on the enclosing widget.
    pub struct DomActionRef = "actionref" {
        attributes {
            attr_name: String = "name",
        }
        elements {}
    }
}

dom_element! {
    pub struct DomButtonGroup = "buttongroup" {
        attributes {
            attr_name: String = "name",
        }
        elements {
            many property: DomProperty = "property",
            many attribute: DomProperty = "attribute",
        }
    }
}

impl DomButtonGroup {
    pub fn name(&self) -> &str {
        self.attr_name.as_deref().unwrap_or_default()
    }
}

dom_element! {
    pub struct DomButtonGroups = "buttongroups" {
        attributes {}
        elements {
            many buttongroup: DomButtonGroup = "buttongroup",
        }
    }
}
