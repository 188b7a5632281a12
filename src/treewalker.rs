//! Visitor over a [`DomUI`] tree.
//!
//! Every hook defaults to the matching `walk_*` function, which visits the node's
//! children in the same order `write` serializes them. An implementation that
//! overrides a hook keeps descending only if it calls `walk_*` itself:
//!
//! ```ignore
//! fn accept_widget(&mut self, widget: &DomWidget) {
//!     self.classes.push(widget.class_name().to_owned());
//!     treewalker::walk_widget(self, widget);
//! }
//! ```

use crate::dom::*;

pub trait TreeWalker {
    fn accept_ui(&mut self, ui: &DomUI) {
        walk_ui(self, ui)
    }
    fn accept_layout_default(&mut self, _layout_default: &DomLayoutDefault) {}
    fn accept_layout_function(&mut self, _layout_function: &DomLayoutFunction) {}
    fn accept_tab_stops(&mut self, _tab_stops: &DomTabStops) {}
    fn accept_custom_widgets(&mut self, custom_widgets: &DomCustomWidgets) {
        walk_custom_widgets(self, custom_widgets)
    }
    fn accept_custom_widget(&mut self, custom_widget: &DomCustomWidget) {
        walk_custom_widget(self, custom_widget)
    }
    fn accept_layout(&mut self, layout: &DomLayout) {
        walk_layout(self, layout)
    }
    fn accept_layout_item(&mut self, item: &DomLayoutItem) {
        walk_layout_item(self, item)
    }
    fn accept_widget(&mut self, widget: &DomWidget) {
        walk_widget(self, widget)
    }
    fn accept_spacer(&mut self, spacer: &DomSpacer) {
        walk_spacer(self, spacer)
    }
    fn accept_script(&mut self, _script: &DomScript) {}
    fn accept_widget_data(&mut self, widget_data: &DomWidgetData) {
        walk_widget_data(self, widget_data)
    }
    fn accept_row(&mut self, row: &DomRow) {
        walk_row(self, row)
    }
    fn accept_column(&mut self, column: &DomColumn) {
        walk_column(self, column)
    }
    fn accept_item(&mut self, item: &DomItem) {
        walk_item(self, item)
    }
    fn accept_property(&mut self, property: &DomProperty) {
        walk_property(self, property)
    }
    fn accept_color(&mut self, _color: &DomColor) {}
    fn accept_gradient(&mut self, gradient: &DomGradient) {
        walk_gradient(self, gradient)
    }
    fn accept_brush(&mut self, brush: &DomBrush) {
        walk_brush(self, brush)
    }
    fn accept_color_role(&mut self, color_role: &DomColorRole) {
        walk_color_role(self, color_role)
    }
    fn accept_color_group(&mut self, color_group: &DomColorGroup) {
        walk_color_group(self, color_group)
    }
    fn accept_palette(&mut self, palette: &DomPalette) {
        walk_palette(self, palette)
    }
    fn accept_font(&mut self, _font: &DomFont) {}
    fn accept_point(&mut self, _point: &DomPoint) {}
    fn accept_rect(&mut self, _rect: &DomRect) {}
    fn accept_size_policy(&mut self, _size_policy: &DomSizePolicy) {}
    fn accept_size(&mut self, _size: &DomSize) {}
    fn accept_date(&mut self, _date: &DomDate) {}
    fn accept_time(&mut self, _time: &DomTime) {}
    fn accept_date_time(&mut self, _date_time: &DomDateTime) {}
    fn accept_locale(&mut self, _locale: &DomLocale) {}
    fn accept_string(&mut self, _string: &DomString) {}
    fn accept_string_list(&mut self, _string_list: &DomStringList) {}
    fn accept_resource_icon(&mut self, icon: &DomResourceIcon) {
        walk_resource_icon(self, icon)
    }
    fn accept_resource_pixmap(&mut self, _pixmap: &DomResourcePixmap) {}
    fn accept_point_f(&mut self, _point: &DomPointF) {}
    fn accept_rect_f(&mut self, _rect: &DomRectF) {}
    fn accept_size_f(&mut self, _size: &DomSizeF) {}
    fn accept_char(&mut self, _ch: &DomChar) {}
    fn accept_url(&mut self, url: &DomUrl) {
        walk_url(self, url)
    }
    fn accept_images(&mut self, images: &DomImages) {
        walk_images(self, images)
    }
    fn accept_image(&mut self, _image: &DomImage) {}
    fn accept_includes(&mut self, includes: &DomIncludes) {
        walk_includes(self, includes)
    }
    fn accept_include(&mut self, _include: &DomInclude) {}
    fn accept_resources(&mut self, resources: &DomResources) {
        walk_resources(self, resources)
    }
    fn accept_resource(&mut self, _resource: &DomResource) {}
    fn accept_action_group(&mut self, action_group: &DomActionGroup) {
        walk_action_group(self, action_group)
    }
    fn accept_action(&mut self, action: &DomAction) {
        walk_action(self, action)
    }
    fn accept_action_ref(&mut self, _action_ref: &DomActionRef) {}
    fn accept_connections(&mut self, connections: &DomConnections) {
        walk_connections(self, connections)
    }
    fn accept_connection(&mut self, connection: &DomConnection) {
        walk_connection(self, connection)
    }
    fn accept_connection_hints(&mut self, hints: &DomConnectionHints) {
        walk_connection_hints(self, hints)
    }
    fn accept_connection_hint(&mut self, _hint: &DomConnectionHint) {}
    fn accept_designer_data(&mut self, designer_data: &DomDesignerData) {
        walk_designer_data(self, designer_data)
    }
    fn accept_slots(&mut self, _slots: &DomSlots) {}
    fn accept_button_groups(&mut self, button_groups: &DomButtonGroups) {
        walk_button_groups(self, button_groups)
    }
    fn accept_button_group(&mut self, button_group: &DomButtonGroup) {
        walk_button_group(self, button_group)
    }
}

pub fn walk_ui<V: TreeWalker + ?Sized>(v: &mut V, ui: &DomUI) {
    if let Some(widget) = &ui.widget {
        v.accept_widget(widget);
    }
    if let Some(layout_default) = &ui.layoutdefault {
        v.accept_layout_default(layout_default);
    }
    if let Some(layout_function) = &ui.layoutfunction {
        v.accept_layout_function(layout_function);
    }
    if let Some(custom_widgets) = &ui.customwidgets {
        v.accept_custom_widgets(custom_widgets);
    }
    if let Some(tab_stops) = &ui.tabstops {
        v.accept_tab_stops(tab_stops);
    }
    if let Some(images) = &ui.images {
        v.accept_images(images);
    }
    if let Some(includes) = &ui.includes {
        v.accept_includes(includes);
    }
    if let Some(resources) = &ui.resources {
        v.accept_resources(resources);
    }
    if let Some(connections) = &ui.connections {
        v.accept_connections(connections);
    }
    if let Some(designer_data) = &ui.designerdata {
        v.accept_designer_data(designer_data);
    }
    if let Some(slots) = &ui.slots {
        v.accept_slots(slots);
    }
    if let Some(button_groups) = &ui.buttongroups {
        v.accept_button_groups(button_groups);
    }
}

pub fn walk_custom_widgets<V: TreeWalker + ?Sized>(v: &mut V, custom_widgets: &DomCustomWidgets) {
    for custom_widget in &custom_widgets.customwidget {
        v.accept_custom_widget(custom_widget);
    }
}

pub fn walk_custom_widget<V: TreeWalker + ?Sized>(v: &mut V, custom_widget: &DomCustomWidget) {
    if let Some(size) = &custom_widget.sizehint {
        v.accept_size(size);
    }
    if let Some(script) = &custom_widget.script {
        v.accept_script(script);
    }
    if let Some(slots) = &custom_widget.slots {
        v.accept_slots(slots);
    }
}

pub fn walk_layout<V: TreeWalker + ?Sized>(v: &mut V, layout: &DomLayout) {
    for property in &layout.property {
        v.accept_property(property);
    }
    for attribute in &layout.attribute {
        v.accept_property(attribute);
    }
    for item in &layout.item {
        v.accept_layout_item(item);
    }
}

pub fn walk_layout_item<V: TreeWalker + ?Sized>(v: &mut V, item: &DomLayoutItem) {
    match &item.value {
        LayoutItemValue::Widget(widget) => v.accept_widget(widget),
        LayoutItemValue::Layout(layout) => v.accept_layout(layout),
        LayoutItemValue::Spacer(spacer) => v.accept_spacer(spacer),
        LayoutItemValue::Unknown => {}
    }
}

pub fn walk_widget<V: TreeWalker + ?Sized>(v: &mut V, widget: &DomWidget) {
    for property in &widget.property {
        v.accept_property(property);
    }
    for script in &widget.script {
        v.accept_script(script);
    }
    for widget_data in &widget.widgetdata {
        v.accept_widget_data(widget_data);
    }
    for attribute in &widget.attribute {
        v.accept_property(attribute);
    }
    for row in &widget.row {
        v.accept_row(row);
    }
    for column in &widget.column {
        v.accept_column(column);
    }
    for item in &widget.item {
        v.accept_item(item);
    }
    for layout in &widget.layout {
        v.accept_layout(layout);
    }
    for child in &widget.widget {
        v.accept_widget(child);
    }
    for action in &widget.action {
        v.accept_action(action);
    }
    for action_group in &widget.actiongroup {
        v.accept_action_group(action_group);
    }
    for action_ref in &widget.addaction {
        v.accept_action_ref(action_ref);
    }
}

pub fn walk_spacer<V: TreeWalker + ?Sized>(v: &mut V, spacer: &DomSpacer) {
    for property in &spacer.property {
        v.accept_property(property);
    }
}

pub fn walk_widget_data<V: TreeWalker + ?Sized>(v: &mut V, widget_data: &DomWidgetData) {
    for property in &widget_data.property {
        v.accept_property(property);
    }
}

pub fn walk_row<V: TreeWalker + ?Sized>(v: &mut V, row: &DomRow) {
    for property in &row.property {
        v.accept_property(property);
    }
}

pub fn walk_column<V: TreeWalker + ?Sized>(v: &mut V, column: &DomColumn) {
    for property in &column.property {
        v.accept_property(property);
    }
}

pub fn walk_item<V: TreeWalker + ?Sized>(v: &mut V, item: &DomItem) {
    for property in &item.property {
        v.accept_property(property);
    }
    for child in &item.item {
        v.accept_item(child);
    }
}

pub fn walk_property<V: TreeWalker + ?Sized>(v: &mut V, property: &DomProperty) {
    match &property.value {
        PropertyValue::Color(color) => v.accept_color(color),
        PropertyValue::Font(font) => v.accept_font(font),
        PropertyValue::IconSet(icon) => v.accept_resource_icon(icon),
        PropertyValue::Pixmap(pixmap) => v.accept_resource_pixmap(pixmap),
        PropertyValue::Palette(palette) => v.accept_palette(palette),
        PropertyValue::Point(point) => v.accept_point(point),
        PropertyValue::Rect(rect) => v.accept_rect(rect),
        PropertyValue::Locale(locale) => v.accept_locale(locale),
        PropertyValue::SizePolicy(size_policy) => v.accept_size_policy(size_policy),
        PropertyValue::Size(size) => v.accept_size(size),
        PropertyValue::String(string) => v.accept_string(string),
        PropertyValue::StringList(string_list) => v.accept_string_list(string_list),
        PropertyValue::Date(date) => v.accept_date(date),
        PropertyValue::Time(time) => v.accept_time(time),
        PropertyValue::DateTime(date_time) => v.accept_date_time(date_time),
        PropertyValue::PointF(point) => v.accept_point_f(point),
        PropertyValue::RectF(rect) => v.accept_rect_f(rect),
        PropertyValue::SizeF(size) => v.accept_size_f(size),
        PropertyValue::Char(ch) => v.accept_char(ch),
        PropertyValue::Url(url) => v.accept_url(url),
        PropertyValue::Brush(brush) => v.accept_brush(brush),
        PropertyValue::Unknown
        | PropertyValue::Bool(_)
        | PropertyValue::Cstring(_)
        | PropertyValue::Cursor(_)
        | PropertyValue::CursorShape(_)
        | PropertyValue::Enum(_)
        | PropertyValue::Set(_)
        | PropertyValue::Number(_)
        | PropertyValue::Float(_)
        | PropertyValue::Double(_)
        | PropertyValue::LongLong(_)
        | PropertyValue::UInt(_)
        | PropertyValue::ULongLong(_) => {}
    }
}

pub fn walk_gradient<V: TreeWalker + ?Sized>(v: &mut V, gradient: &DomGradient) {
    for stop in &gradient.gradientstop {
        if let Some(color) = &stop.color {
            v.accept_color(color);
        }
    }
}

pub fn walk_brush<V: TreeWalker + ?Sized>(v: &mut V, brush: &DomBrush) {
    match &brush.value {
        BrushValue::Color(color) => v.accept_color(color),
        BrushValue::Texture(texture) => v.accept_property(texture),
        BrushValue::Gradient(gradient) => v.accept_gradient(gradient),
        BrushValue::Unknown => {}
    }
}

pub fn walk_color_role<V: TreeWalker + ?Sized>(v: &mut V, color_role: &DomColorRole) {
    if let Some(brush) = &color_role.brush {
        v.accept_brush(brush);
    }
}

pub fn walk_color_group<V: TreeWalker + ?Sized>(v: &mut V, color_group: &DomColorGroup) {
    for color_role in &color_group.colorrole {
        v.accept_color_role(color_role);
    }
    for color in &color_group.color {
        v.accept_color(color);
    }
}

pub fn walk_palette<V: TreeWalker + ?Sized>(v: &mut V, palette: &DomPalette) {
    for group in [&palette.active, &palette.inactive, &palette.disabled].into_iter().flatten() {
        v.accept_color_group(group);
    }
}

pub fn walk_resource_icon<V: TreeWalker + ?Sized>(v: &mut V, icon: &DomResourceIcon) {
    let states = [
        &icon.normaloff,
        &icon.normalon,
        &icon.disabledoff,
        &icon.disabledon,
        &icon.activeoff,
        &icon.activeon,
        &icon.selectedoff,
        &icon.selectedon,
    ];
    for pixmap in states.into_iter().flatten() {
        v.accept_resource_pixmap(pixmap);
    }
}

pub fn walk_url<V: TreeWalker + ?Sized>(v: &mut V, url: &DomUrl) {
    if let Some(string) = &url.string {
        v.accept_string(string);
    }
}

pub fn walk_images<V: TreeWalker + ?Sized>(v: &mut V, images: &DomImages) {
    for image in &images.image {
        v.accept_image(image);
    }
}

pub fn walk_includes<V: TreeWalker + ?Sized>(v: &mut V, includes: &DomIncludes) {
    for include in &includes.include {
        v.accept_include(include);
    }
}

pub fn walk_resources<V: TreeWalker + ?Sized>(v: &mut V, resources: &DomResources) {
    for resource in &resources.include {
        v.accept_resource(resource);
    }
}

pub fn walk_action_group<V: TreeWalker + ?Sized>(v: &mut V, action_group: &DomActionGroup) {
    for action in &action_group.action {
        v.accept_action(action);
    }
    for child in &action_group.actiongroup {
        v.accept_action_group(child);
    }
    for property in &action_group.property {
        v.accept_property(property);
    }
    for attribute in &action_group.attribute {
        v.accept_property(attribute);
    }
}

pub fn walk_action<V: TreeWalker + ?Sized>(v: &mut V, action: &DomAction) {
    for property in &action.property {
        v.accept_property(property);
    }
    for attribute in &action.attribute {
        v.accept_property(attribute);
    }
}

pub fn walk_connections<V: TreeWalker + ?Sized>(v: &mut V, connections: &DomConnections) {
    for connection in &connections.connection {
        v.accept_connection(connection);
    }
}

pub fn walk_connection<V: TreeWalker + ?Sized>(v: &mut V, connection: &DomConnection) {
    if let Some(hints) = &connection.hints {
        v.accept_connection_hints(hints);
    }
}

pub fn walk_connection_hints<V: TreeWalker + ?Sized>(v: &mut V, hints: &DomConnectionHints) {
    for hint in &hints.hint {
        v.accept_connection_hint(hint);
    }
}

pub fn walk_designer_data<V: TreeWalker + ?Sized>(v: &mut V, designer_data: &DomDesignerData) {
    for property in &designer_data.property {
        v.accept_property(property);
    }
}

pub fn walk_button_groups<V: TreeWalker + ?Sized>(v: &mut V, button_groups: &DomButtonGroups) {
    for button_group in &button_groups.buttongroup {
        v.accept_button_group(button_group);
    }
}

pub fn walk_button_group<V: TreeWalker + ?Sized>(v: &mut V, button_group: &DomButtonGroup) {
    for property in &button_group.property {
        v.accept_property(property);
    }
    for attribute in &button_group.attribute {
        v.accept_property(attribute);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Trace(Vec<String>);

    impl TreeWalker for Trace {
        fn accept_widget(&mut self, widget: &DomWidget) {
            self.0.push(format!("widget:{}", widget.name()));
            walk_widget(self, widget);
        }
        fn accept_layout(&mut self, layout: &DomLayout) {
            self.0.push(format!("layout:{}", layout.name()));
            walk_layout(self, layout);
        }
        fn accept_property(&mut self, property: &DomProperty) {
            self.0.push(format!("property:{}", property.name()));
            walk_property(self, property);
        }
        fn accept_color(&mut self, _color: &DomColor) {
            self.0.push("color".into());
        }
        fn accept_action(&mut self, action: &DomAction) {
            self.0.push(format!("action:{}", action.name()));
        }
        fn accept_image(&mut self, image: &DomImage) {
            self.0.push(format!("image:{}", image.name()));
        }
    }

    const FORM: &str = r#"<ui version="4.0">
 <widget class="QWidget" name="Form">
  <action name="act"/>
  <widget class="QLabel" name="label"/>
  <layout class="QVBoxLayout" name="box">
   <item>
    <widget class="QPushButton" name="button">
     <property name="palette"><color><red>1</red></color></property>
    </widget>
   </item>
  </layout>
  <property name="windowTitle"><string>Form</string></property>
 </widget>
 <images>
  <image name="img"><data format="PNG" length="0"></data></image>
 </images>
</ui>"#;

    #[test]
    fn walks_in_schema_order() {
        let ui = DomUI::from_xml(FORM).unwrap();
        let mut trace = Trace::default();
        trace.accept_ui(&ui);
        assert_eq!(
            trace.0,
            [
                "widget:Form",
                "property:windowTitle",
                "layout:box",
                "widget:button",
                "property:palette",
                "color",
                "widget:label",
                "action:act",
                "image:img",
            ]
        );
    }

    struct Prune(usize);

    impl TreeWalker for Prune {
        fn accept_widget(&mut self, _widget: &DomWidget) {
            self.0 += 1;
        }
    }

    #[test]
    fn override_without_walk_prunes() {
        let ui = DomUI::from_xml(FORM).unwrap();
        let mut prune = Prune(0);
        prune.accept_ui(&ui);
        assert_eq!(prune.0, 1);
    }
}
