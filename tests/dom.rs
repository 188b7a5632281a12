//! Reading, writing and clearing the Dom model.

use uic::dom::*;
use uic::Error;

const FORM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ui version="4.0" stdsetdef="1">
 <!-- designer comment -->
 <class>Dialog</class>
 <widget class="QDialog" name="Dialog">
  <property name="geometry">
   <rect>
    <x>0</x>
    <y>0</y>
    <width>400</width>
    <height>300</height>
   </rect>
  </property>
  <property name="windowTitle">
   <string comment="title">Settings</string>
  </property>
  <layout class="QVBoxLayout" name="verticalLayout">
   <item>
    <widget class="QPushButton" name="okButton">
     <property name="text">
      <string>OK</string>
     </property>
     <property name="flat">
      <bool>true</bool>
     </property>
    </widget>
   </item>
   <item>
    <spacer name="spacer">
     <property name="orientation">
      <enum>Qt::Vertical</enum>
     </property>
    </spacer>
   </item>
  </layout>
 </widget>
 <resources/>
 <connections>
  <connection>
   <sender>okButton</sender>
   <signal>clicked()</signal>
   <receiver>Dialog</receiver>
   <slot>accept()</slot>
  </connection>
 </connections>
</ui>
"#;

// ---------------------------------------------------------------------------
// reading
// ---------------------------------------------------------------------------

#[test]
fn reads_nested_structure() {
    let ui = DomUI::from_xml(FORM).unwrap();
    assert_eq!(ui.attr_version.as_deref(), Some("4.0"));
    assert_eq!(ui.class_name(), "Dialog");
    assert!(ui.stdsetdef());

    let root = ui.widget.as_deref().unwrap();
    assert_eq!(root.class_name(), "QDialog");
    assert_eq!(root.property.len(), 2);

    let rect = root.property[0].element_rect().unwrap();
    assert_eq!((rect.width, rect.height), (Some(400), Some(300)));

    let title = root.property[1].element_string().unwrap();
    assert_eq!(title.text, "Settings");
    assert_eq!(title.attr_comment.as_deref(), Some("title"));

    let layout = &root.layout[0];
    assert_eq!(layout.class_name(), "QVBoxLayout");
    assert_eq!(layout.item.len(), 2);
    assert_eq!(layout.item[0].kind(), LayoutItemKind::Widget);
    assert_eq!(layout.item[1].kind(), LayoutItemKind::Spacer);

    let button = layout.item[0].element_widget().unwrap();
    assert_eq!(button.name(), "okButton");
    assert_eq!(button.property[1].element_bool().map(String::as_str), Some("true"));

    let connection = &ui.connections.as_ref().unwrap().connection[0];
    assert_eq!(connection.signal.as_deref(), Some("clicked()"));
    assert_eq!(connection.slot.as_deref(), Some("accept()"));
}

#[test]
fn tags_are_case_insensitive() {
    let ui = DomUI::from_xml(
        r#"<ui version="4.0"><widget class="QWidget" name="w"><property name="n"><Number>7</Number></property></widget></ui>"#,
    )
    .unwrap();
    let property = &ui.widget.unwrap().property[0];
    assert_eq!(property.element_number(), Some(&7));
}

#[test]
fn invalid_number_reads_as_zero() {
    let ui = DomUI::from_xml(
        r#"<ui version="4.0"><widget class="QWidget" name="w"><property name="n"><number>abc</number></property></widget></ui>"#,
    )
    .unwrap();
    assert_eq!(ui.widget.unwrap().property[0].element_number(), Some(&0));
}

#[test]
fn legacy_widget_root_is_wrapped() {
    let ui = DomUI::from_xml(r#"<widget class="QWidget" name="Form"/>"#).unwrap();
    assert_eq!(ui.class_name(), "Form");
    assert_eq!(ui.widget.unwrap().class_name(), "QWidget");
}

// ---------------------------------------------------------------------------
// errors
// ---------------------------------------------------------------------------

#[test]
fn unknown_child_is_rejected_with_position() {
    let src = "<ui version=\"4.0\">\n <widget class=\"QWidget\">\n  <bogus/>\n </widget>\n</ui>";
    let err = DomUI::from_xml(src).unwrap_err();
    match &err {
        Error::UnexpectedElement { pos, tag, .. } => {
            assert_eq!(tag, "bogus");
            assert_eq!(pos.line, 3);
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().starts_with("line 3, column "));
}

#[test]
fn unknown_attribute_is_rejected() {
    let err = DomUI::from_xml(r#"<ui version="4.0"><widget klass="QWidget"/></ui>"#).unwrap_err();
    assert!(matches!(err, Error::UnexpectedAttribute { ref name, .. } if name == "klass"));
}

#[test]
fn truncated_document_is_premature_eof() {
    let err = DomUI::from_xml(r#"<ui version="4.0"><widget class="QWidget">"#).unwrap_err();
    assert!(matches!(err, Error::UnexpectedEof { .. }));
}

#[test]
fn version_and_language_are_checked() {
    let old = DomUI::from_xml(r#"<ui version="3.3"/>"#).unwrap_err();
    assert!(matches!(old, Error::TooOldVersion(v) if v == "3.3"));

    let java = DomUI::from_xml(r#"<ui version="4.0" language="jambi"/>"#).unwrap_err();
    assert!(matches!(java, Error::UnsupportedLanguage(l) if l == "jambi"));

    assert!(DomUI::from_xml(r#"<ui version="4.0" language="c++"/>"#).is_ok());
}

#[test]
fn unexpected_root_is_rejected() {
    let err = DomUI::from_xml("<form/>").unwrap_err();
    assert!(matches!(err, Error::UnexpectedRoot { ref tag, .. } if tag == "form"));
}

// ---------------------------------------------------------------------------
// writing
// ---------------------------------------------------------------------------

#[test]
fn write_then_read_is_a_fixed_point() {
    let ui = DomUI::from_xml(FORM).unwrap();
    let first = ui.to_xml().unwrap();
    let reread = DomUI::from_xml(&first).unwrap();
    assert_eq!(reread, ui);
    assert_eq!(reread.to_xml().unwrap(), first);
}

#[test]
fn empty_nodes_are_written_as_empty_tags() {
    let ui = DomUI::from_xml(FORM).unwrap();
    let xml = ui.to_xml().unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<resources/>"));
    assert!(!xml.contains("designer comment"));
}

#[test]
fn property_tags_use_serializer_spelling() {
    let mut property = DomProperty::new("value");
    property.set_element_long_long(42);
    let xml = to_string(&property).unwrap();
    assert!(xml.contains("<longLong>42</longLong>"), "{xml}");

    let back: DomProperty = from_str(&xml).unwrap();
    assert_eq!(back.element_long_long(), Some(&42));
}

// ---------------------------------------------------------------------------
// union payloads and clearing
// ---------------------------------------------------------------------------

#[test]
fn setting_a_payload_replaces_the_previous_one() {
    let mut property = DomProperty::new("p");
    property.set_element_number(3);
    assert_eq!(property.kind(), PropertyKind::Number);

    property.set_element_string(DomString::new("text"));
    assert_eq!(property.kind(), PropertyKind::String);
    assert!(!property.has_element_number());
    assert_eq!(property.name(), "p");
}

#[test]
fn take_moves_the_payload_out() {
    let mut property = DomProperty::new("p");
    property.set_element_enum("Qt::Vertical".to_owned());

    assert_eq!(property.take_element_number(), None);
    assert_eq!(property.kind(), PropertyKind::Enum);

    assert_eq!(property.take_element_enum().as_deref(), Some("Qt::Vertical"));
    assert_eq!(property.kind(), PropertyKind::Unknown);
}

#[test]
fn clear_keeps_attributes_unless_asked() {
    let mut ui = DomUI::from_xml(FORM).unwrap();
    let mut widget = *ui.widget.take().unwrap();

    widget.clear(false);
    assert!(widget.property.is_empty());
    assert!(widget.layout.is_empty());
    assert_eq!(widget.name(), "Dialog");

    widget.clear(true);
    assert_eq!(widget.attr_name, None);
    assert_eq!(widget.attr_class, None);
}

#[test]
fn brush_holds_one_payload() {
    let mut brush = DomBrush::default();
    brush.set_element_gradient(DomGradient::default());
    assert_eq!(brush.kind(), BrushKind::Gradient);

    brush.set_element_color(DomColor { red: Some(255), ..Default::default() });
    assert_eq!(brush.kind(), BrushKind::Color);
    assert!(brush.take_element_gradient().is_none());
    assert_eq!(brush.kind(), BrushKind::Color);

    let color = brush.take_element_color().unwrap();
    assert_eq!(color.red, Some(255));
    assert_eq!(brush.kind(), BrushKind::Unknown);
    assert!(!brush.has_element_color());
}

#[test]
fn layout_item_holds_one_payload() {
    let mut item = DomLayoutItem { attr_row: Some(2), ..Default::default() };
    item.set_element_widget(DomWidget::new("QLabel", "label"));
    assert_eq!(item.kind(), LayoutItemKind::Widget);

    item.set_element_spacer(DomSpacer { attr_name: Some("spacer".into()), ..Default::default() });
    assert_eq!(item.kind(), LayoutItemKind::Spacer);
    assert!(item.element_widget().is_none());
    assert!(item.take_element_widget().is_none());

    let spacer = item.take_element_spacer().unwrap();
    assert_eq!(spacer.attr_name.as_deref(), Some("spacer"));
    assert_eq!(item.kind(), LayoutItemKind::Unknown);
    assert_eq!(item.attr_row, Some(2));
}

// ---------------------------------------------------------------------------
// numeric precision
// ---------------------------------------------------------------------------

#[test]
fn double_attributes_keep_fifteen_digits() {
    let gradient: DomGradient = from_str(r#"<gradient startx="0.1"/>"#).unwrap();
    let xml = to_string(&gradient).unwrap();
    assert!(xml.contains(r#"startx="0.100000000000000""#), "{xml}");
}

#[test]
fn float_properties_keep_eight_digits() {
    let property: DomProperty = from_str(r#"<property name="x"><float>1.5</float></property>"#).unwrap();
    let xml = to_string(&property).unwrap();
    assert!(xml.contains("<float>1.50000000</float>"), "{xml}");
}
