//! End-to-end header generation from `.ui` sources.

use uic::driver::Driver;
use uic::option::Options;
use uic::uic::Uic;

fn compile_with(options: &Options, src: &str) -> String {
    let mut driver = Driver::new();
    let mut uic = Uic::new(&mut driver, options);
    let ui = uic.load(src).unwrap();
    let mut out = vec![];
    uic.write(&ui, &mut out).unwrap();
    assert!(driver.problems().is_empty(), "{:?}", driver.problems());
    String::from_utf8(out).unwrap()
}

fn compile(src: &str) -> String {
    compile_with(&Options::default(), src)
}

/// Text between `start` and the next occurrence of `end` after it.
fn section<'a>(out: &'a str, start: &str, end: &str) -> &'a str {
    let from = out.find(start).unwrap_or_else(|| panic!("{start:?} not found in\n{out}"));
    let rest = &out[from..];
    let to = rest.find(end).unwrap_or(rest.len());
    &rest[..to]
}

const PUSH_BUTTON_FORM: &str = r#"<ui version="4.0">
 <class>Form</class>
 <widget class="QWidget" name="Form">
  <widget class="QPushButton" name="pushButton">
   <property name="text">
    <string>Press</string>
   </property>
  </widget>
 </widget>
</ui>"#;

// ---------------------------------------------------------------------------
// declaration
// ---------------------------------------------------------------------------

#[test]
fn single_button_form() {
    let out = compile(PUSH_BUTTON_FORM);

    let class = section(&out, "class Ui_Form", "void setupUi");
    let members: Vec<&str> = class.lines().filter(|l| l.ends_with(';') && l.contains(" *")).collect();
    assert_eq!(members, ["    QPushButton *pushButton;"]);

    assert!(out.contains("    void setupUi(QWidget *Form)\n    {\n"));
    assert!(out.contains(
        "        if (Form->objectName().isEmpty()) {\n            Form->setObjectName(QString::fromUtf8(\"Form\"));\n        }\n"
    ));
    assert!(out.contains("        pushButton = new QPushButton(Form);\n"));
    assert!(out.contains("        pushButton->setObjectName(QString::fromUtf8(\"pushButton\"));\n"));
    assert!(out.contains("\n        retranslateUi(Form);\n"));
    assert!(out.contains("\n        QMetaObject::connectSlotsByName(Form);\n"));

    let retranslate = section(&out, "void retranslateUi", "    }\n");
    assert!(retranslate.contains(
        "        pushButton->setText(QApplication::translate(\"Form\", \"Press\", nullptr));\n"
    ));
    assert!(retranslate.contains("        (void) Form;\n"));

    assert!(out.contains("namespace Ui {\n    class Form: public Ui_Form {};\n} // namespace Ui\n"));
    assert!(out.contains("QT_BEGIN_NAMESPACE\n\nclass Ui_Form\n{\npublic:\n"));
    assert!(out.contains("QT_END_NAMESPACE\n"));
}

#[test]
fn includes_are_sorted_globals() {
    let out = compile(PUSH_BUTTON_FORM);
    let includes: Vec<&str> = out.lines().filter(|l| l.starts_with("#include")).collect();
    assert!(includes.contains(&"#include <qpushbutton.h>"));
    assert!(includes.contains(&"#include <qwidget.h>"));
    assert!(includes.contains(&"#include <qapplication.h>"));
    let mut sorted = includes.clone();
    sorted.sort();
    assert_eq!(includes, sorted);
}

#[test]
fn qualified_form_name_opens_namespaces() {
    let src = PUSH_BUTTON_FORM.replace("<class>Form</class>", "<class>app::Form</class>");
    let out = compile(&src);
    assert!(out.contains("namespace app {\n\nclass Ui_Form\n"));
    assert!(out.contains("};\n\n} // namespace app\n"));
    assert!(out.contains("namespace app {\nnamespace Ui {\n    class Form: public Ui_Form {};\n} // namespace Ui\n} // namespace app\n"));
}

#[test]
fn options_change_the_output() {
    let options = Options {
        auto_connection: false,
        generate_namespace: false,
        translate_function: "tr".into(),
        postfix: "Base".into(),
        ..Default::default()
    };
    let out = compile_with(&options, PUSH_BUTTON_FORM);
    assert!(out.contains("class Ui_FormBase\n"));
    assert!(!out.contains("connectSlotsByName"));
    assert!(!out.contains("namespace Ui"));
    assert!(out.contains("pushButton->setText(tr(\"Press\", nullptr));"));
}

// ---------------------------------------------------------------------------
// setupUi details
// ---------------------------------------------------------------------------

const DIALOG: &str = r#"<ui version="4.0">
 <class>Dialog</class>
 <widget class="QDialog" name="Dialog">
  <property name="geometry">
   <rect><x>0</x><y>0</y><width>320</width><height>240</height></rect>
  </property>
  <layout class="QGridLayout" name="gridLayout">
   <item row="0" column="0">
    <widget class="QLabel" name="label">
     <property name="text"><string>&amp;Name:</string></property>
     <property name="buddy"><cstring>lineEdit</cstring></property>
    </widget>
   </item>
   <item row="0" column="1">
    <widget class="QLineEdit" name="lineEdit">
     <property name="toolTip"><string>Your name</string></property>
     <property name="maxLength"><number>32</number></property>
     <property name="custom" stdset="0"><number>5</number></property>
    </widget>
   </item>
   <item row="1" column="0" colspan="2">
    <widget class="QComboBox" name="comboBox">
     <item><property name="text"><string>One</string></property></item>
     <item><property name="text"><string>Two</string></property></item>
    </widget>
   </item>
   <item row="2" column="0">
    <spacer name="verticalSpacer">
     <property name="orientation"><enum>Qt::Vertical</enum></property>
     <property name="sizeHint"><size><width>20</width><height>40</height></size></property>
    </spacer>
   </item>
   <item row="2" column="1">
    <widget class="QPushButton" name="okButton">
     <property name="text"><string notr="true">OK</string></property>
    </widget>
   </item>
  </layout>
 </widget>
 <tabstops>
  <tabstop>lineEdit</tabstop>
  <tabstop>comboBox</tabstop>
  <tabstop>okButton</tabstop>
 </tabstops>
 <connections>
  <connection>
   <sender>okButton</sender>
   <signal>clicked()</signal>
   <receiver>Dialog</receiver>
   <slot>accept()</slot>
  </connection>
 </connections>
</ui>"#;

#[test]
fn top_level_geometry_becomes_resize() {
    let out = compile(DIALOG);
    assert!(out.contains("        Dialog->resize(320, 240);\n"));
    assert!(!out.contains("setGeometry"));
}

#[test]
fn grid_layout_items() {
    let out = compile(DIALOG);
    assert!(out.contains("        gridLayout = new QGridLayout(Dialog);\n"));
    assert!(out.contains("        gridLayout->setObjectName(QString::fromUtf8(\"gridLayout\"));\n"));
    assert!(out.contains("        label = new QLabel(Dialog);\n"));
    assert!(out.contains("\n        gridLayout->addWidget(label, 0, 0, 1, 1);\n\n"));
    assert!(out.contains("\n        gridLayout->addWidget(lineEdit, 0, 1, 1, 1);\n\n"));
    assert!(out.contains("\n        gridLayout->addWidget(comboBox, 1, 0, 1, 2);\n\n"));
    assert!(out.contains(
        "        verticalSpacer = new QSpacerItem(20, 40, QSizePolicy::Minimum, QSizePolicy::Expanding);\n"
    ));
    assert!(out.contains("\n        gridLayout->addItem(verticalSpacer, 2, 0, 1, 1);\n\n"));

    let class = section(&out, "class Ui_Dialog", "void setupUi");
    assert!(class.contains("    QGridLayout *gridLayout;\n"));
    assert!(class.contains("    QSpacerItem *verticalSpacer;\n"));
}

#[test]
fn property_setters() {
    let out = compile(DIALOG);
    assert!(out.contains("        lineEdit->setMaxLength(32);\n"));
    assert!(out.contains("        lineEdit->setProperty(\"custom\", QVariant(5));\n"));
    assert!(out.contains("        okButton->setText(QString::fromUtf8(\"OK\"));\n"));
    assert!(out.contains(
        "#if ! defined(QT_NO_TOOLTIP)\n        lineEdit->setToolTip(QApplication::translate(\"Dialog\", \"Your name\", nullptr));\n#endif\n\n"
    ));
}

#[test]
fn untranslated_text_stays_in_setup() {
    let out = compile(DIALOG);
    let setup = section(&out, "void setupUi", "void retranslateUi");
    let retranslate = section(&out, "void retranslateUi", "};");
    assert!(setup.contains("okButton->setText"));
    assert!(!retranslate.contains("okButton->setText"));
    assert!(retranslate.contains("label->setText"));
    // the form itself is unused while retranslating
    assert!(retranslate.contains("(void) Dialog;"));
}

#[test]
fn buddies_tab_order_and_connections() {
    let out = compile(DIALOG);
    assert!(out.contains("#if ! defined(QT_NO_SHORTCUT)\n        label->setBuddy(lineEdit);\n#endif\n\n"));
    assert!(out.contains("        QWidget::setTabOrder(lineEdit, comboBox);\n"));
    assert!(out.contains("        QWidget::setTabOrder(comboBox, okButton);\n"));
    assert!(out.contains("        QObject::connect(okButton, SIGNAL(clicked()), Dialog, SLOT(accept()));\n"));

    let buddy = out.find("setBuddy").unwrap();
    let tab_order = out.find("setTabOrder").unwrap();
    let retranslate_call = out.find("retranslateUi(Dialog);").unwrap();
    assert!(buddy < tab_order && tab_order < retranslate_call);
}

#[test]
fn combo_box_items_are_retranslated() {
    let out = compile(DIALOG);
    let retranslate = section(&out, "void retranslateUi", "};");
    assert!(retranslate.contains(
        "        comboBox->clear();\n        comboBox->insertItems(0, QStringList()\n         << QApplication::translate(\"Dialog\", \"One\", nullptr)\n         << QApplication::translate(\"Dialog\", \"Two\", nullptr)\n        );\n"
    ));
}

#[test]
fn layout_inside_plain_widget_has_no_margins() {
    let src = r#"<ui version="4.0">
 <class>Form</class>
 <widget class="QWidget" name="Form">
  <layout class="QVBoxLayout" name="verticalLayout">
   <item>
    <widget class="QWidget" name="inner">
     <layout class="QHBoxLayout" name="innerLayout">
      <item><widget class="QCheckBox" name="checkBox"/></item>
     </layout>
    </widget>
   </item>
  </layout>
 </widget>
</ui>"#;
    let out = compile(src);
    assert!(out.contains("        innerLayout = new QHBoxLayout(inner);\n"));
    assert!(out.contains("        innerLayout->setContentsMargins(0, 0, 0, 0);\n"));
    assert!(!out.contains("verticalLayout->setContentsMargins"));
    assert!(out.contains("\n        innerLayout->addWidget(checkBox);\n\n"));
    assert!(out.contains("\n        verticalLayout->addWidget(inner);\n\n"));
}

#[test]
fn layout_defaults_apply_to_layouts() {
    let src = r#"<ui version="4.0">
 <class>Form</class>
 <widget class="QWidget" name="Form">
  <layout class="QVBoxLayout" name="verticalLayout">
   <property name="spacing"><number>4</number></property>
  </layout>
 </widget>
 <layoutdefault spacing="6" margin="11"/>
</ui>"#;
    let out = compile(src);
    assert!(out.contains("        verticalLayout->setSpacing(4);\n"));
    assert!(out.contains("        verticalLayout->setContentsMargins(11, 11, 11, 11);\n"));
}

// ---------------------------------------------------------------------------
// main windows, menus and actions
// ---------------------------------------------------------------------------

const MAIN_WINDOW: &str = r#"<ui version="4.0">
 <class>MainWindow</class>
 <widget class="QMainWindow" name="MainWindow">
  <widget class="QWidget" name="centralwidget"/>
  <widget class="QMenuBar" name="menubar">
   <widget class="QMenu" name="menuFile">
    <property name="title"><string>File</string></property>
    <addaction name="actionOpen"/>
    <addaction name="separator"/>
   </widget>
   <addaction name="menuFile"/>
  </widget>
  <widget class="QStatusBar" name="statusbar"/>
  <action name="actionOpen">
   <property name="text"><string>Open</string></property>
  </action>
 </widget>
</ui>"#;

#[test]
fn main_window_parts() {
    let out = compile(MAIN_WINDOW);
    assert!(out.contains("        MainWindow->setCentralWidget(centralwidget);\n"));
    assert!(out.contains("        MainWindow->setMenuBar(menubar);\n"));
    assert!(out.contains("        MainWindow->setStatusBar(statusbar);\n"));
    assert!(out.contains("        menuFile = new QMenu(menubar);\n"));
    assert!(out.contains("        actionOpen = new QAction(MainWindow);\n"));
}

#[test]
fn actions_are_added_after_creation() {
    let out = compile(MAIN_WINDOW);
    assert!(out.contains("        menubar->addAction(menuFile->menuAction());\n"));
    assert!(out.contains("        menuFile->addAction(actionOpen);\n"));
    assert!(out.contains("        menuFile->addSeparator();\n"));

    let created = out.find("actionOpen = new QAction").unwrap();
    let added = out.find("menuFile->addAction(actionOpen)").unwrap();
    assert!(created < added);

    let class = section(&out, "class Ui_MainWindow", "void setupUi");
    assert!(class.contains("    QAction *actionOpen;\n"));
    assert!(class.contains("    QMenu *menuFile;\n"));
}

#[test]
fn tab_widget_pages() {
    let src = r#"<ui version="4.0">
 <class>Form</class>
 <widget class="QWidget" name="Form">
  <widget class="QTabWidget" name="tabWidget">
   <property name="currentIndex"><number>1</number></property>
   <widget class="QWidget" name="tab">
    <attribute name="title"><string>General</string></attribute>
   </widget>
   <widget class="QWidget" name="tab2">
    <attribute name="title"><string>Advanced</string></attribute>
   </widget>
  </widget>
 </widget>
</ui>"#;
    let out = compile(src);
    assert!(out.contains("        tab = new QWidget();\n"));
    assert!(out.contains("        tabWidget->addTab(tab, QString());\n"));
    assert!(out.contains(
        "        tabWidget->setTabText(tabWidget->indexOf(tab), QApplication::translate(\"Form\", \"General\", nullptr));\n"
    ));

    // the current page can only be selected once all pages exist
    let index = out.find("tabWidget->setCurrentIndex(1);").unwrap();
    let second_page = out.find("tabWidget->addTab(tab2").unwrap();
    assert!(second_page < index);
}

#[test]
fn undeclared_button_group_is_created_on_the_fly() {
    let src = r#"<ui version="4.0">
 <class>Form</class>
 <widget class="QWidget" name="Form">
  <widget class="QRadioButton" name="first">
   <attribute name="buttonGroup"><string>choices</string></attribute>
  </widget>
  <widget class="QRadioButton" name="second">
   <attribute name="buttonGroup"><string>choices</string></attribute>
  </widget>
 </widget>
</ui>"#;
    let out = compile(src);
    assert_eq!(out.matches("QButtonGroup *choices = new QButtonGroup(Form);").count(), 1);
    assert!(out.contains("        choices->addButton(first);\n"));
    assert!(out.contains("        choices->addButton(second);\n"));
}

#[test]
fn declared_button_group_is_a_member() {
    let src = r#"<ui version="4.0">
 <class>Form</class>
 <widget class="QWidget" name="Form">
  <widget class="QCheckBox" name="box">
   <attribute name="buttonGroup"><string>group</string></attribute>
  </widget>
 </widget>
 <buttongroups>
  <buttongroup name="group"/>
 </buttongroups>
</ui>"#;
    let out = compile(src);
    let class = section(&out, "class Ui_Form", "void setupUi");
    assert!(class.contains("    QButtonGroup *group;\n"));
    assert!(out.contains("        group = new QButtonGroup(Form);\n"));
    assert!(out.contains("        group->addButton(box);\n"));
}

#[test]
fn repeated_button_group_declarations_share_one_member() {
    let src = r#"<ui version="4.0">
 <class>Form</class>
 <widget class="QWidget" name="Form"/>
 <buttongroups>
  <buttongroup name="group"/>
  <buttongroup name="group"/>
  <buttongroup/>
  <buttongroup/>
 </buttongroups>
</ui>"#;
    let out = compile(src);
    let class = section(&out, "class Ui_Form", "void setupUi");
    assert_eq!(class.matches("    QButtonGroup *group;\n").count(), 1);
    assert_eq!(class.matches("    QButtonGroup *buttonGroup;\n").count(), 1);
}

// ---------------------------------------------------------------------------
// custom widgets
// ---------------------------------------------------------------------------

#[test]
fn custom_widget_header_and_page_method() {
    let src = r#"<ui version="4.0">
 <class>Form</class>
 <widget class="QWidget" name="Form">
  <widget class="PageStack" name="stack">
   <widget class="QWidget" name="page"/>
  </widget>
  <widget class="Line" name="line">
   <property name="orientation"><enum>Qt::Horizontal</enum></property>
  </widget>
 </widget>
 <customwidgets>
  <customwidget>
   <class>PageStack</class>
   <extends>QWidget</extends>
   <header>widgets/pagestack.h</header>
   <addpagemethod>appendPage</addpagemethod>
   <container>1</container>
  </customwidget>
 </customwidgets>
</ui>"#;
    let out = compile(src);
    assert!(out.contains("#include \"widgets/pagestack.h\"\n"));
    assert!(out.contains("#include <qframe.h>\n"));
    assert!(out.contains("        stack->appendPage(page);\n"));
    assert!(out.contains("        page = new QWidget();\n"));

    assert!(out.contains("    QFrame *line;\n"));
    assert!(out.contains("        line = new QFrame(Form);\n"));
    assert!(out.contains("        line->setFrameShape(QFrame::HLine);\n"));
    assert!(out.contains("        line->setFrameShadow(QFrame::Sunken);\n"));
}

// ---------------------------------------------------------------------------
// embedded images
// ---------------------------------------------------------------------------

const IMAGES: &str = r#"<ui version="4.0">
 <class>Form</class>
 <widget class="QWidget" name="Form">
  <widget class="QPushButton" name="button">
   <property name="icon"><iconset>b</iconset></property>
  </widget>
 </widget>
 <images>
  <image name="a"><data format="PNG" length="2">0102</data></image>
  <image name="b"><data format="PNG" length="2">0304</data></image>
  <image name="c"><data format="PNG" length="2">0506</data></image>
 </images>
</ui>"#;

#[test]
fn icon_enum_and_switch_agree() {
    let out = compile(IMAGES);

    let enumeration = section(&out, "enum IconID", "};");
    let ids: Vec<&str> = enumeration
        .lines()
        .map(str::trim)
        .filter_map(|l| l.strip_suffix(','))
        .collect();
    assert_eq!(ids, ["a_ID", "b_ID", "c_ID"]);
    assert!(enumeration.contains("unknown_ID"));

    let switch = section(&out, "switch (id) {", "} // switch");
    let cases: Vec<&str> = switch
        .lines()
        .filter_map(|l| l.trim().strip_prefix("case "))
        .filter_map(|l| l.split(':').next())
        .collect();
    assert_eq!(cases, ids);
    assert!(switch.contains("default: return QPixmap();"));

    for name in ["a", "b", "c"] {
        assert_eq!(out.matches(&format!("static const unsigned char {name}_data[]")).count(), 1);
    }
}

#[test]
fn icon_property_uses_embedded_image() {
    let out = compile(IMAGES);
    assert!(out.contains("        const QIcon icon = qt_get_icon(b_ID);\n"));
    assert!(out.contains("        button->setIcon(icon);\n"));
}

#[test]
fn form_without_images_has_no_icon_section() {
    let out = compile(PUSH_BUTTON_FORM);
    assert!(!out.contains("IconID"));
    assert!(!out.contains("protected:"));
}
