//! Headers declaring the toolkit classes a form may refer to.

/// Header of a known toolkit class, or `None` if the class is not part of the
/// toolkit (custom widgets, typos).
pub fn header_for(class: &str) -> Option<&'static str> {
    let header = match class {
        "QAbstractButton" => "qabstractbutton.h",
        "QAbstractItemView" => "qabstractitemview.h",
        "QAbstractScrollArea" => "qabstractscrollarea.h",
        "QAbstractSlider" => "qabstractslider.h",
        "QAbstractSpinBox" => "qabstractspinbox.h",
        "QAction" => "qaction.h",
        "QActionGroup" => "qactiongroup.h",
        "QApplication" => "qapplication.h",
        "QBoxLayout" | "QHBoxLayout" | "QVBoxLayout" => "qboxlayout.h",
        "QButtonGroup" => "qbuttongroup.h",
        "QCalendarWidget" => "qcalendarwidget.h",
        "QCheckBox" => "qcheckbox.h",
        "QColumnView" => "qcolumnview.h",
        "QComboBox" => "qcombobox.h",
        "QCommandLinkButton" => "qcommandlinkbutton.h",
        "QDate" | "QDateTime" | "QTime" => "qdatetime.h",
        "QDateEdit" | "QDateTimeEdit" | "QTimeEdit" => "qdatetimeedit.h",
        "QDial" => "qdial.h",
        "QDialog" => "qdialog.h",
        "QDialogButtonBox" => "qdialogbuttonbox.h",
        "QDockWidget" => "qdockwidget.h",
        "QDoubleSpinBox" | "QSpinBox" => "qspinbox.h",
        "QFontComboBox" => "qfontcombobox.h",
        "QFormLayout" => "qformlayout.h",
        "QFrame" => "qframe.h",
        "QGraphicsView" => "qgraphicsview.h",
        "QGridLayout" => "qgridlayout.h",
        "QGroupBox" => "qgroupbox.h",
        "QHeaderView" => "qheaderview.h",
        "QLabel" => "qlabel.h",
        "QLayout" => "qlayout.h",
        "QLCDNumber" => "qlcdnumber.h",
        "QLineEdit" => "qlineedit.h",
        "QListView" => "qlistview.h",
        "QListWidget" | "QListWidgetItem" => "qlistwidget.h",
        "QLocale" => "qlocale.h",
        "QMainWindow" => "qmainwindow.h",
        "QMdiArea" => "qmdiarea.h",
        "QMdiSubWindow" => "qmdisubwindow.h",
        "QMenu" => "qmenu.h",
        "QMenuBar" => "qmenubar.h",
        "QPlainTextEdit" => "qplaintextedit.h",
        "QProgressBar" => "qprogressbar.h",
        "QPushButton" => "qpushbutton.h",
        "QRadioButton" => "qradiobutton.h",
        "QScrollArea" => "qscrollarea.h",
        "QScrollBar" => "qscrollbar.h",
        "QSlider" => "qslider.h",
        "QSpacerItem" => "qlayoutitem.h",
        "QSplitter" => "qsplitter.h",
        "QStackedWidget" => "qstackedwidget.h",
        "QStatusBar" => "qstatusbar.h",
        "QTabWidget" => "qtabwidget.h",
        "QTableView" => "qtableview.h",
        "QTableWidget" | "QTableWidgetItem" => "qtablewidget.h",
        "QTextBrowser" => "qtextbrowser.h",
        "QTextEdit" => "qtextedit.h",
        "QToolBar" => "qtoolbar.h",
        "QToolBox" => "qtoolbox.h",
        "QToolButton" => "qtoolbutton.h",
        "QTreeView" => "qtreeview.h",
        "QTreeWidget" | "QTreeWidgetItem" => "qtreewidget.h",
        "QUndoView" => "qundoview.h",
        "QVariant" => "qvariant.h",
        "QWidget" => "qwidget.h",
        "QWizard" => "qwizard.h",
        "QWizardPage" => "qwizardpage.h",
        _ => return None,
    };
    Some(header)
}
