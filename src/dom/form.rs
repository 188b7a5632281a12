use super::*;
use crate::error::{Error, Result};
use crate::xml::{Token, XmlReader, XmlWriter};

dom_element! {
    /// Root of a `.ui` document.
    pub struct DomUI = "ui" {
        attributes {
            attr_version: String = "version",
            attr_language: String = "language",
            attr_displayname: String = "displayname",
            attr_stdsetdef: i32 = "stdsetdef",
            /// Older spelling of `stdsetdef`; both are written as `stdsetdef`.
            attr_std_set_def: i32 = "stdSetDef" => "stdsetdef",
        }
        elements {
            one author: String = "author",
            one comment: String = "comment",
            one exportmacro: String = "exportmacro",
            one class: String = "class",
            child widget: DomWidget = "widget",
            child layoutdefault: DomLayoutDefault = "layoutdefault",
            child layoutfunction: DomLayoutFunction = "layoutfunction",
            one pixmapfunction: String = "pixmapfunction",
            child customwidgets: DomCustomWidgets = "customwidgets",
            child tabstops: DomTabStops = "tabstops",
            child images: DomImages = "images",
            child includes: DomIncludes = "includes",
            child resources: DomResources = "resources",
            child connections: DomConnections = "connections",
            child designerdata: DomDesignerData = "designerdata",
            child slots: DomSlots = "slots",
            child buttongroups: DomButtonGroups = "buttongroups",
        }
    }
}

impl DomUI {
    /// Parses a complete document. The root must be `<ui>`; a bare legacy
    /// `<widget>` root is wrapped into a fresh `DomUI`.
    pub fn from_xml(src: &str) -> Result<DomUI> {
        let mut reader = XmlReader::new(src);
        loop {
            match reader.next_token()? {
                Token::Start(start) => {
                    let tag = reader.tag_name(&start);
                    match tag.as_str() {
                        "ui" => {
                            let mut ui = DomUI::default();
                            ui.read(&mut reader, &start)?;
                            ui.check_header()?;
                            return Ok(ui);
                        }
                        "widget" => {
                            let mut widget = DomWidget::default();
                            widget.read(&mut reader, &start)?;
                            tracing::debug!(class = widget.class_name(), "wrapping legacy widget root");
                            return Ok(DomUI {
                                class: widget.attr_name.clone(),
                                widget: Some(Box::new(widget)),
                                ..Default::default()
                            });
                        }
                        _ => return Err(reader.unexpected_root(&tag)),
                    }
                }
                Token::Text(txt) if crate::xml::is_blank(&txt) => {}
                Token::Text(_) | Token::End => return Err(reader.unexpected_root("#text")),
                Token::Eof => return Err(reader.premature_eof()),
            }
        }
    }

    pub fn to_xml(&self) -> Result<String> {
        let mut writer = XmlWriter::new(Vec::new());
        writer.declaration()?;
        self.write(&mut writer, "")?;
        let out = writer.into_inner()?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    fn check_header(&self) -> Result<()> {
        if let Some(version) = &self.attr_version {
            let major = version.split('.').next().unwrap_or_default();
            if major.trim().parse::<u32>().map_or(false, |v| v < 4) {
                return Err(Error::TooOldVersion(version.clone()));
            }
        }
        if let Some(language) = &self.attr_language {
            if !language.is_empty() && !language.eq_ignore_ascii_case("c++") {
                return Err(Error::UnsupportedLanguage(language.clone()));
            }
        }
        Ok(())
    }

    /// The form-wide default for `stdset`, from either spelling of the attribute.
    pub fn stdsetdef(&self) -> bool {
        self.attr_stdsetdef.or(self.attr_std_set_def).map_or(true, |v| v != 0)
    }

    pub fn class_name(&self) -> &str {
        self.class.as_deref().unwrap_or_default()
    }
}

dom_element! {
    pub struct DomIncludes = "includes" {
        attributes {}
        elements {
            many include: DomInclude = "include",
        }
    }
}

dom_element! {
    /// Extra header; the path is `text`.
    pub struct DomInclude = "include" {
        attributes {
            attr_location: String = "location",
            attr_impldecl: String = "impldecl",
        }
        elements {}
    }
}

dom_element! {
    pub struct DomResources = "resources" {
        attributes {
            attr_name: String = "name",
        }
        elements {
            many include: DomResource = "include",
        }
    }
}

dom_element! {
    pub struct DomResource = "resource" {
        attributes {
            attr_location: String = "location",
        }
        elements {}
    }
}

dom_element! {
    pub struct DomLayoutDefault = "layoutdefault" {
        attributes {
            attr_spacing: i32 = "spacing",
            attr_margin: i32 = "margin",
        }
        elements {}
    }
}

dom_element! {
    /// Names of functions returning the default spacing and margin.
    pub struct DomLayoutFunction = "layoutfunction" {
        attributes {
            attr_spacing: String = "spacing",
            attr_margin: String = "margin",
        }
        elements {}
    }
}

dom_element! {
    pub struct DomTabStops = "tabstops" {
        attributes {}
        elements {
            many tabstop: String = "tabstop",
        }
    }
}

dom_element! {
    pub struct DomCustomWidgets = "customwidgets" {
        attributes {}
        elements {
            many customwidget: DomCustomWidget = "customwidget",
        }
    }
}

dom_element! {
    pub struct DomHeader = "header" {
        attributes {
            attr_location: String = "location",
        }
        elements {}
    }
}

dom_element! {
    pub struct DomCustomWidget = "customwidget" {
        attributes {}
        elements {
            one class: String = "class",
            one extends: String = "extends",
            child header: DomHeader = "header",
            child sizehint: DomSize = "sizehint",
            one addpagemethod: String = "addpagemethod",
            one container: i32 = "container",
            child sizepolicy: DomSizePolicyData = "sizepolicy",
            one pixmap: String = "pixmap",
            child script: DomScript = "script",
            child properties: DomProperties = "properties",
            child slots: DomSlots = "slots",
            child propertyspecifications: DomPropertySpecifications = "propertyspecifications",
        }
    }
}

impl DomCustomWidget {
    pub fn class_name(&self) -> &str {
        self.class.as_deref().unwrap_or_default()
    }
}

dom_element! {
    pub struct DomProperties = "properties" {
        attributes {}
        elements {
            many property: DomPropertyData = "property",
        }
    }
}

dom_element! {
    pub struct DomPropertyData = "propertydata" {
        attributes {
            attr_type: String = "type",
        }
        elements {}
    }
}

dom_element! {
    pub struct DomSizePolicyData = "sizepolicydata" {
        attributes {}
        elements {
            one hordata: i32 = "hordata",
            one verdata: i32 = "verdata",
        }
    }
}

dom_element! {
    pub struct DomPropertySpecifications = "propertyspecifications" {
        attributes {}
        elements {
            many stringpropertyspecification: DomStringPropertySpecification = "stringpropertyspecification",
        }
    }
}

dom_element! {
    pub struct DomStringPropertySpecification = "stringpropertyspecification" {
        attributes {
            attr_name: String = "name",
            attr_type: String = "type",
            attr_notr: String = "notr",
        }
        elements {}
    }
}

dom_element! {
    pub struct DomDesignerData = "designerdata" {
        attributes {}
        elements {
            many property: DomProperty = "property",
        }
    }
}

dom_element! {
    pub struct DomSlots = "slots" {
        attributes {}
        elements {
            many signal: String = "signal",
            many slot: String = "slot",
        }
    }
}
