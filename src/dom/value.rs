//! Typed property payloads: geometry, dates, strings and resource references.

dom_element! {
    pub struct DomPoint = "point" {
        attributes {}
        elements {
            one x: i32 = "x",
            one y: i32 = "y",
        }
    }
}

dom_element! {
    pub struct DomRect = "rect" {
        attributes {}
        elements {
            one x: i32 = "x",
            one y: i32 = "y",
            one width: i32 = "width",
            one height: i32 = "height",
        }
    }
}

dom_element! {
    pub struct DomLocale = "locale" {
        attributes {
            attr_language: String = "language",
            attr_country: String = "country",
        }
        elements {}
    }
}

dom_element! {
    /// Size policy, either as legacy numeric elements or as enum-name attributes.
    pub struct DomSizePolicy = "sizepolicy" {
        attributes {
            attr_hsizetype: String = "hsizetype",
            attr_vsizetype: String = "vsizetype",
        }
        elements {
            one hsizetype: i32 = "hsizetype",
            one vsizetype: i32 = "vsizetype",
            one horstretch: i32 = "horstretch",
            one verstretch: i32 = "verstretch",
        }
    }
}

dom_element! {
    pub struct DomSize = "size" {
        attributes {}
        elements {
            one width: i32 = "width",
            one height: i32 = "height",
        }
    }
}

dom_element! {
    pub struct DomDate = "date" {
        attributes {}
        elements {
            one year: i32 = "year",
            one month: i32 = "month",
            one day: i32 = "day",
        }
    }
}

dom_element! {
    pub struct DomTime = "time" {
        attributes {}
        elements {
            one hour: i32 = "hour",
            one minute: i32 = "minute",
            one second: i32 = "second",
        }
    }
}

dom_element! {
    pub struct DomDateTime = "datetime" {
        attributes {}
        elements {
            one hour: i32 = "hour",
            one minute: i32 = "minute",
            one second: i32 = "second",
            one year: i32 = "year",
            one month: i32 = "month",
            one day: i32 = "day",
        }
    }
}

dom_element! {
    pub struct DomStringList = "stringlist" {
        attributes {
            attr_notr: String = "notr",
            attr_comment: String = "comment",
            attr_extracomment: String = "extracomment",
        }
        elements {
            many string: String = "string",
        }
    }
}

dom_element! {
    /// Pixmap reference; `text` holds the file or resource path.
    pub struct DomResourcePixmap = "resourcepixmap" {
        attributes {
            attr_resource: String = "resource",
            attr_alias: String = "alias",
        }
        elements {}
    }
}

dom_element! {
    /// Icon with optional per-state pixmaps. Legacy files keep the path in `text`.
    pub struct DomResourceIcon = "resourceicon" {
        attributes {
            attr_theme: String = "theme",
            attr_resource: String = "resource",
        }
        elements {
            child normaloff: DomResourcePixmap = "normaloff",
            child normalon: DomResourcePixmap = "normalon",
            child disabledoff: DomResourcePixmap = "disabledoff",
            child disabledon: DomResourcePixmap = "disabledon",
            child activeoff: DomResourcePixmap = "activeoff",
            child activeon: DomResourcePixmap = "activeon",
            child selectedoff: DomResourcePixmap = "selectedoff",
            child selectedon: DomResourcePixmap = "selectedon",
        }
    }
}

impl DomResourceIcon {
    pub fn has_state_pixmaps(&self) -> bool {
        self.normaloff.is_some()
            || self.normalon.is_some()
            || self.disabledoff.is_some()
            || self.disabledon.is_some()
            || self.activeoff.is_some()
            || self.activeon.is_some()
            || self.selectedoff.is_some()
            || self.selectedon.is_some()
    }
}

dom_element! {
    /// Possibly translatable string; the value is `text`.
    pub struct DomString = "string" {
        attributes {
            attr_notr: String = "notr",
            attr_comment: String = "comment",
            attr_extracomment: String = "extracomment",
        }
        elements {}
    }
}

impl DomString {
    pub fn new(text: impl Into<String>) -> Self {
        DomString { text: text.into(), ..Default::default() }
    }
}

dom_element! {
    pub struct DomPointF = "pointf" {
        attributes {}
        elements {
            one x: f64 = "x",
            one y: f64 = "y",
        }
    }
}

dom_element! {
    pub struct DomRectF = "rectf" {
        attributes {}
        elements {
            one x: f64 = "x",
            one y: f64 = "y",
            one width: f64 = "width",
            one height: f64 = "height",
        }
    }
}

dom_element! {
    pub struct DomSizeF = "sizef" {
        attributes {}
        elements {
            one width: f64 = "width",
            one height: f64 = "height",
        }
    }
}

dom_element! {
    pub struct DomChar = "char" {
        attributes {}
        elements {
            one unicode: i32 = "unicode",
        }
    }
}

dom_element! {
    pub struct DomUrl = "url" {
        attributes {}
        elements {
            child string: DomString = "string",
        }
    }
}
