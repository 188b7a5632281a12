use super::*;

dom_union! {
    /// Named property of a widget, layout, action or item.
    ///
    /// `stdset` overrides the form-wide `stdsetdef`: when zero, generated code goes
    /// through the dynamic `setProperty` call instead of a setter.
    pub struct DomProperty = "property" {
        attributes {
            attr_name: String = "name",
            attr_stdset: i32 = "stdset",
        }
        pub enum PropertyValue / PropertyKind {
            Bool(one String) = "bool",
            Color(child DomColor) = "color",
            Cstring(one String) = "cstring",
            Cursor(one i32) = "cursor",
            CursorShape(one String) = "cursorshape" => "cursorShape",
            Enum(one String) = "enum",
            Font(child DomFont) = "font",
            IconSet(child DomResourceIcon) = "iconset",
            Pixmap(child DomResourcePixmap) = "pixmap",
            Palette(child DomPalette) = "palette",
            Point(child DomPoint) = "point",
            Rect(child DomRect) = "rect",
            Set(one String) = "set",
            Locale(child DomLocale) = "locale",
            SizePolicy(child DomSizePolicy) = "sizepolicy",
            Size(child DomSize) = "size",
            String(child DomString) = "string",
            StringList(child DomStringList) = "stringlist",
            Number(one i32) = "number",
            Float(one f32) = "float",
            Double(one f64) = "double",
            Date(child DomDate) = "date",
            Time(child DomTime) = "time",
            DateTime(child DomDateTime) = "datetime",
            PointF(child DomPointF) = "pointf",
            RectF(child DomRectF) = "rectf",
            SizeF(child DomSizeF) = "sizef",
            LongLong(one i64) = "longlong" => "longLong",
            Char(child DomChar) = "char",
            Url(child DomUrl) = "url",
            UInt(one u32) = "uint" => "UInt",
            ULongLong(one u64) = "ulonglong" => "uLongLong",
            Brush(child DomBrush) = "brush",
        }
    }
}

impl DomProperty {
    pub fn new(name: impl Into<String>) -> Self {
        DomProperty { attr_name: Some(name.into()), ..Default::default() }
    }

    pub fn name(&self) -> &str {
        self.attr_name.as_deref().unwrap_or_default()
    }
}
