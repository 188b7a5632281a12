use super::DomProperty;

dom_element! {
    pub struct DomColor = "color" {
        attributes {
            attr_alpha: i32 = "alpha",
        }
        elements {
            one red: i32 = "red",
            one green: i32 = "green",
            one blue: i32 = "blue",
        }
    }
}

impl DomColor {
    pub fn rgb(red: i32, green: i32, blue: i32) -> Self {
        DomColor { red: Some(red), green: Some(green), blue: Some(blue), ..Default::default() }
    }
}

dom_element! {
    pub struct DomGradientStop = "gradientstop" {
        attributes {
            attr_position: f64 = "position",
        }
        elements {
            child color: DomColor = "color",
        }
    }
}

dom_element! {
    pub struct DomGradient = "gradient" {
        attributes {
            attr_startx: f64 = "startx",
            attr_starty: f64 = "starty",
            attr_endx: f64 = "endx",
            attr_endy: f64 = "endy",
            attr_centralx: f64 = "centralx",
            attr_centraly: f64 = "centraly",
            attr_focalx: f64 = "focalx",
            attr_focaly: f64 = "focaly",
            attr_radius: f64 = "radius",
            attr_angle: f64 = "angle",
            attr_type: String = "type",
            attr_spread: String = "spread",
            attr_coordinatemode: String = "coordinatemode",
        }
        elements {
            many gradientstop: DomGradientStop = "gradientstop",
        }
    }
}

dom_union! {
    /// Brush filled by a solid color, a texture or a gradient.
    pub struct DomBrush = "brush" {
        attributes {
            attr_brushstyle: String = "brushstyle",
        }
        pub enum BrushValue / BrushKind {
            Color(child DomColor) = "color",
            Texture(child DomProperty) = "texture",
            Gradient(child DomGradient) = "gradient",
        }
    }
}

dom_element! {
    pub struct DomColorRole = "colorrole" {
        attributes {
            attr_role: String = "role",
        }
        elements {
            child brush: DomBrush = "brush",
        }
    }
}

dom_element! {
    /// Palette group; `color` is the legacy positional format, `colorrole` the
    /// named one.
    pub struct DomColorGroup = "colorgroup" {
        attributes {}
        elements {
            many colorrole: DomColorRole = "colorrole",
            many color: DomColor = "color",
        }
    }
}

dom_element! {
    pub struct DomPalette = "palette" {
        attributes {}
        elements {
            child active: DomColorGroup = "active",
            child inactive: DomColorGroup = "inactive",
            child disabled: DomColorGroup = "disabled",
        }
    }
}

dom_element! {
    pub struct DomFont = "font" {
        attributes {}
        elements {
            one family: String = "family",
            one pointsize: i32 = "pointsize",
            one weight: i32 = "weight",
            one italic: bool = "italic",
            one bold: bool = "bold",
            one underline: bool = "underline",
            one strikeout: bool = "strikeout",
            one antialiasing: bool = "antialiasing",
            one stylestrategy: String = "stylestrategy",
            one kerning: bool = "kerning",
        }
    }
}
