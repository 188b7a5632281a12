dom_element! {
    pub struct DomImages = "images" {
        attributes {}
        elements {
            many image: DomImage = "image",
        }
    }
}

dom_element! {
    /// Image embedded in the form.
    pub struct DomImage = "image" {
        attributes {
            attr_name: String = "name",
        }
        elements {
            child data: DomImageData = "data",
        }
    }
}

impl DomImage {
    pub fn name(&self) -> &str {
        self.attr_name.as_deref().unwrap_or_default()
    }

    /// Image format as declared on the data element, e.g. `PNG` or `XPM.GZ`.
    pub fn format(&self) -> &str {
        self.data.as_ref().and_then(|d| d.attr_format.as_deref()).unwrap_or_default()
    }

    /// Lower-cased file extension derived from the format (`XPM.GZ` gives `xpm`).
    pub fn extension(&self) -> String {
        let format = self.format();
        format.split('.').next().unwrap_or_default().to_lowercase()
    }

    pub fn is_xpm_gz(&self) -> bool {
        self.format() == "XPM.GZ"
    }

    /// Hex payload decoded to bytes.
    pub fn bytes(&self) -> Vec<u8> {
        self.data.as_ref().map(|d| crate::utils::decode_hex(&d.text)).unwrap_or_default()
    }
}

dom_element! {
    /// Hex encoded image bytes in `text`.
    pub struct DomImageData = "imagedata" {
        attributes {
            attr_format: String = "format",
            attr_length: i32 = "length",
        }
        elements {}
    }
}
