// Generators for Dom node types.
//
// `dom_element!` declares a plain node: optional attributes, then child elements in
// canonical write order. Each child line reads `<cardinality> field: Type = "tag"`:
//
//   one   - at most one scalar/text child, stored as `Option<T>`
//   child - at most one Dom node child, stored as `Option<Box<T>>`
//   many  - repeated children, stored as `Vec<T>`
//
// `=> "Tag"` after a tag overrides the name used on write (reading is always
// case-insensitive for element tags).
//
// `dom_union!` declares a node holding exactly one payload out of a closed set.

macro_rules! dom_element {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $tag:literal {
            attributes {
                $( $(#[$ameta:meta])* $attr:ident : $aty:ty = $aname:literal $(=> $awrite:literal)? ),* $(,)?
            }
            elements {
                $( $(#[$fmeta:meta])* $card:ident $field:ident : $fty:ty = $fname:literal $(=> $fwrite:literal)? ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $( $(#[$ameta])* pub $attr: Option<$aty>, )*
            $( $(#[$fmeta])* pub $field: dom_element!(@slot $card $fty), )*
            pub text: String,
        }

        impl $crate::dom::DomNode for $name {
            const TAG: &'static str = $tag;

            fn read(
                &mut self,
                reader: &mut $crate::xml::XmlReader<'_>,
                start: &quick_xml::events::BytesStart<'_>,
            ) -> $crate::Result<()> {
                for (key, value) in reader.attributes(start)? {
                    match (key.as_str(), value) {
                        $( ($aname, value) => {
                            self.$attr = Some(<$aty as $crate::dom::Value>::parse_value(&value));
                        } )*
                        (other, _) => return Err(reader.unexpected_attribute($tag, other)),
                    }
                }
                loop {
                    match reader.next_token()? {
                        $crate::xml::Token::Start(child) => {
                            let tag = reader.tag_name(&child);
                            match tag.as_str() {
                                $( $fname => dom_element!(@read $card self.$field, $fty, reader, child), )*
                                _ => return Err(reader.unexpected_element($tag, &tag)),
                            }
                        }
                        $crate::xml::Token::End => return Ok(()),
                        $crate::xml::Token::Text(txt) => {
                            if !$crate::xml::is_blank(&txt) {
                                self.text.push_str(&txt);
                            }
                        }
                        $crate::xml::Token::Eof => return Err(reader.premature_eof()),
                    }
                }
            }

            fn write<W: std::io::Write>(
                &self,
                writer: &mut $crate::xml::XmlWriter<W>,
                tag: &str,
            ) -> $crate::Result<()> {
                let tag = if tag.is_empty() { $tag.to_owned() } else { tag.to_lowercase() };
                writer.start_element(&tag)?;
                $(
                    if let Some(v) = &self.$attr {
                        writer.attribute(
                            dom_element!(@name $aname $(, $awrite)?),
                            &$crate::dom::Value::format_value(v),
                        );
                    }
                )*
                $( dom_element!(@write $card self.$field, writer, dom_element!(@name $fname $(, $fwrite)?)); )*
                if !self.text.is_empty() {
                    writer.text(&self.text)?;
                }
                writer.end_element()
            }

            fn clear(&mut self, clear_all: bool) {
                $( self.$field = Default::default(); )*
                if clear_all {
                    $( self.$attr = None; )*
                    self.text.clear();
                }
            }

            fn text(&self) -> &str {
                &self.text
            }
        }

        impl $crate::dom::Element for $name {
            fn read_element(
                reader: &mut $crate::xml::XmlReader<'_>,
                start: &quick_xml::events::BytesStart<'_>,
            ) -> $crate::Result<Self> {
                let mut node = Self::default();
                $crate::dom::DomNode::read(&mut node, reader, start)?;
                Ok(node)
            }

            fn write_element<W: std::io::Write>(
                &self,
                writer: &mut $crate::xml::XmlWriter<W>,
                tag: &str,
            ) -> $crate::Result<()> {
                $crate::dom::DomNode::write(self, writer, tag)
            }
        }
    };

    (@slot one $ty:ty) => { Option<$ty> };
    (@slot child $ty:ty) => { Option<Box<$ty>> };
    (@slot many $ty:ty) => { Vec<$ty> };

    (@read one $slot:expr, $ty:ty, $reader:ident, $start:ident) => {
        $slot = Some(<$ty as $crate::dom::Element>::read_element($reader, &$start)?)
    };
    (@read child $slot:expr, $ty:ty, $reader:ident, $start:ident) => {
        $slot = Some(Box::new(<$ty as $crate::dom::Element>::read_element($reader, &$start)?))
    };
    (@read many $slot:expr, $ty:ty, $reader:ident, $start:ident) => {
        $slot.push(<$ty as $crate::dom::Element>::read_element($reader, &$start)?)
    };

    (@write one $slot:expr, $writer:ident, $tag:expr) => {
        if let Some(v) = &$slot {
            $crate::dom::Element::write_element(v, $writer, $tag)?;
        }
    };
    (@write child $slot:expr, $writer:ident, $tag:expr) => {
        if let Some(v) = &$slot {
            $crate::dom::Element::write_element(&**v, $writer, $tag)?;
        }
    };
    (@write many $slot:expr, $writer:ident, $tag:expr) => {
        for v in &$slot {
            $crate::dom::Element::write_element(v, $writer, $tag)?;
        }
    };

    (@name $name:literal) => { $name };
    (@name $name:literal, $write:literal) => { $write };
}

macro_rules! dom_union {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $tag:literal {
            attributes {
                $( $attr:ident : $aty:ty = $aname:literal ),* $(,)?
            }
            pub enum $value:ident / $kind:ident {
                $( $variant:ident($card:ident $vty:ty) = $vname:literal $(=> $vwrite:literal)? ),* $(,)?
            }
        }
    ) => {
        /// Discriminant of the payload held by the node.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $kind {
            #[default]
            Unknown,
            $( $variant, )*
        }

        #[derive(Debug, Clone, Default, PartialEq)]
        pub enum $value {
            #[default]
            Unknown,
            $( $variant(dom_union!(@payload $card $vty)), )*
        }

        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $( pub $attr: Option<$aty>, )*
            pub value: $value,
            pub text: String,
        }

        impl $name {
            pub fn kind(&self) -> $kind {
                match &self.value {
                    $value::Unknown => $kind::Unknown,
                    $( $value::$variant(_) => $kind::$variant, )*
                }
            }

            paste::paste! {
                $(
                    pub fn [<element_ $variant:snake>](&self) -> Option<&$vty> {
                        match &self.value {
                            $value::$variant(v) => Some(dom_union!(@get $card v)),
                            _ => None,
                        }
                    }

                    pub fn [<has_element_ $variant:snake>](&self) -> bool {
                        matches!(self.value, $value::$variant(_))
                    }

                    /// Replaces whatever payload is held by this one.
                    pub fn [<set_element_ $variant:snake>](&mut self, v: $vty) {
                        $crate::dom::DomNode::clear(self, false);
                        self.value = $value::$variant(dom_union!(@wrap $card v));
                    }

                    /// Moves the payload out if it is of this kind, leaving the node empty.
                    pub fn [<take_element_ $variant:snake>](&mut self) -> Option<$vty> {
                        match std::mem::take(&mut self.value) {
                            $value::$variant(v) => Some(dom_union!(@unwrap $card v)),
                            other => {
                                self.value = other;
                                None
                            }
                        }
                    }
                )*
            }
        }

        impl $crate::dom::DomNode for $name {
            const TAG: &'static str = $tag;

            fn read(
                &mut self,
                reader: &mut $crate::xml::XmlReader<'_>,
                start: &quick_xml::events::BytesStart<'_>,
            ) -> $crate::Result<()> {
                for (key, value) in reader.attributes(start)? {
                    match (key.as_str(), value) {
                        $( ($aname, value) => {
                            self.$attr = Some(<$aty as $crate::dom::Value>::parse_value(&value));
                        } )*
                        (other, _) => return Err(reader.unexpected_attribute($tag, other)),
                    }
                }
                loop {
                    match reader.next_token()? {
                        $crate::xml::Token::Start(child) => {
                            let tag = reader.tag_name(&child);
                            match tag.as_str() {
                                $( $vname => {
                                    let v = <$vty as $crate::dom::Element>::read_element(reader, &child)?;
                                    self.value = $value::$variant(dom_union!(@wrap $card v));
                                } )*
                                _ => return Err(reader.unexpected_element($tag, &tag)),
                            }
                        }
                        $crate::xml::Token::End => return Ok(()),
                        $crate::xml::Token::Text(txt) => {
                            if !$crate::xml::is_blank(&txt) {
                                self.text.push_str(&txt);
                            }
                        }
                        $crate::xml::Token::Eof => return Err(reader.premature_eof()),
                    }
                }
            }

            fn write<W: std::io::Write>(
                &self,
                writer: &mut $crate::xml::XmlWriter<W>,
                tag: &str,
            ) -> $crate::Result<()> {
                let tag = if tag.is_empty() { $tag.to_owned() } else { tag.to_lowercase() };
                writer.start_element(&tag)?;
                $(
                    if let Some(v) = &self.$attr {
                        writer.attribute($aname, &$crate::dom::Value::format_value(v));
                    }
                )*
                match &self.value {
                    $value::Unknown => {}
                    $( $value::$variant(v) => $crate::dom::Element::write_element(
                        dom_union!(@get $card v),
                        writer,
                        dom_element!(@name $vname $(, $vwrite)?),
                    )?, )*
                }
                if !self.text.is_empty() {
                    writer.text(&self.text)?;
                }
                writer.end_element()
            }

            fn clear(&mut self, clear_all: bool) {
                self.value = $value::Unknown;
                if clear_all {
                    $( self.$attr = None; )*
                    self.text.clear();
                }
            }

            fn text(&self) -> &str {
                &self.text
            }
        }

        impl $crate::dom::Element for $name {
            fn read_element(
                reader: &mut $crate::xml::XmlReader<'_>,
                start: &quick_xml::events::BytesStart<'_>,
            ) -> $crate::Result<Self> {
                let mut node = Self::default();
                $crate::dom::DomNode::read(&mut node, reader, start)?;
                Ok(node)
            }

            fn write_element<W: std::io::Write>(
                &self,
                writer: &mut $crate::xml::XmlWriter<W>,
                tag: &str,
            ) -> $crate::Result<()> {
                $crate::dom::DomNode::write(self, writer, tag)
            }
        }
    };

    (@payload one $ty:ty) => { $ty };
    (@payload child $ty:ty) => { Box<$ty> };

    (@get one $v:ident) => { $v };
    (@get child $v:ident) => { &**$v };

    (@wrap one $v:ident) => { $v };
    (@wrap child $v:ident) => { Box::new($v) };

    (@unwrap one $v:ident) => { $v };
    (@unwrap child $v:ident) => { *$v };
}
