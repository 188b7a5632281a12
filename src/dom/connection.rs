dom_element! {
    pub struct DomConnections = "connections" {
        attributes {}
        elements {
            many connection: DomConnection = "connection",
        }
    }
}

dom_element! {
    pub struct DomConnection = "connection" {
        attributes {}
        elements {
            one sender: String = "sender",
            one signal: String = "signal",
            one receiver: String = "receiver",
            one slot: String = "slot",
            child hints: DomConnectionHints = "hints",
        }
    }
}

dom_element! {
    pub struct DomConnectionHints = "connectionhints" {
        attributes {}
        elements {
            many hint: DomConnectionHint = "hint",
        }
    }
}

dom_element! {
    /// Position of a connection end point in the form editor.
    pub struct DomConnectionHint = "connectionhint" {
        attributes {
            attr_type: String = "type",
        }
        elements {
            one x: i32 = "x",
            one y: i32 = "y",
        }
    }
}
