//! The receipt element tree model.

use crate::tags::{Opcode, opcode};

/// Horizontal alignment of a text element within its slot.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Align {
    /// Flush left.  This is the default when nothing is specified.
    #[default]
    Left,

    /// Centered.
    Center,

    /// Flush right.
    Right,

    /// Stretched across the full slot width.
    Justify,
}

impl Align {
    /// Returns the wire spelling of this alignment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
            Align::Justify => "justify",
        }
    }

    /// Parses a wire spelling.
    ///
    /// Anything unrecognized, including the empty string that a missing field
    /// decodes to, falls back to [`Align::Left`].
    pub fn from_wire(s: &str) -> Self {
        match s {
            "center" => Align::Center,
            "right" => Align::Right,
            "justify" => Align::Justify,
            _ => Align::Left,
        }
    }
}

/// One node in the printable receipt tree.
///
/// The tree is strict (no cycles); [`ReceiptElement::Row`] children and
/// [`ReceiptElement::Iterator`] rows may nest any variant to unbounded depth.
///
/// `flex` mirrors flexbox flex-grow: an optional non-negative weight a
/// renderer uses to size elements inside a row.  `None` means "not
/// specified", which is distinct from zero.  Page breaks and horizontal
/// lines carry no fields at all on the wire, so they are unit variants here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReceiptElement {
    /// A run of text.
    Text {
        /// The text content, preserved byte-exact.
        text: String,
        /// Horizontal alignment.
        align: Align,
        /// Optional free-form style name interpreted by the renderer.
        style: Option<String>,
        /// Optional layout weight.
        flex: Option<u32>,
    },

    /// An image fetched by URL at render time.
    Picture {
        /// Where the renderer finds the image.
        url: String,
        /// Optional layout weight.
        flex: Option<u32>,
    },

    /// A barcode of some symbology (code39, qrcode, pdf417, ...).
    Barcode {
        /// The payload to encode into the barcode.
        code: String,
        /// The symbology name.  Opaque to the codec.
        barcode_type: String,
        /// Optional layout weight.
        flex: Option<u32>,
    },

    /// Forces a page/cut break.
    PageBreak,

    /// A full-width horizontal rule.
    HorizontalLine,

    /// Children rendered side by side.
    Row {
        /// The contained elements, in layout order.
        children: Vec<ReceiptElement>,
        /// Optional layout weight.
        flex: Option<u32>,
    },

    /// A named pointer to an external section, resolved by a collaborator.
    SectionRef {
        /// The section name.
        reference: String,
        /// Optional layout weight.
        flex: Option<u32>,
    },

    /// A repeat-for-each directive over external data bound by `path`.
    Iterator {
        /// The data-binding path the renderer iterates over.
        path: String,
        /// The template rows stamped out per iteration.
        rows: Vec<ReceiptElement>,
        /// Optional filter conditions as pre-serialized JSON text.  Stored
        /// and returned verbatim, never interpreted by the codec.
        conditions: Option<String>,
        /// Optional layout weight.
        flex: Option<u32>,
    },
}

impl ReceiptElement {
    /// Returns the wire opcode for this element kind.
    pub fn opcode(&self) -> Opcode {
        match self {
            ReceiptElement::Text { .. } => opcode::TEXT,
            ReceiptElement::Picture { .. } => opcode::PICTURE,
            ReceiptElement::Barcode { .. } => opcode::BARCODE,
            ReceiptElement::PageBreak => opcode::PAGE_BREAK,
            ReceiptElement::HorizontalLine => opcode::HORIZONTAL_LINE,
            ReceiptElement::Row { .. } => opcode::ROW,
            ReceiptElement::SectionRef { .. } => opcode::SECTION_REF,
            ReceiptElement::Iterator { .. } => opcode::ITERATOR,
        }
    }

    /// Returns the layout weight, if one was specified.
    pub fn flex(&self) -> Option<u32> {
        match self {
            ReceiptElement::Text { flex, .. }
            | ReceiptElement::Picture { flex, .. }
            | ReceiptElement::Barcode { flex, .. }
            | ReceiptElement::Row { flex, .. }
            | ReceiptElement::SectionRef { flex, .. }
            | ReceiptElement::Iterator { flex, .. } => *flex,
            ReceiptElement::PageBreak | ReceiptElement::HorizontalLine => None,
        }
    }
}
