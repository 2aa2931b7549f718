//! The closed wire enumerations: element opcodes and TLV field tags.
//!
//! Both tables are stable.  New element kinds or fields must allocate fresh
//! numbers; retired numbers are never reused, so old readers keep skipping
//! them safely.

/// Wire opcode identifying an element kind.
pub type Opcode = u64;

/// Wire tag identifying a TLV field within an element body.
pub type FieldTag = u64;

/// Element opcodes.
pub mod opcode {
    use super::Opcode;

    /// A run of text.
    pub const TEXT: Opcode = 1;

    /// An image referenced by URL.
    pub const PICTURE: Opcode = 2;

    /// A barcode.
    pub const BARCODE: Opcode = 3;

    /// A page/cut break.
    pub const PAGE_BREAK: Opcode = 4;

    /// A full-width horizontal rule.
    pub const HORIZONTAL_LINE: Opcode = 5;

    /// A side-by-side layout container.
    pub const ROW: Opcode = 6;

    /// A named reference to an external section.
    pub const SECTION_REF: Opcode = 7;

    /// A repeat-for-each directive.
    pub const ITERATOR: Opcode = 8;
}

/// TLV field tags.
pub mod field {
    use super::FieldTag;

    /// Text content.
    pub const TEXT: FieldTag = 1;

    /// Text alignment.
    pub const ALIGN: FieldTag = 2;

    /// Free-form style name.
    pub const STYLE: FieldTag = 3;

    /// Layout weight within a row.
    pub const FLEX: FieldTag = 4;

    /// Image URL.
    pub const IMAGE_URL: FieldTag = 5;

    /// Barcode payload.
    pub const CODE: FieldTag = 6;

    /// Barcode symbology name.
    pub const BARCODE_TYPE: FieldTag = 7;

    /// Section reference name.
    pub const REF: FieldTag = 8;

    /// Iterator data-binding path.
    pub const PATH: FieldTag = 9;

    /// Iterator conditions, as opaque JSON text.
    pub const CONDITIONS: FieldTag = 10;

    /// Nested element list of a row.
    pub const CHILDREN: FieldTag = 11;

    /// Nested element list of an iterator.
    pub const ROWS: FieldTag = 12;
}
