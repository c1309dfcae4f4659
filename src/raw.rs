use crate::tag::TagType;

/// An undecoded directory entry payload together with the type it declares.
///
/// Typed interpretation is left to whichever accessor reads the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTagValue {
    tag_type: TagType,
    bytes: Box<[u8]>,
}

impl RawTagValue {
    pub fn new(tag_type: TagType, bytes: impl Into<Box<[u8]>>) -> Self {
        Self {
            tag_type,
            bytes: bytes.into(),
        }
    }

    /// ASCII payload with the terminating NUL the file format stores.
    pub fn ascii(text: &str) -> Self {
        let mut bytes = Vec::with_capacity(text.len() + 1);
        bytes.extend_from_slice(text.as_bytes());
        bytes.push(0);
        Self::new(TagType::Ascii, bytes)
    }

    /// Unsigned shorts, little-endian.
    pub fn unsigned_shorts(values: &[u16]) -> Self {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Self::new(TagType::UnsignedShort, bytes)
    }

    pub fn tag_type(&self) -> TagType {
        self.tag_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Number of whole components of the declared type in the payload.
    pub fn component_count(&self) -> usize {
        self.bytes.len() / self.tag_type.component_size()
    }
}
