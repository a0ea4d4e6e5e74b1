use alloc::borrow::Cow;

#[doc = r#"
A chunk whose type this crate does not interpret.

Unknown chunks keep their 4-character name and payload exactly as read.
Conversion never inspects or mutates them; it only moves them, preserving
their relative order.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownChunk<'a> {
    name: [u8; 4],
    data: Cow<'a, [u8]>,
}

impl<'a> UnknownChunk<'a> {
    /// Create an unknown chunk from its name and payload.
    pub fn new(name: [u8; 4], data: impl Into<Cow<'a, [u8]>>) -> Self {
        Self {
            name,
            data: data.into(),
        }
    }

    /// The chunk's 4-character type name.
    pub const fn name(&self) -> [u8; 4] {
        self.name
    }

    /// The chunk's payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}
