use alloc::string::{String, ToString};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

use crate::{Error, Uint32Carry};

/// Name-tagged generator state.
///
/// `bit_generator` identifies the family, `state` carries the family's own
/// fields and the two carry fields mirror the 32-bit draw cache.  With the
/// `serde1` feature the record serializes to the tagged-dictionary shape
/// used for persistence; round trips are exact.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
pub struct StateRecord<S> {
    /// Family tag, e.g. `"MT19937"` or `"PCG64"`.
    pub bit_generator: String,
    /// Family-specific fields.
    pub state: S,
    /// Whether a 32-bit word is parked in the carry.
    pub has_uint32: bool,
    /// The parked word.
    pub uinteger: u32,
}

impl<S> StateRecord<S> {
    /// Assemble a record for `tag` from a state payload and the carry.
    pub fn new(tag: &'static str, state: S, carry: Uint32Carry) -> Self {
        let (has_uint32, uinteger) = carry.to_fields();
        Self { bit_generator: tag.to_string(), state, has_uint32, uinteger }
    }

    /// Validate the tag against the receiving family.
    ///
    /// # Errors
    ///
    /// [`Error::WrongFamily`] when the tags differ.
    pub fn expect_tag(&self, tag: &'static str) -> Result<(), Error> {
        if self.bit_generator == tag {
            Ok(())
        } else {
            Err(Error::WrongFamily { expected: tag })
        }
    }

    /// The carry encoded in this record.
    pub fn carry(&self) -> Uint32Carry {
        Uint32Carry::from_fields(self.has_uint32, self.uinteger)
    }
}
