//! Envelope unboxing for JSON response bodies.
//!
//! Some servers wrap every payload in a single-key object, for example
//! `{"data": {"id": 1}}`. When a call site opts in, [`from_json`] strips
//! exactly one such layer before handing the inner value to serde.
//! The decision is stateless and made once per response; request bodies
//! are never boxed.

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer, IgnoredAny, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// Per-call-site envelope marker.
///
/// `Some(Boxing::Boxed)` and `Some(Boxing::NotBoxed)` come from explicit
/// markers in the service description, operation scope beating service
/// scope. `None` defers to the client-wide default configured on
/// [`ClientOptions`](crate::ClientOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boxing {
    /// The body is a single-key envelope; unwrap it before decoding.
    Boxed,
    /// The body is the payload itself.
    NotBoxed,
}

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decodes a response body, stripping one envelope layer when `boxed`.
///
/// The boxed path insists on a well-formed envelope: a JSON object with
/// exactly one key and nothing trailing after it. A UTF-8 byte-order mark
/// in front of the envelope is tolerated and skipped. The plain path is a
/// verbatim delegation to serde.
pub fn from_json<T: DeserializeOwned>(body: &[u8], boxed: bool) -> Result<T, serde_json::Error> {
    if boxed {
        let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
        serde_json::from_slice::<Unboxed<T>>(body).map(|unboxed| unboxed.0)
    } else {
        serde_json::from_slice(body)
    }
}

/// Wrapper whose `Deserialize` impl peels one single-key object layer.
struct Unboxed<T>(T);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Unboxed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EnvelopeVisitor(PhantomData))
    }
}

struct EnvelopeVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for EnvelopeVisitor<T> {
    type Value = Unboxed<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a JSON object wrapping the payload under exactly one key")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        if map.next_key::<IgnoredAny>()?.is_none() {
            return Err(serde::de::Error::invalid_length(0, &self));
        }
        let value = map.next_value::<T>()?;
        if map.next_key::<IgnoredAny>()?.is_some() {
            return Err(serde::de::Error::custom(
                "expected exactly one key in a boxed response body",
            ));
        }
        Ok(Unboxed(value))
    }
}
