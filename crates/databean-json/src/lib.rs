//! Ordered JSON value tree with RFC 7493 extended types.
//!
//! JSON itself knows only null, booleans, numbers, strings, arrays and
//! objects. Business data also carries timestamps, binary blobs and enum
//! members, so this crate models a *restricted extension* of the JSON value
//! universe: [`Value`] adds `Bytes`, `Instant` and `Enum` variants which have
//! no native JSON representation and always cross the wire as strings
//! (URL-safe unpadded base64, ISO-8601 UTC with millisecond precision, and
//! the exact enum member name).
//!
//! [`JsonObject`] is an insertion-ordered map, [`JsonArray`] an ordered
//! sequence. Structural equality coerces across representations (integer vs
//! float for the same logical number, rich extended value vs its wire text)
//! so a tree compares equal to its encode/decode round trip.

pub mod array;
pub mod codec;
pub mod error;
pub mod object;
pub mod value;

pub use array::JsonArray;
pub use error::JsonError;
pub use object::JsonObject;
pub use value::Value;
