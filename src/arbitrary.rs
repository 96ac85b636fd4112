use quickcheck::{Arbitrary, Gen};
use serde_json::{Map, Value};

/// A quickcheck wrapper generating arbitrary JSON documents.
///
/// `Arbitrary` can not be implemented for `serde_json::Value` here, both
/// types being foreign.
#[derive(Debug, Clone)]
pub(crate) struct ArbitraryValue(pub(crate) Value);

impl Arbitrary for ArbitraryValue {
    fn arbitrary(g: &mut Gen) -> Self {
        Self(arbitrary_value(g, 2))
    }
}

fn arbitrary_value(g: &mut Gen, depth: usize) -> Value {
    // leaves only at the bottom of the tree
    let variants = if depth == 0 { 4 } else { 6 };
    match u8::arbitrary(g) % variants {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => Value::from(u32::arbitrary(g)),
        3 => Value::String(String::arbitrary(g)),
        4 => Value::Array(
            (0..usize::arbitrary(g) % 4)
                .map(|_| arbitrary_value(g, depth - 1))
                .collect(),
        ),
        _ => {
            let mut members = Map::new();
            for _ in 0..usize::arbitrary(g) % 4 {
                members.insert(String::arbitrary(g), arbitrary_value(g, depth - 1));
            }
            Value::Object(members)
        }
    }
}
