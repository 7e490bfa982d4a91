use serde_json::Value;

use crate::error::Error;

/// Parse commented-JSON text into a value tree.
///
/// Comments (`//` and `/* */`), trailing commas and unquoted keys are
/// tolerated; the result is plain JSON data with key order preserved.
pub fn parse(source: &str) -> Result<Value, Error> {
    Ok(serde_json5::from_str(source)?)
}
