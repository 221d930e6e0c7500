use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// What a response body was given as.
///
/// Text is stored verbatim; anything structured is stored as its compact
/// JSON text.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Body {
    Text(String),
    Json(Value),
    /// No body argument at all. Renders as the literal `undefined`.
    #[default]
    Undefined,
}

impl Body {
    pub const UNDEFINED: &'static str = "undefined";

    /// Encodes any serializable value as a JSON body. Object keys keep
    /// their insertion (or declaration) order. A Rust string passed here is
    /// encoded as a JSON string literal; use [`Body::Text`] to store text
    /// verbatim.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        Ok(Body::Json(serde_json::to_value(value)?))
    }

    pub fn into_string(self) -> String {
        match self {
            Body::Text(text) => text,
            Body::Json(value) => value.to_string(),
            Body::Undefined => Self::UNDEFINED.to_string(),
        }
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        match value {
            // a JSON string is still a string
            Value::String(text) => Body::Text(text),
            other => Body::Json(other),
        }
    }
}

impl<T: Into<Body>> From<Option<T>> for Body {
    fn from(body: Option<T>) -> Self {
        body.map_or(Body::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Reply {
        zeta: u8,
        alpha: &'static str,
    }

    #[test]
    fn test_struct_fields_keep_declaration_order() {
        let body = Body::json(&Reply { zeta: 1, alpha: "a" }).unwrap();
        assert_eq!(body.into_string(), r#"{"zeta":1,"alpha":"a"}"#);
    }

    #[test]
    fn test_json_string_is_quoted() {
        assert_eq!(Body::json("plain").unwrap(), Body::Json(json!("plain")));
        assert_eq!(Body::json("plain").unwrap().into_string(), r#""plain""#);
    }

    #[test]
    fn test_json_scalars() {
        assert_eq!(Body::from(json!(42)).into_string(), "42");
        assert_eq!(Body::from(json!(true)).into_string(), "true");
        assert_eq!(Body::from(json!(null)).into_string(), "null");
        assert_eq!(Body::from(json!([1, "two"])).into_string(), r#"[1,"two"]"#);
        assert_eq!(Body::from(json!("plain")).into_string(), "plain");
    }

    #[test]
    fn test_missing_body_is_undefined() {
        assert_eq!(Body::default().into_string(), "undefined");
        assert_eq!(Body::from(None::<&str>).into_string(), "undefined");
        assert_eq!(Body::from(Some("  spaced  ")).into_string(), "  spaced  ");
    }
}
