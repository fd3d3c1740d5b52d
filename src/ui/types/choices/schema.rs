use anyhow::{Context, Result, bail};
use schemars::{JsonSchema, Schema};
use serde_json::{Map, Value};

/// How a parameter is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Number,
    Flag,
}

/// One prompt-able parameter of a choice variant, read off its JSON schema.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    pub title: String,
    pub description: Option<String>,
    pub kind: FieldKind,
    /// `Option<T>` fields accept "no value".
    pub nullable: bool,
    pub default: Option<Value>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Answers must be strictly greater than this.
    pub exclusive_min: Option<f64>,
}

impl FieldSpec {
    pub fn help(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

pub fn schema_for<T: JsonSchema>() -> Schema {
    schemars::schema_for!(T)
}

/// Parameter fields of the `{"type": kind_key, "params": {..}}` branch of an
/// adjacently tagged enum schema, in declaration order.
pub fn specs_for_kind(root: &Schema, kind_key: &str) -> Result<Vec<FieldSpec>> {
    let root_obj = root.as_object().context("root schema is not an object")?;
    let branches = root_obj
        .get("oneOf")
        .or_else(|| root_obj.get("anyOf"))
        .and_then(Value::as_array)
        .context("tagged enum schema has no oneOf/anyOf")?;

    let Some(props) = branches
        .iter()
        .filter_map(|b| b.get("properties").and_then(Value::as_object))
        .find(|props| tag_of(props) == Some(kind_key))
    else {
        bail!("no branch found for type={kind_key}");
    };

    let Some(params) = props
        .get("params")
        .and_then(Value::as_object)
        .and_then(|p| resolve(root_obj, p))
    else {
        return Ok(vec![]);
    };
    let Some(fields) = params.get("properties").and_then(Value::as_object) else {
        return Ok(vec![]);
    };

    let mut out = Vec::with_capacity(fields.len());
    for (name, field) in fields {
        let field = field
            .as_object()
            .and_then(|f| resolve(root_obj, f))
            .with_context(|| format!("unresolvable schema for field '{name}'"))?;
        let Some((kind, nullable)) = field_kind(field.get("type")) else {
            continue;
        };
        out.push(FieldSpec {
            name: name.clone(),
            title: field
                .get("title")
                .and_then(Value::as_str)
                .unwrap_or(name)
                .to_string(),
            description: field
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            kind,
            nullable,
            default: field.get("default").cloned(),
            min: field.get("minimum").and_then(Value::as_f64),
            max: field.get("maximum").and_then(Value::as_f64),
            exclusive_min: field.get("exclusiveMinimum").and_then(Value::as_f64),
        });
    }
    Ok(out)
}

fn tag_of(props: &Map<String, Value>) -> Option<&str> {
    let tag = props.get("type")?.as_object()?;
    if let Some(k) = tag.get("const").and_then(Value::as_str) {
        return Some(k);
    }
    match tag.get("enum").and_then(Value::as_array)?.as_slice() {
        [only] => only.as_str(),
        _ => None,
    }
}

/// Follows a local `#/$defs/..` reference; objects without one are returned as is.
fn resolve<'a>(
    root: &'a Map<String, Value>,
    obj: &'a Map<String, Value>,
) -> Option<&'a Map<String, Value>> {
    let Some(reference) = obj.get("$ref") else {
        return Some(obj);
    };
    let path = reference.as_str()?.strip_prefix("#/")?;
    path.split('/').try_fold(root, |cur, seg| {
        let seg = seg.replace("~1", "/").replace("~0", "~");
        cur.get(&seg)?.as_object()
    })
}

fn field_kind(ty: Option<&Value>) -> Option<(FieldKind, bool)> {
    let kind_of = |s: &str| match s {
        "string" => Some(FieldKind::Text),
        "integer" => Some(FieldKind::Integer),
        "number" => Some(FieldKind::Number),
        "boolean" => Some(FieldKind::Flag),
        _ => None,
    };
    match ty? {
        Value::String(s) => kind_of(s).map(|k| (k, false)),
        Value::Array(types) => {
            let names: Vec<&str> = types.iter().filter_map(Value::as_str).collect();
            let nullable = names.contains(&"null");
            names.into_iter().find_map(kind_of).map(|k| (k, nullable))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tagged_schema() -> Schema {
        let v = json!({
            "oneOf": [
                {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string", "const": "alpha" },
                        "params": { "$ref": "#/$defs/AlphaParams" }
                    }
                },
                {
                    "type": "object",
                    "properties": {
                        "type": { "type": "string", "enum": ["beta"] }
                    }
                }
            ],
            "$defs": {
                "AlphaParams": {
                    "type": "object",
                    "properties": {
                        "size": { "type": "integer", "title": "Size", "minimum": 4, "default": 10 },
                        "seed": { "type": ["integer", "null"], "description": "Seed" },
                        "dir": { "type": "string" },
                        "scale": { "type": "number", "maximum": 2.5, "exclusiveMinimum": 0.0 },
                        "tables": { "type": "boolean" },
                        "nested": { "type": "object" }
                    }
                }
            }
        });
        Schema::try_from(v).unwrap()
    }

    #[test]
    fn reads_fields_through_ref() {
        let specs = specs_for_kind(&tagged_schema(), "alpha").unwrap();
        let names: Vec<&str> = specs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["size", "seed", "dir", "scale", "tables"]);

        let size = &specs[0];
        assert_eq!(size.title, "Size");
        assert_eq!(size.kind, FieldKind::Integer);
        assert_eq!(size.min, Some(4.0));
        assert_eq!(size.default, Some(json!(10)));
        assert!(!size.nullable);

        let seed = &specs[1];
        assert_eq!(seed.title, "seed");
        assert_eq!(seed.help(), "Seed");
        assert!(seed.nullable);

        assert_eq!(specs[2].kind, FieldKind::Text);
        assert_eq!(specs[3].max, Some(2.5));
        assert_eq!(specs[3].exclusive_min, Some(0.0));
        assert_eq!(specs[3].min, None);
        assert_eq!(size.exclusive_min, None);
        assert_eq!(specs[4].kind, FieldKind::Flag);
    }

    #[test]
    fn branch_without_params_has_no_fields() {
        assert!(specs_for_kind(&tagged_schema(), "beta").unwrap().is_empty());
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(specs_for_kind(&tagged_schema(), "gamma").is_err());
    }
}
