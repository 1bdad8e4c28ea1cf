use crate::post::Post;
use gtmpl_value::Value;
use std::collections::HashMap;

impl From<&Post> for Value {
    fn from(p: &Post) -> Value {
        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("id".to_owned(), (&p.id).into());
        m.insert("title".to_owned(), (&p.title).into());
        m.insert(
            "date".to_owned(),
            Value::String(p.date.format("%Y-%m-%d").to_string()),
        );
        m.insert("url".to_owned(), Value::String(p.url.to_string()));
        Value::Object(m)
    }
}

/// Converts configuration data parsed from YAML into template [`Value`]s.
pub fn from_yaml(value: &serde_yaml::Value) -> Value {
    use serde_yaml::Value as Yaml;
    match value {
        Yaml::Null => Value::Nil,
        Yaml::Bool(b) => Value::from(*b),
        Yaml::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => Value::from(i),
            (None, Some(u)) => Value::from(u),
            // not an integer, so as_f64 always succeeds
            (None, None) => Value::from(n.as_f64().unwrap()),
        },
        Yaml::String(s) => Value::from(s.as_str()),
        Yaml::Sequence(values) => Value::Array(values.iter().map(from_yaml).collect()),
        Yaml::Mapping(mapping) => {
            let mut m: HashMap<String, Value> = HashMap::new();
            for (key, val) in mapping {
                // only string keys can name template variables
                if let Yaml::String(key) = key {
                    m.insert(key.clone(), from_yaml(val));
                }
            }
            Value::Object(m)
        }
    }
}
