use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Valor de un campo del borrador.
///
/// Se serializa sin etiqueta para que el borrador completo sea JSON plano.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    Text(String),
    /// Grupo de selección múltiple (skills, categorías, ...).
    List(Vec<String>),
    /// Objeto anidado (`address`, `rates`, ...).
    Group(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Número directo o texto numérico (los inputs numéricos llegan como texto).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FieldValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_group(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            FieldValue::Group(children) => Some(children),
            _ => None,
        }
    }

    /// Valor "vacío" a efectos de campos requeridos: texto en blanco, lista o
    /// grupo vacíos, `false`, o un número no finito.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Bool(b) => !b,
            FieldValue::Number(n) => !n.is_finite(),
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Group(children) => children.is_empty(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(value: Vec<&str>) -> Self {
        FieldValue::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for FieldValue {
    fn from(value: &[&str]) -> Self {
        FieldValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn untagged_json_shapes() {
        let v: FieldValue = serde_json::from_value(json!({"city": "Milano", "zip": 20121})).unwrap();
        let group = v.as_group().unwrap();
        assert_eq!(group["city"], FieldValue::Text("Milano".into()));
        assert_eq!(group["zip"], FieldValue::Number(20121.0));

        let list: FieldValue = serde_json::from_value(json!(["editorial", "runway"])).unwrap();
        assert_eq!(list.as_list().unwrap().len(), 2);
        assert_eq!(serde_json::to_value(FieldValue::Bool(true)).unwrap(), json!(true));
    }

    #[test]
    fn blank_values() {
        assert!(FieldValue::from("   ").is_blank());
        assert!(FieldValue::from(Vec::<String>::new()).is_blank());
        assert!(FieldValue::from(false).is_blank());
        assert!(!FieldValue::from(0).is_blank());
        assert!(!FieldValue::from("x").is_blank());
    }

    #[test]
    fn numeric_text_is_a_number() {
        assert_eq!(FieldValue::from(" 42.5 ").as_number(), Some(42.5));
        assert_eq!(FieldValue::from("abc").as_number(), None);
        assert_eq!(FieldValue::from(true).as_number(), None);
    }
}
