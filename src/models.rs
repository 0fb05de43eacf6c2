use serde::de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

/// One entry of the `/name/{query}` response array.
///
/// The API gives no guarantee that any field is present, so everything is optional.
/// Keyed objects (`languages`, `currencies`) keep the order in which the API sent them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    pub name: Option<CountryName>,
    #[serde(default, deserialize_with = "de_lenient_list")]
    pub capital: Option<Vec<String>>,
    pub flags: Option<ImageLinks>,
    pub coat_of_arms: Option<ImageLinks>,
    #[serde(
        default,
        deserialize_with = "de_ordered_map",
        serialize_with = "ser_ordered_map"
    )]
    pub languages: Option<Vec<(String, String)>>,
    #[serde(
        default,
        deserialize_with = "de_ordered_map",
        serialize_with = "ser_ordered_map"
    )]
    pub currencies: Option<Vec<(String, Currency)>>,
    #[serde(default, deserialize_with = "de_lenient_list")]
    pub continents: Option<Vec<String>>,
    pub subregion: Option<String>,
    #[serde(default, deserialize_with = "de_lenient_list")]
    pub borders: Option<Vec<String>>,
    #[serde(default, deserialize_with = "de_lenient_population")]
    pub population: Option<u64>,
    pub maps: Option<Maps>,
    pub start_of_week: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CountryName {
    pub common: Option<String>,
    pub official: Option<String>,
}

/// Image URLs as served for `flags` and `coatOfArms`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageLinks {
    pub png: Option<String>,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maps {
    pub google_maps: Option<String>,
    pub open_street_maps: Option<String>,
}

impl CountryRecord {
    /// Cards are only drawn for records carrying a `name` object.
    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    pub fn common_name(&self) -> Option<&str> {
        self.name.as_ref()?.common.as_deref()
    }

    pub fn official_name(&self) -> Option<&str> {
        self.name.as_ref()?.official.as_deref()
    }

    pub fn language_names(&self) -> Option<Vec<String>> {
        self.languages
            .as_ref()
            .map(|langs| langs.iter().map(|(_, name)| name.clone()).collect())
    }

    pub fn currency_codes(&self) -> Option<Vec<String>> {
        self.currencies
            .as_ref()
            .map(|cur| cur.iter().map(|(code, _)| code.clone()).collect())
    }

    pub fn flag_png(&self) -> Option<&str> {
        self.flags.as_ref()?.png.as_deref()
    }

    pub fn coat_of_arms_png(&self) -> Option<&str> {
        self.coat_of_arms.as_ref()?.png.as_deref()
    }

    pub fn google_maps(&self) -> Option<&str> {
        self.maps.as_ref()?.google_maps.as_deref()
    }
}

/// Serde helper: accept a JSON array as a list of strings.
///
/// Non-string elements are kept in their JSON text form. Any non-array value
/// (string, object, number, null) is treated as absent instead of failing the record.
fn de_lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(match v {
        Value::Array(items) => Some(
            items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    })
}

/// Serde helper: parse a JSON object into `(key, value)` pairs in document order.
///
/// Walks the map with a visitor instead of going through `Value`, whose map type
/// sorts keys. Any non-object value is treated as absent.
fn de_ordered_map<'de, D, V>(deserializer: D) -> Result<Option<Vec<(String, V)>>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    struct OrderedMapVisitor<V>(PhantomData<V>);

    impl<'de, V> Visitor<'de> for OrderedMapVisitor<V>
    where
        V: Deserialize<'de>,
    {
        type Value = Option<Vec<(String, V)>>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "an object or null")
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut out = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((key, value)) = map.next_entry::<String, V>()? {
                out.push((key, value));
            }
            Ok(Some(out))
        }

        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
            Ok(None)
        }

        fn visit_str<E>(self, _: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_bool<E>(self, _: bool) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_i64<E>(self, _: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_u64<E>(self, _: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_f64<E>(self, _: f64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(OrderedMapVisitor(PhantomData))
}

/// Serde helper: population as a JSON integer, an integral float (`220892340.0`)
/// or a numeric string. Negative, fractional or non-numeric values are treated as absent.
fn de_lenient_population<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Value::deserialize(deserializer)?;
    Ok(match v {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    })
}

fn ser_ordered_map<S, V>(pairs: &Option<Vec<(String, V)>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    V: Serialize,
{
    match pairs {
        Some(pairs) => serializer.collect_map(pairs.iter().map(|(k, v)| (k, v))),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn languages_keep_api_order() {
        let r: CountryRecord =
            serde_json::from_str(r#"{"languages":{"ur":"Urdu","en":"English"}}"#).unwrap();
        assert_eq!(
            r.language_names(),
            Some(vec!["Urdu".to_string(), "English".to_string()])
        );
    }

    #[test]
    fn non_list_capital_is_absent() {
        let r: CountryRecord = serde_json::from_str(r#"{"capital":"Bern"}"#).unwrap();
        assert_eq!(r.capital, None);
    }
}
