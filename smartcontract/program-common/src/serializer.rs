use crate::types::{
    parse_utils::{bandwidth_parse, bandwidth_to_string},
    NetworkV4List,
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use solana_program::pubkey::Pubkey;
use std::str::FromStr;

// ----------------------------------------------
// Serializers
// ----------------------------------------------

pub fn serialize_pubkey_as_string<S>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&pubkey.to_string())
}

pub fn serialize_pubkeylist_as_string<S>(
    pubkey: &[Pubkey],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(
        &pubkey
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

pub fn serialize_bandwidth_as_string<S>(bandwidth: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&bandwidth_to_string(bandwidth))
}

pub fn serialize_networkv4list_as_string<S>(
    list: &NetworkV4List,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(list.to_string().as_str())
}

// ----------------------------------------------
// Deserializers
// ----------------------------------------------

pub fn deserialize_pubkey_from_string<'de, D>(deserializer: D) -> Result<Pubkey, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Pubkey::from_str(&s).map_err(serde::de::Error::custom)
}

pub fn deserialize_pubkeylist_from_string<'de, D>(deserializer: D) -> Result<Vec<Pubkey>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    if s.is_empty() {
        return Ok(Vec::new());
    }

    s.split(", ")
        .map(|pubkey_str| {
            Pubkey::from_str(pubkey_str.trim()).map_err(|e| {
                serde::de::Error::custom(format!("Invalid pubkey '{}': {}", pubkey_str, e))
            })
        })
        .collect()
}

pub fn deserialize_networkv4list_from_string<'de, D>(
    deserializer: D,
) -> Result<NetworkV4List, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NetworkV4List::from_str(&s).map_err(serde::de::Error::custom)
}

pub fn deserialize_bandwidth_from_string<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    bandwidth_parse(&s).map_err(serde::de::Error::custom)
}

// ----------------------------------------------
// Custom serialization where Pubkey is a key in a HashMap
// ----------------------------------------------

pub fn serialize_pubkey_map<S, T>(
    map: &std::collections::HashMap<Pubkey, T>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    use serde::ser::SerializeMap;

    let mut map_serializer = serializer.serialize_map(Some(map.len()))?;
    for (k, v) in map {
        map_serializer.serialize_entry(&k.to_string(), v)?;
    }
    map_serializer.end()
}

pub fn deserialize_pubkey_map<'de, D, T>(
    deserializer: D,
) -> Result<std::collections::HashMap<Pubkey, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let string_map: std::collections::HashMap<String, T> =
        std::collections::HashMap::deserialize(deserializer)?;

    string_map
        .into_iter()
        .map(|(k, v)| {
            Pubkey::from_str(&k)
                .map(|pubkey| (pubkey, v))
                .map_err(|e| serde::de::Error::custom(format!("Invalid pubkey key '{}': {}", k, e)))
        })
        .collect()
}

// ----------------------------------------------
// Tests
// ----------------------------------------------
