use std::fmt::Debug;

use serde::{
    Serialize,
    de::DeserializeOwned,
};

pub fn test_string_serialization<T>(value: T, want: &str)
where
    T: Serialize,
{
    assert_eq!(
        serde_json::to_string(&value).unwrap(),
        format!("\"{want}\"")
    );
}

pub fn test_string_deserialization<T>(value: &str, want: T)
where
    T: DeserializeOwned + Debug + PartialEq,
{
    assert_eq!(
        serde_json::from_str::<T>(&format!("\"{value}\"")).unwrap(),
        want
    );
}
