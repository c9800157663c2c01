use serde::Deserialize;

/// Contract for list endpoints.
///
/// Some endpoints return a plain JSON array; others serialise with reference
/// preservation and wrap the array as `{ "$id": "1", "$values": [...] }`.
/// Anything else fails to decode at the service boundary.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListResponse<T> {
    Plain(Vec<T>),
    Envelope {
        #[serde(rename = "$values")]
        values: Vec<T>,
    },
}

impl<T> ListResponse<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Plain(items) | Self::Envelope { values: items } => items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Topic, UserId};

    #[test]
    fn test_envelope_unwraps_in_order() {
        let body = r#"{"$id":"1","$values":[
            {"id":1,"title":"A","userId":7},
            {"id":2,"title":"B","userId":8}
        ]}"#;
        let topics = serde_json::from_str::<ListResponse<Topic>>(body)
            .unwrap()
            .into_vec();
        assert_eq!(topics.iter().map(|t| t.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(topics[0].user_id, UserId::from("7"));
    }

    #[test]
    fn test_plain_array() {
        let body = r#"[{"id":5,"title":"C","description":"x","userID":"9"}]"#;
        let topics = serde_json::from_str::<ListResponse<Topic>>(body)
            .unwrap()
            .into_vec();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].description, "x");
    }

    #[test]
    fn test_other_shapes_are_rejected() {
        assert!(serde_json::from_str::<ListResponse<Topic>>(r#"{"items":[]}"#).is_err());
        assert!(serde_json::from_str::<ListResponse<Topic>>(r#""nope""#).is_err());
        assert!(serde_json::from_str::<ListResponse<Topic>>(r#"[{"id":"x"}]"#).is_err());
    }
}
