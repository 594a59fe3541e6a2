use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::serialize_object_id_as_hex_string;
use serde::{Deserialize, Deserializer, Serialize};

/// A blog document as stored in the `blogs` collection.
///
/// `_id` is assigned by the store on insert and serialized to clients as
/// the plain 24-char hex string. Deserialization accepts both that form
/// and the native BSON ObjectId coming back from the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    #[serde(
        rename = "_id",
        serialize_with = "serialize_object_id_as_hex_string",
        deserialize_with = "deserialize_object_id"
    )]
    pub id: ObjectId,
    pub title: String,
    pub image: String,
    pub post: String,
    pub category: String,
}

/// Insert shape: everything but the id, which the store assigns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlog {
    pub title: String,
    pub image: String,
    pub post: String,
    pub category: String,
}

fn deserialize_object_id<'de, D>(deserializer: D) -> Result<ObjectId, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdRepr {
        ObjectId(ObjectId),
        Hex(String),
    }

    match IdRepr::deserialize(deserializer)? {
        IdRepr::ObjectId(oid) => Ok(oid),
        IdRepr::Hex(hex) => ObjectId::parse_str(&hex).map_err(Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trips_through_json_as_a_hex_string() {
        let blog = Blog {
            id: ObjectId::new(),
            title: "A".into(),
            image: "a.png".into(),
            post: "body".into(),
            category: "tech".into(),
        };

        let json = serde_json::to_value(&blog).unwrap();
        assert_eq!(json["_id"], serde_json::json!(blog.id.to_hex()));

        let back: Blog = serde_json::from_value(json).unwrap();
        assert_eq!(back, blog);
    }
}
