use serde::Serialize;
use url::Url;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedItem {
    pub id: Uuid,
    pub description: Option<String>,
    pub location: Option<String>,
    pub image_url: Url,
}

impl FeedItem {
    pub fn new(id: Uuid, image_url: Url) -> Self {
        Self {
            id,
            description: None,
            location: None,
            image_url,
        }
    }

    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> Url {
        Url::parse("https://a-url.com/image.png").unwrap()
    }

    #[test]
    fn test_new_has_no_optional_fields() {
        let id = Uuid::nil();
        let item = FeedItem::new(id, image());

        assert_eq!(item.id, id);
        assert_eq!(item.description, None);
        assert_eq!(item.location, None);
        assert_eq!(item.image_url, image());
    }

    #[test]
    fn test_equality_is_structural() {
        let id = Uuid::nil();
        let a = FeedItem::new(id, image()).with_location(Some("Rome".to_string()));
        let b = FeedItem::new(id, image()).with_location(Some("Rome".to_string()));
        let c = a.clone().with_description(Some("A description".to_string()));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_serializes_with_model_field_names() {
        let item = FeedItem::new(Uuid::nil(), image());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["image_url"], "https://a-url.com/image.png");
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert!(json.get("image").is_none());
    }
}
