use crate::client::Client;
use crate::errors::Result;
use crate::models::Tag;
use crate::params::Params;
use crate::query::Query;

/// A single tag, fetched with [`Client::tag`].
#[derive(Debug, Clone)]
pub struct TagQuery<'a> {
    client: &'a Client,
    id: u64,
}

impl<'a> TagQuery<'a> {
    pub(crate) fn new(client: &'a Client, id: u64) -> Self {
        Self { client, id }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn fetch(&self) -> Result<Tag> {
        self.client.fetch(self)?.json()
    }
}

impl Query for TagQuery<'_> {
    fn endpoint(&self) -> String {
        format!("tags/{}.json", self.id)
    }

    fn params(&self) -> Params {
        Params::new()
    }
}

/// The tag listing, from [`Client::tags`].
#[derive(Debug, Clone)]
pub struct TagsQuery<'a> {
    client: &'a Client,
    name: Option<String>,
}

impl<'a> TagsQuery<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client, name: None }
    }

    /// Only the tag with exactly this name.
    pub fn name(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.name = Some(name.into());
        next
    }

    /// Tags in the order the API lists them.
    pub fn fetch(&self) -> Result<Vec<Tag>> {
        self.client.fetch(self)?.json()
    }
}

impl Query for TagsQuery<'_> {
    fn endpoint(&self) -> String {
        "tags.json".to_string()
    }

    fn params(&self) -> Params {
        let mut params = Params::new();
        if let Some(name) = &self.name {
            params.set("name", name.as_str());
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FixtureTransport;

    fn client() -> Client {
        let fixtures = FixtureTransport::new()
            .with("/tags.json", include_str!("../tests/fixtures/tags.json"))
            .with("/tags/86.json", include_str!("../tests/fixtures/tag-86.json"))
            .with("/tags/87.json", "[{\"id\": 87}]");

        Client::builder("fake-token")
            .base_url("https://api.video.example.com")
            .transport(fixtures)
            .build()
            .unwrap()
    }

    #[test]
    fn fetch_tag() {
        let c = client();
        let tag = c.tag(86).fetch().unwrap();

        assert_eq!(
            tag,
            Tag {
                id: 86,
                name: "Futebol".to_string()
            }
        );
    }

    #[test]
    fn fetch_tags_in_document_order() {
        let c = client();
        let tags = c.tags().fetch().unwrap();

        let pairs: Vec<(u64, &str)> = tags.iter().map(|t| (t.id, t.name.as_str())).collect();
        assert_eq!(pairs, [(86, "Futebol"), (1013, "Tempo Real")]);
    }

    #[test]
    fn wrong_shape_is_a_decode_error() {
        let c = client();
        assert!(c.tag(87).fetch().unwrap_err().is_decode());
    }

    #[test]
    fn name_filter() {
        let c = client();
        let all = c.tags();
        let named = all.name("Tempo Real");

        assert!(all.params().is_empty());
        assert_eq!(named.params().encode(), "name=Tempo+Real");
        assert_eq!(c.tag(86).params(), Params::new());
    }

    #[test]
    fn name_filter_keeps_the_client() {
        let c = client();
        let tags = c.tags().name("Futebol").fetch().unwrap();
        assert_eq!(tags.len(), 2);
    }
}
