use crate::error::SourceError;
use datalist_core::record::Record;
use datalist_core::record::Value;

/// Endpoint the review screen searches by default.
pub const USERS_ENDPOINT: &str = "/api/users";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchFilter {
    pub limit: usize,
    /// Case-insensitive text matched against username and full name.
    pub query: Option<String>,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            limit: 500,
            query: None,
        }
    }
}

impl SearchFilter {
    pub fn matches(&self, record: &Record) -> bool {
        let Some(query) = self.query.as_deref().map(str::trim) else {
            return true;
        };
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        ["username", "fullName"].iter().any(|field| {
            record
                .text(field)
                .is_some_and(|v| v.to_lowercase().contains(&query))
        })
    }
}

/// Where the screen gets its records from.
///
/// A search either yields the full replacement collection or fails; the screen keeps whatever it
/// showed before on failure and does not retry.
pub trait RecordSource {
    fn search(&mut self, endpoint: &str, filter: &SearchFilter)
    -> Result<Vec<Record>, SourceError>;
}

impl<F> RecordSource for F
where
    F: FnMut(&str, &SearchFilter) -> Result<Vec<Record>, SourceError>,
{
    fn search(
        &mut self,
        endpoint: &str,
        filter: &SearchFilter,
    ) -> Result<Vec<Record>, SourceError> {
        self(endpoint, filter)
    }
}

/// Serves a fixed collection from one endpoint.
#[derive(Clone, Debug)]
pub struct StaticSource {
    endpoint: String,
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(endpoint: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            endpoint: endpoint.into(),
            records,
        }
    }

    /// The two demo users the review screen ships with.
    pub fn seeded() -> Self {
        Self::new(
            USERS_ENDPOINT,
            vec![
                person(
                    1,
                    "John Deere",
                    "john.doe@kanzucodefoundation.org",
                    "https://gravatar.com/avatar/b3f4f05a52a00fb808ea4caa970129fa?s=200&d=retro",
                ),
                person(
                    2,
                    "Jane Deere",
                    "jane.doe@kanzucodefoundation.org",
                    "https://gravatar.com/avatar/4ee0dc301b36908c69c9788aa0b1853c?s=200&d=retro",
                ),
            ],
        )
    }
}

impl RecordSource for StaticSource {
    fn search(
        &mut self,
        endpoint: &str,
        filter: &SearchFilter,
    ) -> Result<Vec<Record>, SourceError> {
        if endpoint != self.endpoint {
            return Err(SourceError::UnknownEndpoint(endpoint.to_string()));
        }
        let found: Vec<Record> = self
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .take(filter.limit)
            .cloned()
            .collect();
        log::debug!("[source] {endpoint}: {} record(s)", found.len());
        Ok(found)
    }
}

/// Builds a person record in the shape the review columns expect.
pub fn person(id: i64, full_name: &str, username: &str, avatar: &str) -> Record {
    Record::new(id)
        .with("avatar", avatar)
        .with("contactId", id)
        .with("fullName", full_name)
        .with("username", username)
        .with("roles", vec![Value::from("RoleAdmin")])
        .with("isActive", true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_source_serves_two_users() {
        let mut source = StaticSource::seeded();
        let found = source.search(USERS_ENDPOINT, &SearchFilter::default()).unwrap();
        let names: Vec<&str> = found.iter().filter_map(|r| r.text("fullName")).collect();
        assert_eq!(names, vec!["John Deere", "Jane Deere"]);
    }

    #[test]
    fn filter_applies_query_and_limit() {
        let mut source = StaticSource::seeded();
        let filter = SearchFilter {
            limit: 500,
            query: Some("JANE".to_string()),
        };
        let found = source.search(USERS_ENDPOINT, &filter).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text("username"), Some("jane.doe@kanzucodefoundation.org"));

        let filter = SearchFilter {
            limit: 1,
            query: None,
        };
        assert_eq!(source.search(USERS_ENDPOINT, &filter).unwrap().len(), 1);
    }

    #[test]
    fn unknown_endpoint_is_an_error() {
        let mut source = StaticSource::seeded();
        assert_eq!(
            source.search("/api/groups", &SearchFilter::default()),
            Err(SourceError::UnknownEndpoint("/api/groups".to_string()))
        );
    }

    #[test]
    fn closures_are_sources() {
        let mut calls = 0;
        let mut source = |_: &str, _: &SearchFilter| {
            calls += 1;
            Ok::<_, SourceError>(vec![Record::new(9)])
        };
        assert_eq!(source.search("/x", &SearchFilter::default()).unwrap().len(), 1);
        assert_eq!(calls, 1);
    }
}
