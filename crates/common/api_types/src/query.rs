use actix_web::web::Query;

use crate::error::ApiError;

pub const API_KEY_PARAM: &str = "api_key";

#[derive(Debug, Default, PartialEq, Eq)]
pub struct StatusQuery {
    pub api_key: Option<String>,
}

impl StatusQuery {
    /// Parses a raw query string. A repeated `api_key` resolves to its first occurrence.
    pub fn from_query(query_string: &str) -> Result<Self, ApiError> {
        let pairs = Query::<Vec<(String, String)>>::from_query(query_string)
            .map_err(|err| ApiError::BadRequest(err.to_string()))?
            .into_inner();

        Ok(Self {
            api_key: pairs
                .into_iter()
                .find_map(|(key, value)| (key == API_KEY_PARAM).then_some(value)),
        })
    }

    /// Returns the API key, treating an empty value the same as an absent one.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|api_key| !api_key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::StatusQuery;

    #[test]
    fn test_empty_api_key_is_missing() {
        let query = StatusQuery {
            api_key: Some(String::new()),
        };
        assert_eq!(query.api_key(), None);
        assert_eq!(StatusQuery::default().api_key(), None);

        let query = StatusQuery {
            api_key: Some("secret".to_string()),
        };
        assert_eq!(query.api_key(), Some("secret"));
    }

    #[test]
    fn test_repeated_api_key_keeps_first() {
        let query = StatusQuery::from_query("api_key=first&api_key=second").unwrap();
        assert_eq!(query.api_key(), Some("first"));

        let query = StatusQuery::from_query("apiKey=other&api_key=secret&foo=bar").unwrap();
        assert_eq!(query.api_key(), Some("secret"));

        assert_eq!(StatusQuery::from_query("").unwrap(), StatusQuery::default());
    }
}
