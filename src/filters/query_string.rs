use std::fmt;
use url::form_urlencoded;

/// Ordered set of URL query parameters. Parameters keep their original position when updated, so
/// that committing filters doesn't shuffle parameters that other views own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryString {
    params: Vec<(String, String)>,
}

impl QueryString {
    /// Parses `application/x-www-form-urlencoded` query (with or without leading `?`). If the
    /// same parameter is repeated, the first occurrence wins.
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut query_string = Self::default();
        for (name, value) in form_urlencoded::parse(query.as_bytes()) {
            if query_string.get(&name).is_none() {
                query_string.params.push((name.into_owned(), value.into_owned()));
            }
        }
        query_string
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(param_name, _)| param_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Sets parameter value, replacing the existing one in place or appending a new one.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self
            .params
            .iter_mut()
            .find(|(param_name, _)| param_name == name)
        {
            Some((_, existing_value)) => *existing_value = value,
            None => self.params.push((name.to_string(), value)),
        }
    }

    pub fn delete(&mut self, name: &str) {
        self.params.retain(|(param_name, _)| param_name != name);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns `path` with this query string attached, or bare `path` if there are no parameters.
    pub fn to_location(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{self}")
        }
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for QueryString {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut query_string = Self::default();
        for (name, value) in iter {
            let name: String = name.into();
            query_string.set(&name, value);
        }
        query_string
    }
}

impl fmt::Display for QueryString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (name, value)) in self.params.iter().enumerate() {
            if index > 0 {
                f.write_str("&")?;
            }
            write!(f, "{}={}", encode(name), encode(value))?;
        }
        Ok(())
    }
}

// Commas separate multi-value parameters and are safe inside a query, keep them readable.
fn encode(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace("%2C", ",")
}
