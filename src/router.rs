#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Watch,
    Squad,
    Backup,
    Bracket,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Watch,
        Route::Squad,
        Route::Backup,
        Route::Bracket,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Watch => "/watch",
            Route::Squad => "/squad",
            Route::Backup => "/backup",
            Route::Bracket => "/bracket",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim().trim_start_matches('#');
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Route::ALL.into_iter().find(|route| route.path() == normalized)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    params: Vec<(String, String)>,
}

impl Location {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            params: Vec::new(),
        }
    }

    /// Parses `path?query`. Unknown paths resolve to the root with no query;
    /// the flag reports that a redirect happened.
    pub fn parse(raw: &str) -> (Location, bool) {
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (raw, None),
        };
        let Some(route) = Route::from_path(path) else {
            return (Location::new(Route::Home), true);
        };
        let mut location = Location::new(route);
        for pair in query.unwrap_or("").split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            location.set_param(&decode(key), &decode(value));
        }
        (location, false)
    }

    pub fn with_param(mut self, key: &str, value: &str) -> Self {
        self.set_param(key, value);
        self
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_param(&self, key: &str) -> bool {
        self.param(key).is_some()
    }

    pub fn set_param(&mut self, key: &str, value: &str) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.params.push((key.to_string(), value.to_string())),
        }
    }

    pub fn to_url(&self) -> String {
        if self.params.is_empty() {
            return self.route.path().to_string();
        }
        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.route.path(), query)
    }
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|v| v.into_owned())
        .unwrap_or(spaced)
}

/// Navigation stack with browser-like push/replace/back.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Location>,
    index: usize,
}

impl History {
    pub fn new(start: Location) -> Self {
        Self {
            entries: vec![start],
            index: 0,
        }
    }

    pub fn current(&self) -> &Location {
        &self.entries[self.index]
    }

    pub fn push(&mut self, location: Location) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location);
        self.index = self.entries.len() - 1;
    }

    pub fn replace(&mut self, location: Location) {
        self.entries[self.index] = location;
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_values_survive_a_round_trip() {
        let loc = Location::new(Route::Watch)
            .with_param("lang", "ru")
            .with_param("url", "https://x.test/a.m3u8?sig=1&e=2");
        let (parsed, redirected) = Location::parse(&loc.to_url());
        assert!(!redirected);
        assert_eq!(parsed, loc);
    }

    #[test]
    fn trailing_slash_and_hash_prefix_are_tolerated() {
        assert_eq!(Route::from_path("/squad/"), Some(Route::Squad));
        assert_eq!(Route::from_path("#/backup"), Some(Route::Backup));
        assert_eq!(Route::from_path(""), Some(Route::Home));
    }
}
