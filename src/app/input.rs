use std::collections::HashMap;

/// Request parameter accessor shared by the CLI and web application
/// flavors. Values are plain strings; interpretation is up to the caller.
#[derive(Debug, Clone, Default)]
pub struct Input {
    values: HashMap<String, String>,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an input from command-line arguments. Supports `--key value`,
    /// `--key=value` and bare `key=value` forms; a flag without a value is
    /// stored as `"1"`.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut values = HashMap::new();
        let mut iter = args.into_iter().peekable();

        while let Some(arg) = iter.next() {
            if let Some(stripped) = arg.strip_prefix("--") {
                if let Some((key, value)) = stripped.split_once('=') {
                    values.insert(key.to_string(), value.to_string());
                } else if iter.peek().map(|n| !n.starts_with("--")).unwrap_or(false) {
                    values.insert(stripped.to_string(), iter.next().unwrap_or_default());
                } else {
                    values.insert(stripped.to_string(), "1".to_string());
                }
            } else if let Some((key, value)) = arg.split_once('=') {
                values.insert(key.to_string(), value.to_string());
            }
        }

        Self { values }
    }

    /// Build an input from an HTTP query string (`k=v&k2=v2`). No percent
    /// decoding is performed; a pair without `=` maps to an empty value.
    pub fn from_query(query: &str) -> Self {
        let mut values = HashMap::new();
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            match pair.split_once('=') {
                Some((key, value)) => values.insert(key.to_string(), value.to_string()),
                None => values.insert(pair.to_string(), String::new()),
            };
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.as_str())
    }

    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Input {
        Input::from_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_from_args_forms() {
        let input = args(&["--name", "regkit", "--debug", "count=3", "--mode=fast"]);

        assert_eq!(input.get("name"), Some("regkit"));
        assert_eq!(input.get("debug"), Some("1"));
        assert_eq!(input.get("count"), Some("3"));
        assert_eq!(input.get("mode"), Some("fast"));
        assert_eq!(input.get("missing"), None);
    }

    #[test]
    fn test_trailing_flag() {
        let input = args(&["--verbose"]);
        assert_eq!(input.get("verbose"), Some("1"));
    }

    #[test]
    fn test_from_query() {
        let input = Input::from_query("task=list&format=json&flag");

        assert_eq!(input.get("task"), Some("list"));
        assert_eq!(input.get("format"), Some("json"));
        assert_eq!(input.get("flag"), Some(""));
        assert_eq!(input.len(), 3);
    }

    #[test]
    fn test_get_or() {
        let input = Input::from_query("a=1");
        assert_eq!(input.get_or("a", "x"), "1");
        assert_eq!(input.get_or("b", "x"), "x");
    }
}
