/// An insertion-ordered `key=value` store for command-line operands.
///
/// Grounded in the original linked list of `RegistryNode`s: lookups are
/// linear, and [`Registry::set`] updates a key in place if it already
/// exists, or appends a new entry if it doesn't.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<(String, String)>,
}

impl Registry {
    pub fn new() -> Self {
        Registry { entries: Vec::new() }
    }

    /// Insert or update `key`'s value.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_owned();
        } else {
            self.entries.push((key.to_owned(), value.to_owned()));
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    /// `get`, falling back to `default` if the key is absent or its value is
    /// empty (the convention the command-line parser uses for "omitted").
    pub fn get_or(&self, key: &str, default: &str) -> String {
        match self.get(key) {
            Some(v) if !v.is_empty() => v.to_owned(),
            _ => default.to_owned(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut reg = Registry::new();
        reg.set("in.fmt", "64");
        assert_eq!(reg.get("in.fmt"), Some("64"));
        assert_eq!(reg.get("missing"), None);
    }

    #[test]
    fn set_updates_existing_key_in_place() {
        let mut reg = Registry::new();
        reg.set("key", "first");
        reg.set("key", "second");
        assert_eq!(reg.get("key"), Some("second"));
    }

    #[test]
    fn get_or_falls_back_on_absent_or_empty() {
        let mut reg = Registry::new();
        reg.set("out", "");
        assert_eq!(reg.get_or("out", "<STDOUT>"), "<STDOUT>");
        assert_eq!(reg.get_or("missing", "fallback"), "fallback");

        reg.set("out", "file.txt");
        assert_eq!(reg.get_or("out", "<STDOUT>"), "file.txt");
    }
}
