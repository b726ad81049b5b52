//! Flat `Key Value` parser for sshd_config
//!
//! This is a best-effort view of the file: no quoting, no line continuation,
//! `Match`/`Include` blocks are read as ordinary directives, and a repeated
//! key keeps only its last value.

use std::collections::HashMap;

/// A single parsed directive line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub key: String,
    pub value: String,
}

/// Directives keyed by case-sensitive name, in first-seen order
#[derive(Debug, Clone, Default)]
pub struct DirectiveSet {
    entries: Vec<Directive>,
    index: HashMap<String, usize>,
}

impl DirectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite; an overwritten key keeps its original position
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].value = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push(Directive { key, value });
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Directive> {
        self.entries.iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DirectiveSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = DirectiveSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

/// Decode file bytes as UTF-8, dropping invalid sequences instead of failing
pub fn decode_lenient(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Line boundaries: `\n`, lone `\r`, and the vertical-tab, form-feed,
/// separator and Unicode line/paragraph break characters
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split one trimmed line into key and value at the first whitespace run
fn split_directive(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((key, rest)) => (key.trim(), rest.trim()),
        None => (line, ""),
    }
}

/// Parse sshd_config text into a [`DirectiveSet`]
pub fn parse_sshd_config(text: &str) -> DirectiveSet {
    let mut directives = DirectiveSet::new();

    // A `\r\n` pair leaves an empty piece, skipped below
    for line in text.split(LINE_BREAKS) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = split_directive(line);
        directives.insert(key, value);
    }

    directives
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_directives() {
        let cfg = parse_sshd_config("PermitRootLogin no\nPort   22\n\tX11Forwarding\tyes  \n");
        assert_eq!(cfg.get("PermitRootLogin"), Some("no"));
        assert_eq!(cfg.get("Port"), Some("22"));
        assert_eq!(cfg.get("X11Forwarding"), Some("yes"));
        assert_eq!(cfg.len(), 3);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let text = "# PermitRootLogin yes\n\n   \n   # indented comment\nProtocol 2\n";
        let cfg = parse_sshd_config(text);
        assert_eq!(cfg.len(), 1);
        assert!(!cfg.contains("#"));
        assert!(!cfg.contains("PermitRootLogin"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let cfg = parse_sshd_config("Port 22\nPasswordAuthentication no\nPort 2222\n");
        assert_eq!(cfg.get("Port"), Some("2222"));

        let keys: Vec<_> = cfg.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["Port", "PasswordAuthentication"]);
    }

    #[test]
    fn test_key_without_value() {
        let cfg = parse_sshd_config("UsePAM\n");
        assert_eq!(cfg.get("UsePAM"), Some(""));
    }

    #[test]
    fn test_value_keeps_inner_whitespace_and_case() {
        let cfg = parse_sshd_config("Ciphers  aes256-ctr, AES128-ctr \nMatch User bob\n");
        assert_eq!(cfg.get("Ciphers"), Some("aes256-ctr, AES128-ctr"));
        assert_eq!(cfg.get("Match"), Some("User bob"));
    }

    #[test]
    fn test_keys_are_case_sensitive() {
        let cfg = parse_sshd_config("permitrootlogin yes\n");
        assert!(cfg.get("PermitRootLogin").is_none());
        assert_eq!(cfg.get("permitrootlogin"), Some("yes"));
    }

    #[test]
    fn test_crlf_lines() {
        let cfg = parse_sshd_config("Protocol 2\r\nX11Forwarding no\r\n");
        assert_eq!(cfg.get("Protocol"), Some("2"));
        assert_eq!(cfg.get("X11Forwarding"), Some("no"));
    }

    #[test]
    fn test_lone_cr_lines() {
        let cfg = parse_sshd_config("PermitRootLogin no\rPasswordAuthentication yes\r");
        assert_eq!(cfg.len(), 2);
        assert_eq!(cfg.get("PermitRootLogin"), Some("no"));
        assert_eq!(cfg.get("PasswordAuthentication"), Some("yes"));
    }

    #[test]
    fn test_other_line_breaks() {
        let cfg = parse_sshd_config("Protocol 2\x0cX11Forwarding no\u{2028}UsePAM yes\u{85}Port 22");
        assert_eq!(cfg.get("Protocol"), Some("2"));
        assert_eq!(cfg.get("X11Forwarding"), Some("no"));
        assert_eq!(cfg.get("UsePAM"), Some("yes"));
        assert_eq!(cfg.get("Port"), Some("22"));
    }

    #[test]
    fn test_decode_lenient() {
        assert_eq!(decode_lenient(b"Port 22"), "Port 22");
        assert_eq!(decode_lenient(b"Po\xc3rt\xfe 22"), "Port 22");
        assert_eq!(decode_lenient("Banner café".as_bytes()), "Banner café");
    }

    #[test]
    fn test_from_iter() {
        let set: DirectiveSet = [("A", "1"), ("B", "2"), ("A", "3")].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("A"), Some("3"));
    }
}
