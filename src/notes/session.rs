//! Editing Session
//!
//! Owns the document history and routes every key: symbol and editing keys
//! go through the transducer, history keys move the undo cursor, copy and
//! export hand the normalized text to the surface. This is the only place
//! that talks to the outside world.

use tracing::{debug, info, trace};

use super::buffer::Document;
use super::history::History;
use super::key::Key;
use super::normalize::normalize;
use super::{transducer, NotesResult};

/// The collaborators around the engine: display, clipboard and file export.
pub trait Surface {
    /// Called with the raw document text after every state change
    fn render(&mut self, text: &str);

    /// Receives the normalized text for the clipboard
    fn copy(&mut self, text: &str);

    /// Receives the normalized text for a file export
    fn export(&mut self, text: &str);
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session from existing canonical text
    pub fn from_text(text: &str) -> NotesResult<Self> {
        Ok(Self {
            history: History::new(Document::from_text(text)?),
        })
    }

    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn text(&self) -> &str {
        self.document().as_str()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Export-ready text; the live document is left alone
    pub fn normalized_text(&self) -> String {
        normalize(self.document())
    }

    /// Whether `key` would have an effect right now
    pub fn accepts(&self, key: Key) -> bool {
        match key {
            Key::Undo => self.history.can_undo(),
            Key::Redo => self.history.can_redo(),
            Key::Copy | Key::Export => true,
            _ => transducer::apply(self.document(), key).is_some(),
        }
    }

    /// Handles one key to completion. Returns `true` if the document changed.
    pub fn handle_key<S: Surface + ?Sized>(&mut self, key: Key, surface: &mut S) -> bool {
        match key {
            Key::Undo => restore(self.history.undo(), surface),
            Key::Redo => restore(self.history.redo(), surface),
            Key::Copy => {
                let text = self.normalized_text();
                info!(bytes = text.len(), "copy notes");
                surface.copy(&text);
                false
            }
            Key::Export => {
                let text = self.normalized_text();
                info!(bytes = text.len(), "export notes");
                surface.export(&text);
                false
            }
            _ => self.edit(key, surface),
        }
    }

    fn edit<S: Surface + ?Sized>(&mut self, key: Key, surface: &mut S) -> bool {
        let Some(next) = transducer::apply(self.document(), key) else {
            debug!(%key, segment = self.document().last_segment(), "key rejected");
            return false;
        };
        trace!(%key, before = self.text(), after = next.as_str(), "edit");
        self.history.record(next);
        surface.render(self.text());
        true
    }
}

fn restore<S: Surface + ?Sized>(doc: Option<&Document>, surface: &mut S) -> bool {
    let Some(doc) = doc else {
        return false;
    };
    surface.render(doc.as_str());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        renders: Vec<String>,
        copies: Vec<String>,
        exports: Vec<String>,
    }

    impl Surface for Recorder {
        fn render(&mut self, text: &str) {
            self.renders.push(text.to_string());
        }

        fn copy(&mut self, text: &str) {
            self.copies.push(text.to_string());
        }

        fn export(&mut self, text: &str) {
            self.exports.push(text.to_string());
        }
    }

    fn run(session: &mut Session, surface: &mut Recorder, keys: &str) {
        for name in keys.split_whitespace() {
            session.handle_key(name.parse().unwrap(), surface);
        }
    }

    #[test]
    fn test_typing_a_timestamp() {
        let mut session = Session::new();
        let mut surface = Recorder::default();

        run(&mut session, &mut surface, "1 2");
        assert_eq!(session.text(), "1)\n(12:");
        run(&mut session, &mut surface, "3 4");
        assert_eq!(session.text(), "1)\n(12:34),(");
        assert_eq!(surface.renders.len(), 4);
        assert_eq!(surface.renders.last().map(String::as_str), Some("1)\n(12:34),("));
    }

    #[test]
    fn test_each_key_records_once() {
        let mut session = Session::new();
        let mut surface = Recorder::default();

        run(&mut session, &mut surface, "1 2 3 4");
        assert_eq!(session.history().snapshot_count(), 5);
    }

    #[test]
    fn test_rejected_key_leaves_no_trace() {
        let mut session = Session::new();
        let mut surface = Recorder::default();

        assert!(!session.handle_key("+".parse().unwrap(), &mut surface));
        assert!(!session.handle_key(Key::Ok, &mut surface));
        assert!(!session.handle_key(Key::Backspace, &mut surface));
        assert_eq!(session.text(), "1)\n(");
        assert_eq!(session.history().snapshot_count(), 1);
        assert!(surface.renders.is_empty());
    }

    #[test]
    fn test_accepts_mirrors_handle_key() {
        let session = Session::from_text("1)\n(12:3").unwrap();
        assert!(session.accepts(Key::digit(4)));
        assert!(session.accepts(")".parse().unwrap()));
        assert!(!session.accepts(":".parse().unwrap()));
        assert!(!session.accepts(Key::Undo));
        assert!(!session.accepts(Key::Redo));
        assert!(session.accepts(Key::Copy));
    }

    #[test]
    fn test_undo_redo_boundaries() {
        let mut session = Session::new();
        let mut surface = Recorder::default();

        assert!(!session.handle_key(Key::Undo, &mut surface));
        assert!(!session.handle_key(Key::Redo, &mut surface));
        assert_eq!(session.text(), "1)\n(");
        assert!(surface.renders.is_empty());
    }

    #[test]
    fn test_undo_restores_and_renders() {
        let mut session = Session::new();
        let mut surface = Recorder::default();

        run(&mut session, &mut surface, "1 2");
        assert!(session.handle_key(Key::Undo, &mut surface));
        assert_eq!(session.text(), "1)\n(1");
        assert_eq!(surface.renders.last().map(String::as_str), Some("1)\n(1"));
        assert!(session.handle_key(Key::Redo, &mut surface));
        assert_eq!(session.text(), "1)\n(12:");
    }

    #[test]
    fn test_new_edit_after_undo_drops_redo() {
        let mut session = Session::new();
        let mut surface = Recorder::default();

        run(&mut session, &mut surface, "1 2 undo 3");
        assert_eq!(session.text(), "1)\n(13:");
        assert!(!session.handle_key(Key::Redo, &mut surface));
        assert_eq!(session.text(), "1)\n(13:");
    }

    #[test]
    fn test_copy_and_export_receive_normalized_text() {
        let mut session = Session::from_text("1)\n(09:05),(").unwrap();
        let mut surface = Recorder::default();

        assert!(!session.handle_key(Key::Copy, &mut surface));
        assert!(!session.handle_key(Key::Export, &mut surface));
        assert_eq!(surface.copies, vec!["1)\n(09:05)".to_string()]);
        assert_eq!(surface.exports, vec!["1)\n(09:05)".to_string()]);
        assert_eq!(session.text(), "1)\n(09:05),(");
        assert!(surface.renders.is_empty());
    }

    #[test]
    fn test_ok_then_enter_scenario() {
        let mut session = Session::from_text("1)\n(09:5").unwrap();
        let mut surface = Recorder::default();

        run(&mut session, &mut surface, "ok");
        assert_eq!(session.text(), "1)\n(09:05),(");
        run(&mut session, &mut surface, "enter");
        assert_eq!(session.text(), "1)\n(09:05)\n\n2)\n(");
        assert!(session.normalized_text().starts_with("1)\n(09:05)\n"));
    }

    #[test]
    fn test_headers_strictly_increase() {
        let mut session = Session::new();
        let mut surface = Recorder::default();

        run(&mut session, &mut surface, "0 8 1 5 enter 0 9 3 ) + ( 1 0 0 0 enter 1 1 ok 3 enter");
        let headers: Vec<usize> = session
            .normalized_text()
            .split('\n')
            .filter_map(crate::notes::buffer::parse_header)
            .collect();
        assert_eq!(headers, vec![1, 2, 3, 4]);
        assert!(Document::from_text(&session.normalized_text()).is_ok());
    }

    /// Every document reachable in `DEPTH` edits from a fresh session is
    /// well-formed, and its export text is stable under normalization.
    #[test]
    fn test_all_short_key_sequences_stay_well_formed() {
        use std::collections::HashSet;

        const DEPTH: usize = 7;
        let keys: Vec<Key> = "0 5 9 : ( ) + - , backspace clear ok enter"
            .split_whitespace()
            .map(|name| name.parse().unwrap())
            .collect();

        let mut seen: HashSet<Document> = HashSet::from([Document::new()]);
        let mut frontier = vec![Document::new()];

        for _ in 0..DEPTH {
            let mut next = Vec::new();
            for doc in &frontier {
                for &key in &keys {
                    let Some(after) = transducer::apply(doc, key) else {
                        continue;
                    };
                    if !seen.insert(after.clone()) {
                        continue;
                    }

                    assert!(Document::from_text(after.as_str()).is_ok(), "{doc:?} + {key} -> {after:?}");
                    let normalized = normalize(&after);
                    let reparsed = Document::from_text(&normalized).unwrap();
                    assert_eq!(normalize(&reparsed), normalized, "{after:?}");
                    next.push(after);
                }
            }
            frontier = next;
        }

        assert!(seen.len() > 1000, "only {} documents reached", seen.len());
    }

    #[test]
    fn test_every_step_stays_well_formed() {
        let mut session = Session::new();
        let mut surface = Recorder::default();
        let keys = "1 ( : 2 2 3 ) ) 4 , 5 + ( ok 7 ok 1 backspace backspace 9 9 enter enter enter 1 2 undo redo clear - 0 0 0 0 , 1";

        for name in keys.split_whitespace() {
            session.handle_key(name.parse().unwrap(), &mut surface);
            assert!(Document::from_text(session.text()).is_ok(), "after {name}: {:?}", session.text());
            let normalized = session.normalized_text();
            let again = Session::from_text(&normalized).map(|s| s.normalized_text());
            assert_eq!(again.ok().as_deref(), Some(normalized.as_str()));
        }
    }
}
