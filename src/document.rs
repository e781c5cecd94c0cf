//! Host document head registry.
//!
//! The dashboard registers one font stylesheet with its host page the first time it
//! is mounted. The registry is process-wide and lives for the whole process; the
//! insert is guarded by the element id so repeated mounts never duplicate it.

use crate::consts::cli_consts::FONT_LINK_ID;
use std::sync::{Mutex, OnceLock};

/// An element in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadElement {
    Link {
        id: Option<String>,
        rel: String,
        href: String,
    },
}

impl HeadElement {
    pub fn id(&self) -> Option<&str> {
        match self {
            HeadElement::Link { id, .. } => id.as_deref(),
        }
    }
}

/// The head of the hosting document.
#[derive(Debug, Default)]
pub struct HostDocument {
    head: Vec<HeadElement>,
}

impl HostDocument {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn head(&self) -> &[HeadElement] {
        &self.head
    }

    pub fn element_by_id(&self, id: &str) -> Option<&HeadElement> {
        self.head.iter().find(|element| element.id() == Some(id))
    }

    pub fn append_to_head(&mut self, element: HeadElement) {
        self.head.push(element);
    }

    /// Inserts a stylesheet link with the given id unless one is already present.
    ///
    /// Returns `true` if the link was inserted by this call.
    pub fn ensure_stylesheet(&mut self, id: &str, href: &str) -> bool {
        if self.element_by_id(id).is_some() {
            return false;
        }
        self.append_to_head(HeadElement::Link {
            id: Some(id.to_string()),
            rel: "stylesheet".to_string(),
            href: href.to_string(),
        });
        true
    }
}

/// Process-wide host document, created on first use and never torn down.
static HOST_DOCUMENT: OnceLock<Mutex<HostDocument>> = OnceLock::new();

pub fn host_document() -> &'static Mutex<HostDocument> {
    HOST_DOCUMENT.get_or_init(|| Mutex::new(HostDocument::new()))
}

/// Registers the font stylesheet with the process-wide host document.
///
/// Returns `true` only for the mount that actually inserted the link.
pub fn mount_font_stylesheet(href: &str) -> bool {
    let mut guard = match host_document().lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    };
    guard.ensure_stylesheet(FONT_LINK_ID, href)
}

/// Number of head elements carrying the font stylesheet id.
#[cfg(test)]
pub fn font_stylesheet_count() -> usize {
    let guard = match host_document().lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    };
    guard
        .head()
        .iter()
        .filter(|element| element.id() == Some(FONT_LINK_ID))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::cli_consts::FONT_STYLESHEET_URL;

    #[test]
    fn ensure_stylesheet_inserts_once() {
        let mut doc = HostDocument::new();
        assert!(doc.ensure_stylesheet(FONT_LINK_ID, FONT_STYLESHEET_URL));
        assert!(!doc.ensure_stylesheet(FONT_LINK_ID, FONT_STYLESHEET_URL));
        assert_eq!(doc.head().len(), 1);
        assert_eq!(
            doc.element_by_id(FONT_LINK_ID),
            Some(&HeadElement::Link {
                id: Some(FONT_LINK_ID.to_string()),
                rel: "stylesheet".to_string(),
                href: FONT_STYLESHEET_URL.to_string(),
            })
        );
    }

    #[test]
    fn existing_marker_blocks_insert_even_with_other_href() {
        let mut doc = HostDocument::new();
        doc.append_to_head(HeadElement::Link {
            id: Some(FONT_LINK_ID.to_string()),
            rel: "stylesheet".to_string(),
            href: "https://example.test/other.css".to_string(),
        });
        assert!(!doc.ensure_stylesheet(FONT_LINK_ID, FONT_STYLESHEET_URL));
        assert_eq!(doc.head().len(), 1);
    }

    #[test]
    fn unrelated_elements_do_not_satisfy_guard() {
        let mut doc = HostDocument::new();
        doc.append_to_head(HeadElement::Link {
            id: None,
            rel: "icon".to_string(),
            href: "/favicon.ico".to_string(),
        });
        assert!(doc.ensure_stylesheet(FONT_LINK_ID, FONT_STYLESHEET_URL));
        assert_eq!(doc.head().len(), 2);
    }

    #[test]
    fn mounting_twice_leaves_one_font_link() {
        mount_font_stylesheet(FONT_STYLESHEET_URL);
        mount_font_stylesheet(FONT_STYLESHEET_URL);
        assert_eq!(font_stylesheet_count(), 1);
    }
}
