//! Action dispatch — confirmed gestures to URL launches.
//!
//! Each confirmed gesture is looked up in the action map exactly once; an
//! unbound gesture is skipped.  URL opening goes through the `UrlOpener`
//! seam so the dispatcher can be exercised without touching the system.

use std::process::Command;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::gesture::GestureEvent;
use crate::mapping::ActionMap;

/// Opens a URL on behalf of the dispatcher.
pub trait UrlOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Opens URLs through the platform handler.
#[derive(Debug, Default)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        Command::new("xdg-open")
            .arg(url)
            .spawn()
            .with_context(|| format!("launching xdg-open for {url}"))?;
        Ok(())
    }
}

/// Logs the launch instead of performing it (`--dry-run`).
#[derive(Debug, Default)]
pub struct DryRunOpener;

impl UrlOpener for DryRunOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        info!(url, "dry run: would open");
        Ok(())
    }
}

/// Routes confirmed gestures to their bound URLs.
pub struct Dispatcher {
    map: ActionMap,
    opener: Box<dyn UrlOpener>,
}

impl Dispatcher {
    pub fn new(map: ActionMap, opener: Box<dyn UrlOpener>) -> Self {
        Self { map, opener }
    }

    /// Dispatch one confirmed gesture.  Unbound gestures are a no-op.
    pub fn dispatch(&mut self, event: &GestureEvent) -> Result<()> {
        match self.map.url_for(event.kind) {
            Some(url) => {
                info!(
                    gesture = event.kind.as_str(),
                    url,
                    frame = event.frame,
                    "opening url"
                );
                self.opener.open(url)
            }
            None => {
                debug!(gesture = event.kind.as_str(), "no url bound, skipping");
                Ok(())
            }
        }
    }
}

// ── Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gesture::GestureKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records opened URLs for inspection.
    struct RecordingOpener {
        opened: Rc<RefCell<Vec<String>>>,
    }

    impl UrlOpener for RecordingOpener {
        fn open(&mut self, url: &str) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn recording_dispatcher(map: ActionMap) -> (Dispatcher, Rc<RefCell<Vec<String>>>) {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let opener = RecordingOpener {
            opened: Rc::clone(&opened),
        };
        (Dispatcher::new(map, Box::new(opener)), opened)
    }

    #[test]
    fn test_bound_gesture_opens_url() {
        let mut map = ActionMap::new();
        map.bind(GestureKind::OpenHand, "https://example.org".into());
        let (mut dispatcher, opened) = recording_dispatcher(map);

        dispatcher
            .dispatch(&GestureEvent {
                kind: GestureKind::OpenHand,
                frame: 29,
            })
            .unwrap();

        assert_eq!(*opened.borrow(), vec!["https://example.org".to_string()]);
    }

    #[test]
    fn test_unbound_gesture_is_skipped() {
        let mut map = ActionMap::new();
        map.bind(GestureKind::OpenHand, "https://example.org".into());
        let (mut dispatcher, opened) = recording_dispatcher(map);

        dispatcher
            .dispatch(&GestureEvent {
                kind: GestureKind::Victory,
                frame: 0,
            })
            .unwrap();

        assert!(opened.borrow().is_empty());
    }

    #[test]
    fn test_each_event_dispatches_once() {
        let mut map = ActionMap::new();
        map.bind(GestureKind::Pinch, "https://example.net".into());
        let (mut dispatcher, opened) = recording_dispatcher(map);

        for frame in [29, 75] {
            dispatcher
                .dispatch(&GestureEvent {
                    kind: GestureKind::Pinch,
                    frame,
                })
                .unwrap();
        }

        assert_eq!(opened.borrow().len(), 2);
    }
}
