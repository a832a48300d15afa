//! Terminal surface for the native client.
//!
//! Writes the board as plain text. A printed line cannot be taken back, so the
//! message area is modelled as the last message plus its expiry.

use std::cell::RefCell;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use super::BoardSurface;
use crate::view::{BoardView, ParticipantList, StatusMessage, DELETE_GLYPH, NO_PARTICIPANTS};

pub struct TerminalSurface<W: Write> {
    out: RefCell<W>,
    message: RefCell<Option<(StatusMessage, Instant)>>,
}

impl TerminalSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
            message: RefCell::new(None),
        }
    }

    /// The message still inside its display window, if any.
    pub fn visible_message(&self) -> Option<StatusMessage> {
        self.visible_message_at(Instant::now())
    }

    fn visible_message_at(&self, now: Instant) -> Option<StatusMessage> {
        self.message
            .borrow()
            .as_ref()
            .filter(|(_, hide_at)| now < *hide_at)
            .map(|(message, _)| message.clone())
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    fn write_board(out: &mut W, view: &BoardView) -> io::Result<()> {
        for card in &view.cards {
            writeln!(out, "== {}", card.title)?;
            if !card.description.is_empty() {
                writeln!(out, "   {}", card.description)?;
            }
            writeln!(out, "   {}", card.meta_line())?;
            match &card.participants {
                ParticipantList::Placeholder => writeln!(out, "   - {NO_PARTICIPANTS}")?,
                ParticipantList::Rows(rows) => {
                    for row in rows {
                        writeln!(out, "   - [{:<2}] {}  ({DELETE_GLYPH})", row.initials, row.identity)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn emit(&self, f: impl FnOnce(&mut W) -> io::Result<()>) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = f(&mut *out).and_then(|_| out.flush()) {
            log::error!("Failed to write to terminal: {e}");
        }
    }
}

impl<W: Write> BoardSurface for TerminalSurface<W> {
    fn render_board(&self, view: &BoardView) {
        self.emit(|out| Self::write_board(out, view));
    }

    fn render_load_error(&self, text: &str) {
        self.emit(|out| writeln!(out, "{text}"));
    }

    fn show_message(&self, message: &StatusMessage, hide_after: Duration) {
        self.emit(|out| writeln!(out, "[{}] {}", message.kind.class_name(), message.text));
        *self.message.borrow_mut() = Some((message.clone(), Instant::now() + hide_after));
    }

    fn reset_form(&self) {
        // No form state is kept between commands.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structs::ActivityCatalog;
    use serde_json::json;

    fn rendered(view: &BoardView) -> String {
        let surface = TerminalSurface::new(Vec::new());
        surface.render_board(view);
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn board_text() {
        let catalog = ActivityCatalog::from_value(json!({
            "Gym Class": {
                "description": "Physical education",
                "schedule": "Mondays",
                "max_participants": 30,
                "participants": ["john.smith@mergington.edu"]
            },
            "Art Studio": {"max_participants": 5}
        }))
        .unwrap();
        let text = rendered(&BoardView::from_catalog(&catalog));

        assert_eq!(
            text,
            "== Gym Class\n   Physical education\n   Schedule: Mondays · Availability: 29 spots left\n   - [JS] john.smith@mergington.edu  (×)\n\
             == Art Studio\n   Schedule: TBA · Availability: 5 spots left\n   - No participants yet\n"
        );
    }

    #[test]
    fn message_expires() {
        let surface = TerminalSurface::new(Vec::new());
        surface.show_message(&StatusMessage::error("Activity full"), Duration::from_secs(5));

        let now = Instant::now();
        assert_eq!(
            surface.visible_message_at(now),
            Some(StatusMessage::error("Activity full"))
        );
        assert_eq!(surface.visible_message_at(now + Duration::from_secs(6)), None);

        let text = String::from_utf8(surface.into_inner()).unwrap();
        assert_eq!(text, "[error] Activity full\n");
    }
}
