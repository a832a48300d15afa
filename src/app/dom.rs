//! Browser surface and page entry point.
//!
//! Binds to the markup served with the backend: `#activities-list`,
//! `#activity` (select), `#signup-form`, `#email`, `#message` and the
//! `#activity-template` card template.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, DocumentFragment, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, HtmlTemplateElement,
};

use super::{ActivityBoard, BoardSurface};
use crate::client::gloo::WasmClient;
use crate::config::BoardConfig;
use crate::error::{ErrorKind, Result};
use crate::interface::HttpClient;
use crate::view::{
    ActivityCard, BoardView, ParticipantList, ParticipantRow, SelectOption, StatusMessage,
    DELETE_GLYPH, NO_PARTICIPANTS,
};

/// Called with `(activity, identity)` when a delete button is clicked.
pub type RemoveHandler = Rc<dyn Fn(String, String)>;

type Listener = Closure<dyn FnMut(Event)>;
type DomResult<T> = core::result::Result<T, JsValue>;

pub struct DomSurface {
    document: Document,
    list: Element,
    select: HtmlSelectElement,
    form: HtmlFormElement,
    email: HtmlInputElement,
    message: Element,
    template: HtmlTemplateElement,
    on_remove: RefCell<Option<RemoveHandler>>,
    // Delete listeners of the current render; replaced on every pass.
    row_listeners: RefCell<Vec<Listener>>,
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| ErrorKind::DomError(format!("missing #{id}")))?
        .dyn_into::<T>()
        .map_err(|_| ErrorKind::DomError(format!("#{id} has an unexpected element type")).into())
}

impl DomSurface {
    pub fn from_document() -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ErrorKind::DomError("no document".to_string()))?;

        Ok(Self {
            list: element_by_id(&document, "activities-list")?,
            select: element_by_id(&document, "activity")?,
            form: element_by_id(&document, "signup-form")?,
            email: element_by_id(&document, "email")?,
            message: element_by_id(&document, "message")?,
            template: element_by_id(&document, "activity-template")?,
            document,
            on_remove: RefCell::new(None),
            row_listeners: RefCell::new(Vec::new()),
        })
    }

    pub fn set_remove_handler(&self, handler: RemoveHandler) {
        *self.on_remove.borrow_mut() = Some(handler);
    }

    /// Current `(email, activity)` form values
    pub fn form_values(&self) -> (String, String) {
        (self.email.value(), self.select.value())
    }

    fn fill_text(fragment: &DocumentFragment, selector: &str, text: &str) -> DomResult<()> {
        if let Some(el) = fragment.query_selector(selector)? {
            el.set_text_content(Some(text));
        }
        Ok(())
    }

    fn meta_line(&self, card: &ActivityCard) -> DomResult<Vec<web_sys::Node>> {
        let schedule_label = self.document.create_element("strong")?;
        schedule_label.set_text_content(Some("Schedule:"));
        let availability_label = self.document.create_element("strong")?;
        availability_label.set_text_content(Some("Availability:"));

        Ok(vec![
            schedule_label.into(),
            self.document
                .create_text_node(&format!(" {} · ", card.schedule))
                .into(),
            availability_label.into(),
            self.document
                .create_text_node(&format!(" {} spots left", card.spots_left))
                .into(),
        ])
    }

    fn participant_item(&self, row: &ParticipantRow) -> DomResult<Element> {
        let li = self.document.create_element("li")?;

        let badge = self.document.create_element("span")?;
        badge.set_class_name("participant-badge");
        badge.set_text_content(Some(&row.initials));
        li.append_child(&badge)?;

        let name = self.document.create_element("span")?;
        name.set_class_name("participant-name");
        name.set_text_content(Some(&row.identity));
        li.append_child(&name)?;

        let button = self.document.create_element("button")?;
        button.set_class_name("participant-delete");
        button.set_attribute("aria-label", &row.delete_label())?;
        button.set_attribute("title", &row.delete_title())?;
        button.set_text_content(Some(DELETE_GLYPH));

        if let Some(handler) = self.on_remove.borrow().clone() {
            let activity = row.activity.clone();
            let identity = row.identity.clone();
            let listener = Listener::new(move |ev: Event| {
                ev.prevent_default();
                handler(activity.clone(), identity.clone());
            });
            button.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
            self.row_listeners.borrow_mut().push(listener);
        }

        li.append_child(&button)?;
        Ok(li)
    }

    fn participants(&self, list: &Element, participants: &ParticipantList) -> DomResult<()> {
        list.set_inner_html("");
        match participants {
            ParticipantList::Placeholder => {
                let li = self.document.create_element("li")?.dyn_into::<HtmlElement>()?;
                li.set_text_content(Some(NO_PARTICIPANTS));
                li.style().set_property("font-style", "italic")?;
                list.append_child(&li)?;
            }
            ParticipantList::Rows(rows) => {
                for row in rows {
                    let li = self.participant_item(row)?;
                    list.append_child(&li)?;
                }
            }
        }
        Ok(())
    }

    fn card(&self, card: &ActivityCard) -> DomResult<DocumentFragment> {
        let fragment = self
            .template
            .content()
            .clone_node_with_deep(true)?
            .dyn_into::<DocumentFragment>()?;

        Self::fill_text(&fragment, ".activity-title", &card.title)?;
        Self::fill_text(&fragment, ".activity-desc", &card.description)?;

        if let Some(meta) = fragment.query_selector(".activity-meta")? {
            meta.set_inner_html("");
            for node in self.meta_line(card)? {
                meta.append_child(&node)?;
            }
        }

        if let Some(list) = fragment.query_selector(".participants-list")? {
            self.participants(&list, &card.participants)?;
        }

        Ok(fragment)
    }

    fn option(&self, option: &SelectOption) -> DomResult<Element> {
        let el = self.document.create_element("option")?;
        el.set_attribute("value", &option.value)?;
        el.set_text_content(Some(&option.label));
        Ok(el)
    }

    fn try_render_board(&self, view: &BoardView) -> DomResult<()> {
        self.list.set_inner_html("");
        self.select.set_inner_html("");
        self.row_listeners.borrow_mut().clear();

        for card in &view.cards {
            let fragment = self.card(card)?;
            self.list.append_child(&fragment)?;
        }
        for option in &view.options {
            let el = self.option(option)?;
            self.select.append_child(&el)?;
        }
        Ok(())
    }
}

impl BoardSurface for DomSurface {
    fn render_board(&self, view: &BoardView) {
        if let Err(e) = self.try_render_board(view) {
            log::error!("Error rendering activities: {e:?}");
        }
    }

    fn render_load_error(&self, text: &str) {
        self.list.set_inner_html("");
        self.row_listeners.borrow_mut().clear();
        let appended = self.document.create_element("p").and_then(|p| {
            p.set_text_content(Some(text));
            self.list.append_child(&p)
        });
        if let Err(e) = appended {
            log::error!("Error rendering load failure: {e:?}");
        }
    }

    fn show_message(&self, message: &StatusMessage, hide_after: Duration) {
        self.message.set_text_content(Some(&message.text));
        self.message.set_class_name(message.kind.class_name());

        // Earlier timers are left running, same as the page script did.
        let target = self.message.clone();
        let millis = u32::try_from(hide_after.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, move || {
            let _ = target.class_list().add_1("hidden");
        })
        .forget();
    }

    fn reset_form(&self) {
        self.form.reset();
    }
}

/// Build the board against the current page and draw it once.
pub async fn mount() -> Result<Rc<ActivityBoard<WasmClient, DomSurface>>> {
    let config = BoardConfig::same_origin();
    let surface = DomSurface::from_document()?;
    let client = WasmClient::new(&config).await?;
    let board = Rc::new(ActivityBoard::with_config(client, surface, &config));

    let weak = Rc::downgrade(&board);
    board
        .surface()
        .set_remove_handler(Rc::new(move |activity: String, email: String| {
            if let Some(board) = weak.upgrade() {
                spawn_local(async move {
                    board.remove_participant(&activity, &email).await;
                });
            }
        }));

    let submit_board = Rc::clone(&board);
    let on_submit = Listener::new(move |ev: Event| {
        ev.prevent_default();
        let board = Rc::clone(&submit_board);
        spawn_local(async move {
            let (email, activity) = board.surface().form_values();
            board.submit_signup(&email, &activity).await;
        });
    });
    board
        .surface()
        .form
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    // The form lives as long as the page.
    on_submit.forget();

    board.initialize().await;
    Ok(board)
}

#[wasm_bindgen(start)]
pub fn start() {
    crate::logging::init_logging();
    spawn_local(async {
        if let Err(e) = mount().await {
            log::error!("Failed to start activity board: {e}");
        }
    });
}
