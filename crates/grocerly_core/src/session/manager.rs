//! List Manager: applies transition steps to real collaborators.
//!
//! # Responsibility
//! - Own the session collaborators (repository, surface, sink) and the
//!   in-memory collection plus session mode.
//! - Apply steps persist-first so a storage failure changes nothing
//!   observable.
//!
//! # Invariants
//! - After every `Ok(())` the surface rows mirror the persisted collection
//!   one-to-one, in order.
//! - Validation and reference failures are session-internal; only storage
//!   failures surface as `Err`.

use crate::model::item::{Item, ItemId};
use crate::notify::NotificationSink;
use crate::render::{reconcile, RenderSurface};
use crate::repo::list_repo::{CollectionRepository, RepoResult};
use crate::session::state::SessionState;
use crate::session::transition::{self, Persist, Step};
use log::{debug, info};

/// Single-session orchestrator over the collection and its mirrors.
pub struct ListManager<R, U, N>
where
    R: CollectionRepository,
    U: RenderSurface,
    N: NotificationSink,
{
    repo: R,
    surface: U,
    sink: N,
    items: Vec<Item>,
    state: SessionState,
}

impl<R, U, N> ListManager<R, U, N>
where
    R: CollectionRepository,
    U: RenderSurface,
    N: NotificationSink,
{
    /// Creates a manager in default mode with an empty collection.
    ///
    /// Call [`start`](Self::start) to load persisted items before handling
    /// events.
    pub fn new(repo: R, surface: U, sink: N) -> Self {
        Self {
            repo,
            surface,
            sink,
            items: Vec::new(),
            state: SessionState::default(),
        }
    }

    /// Loads the persisted collection and renders it, in stored order.
    ///
    /// Safe to call again: the surface is reset first, so the persisted
    /// collection alone determines the rendered rows.
    pub fn start(&mut self) -> RepoResult<()> {
        let items = self.repo.load()?;
        info!(
            "event=session_load module=session status=ok count={}",
            items.len()
        );

        self.items = items;
        self.state = SessionState::default();
        reconcile(&mut self.surface, &self.items);
        self.surface.set_input("");
        self.surface.set_control(self.state.control_label());
        Ok(())
    }

    /// Primary-control submission: add in default mode, commit while
    /// editing.
    pub fn submit(&mut self, text: &str) -> RepoResult<()> {
        let step = transition::submit(self.state, &self.items, text);
        let event = if self.state.is_editing() {
            "item_update"
        } else {
            "item_add"
        };
        self.apply(event, step)
    }

    /// Enters edit mode for `target_id`; unknown ids are ignored.
    pub fn begin_edit(&mut self, target_id: ItemId) -> RepoResult<()> {
        let step = transition::begin_edit(self.state, &self.items, target_id);
        self.apply("item_edit_begin", step)
    }

    /// Deletes one item by id; unknown ids are ignored.
    pub fn delete(&mut self, target_id: ItemId) -> RepoResult<()> {
        let step = transition::delete(self.state, &self.items, target_id);
        self.apply("item_delete", step)
    }

    /// Empties the collection and removes the persisted slot.
    pub fn clear_all(&mut self) -> RepoResult<()> {
        self.apply("list_clear", transition::clear_all())
    }

    /// Collection snapshot, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }

    /// Persist first, then adopt the step and refresh the mirrors.
    fn apply(&mut self, event: &str, step: Step) -> RepoResult<()> {
        match step.persist {
            Persist::None => {}
            Persist::Save => self.repo.save(&step.items)?,
            Persist::Reset => self.repo.clear()?,
        }

        let changed = step.items != self.items || step.state != self.state;
        self.items = step.items;
        self.state = step.state;

        reconcile(&mut self.surface, &self.items);
        if let Some(input) = &step.input {
            self.surface.set_input(input);
        }
        self.surface.set_control(self.state.control_label());

        if let Some(notice) = step.notice {
            self.sink.notify(notice);
        }

        if changed {
            info!(
                "event={event} module=session status=ok count={} editing={}",
                self.items.len(),
                self.state.is_editing()
            );
        } else {
            debug!("event={event} module=session status=noop");
        }
        Ok(())
    }
}
