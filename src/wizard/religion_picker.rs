//! Religion selection step.
//!
//! The picker shows the featured religions, reports a choice to its host
//! right away and advances the wizard once the deferred advance fires. Its
//! only state is the keyboard cursor and the pending timer; dropping the
//! picker cancels the timer.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::catalog::{Catalog, Religion};
use crate::deferred::{AdvanceTicket, DeferredAdvance};
use crate::log;
use crate::picker::Picker;

use super::SelectionHost;

/// Controller for the religion step.
#[derive(Debug)]
pub struct ReligionPicker {
    catalog: Arc<Catalog>,
    options: Vec<Religion>,
    cursor: usize,
    columns: usize,
    advance: DeferredAdvance,
    reselect_advances: bool,
}

impl ReligionPicker {
    /// Mount the picker. `current` places the cursor on an existing choice.
    pub fn new(
        catalog: Arc<Catalog>,
        current: Option<&str>,
        delay: Duration,
        advance_tx: mpsc::UnboundedSender<AdvanceTicket>,
    ) -> Self {
        let options: Vec<Religion> = catalog.featured().into_iter().cloned().collect();
        let cursor = current
            .and_then(|id| options.iter().position(|r| r.id == id))
            .unwrap_or(0);

        Self {
            catalog,
            options,
            cursor,
            columns: 1,
            advance: DeferredAdvance::new(delay, advance_tx),
            reselect_advances: true,
        }
    }

    pub fn with_reselect_advances(mut self, reselect_advances: bool) -> Self {
        self.reselect_advances = reselect_advances;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The options on screen, in curated order.
    pub fn options(&self) -> &[Religion] {
        &self.options
    }

    /// Cards per row in the last rendered layout.
    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = columns.max(1);
    }

    pub fn advance_pending(&self) -> bool {
        self.advance.is_pending()
    }

    /// Handle a click on `id`: report it to the host, then schedule the
    /// advance. A click while an advance is pending restarts the timer.
    ///
    /// With `reselect_advances` off, clicking the option that is already
    /// `current` does nothing.
    pub fn select(&mut self, id: &str, current: Option<&str>, host: &mut impl SelectionHost) {
        if !self.reselect_advances && current == Some(id) {
            log::log_event(&format!("reselect of {} ignored", id));
            return;
        }

        if let Some(index) = self.options.iter().position(|r| r.id == id) {
            self.cursor = index;
        }

        host.on_select(id);
        self.advance.schedule();
    }

    /// Select the highlighted card.
    pub fn select_highlighted(&mut self, current: Option<&str>, host: &mut impl SelectionHost) {
        if let Some(id) = self.highlighted().map(|r| r.id.clone()) {
            self.select(&id, current, host);
        }
    }

    /// Select the card shown with `number` (1-based).
    pub fn select_number(
        &mut self,
        number: usize,
        current: Option<&str>,
        host: &mut impl SelectionHost,
    ) {
        let id = number
            .checked_sub(1)
            .and_then(|i| self.options.get(i))
            .map(|r| r.id.clone());
        if let Some(id) = id {
            self.select(&id, current, host);
        }
    }

    /// Deliver a fired timer. Calls `on_next` once if the ticket belongs to
    /// the pending advance.
    pub fn on_advance(&mut self, ticket: AdvanceTicket, host: &mut impl SelectionHost) -> bool {
        if !self.advance.claim(ticket) {
            return false;
        }
        host.on_next();
        true
    }

    pub fn cursor_up(&mut self) {
        self.cursor_jump(-(self.columns() as isize));
    }

    pub fn cursor_down(&mut self) {
        self.cursor_jump(self.columns() as isize);
    }
}

impl Picker for ReligionPicker {
    type Item = Religion;

    fn items(&self) -> &[Religion] {
        &self.options
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_symbols;

    const DELAY: Duration = Duration::from_millis(300);

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Select(String),
        Next,
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl SelectionHost for Recorder {
        fn on_select(&mut self, id: &str) {
            self.calls.push(Call::Select(id.to_string()));
        }

        fn on_next(&mut self) {
            self.calls.push(Call::Next);
        }
    }

    fn picker() -> (ReligionPicker, mpsc::UnboundedReceiver<AdvanceTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let picker = ReligionPicker::new(Arc::new(Catalog::builtin()), None, DELAY, tx);
        (picker, rx)
    }

    /// Deliver every queued ticket, as the event loop would.
    fn drain(
        picker: &mut ReligionPicker,
        rx: &mut mpsc::UnboundedReceiver<AdvanceTicket>,
        host: &mut Recorder,
    ) {
        while let Ok(ticket) = rx.try_recv() {
            picker.on_advance(ticket, host);
        }
    }

    #[test]
    fn test_options_follow_curated_order() {
        let catalog = Catalog::new(
            vec![
                Religion::new("buddhist", "Buddhist"),
                Religion::new("other", "Other"),
                Religion::new("christian", "Christian"),
                Religion::new("jain", "Jain"),
                Religion::new("parsi", "Parsi"),
                Religion::new("sikh", "Sikh"),
                Religion::new("muslim", "Muslim"),
                Religion::new("hindu", "Hindu"),
            ],
            ["hindu", "muslim", "sikh", "jain", "christian", "other"]
                .iter()
                .map(|id| id.to_string())
                .collect(),
            builtin_symbols(),
        )
        .unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();
        let picker = ReligionPicker::new(Arc::new(catalog), None, DELAY, tx);

        let ids: Vec<&str> = picker.options().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["hindu", "muslim", "sikh", "jain", "christian", "other"]);
    }

    #[test]
    fn test_cursor_starts_on_current_choice() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let picker = ReligionPicker::new(Arc::new(Catalog::builtin()), Some("jain"), DELAY, tx);
        assert_eq!(picker.highlighted().map(|r| r.id.as_str()), Some("jain"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_selects_then_advances_once() {
        let (mut picker, mut rx) = picker();
        let mut host = Recorder::default();

        picker.select("muslim", None, &mut host);
        assert_eq!(host.calls, vec![Call::Select("muslim".into())]);
        assert!(picker.advance_pending());

        tokio::time::sleep(Duration::from_millis(299)).await;
        drain(&mut picker, &mut rx, &mut host);
        assert_eq!(host.calls.len(), 1);

        tokio::time::sleep(Duration::from_millis(2)).await;
        drain(&mut picker, &mut rx, &mut host);
        assert_eq!(host.calls, vec![Call::Select("muslim".into()), Call::Next]);

        tokio::time::sleep(Duration::from_secs(5)).await;
        drain(&mut picker, &mut rx, &mut host);
        assert_eq!(host.calls.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_clicks_advance_once() {
        let (mut picker, mut rx) = picker();
        let mut host = Recorder::default();

        picker.select("hindu", None, &mut host);
        tokio::time::sleep(Duration::from_millis(100)).await;
        picker.select("sikh", Some("hindu"), &mut host);

        tokio::time::sleep(Duration::from_secs(1)).await;
        drain(&mut picker, &mut rx, &mut host);
        assert_eq!(
            host.calls,
            vec![
                Call::Select("hindu".into()),
                Call::Select("sikh".into()),
                Call::Next
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reselect_retriggers_by_default() {
        let (mut picker, mut rx) = picker();
        let mut host = Recorder::default();

        picker.select("jain", Some("jain"), &mut host);
        tokio::time::sleep(Duration::from_secs(1)).await;
        drain(&mut picker, &mut rx, &mut host);
        assert_eq!(host.calls, vec![Call::Select("jain".into()), Call::Next]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reselect_ignored_when_disabled() {
        let (picker, mut rx) = picker();
        let mut picker = picker.with_reselect_advances(false);
        let mut host = Recorder::default();

        picker.select("jain", Some("jain"), &mut host);
        assert!(!picker.advance_pending());
        tokio::time::sleep(Duration::from_secs(1)).await;
        drain(&mut picker, &mut rx, &mut host);
        assert!(host.calls.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_cancels_advance() {
        let (mut picker, mut rx) = picker();
        let mut host = Recorder::default();

        picker.select("christian", None, &mut host);
        drop(picker);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(host.calls, vec![Call::Select("christian".into())]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_number_and_highlight_selection() {
        let (mut picker, _rx) = picker();
        let mut host = Recorder::default();

        picker.select_number(3, None, &mut host);
        picker.select_number(0, None, &mut host);
        picker.select_number(7, None, &mut host);
        assert_eq!(host.calls, vec![Call::Select("sikh".into())]);

        picker.cursor_next();
        picker.select_highlighted(Some("sikh"), &mut host);
        assert_eq!(host.calls.last(), Some(&Call::Select("jain".into())));
    }

    #[test]
    fn test_vertical_moves_use_columns() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut picker = ReligionPicker::new(Arc::new(Catalog::builtin()), None, DELAY, tx);
        picker.set_columns(3);
        picker.cursor_down();
        assert_eq!(picker.cursor(), 3);
        picker.cursor_down();
        assert_eq!(picker.cursor(), 3);
        picker.cursor_up();
        assert_eq!(picker.cursor(), 0);
    }
}
