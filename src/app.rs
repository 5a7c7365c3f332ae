//! Main application state.
//!
//! `App` owns the two pieces of restorable UI state: the onboarding flag
//! (modeled as the active screen) and the per-row expansion map. Both are
//! written to the injected [`StateStore`] when they change and read back
//! on construction, so the app survives a restart the way the screens
//! survive scrolling.

use crate::anim::Spring;
use crate::state::ExpansionMap;
use crate::storage::StateStore;
use crate::strings;
use std::collections::HashMap;
use tracing::{info, warn};

/// Seconds per event-loop tick; each live spring advances by this much.
pub const TICK_SECONDS: f32 = 0.016;

/// Extra padding lines under an expanded card's label once the spring has
/// settled.
pub const EXTRA_PADDING_ROWS: u16 = 2;

/// Store key for the onboarding flag.
pub const KEY_ONBOARDING_DONE: &str = "onboarding_done";

/// Store key for the JSON array of expanded row indices.
pub const KEY_EXPANDED_ROWS: &str = "expanded_rows";

/// Lines a card spends on chrome: top/bottom border plus the greeting
/// prefix and label lines.
const CARD_BASE_HEIGHT: u16 = 4;

/// Vertical lines outside the list viewport (header and keybind footer).
const LIST_CHROME_HEIGHT: u16 = 4;

/// Which screen is currently active. Exactly one renders per frame, and
/// nothing navigates back to `Onboarding` once it has been left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Onboarding,
    Greetings,
}

/// Main application state
pub struct App {
    /// Labels for the greeting list, one row per label. Row identity is
    /// positional.
    pub labels: Vec<String>,
    /// Current screen being displayed
    pub screen: Screen,
    /// Per-row expansion flags, keyed by index
    pub expansion: ExpansionMap,
    /// Live padding springs, keyed by row index; dropped once settled
    animators: HashMap<usize, Spring>,
    /// Selected row in the greeting list
    pub selected: usize,
    /// First visible row of the greeting list
    pub scroll: usize,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag; the loop only redraws when set or while animating
    pub needs_redraw: bool,
    /// Tick counter
    pub tick_count: u64,
    terminal_width: u16,
    terminal_height: u16,
    store: Box<dyn StateStore>,
}

impl App {
    /// Create a new App over `labels`, restoring any saved flags from
    /// `store`.
    pub fn new(labels: Vec<String>, store: Box<dyn StateStore>) -> Self {
        let mut app = Self {
            labels,
            screen: Screen::default(),
            expansion: ExpansionMap::new(),
            animators: HashMap::new(),
            selected: 0,
            scroll: 0,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            store,
        };
        app.restore();
        app
    }

    /// Read saved flags back from the store. Unreadable or stale values
    /// fall back to the defaults (onboarding shown, everything collapsed).
    fn restore(&mut self) {
        match self.store.get(KEY_ONBOARDING_DONE) {
            Ok(Some(value)) if value == "true" => {
                self.screen = Screen::Greetings;
                info!("restored session past onboarding");
            }
            Ok(_) => {}
            Err(e) => warn!("could not read {}: {}", KEY_ONBOARDING_DONE, e),
        }

        match self.store.get(KEY_EXPANDED_ROWS) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<usize>>(&json) {
                Ok(indices) => {
                    let row_count = self.labels.len();
                    for index in indices.into_iter().filter(|&i| i < row_count) {
                        self.expansion.set_expanded(index);
                    }
                    info!(
                        expanded = self.expansion.expanded_count(),
                        "restored expansion state"
                    );
                }
                Err(e) => warn!("discarding unreadable {}: {}", KEY_EXPANDED_ROWS, e),
            },
            Ok(None) => {}
            Err(e) => warn!("could not read {}: {}", KEY_EXPANDED_ROWS, e),
        }
    }

    /// Leave the onboarding screen. Idempotent: once on the greeting list
    /// there is no action that shows onboarding again.
    pub fn continue_to_greetings(&mut self) {
        if self.screen != Screen::Onboarding {
            return;
        }
        self.screen = Screen::Greetings;
        info!("onboarding complete");
        if let Err(e) = self.store.set(KEY_ONBOARDING_DONE, "true") {
            warn!("failed to persist {}: {}", KEY_ONBOARDING_DONE, e);
        }
        self.mark_dirty();
    }

    /// Flip row `index` between collapsed and expanded, retargeting its
    /// padding spring. Out-of-range indices are ignored.
    pub fn toggle_row(&mut self, index: usize) {
        if index >= self.labels.len() {
            return;
        }
        let expanded = self.expansion.toggle(index);
        let target = if expanded {
            EXTRA_PADDING_ROWS as f32
        } else {
            0.0
        };
        match self.animators.get_mut(&index) {
            // Toggled mid-flight: keep position, reverse direction.
            Some(spring) => spring.retarget(target),
            None => {
                let resting = if expanded {
                    0.0
                } else {
                    EXTRA_PADDING_ROWS as f32
                };
                self.animators.insert(index, Spring::new(resting, target));
            }
        }
        self.persist_expansion();
        self.mark_dirty();
    }

    /// Toggle the currently selected row.
    pub fn toggle_selected(&mut self) {
        self.toggle_row(self.selected);
    }

    fn persist_expansion(&mut self) {
        let indices = self.expansion.expanded_indices();
        match serde_json::to_string(&indices) {
            Ok(json) => {
                if let Err(e) = self.store.set(KEY_EXPANDED_ROWS, &json) {
                    warn!("failed to persist {}: {}", KEY_EXPANDED_ROWS, e);
                }
            }
            Err(e) => warn!("failed to encode expansion state: {}", e),
        }
    }

    /// Whether row `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expansion.is_expanded(index)
    }

    /// Padding lines currently shown under row `index`'s label. Follows
    /// the live spring while one exists, clamping overshoot below zero;
    /// otherwise the settled value for the row's state.
    pub fn padding_rows(&self, index: usize) -> u16 {
        match self.animators.get(&index) {
            Some(spring) => spring.value().max(0.0).round() as u16,
            None if self.is_expanded(index) => EXTRA_PADDING_ROWS,
            None => 0,
        }
    }

    /// Advance animations by one tick.
    pub fn tick(&mut self) {
        self.tick_count += 1;
        if self.animators.is_empty() {
            return;
        }
        for spring in self.animators.values_mut() {
            spring.step(TICK_SECONDS);
        }
        self.animators.retain(|_, spring| !spring.is_settled());
        self.mark_dirty();
    }

    /// Whether any padding spring is still in flight.
    pub fn has_live_animation(&self) -> bool {
        !self.animators.is_empty()
    }

    // =========================================================
    // Selection and scrolling
    // =========================================================

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.labels.len() {
            self.selected += 1;
            self.scroll_selected_into_view();
            self.mark_dirty();
        }
    }

    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
            self.scroll_selected_into_view();
            self.mark_dirty();
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
        self.scroll_selected_into_view();
        self.mark_dirty();
    }

    pub fn select_last(&mut self) {
        self.selected = self.labels.len().saturating_sub(1);
        self.scroll_selected_into_view();
        self.mark_dirty();
    }

    pub fn page_down(&mut self) {
        let jump = self.rows_per_page().max(1);
        self.selected = (self.selected + jump).min(self.labels.len().saturating_sub(1));
        self.scroll_selected_into_view();
        self.mark_dirty();
    }

    pub fn page_up(&mut self) {
        let jump = self.rows_per_page().max(1);
        self.selected = self.selected.saturating_sub(jump);
        self.scroll_selected_into_view();
        self.mark_dirty();
    }

    /// Update app state with new terminal dimensions.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.scroll_selected_into_view();
        self.mark_dirty();
    }

    /// Height of the list viewport in terminal lines.
    pub fn list_viewport_height(&self) -> u16 {
        self.terminal_height.saturating_sub(LIST_CHROME_HEIGHT)
    }

    /// Collapsed cards that fit one viewport; used as the paging stride.
    fn rows_per_page(&self) -> usize {
        (self.list_viewport_height() / CARD_BASE_HEIGHT) as usize
    }

    /// Rendered height of row `index` at the current terminal width,
    /// including borders, animated padding, and any filler text.
    pub fn row_height(&self, index: usize) -> u16 {
        let mut height = CARD_BASE_HEIGHT + self.padding_rows(index);
        if self.is_expanded(index) {
            height += self.filler_height();
        }
        height
    }

    /// Lines the wrapped filler paragraph occupies at the current width.
    fn filler_height(&self) -> u16 {
        let inner_width = self.terminal_width.saturating_sub(4).max(1) as usize;
        strings::filler_text().len().div_ceil(inner_width) as u16
    }

    /// Adjust `scroll` so the selected row is fully inside the viewport.
    fn scroll_selected_into_view(&mut self) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
            return;
        }
        let viewport = self.list_viewport_height();
        loop {
            let mut used = 0u16;
            for index in self.scroll..=self.selected {
                used = used.saturating_add(self.row_height(index));
            }
            if used <= viewport || self.scroll >= self.selected {
                break;
            }
            self.scroll += 1;
        }
    }

    /// Signal that the application should quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Read-only view of the saved-state store.
    pub fn store(&self) -> &dyn StateStore {
        self.store.as_ref()
    }
}
