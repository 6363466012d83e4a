use crate::cursor::CursorBuffer;
use crate::storage::NoteSummary;

/// Title filter of the note list.
#[derive(Clone, Debug, Default)]
pub enum FilterState {
    #[default]
    Off,
    /// The user is typing the filter; escape cancels it instead of leaving the list.
    Editing(CursorBuffer),
    Applied(String),
}

/// Display-ready notes with a selection and an optional title filter.
///
/// The selection indexes into [`NoteList::visible`], not into the full item list.
#[derive(Clone, Debug)]
pub struct NoteList {
    items: Vec<NoteSummary>,
    selected: usize,
    filter: FilterState,
    page_size: usize,
}

impl Default for NoteList {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteList {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            selected: 0,
            filter: FilterState::Off,
            page_size: 1,
        }
    }

    /// Fresh listing: selection back to the top, filter dropped.
    pub fn replace(&mut self, items: Vec<NoteSummary>) {
        self.items = items;
        self.selected = 0;
        self.filter = FilterState::Off;
    }

    /// Re-listing after a change: keeps the filter and the selection position where possible.
    pub fn refresh(&mut self, items: Vec<NoteSummary>) {
        self.items = items;
        self.clamp_selection();
    }

    #[must_use]
    pub fn items(&self) -> &[NoteSummary] {
        &self.items
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&NoteSummary> {
        match self.filter_text() {
            Some(query) if !query.is_empty() => {
                let query = query.to_lowercase();
                self.items
                    .iter()
                    .filter(|n| n.title.to_lowercase().contains(&query))
                    .collect()
            }
            _ => self.items.iter().collect(),
        }
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected(&self) -> Option<&NoteSummary> {
        self.visible().get(self.selected).copied()
    }

    #[must_use]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    #[must_use]
    pub fn filter_text(&self) -> Option<&str> {
        match &self.filter {
            FilterState::Off => None,
            FilterState::Editing(buffer) => Some(buffer.content()),
            FilterState::Applied(query) => Some(query),
        }
    }

    #[must_use]
    pub fn is_filtering(&self) -> bool {
        matches!(self.filter, FilterState::Editing(_))
    }

    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    fn clamp_selection(&mut self) {
        let count = self.visible().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.selected += 1;
        self.clamp_selection();
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(self.page_size);
    }

    pub fn page_down(&mut self) {
        self.selected += self.page_size;
        self.clamp_selection();
    }

    pub fn jump_to_first(&mut self) {
        self.selected = 0;
    }

    pub fn jump_to_last(&mut self) {
        self.selected = self.visible().len().saturating_sub(1);
    }

    /// Starts editing the filter, seeded with any applied query.
    pub fn start_filter(&mut self) {
        let seed = match &self.filter {
            FilterState::Applied(query) => CursorBuffer::new(query.clone()),
            _ => CursorBuffer::empty(),
        };
        self.filter = FilterState::Editing(seed);
        self.clamp_selection();
    }

    /// Mutable access to the filter text while it is being edited.
    pub fn filter_buffer_mut(&mut self) -> Option<&mut CursorBuffer> {
        match &mut self.filter {
            FilterState::Editing(buffer) => Some(buffer),
            _ => None,
        }
    }

    /// Call after editing the filter buffer so the selection stays on a visible item.
    pub fn filter_changed(&mut self) {
        self.selected = 0;
        self.clamp_selection();
    }

    pub fn apply_filter(&mut self) {
        if let FilterState::Editing(buffer) = &self.filter {
            self.filter = if buffer.is_empty() {
                FilterState::Off
            } else {
                FilterState::Applied(buffer.content().to_string())
            };
        }
        self.clamp_selection();
    }

    pub fn cancel_filter(&mut self) {
        self.filter = FilterState::Off;
        self.clamp_selection();
    }
}
