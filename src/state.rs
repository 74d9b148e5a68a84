use super::*;

pub(crate) struct State {
  error: Option<String>,
  help: HelpView,
  in_flight: HashSet<String>,
  list_height: usize,
  message: String,
  pending_effects: Vec<Effect>,
  results: ResultsCache,
  search_input: Option<SearchInput>,
  search_key: String,
  search_term: String,
  table: TableView,
  transient_message: Option<TransientMessage>,
}

impl State {
  fn cancel_search(&mut self) {
    if let Some(input) = self.search_input.take() {
      self.message = input.message_backup;
      self.search_term = input.term_backup;
    }
  }

  fn dismiss_selected(&mut self) {
    let Some(hit) = self.selected_hit() else {
      return;
    };

    let (id, title) =
      (hit.object_id.clone(), truncate(hit.display_title(), 40));

    let key = self.search_key.clone();

    if !self.remove_item(&key, &id) {
      return;
    }

    log::debug!("dismissed {id} from {key:?}");

    let len = self.row_count();

    self.table.select(self.table.selected_raw(), len);

    if self.status_is_free() {
      self.set_transient_message(format!("Dismissed \"{title}\""));
    }
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> CommandDispatch {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::StartSearch => self.start_search(),
      Command::CancelSearch => self.cancel_search(),
      Command::SubmitSearch => self.submit_search(),
      Command::SelectNext => self.select_next(),
      Command::SelectPrevious => self.select_previous(),
      Command::PageDown => self.page_down(),
      Command::PageUp => self.page_up(),
      Command::SelectFirst => self.select_index(0),
      Command::SelectLast => self.select_index(usize::MAX),
      Command::Sort(key) => self.table.sort_by(key),
      Command::ResetSort => self.table.reset_sort(),
      Command::Dismiss => self.dismiss_selected(),
      Command::LoadMore => self.load_more(),
      Command::OpenSelected => self.open_selected(),
      Command::None => {}
    }

    CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    }
  }

  pub(crate) fn error(&self) -> Option<&str> {
    self.error.as_deref()
  }

  fn fetch_page(&mut self, query: String, page: usize) {
    self.in_flight.insert(query.clone());

    if self.status_is_free() {
      self.message = if page == 0 {
        Self::searching_status(&query)
      } else {
        LOADING_MORE_STATUS.into()
      };
    }

    log::debug!("fetching page {page} of {query:?}");

    self.pending_effects.push(Effect::FetchPage { page, query });
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Page {
        page,
        query,
        result,
      } => {
        self.in_flight.remove(&query);

        match result {
          Ok(response) => {
            log::info!(
              "page {} of {query:?}: {} hits",
              response.page,
              response.hits.len()
            );

            if query == self.search_key {
              self.error = None;
            }

            self.merge_page(
              &query,
              response.hits,
              response.page,
              response.nb_pages,
            );

            if query == self.search_key {
              let status = self.results_status();

              self.set_status(status);
            }
          }
          Err(error) => {
            log::warn!("could not fetch page {page} of {query:?}: {error:#}");

            self.error = Some(format!("{error:#}"));

            self.set_status(TABLE_STATUS.into());

            if self.status_is_free() {
              self.set_transient_message(format!("Could not search: {error}"));
            }
          }
        }
      }
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) -> Command {
    if self.search_input.is_none() {
      return Command::None;
    }

    match key.code {
      KeyCode::Esc => Command::CancelSearch,
      KeyCode::Enter => Command::SubmitSearch,
      KeyCode::Backspace => {
        self.search_term.pop();
        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if !(modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER))
        {
          self.search_term.push(ch);
        }

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn is_editing(&self) -> bool {
    self.search_input.is_some()
  }

  /// Whether a page for the active key is still on its way.
  pub(crate) fn is_loading(&self) -> bool {
    self.in_flight.contains(&self.search_key)
  }

  fn load_more(&mut self) {
    if self.search_key.is_empty() || self.is_loading() {
      return;
    }

    let (has_more, page) = self
      .results
      .get(&self.search_key)
      .map_or((true, 0), |result| (result.has_more(), result.next_page()));

    if !has_more {
      if self.status_is_free() {
        self.set_transient_message(NO_MORE_RESULTS_STATUS.into());
      }

      return;
    }

    self.fetch_page(self.search_key.clone(), page);
  }

  fn merge_page(
    &mut self,
    key: &str,
    hits: Vec<Hit>,
    page: usize,
    nb_pages: usize,
  ) {
    self.results.merge_page(key, hits, page, nb_pages);
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  fn needs_search(&self, key: &str) -> bool {
    !self.results.contains(key) && !self.in_flight.contains(key)
  }

  pub(crate) fn new(search_term: String) -> Self {
    Self {
      error: None,
      help: HelpView::new(),
      in_flight: HashSet::new(),
      list_height: 0,
      message: TABLE_STATUS.into(),
      pending_effects: Vec::new(),
      results: ResultsCache::default(),
      search_input: None,
      search_key: String::new(),
      search_term,
      table: TableView::default(),
      transient_message: None,
    }
  }

  fn open_selected(&mut self) {
    if let Some(hit) = self.selected_hit() {
      let url = hit.resolved_url();

      self.pending_effects.push(Effect::OpenUrl { url });
    }
  }

  fn page_down(&mut self) {
    let target = self.table.selected_raw().saturating_add(self.page_jump());

    self.select_index(target);
  }

  fn page_jump(&self) -> usize {
    self.list_height.saturating_sub(1).max(1)
  }

  fn page_up(&mut self) {
    let target = self.table.selected_raw().saturating_sub(self.page_jump());

    self.select_index(target);
  }

  /// Returns whether a hit was removed.
  fn remove_item(&mut self, key: &str, id: &str) -> bool {
    self.results.remove_item(key, id)
  }

  fn results_status(&self) -> String {
    let query = truncate(&self.search_key, 40);

    match self.row_count() {
      0 => format!("No results for \"{query}\""),
      count => format!(
        "Showing {} for \"{query}\" • m more • ? help",
        format_count(count, "result", "results")
      ),
    }
  }

  fn row_count(&self) -> usize {
    self.results.hits(&self.search_key).len()
  }

  /// The active key's hits in display order.
  pub(crate) fn rows(&self) -> Vec<&Hit> {
    self.table.rows(self.results.hits(&self.search_key))
  }

  pub(crate) fn search_input_command(
    &mut self,
    key: KeyEvent,
  ) -> Option<Command> {
    if self.search_input.is_some() {
      Some(self.handle_search_key(key))
    } else {
      None
    }
  }

  pub(crate) fn search_term(&self) -> &str {
    &self.search_term
  }

  fn searching_status(query: &str) -> String {
    format!("Searching for \"{}\"...", truncate(query, 40))
  }

  fn select_index(&mut self, target: usize) {
    let len = self.row_count();

    self.table.select(target, len);
  }

  fn select_next(&mut self) {
    let target = self.table.selected_raw().saturating_add(1);

    self.select_index(target);
  }

  fn select_previous(&mut self) {
    let target = self.table.selected_raw().saturating_sub(1);

    self.select_index(target);
  }

  fn selected_hit(&self) -> Option<&Hit> {
    let rows = self.rows();

    self
      .table
      .selected_index(rows.len())
      .and_then(|index| rows.get(index).copied())
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    self.table.selected_index(self.row_count())
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  /// Writes the status line, or the message an open search box or help
  /// popup will restore when it closes.
  fn set_status(&mut self, status: String) {
    if let Some(input) = self.search_input.as_mut() {
      input.message_backup = status;
    } else if self.help.is_visible() {
      self.help.replace_backup(status);
    } else {
      self.message = status;
    }
  }

  pub(crate) fn set_table_offset(&mut self, offset: usize) {
    let len = self.row_count();

    self.table.set_offset(offset, len);
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  fn start_search(&mut self) {
    if self.search_input.is_some() {
      return;
    }

    let message_backup =
      std::mem::replace(&mut self.message, SEARCH_STATUS.into());

    self.search_input =
      Some(SearchInput::new(message_backup, self.search_term.clone()));
  }

  fn status_is_free(&self) -> bool {
    !self.help.is_visible() && self.search_input.is_none()
  }

  fn submit_search(&mut self) {
    let input = self.search_input.take();

    let term = self.search_term.trim().to_string();

    if term.is_empty() {
      if let Some(input) = input {
        self.message = input.message_backup;
      }

      return;
    }

    self.search_key.clone_from(&term);
    self.error = None;
    self.table.reset_selection();

    if self.needs_search(&term) {
      self.fetch_page(term, 0);
    } else if self.status_is_free() {
      self.message = if self.is_loading() {
        Self::searching_status(&term)
      } else {
        self.results_status()
      };
    }
  }

  pub(crate) fn table(&self) -> &TableView {
    &self.table
  }

  pub(crate) fn table_offset(&self) -> usize {
    self.table.offset(self.row_count())
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.text() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }
}
