use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Percentage(40),
    Constraint::Percentage(30),
    Constraint::Percentage(10),
    Constraint::Percentage(10),
    Constraint::Percentage(10),
  ];

  fn dispatch(&mut self, command: Command) -> bool {
    let dispatch = self.state.dispatch_command(command);

    for effect in dispatch.effects {
      self.execute_effect(effect);
    }

    dispatch.should_exit
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.draw_search(frame, layout[0]);

    let table_area = layout[2];

    self
      .state
      .set_list_height(usize::from(table_area.height.saturating_sub(1)));

    if self.state.error().is_some() {
      frame.render_widget(
        Paragraph::new(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::styled(ERROR_TEXT, Style::default().fg(Color::Red)),
        ])),
        table_area,
      );
    } else {
      self.draw_table(frame, table_area);
    }

    let more = if self.state.is_loading() {
      Span::styled(LOADING_TEXT, Style::default().fg(Color::Yellow))
    } else {
      Span::styled(MORE_TEXT, Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(
      Paragraph::new(Line::from(vec![Span::raw(BASE_INDENT), more])),
      layout[3],
    );

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[4]);

    self.state.help().draw(frame);
  }

  fn draw_search(&self, frame: &mut Frame, area: Rect) {
    let prompt = SearchInput::prompt(self.state.search_term());

    let line = if self.state.is_editing() {
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          prompt,
          Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        ),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
      ])
    } else {
      Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(prompt, Style::default().fg(Color::White)),
      ])
    };

    frame.render_widget(Paragraph::new(line), area);
  }

  fn draw_table(&mut self, frame: &mut Frame, area: Rect) {
    let rows = self
      .state
      .rows()
      .into_iter()
      .map(|hit| {
        Row::new([
          Cell::from(hit.display_title().to_string()),
          Cell::from(hit.author.clone().unwrap_or_default()),
          Cell::from(
            hit
              .num_comments
              .map_or_else(String::new, |count| count.to_string()),
          ),
          Cell::from(
            hit.points.map_or_else(String::new, |count| count.to_string()),
          ),
          Cell::from("x dismiss").style(Style::default().fg(Color::DarkGray)),
        ])
      })
      .collect::<Vec<_>>();

    if rows.is_empty() {
      let text = if self.state.is_loading() {
        LOADING_TEXT
      } else {
        "No results yet. Try another query."
      };

      frame.render_widget(
        Paragraph::new(Line::from(vec![
          Span::raw(BASE_INDENT),
          Span::raw(text),
        ])),
        area,
      );

      return;
    }

    let header = Row::new(
      SortKey::COLUMNS
        .into_iter()
        .map(|key| self.header_cell(key))
        .chain([Cell::from("Archive")]),
    )
    .style(Style::default().fg(Color::DarkGray));

    let table = Table::new(rows, Self::COLUMN_WIDTHS)
      .header(header)
      .row_highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      );

    let mut table_state = TableState::default()
      .with_selected(self.state.selected_index())
      .with_offset(self.state.table_offset());

    frame.render_stateful_widget(table, area, &mut table_state);

    self.state.set_table_offset(table_state.offset());
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchPage { page, query } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let result = client.search(&query, page).await;

          let _ = sender.send(Event::Page {
            page,
            query,
            result,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          log::warn!("could not open {url}: {error}");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  fn header_cell(&self, key: SortKey) -> Cell<'static> {
    let table = self.state.table();

    if table.sort_key() == key {
      let marker = if table.is_reversed() { "▴" } else { "▾" };

      Cell::from(format!("{} {marker}", key.label())).style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
    } else {
      Cell::from(key.label())
    }
  }

  pub(crate) fn new(client: Client, query: String) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(query),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    self.dispatch(Command::SubmitSearch);

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.search_input_command(key) {
        command
      } else {
        Command::from_key(key)
      };

      if self.dispatch(command) {
        break;
      }
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, ratatui::backend::TestBackend};

  fn hit(id: &str) -> Hit {
    Hit {
      author: Some(format!("author{id}")),
      num_comments: Some(1),
      object_id: id.to_string(),
      points: Some(1),
      title: Some(format!("Story {id}")),
      url: None,
    }
  }

  fn page(page: usize, result: Result<Vec<Hit>>) -> Event {
    Event::Page {
      page,
      query: "react".into(),
      result: result.map(|hits| SearchResponse {
        hits,
        nb_pages: 3,
        page,
      }),
    }
  }

  fn render(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();

    terminal.draw(|frame| app.draw(frame)).unwrap();

    terminal
      .backend()
      .buffer()
      .content()
      .iter()
      .map(|cell| cell.symbol())
      .collect()
  }

  #[tokio::test]
  async fn error_replaces_table_until_next_page() {
    let mut app = App::new(Client::new(10), "react".into());

    app.state.dispatch_command(Command::SubmitSearch);
    app.state.handle_event(page(0, Ok(vec![hit("1"), hit("2")])));

    let screen = render(&mut app);
    assert!(screen.contains("Story 1"));
    assert!(!screen.contains(ERROR_TEXT));

    app.state.dispatch_command(Command::LoadMore);
    app.state.handle_event(page(1, Err(anyhow::anyhow!("timed out"))));

    let screen = render(&mut app);
    assert!(screen.contains(ERROR_TEXT));
    assert!(!screen.contains("Story 1"));
    assert!(screen.contains(MORE_TEXT));

    app.state.dispatch_command(Command::LoadMore);
    app.state.handle_event(page(1, Ok(vec![hit("3")])));

    let screen = render(&mut app);
    assert!(!screen.contains(ERROR_TEXT));
    assert!(screen.contains("Story 1"));
    assert!(screen.contains("Story 3"));
  }
}
