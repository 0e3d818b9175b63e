//! The Fone Buyers - terminal storefront
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async calls to the trade-in backend

use std::io;
use std::time::Duration;

use chrono::Datelike;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::*,
};
use tokio::sync::mpsc;

use fonebuyers::catalog::SelectorField;
use fonebuyers::constants::{APP_NAME, HOW_IT_WORKS};
use fonebuyers::messages::ui_events::key_to_ui_event;
use fonebuyers::models::{format_price, Condition};
use fonebuyers::ui::{centered_rect, faq_lines, field_block, option_chips, render_navbar};
use fonebuyers::{
    AppActor, Config, NetworkActor, NetworkCommand, NetworkResponse, RenderState, Section, UiEvent,
};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", &config.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "Ignoring unreadable config file, using defaults");
    }
    tracing::info!(backend = %config.base_url(), "Starting {}", APP_NAME);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(config, net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        terminal.draw(|f| draw_ui(f, &current_state))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_section,
                    current_state.show_help,
                ) {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Navbar
            Constraint::Min(0),     // Section
            Constraint::Length(1),  // Footer
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    draw_navbar(f, state, chunks[0]);

    match state.active_section {
        Section::Hero => draw_hero(f, state, chunks[1]),
        Section::Quote => draw_quote_section(f, state, chunks[1]),
        Section::Devices => draw_devices(f, state, chunks[1]),
        Section::HowItWorks => draw_how_it_works(f, chunks[1]),
        Section::Faq => draw_faq(f, state, chunks[1]),
    }

    draw_footer(f, chunks[2]);
    draw_status_bar(f, state, chunks[3]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_navbar(f: &mut Frame, state: &RenderState, area: Rect) {
    let name_width = APP_NAME.len() as u16 + 2;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(name_width), Constraint::Min(0)])
        .split(area);

    let name = Paragraph::new(format!(" {} ", APP_NAME))
        .style(Style::default().fg(Color::Black).bg(Color::White).bold());
    f.render_widget(name, chunks[0]);
    f.render_widget(render_navbar(state.active_section, state.show_catalog()), chunks[1]);
}

fn draw_hero(f: &mut Frame, state: &RenderState, area: Rect) {
    let cta = if state.loading {
        Span::styled("Loading devices...", Style::default().fg(Color::DarkGray))
    } else if state.show_catalog() {
        Span::styled(
            " Get your offer → (Enter) ",
            Style::default().fg(Color::Black).bg(Color::White).bold(),
        )
    } else {
        Span::styled(
            "Instant quotes are unavailable right now.",
            Style::default().fg(Color::DarkGray),
        )
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            " ★ Highest payouts. Zero hassle. ",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled("Sell your phone in minutes.", Style::default().bold())),
        Line::from(Span::styled(
            "Fast quotes. Free pickup. Paid today.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(format!(
            "{} makes it effortless to turn devices into cash. Transparent pricing, \
             instant offers and same-day collection in most areas.",
            APP_NAME
        )),
        Line::from(""),
        Line::from(cta),
        Line::from(""),
        Line::from(vec![
            Span::styled("⛨ Best price guaranteed", Style::default().fg(Color::Gray)),
            Span::raw("    "),
            Span::styled("⛟ Free pickup", Style::default().fg(Color::Gray)),
        ]),
    ];

    let hero = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(2)))
        .wrap(Wrap { trim: false });
    f.render_widget(hero, area);
}

fn draw_quote_section(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Heading
            Constraint::Length(3),  // Brand + Model
            Constraint::Length(3),  // Storage
            Constraint::Length(3),  // Condition
            Constraint::Length(1),  // Action row
            Constraint::Min(0),     // Offer card
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(Span::styled(" Get your instant offer", Style::default().bold())),
        chunks[0],
    );

    let focused = |field: SelectorField| state.focused_field == field;
    let selection = &state.selection;

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let brand = Paragraph::new(option_chips(
        &state.brands,
        &selection.brand,
        "",
        focused(SelectorField::Brand),
    ))
    .block(field_block(SelectorField::Brand.label(), focused(SelectorField::Brand)));
    f.render_widget(brand, top[0]);

    let model = Paragraph::new(option_chips(
        &state.models,
        &selection.model,
        "",
        focused(SelectorField::Model),
    ))
    .block(field_block(SelectorField::Model.label(), focused(SelectorField::Model)));
    f.render_widget(model, top[1]);

    let storage_line = if state.storages.is_empty() {
        Line::from(Span::styled(
            " No storage options for this model ",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        option_chips(
            &state.storages,
            &selection.storage,
            " GB",
            focused(SelectorField::Storage),
        )
    };
    let storage = Paragraph::new(storage_line)
        .block(field_block(SelectorField::Storage.label(), focused(SelectorField::Storage)));
    f.render_widget(storage, chunks[2]);

    let condition = Paragraph::new(option_chips(
        &Condition::ALL,
        &selection.condition,
        "",
        focused(SelectorField::Condition),
    ))
    .block(field_block(SelectorField::Condition.label(), focused(SelectorField::Condition)));
    f.render_widget(condition, chunks[3]);

    let pending = if state.quote_pending { "  Pricing..." } else { "" };
    let action = Line::from(vec![
        Span::styled(" Select options to see your price. ", Style::default().fg(Color::Gray)),
        Span::styled(
            " Get Offer → (Enter) ",
            Style::default().fg(Color::Black).bg(Color::White).bold(),
        ),
        Span::styled(pending, Style::default().fg(Color::Yellow)),
    ]);
    f.render_widget(Paragraph::new(action), chunks[4]);

    if let Some(quote) = &state.quote {
        let card = Paragraph::new(vec![
            Line::from(Span::styled("YOUR OFFER", Style::default().fg(Color::Gray))),
            Line::from(Span::styled(format_price(quote.offer), Style::default().bold())),
            Line::from(Span::styled(quote.summary(), Style::default().fg(Color::Gray))),
            Line::from(""),
            Line::from(Span::styled(
                " Continue → ",
                Style::default().fg(Color::Black).bg(Color::White),
            )),
        ])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .padding(Padding::horizontal(1)),
        );
        let card_area = Rect {
            height: chunks[5].height.min(7),
            ..chunks[5]
        };
        f.render_widget(card, card_area);
    }
}

fn draw_devices(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    for device in &state.devices {
        lines.push(Line::from(Span::styled(device.display_name(), Style::default().bold())));
        lines.push(Line::from(Span::styled(
            format!(
                "Up to {}+ depending on condition",
                format_price(device.base_price)
            ),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(Span::styled(
            device.image_url().to_string(),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
    }

    let grid = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Popular devices (↑/↓ scroll) "),
        )
        .wrap(Wrap { trim: true })
        .scroll((state.devices_scroll.saturating_mul(4), 0));
    f.render_widget(grid, area);
}

fn draw_how_it_works(f: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, HOW_IT_WORKS.len() as u32); HOW_IT_WORKS.len()])
        .split(area);

    for (i, (title, desc)) in HOW_IT_WORKS.iter().enumerate() {
        let step = Paragraph::new(vec![
            Line::from(Span::styled(*title, Style::default().bold())),
            Line::from(""),
            Line::from(Span::styled(*desc, Style::default().fg(Color::Gray))),
        ])
        .block(field_block(&format!("{}", i + 1), false))
        .wrap(Wrap { trim: true });
        f.render_widget(step, columns[i]);
    }
}

fn draw_faq(f: &mut Frame, state: &RenderState, area: Rect) {
    let faq = Paragraph::new(faq_lines(state.faq_selected, &state.faq_open))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" FAQ (↑/↓ select, Enter expand) "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(faq, area);
}

fn draw_footer(f: &mut Frame, area: Rect) {
    let year = chrono::Local::now().year();
    let footer = Paragraph::new(format!("© {} {}    Terms    Privacy", year, APP_NAME))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = match state.active_section {
        _ if state.loading => " Loading devices... ",
        Section::Quote => " Tab/↑↓:field | ←/→:choose | Enter:get offer | ?:help | q:quit ",
        Section::Faq => " ↑/↓:question | Enter:expand | 1-4:sections | ?:help | q:quit ",
        _ => " 1-4:sections | n/p:next/prev | g:get offer | ?:help | q:quit ",
    };

    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 THE FONE BUYERS - Keyboard Shortcuts

 SECTIONS
   1                  How it works
   2                  Sell your phone (devices)
   3                  FAQ
   4 / g              Get offer
   h / Home           Back to top
   n / p              Next / previous section

 GET OFFER
   Tab / ↑ / ↓        Move between fields
   ← / →              Change brand, model, storage, condition
   Enter / s          Get offer

 FAQ
   ↑ / ↓              Select question
   Enter / Space      Expand or collapse answer

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}
