use ratatui::{prelude::*, widgets::*};
use std::fmt::Display;

use crate::constants::FAQ;
use crate::messages::ui_events::Section;

/// Navbar entries in display order
const NAV_SECTIONS: [Section; 4] = [
    Section::HowItWorks,
    Section::Devices,
    Section::Faq,
    Section::Quote,
];

/// Index of `active` in the navbar, if it has an entry there
pub fn nav_index(active: Section) -> Option<usize> {
    NAV_SECTIONS.iter().position(|s| *s == active)
}

/// Renders the navbar tabs. Catalog sections are greyed out while hidden.
pub fn render_navbar(active: Section, show_catalog: bool) -> Tabs<'static> {
    let titles: Vec<Line> = NAV_SECTIONS
        .iter()
        .enumerate()
        .map(|(i, section)| {
            let label = format!("{}:{}", i + 1, section.title());
            if section.needs_catalog() && !show_catalog {
                Line::from(Span::styled(label, Style::default().fg(Color::DarkGray).dim()))
            } else {
                Line::from(label)
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .style(Style::default().fg(Color::Gray))
        .divider("|");
    match nav_index(active) {
        Some(i) => tabs
            .select(i)
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White).bold()),
        // Hero has no tab; keep the default selection unhighlighted
        None => tabs.highlight_style(Style::default().fg(Color::Gray)),
    }
}

/// Renders a row of choice "buttons", the selected one inverted
pub fn option_chips<T: Display + PartialEq>(
    options: &[T],
    selected: &T,
    suffix: &str,
    focused: bool,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for option in options {
        let label = format!(" {}{} ", option, suffix);
        let style = if option == selected {
            if focused {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::Black).bg(Color::White)
            }
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    spans.pop();
    Line::from(spans)
}

/// Bordered block for a form field or card
pub fn field_block(title: &str, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", title))
}

/// FAQ entries as collapsible lines
pub fn faq_lines(selected: usize, open: &[bool]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (question, answer)) in FAQ.iter().enumerate() {
        let is_open = open.get(i).copied().unwrap_or(false);
        let marker = if is_open { "▴" } else { "▾" };
        let style = if i == selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().bold()
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", question), style),
            Span::styled(marker, Style::default().fg(Color::DarkGray)),
        ]));
        if is_open {
            lines.push(Line::from(Span::styled(
                format!("   {}", answer),
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    }
    lines
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Condition;

    #[test]
    fn test_nav_index() {
        assert_eq!(nav_index(Section::HowItWorks), Some(0));
        assert_eq!(nav_index(Section::Quote), Some(3));
        assert_eq!(nav_index(Section::Hero), None);
    }

    #[test]
    fn test_option_chips_marks_selection() {
        let line = option_chips(&[64u32, 128], &128, " GB", false);
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, " 64 GB ");
        assert_eq!(line.spans[2].content, " 128 GB ");
        assert_eq!(line.spans[2].style.bg, Some(Color::White));
        assert_eq!(line.spans[0].style.bg, None);

        let line = option_chips(&Condition::ALL, &Condition::Fair, "", true);
        assert_eq!(line.spans[4].content, " Fair ");
        assert_eq!(line.spans[4].style.bg, Some(Color::Yellow));

        let brands = vec!["Apple".to_string(), "Samsung".to_string()];
        let line = option_chips(&brands, &brands[1], "", true);
        assert_eq!(line.spans[2].content, " Samsung ");
        assert_eq!(line.spans[2].style.bg, Some(Color::Yellow));
    }

    #[test]
    fn test_faq_lines_expand() {
        let collapsed = faq_lines(0, &[false, false, false]);
        let expanded = faq_lines(0, &[true, false, false]);
        assert_eq!(expanded.len(), collapsed.len() + 1);
    }
}
