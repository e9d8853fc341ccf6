// Dua card component
//
// Renders a single dua as a bordered card: Arabic text, the translation in
// the user's language, and the source reference. Arabic is always
// right-aligned; the translation follows its script's direction. The card
// width scales with the font-size preference since terminal glyphs cannot.

use crate::catalog::{direction, Dua, Language, TextDirection};
use crate::storage::prefs::FontSize;
use crate::theme::Palette;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Card width in cells per font-size preference.
fn card_width(font_size: FontSize) -> u16 {
    match font_size {
        FontSize::Small => 56,
        FontSize::Normal => 72,
        FontSize::Large => 88,
    }
}

fn alignment(dir: TextDirection) -> Alignment {
    match dir {
        TextDirection::Rtl => Alignment::Right,
        TextDirection::Ltr => Alignment::Left,
    }
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    f: &mut Frame,
    area: Rect,
    dua: &Dua,
    language: Language,
    font_size: FontSize,
    is_favorite: bool,
    slide_offset: f64,
    palette: &Palette,
) {
    let width = card_width(font_size).min(area.width.saturating_sub(2));
    let height = area.height;

    // Center the card, then shift it by the slide animation offset
    let centered_x = area.x + (area.width.saturating_sub(width)) / 2;
    let shifted = centered_x as i32 + slide_offset.round() as i32;
    let max_x = (area.right().saturating_sub(width)) as i32;
    let x = shifted.clamp(area.x as i32, max_x.max(area.x as i32)) as u16;

    let card_area = Rect::new(x, area.y, width, height);

    let title = if is_favorite {
        Line::from(Span::styled(
            " ★ ",
            Style::default().fg(palette.favorite),
        ))
        .right_aligned()
    } else {
        Line::from("")
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .title_top(title);
    let inner = block.inner(card_area);
    f.render_widget(block, card_area);

    // Too small to lay out the three sections
    if inner.height < 5 || inner.width == 0 {
        return;
    }

    // Inner layout: arabic on top, translation in the middle, reference at
    // the bottom line
    let translation = dua.translations.get(language);
    let translation_align = alignment(direction(language));
    // A fallback translation (requested language missing) renders muted
    let translation_color = if dua.translations.has(language) {
        palette.translation
    } else {
        palette.muted
    };

    let mut arabic_lines: Vec<Line> = vec![Line::from("")];
    arabic_lines.push(Line::from(Span::styled(
        dua.arabic.clone(),
        Style::default()
            .fg(palette.arabic)
            .add_modifier(Modifier::BOLD),
    )));

    let arabic_height = inner.height.saturating_sub(4) / 2;
    let arabic_area = Rect::new(inner.x, inner.y, inner.width, arabic_height.max(3));
    f.render_widget(
        Paragraph::new(arabic_lines)
            .alignment(Alignment::Right)
            .wrap(Wrap { trim: true }),
        arabic_area,
    );

    if !translation.is_empty() {
        let y = arabic_area.bottom().min(inner.bottom().saturating_sub(1));
        let translation_area = Rect::new(
            inner.x,
            y,
            inner.width,
            inner.bottom().saturating_sub(y + 1).max(1),
        );
        f.render_widget(
            Paragraph::new(Span::styled(
                translation.to_string(),
                Style::default().fg(translation_color),
            ))
            .alignment(translation_align)
            .wrap(Wrap { trim: true }),
            translation_area,
        );
    }

    if !dua.reference.is_empty() && inner.height > 2 {
        let reference_area = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(
                dua.reference.clone(),
                Style::default()
                    .fg(palette.reference)
                    .add_modifier(Modifier::ITALIC),
            ))
            .alignment(Alignment::Center),
            reference_area,
        );
    }
}
