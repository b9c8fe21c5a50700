//! Landing splash screen.
//!
//! Full-screen intro: light rays fanning out from the top center, the
//! product title revealed character by character, a subtitle, and the
//! "Get Started" call to action. Activation plays a ripple around the
//! button and fades the screen until the delayed swap to the main view.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_RAY};

const TITLE: &str = "N E X O R A   A I";
const SUBTITLE: &str = "Your study companion for planning, writing, and research";
const BUTTON: &str = "[ Get Started ]";

/// Ticks between two revealed title characters (~100ms per letter).
const REVEAL_TICKS: u64 = 6;

/// Number of title characters revealed at the given tick.
pub fn revealed_chars(tick: u64, total: usize) -> usize {
    ((tick / REVEAL_TICKS) as usize).min(total)
}

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Fading out dims everything to mimic the opacity transition.
    let fading = app.landing_leaving;
    let dim_all = |style: Style| if fading { Style::default().fg(COLOR_DIM) } else { style };

    render_rays(frame, area, app.tick_count, fading);

    let center_y = area.height / 2;
    let title_y = center_y.saturating_sub(3);

    // Title, revealed character by character.
    let shown = revealed_chars(app.tick_count, TITLE.chars().count());
    let title: String = TITLE.chars().take(shown).collect();
    let title_line = Line::from(Span::styled(
        title,
        dim_all(
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
    ))
    .centered();
    frame.render_widget(Paragraph::new(title_line), row(area, title_y));

    let subtitle_line = Line::from(Span::styled(
        SUBTITLE,
        dim_all(Style::default().fg(COLOR_ACCENT)),
    ))
    .centered();
    frame.render_widget(Paragraph::new(subtitle_line), row(area, title_y + 2));

    // Call to action.
    let button_style = if fading {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    };
    let button_y = title_y + 5;
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(BUTTON, button_style)).centered()),
        row(area, button_y),
    );

    if !fading {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("press enter", Style::default().fg(COLOR_DIM))).centered()),
            row(area, button_y + 2),
        );
    }

    if let Some(ripple) = app.ripple {
        render_ripple(
            frame,
            area,
            button_y,
            app.tick_count.saturating_sub(ripple.started_tick),
        );
    }
}

/// One-row rect at the given y, clamped to the area.
fn row(area: Rect, y: u16) -> Rect {
    let y = y.min(area.height.saturating_sub(1));
    Rect::new(area.x, area.y + y, area.width, 1)
}

/// Faint rays fanning out from the top center, drifting with the tick.
fn render_rays(frame: &mut Frame, area: Rect, tick: u64, fading: bool) {
    if area.width < 4 || area.height < 4 {
        return;
    }
    let style = if fading {
        Style::default().fg(COLOR_DIM)
    } else {
        Style::default().fg(COLOR_RAY).add_modifier(Modifier::DIM)
    };

    let cx = i32::from(area.width) / 2;
    let phase = (tick / 4) as i32;
    // Slopes of the rays, in half-columns per row.
    let slopes: [i32; 7] = [-6, -4, -2, 0, 2, 4, 6];

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(area.height as usize);
    for y in 0..i32::from(area.height) {
        let mut chars = vec![' '; area.width as usize];
        for (i, slope) in slopes.iter().enumerate() {
            let x = cx + (slope * y) / 4;
            if (0..i32::from(area.width)).contains(&x) {
                // Dotted rays; dots drift downward over time.
                if (y + phase + i as i32) % 3 == 0 {
                    chars[x as usize] = '·';
                }
            }
        }
        lines.push(Line::from(Span::styled(
            chars.into_iter().collect::<String>(),
            style,
        )));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Expanding ring around the activation point.
fn render_ripple(frame: &mut Frame, area: Rect, button_y: u16, elapsed: u64) {
    let radius = (elapsed / 2) as i32 + 1;
    let cx = i32::from(area.width) / 2;
    let cy = i32::from(button_y);
    let style = Style::default().fg(COLOR_RAY);

    for dy in -radius..=radius {
        let y = cy + dy;
        if !(0..i32::from(area.height)).contains(&y) {
            continue;
        }
        // Terminal cells are about twice as tall as wide.
        let dx = 2 * (radius - dy.abs());
        for x in [cx - dx, cx + dx] {
            if (0..i32::from(area.width)).contains(&x) {
                let cell = Rect::new(area.x + x as u16, area.y + y as u16, 1, 1);
                frame.render_widget(Paragraph::new(Span::styled("∘", style)), cell);
            }
        }
    }
}
