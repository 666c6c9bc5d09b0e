use macroquad::prelude::*;

use flagged::arena::{LevelTheme, Rgb, ARENA_HEIGHT, ARENA_WIDTH};
use flagged::geometry::Rect as ArenaRect;
use flagged::player::PlayerId;
use flagged::screen::Screen;
use flagged::settings::{Palette, Settings};
use flagged::state::MatchState;
use flagged::ui::{Button, ButtonStyle};
use flagged::{level_config, View};

const FONT_SIZE: f32 = 32.0;

// Helpers to convert arena types to macroquad's
fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

fn fill(rect: &ArenaRect, color: Color) {
    draw_rectangle(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32, color);
}

fn outline(rect: &ArenaRect, thickness: f32, color: Color) {
    draw_rectangle_lines(
        rect.x as f32,
        rect.y as f32,
        rect.w as f32,
        rect.h as f32,
        thickness,
        color,
    );
}

fn inflate(rect: &ArenaRect, by: i32) -> ArenaRect {
    ArenaRect::new(rect.x - by / 2, rect.y - by / 2, rect.w + by, rect.h + by)
}

fn draw_text_centered(text: &str, cx: f32, cy: f32, color: Color) {
    let dims = measure_text(text, None, FONT_SIZE as u16, 1.0);
    draw_text(
        text,
        cx - dims.width / 2.0,
        cy + dims.offset_y / 2.0,
        FONT_SIZE,
        color,
    );
}

fn draw_gradient(rect: &ArenaRect, top: Rgb, bottom: Rgb) {
    for row in 0..rect.h {
        let color = top.lerp(bottom, row as f32 / rect.h as f32);
        draw_rectangle(
            rect.x as f32,
            (rect.y + row) as f32,
            rect.w as f32,
            1.0,
            to_color(color),
        );
    }
}

pub fn draw(view: &View) {
    match view {
        View::Match { state, .. } => draw_match(state),
        View::Menu {
            screen,
            settings,
            buttons,
        } => draw_menu(*screen, settings, buttons),
    }
}

fn draw_match(state: &MatchState) {
    let theme = &state.config.theme;

    draw_gradient(
        &ArenaRect::new(0, 0, ARENA_WIDTH, ARENA_HEIGHT),
        theme.gradient_top,
        theme.gradient_bottom,
    );

    // Bases: black, team color, black
    for (id, color) in [(PlayerId::One, theme.p1_color), (PlayerId::Two, theme.p2_color)] {
        let base = state.base(id);
        outline(&inflate(base, 4), 7.0, BLACK);
        outline(base, 5.0, to_color(color));
        outline(&inflate(base, -4), 3.0, BLACK);
    }

    draw_players(state, theme);

    for flag in state.flags.iter().filter(|f| f.is_visible()) {
        fill(&flag.home, to_color(team_color(theme, flag.owner)));
    }

    for obstacle in state.config.obstacles() {
        fill(obstacle, to_color(theme.obstacle_color));
        outline(obstacle, 2.0, BLACK);
    }

    draw_score(state);
}

fn team_color(theme: &LevelTheme, id: PlayerId) -> Rgb {
    match id {
        PlayerId::One => theme.p1_color,
        PlayerId::Two => theme.p2_color,
    }
}

fn draw_players(state: &MatchState, theme: &LevelTheme) {
    for player in &state.players {
        // A carrier is filled with the color of the flag it holds
        let body = if player.carrying {
            to_color(team_color(theme, player.id.opponent()))
        } else {
            BLACK
        };
        fill(&player.rect, body);
        outline(&player.rect, 3.0, to_color(team_color(theme, player.id)));
    }
}

fn draw_score(state: &MatchState) {
    const BOX: f32 = 40.0;
    const SPACING: f32 = 20.0;
    const CENTER_Y: f32 = 30.0;

    let center_x = ARENA_WIDTH as f32 / 2.0;
    let p1_box = (center_x - SPACING - BOX, CENTER_Y - BOX / 2.0);
    let p2_box = (center_x + SPACING, CENTER_Y - BOX / 2.0);

    for (x, y) in [p1_box, p2_box] {
        draw_rectangle_lines(x, y, BOX, BOX, 3.0, WHITE);
    }

    draw_text_centered("P1", p1_box.0 - 25.0, CENTER_Y, WHITE);
    draw_text_centered("P2", p2_box.0 + BOX + 25.0, CENTER_Y, WHITE);
    draw_text_centered("-", center_x, CENTER_Y, WHITE);
    draw_text_centered(&state.score.p1.to_string(), p1_box.0 + BOX / 2.0, CENTER_Y, WHITE);
    draw_text_centered(&state.score.p2.to_string(), p2_box.0 + BOX / 2.0, CENTER_Y, WHITE);
}

fn draw_menu(screen: Screen, settings: &Settings, buttons: &[Button]) {
    let palette = settings.palette();
    clear_background(to_color(palette.background));

    let center_x = ARENA_WIDTH as f32 / 2.0;
    let text = to_color(palette.text);
    match screen {
        Screen::MainMenu => draw_text_centered("Flagged", center_x, 100.0, text),
        Screen::LevelSelect => draw_text_centered("Select Level", center_x, 80.0, text),
        Screen::Settings => draw_text_centered("Settings", center_x, 100.0, text),
        Screen::Paused => draw_text_centered("PAUSED", center_x, 150.0, text),
        Screen::GameOver { winner } => {
            draw_text_centered(&format!("{winner} WINS!"), center_x, 200.0, text)
        }
        Screen::Playing => {}
    }

    let (mx, my) = mouse_position();
    for button in buttons {
        let hovered = button.rect.contains_point(mx as i32, my as i32);
        draw_button(button, &palette, hovered);
    }
}

fn draw_button(button: &Button, palette: &Palette, hovered: bool) {
    let rect = &button.rect;
    let (cx, cy) = (
        (rect.x + rect.w / 2) as f32,
        (rect.y + rect.h / 2) as f32,
    );

    match button.style {
        ButtonStyle::Plain => {
            let text = to_color(palette.text);
            fill(rect, to_color(palette.background));
            draw_text_centered(&button.label, cx, cy, text);
            if hovered {
                outline(rect, 2.0, text);
            }
        }
        ButtonStyle::Level { level, selected } => {
            let theme = level_config(level).theme;
            draw_gradient(rect, theme.gradient_top, theme.gradient_bottom);
            draw_text_centered(&button.label, cx, cy, WHITE);
            if selected {
                outline(&inflate(rect, 8), 3.0, to_color(palette.text));
            }
            if hovered {
                outline(rect, 2.0, WHITE);
            }
        }
    }
}
