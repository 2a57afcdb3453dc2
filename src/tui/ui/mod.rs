mod curve;
mod layout;
mod menu;

use crate::tui::app::{AppState, Scene};
use ratatui::prelude::Frame;

pub fn draw(f: &mut Frame, app: &AppState) {
    match app.scene {
        Scene::Menu => menu::draw_menu(f, app),
        Scene::Curve => curve::draw_curve(f, app),
    }
}
