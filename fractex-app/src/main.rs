mod app;
mod app_dir;
mod canvas;
mod preferences;
mod session;
mod ui;

fn main() -> eframe::Result {
    app::run()
}
