mod app;
mod charge;
mod config;
mod field;
mod grid;
mod init_config;
mod io;
mod scenario;

fn main() {
    app::run();
}
