mod app;
mod items;

use anyhow::Result;
use log::warn;
use winit::event_loop::EventLoop;

use crate::app::{AppConfig, WheelApp};
use crate::items::ItemList;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = parse_args();

    println!("=== Roulette ===");
    println!("Space spins the wheel; drag it and let go for the same effect.");
    println!("Up/Down: item count   M: numbers/custom   R: remove-on-win   Esc: dismiss result");
    println!();

    let event_loop = EventLoop::new()?;
    let mut app = WheelApp::new(config);
    event_loop.run_app(&mut app)?;
    Ok(())
}

fn parse_args() -> AppConfig {
    let mut title = "Roulette".to_string();
    let mut items: Option<ItemList> = None;
    let mut remove_on_win = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--title" => {
                if let Some(value) = args.next() {
                    title = value;
                }
            }
            "--count" => {
                if let Some(value) = args.next() {
                    match value.parse::<usize>() {
                        Ok(count) => items = Some(ItemList::numbers(count)),
                        Err(_) => warn!("--count expects a number, got {value:?}"),
                    }
                }
            }
            "--items" => {
                if let Some(value) = args.next() {
                    items = Some(ItemList::custom(&value));
                }
            }
            "--remove-on-win" => remove_on_win = true,
            other => warn!("ignoring unknown argument {other:?}"),
        }
    }

    let mut items = items.unwrap_or_default();
    items.set_remove_on_win(remove_on_win);
    AppConfig { title, items }
}
