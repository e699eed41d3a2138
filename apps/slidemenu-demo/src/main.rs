mod driver;
mod host;

use slidemenu::{Direction, EventCallback, MenuEvent, SlideMenu, SlideMenuConfig};
use slidemenu_graphics::Point;

use driver::Driver;
use host::ConsoleWindow;

fn init_logging() {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() -> slidemenu::Result<()> {
    init_logging();

    let direction = std::env::args()
        .nth(1)
        .map(|name| Direction::from_name(&name))
        .unwrap_or_default();

    println!("=== Slide menu walkthrough ({direction}) ===");
    println!("Run with RUST_LOG=trace to see every frame.");
    println!();

    let config = SlideMenuConfig::default()
        .with_direction(direction)
        .with_spring(true, 0.6);
    let mut menu = SlideMenu::with_config(ConsoleWindow::new(400.0, 800.0), config);
    menu.set_delegate(EventCallback(|event: MenuEvent| {
        log::info!("delegate: {event:?}");
    }));
    let mut driver = Driver::new(menu);

    // Content recedes toward `direction`, so the opening swipe starts on
    // the opposite edge and moves the same way.
    let (edge_x, open_x, close_x) = match direction {
        Direction::Left => (395.0, 100.0, 380.0),
        Direction::Right => (5.0, 300.0, 20.0),
    };

    log::info!("step 1: swipe in from the edge");
    driver.swipe(Point::new(edge_x, 400.0), Point::new(open_x, 400.0), 8)?;
    driver.settle();

    log::info!("step 2: tap the snapshot to close");
    let tap_x = match direction {
        Direction::Left => 10.0,
        Direction::Right => 390.0,
    };
    driver.tap(Point::new(tap_x, 400.0))?;
    driver.settle();

    log::info!("step 3: present from code, then drag the snapshot closed");
    driver.menu_mut().present(true, Some(Box::new(|| log::info!("opened"))))?;
    driver.settle();
    driver.swipe(Point::new(tap_x, 400.0), Point::new(tap_x + (close_x - open_x), 400.0), 10)?;
    driver.settle();

    log::info!("step 4: short edge swipe snaps back");
    driver.swipe(
        Point::new(edge_x, 400.0),
        Point::new(edge_x + (open_x - edge_x) * 0.2, 400.0),
        12,
    )?;
    driver.settle();

    println!("done");
    Ok(())
}
