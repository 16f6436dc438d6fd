use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Context;
use kinesis_core::prelude::*;
use kinesis_ui::prelude::*;

const MENU_JSON: &str = r#"[
    { "name": "Strength", "subcategories": ["Legs", "Arms", "Core"] },
    { "name": "Mobility", "subcategories": ["Hip", "Shoulder", "Spine"] },
    { "name": "Balance", "subcategories": [] }
]"#;

/// Stands in for a browser video element: the first play is refused the way
/// autoplay policies refuse playback without a user gesture.
#[derive(Default)]
struct ConsolePlayer {
    gesture_seen: bool,
}

impl MediaPlayer for ConsolePlayer {
    fn play(&mut self, item: &MediaItem) -> Result<(), PlaybackError> {
        if !self.gesture_seen {
            self.gesture_seen = true;
            return Err(PlaybackError::Rejected("no user gesture yet".into()));
        }
        log::info!("player: play {}", item.url());
        Ok(())
    }

    fn pause(&mut self, item: &MediaItem) {
        log::info!("player: pause {}", item.url());
    }
}

fn flyout_config() -> anyhow::Result<FlyoutConfig> {
    match std::env::var("KINESIS_FLYOUT_CONFIG") {
        Ok(json) => serde_json::from_str(&json).context("parsing KINESIS_FLYOUT_CONFIG"),
        Err(_) => Ok(FlyoutConfig::default()),
    }
}

fn run_sidebar() -> anyhow::Result<()> {
    let clock = ManualClock::new();
    let feed = PointerFeed::new();
    let menu = Rc::new(CategoryMenu::from_json(MENU_JSON)?);

    let sidebar = Rc::new(RefCell::new(
        CategorySidebar::new(menu, Rc::new(clock.clone()), flyout_config()?)
            .on_category_selected(|c| log::info!("selected category {c}"))
            .on_subcategory_selected(|c, s| {
                let s = if s.is_empty() { "All" } else { s };
                log::info!("selected {c} / {s}");
            }),
    ));

    // Document-wide pointer tracking, only while a flyout is open.
    {
        let weak = Rc::downgrade(&sidebar);
        let feed = feed.clone();
        let mut s = sidebar.borrow_mut();
        s.flyout_mut().set_viewport(Size::new(1280.0, 720.0));
        s.flyout_mut().set_pointer_subscriber(move || {
            let weak = weak.clone();
            feed.subscribe(move |p| {
                if let Some(sidebar) = weak.upgrade() {
                    sidebar.borrow_mut().flyout_mut().on_pointer_move(p);
                }
            })
        });
    }

    let row = |i: usize| Rect::new(16.0, 120.0 + i as f32 * 44.0, 240.0, 40.0);
    let step = |ms: u64| {
        clock.advance(Duration::from_millis(ms));
        sidebar.borrow_mut().flyout_mut().tick();
    };

    // Hover "Strength", then travel diagonally towards its popup.
    sidebar.borrow_mut().hover_row("Strength", row(0));
    sidebar.borrow_mut().leave_row();
    log::info!("pointer listeners: {}", feed.listener_count());
    for (i, y) in [170.0, 200.0, 230.0].into_iter().enumerate() {
        step(60);
        feed.emit(Vec2::new(240.0 + i as f32 * 5.0, y));
    }
    step(400);
    log::info!("after diagonal travel: {:?}", sidebar.borrow().flyout().state());

    sidebar.borrow_mut().flyout_mut().on_enter_popup();
    sidebar
        .borrow_mut()
        .select("Strength", Selection::Sub("Legs".into()));

    // Hover "Mobility" and wander off; the debounce closes it.
    sidebar.borrow_mut().hover_row("Mobility", row(1));
    sidebar.borrow_mut().leave_row();
    feed.emit(Vec2::new(600.0, 600.0));
    step(299);
    log::info!("at 299ms: {:?}", sidebar.borrow().flyout().state());
    step(1);
    log::info!("at 300ms: {:?}", sidebar.borrow().flyout().state());
    log::info!("pointer listeners: {}", feed.listener_count());

    sidebar.borrow_mut().click_category("Balance");
    log::info!("active filter: {:?}", sidebar.borrow().active());
    Ok(())
}

fn run_carousel() {
    let source = MediaSource::single(["squat-1.jpg", "squat-2.jpg"], Some("squat.mp4"));
    let mut carousel = CarouselController::new(source, ConsolePlayer::default());
    log::info!(
        "carousel: {:?}",
        carousel.sequence().iter().map(|m| m.url()).collect::<Vec<_>>()
    );

    log::info!("toggle -> playing = {}", carousel.toggle_playback());
    log::info!("toggle -> playing = {}", carousel.toggle_playback());

    // a left drag on the touch screen advances the slide
    let mut swipes = SwipeDetector::new(system_clock());
    let press = PointerEventKind::Down(PointerButton::Primary);
    let release = PointerEventKind::Up(PointerButton::Primary);
    swipes.handle_pointer(&PointerEvent::touch(press, Vec2::new(300.0, 200.0)));
    if let Some(Gesture::Swipe(direction)) =
        swipes.handle_pointer(&PointerEvent::touch(release, Vec2::new(80.0, 210.0)))
    {
        log::info!("swipe {direction:?}");
        carousel.on_swipe(direction);
    }
    log::info!(
        "slide {} ({:?}), playing = {}",
        carousel.current_index(),
        carousel.current().map(|m| m.kind()),
        carousel.is_playing()
    );

    carousel.set_source(MediaSource::multi(
        Vec::<String>::new(),
        Vec::<String>::new(),
    ));
    log::info!("no media: placeholder = {}", carousel.is_empty());
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    run_sidebar()?;
    run_carousel();
    Ok(())
}
