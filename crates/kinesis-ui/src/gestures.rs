use std::rc::Rc;

use kinesis_core::{Clock, Duration, Instant, PointerEvent, PointerEventKind, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    Tap(Vec2),
    Swipe(SwipeDirection),
}

/// Turns a press/release pair into a tap or a swipe.
///
/// Carousel slides use this on touch screens: a swipe navigates, a tap on a
/// video toggles playback.
pub struct SwipeDetector {
    clock: Rc<dyn Clock>,
    press_start: Option<(Instant, Vec2)>,
    pub tap_max_time: Duration,
    pub tap_max_distance: f32,
    pub swipe_min_distance: f32,
}

impl SwipeDetector {
    pub fn new(clock: Rc<dyn Clock>) -> Self {
        Self {
            clock,
            press_start: None,
            tap_max_time: Duration::from_millis(200),
            tap_max_distance: 10.0,
            swipe_min_distance: 50.0,
        }
    }

    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Option<Gesture> {
        match event.event {
            PointerEventKind::Down(_) => {
                self.press_start = Some((self.clock.now(), event.position));
                None
            }
            PointerEventKind::Up(_) => {
                let (start_time, start_pos) = self.press_start.take()?;
                let elapsed = self.clock.now().saturating_duration_since(start_time);
                let distance = start_pos.distance(event.position);

                if elapsed < self.tap_max_time && distance < self.tap_max_distance {
                    return Some(Gesture::Tap(event.position));
                }
                if distance > self.swipe_min_distance {
                    let dx = event.position.x - start_pos.x;
                    let dy = event.position.y - start_pos.y;
                    let dir = if dx.abs() > dy.abs() {
                        if dx > 0.0 {
                            SwipeDirection::Right
                        } else {
                            SwipeDirection::Left
                        }
                    } else if dy > 0.0 {
                        SwipeDirection::Down
                    } else {
                        SwipeDirection::Up
                    };
                    return Some(Gesture::Swipe(dir));
                }
                None
            }
            PointerEventKind::Cancel | PointerEventKind::Leave => {
                self.press_start = None;
                None
            }
            PointerEventKind::Move | PointerEventKind::Enter => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinesis_core::{ManualClock, PointerButton};

    fn down(x: f32, y: f32) -> PointerEvent {
        PointerEvent::touch(PointerEventKind::Down(PointerButton::Primary), Vec2::new(x, y))
    }

    fn up(x: f32, y: f32) -> PointerEvent {
        PointerEvent::touch(PointerEventKind::Up(PointerButton::Primary), Vec2::new(x, y))
    }

    fn detector() -> (SwipeDetector, ManualClock) {
        let clock = ManualClock::new();
        (SwipeDetector::new(Rc::new(clock.clone())), clock)
    }

    #[test]
    fn test_quick_still_press_is_a_tap() {
        let (mut d, clock) = detector();
        assert_eq!(d.handle_pointer(&down(100.0, 100.0)), None);
        clock.advance(Duration::from_millis(80));
        assert_eq!(
            d.handle_pointer(&up(103.0, 101.0)),
            Some(Gesture::Tap(Vec2::new(103.0, 101.0)))
        );
    }

    #[test]
    fn test_long_drag_is_a_swipe() {
        let (mut d, clock) = detector();
        d.handle_pointer(&down(300.0, 100.0));
        clock.advance(Duration::from_millis(250));
        assert_eq!(
            d.handle_pointer(&up(120.0, 130.0)),
            Some(Gesture::Swipe(SwipeDirection::Left))
        );

        d.handle_pointer(&down(100.0, 100.0));
        assert_eq!(
            d.handle_pointer(&up(110.0, 300.0)),
            Some(Gesture::Swipe(SwipeDirection::Down))
        );
    }

    #[test]
    fn test_slow_short_press_is_nothing() {
        let (mut d, clock) = detector();
        d.handle_pointer(&down(100.0, 100.0));
        clock.advance(Duration::from_millis(600));
        assert_eq!(d.handle_pointer(&up(102.0, 100.0)), None);
    }

    #[test]
    fn test_release_without_press_or_after_cancel_is_ignored() {
        let (mut d, _) = detector();
        assert_eq!(d.handle_pointer(&up(0.0, 0.0)), None);

        d.handle_pointer(&down(300.0, 100.0));
        d.handle_pointer(&PointerEvent::touch(PointerEventKind::Cancel, Vec2::default()));
        assert_eq!(d.handle_pointer(&up(0.0, 100.0)), None);
    }
}
