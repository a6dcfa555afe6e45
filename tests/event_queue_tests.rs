use folio_chart::api::{PanelEvent, PanelEventQueue};
use folio_chart::core::{RangeWindow, Viewport};

fn resize(width: f64) -> PanelEvent {
    PanelEvent::Resize {
        viewport: Viewport::new(width, 100.0),
    }
}

#[test]
fn consecutive_resizes_keep_only_latest_size() {
    let mut queue = PanelEventQueue::new();
    queue.extend([resize(100.0), resize(200.0), resize(300.0)]);

    assert_eq!(queue.len(), 1);
    assert_eq!(queue.pop(), Some(resize(300.0)));
    assert!(queue.pop().is_none());
}

#[test]
fn resizes_separated_by_pointer_events_keep_order() {
    let mut queue = PanelEventQueue::new();
    queue.push(resize(100.0));
    queue.push(PanelEvent::PointerMove { x: 10.0, y: 10.0 });
    queue.push(resize(200.0));
    queue.push(PanelEvent::PointerLeave);
    queue.push(PanelEvent::SelectWindow {
        window: RangeWindow::Quarter,
    });

    let drained: Vec<PanelEvent> = std::iter::from_fn(|| queue.pop()).collect();
    assert_eq!(
        drained,
        vec![
            resize(100.0),
            PanelEvent::PointerMove { x: 10.0, y: 10.0 },
            resize(200.0),
            PanelEvent::PointerLeave,
            PanelEvent::SelectWindow {
                window: RangeWindow::Quarter,
            },
        ]
    );
}

#[test]
fn events_serialize_with_type_tag() {
    let json = serde_json::to_string(&PanelEvent::SelectWindow {
        window: RangeWindow::Day,
    })
    .expect("serialize");
    assert_eq!(json, r#"{"type":"select_window","window":"1d"}"#);
}
