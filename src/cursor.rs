use crate::constants::RIPPLE_LIFETIME_MS;
use crate::core::cursor::{cursor_enabled, position_style, CursorFollower};
use crate::core::hover::HoverState;
use crate::core::pointer::PointerTracker;
use crate::core::scheduler::{run_every_frame, FrameScheduler, LoopHandle};
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The two custom cursor elements, created once per page.
#[derive(Clone)]
pub struct CursorVisuals {
    pub dot: web::Element,
    pub follower: web::Element,
}

impl CursorVisuals {
    pub fn apply_hover(&self, state: HoverState) {
        for el in [&self.dot, &self.follower] {
            let cl = el.class_list();
            match state {
                HoverState::Hovering => {
                    _ = cl.add_1("hover");
                }
                HoverState::Idle => {
                    _ = cl.remove_1("hover");
                }
            }
        }
    }

    pub fn set_pressed(&self, pressed: bool) {
        let cl = self.dot.class_list();
        if pressed {
            _ = cl.add_1("click");
        } else {
            _ = cl.remove_1("click");
        }
    }
}

fn place(el: &web::Element, pos: Vec2) {
    let (left, top) = position_style(pos);
    dom::set_style(el, "left", &left);
    dom::set_style(el, "top", &top);
}

fn ensure_visual(document: &web::Document, body: &web::HtmlElement, class: &str) -> Option<web::Element> {
    if let Some(existing) = dom::query(document, &format!(".{class}")) {
        return Some(existing);
    }
    let el = document.create_element("div").ok()?;
    el.set_class_name(class);
    place(&el, Vec2::ZERO);
    dom::set_style(&el, "opacity", "1");
    dom::set_style(&el, "visibility", "visible");
    _ = body.append_child(&el);
    Some(el)
}

/// Create the cursor visuals and start the follower loop.
///
/// Returns `None` on mobile-width viewports, where the platform cursor stays.
pub fn init_custom_cursor<S>(
    document: &web::Document,
    pointer: &Rc<RefCell<PointerTracker>>,
    frames: Rc<S>,
) -> Option<CursorVisuals>
where
    S: FrameScheduler + 'static,
{
    let (width, height) = dom::viewport_size();
    if !cursor_enabled(width) {
        log::info!("[cursor] mobile viewport ({}px), custom cursor disabled", width);
        return None;
    }
    let body = document.body()?;
    _ = body.class_list().add_1("custom-cursor");

    let visuals = CursorVisuals {
        dot: ensure_visual(document, &body, "cursor")?,
        follower: ensure_visual(document, &body, "cursor-follower")?,
    };

    let center = Vec2::new(width as f32, height as f32) * 0.5;
    pointer.borrow_mut().place(center);
    let mut follow = CursorFollower::new(center);

    let pointer = pointer.clone();
    let v = visuals.clone();
    run_every_frame(frames, LoopHandle::new(), move || {
        let target = pointer.borrow().state().raw;
        follow.step(target);
        place(&v.dot, follow.cursor);
        place(&v.follower, follow.follower);
    });
    log::info!("[cursor] custom cursor loop started");
    Some(visuals)
}

/// Short-lived ripple at a click position.
pub fn spawn_ripple(document: &web::Document, x: i32, y: i32) {
    let Some(body) = document.body() else {
        return;
    };
    let Ok(ripple) = document.create_element("div") else {
        return;
    };
    ripple.set_class_name("cursor-ripple");
    place(&ripple, Vec2::new(x as f32, y as f32));
    _ = body.append_child(&ripple);
    crate::timers::after(RIPPLE_LIFETIME_MS, move || ripple.remove());
}
