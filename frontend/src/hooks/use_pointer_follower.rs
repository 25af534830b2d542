use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::hooks::dom::{cancel_frame, element_rect, request_frame};
use crate::pointer::{FollowerFrame, FollowerOptions, PointerFollower, Vec2, DEFAULT_FRAME_DT};

pub struct PointerFollowerHandle {
    pub frame: FollowerFrame,
    pub onmousemove: Callback<MouseEvent>,
    pub onmouseleave: Callback<MouseEvent>,
}

impl PointerFollowerHandle {
    pub fn translate_style(&self) -> String {
        let Vec2 { x, y } = self.frame.offset;
        format!("transform: translate3d({:.2}px, {:.2}px, 0);", x, y)
    }

    pub fn tilt_style(&self, perspective_px: u32) -> String {
        let tilt = self.frame.tilt;
        format!(
            "transform: perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg);",
            perspective_px, tilt.rotate_x, tilt.rotate_y
        )
    }
}

struct FrameLoop {
    follower: PointerFollower,
    pending: Option<i32>,
    last_time: Option<f64>,
    on_frame: Callback<FollowerFrame>,
}

fn ensure_running(state: &Rc<RefCell<FrameLoop>>) {
    {
        let s = state.borrow();
        if s.pending.is_some() || !s.follower.is_mounted() || s.follower.is_settled() {
            return;
        }
    }
    let next = state.clone();
    match request_frame(move |time| run_frame(next, time)) {
        Ok(id) => state.borrow_mut().pending = Some(id),
        Err(e) => warn!("Could not schedule animation frame: {}", e),
    }
}

fn run_frame(state: Rc<RefCell<FrameLoop>>, time: f64) {
    let (frame, moving, on_frame) = {
        let mut s = state.borrow_mut();
        s.pending = None;
        if !s.follower.is_mounted() {
            return;
        }
        let dt = s
            .last_time
            .map(|last| (time - last) / 1000.0)
            .unwrap_or(DEFAULT_FRAME_DT);
        let moving = s.follower.tick(dt);
        s.last_time = if moving { Some(time) } else { None };
        (s.follower.frame(), moving, s.on_frame.clone())
    };
    on_frame.emit(frame);
    if moving {
        ensure_running(&state);
    }
}

/// Freezes the follower and drops any scheduled frame.
fn stop(state: &Rc<RefCell<FrameLoop>>) {
    let mut s = state.borrow_mut();
    s.follower.unmount();
    if let Some(id) = s.pending.take() {
        cancel_frame(id);
    }
}

/// Springs the element behind `node` toward the pointer while hovered.
///
/// Options are read once, on first render.
#[hook]
pub fn use_pointer_follower(node: NodeRef, options: FollowerOptions) -> PointerFollowerHandle {
    let frame = use_state_eq(FollowerFrame::default);
    let state = {
        let set_frame = frame.setter();
        use_mut_ref(move || FrameLoop {
            follower: PointerFollower::new(options),
            pending: None,
            last_time: None,
            on_frame: Callback::from(move |frame| set_frame.set(frame)),
        })
    };

    {
        let state = state.clone();
        use_effect_with_deps(
            move |_| move || stop(&state),
            (),
        );
    }

    let onmousemove = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(element) = node.cast::<Element>() else {
                return;
            };
            let pointer = Vec2::new(e.client_x() as f64, e.client_y() as f64);
            state
                .borrow_mut()
                .follower
                .pointer_move(element_rect(&element), pointer);
            ensure_running(&state);
        })
    };

    let onmouseleave = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            state.borrow_mut().follower.pointer_leave();
            ensure_running(&state);
        })
    };

    PointerFollowerHandle {
        frame: *frame,
        onmousemove,
        onmouseleave,
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::pointer::Rect;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn frame_loop(emitted: Rc<Cell<u32>>) -> Rc<RefCell<FrameLoop>> {
        Rc::new(RefCell::new(FrameLoop {
            follower: PointerFollower::new(FollowerOptions::default()),
            pending: None,
            last_time: None,
            on_frame: Callback::from(move |_| emitted.set(emitted.get() + 1)),
        }))
    }

    fn hover(state: &Rc<RefCell<FrameLoop>>) {
        state
            .borrow_mut()
            .follower
            .pointer_move(Rect::new(0.0, 0.0, 100.0, 100.0), Vec2::new(90.0, 10.0));
    }

    #[wasm_bindgen_test]
    fn test_run_frame_after_unmount_emits_nothing() {
        let emitted = Rc::new(Cell::new(0));
        let state = frame_loop(emitted.clone());
        hover(&state);
        state.borrow_mut().follower.unmount();

        run_frame(state.clone(), 16.0);

        assert_eq!(emitted.get(), 0);
        assert!(state.borrow().pending.is_none());
    }

    #[wasm_bindgen_test]
    fn test_moving_frame_emits_and_reschedules() {
        let emitted = Rc::new(Cell::new(0));
        let state = frame_loop(emitted.clone());
        hover(&state);

        run_frame(state.clone(), 16.0);

        assert_eq!(emitted.get(), 1);
        assert!(state.borrow().pending.is_some());
        stop(&state);
        assert!(state.borrow().pending.is_none());
    }

    #[wasm_bindgen_test]
    fn test_settled_follower_schedules_nothing() {
        let state = frame_loop(Rc::new(Cell::new(0)));
        ensure_running(&state);
        assert!(state.borrow().pending.is_none());
    }

    #[wasm_bindgen_test]
    async fn test_stop_cancels_scheduled_frame() {
        let emitted = Rc::new(Cell::new(0));
        let state = frame_loop(emitted.clone());
        hover(&state);
        ensure_running(&state);
        assert!(state.borrow().pending.is_some());

        stop(&state);
        TimeoutFuture::new(100).await;

        assert_eq!(emitted.get(), 0);
        assert!(state.borrow().pending.is_none());
    }
}
