use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::error::SiteError;
use crate::hooks::dom::{cancel_frame, request_frame};
use crate::particles::ParticleField as Field;
use crate::pointer::{DEFAULT_FRAME_DT, MAX_FRAME_DT};

const SEED: u64 = 0x5EED_B1E5;
const LINK_DISTANCE: f64 = 120.0;
// One particle per this many square px, capped.
const AREA_PER_PARTICLE: f64 = 14_000.0;
const MAX_PARTICLES: usize = 90;

#[derive(Properties, PartialEq)]
pub struct ParticleFieldProps {
    #[prop_or_default]
    pub class: Classes,
}

struct Scene {
    field: Field,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pending: Option<i32>,
    last_time: Option<f64>,
    alive: bool,
}

impl Scene {
    fn new(canvas: HtmlCanvasElement) -> Result<Self, SiteError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| SiteError::Js("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SiteError::Js("not a 2d context".to_string()))?;
        let (w, h) = canvas_size(&canvas);
        let count = ((w * h / AREA_PER_PARTICLE) as usize).clamp(12, MAX_PARTICLES);
        Ok(Self {
            field: Field::new(count, w, h, SEED),
            canvas,
            ctx,
            pending: None,
            last_time: None,
            alive: true,
        })
    }

    fn fit(&mut self) {
        let (w, h) = canvas_size(&self.canvas);
        self.canvas.set_width(w as u32);
        self.canvas.set_height(h as u32);
        self.field.resize(w, h);
    }

    fn draw(&self) {
        let (w, h) = self.field.size();
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, w, h);

        ctx.set_line_width(1.0);
        for link in self.field.links(LINK_DISTANCE) {
            ctx.set_stroke_style_str(&format!("rgba(126, 178, 255, {:.3})", link.strength * 0.35));
            ctx.begin_path();
            ctx.move_to(link.from.x, link.from.y);
            ctx.line_to(link.to.x, link.to.y);
            ctx.stroke();
        }

        ctx.set_fill_style_str("rgba(180, 205, 255, 0.85)");
        for p in self.field.particles() {
            ctx.begin_path();
            let _ = ctx.arc(p.pos.x, p.pos.y, p.radius, 0.0, TAU);
            ctx.fill();
        }
    }
}

fn canvas_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
    (
        canvas.client_width().max(1) as f64,
        canvas.client_height().max(1) as f64,
    )
}

fn schedule(scene: &Rc<RefCell<Scene>>) {
    let next = scene.clone();
    match request_frame(move |time| animate(next, time)) {
        Ok(id) => scene.borrow_mut().pending = Some(id),
        Err(e) => warn!("Particle field stopped: {}", e),
    }
}

fn animate(scene: Rc<RefCell<Scene>>, time: f64) {
    {
        let mut s = scene.borrow_mut();
        s.pending = None;
        if !s.alive {
            return;
        }
        let dt = s
            .last_time
            .map(|last| ((time - last) / 1000.0).clamp(0.0, MAX_FRAME_DT))
            .unwrap_or(DEFAULT_FRAME_DT);
        s.last_time = Some(time);
        s.field.step(dt);
        s.draw();
    }
    schedule(&scene);
}

/// Canvas of drifting, softly linked dots behind the hero.
#[function_component(ParticleField)]
pub fn particle_field(props: &ParticleFieldProps) -> Html {
    let canvas_ref = use_node_ref();
    let scene = use_mut_ref(|| None::<Rc<RefCell<Scene>>>);
    let window_size = use_window_size();

    {
        let canvas_ref = canvas_ref.clone();
        let scene = scene.clone();
        use_effect_with_deps(
            move |_| {
                let started = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or_else(|| SiteError::Js("canvas not mounted".to_string()))
                    .and_then(Scene::new);
                match started {
                    Ok(mut s) => {
                        s.fit();
                        debug!("Particle field with {} particles", s.field.particles().len());
                        let s = Rc::new(RefCell::new(s));
                        schedule(&s);
                        *scene.borrow_mut() = Some(s);
                    }
                    Err(e) => warn!("Particle field disabled: {}", e),
                }
                move || {
                    if let Some(s) = scene.borrow_mut().take() {
                        let mut s = s.borrow_mut();
                        s.alive = false;
                        if let Some(id) = s.pending.take() {
                            cancel_frame(id);
                        }
                    }
                }
            },
            (),
        );
    }

    {
        let scene = scene.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(s) = scene.borrow().as_ref() {
                    s.borrow_mut().fit();
                }
                || ()
            },
            window_size,
        );
    }

    html! {
        <canvas ref={canvas_ref} class={classes!("particle-field", props.class.clone())} aria-hidden="true" />
    }
}
