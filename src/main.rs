//! Crystal Chambers entry point
//!
//! Handles platform-specific initialization and wires the DOM to the session.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, PointerEvent};

    use crystal_chambers::audio::AudioManager;
    use crystal_chambers::hud::{HudModel, UnitIndicator};
    use crystal_chambers::sim::GameEvent;
    use crystal_chambers::view::{crystal_class, cube_faces, cube_transform};
    use crystal_chambers::{GameError, Session, SessionScope, Tuning};

    /// Cube edge in CSS pixels
    const CUBE_SIZE: f32 = 96.0;

    /// Everything the DOM handlers share
    struct Shell {
        scope: SessionScope,
        audio: AudioManager,
        document: Document,
        hovered: Option<String>,
    }

    impl Shell {
        /// Run an update against the active session, then redraw
        fn update(&mut self, f: impl FnOnce(&mut Session) -> Vec<GameEvent>) {
            let events = match self.scope.session_mut() {
                Ok(session) => f(session),
                Err(err) => {
                    log::error!("Dropped input: {}", err);
                    return;
                }
            };
            if let Err(err) = self.render(&events) {
                log::error!("Render failed: {}", err);
            }
        }

        fn render(&mut self, events: &[GameEvent]) -> Result<(), GameError> {
            let session = self.scope.session()?;
            let state = session.state();

            self.audio.set_muted(!state.sound_enabled);
            self.audio.play_events(events);

            for unit in &state.puzzles {
                let selector = format!("[data-puzzle-id=\"{}\"] .crystal", unit.id);
                if let Some(el) = self.document.query_selector(&selector).ok().flatten() {
                    let hovered = self.hovered.as_deref() == Some(unit.id.as_str());
                    let _ = el.set_attribute("style", &format!("transform: {}", cube_transform(unit)));
                    let _ = el.set_attribute("class", &crystal_class(unit, hovered));
                }
            }

            let hud = HudModel::from_state(state);
            self.set_text("#hud-time .hud-value", &hud.time);
            self.set_text("#hud-score .hud-value", &hud.score.to_string());
            self.set_text("#hud-progress .hud-value", &format!("{}/{}", hud.solved, hud.total));
            self.set_text("#hud-level .hud-value", &hud.level.to_string());
            self.render_indicators(&hud.indicators);
            if let Some(lines) = hud.hints {
                self.render_hints(lines);
            }
            self.set_hidden("hints", hud.hints.is_none());
            self.set_class("btn-sound", if hud.sound_enabled { "hud-button" } else { "hud-button muted" });

            match &hud.completion {
                Some(summary) => {
                    self.set_text("#completion-time", &summary.time);
                    self.set_text("#completion-score", &summary.score.to_string());
                    self.set_text("#completion-level", &summary.level.to_string());
                    self.set_hidden("completion", false);
                }
                None => self.set_hidden("completion", true),
            }
            Ok(())
        }

        fn render_indicators(&self, indicators: &[UnitIndicator]) {
            let Some(container) = self.document.get_element_by_id("hud-indicators") else {
                return;
            };
            let markup: String = indicators
                .iter()
                .map(|i| format!("<span class=\"{}\"></span>", i.css_class()))
                .collect();
            container.set_inner_html(&markup);
        }

        fn render_hints(&self, lines: &[&str]) {
            if let Some(list) = self.document.query_selector("#hints ul").ok().flatten() {
                let markup: String = lines.iter().map(|line| format!("<li>{line}</li>")).collect();
                list.set_inner_html(&markup);
            }
        }

        fn set_text(&self, selector: &str, text: &str) {
            if let Some(el) = self.document.query_selector(selector).ok().flatten() {
                el.set_text_content(Some(text));
            }
        }

        fn set_hidden(&self, id: &str, hidden: bool) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let _ = el.class_list().toggle_with_force("hidden", hidden);
            }
        }

        fn set_class(&self, id: &str, class: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                let _ = el.set_attribute("class", class);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Crystal Chambers starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let Some(chamber) = document.get_element_by_id("chamber") else {
            log::error!("Missing #chamber element");
            return;
        };

        let tuning = match chamber.get_attribute("data-tuning") {
            Some(json) => Tuning::from_json(&json).unwrap_or_else(|err| {
                log::warn!("Ignoring data-tuning: {}", err);
                Tuning::default()
            }),
            None => Tuning::default(),
        };
        let tick_ms = tuning.tick_interval_ms;

        let mut scope = SessionScope::new();
        let ids: Vec<String> = match scope.begin(tuning) {
            Ok(session) => session.state().puzzles.iter().map(|p| p.id.clone()).collect(),
            Err(err) => {
                log::error!("{}", err);
                return;
            }
        };

        let shell = Rc::new(RefCell::new(Shell {
            scope,
            audio: AudioManager::new(),
            document: document.clone(),
            hovered: None,
        }));

        for (index, id) in ids.iter().enumerate() {
            match build_cube(&document, id, index) {
                Ok(cube) => {
                    let _ = chamber.append_child(&cube);
                    setup_cube_handlers(&cube, id, shell.clone());
                }
                Err(err) => log::error!("Failed to build cube {}: {:?}", id, err),
            }
        }

        setup_buttons(&document, shell.clone());
        setup_clock(&window, tick_ms, shell.clone());

        shell.borrow_mut().update(|_| Vec::new());
        log::info!("Crystal Chambers running!");
    }

    /// Cube wrapper with six faces; the front face carries the crystal number
    fn build_cube(document: &Document, id: &str, index: usize) -> Result<Element, JsValue> {
        let wrapper = document.create_element("div")?;
        wrapper.set_attribute("class", "cube-wrapper")?;
        wrapper.set_attribute("data-puzzle-id", id)?;

        let crystal = document.create_element("div")?;
        crystal.set_attribute("class", "crystal")?;
        for (name, transform) in cube_faces(CUBE_SIZE) {
            let face = document.create_element("div")?;
            face.set_attribute("class", &format!("face face-{name}"))?;
            face.set_attribute("style", &format!("transform: {transform}"))?;
            if name == "front" {
                face.set_text_content(Some(&(index + 1).to_string()));
            }
            crystal.append_child(&face)?;
        }
        wrapper.append_child(&crystal)?;
        Ok(wrapper)
    }

    fn setup_cube_handlers(cube: &Element, id: &str, shell: Rc<RefCell<Shell>>) {
        // Pointer down - grab
        {
            let shell = shell.clone();
            let id = id.to_string();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                event.prevent_default();
                let (x, y) = (event.client_x() as f32, event.client_y() as f32);
                shell.borrow_mut().update(|s| s.pointer_down(&id, x, y));
            });
            let _ = cube.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer move - rotate
        {
            let shell = shell.clone();
            let id = id.to_string();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let (x, y) = (event.client_x() as f32, event.client_y() as f32);
                shell.borrow_mut().update(|s| s.pointer_move(&id, x, y));
            });
            let _ = cube.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Pointer up - release
        {
            let shell = shell.clone();
            let id = id.to_string();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                shell.borrow_mut().update(|s| s.pointer_up(&id));
            });
            let _ = cube.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Hover in
        {
            let shell = shell.clone();
            let id = id.to_string();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                let mut shell = shell.borrow_mut();
                shell.hovered = Some(id.clone());
                shell.update(|_| Vec::new());
            });
            let _ = cube.add_event_listener_with_callback("pointerenter", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Hover out - also ends a drag that leaves the crystal
        {
            let id = id.to_string();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: PointerEvent| {
                let mut shell = shell.borrow_mut();
                shell.hovered = None;
                shell.update(|s| s.pointer_cancel(&id));
            });
            let _ = cube.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(document: &Document, shell: Rc<RefCell<Shell>>) {
        let bindings: [(&str, fn(&mut Session) -> Vec<GameEvent>); 5] = [
            ("btn-sound", Session::toggle_sound),
            ("btn-hints", Session::toggle_hints),
            ("btn-reset", Session::reset),
            ("btn-next-level", Session::next_level),
            ("btn-restart", Session::reset),
        ];

        for (id, action) in bindings {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{} button", id);
                continue;
            };
            let shell = shell.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                shell.borrow_mut().update(action);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_clock(window: &web_sys::Window, tick_ms: u32, shell: Rc<RefCell<Shell>>) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            shell.borrow_mut().update(Session::tick);
        });
        let result = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            i32::try_from(tick_ms).unwrap_or(i32::MAX),
        );
        if let Err(err) = result {
            log::error!("Failed to start clock: {:?}", err);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Crystal Chambers (native) starting...");
    log::info!("Native mode runs a scripted session - run with `trunk serve` for web version");

    if let Err(err) = scripted_session() {
        log::error!("Scripted session failed: {}", err);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play one level by dragging each crystal straight onto its target
#[cfg(not(target_arch = "wasm32"))]
fn scripted_session() -> Result<(), crystal_chambers::GameError> {
    use crystal_chambers::hud::HudModel;
    use crystal_chambers::{SessionScope, Tuning};

    let mut scope = SessionScope::new();
    let session = scope.begin(Tuning::default())?;
    let sensitivity = session.tuning().drag_sensitivity;

    let plan: Vec<(String, glam::Vec3)> = session
        .state()
        .puzzles
        .iter()
        .map(|p| (p.id.clone(), p.target_rotation))
        .collect();

    for (id, target) in &plan {
        // Vertical travel turns X, horizontal travel turns Y
        let dx = (target.y / sensitivity).round();
        let dy = (target.x / sensitivity).round();
        session.pointer_down(id, 0.0, 0.0);
        session.pointer_move(id, dx, dy);
        session.pointer_up(id);
        session.tick();

        if let Some(unit) = session.state().puzzle(id) {
            if !unit.solved {
                // Z is never driven by dragging; set it directly
                let mut rotation = unit.rotation;
                rotation.z = target.z;
                session.dispatch(crystal_chambers::sim::Action::rotate(id.as_str(), rotation));
            }
        }

        let hud = HudModel::from_state(session.state());
        println!(
            "{} -> {}  score {}  solved {}/{}",
            hud.time, id, hud.score, hud.solved, hud.total
        );
    }

    match crystal_chambers::hud::completion(session.state()) {
        Some(summary) => println!(
            "✓ Chamber {} unlocked in {} with {} points",
            summary.level, summary.time, summary.score
        ),
        None => println!("Chamber still locked"),
    }

    session.next_level();
    println!("Now on level {}", session.state().current_level);
    Ok(())
}
