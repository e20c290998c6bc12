#![allow(dead_code)]

/// Shared test doubles: a draw-call-recording surface and a probe state
/// that journals every hook invocation.

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::KeyCode;
use crossterm::style::Color;

use space_invaders::{FontStyle, Session, State, Surface, TextAlign, Transition};

// ── Recording surface ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    Font(FontStyle),
    Fill(Color),
    Align(TextAlign),
    Text(u16, u16, String),
    Present,
}

/// `Surface` double that records every call instead of touching a terminal.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text payloads drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(_, _, s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) -> std::io::Result<()> {
        self.calls.push(DrawCall::Clear);
        Ok(())
    }

    fn set_font(&mut self, font: FontStyle) -> std::io::Result<()> {
        self.calls.push(DrawCall::Font(font));
        Ok(())
    }

    fn set_fill(&mut self, color: Color) -> std::io::Result<()> {
        self.calls.push(DrawCall::Fill(color));
        Ok(())
    }

    fn set_align(&mut self, align: TextAlign) -> std::io::Result<()> {
        self.calls.push(DrawCall::Align(align));
        Ok(())
    }

    fn draw_text(&mut self, x: u16, y: u16, text: &str) -> std::io::Result<()> {
        self.calls.push(DrawCall::Text(x, y, text.to_string()));
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.calls.push(DrawCall::Present);
        Ok(())
    }
}

// ── Probe state ───────────────────────────────────────────────────────────────

/// State double that appends `"<name>.<hook>"` to a shared journal on every
/// hook call and can hand back one queued transition from `update` or
/// `key_down`.
pub struct Probe {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
    /// Every `dt` seen by `update` and `draw`, in call order.
    pub dts: Rc<RefCell<Vec<f32>>>,
    on_update: Option<Transition>,
    on_key_down: Option<Transition>,
}

impl Probe {
    pub fn new(name: &'static str, log: &Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            name,
            log: Rc::clone(log),
            dts: Rc::new(RefCell::new(Vec::new())),
            on_update: None,
            on_key_down: None,
        }
    }

    /// Queue a transition to be returned by the next `update` call.
    pub fn with_update_transition(mut self, t: Transition) -> Self {
        self.on_update = Some(t);
        self
    }

    /// Queue a transition to be returned by the next `key_down` call.
    pub fn with_key_down_transition(mut self, t: Transition) -> Self {
        self.on_key_down = Some(t);
        self
    }

    fn record(&self, hook: &str) {
        self.log.borrow_mut().push(format!("{}.{}", self.name, hook));
    }
}

impl State for Probe {
    fn name(&self) -> &str {
        self.name
    }

    fn enter(&mut self, _session: &mut Session) {
        self.record("enter");
    }

    fn leave(&mut self, _session: &mut Session) {
        self.record("leave");
    }

    fn update(&mut self, _session: &mut Session, dt: f32) -> Transition {
        self.record("update");
        self.dts.borrow_mut().push(dt);
        self.on_update.take().unwrap_or(Transition::None)
    }

    fn draw(
        &mut self,
        _session: &Session,
        dt: f32,
        _surface: &mut dyn Surface,
    ) -> std::io::Result<()> {
        self.record("draw");
        self.dts.borrow_mut().push(dt);
        Ok(())
    }

    fn key_down(&mut self, _session: &mut Session, code: KeyCode) -> Transition {
        self.record(&format!("key_down:{code:?}"));
        self.on_key_down.take().unwrap_or(Transition::None)
    }

    fn key_up(&mut self, _session: &mut Session, code: KeyCode) -> Transition {
        self.record(&format!("key_up:{code:?}"));
        Transition::None
    }
}
