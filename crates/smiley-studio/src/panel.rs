//! Keyboard control panel over the face scene.
//!
//! Each control is a clamped slider bound to one scene value. Tab / Shift+Tab
//! walk the controls, held ArrowUp / ArrowDown move the selected value at its
//! rate per second (Shift for ten times faster), `R` resets it and `P` dumps
//! every value to the log.

use std::f32::consts::TAU;

use smiley_engine::coords::{ColorRgba, Viewport};
use smiley_engine::input::{InputFrame, InputState, Key};
use smiley_engine::scene::{ObjectId, Scene};

use crate::face::{BORDER, FACE, LEFT_EYE, MOUTH, RIGHT_EYE};

const FAST_MULTIPLIER: f32 = 10.0;

const TRANSLATION_RATE: f32 = 200.0;
const ROTATION_RATE: f32 = 1.0;
const SCALE_RATE: f32 = 1.0;
const COLOR_RATE: f32 = 0.5;

/// Color groups editable from the panel.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Swatch {
    /// Border color, mirrored onto both eyes.
    BorderAndEyes,
    Face,
    Mouth,
}

impl Swatch {
    fn source(self) -> ObjectId {
        match self {
            Swatch::BorderAndEyes => BORDER,
            Swatch::Face => FACE,
            Swatch::Mouth => MOUTH,
        }
    }

    fn targets(self) -> &'static [ObjectId] {
        match self {
            Swatch::BorderAndEyes => &[BORDER, RIGHT_EYE, LEFT_EYE],
            Swatch::Face => &[FACE],
            Swatch::Mouth => &[MOUTH],
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    fn get(self, c: ColorRgba) -> f32 {
        match self {
            Channel::R => c.r,
            Channel::G => c.g,
            Channel::B => c.b,
        }
    }

    fn set(self, mut c: ColorRgba, v: f32) -> ColorRgba {
        match self {
            Channel::R => c.r = v,
            Channel::G => c.g = v,
            Channel::B => c.b = v,
        }
        c
    }
}

/// Scene value a control is bound to.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Param {
    FaceX,
    FaceY,
    PivotX,
    PivotY,
    Rotation,
    ScaleX,
    ScaleY,
    Color(Swatch, Channel),
}

impl Param {
    fn read(self, scene: &Scene) -> f32 {
        match self {
            Param::FaceX => scene.border().position().x,
            Param::FaceY => scene.border().position().y,
            Param::PivotX => scene.pivot().position().x,
            Param::PivotY => scene.pivot().position().y,
            Param::Rotation => scene.border().rotation_radians(),
            Param::ScaleX => scene.border().scale().x,
            Param::ScaleY => scene.border().scale().y,
            Param::Color(swatch, ch) => scene
                .get(swatch.source())
                .map(|o| ch.get(o.color()))
                .unwrap_or_default(),
        }
    }

    fn write(self, scene: &mut Scene, v: f32) {
        match self {
            Param::FaceX => scene.border_mut().set_position_x(v),
            Param::FaceY => scene.border_mut().set_position_y(v),
            Param::PivotX => scene.pivot_mut().set_position_x(v),
            Param::PivotY => scene.pivot_mut().set_position_y(v),
            Param::Rotation => scene.border_mut().set_rotation_radians(v),
            Param::ScaleX => scene.border_mut().set_scale_x(v),
            Param::ScaleY => scene.border_mut().set_scale_y(v),
            Param::Color(swatch, ch) => {
                let Some(base) = scene.get(swatch.source()).map(|o| o.color()) else {
                    return;
                };
                let color = ch.set(base, v);
                for id in swatch.targets() {
                    if let Some(o) = scene.get_mut(*id) {
                        o.set_color(color);
                    }
                }
            }
        }
    }
}

/// One clamped slider.
#[derive(Debug, Clone)]
pub struct Control {
    pub folder: &'static str,
    pub label: &'static str,
    pub param: Param,
    pub min: f32,
    pub max: f32,
    /// Change per second while an arrow key is held.
    pub rate: f32,
    initial: f32,
}

impl Control {
    fn new(folder: &'static str, label: &'static str, param: Param, min: f32, max: f32, rate: f32) -> Self {
        Self { folder, label, param, min, max, rate, initial: 0.0 }
    }

    #[inline]
    pub fn initial(&self) -> f32 {
        self.initial
    }

    fn clamp(&self, v: f32) -> f32 {
        v.clamp(self.min, self.max)
    }
}

/// Panel state: the control list and the current selection.
#[derive(Debug, Clone)]
pub struct Panel {
    controls: Vec<Control>,
    selected: usize,
    canvas: Viewport,
}

impl Panel {
    /// Builds the controls for `scene`, remembering its current values as the
    /// reset targets. Translation ranges span `canvas`.
    pub fn new(scene: &Scene, canvas: Viewport) -> Self {
        use Channel::{B, G, R};
        use Swatch::{BorderAndEyes, Face, Mouth};

        let (w, h) = (canvas.width, canvas.height);
        let color = |label, swatch, ch| {
            Control::new("Face Colors", label, Param::Color(swatch, ch), 0.0, 1.0, COLOR_RATE)
        };

        let mut controls = vec![
            Control::new("Face Translation", "x", Param::FaceX, 0.0, w, TRANSLATION_RATE),
            Control::new("Face Translation", "y", Param::FaceY, 0.0, h, TRANSLATION_RATE),
            Control::new("Pivot Translation", "x", Param::PivotX, 0.0, w, TRANSLATION_RATE),
            Control::new("Pivot Translation", "y", Param::PivotY, 0.0, h, TRANSLATION_RATE),
            Control::new("Rotation", "z", Param::Rotation, -TAU, TAU, ROTATION_RATE),
            Control::new("Scale", "x", Param::ScaleX, -5.0, 5.0, SCALE_RATE),
            Control::new("Scale", "y", Param::ScaleY, -5.0, 5.0, SCALE_RATE),
            color("Border and eyes r", BorderAndEyes, R),
            color("Border and eyes g", BorderAndEyes, G),
            color("Border and eyes b", BorderAndEyes, B),
            color("Face r", Face, R),
            color("Face g", Face, G),
            color("Face b", Face, B),
            color("Mouth r", Mouth, R),
            color("Mouth g", Mouth, G),
            color("Mouth b", Mouth, B),
        ];

        for c in &mut controls {
            c.initial = c.param.read(scene);
        }

        Self { controls, selected: 0, canvas }
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn selected(&self) -> &Control {
        &self.controls[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.controls.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.controls.len() - 1) % self.controls.len();
    }

    /// Re-spans the translation controls after the canvas is resized.
    ///
    /// Current values are left alone; they are clamped on the next edit.
    pub fn set_canvas(&mut self, canvas: Viewport) {
        if canvas == self.canvas {
            return;
        }
        self.canvas = canvas;

        for c in &mut self.controls {
            match c.param {
                Param::FaceX | Param::PivotX => c.max = canvas.width,
                Param::FaceY | Param::PivotY => c.max = canvas.height,
                _ => {}
            }
        }
    }

    /// Moves the selected value by `direction * rate * dt`, clamped to its
    /// range, and returns the value written.
    pub fn nudge(&self, scene: &mut Scene, direction: f32, dt: f32, fast: bool) -> f32 {
        let c = self.selected();
        let rate = if fast { c.rate * FAST_MULTIPLIER } else { c.rate };
        let v = c.clamp(c.param.read(scene) + direction * rate * dt);
        c.param.write(scene, v);
        log::debug!("{} {} = {v:.4}", c.folder, c.label);
        v
    }

    /// Restores the selected control to the value it had when the panel was built.
    pub fn reset_selected(&self, scene: &mut Scene) {
        let c = self.selected();
        c.param.write(scene, c.initial);
        log::debug!("{} {} reset to {:.4}", c.folder, c.label, c.initial);
    }

    /// Logs every control's current value at info.
    pub fn log_values(&self, scene: &Scene) {
        let mut folder = "";
        for c in &self.controls {
            if c.folder != folder {
                folder = c.folder;
                log::info!("[{folder}]");
            }
            log::info!("  {:<18} {:>10.4}  [{}, {}]", c.label, c.param.read(scene), c.min, c.max);
        }
    }

    /// Short status line for the selected control.
    pub fn status(&self, scene: &Scene) -> String {
        let c = self.selected();
        format!(
            "{} / {} = {:.3}  ({}/{})",
            c.folder,
            c.label,
            c.param.read(scene),
            self.selected + 1,
            self.controls.len()
        )
    }

    /// Applies this frame's keyboard input. Returns true when the scene changed.
    pub fn update(&mut self, scene: &mut Scene, input: &InputState, frame: &InputFrame, dt: f32) -> bool {
        let shift = input.modifiers.shift;

        if frame.pressed(Key::Tab) {
            if shift {
                self.select_prev();
            } else {
                self.select_next();
            }
        }

        if frame.pressed(Key::P) {
            self.log_values(scene);
        }

        let mut changed = false;

        if frame.pressed(Key::R) {
            self.reset_selected(scene);
            changed = true;
        }

        let up = input.key_down(Key::ArrowUp) as i32 as f32;
        let down = input.key_down(Key::ArrowDown) as i32 as f32;
        let direction = up - down;
        if direction != 0.0 {
            self.nudge(scene, direction, dt, shift);
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::{build_scene, FaceLayout};
    use smiley_engine::input::{InputEvent, KeyState, Modifiers};

    const CANVAS: Viewport = Viewport::new(800.0, 600.0);

    fn setup() -> (Scene, Panel) {
        let scene = build_scene(CANVAS, &FaceLayout::default()).unwrap();
        let panel = Panel::new(&scene, CANVAS);
        (scene, panel)
    }

    fn select(panel: &mut Panel, param: Param) {
        while panel.selected().param != param {
            panel.select_next();
        }
    }

    fn press(st: &mut InputState, fr: &mut InputFrame, key: Key, shift: bool) {
        let modifiers = Modifiers { shift, ..Default::default() };
        st.apply_event(fr, InputEvent::ModifiersChanged(modifiers));
        st.apply_event(fr, InputEvent::Key { key, state: KeyState::Pressed, modifiers, repeat: false });
    }

    fn tap(st: &mut InputState, fr: &mut InputFrame, key: Key, shift: bool) {
        press(st, fr, key, shift);
        let modifiers = st.modifiers;
        st.apply_event(fr, InputEvent::Key { key, state: KeyState::Released, modifiers, repeat: false });
    }

    #[test]
    fn ranges() {
        let (_, panel) = setup();
        let find = |p: Param| panel.controls().iter().find(|c| c.param == p).unwrap().clone();

        let fx = find(Param::FaceX);
        assert_eq!((fx.min, fx.max), (0.0, 800.0));
        let py = find(Param::PivotY);
        assert_eq!((py.min, py.max), (0.0, 600.0));
        let rot = find(Param::Rotation);
        assert_eq!((rot.min, rot.max), (-TAU, TAU));
        let sy = find(Param::ScaleY);
        assert_eq!((sy.min, sy.max), (-5.0, 5.0));
        let mr = find(Param::Color(Swatch::Mouth, Channel::R));
        assert_eq!((mr.min, mr.max), (0.0, 1.0));
    }

    #[test]
    fn initial_values_come_from_scene() {
        let (_, panel) = setup();
        assert_eq!(panel.controls()[0].initial(), 400.0);
        assert_eq!(panel.controls()[2].initial(), 340.0);
    }

    #[test]
    fn selection_wraps() {
        let (_, mut panel) = setup();
        panel.select_prev();
        assert_eq!(panel.selected().param, Param::Color(Swatch::Mouth, Channel::B));
        panel.select_next();
        assert_eq!(panel.selected().param, Param::FaceX);
    }

    #[test]
    fn nudge_moves_at_rate_and_clamps() {
        let (mut scene, mut panel) = setup();
        select(&mut panel, Param::ScaleX);

        let v = panel.nudge(&mut scene, 1.0, 0.5, false);
        assert!((v - 1.5).abs() < 1e-6);
        assert!((scene.border().scale().x - 1.5).abs() < 1e-6);

        let v = panel.nudge(&mut scene, 1.0, 1.0, true);
        assert_eq!(v, 5.0);
        assert_eq!(scene.border().scale().x, 5.0);
    }

    #[test]
    fn rotation_clamps_to_full_turns() {
        let (mut scene, mut panel) = setup();
        select(&mut panel, Param::Rotation);
        panel.nudge(&mut scene, -1.0, 100.0, false);
        assert_eq!(scene.border().rotation_radians(), -TAU);
    }

    #[test]
    fn reset_restores_initial_value() {
        let (mut scene, mut panel) = setup();
        select(&mut panel, Param::PivotX);
        panel.nudge(&mut scene, 1.0, 0.1, false);
        assert_ne!(scene.pivot().position().x, 340.0);
        panel.reset_selected(&mut scene);
        assert_eq!(scene.pivot().position().x, 340.0);
    }

    #[test]
    fn border_color_is_mirrored_onto_eyes() {
        let (mut scene, mut panel) = setup();
        select(&mut panel, Param::Color(Swatch::BorderAndEyes, Channel::G));
        panel.nudge(&mut scene, 1.0, 1.0, false);

        let border = scene.border().color();
        assert!((border.g - 0.5).abs() < 1e-6);
        assert_eq!(scene.get(RIGHT_EYE).unwrap().color(), border);
        assert_eq!(scene.get(LEFT_EYE).unwrap().color(), border);
        assert_ne!(scene.get(FACE).unwrap().color(), border);
    }

    #[test]
    fn face_color_leaves_eyes_alone() {
        let (mut scene, mut panel) = setup();
        let eyes = scene.get(RIGHT_EYE).unwrap().color();
        select(&mut panel, Param::Color(Swatch::Face, Channel::R));
        panel.nudge(&mut scene, -1.0, 1.0, false);
        assert!((scene.get(FACE).unwrap().color().r - 0.5).abs() < 1e-6);
        assert_eq!(scene.get(RIGHT_EYE).unwrap().color(), eyes);
    }

    #[test]
    fn resize_respans_translation() {
        let (_, mut panel) = setup();
        panel.set_canvas(Viewport::new(1024.0, 768.0));
        assert_eq!(panel.controls()[0].max, 1024.0);
        assert_eq!(panel.controls()[3].max, 768.0);
        assert_eq!(panel.controls()[5].max, 5.0);
    }

    #[test]
    fn update_handles_tab_and_held_arrows() {
        let (mut scene, mut panel) = setup();
        let mut st = InputState::default();
        let mut fr = InputFrame::default();

        tap(&mut st, &mut fr, Key::Tab, false);
        assert!(!panel.update(&mut scene, &st, &fr, 0.1));
        assert_eq!(panel.selected().param, Param::FaceY);
        fr.clear();

        tap(&mut st, &mut fr, Key::Tab, true);
        panel.update(&mut scene, &st, &fr, 0.1);
        assert_eq!(panel.selected().param, Param::FaceX);
        fr.clear();

        press(&mut st, &mut fr, Key::ArrowDown, false);
        assert!(panel.update(&mut scene, &st, &fr, 0.1));
        assert!((scene.border().position().x - 380.0).abs() < 1e-3);
        fr.clear();

        // Still held on the next frame.
        assert!(panel.update(&mut scene, &st, &fr, 0.1));
        assert!((scene.border().position().x - 360.0).abs() < 1e-3);
    }

    #[test]
    fn status_names_selected_control() {
        let (scene, panel) = setup();
        assert_eq!(panel.status(&scene), "Face Translation / x = 400.000  (1/16)");
    }
}
