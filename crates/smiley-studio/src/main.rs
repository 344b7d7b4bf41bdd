mod face;
mod panel;

use anyhow::Result;
use winit::dpi::LogicalSize;

use smiley_engine::coords::ColorRgba;
use smiley_engine::core::{App, AppControl, FrameCtx};
use smiley_engine::device::GpuInit;
use smiley_engine::input::Key;
use smiley_engine::logging::{init_logging, LoggingConfig};
use smiley_engine::render::MeshRenderer;
use smiley_engine::scene::Scene;
use smiley_engine::window::{Runtime, RuntimeConfig};

use face::{build_scene, FaceLayout};
use panel::Panel;

const TITLE: &str = "smiley";
const CLEAR: ColorRgba = ColorRgba::white();

/// Scene, controls and renderer; built on the first frame once the canvas size is known.
struct Studio {
    scene: Scene,
    panel: Panel,
    renderer: MeshRenderer,
    title: String,
}

struct SmileyApp {
    layout: FaceLayout,
    studio: Option<Studio>,
}

impl SmileyApp {
    fn new(layout: FaceLayout) -> Self {
        Self { layout, studio: None }
    }

    fn frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl> {
        let viewport = ctx.window.viewport();

        if self.studio.is_none() {
            let scene = build_scene(viewport, &self.layout)?;
            let panel = Panel::new(&scene, viewport);
            log::info!("Tab/Shift+Tab select, Up/Down adjust (Shift = fast), R reset, P print, Esc quit");
            self.studio = Some(Studio {
                scene,
                panel,
                renderer: MeshRenderer::new(),
                title: String::new(),
            });
        }
        let Some(studio) = self.studio.as_mut() else {
            return Ok(AppControl::Continue);
        };

        if ctx.input_frame.pressed(Key::Escape) {
            ctx.runtime.exit();
            return Ok(AppControl::Continue);
        }

        studio.panel.set_canvas(viewport);
        studio
            .panel
            .update(&mut studio.scene, ctx.input, ctx.input_frame, ctx.time.dt);

        let title = format!("{TITLE} | {}", studio.panel.status(&studio.scene));
        if title != studio.title {
            ctx.window.set_title(&title);
            studio.title = title;
        }

        let Studio { scene, renderer, .. } = studio;
        ctx.render(CLEAR, |rctx, target| {
            renderer.prepare(rctx, scene)?;
            renderer.render(rctx, target, &scene.resolve());
            Ok(())
        })
    }
}

impl App for SmileyApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        match self.frame(ctx) {
            Ok(control) => control,
            Err(e) => {
                log::error!("frame failed: {e:#}");
                AppControl::Exit
            }
        }
    }

    fn on_exit(&mut self) {
        log::info!("smiley studio exiting");
    }
}

fn main() {
    init_logging(LoggingConfig::default());

    let config = RuntimeConfig {
        title: TITLE.to_string(),
        initial_size: LogicalSize::new(800.0, 600.0),
    };

    if let Err(e) = Runtime::run(config, GpuInit::default(), SmileyApp::new(FaceLayout::default())) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
