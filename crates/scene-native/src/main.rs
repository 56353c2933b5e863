use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::keyboard::Key;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use scene_core::{
    key_action, EnvironmentEvent, EnvironmentLight, KeyAction, PointerButton, Renderer,
    SceneConfig, SceneController, SceneVariant, Viewport,
};

// Pixels per wheel "line", matching what browsers report for one notch.
const WHEEL_LINE_PX: f32 = 100.0;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "scene-native")]
#[command(about = "Paint spheres onto hidden walls (desktop front-end)")]
struct Args {
    /// Radiance .hdr environment map; selects the environment-lit scene
    #[arg(long)]
    env: Option<PathBuf>,

    /// Fixed seed for the wall layout
    #[arg(long)]
    seed: Option<u64>,

    /// Orbit inertia: fraction of pending motion applied per frame, in (0, 1]
    #[arg(long, value_parser = parse_damping)]
    damping: Option<f32>,
}

fn parse_damping(s: &str) -> Result<f32, String> {
    let f: f32 = s.parse().map_err(|e| format!("{e}"))?;
    if f.is_finite() && f > 0.0 && f <= 1.0 {
        Ok(f)
    } else {
        Err(format!("{f} is not in (0, 1]"))
    }
}

fn viewport_for(size: PhysicalSize<u32>, scale_factor: f64) -> Viewport {
    let sf = scale_factor as f32;
    Viewport::new(size.width as f32 / sf, size.height as f32 / sf, sf)
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(n) => PointerButton::Other(n),
    }
}

/// Wheel delta in DOM convention: negative means scroll up, zoom in.
fn wheel_delta_y(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
        MouseScrollDelta::PixelDelta(p) => -(p.y as f32),
    }
}

fn load_environment(path: &std::path::Path) -> EnvironmentEvent {
    let loaded = std::fs::read(path)
        .with_context(|| format!("reading {}", path.display()))
        .and_then(|bytes| Ok(EnvironmentLight::decode_hdr(&bytes)?));
    match loaded {
        Ok(env) => EnvironmentEvent::Loaded(env),
        Err(e) => EnvironmentEvent::Failed(format!("{e:#}")),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let event_loop = EventLoop::new().context("event loop")?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("wall-painter (native)")
            .build(&event_loop)
            .context("window")?,
    );

    let config = SceneConfig {
        variant: match &args.env {
            Some(p) => SceneVariant::EnvironmentMapped {
                source: p.display().to_string(),
            },
            None => SceneVariant::Plain,
        },
        seed: args.seed,
        orbit_damping: args.damping,
        ..SceneConfig::default()
    };
    let mut scene = SceneController::new(
        config,
        viewport_for(window.inner_size(), window.scale_factor()),
    );
    if let Some(path) = &args.env {
        scene.handle_environment(load_environment(path));
    }

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(Arc::clone(&window))?;
    let size = window.inner_size();
    let mut renderer: Renderer<'static> =
        pollster::block_on(Renderer::new(&instance, surface, size.width, size.height))?;

    // winit reports presses without a position; remember the last cursor
    let mut cursor = scene.viewport().center();
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                scene.resize(viewport_for(size, window.scale_factor()));
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                scene.resize(viewport_for(window.inner_size(), scale_factor));
            }
            WindowEvent::CursorMoved { position, .. } => {
                let p = position.to_logical::<f32>(window.scale_factor());
                cursor = (p.x, p.y);
                scene.pointer_move(p.x, p.y);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = pointer_button(button);
                match state {
                    ElementState::Pressed => {
                        scene.pointer_down(button, cursor.0, cursor.1);
                    }
                    ElementState::Released => scene.pointer_up(button),
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                scene.wheel(wheel_delta_y(delta));
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                if let Key::Character(c) = &event.logical_key {
                    match key_action(c.as_str()) {
                        Some(KeyAction::ResetScene) => scene.reset(),
                        Some(KeyAction::ToggleWalls) => {
                            let shown = scene.toggle_walls();
                            log::info!("[walls] {}", if shown { "revealed" } else { "hidden" });
                        }
                        // no panel on desktop
                        Some(KeyAction::TogglePanel) | None => {}
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => {
            scene.tick();
            match renderer.render(&mut scene) {
                Ok(_) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
