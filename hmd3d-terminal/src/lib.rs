/// Terminal-based side-by-side stereo renderer
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal,
};
use hmd3d_core::{
    DisplayParameters, FrameState, LightRig, Material, Mesh, PointLight, StereoTransforms,
};
use nalgebra::{Point3, Vector3};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::{AsciiRenderer, Viewport};

/// Degrees of model rotation per keypress.
const ROTATE_STEP: f32 = 2.0;
/// Meters of model dolly per keypress.
const DOLLY_STEP: f32 = 0.02;
/// Degrees of idle model spin per frame, about X and Y.
const IDLE_SPIN: (f32, f32) = (0.3, 0.45);

const FRAME_BUDGET: Duration = Duration::from_millis(1000 / 30);

/// Puts the terminal into raw alternate-screen mode and restores it on
/// drop, so a panic mid-frame cannot leave the shell unusable.
struct RawScreen;

impl RawScreen {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawScreen {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);
    }
}

/// Rolling frames-per-second estimate, refreshed once a second.
struct FpsCounter {
    frames: u32,
    since: Instant,
    value: f32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            frames: 0,
            since: Instant::now(),
            value: 0.0,
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let elapsed = self.since.elapsed();
        if elapsed.as_secs() >= 1 {
            self.value = self.frames as f32 / elapsed.as_secs_f32();
            self.frames = 0;
            self.since = Instant::now();
        }
    }
}

/// Interactive stereo viewer: the left half of the terminal shows the left
/// eye's image, the right half the right eye's.
///
/// Each frame mutates the [`FrameState`], recomputes the stereo matrices,
/// and rasterizes both eye views through them.
pub struct TerminalApp {
    mesh: Mesh,
    material: Material,
    lights: LightRig,
    state: FrameState,
    transforms: StereoTransforms,
    renderer: AsciiRenderer,
    fps: FpsCounter,
    running: bool,
}

impl TerminalApp {
    pub fn new(mesh: Mesh, display: DisplayParameters) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let transforms = StereoTransforms::new(display)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        Ok(Self {
            mesh,
            material: Material {
                ambient: Vector3::new(0.3, 0.3, 0.3),
                diffuse: Vector3::new(0.9, 0.9, 0.9),
                specular: Vector3::new(0.6, 0.6, 0.6),
                shininess: 30.0,
            },
            lights: LightRig {
                ambient_color: Vector3::new(0.35, 0.35, 0.35),
                point_lights: vec![PointLight {
                    position: Point3::new(0.4, 0.5, 0.3),
                    color: Vector3::new(1.0, 1.0, 1.0),
                }],
                directional_lights: vec![],
            },
            state: FrameState::default(),
            transforms,
            renderer: AsciiRenderer::new(cols as usize, rows as usize),
            fps: FpsCounter::new(),
            running: true,
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        let _screen = RawScreen::enter()?;

        while self.running {
            let frame_start = Instant::now();

            self.drain_input()?;
            self.advance_frame();
            self.draw_frame()?;

            self.fps.tick();
            if let Some(remaining) = FRAME_BUDGET.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }

        Ok(())
    }

    /// Applies every key event queued since the last frame.
    fn drain_input(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                self.apply_key(code);
            }
        }
        Ok(())
    }

    fn apply_key(&mut self, code: KeyCode) {
        let rotation = &mut self.state.model_rotation;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('w') | KeyCode::Up => rotation.x += ROTATE_STEP,
            KeyCode::Char('s') | KeyCode::Down => rotation.x -= ROTATE_STEP,
            KeyCode::Char('a') | KeyCode::Left => rotation.y -= ROTATE_STEP,
            KeyCode::Char('d') | KeyCode::Right => rotation.y += ROTATE_STEP,
            KeyCode::Char('z') => self.state.model_translation.z += DOLLY_STEP,
            KeyCode::Char('x') => self.state.model_translation.z -= DOLLY_STEP,
            _ => {}
        }
    }

    /// Idle spin plus the per-frame matrix recomputation.
    fn advance_frame(&mut self) {
        self.state.model_rotation.x += IDLE_SPIN.0;
        self.state.model_rotation.y += IDLE_SPIN.1;

        if let Err(e) = self.transforms.update(&self.state) {
            log::error!("stereo update failed: {e}");
            self.running = false;
        }
    }

    fn draw_frame(&mut self) -> io::Result<()> {
        self.renderer.clear();
        let (left_vp, right_vp) = self.renderer.split_viewports();
        let model = *self.transforms.model_mat();
        let views = *self.transforms.stereo_view_mat();
        let projections = *self.transforms.stereo_projection_mat();

        for (view, projection, viewport) in [
            (views.left, projections.left, left_vp),
            (views.right, projections.right, right_vp),
        ] {
            self.renderer.render_eye(
                &self.mesh,
                &self.material,
                &self.lights,
                &model,
                &view,
                &projection,
                viewport,
            );
        }

        let mut out = stdout();
        queue!(out, cursor::MoveTo(0, 0))?;
        self.renderer.draw(&mut out)?;
        queue!(
            out,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "HMD3D Stereo (L|R) | FPS: {:.1} | WASD/Arrows=Rotate Z/X=Dolly Q=Quit",
                self.fps.value
            )),
            ResetColor
        )?;
        out.flush()
    }
}
