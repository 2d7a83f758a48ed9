use glam::Vec3;

use morphe_engine::coords::{rem_to_px, DEFAULT_BASE_FONT_SIZE};
use morphe_engine::core::{App, AppControl, FrameCtx};
use morphe_engine::geometry::{self, ShapeKind};
use morphe_engine::input::{InputFrame, Key};
use morphe_engine::paint::{Color, Theme};
use morphe_engine::render::shapes::points::{PointCloudRenderer, PointSprite};
use morphe_engine::render::Camera;

use crate::cloud::ShapeCloud;
use crate::config::{clamp_detail, StudioConfig};
use crate::motion::Motion;

/// Camera distance relative to the framing distance of the cloud.
const FRAMING_MARGIN: f32 = 1.25;
/// Zoom change per wheel line.
const ZOOM_STEP: f32 = 0.1;

/// The interactive point-shape visualizer.
pub struct Studio {
    config: StudioConfig,
    cloud: ShapeCloud,
    motion: Motion,
    camera: Camera,
    zoom: f32,
    renderer: PointCloudRenderer,

    background: Color,
    calm: Color,
    excited: Color,

    sprites: Vec<PointSprite>,
    title_dirty: bool,
}

impl Studio {
    pub fn new(config: StudioConfig, theme: &Theme) -> Self {
        let cloud = ShapeCloud::new(config.shape, config.detail, config.morph_seconds);
        Self {
            background: theme.color_or("bg-dark", Color::from_srgb_u8(15, 15, 15, 255)),
            calm: theme.color_or("primary", Color::from_srgb_u8(22, 219, 101, 255)),
            excited: theme.color_or("secondary", Color::from_srgb_u8(143, 255, 143, 255)),
            cloud,
            config,
            motion: Motion::new(),
            camera: Camera::default(),
            zoom: 1.0,
            renderer: PointCloudRenderer::new(),
            sprites: Vec::new(),
            title_dirty: true,
        }
    }

    fn handle_keys(&mut self, ctx: &FrameCtx<'_, '_>) -> AppControl {
        let frame = ctx.input_frame;

        if frame.key_pressed(Key::Escape) {
            log::info!("escape pressed; exiting");
            return AppControl::Exit;
        }

        let (kind, detail) = shape_keys(frame, self.cloud.kind(), self.cloud.detail());

        if frame.key_pressed(Key::R) {
            self.motion.reset();
            self.zoom = 1.0;
        }

        if kind != self.cloud.kind() || detail != self.cloud.detail() {
            self.cloud.set_shape(kind, detail);
            self.title_dirty = true;
        }

        AppControl::Continue
    }

    fn update_camera(&mut self, aspect: f32) {
        let radius = geometry::bounds(self.cloud.points())
            .map(|(lo, hi)| lo.abs().max(hi.abs()).length())
            .filter(|r| *r > 0.0)
            .unwrap_or(1.0);

        self.camera.aspect = aspect;
        self.camera.target = Vec3::ZERO;
        let distance = self.camera.framing_distance(radius) * FRAMING_MARGIN * self.zoom;
        self.camera.orbit(0.0, 0.0, distance);
    }

    fn rebuild_sprites(&mut self) {
        let color = self.calm.lerp(self.excited, self.motion.energy());
        let radius = rem_to_px(self.config.point_size_rem, DEFAULT_BASE_FONT_SIZE);

        self.sprites.clear();
        self.sprites.extend(
            self.cloud
                .points()
                .iter()
                .map(|p| PointSprite::new(*p, color, radius)),
        );
    }
}

/// Applies this frame's shape bindings to `(kind, detail)`.
///
/// `1`-`4` pick a kind (the highest digit wins when several are pressed),
/// `Space` then cycles, and the arrows double or halve the detail within
/// the allowed range.
fn shape_keys(frame: &InputFrame, kind: ShapeKind, detail: usize) -> (ShapeKind, usize) {
    let mut kind = frame
        .keys_pressed
        .iter()
        .filter_map(|k| k.digit())
        .max()
        .and_then(|d| ShapeKind::ALL.get(usize::from(d).checked_sub(1)?))
        .copied()
        .unwrap_or(kind);
    let mut detail = detail;

    if frame.key_pressed(Key::Space) {
        kind = kind.next();
    }
    if frame.key_pressed(Key::ArrowUp) {
        detail = clamp_detail(detail.saturating_mul(2));
    }
    if frame.key_pressed(Key::ArrowDown) {
        detail = clamp_detail(detail / 2);
    }
    (kind, detail)
}

impl App for Studio {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if self.handle_keys(ctx) == AppControl::Exit {
            return AppControl::Exit;
        }

        if self.title_dirty {
            ctx.window.set_title(&format!(
                "morphe · {} · {} points",
                self.cloud.kind(),
                self.cloud.points().len()
            ));
            self.title_dirty = false;
        }

        let dt = ctx.time.dt;
        let scroll = ctx.input_frame.scroll_lines;
        if scroll != 0.0 {
            self.zoom = (self.zoom * (1.0 - scroll * ZOOM_STEP)).clamp(0.3, 4.0);
        }

        self.cloud.advance(dt);
        self.motion.update(ctx.mouse, dt);
        self.update_camera(ctx.window.viewport().aspect());
        self.rebuild_sprites();

        let model = self.motion.model();
        let Self { renderer, camera, sprites, background, .. } = self;

        ctx.render(*background, |rctx, target| {
            renderer.render(rctx, target, camera, model, sprites);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MAX_DETAIL, MIN_DETAIL};

    fn pressed(keys: &[Key]) -> InputFrame {
        let mut frame = InputFrame::default();
        frame.keys_pressed.extend(keys.iter().copied());
        frame
    }

    #[test]
    fn no_keys_keeps_shape() {
        assert_eq!(shape_keys(&pressed(&[]), ShapeKind::Torus, 64), (ShapeKind::Torus, 64));
    }

    #[test]
    fn digits_select_kinds() {
        for (key, kind) in [Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4]
            .into_iter()
            .zip(ShapeKind::ALL)
        {
            assert_eq!(shape_keys(&pressed(&[key]), ShapeKind::Sphere, 64).0, kind);
        }
        assert_eq!(
            shape_keys(&pressed(&[Key::Digit1, Key::Digit3]), ShapeKind::Sphere, 64).0,
            ShapeKind::ALL[2]
        );
    }

    #[test]
    fn space_cycles_after_digit() {
        let (kind, _) = shape_keys(&pressed(&[Key::Space]), ShapeKind::Sphere, 64);
        assert_eq!(kind, ShapeKind::Sphere.next());

        let (kind, _) = shape_keys(&pressed(&[Key::Digit1, Key::Space]), ShapeKind::Pyramid, 64);
        assert_eq!(kind, ShapeKind::ALL[0].next());
    }

    #[test]
    fn arrows_scale_detail_within_range() {
        assert_eq!(shape_keys(&pressed(&[Key::ArrowUp]), ShapeKind::Cube, 64).1, 128);
        assert_eq!(shape_keys(&pressed(&[Key::ArrowDown]), ShapeKind::Cube, 64).1, 32);
        assert_eq!(shape_keys(&pressed(&[Key::ArrowUp]), ShapeKind::Cube, MAX_DETAIL).1, MAX_DETAIL);
        assert_eq!(shape_keys(&pressed(&[Key::ArrowDown]), ShapeKind::Cube, MIN_DETAIL).1, MIN_DETAIL);
        assert_eq!(shape_keys(&pressed(&[Key::ArrowUp]), ShapeKind::Cube, 10_000).1, MAX_DETAIL);
    }
}
