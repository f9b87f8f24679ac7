//! Seams to the renderer and the on-screen readout.

use phyllo_engine::paint::Color;
use phyllo_engine::scene::{Camera, DrawList};

use crate::registry::Registry;

/// Everything a renderer needs for one frame.
pub struct SceneFrame<'a> {
    pub background: Color,
    pub camera: &'a Camera,
    pub draw_list: &'a DrawList,
}

/// Draws frames into some output surface.
pub trait Renderer {
    /// Resizes the backing store, in physical pixels.
    fn set_viewport_size(&mut self, width: u32, height: u32);

    fn draw(&mut self, frame: &SceneFrame<'_>);
}

/// Displays the progressive shape's point total.
pub trait Readout {
    fn show_point_total(&mut self, total: usize);
}

/// Holds the camera and background and turns the registry into draw commands.
#[derive(Debug)]
pub struct RenderAdapter {
    camera: Camera,
    background: Color,
    draw_list: DrawList,
}

impl RenderAdapter {
    pub fn new(camera: Camera, background: Color) -> Self {
        Self { camera, background, draw_list: DrawList::new() }
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    /// Records every registered drawable in order and hands the frame to `renderer`.
    pub fn present(&mut self, registry: &Registry, renderer: &mut dyn Renderer) {
        self.draw_list.clear();
        for (_, item) in registry.iter() {
            item.drawable.record(&mut self.draw_list);
        }
        renderer.draw(&SceneFrame {
            background: self.background,
            camera: &self.camera,
            draw_list: &self.draw_list,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Side;
    use crate::registry::{SectionId, ShapeKey};
    use phyllo_engine::scene::{DrawCmd, Drawable, Geometry, Style};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(Color, Camera, Vec<DrawCmd>)>,
    }

    impl Renderer for Recorder {
        fn set_viewport_size(&mut self, _width: u32, _height: u32) {}

        fn draw(&mut self, frame: &SceneFrame<'_>) {
            self.frames.push((frame.background, *frame.camera, frame.draw_list.items().to_vec()));
        }
    }

    #[test]
    fn present_records_registry_in_order() {
        let mut reg = Registry::new();
        let points = Drawable::new(Geometry::from_positions(vec![0.0; 6]), Style::points(Color::WHITE, 0.1));
        let mut line = Drawable::new(Geometry::from_positions(vec![0.0; 9]), Style::line_loop(Color::BLACK));
        line.set_draw_count(2);
        reg.register(ShapeKey::Sphere, SectionId::Intro, Side::Right, points).unwrap();
        reg.register(ShapeKey::Sunflower, SectionId::Sunflower, Side::Left, line).unwrap();

        let bg = Color::from_hex(0x121212);
        let mut adapter = RenderAdapter::new(Camera::default(), bg);
        let mut rec = Recorder::default();
        adapter.present(&reg, &mut rec);
        adapter.present(&reg, &mut rec);

        assert_eq!(rec.frames.len(), 2);
        let (color, camera, cmds) = &rec.frames[1];
        assert_eq!(*color, bg);
        assert_eq!(*camera, Camera::default());
        assert_eq!(cmds.len(), 2);
        assert!(matches!(&cmds[0], DrawCmd::Points(p) if p.count == 2));
        assert!(matches!(&cmds[1], DrawCmd::LineLoop(l) if l.count == 2));
    }
}
