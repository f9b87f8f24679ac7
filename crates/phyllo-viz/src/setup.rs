//! Builds the scene's drawables from configuration.

use anyhow::Result;
use phyllo_engine::scene::{Drawable, Geometry};

use crate::config::{Distribution, ShapeConfig, VizConfig};
use crate::geometry::{disk_distribution, sphere_distribution};
use crate::registry::Registry;

/// Generates and registers every configured shape, in configuration order.
///
/// Shapes sit `offset` units left or right of center; progressive shapes start
/// with nothing visible.
pub fn build_registry(config: &VizConfig, offset: f32) -> Result<Registry> {
    let mut registry = Registry::new();
    for shape in &config.shapes {
        let drawable = build_drawable(shape, offset);
        registry.register(shape.key, shape.section, shape.side, drawable)?;
    }
    Ok(registry)
}

fn build_drawable(shape: &ShapeConfig, offset: f32) -> Drawable {
    let positions = match shape.distribution {
        Distribution::Sphere => sphere_distribution(shape.points, 1.0),
        Distribution::Disk => disk_distribution(shape.points, 1.0),
    };

    let mut drawable = Drawable::new(Geometry::from_positions(positions), shape.style);
    drawable.transform.position.x = shape.side.sign() * offset;
    drawable.transform.rotation = shape.rotation;
    drawable.transform.scale = shape.scale;
    if shape.progressive {
        drawable.set_draw_count(0);
    }
    drawable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::ShapeKey;
    use phyllo_engine::coords::Vec3;
    use phyllo_engine::scene::DrawMode;

    #[test]
    fn default_scene_matches_layout() {
        let reg = build_registry(&VizConfig::default(), 8.0).unwrap();
        assert_eq!(reg.len(), 4);

        let sphere = &reg.get(ShapeKey::Sphere).unwrap().drawable;
        assert_eq!(sphere.geometry.point_count(), 500);
        assert_eq!(sphere.draw_count(), 500);
        assert_eq!(sphere.transform.position.x, 8.0);
        assert_eq!(sphere.transform.scale, Vec3::splat(7.0));

        let disk = &reg.get(ShapeKey::Disk).unwrap().drawable;
        assert_eq!(disk.transform.position.x, -8.0);
        assert_eq!(disk.transform.rotation.y, 0.9);

        let golden = &reg.get(ShapeKey::GoldenDisk).unwrap().drawable;
        assert_eq!(golden.geometry.point_count(), 250);
        assert_eq!(golden.draw_count(), 0);
        assert_eq!(golden.transform.position.x, 8.0);

        let sunflower = &reg.get(ShapeKey::Sunflower).unwrap().drawable;
        assert_eq!(sunflower.geometry.point_count(), 350);
        assert_eq!(sunflower.style.mode, DrawMode::LineLoop);
        assert_eq!(sunflower.transform.scale, Vec3::new(7.0, 7.0, 1.0));
    }

    #[test]
    fn duplicate_shape_keys_fail() {
        let mut config = VizConfig::default();
        let extra = config.shapes[1].clone();
        config.shapes.push(extra);
        assert!(build_registry(&config, 1.0).is_err());
    }
}
