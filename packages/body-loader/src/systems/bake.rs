//! Batch transform: every body of a model at one scale.
//! Parallel across bodies with Rayon when the `parallel` feature is enabled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::{GeometryModel, RigidBodyDef};

use super::fixtures::{attach_body, FixtureList};

/// Fixtures of one body at the requested scale.
#[derive(Clone, Debug, PartialEq)]
pub struct BakedBody {
    pub name: String,
    pub fixtures: FixtureList,
}

/// Bake all bodies, sorted by name. Each body gets its own scratch buffer,
/// so the result is identical with or without `parallel`.
pub fn bake_all(model: &GeometryModel, scale: f32) -> Vec<BakedBody> {
    let bodies = model.sorted();

    #[cfg(feature = "parallel")]
    let baked = bodies.par_iter().map(|body| bake_one(body, scale)).collect();
    #[cfg(not(feature = "parallel"))]
    let baked = bodies.iter().map(|body| bake_one(body, scale)).collect();

    baked
}

fn bake_one(body: &RigidBodyDef, scale: f32) -> BakedBody {
    let mut fixtures = FixtureList::new();
    let mut scratch = Vec::new();
    attach_body(body, scale, &mut scratch, &mut fixtures);
    BakedBody {
        name: body.name.clone(),
        fixtures,
    }
}

// Run with `cargo test --features parallel` as well to cover the Rayon path.
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Vec2;
    use crate::domain::{CircleDef, PolygonDef};
    use crate::systems::fixtures::FixtureBuilder;

    fn sample_model() -> GeometryModel {
        let mut model = GeometryModel::new();
        for (i, name) in ["c", "a", "b"].iter().enumerate() {
            let k = i as f32;
            model.insert(RigidBodyDef {
                name: name.to_string(),
                image_path: format!("{}.png", name),
                origin: Vec2::new(0.1 * k, 0.2),
                polygons: vec![PolygonDef::new(vec![
                    Vec2::new(0.0, 0.0),
                    Vec2::new(1.0, k),
                    Vec2::new(0.0, 1.0),
                ])],
                circles: vec![CircleDef::new(Vec2::new(0.5, 0.5), 0.1 + k)],
            });
        }
        model
    }

    #[test]
    fn bakes_every_body_sorted() {
        let baked = bake_all(&sample_model(), 2.0);
        let names: Vec<&str> = baked.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(baked.iter().all(|b| b.fixtures.len() == 2));
    }

    #[test]
    fn matches_single_attachments() {
        let model = sample_model();
        let mut builder = FixtureBuilder::new();
        for baked in bake_all(&model, 1.5) {
            let mut expected = FixtureList::new();
            builder.attach(&model, &baked.name, 1.5, &mut expected).unwrap();
            assert_eq!(baked.fixtures, expected);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_bake_keeps_name_order() {
        let mut model = GeometryModel::new();
        for i in 0..256 {
            model.insert(RigidBodyDef {
                name: format!("body_{:03}", i),
                polygons: vec![PolygonDef::new(vec![Vec2::new(i as f32, 0.0)])],
                ..Default::default()
            });
        }

        let baked = bake_all(&model, 2.0);
        assert_eq!(baked.len(), 256);
        for (i, body) in baked.iter().enumerate() {
            assert_eq!(body.name, format!("body_{:03}", i));
            assert_eq!(body.fixtures.polygons().next().unwrap()[0], Vec2::new(2.0 * i as f32, 0.0));
        }
    }

    #[test]
    fn empty_model_bakes_nothing() {
        assert!(bake_all(&GeometryModel::new(), 1.0).is_empty());
    }
}
