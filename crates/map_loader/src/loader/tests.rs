//! Whole-pipeline tests over small map documents

use approx::assert_relative_eq;

use super::*;
use crate::assets::{AssetLibrary, Material, TextureResolver};
use crate::ecs::components::{AaCollisionBox, MeshDrawable, Transform, Trigger};
use crate::ecs::ComponentKind;
use crate::foundation::math::Vec3;
use crate::scene::MaterialId;

fn build(source: &str) -> (Scene, AssetLibrary) {
    let mut assets = AssetLibrary::new();
    let scene = SceneBuilder::build_from_str(source, &mut assets).expect("map should load");
    (scene, assets)
}

#[test]
fn test_wall_with_registered_material() {
    let (scene, assets) = build(
        r#"<map>
            <materials><mat mid="0" name="Brick"/></materials>
            <spawn><position x="0" y="1" z="0"/></spawn>
            <wall mid="0">
                <position x="2" y="0" z="0"/>
                <scale x="1" y="1" z="1"/>
            </wall>
        </map>"#,
    );

    let player = scene.player.get::<Transform>().unwrap();
    assert_eq!(player.position, Vec3::new(0.0, 1.0, 0.0));

    assert_eq!(scene.entities.len(), 1);
    let wall = &scene.entities[0];
    let drawable = wall.get::<MeshDrawable>().unwrap();
    assert_eq!(drawable.material.name, "Brick");
    assert_eq!(drawable.material.scale_u, 2.0);
    assert_eq!(drawable.material.scale_v, 2.0);
    assert_eq!(assets.mesh(drawable.mesh).unwrap().vertices.len(), 24);

    let cage = wall.get::<AaCollisionBox>().unwrap().bounds;
    assert_relative_eq!(cage.center(), Vec3::new(2.0, 0.0, 0.0), epsilon = 1e-6);
    assert_relative_eq!(cage.size(), Vec3::new(1.0, 1.0, 1.0), epsilon = 1e-6);

    assert_eq!(scene.materials.get(MaterialId(0)).unwrap().name, "Brick");
    // Registry material kept its own UV scale
    assert_eq!(scene.materials.get(MaterialId(0)).unwrap().scale_u, 1.0);
}

#[test]
fn test_trigger_type_is_copied() {
    let (scene, _) = build(
        r#"<map>
            <spawn/>
            <trigger type="finish">
                <position x="5" y="0" z="5"/>
                <scale x="1" y="1" z="1"/>
            </trigger>
        </map>"#,
    );

    assert_eq!(scene.entities.len(), 1);
    let trigger = &scene.entities[0];
    assert_eq!(trigger.get::<Trigger>().unwrap().trigger_type, "finish");

    let transform = trigger.get::<Transform>().unwrap();
    assert_eq!(transform.position, Vec3::new(5.0, 0.0, 5.0));
    assert_eq!(transform.rotation, Vec3::zeros());
    assert!(!trigger.has::<MeshDrawable>());
}

#[test]
fn test_trigger_without_type_passes_empty_string() {
    let (scene, _) = build(r#"<map><spawn/><trigger/></map>"#);
    assert_eq!(scene.entities[0].get::<Trigger>().unwrap().trigger_type, "");
}

#[test]
fn test_spawn_only_map_is_empty() {
    let (scene, _) = build(r#"<map><spawn/></map>"#);

    assert!(scene.entities.is_empty());
    assert!(scene.lights.is_empty());
    assert!(scene.materials.is_empty());
    assert!(scene.end.is_empty());
}

#[test]
fn test_missing_spawn_is_fatal() {
    let mut assets = AssetLibrary::new();
    let result = SceneBuilder::build_from_str(
        r#"<map>
            <materials><mat mid="1" name="Tile"/></materials>
            <wall mid="1"/>
            <light r="1"/>
        </map>"#,
        &mut assets,
    );

    assert!(matches!(result, Err(LoadError::MissingRequiredSection("spawn"))));
    // Aborted before walls ran
    assert_eq!(assets.mesh_count(), 0);
}

#[test]
fn test_start_and_player_share_spawn_transform() {
    let (scene, _) = build(
        r#"<map>
            <spawn>
                <position x="3" y="1.5" z="-4"/>
                <rotation x="0" y="180" z="0"/>
            </spawn>
        </map>"#,
    );

    let start = scene.start.get::<Transform>().unwrap();
    let player = scene.player.get::<Transform>().unwrap();
    assert_eq!(start, player);
    assert_eq!(start.position, Vec3::new(3.0, 1.5, -4.0));
    assert_relative_eq!(start.rotation.y, std::f32::consts::PI, epsilon = 1e-6);

    assert!(scene.player.has_kind(ComponentKind::PlayerMotion));
    assert!(scene.player.has_kind(ComponentKind::Health));
}

#[test]
fn test_unregistered_mid_uses_default_material() {
    let (scene, _) = build(
        r#"<map>
            <materials><mat mid="0" name="Brick"/></materials>
            <spawn/>
            <wall mid="7"/>
            <wall/>
        </map>"#,
    );

    let expected = Material::default().with_uv_scale(2.0);
    for wall in &scene.entities {
        assert_eq!(wall.get::<MeshDrawable>().unwrap().material, expected);
    }
    assert_eq!(scene.entities.len(), 2);
}

#[test]
fn test_incomplete_mat_entries_are_skipped() {
    let (scene, _) = build(
        r#"<map>
            <materials>
                <mat name="NoId"/>
                <mat mid="1"/>
                <mat mid="2" name=""/>
                <mat mid="-1" name="Sentinel"/>
                <mat mid="x" name="NotANumber"/>
                <mat mid="3" name="Good"/>
            </materials>
            <spawn/>
        </map>"#,
    );

    assert_eq!(scene.materials.len(), 1);
    assert_eq!(scene.materials.get(MaterialId(3)).unwrap().name, "Good");
}

#[test]
fn test_mid_reads_leading_integer() {
    let (scene, _) = build(
        r#"<map>
            <materials><mat mid="1.0" name="Tiles"/></materials>
            <spawn/>
            <wall mid="1.9"/>
        </map>"#,
    );

    assert_eq!(scene.materials.get(MaterialId(1)).unwrap().name, "Tiles");
    let drawable = scene.entities[0].get::<MeshDrawable>().unwrap();
    assert_eq!(drawable.material.name, "Tiles");
}

#[test]
fn test_duplicate_mid_overwrites() {
    let (scene, _) = build(
        r#"<map>
            <materials>
                <mat mid="0" name="First"/>
                <mat mid="0" name="Second"/>
            </materials>
            <spawn/>
        </map>"#,
    );

    assert_eq!(scene.materials.len(), 1);
    assert_eq!(scene.materials.get(MaterialId(0)).unwrap().name, "Second");
}

#[test]
fn test_lights_with_defaults() {
    let (scene, _) = build(
        r#"<map>
            <spawn/>
            <light x="1" y="2" z="3" r="1" g="0.5" b="0.25" distance="10" energy="2" specular="1"/>
            <light y="4"/>
        </map>"#,
    );

    assert_eq!(scene.lights.len(), 2);
    let first = scene.lights[0];
    assert_eq!(first.position, Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(first.color, Vec3::new(1.0, 0.5, 0.25));
    assert_eq!(first.distance, 10.0);
    assert_eq!(first.energy, 2.0);
    assert_eq!(first.specular, 1.0);

    let second = scene.lights[1];
    assert_eq!(second.position, Vec3::new(0.0, 4.0, 0.0));
    assert_eq!(second.color, Vec3::zeros());
    assert_eq!(second.distance, 0.0);
    assert_eq!(second.energy, 0.0);
    assert_eq!(second.specular, 0.0);
}

#[test]
fn test_no_lights_is_not_an_error() {
    let (scene, _) = build(r#"<map><spawn/><wall mid="0"/></map>"#);
    assert!(scene.lights.is_empty());
    assert_eq!(scene.entities.len(), 1);
}

#[test]
fn test_entity_order_follows_extraction_order() {
    let (scene, _) = build(
        r#"<map>
            <trigger type="t1"/>
            <wall mid="0"><position x="1"/></wall>
            <acid><position x="10"/></acid>
            <spawn/>
            <model mesh="a.obj"/>
            <wall mid="0"><position x="2"/></wall>
            <trigger type="t2"/>
            <model mesh="b.obj"/>
        </map>"#,
    );

    let kinds: Vec<&str> = scene
        .entities
        .iter()
        .map(|entity| {
            if entity.has::<Trigger>() {
                "trigger"
            } else if entity.has::<AaCollisionBox>() {
                "box"
            } else {
                "model"
            }
        })
        .collect();
    assert_eq!(kinds, vec!["model", "model", "box", "box", "box", "trigger", "trigger"]);

    let wall_xs: Vec<f32> = scene.entities[2..4]
        .iter()
        .map(|wall| wall.get::<Transform>().unwrap().position.x)
        .collect();
    assert_eq!(wall_xs, vec![1.0, 2.0]);
    assert_eq!(scene.entities[4].get::<Transform>().unwrap().position.x, 10.0);

    let trigger_types: Vec<&str> = scene
        .entities_with::<Trigger>()
        .map(|entity| entity.get::<Trigger>().unwrap().trigger_type.as_str())
        .collect();
    assert_eq!(trigger_types, vec!["t1", "t2"]);
}

#[test]
fn test_pipeline_order() {
    let stages: Vec<&str> = PIPELINE.iter().map(|(stage, _)| *stage).collect();
    assert_eq!(
        stages,
        vec!["materials", "spawn", "door", "models", "lights", "walls", "acids", "triggers"]
    );
}

#[test]
fn test_model_assets_default_to_none() {
    let (scene, mut assets) = build(
        r#"<map>
            <spawn/>
            <model mesh="chair.obj" texture="wood.png"><position x="1"/></model>
            <model/>
        </map>"#,
    );

    let chair = scene.entities[0].get::<MeshDrawable>().unwrap();
    assert_eq!(chair.material.diffuse, Some(assets.get_texture("wood.png")));
    assert_eq!(chair.mesh, crate::assets::MeshResolver::get_mesh(&mut assets, "chair.obj"));

    let bare = scene.entities[1].get::<MeshDrawable>().unwrap();
    assert_eq!(bare.material.diffuse, Some(assets.get_texture("none")));
    assert_eq!(bare.mesh, crate::assets::MeshResolver::get_mesh(&mut assets, "none"));
    assert_eq!(scene.entities[1].get::<Transform>().unwrap().scale, Vec3::new(1.0, 1.0, 1.0));
}

#[test]
fn test_door_uses_fixed_assets() {
    let (scene, mut assets) = build(
        r#"<map>
            <spawn/>
            <end>
                <position x="0" y="0" z="-8"/>
                <rotation y="90"/>
            </end>
        </map>"#,
    );

    let transform = scene.end.get::<Transform>().unwrap();
    assert_eq!(transform.position, Vec3::new(0.0, 0.0, -8.0));
    assert_relative_eq!(transform.rotation.y, std::f32::consts::FRAC_PI_2, epsilon = 1e-6);

    let drawable = scene.end.get::<MeshDrawable>().unwrap();
    assert_eq!(drawable.material.diffuse, Some(assets.get_texture("Door.png")));
    assert_eq!(drawable.mesh, crate::assets::MeshResolver::get_mesh(&mut assets, "Door.obj"));
    assert!(scene.entities.is_empty());
}

#[test]
fn test_acid_ignores_rotation_and_uses_fixed_texture() {
    let (scene, mut assets) = build(
        r#"<map>
            <materials><mat mid="0" name="Brick"/></materials>
            <spawn/>
            <acid mid="0">
                <position x="1" y="-1" z="1"/>
                <rotation y="45"/>
                <scale x="4" y="0.5" z="4"/>
            </acid>
        </map>"#,
    );

    let acid = &scene.entities[0];
    let transform = acid.get::<Transform>().unwrap();
    assert_eq!(transform.rotation, Vec3::zeros());
    assert_eq!(transform.scale, Vec3::new(4.0, 0.5, 4.0));

    let material = &acid.get::<MeshDrawable>().unwrap().material;
    assert_eq!(material.diffuse, Some(assets.get_texture("acid.png")));
    assert_eq!(material.name, "");
    assert_eq!(material.scale_u, 1.0);

    let cage = acid.get::<AaCollisionBox>().unwrap().bounds;
    assert_relative_eq!(cage.size(), Vec3::new(4.0, 0.5, 4.0), epsilon = 1e-6);
}

#[test]
fn test_rotated_wall_cage_encloses_box() {
    let (scene, _) = build(
        r#"<map>
            <spawn/>
            <wall mid="0">
                <rotation y="90"/>
                <scale x="6" y="2" z="1"/>
            </wall>
        </map>"#,
    );

    let cage = scene.entities[0].get::<AaCollisionBox>().unwrap().bounds;
    assert_relative_eq!(cage.size(), Vec3::new(1.0, 2.0, 6.0), epsilon = 1e-5);
}

#[test]
fn test_unscaled_boxes_keep_unit_scale() {
    let (scene, _) = build(
        r#"<map>
            <spawn/>
            <wall mid="0"><position x="3"/></wall>
            <acid/>
            <trigger type="death"/>
        </map>"#,
    );

    assert_eq!(scene.entities.len(), 3);
    for entity in &scene.entities {
        assert_eq!(entity.get::<Transform>().unwrap().scale, Vec3::new(1.0, 1.0, 1.0));
    }

    let cage = scene.entities[0].get::<AaCollisionBox>().unwrap().bounds;
    assert_relative_eq!(cage.size(), Vec3::new(1.0, 1.0, 1.0), epsilon = 1e-6);
    assert_relative_eq!(cage.center(), Vec3::new(3.0, 0.0, 0.0), epsilon = 1e-6);
}

#[test]
fn test_malformed_document() {
    let mut assets = AssetLibrary::new();
    let result = SceneBuilder::build_from_str("<map><spawn>", &mut assets);
    assert!(matches!(result, Err(LoadError::MalformedDocument(_))));
}

#[test]
fn test_build_from_data_directory() {
    let dir = tempfile::tempdir().unwrap();
    let maps = dir.path().join("maps");
    std::fs::create_dir_all(&maps).unwrap();
    std::fs::write(
        maps.join("n1.xml"),
        r#"<map><spawn><position y="2"/></spawn><light r="1"/></map>"#,
    )
    .unwrap();

    let builder = SceneBuilder::new(LoaderConfig::with_data_root(dir.path()));
    let mut assets = AssetLibrary::new();
    let scene = builder.build("n1", &mut assets).unwrap();

    assert_eq!(scene.player.get::<Transform>().unwrap().position.y, 2.0);
    assert_eq!(scene.lights.len(), 1);
}

#[test]
fn test_missing_map_file() {
    let dir = tempfile::tempdir().unwrap();
    let builder = SceneBuilder::new(LoaderConfig::with_data_root(dir.path()));
    let mut assets = AssetLibrary::new();

    match builder.build("absent", &mut assets) {
        Err(LoadError::ResourceUnavailable { path, .. }) => {
            assert_eq!(path, dir.path().join("maps").join("absent.xml"));
        }
        other => panic!("expected ResourceUnavailable, got {other:?}"),
    }
}

#[test]
fn test_non_utf8_map_file_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let maps = dir.path().join("maps");
    std::fs::create_dir_all(&maps).unwrap();
    std::fs::write(
        maps.join("latin.xml"),
        b"<map><spawn/><trigger type=\"caf\xe9\"/></map>",
    )
    .unwrap();

    let builder = SceneBuilder::new(LoaderConfig::with_data_root(dir.path()));
    let mut assets = AssetLibrary::new();

    let result = builder.build("latin", &mut assets);
    assert!(matches!(result, Err(LoadError::MalformedDocument(_))));
}

#[test]
fn test_builds_are_independent() {
    let source = r#"<map>
        <materials><mat mid="0" name="Brick"/></materials>
        <spawn/>
        <wall mid="0"/>
    </map>"#;
    let mut assets = AssetLibrary::new();

    let first = SceneBuilder::build_from_str(source, &mut assets).unwrap();
    let second = SceneBuilder::build_from_str(source, &mut assets).unwrap();

    assert_eq!(first.entities.len(), 1);
    assert_eq!(second.entities.len(), 1);
    assert_eq!(second.materials.len(), 1);
}
