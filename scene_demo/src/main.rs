//! Scene graph demo
//!
//! Builds a toolbar of buttons under a stretching root panel, clones the
//! toolbar, and runs frames until the layout settles. Pass a `.toml` or `.ron`
//! file as the first argument to override the scene settings.

use std::error::Error;

use log::info;
use scene_engine::foundation::logging;
use scene_engine::prelude::*;

const MAX_FRAMES: usize = 8;

fn load_config() -> Result<SceneConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => {
            info!("Loading scene settings from {}", path);
            SceneConfig::load_from_file(path)
        }
        None => Ok(SceneConfig {
            log_reflow: true,
            ..SceneConfig::default()
        }),
    }
}

fn build_toolbar(world: &mut World, screen: Entity, buttons: usize) -> SceneResult<Entity> {
    let toolbar = world.create_entity("toolbar");
    world.add_child(screen, toolbar)?;
    world.add_component(
        toolbar,
        "element",
        &ComponentData::new().with("size", Vec2::new(400.0, 48.0)),
    )?;
    world.add_component(
        toolbar,
        "layoutgroup",
        &ComponentData::new()
            .with("padding", Vec4::new(8.0, 8.0, 8.0, 8.0))
            .with("spacing", Vec2::new(6.0, 6.0))
            .with("alignment", Vec2::new(0.0, 0.5))
            .with("wrap", true),
    )?;

    for index in 0..buttons {
        let button = world.create_entity(format!("button_{index}"));
        world.add_child(toolbar, button)?;
        world.add_component(
            button,
            "element",
            &ComponentData::new().with("size", Vec2::new(96.0, 32.0)),
        )?;
        // Every button remembers the toolbar it belongs to
        let toolbar_guid = world.guid(toolbar)?;
        world.add_component(
            button,
            "dummy",
            &ComponentData::new().with("primary", toolbar_guid),
        )?;
    }
    Ok(toolbar)
}

fn run_frames(world: &mut World) {
    for frame in 0..MAX_FRAMES {
        let report = world.post_update();
        if report.is_empty() {
            info!("Layout settled after {} frames", frame);
            return;
        }
        info!(
            "Frame {}: {} groups reflowed, {} failed",
            frame,
            report.processed,
            report.failures.len()
        );
    }
    info!("Layout still pending after {} frames", MAX_FRAMES);
}

fn print_tree(world: &World, entity: Entity) -> SceneResult<()> {
    let depth = world.graph_depth(entity)?;
    let indent = "  ".repeat(depth);
    match world.get::<ElementComponent>(entity) {
        Some(element) => info!(
            "{}{} at ({:.1}, {:.1}) size {:.1}x{:.1}",
            indent,
            world.name(entity)?,
            element.position().x,
            element.position().y,
            element.width(),
            element.height()
        ),
        None => info!("{}{}", indent, world.name(entity)?),
    }
    for &child in world.children(entity)? {
        print_tree(world, child)?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    logging::init_with_default("info");

    let mut world = World::with_config(load_config()?);

    let screen = world.create_entity("screen");
    world.add_component(
        screen,
        "element",
        &ComponentData::new().with("size", Vec2::new(1280.0, 720.0)),
    )?;
    world.add_component(
        screen,
        "layoutgroup",
        &ComponentData::new()
            .with("orientation", Orientation::Vertical)
            .with("width_fitting", Fitting::Stretch)
            .with("spacing", Vec2::new(0.0, 12.0)),
    )?;

    let toolbar = build_toolbar(&mut world, screen, 5)?;
    run_frames(&mut world);

    // The copy's buttons point at the copied toolbar, not the original
    let copy = world.clone_entity(toolbar)?;
    world.add_child(screen, copy)?;
    world.set_name(copy, "toolbar_copy")?;

    let first_button = world.children(copy)?[0];
    if let Some(dummy) = world.get::<DummyComponent>(first_button) {
        info!(
            "Copied button references {:?} (copy is {})",
            dummy.primary,
            world.guid(copy)?
        );
    }

    run_frames(&mut world);
    print_tree(&world, screen)?;
    Ok(())
}
