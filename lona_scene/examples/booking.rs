//! Minimal host loop: build a small scene, tick it for a few frames, and
//! print the draw commands a real backend would replay each frame.

use indexmap::IndexMap;
use lona_animation::{FrameCell, FrameSet};
use lona_ids::{FontID, TextureID};
use lona_render_bridge::{Renderer, Texture};
use lona_scene::{Scene, SceneNode, SpriteAttachment};
use lona_scene::{AnimatedSprite, StaticSprite};
use lona_structs::{Timing, Vector2};

fn main() -> lona_scene::Result<()> {
    env_logger::init();

    let mut renderer = Renderer::new(800, 600);
    renderer.set_font(FontID::from_parts(1, 0));

    let mut scene = Scene::new();
    let stage = scene.add_node(SceneNode::new("stage"));

    // A backdrop drawn at its native size.
    let backdrop = scene.spawn_child(
        stage,
        SceneNode::at("backdrop", Vector2::new(400.0, 300.0)),
    )?;
    let backdrop_texture = Texture::new(TextureID::from_parts(1, 0), 800, 600);
    scene.add_attachment(
        SpriteAttachment::new(StaticSprite::new(backdrop_texture)),
        backdrop,
    )?;

    // An animated character cycling through a 2-frame walk.
    let player = scene.spawn_child(stage, SceneNode::at("player", Vector2::new(200.0, 200.0)))?;
    let sheet = Texture::new(TextureID::from_parts(2, 0), 64, 32);
    let mut animations = IndexMap::new();
    animations.insert(
        "walk".to_string(),
        FrameSet::new(vec![FrameCell::new(0, 0), FrameCell::new(0, 1)], true, 10)?,
    );
    scene.add_attachment(
        SpriteAttachment::new(AnimatedSprite::new(
            sheet,
            Vector2::new(32.0, 32.0),
            animations,
        )?),
        player,
    )?;

    let mut time = Timing::default();
    for tick in 0..4 {
        time.step(1.0 / 20.0);

        scene.update(stage, &time);
        let mut frame = renderer.begin_frame();
        scene.render(stage, &time, &renderer, &mut frame);
        scene.gui(stage, &time, &renderer, &mut frame)?;

        println!("frame {tick} (t = {:.2}s)", time.elapsed);
        for command in frame.commands() {
            println!("  {command:?}");
        }
    }

    Ok(())
}
