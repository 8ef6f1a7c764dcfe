use bevy::prelude::*;
use bevy::sprite::Anchor;
use bricked::core::{STORE_ICON_H, STORE_ICON_W, STORE_ICON_X, STORE_ICON_Y};

use super::resources::{
    NoticeBanner, PendingNotice, PlaySession, SceneSprite, ScoreText, ScreenLayout, SoundBank,
};

const BACKGROUND_COLOR: Color = Color::srgb(0.72, 0.68, 0.60);
const TOILET_COLOR: Color = Color::srgb(0.92, 0.92, 0.94);
const WATER_COLOR: Color = Color::srgba(0.25, 0.50, 0.85, 0.85);
const BRICK_COLOR: Color = Color::srgb(0.70, 0.28, 0.20);
const BAR_FRAME_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.35);
const EFFORT_FILL_COLOR: Color = Color::srgb(0.95, 0.85, 0.15);
const OXY_FILL_COLOR: Color = Color::srgb(0.15, 0.85, 0.85);
const OXY_WINDED_COLOR: Color = Color::srgb(0.90, 0.15, 0.15);
const STORE_ICON_COLOR: Color = Color::srgb(0.95, 0.75, 0.20);
const STORE_ICON_HOVER_COLOR: Color = Color::srgb(1.0, 0.88, 0.45);
const TEXT_COLOR: Color = Color::srgb(0.12, 0.10, 0.09);
const NOTICE_COLOR: Color = Color::srgb(0.95, 0.90, 0.30);

// Normalized rects for the two status bars, top-left anchored; the fill
// grows downward from the top edge.
const EFFORT_BAR: (f32, f32, f32, f32) = (0.075, 0.075, 0.1, 0.4);
const OXY_BAR: (f32, f32, f32, f32) = (0.825, 0.075, 0.1, 0.4);
const SCORE_POS: (f32, f32) = (0.5, 0.075);
const NOTICE_POS: (f32, f32) = (0.5, 0.16);
const NOTICE_TIME: f32 = 6.0;

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("PrimaryCamera"), Camera2d));
}

pub fn load_sound_bank(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundBank {
        breath: asset_server.load("audio/breath.ogg"),
        pop: asset_server.load("audio/pop.ogg"),
        splash: asset_server.load("audio/splash.ogg"),
        buy: asset_server.load("audio/buy.ogg"),
        broke: asset_server.load("audio/broke.ogg"),
        jingle: asset_server.load("audio/jingle.ogg"),
    });
}

fn scene_sprite(kind: SceneSprite, color: Color, z: f32) -> impl Bundle {
    (
        kind,
        Sprite::from_color(color, Vec2::ONE),
        Transform::from_xyz(0.0, 0.0, z),
    )
}

pub fn spawn_scene(mut commands: Commands, mut notice: ResMut<PendingNotice>) {
    commands.spawn((
        Name::new("Background"),
        scene_sprite(SceneSprite::Background, BACKGROUND_COLOR, 0.0),
    ));
    commands.spawn((
        Name::new("Water"),
        scene_sprite(SceneSprite::Water, WATER_COLOR, 1.0),
    ));
    commands.spawn((
        Name::new("Toilet"),
        scene_sprite(SceneSprite::Toilet, TOILET_COLOR, 2.0),
    ));
    commands.spawn((
        Name::new("Brick"),
        scene_sprite(SceneSprite::Brick, BRICK_COLOR, 3.0),
    ));
    commands.spawn((
        Name::new("EffortFrame"),
        scene_sprite(SceneSprite::EffortFrame, BAR_FRAME_COLOR, 4.0),
    ));
    commands.spawn((
        Name::new("EffortFill"),
        scene_sprite(SceneSprite::EffortFill, EFFORT_FILL_COLOR, 5.0),
    ));
    commands.spawn((
        Name::new("OxyFrame"),
        scene_sprite(SceneSprite::OxyFrame, BAR_FRAME_COLOR, 4.0),
    ));
    commands.spawn((
        Name::new("OxyFill"),
        scene_sprite(SceneSprite::OxyFill, OXY_FILL_COLOR, 5.0),
    ));
    commands.spawn((
        Name::new("StoreIcon"),
        scene_sprite(SceneSprite::StoreIcon, STORE_ICON_COLOR, 5.0),
    ));
    commands.spawn((
        Name::new("Vignette"),
        scene_sprite(SceneSprite::Vignette, Color::srgba(0.0, 0.0, 0.0, 0.0), 8.0),
    ));
    commands.spawn((
        Name::new("FadeCurtain"),
        scene_sprite(SceneSprite::FadeCurtain, Color::srgba(0.0, 0.0, 0.0, 1.0), 9.0),
    ));
    commands.spawn((
        Name::new("ScoreText"),
        ScoreText,
        Text2d::new("Score: 0"),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(TEXT_COLOR),
        Anchor::TopLeft,
        Transform::from_xyz(0.0, 0.0, 6.0),
    ));

    if let Some(text) = notice.0.take() {
        commands.spawn((
            Name::new("NoticeBanner"),
            NoticeBanner {
                remaining: NOTICE_TIME,
            },
            Text2d::new(text),
            TextFont {
                font_size: 26.0,
                ..default()
            },
            TextColor(NOTICE_COLOR),
            Transform::from_xyz(0.0, 0.0, 10.0),
        ));
    }
}

pub fn despawn_scene(
    mut commands: Commands,
    scene: Query<
        Entity,
        Or<(
            With<SceneSprite>,
            With<ScoreText>,
            With<NoticeBanner>,
        )>,
    >,
) {
    for entity in &scene {
        commands.entity(entity).despawn_recursive();
    }
}

pub fn refresh_scene(
    play: Res<PlaySession>,
    layout: Res<ScreenLayout>,
    mut sprites: Query<
        (&SceneSprite, &mut Sprite, &mut Transform, &mut Visibility),
        Without<ScoreText>,
    >,
    mut score: Query<(&mut Text2d, &mut Transform), With<ScoreText>>,
) {
    let session = &play.session;
    let config = &session.config;

    for (kind, mut sprite, mut transform, mut visibility) in &mut sprites {
        let (center, size) = match kind {
            SceneSprite::Background => (layout.rect_center(0.0, 0.0, 1.0, 1.0), layout.rect_size(1.0, 1.0)),
            SceneSprite::Toilet => {
                let toilet = &config.toilet;
                (
                    layout.rect_center(toilet.x_pos, toilet.y_pos, toilet.size, toilet.size),
                    layout.rect_size(toilet.size, toilet.size),
                )
            }
            SceneSprite::Water => {
                let water = &config.water;
                (
                    layout.rect_center(session.water_x, session.water_y, water.width, water.height),
                    layout.rect_size(water.width, water.height),
                )
            }
            SceneSprite::Brick => {
                *visibility = if session.brick_visible() {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
                // The brick stands on end, one unit wide and two tall.
                let brick = &config.brick;
                (
                    layout.rect_center(
                        brick.x_pos - brick.size * 0.5,
                        session.brick_y() - brick.size,
                        brick.size,
                        brick.size * 2.0,
                    ),
                    layout.rect_size(brick.size, brick.size * 2.0),
                )
            }
            SceneSprite::EffortFrame => {
                let (x, y, w, h) = EFFORT_BAR;
                (layout.rect_center(x, y, w, h), layout.rect_size(w, h))
            }
            SceneSprite::EffortFill => bar_fill(&layout, EFFORT_BAR, session.effort),
            SceneSprite::OxyFrame => {
                let (x, y, w, h) = OXY_BAR;
                (layout.rect_center(x, y, w, h), layout.rect_size(w, h))
            }
            SceneSprite::OxyFill => {
                sprite.color = if session.out_of_breath {
                    OXY_WINDED_COLOR
                } else {
                    OXY_FILL_COLOR
                };
                bar_fill(&layout, OXY_BAR, session.oxy)
            }
            SceneSprite::StoreIcon => {
                sprite.color = if session.hovering_store_icon {
                    STORE_ICON_HOVER_COLOR
                } else {
                    STORE_ICON_COLOR
                };
                (
                    layout.rect_center(STORE_ICON_X, STORE_ICON_Y, STORE_ICON_W, STORE_ICON_H),
                    layout.rect_size(STORE_ICON_W, STORE_ICON_H),
                )
            }
            SceneSprite::Vignette => {
                sprite.color = Color::srgba(0.0, 0.0, 0.0, session.vignette_alpha() * 0.55);
                (layout.rect_center(0.0, 0.0, 1.0, 1.0), layout.rect_size(1.0, 1.0))
            }
            SceneSprite::FadeCurtain => {
                let alpha = session.fade_alpha();
                *visibility = if alpha > 0.0 {
                    Visibility::Inherited
                } else {
                    Visibility::Hidden
                };
                sprite.color = Color::srgba(0.0, 0.0, 0.0, alpha);
                (layout.rect_center(0.0, 0.0, 1.0, 1.0), layout.rect_size(1.0, 1.0))
            }
        };

        sprite.custom_size = Some(size);
        transform.translation = center.extend(transform.translation.z);
    }

    if let Ok((mut text, mut transform)) = score.get_single_mut() {
        let label = format!("Score: {}", session.save.data.score);
        if text.0 != label {
            *text = Text2d::new(label);
        }
        let anchor = layout.norm_to_world(bricked::Point::new(SCORE_POS.0, SCORE_POS.1));
        transform.translation = anchor.extend(transform.translation.z);
    }
}

fn bar_fill(layout: &ScreenLayout, bar: (f32, f32, f32, f32), value: f32) -> (Vec2, Vec2) {
    let (x, y, w, h) = bar;
    let filled = h * value.clamp(0.0, 1.0);
    (
        layout.rect_center(x, y, w, filled),
        layout.rect_size(w, filled),
    )
}

pub fn tick_notice(
    mut commands: Commands,
    time: Res<Time>,
    layout: Res<ScreenLayout>,
    mut banners: Query<(Entity, &mut NoticeBanner, &mut TextColor, &mut Transform)>,
) {
    for (entity, mut banner, mut color, mut transform) in &mut banners {
        banner.remaining -= time.delta_secs();
        if banner.remaining <= 0.0 {
            commands.entity(entity).despawn_recursive();
            continue;
        }
        // Fade out over the final second.
        color.0 = NOTICE_COLOR.with_alpha(banner.remaining.min(1.0));
        let anchor = layout.norm_to_world(bricked::Point::new(NOTICE_POS.0, NOTICE_POS.1));
        transform.translation = anchor.extend(transform.translation.z);
    }
}
