use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use bevy::sprite::Anchor;
use bricked::core::{
    ITEM_AREA_H, ITEM_AREA_W, ITEM_AREA_X, ITEM_AREA_Y, ITEM_H, PAD, SCROLL_SCALAR, TITLE_TEXT_H,
    WINDOW_H, WINDOW_W, WINDOW_X, WINDOW_Y,
};
use bricked::{Feedback, Point, StoreEvent, has_item, visible_items};

use super::resources::{
    ActiveStore, GameConfig, PlaySession, PointerNorm, ScreenLayout, SoundBank, StoreUi,
    StoreUiPart,
};
use super::state::{AppPhase, OverlayState};

const WINDOW_COLOR: Color = Color::srgba(0.10, 0.10, 0.12, 0.96);
const ROW_COLOR: Color = Color::srgb(0.18, 0.18, 0.22);
const ROW_HOVER_COLOR: Color = Color::srgb(0.30, 0.30, 0.38);
const ROW_OWNED_COLOR: Color = Color::srgb(0.14, 0.22, 0.16);
const LABEL_COLOR: Color = Color::srgb(0.92, 0.92, 0.95);
const OWNED_LABEL_COLOR: Color = Color::srgb(0.55, 0.65, 0.58);
const PURCHASED_COLOR: Color = Color::srgb(0.45, 0.90, 0.45);
const REFUSED_COLOR: Color = Color::srgb(0.95, 0.40, 0.35);

pub fn open_store(
    mut commands: Commands,
    config: Res<GameConfig>,
    play: Res<PlaySession>,
) {
    commands.insert_resource(ActiveStore::default());

    commands.spawn((
        Name::new("StoreWindow"),
        StoreUi,
        StoreUiPart::Window,
        Sprite::from_color(WINDOW_COLOR, Vec2::ONE),
        Transform::from_xyz(0.0, 0.0, 20.0),
    ));
    commands.spawn((
        Name::new("StoreTitle"),
        StoreUi,
        StoreUiPart::Title,
        Text2d::new("Store"),
        TextFont {
            font_size: 40.0,
            ..default()
        },
        TextColor(LABEL_COLOR),
        Anchor::CenterLeft,
        Transform::from_xyz(0.0, 0.0, 21.0),
    ));

    for (row, _) in visible_items(&config.0, &play.session.save.data).enumerate() {
        commands.spawn((
            Name::new(format!("StoreRow({row})")),
            StoreUi,
            StoreUiPart::RowBack(row),
            Sprite::from_color(ROW_COLOR, Vec2::ONE),
            Transform::from_xyz(0.0, 0.0, 21.0),
        ));
        commands.spawn((
            Name::new(format!("StoreRowLabel({row})")),
            StoreUi,
            StoreUiPart::RowLabel(row),
            Text2d::new(""),
            TextFont {
                font_size: 22.0,
                ..default()
            },
            TextColor(LABEL_COLOR),
            Anchor::CenterLeft,
            Transform::from_xyz(0.0, 0.0, 22.0),
        ));
    }

    commands.spawn((
        Name::new("StoreFeedback"),
        StoreUi,
        StoreUiPart::FeedbackFloat,
        Text2d::new(""),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(PURCHASED_COLOR),
        Visibility::Hidden,
        Transform::from_xyz(0.0, 0.0, 23.0),
    ));
}

pub fn close_store(mut commands: Commands, ui: Query<Entity, With<StoreUi>>) {
    for entity in &ui {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<ActiveStore>();
}

pub fn handle_store_input(
    mut wheel: EventReader<MouseWheel>,
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerNorm>,
    config: Res<GameConfig>,
    mut store: ResMut<ActiveStore>,
    mut play: ResMut<PlaySession>,
    mut next_overlay: ResMut<NextState<OverlayState>>,
    mut next_phase: ResMut<NextState<AppPhase>>,
) {
    let visible = visible_items(&config.0, &play.session.save.data).count();
    for event in wheel.read() {
        if event.y > 0.0 {
            store.overlay.scroll_by(-1, visible);
        } else if event.y < 0.0 {
            store.overlay.scroll_by(1, visible);
        }
    }

    let Some(position) = pointer.0 else {
        store.overlay.hover = None;
        return;
    };
    store.overlay.update_hover(position);

    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    match store
        .overlay
        .click(position, &config.0, &mut play.session.save)
    {
        StoreEvent::Close => next_overlay.set(OverlayState::Closed),
        StoreEvent::EndGame => {
            next_overlay.set(OverlayState::Closed);
            next_phase.set(AppPhase::End);
        }
        StoreEvent::None => {}
    }
}

pub fn tick_store(
    mut commands: Commands,
    time: Res<Time>,
    sounds: Res<SoundBank>,
    mut store: ResMut<ActiveStore>,
) {
    store.overlay.tick(time.delta_secs());
    for cue in store.overlay.take_cues() {
        commands.spawn((
            AudioPlayer(sounds.cue_handle(cue)),
            PlaybackSettings::DESPAWN,
        ));
    }
}

pub fn refresh_store(
    config: Res<GameConfig>,
    play: Res<PlaySession>,
    store: Res<ActiveStore>,
    layout: Res<ScreenLayout>,
    mut parts: Query<(
        &StoreUiPart,
        &mut Transform,
        &mut Visibility,
        Option<&mut Sprite>,
        Option<&mut Text2d>,
        Option<&mut TextColor>,
    )>,
) {
    let overlay = &store.overlay;
    let save = &play.session.save.data;
    let items: Vec<_> = visible_items(&config.0, save).collect();

    for (part, mut transform, mut visibility, sprite, text, text_color) in &mut parts {
        match *part {
            StoreUiPart::Window => {
                let Some(mut sprite) = sprite else { continue };
                sprite.custom_size = Some(layout.rect_size(WINDOW_W, WINDOW_H));
                set_center(
                    &mut transform,
                    layout.rect_center(WINDOW_X, WINDOW_Y, WINDOW_W, WINDOW_H),
                );
            }
            StoreUiPart::Title => {
                set_center(
                    &mut transform,
                    layout.norm_to_world(Point::new(
                        WINDOW_X + PAD,
                        WINDOW_Y + PAD + TITLE_TEXT_H * 0.5,
                    )),
                );
            }
            StoreUiPart::RowBack(row) => {
                let Some((top, height)) = row_clip(row, overlay.scroll) else {
                    *visibility = Visibility::Hidden;
                    continue;
                };
                *visibility = Visibility::Inherited;
                if let Some(mut sprite) = sprite {
                    sprite.custom_size = Some(layout.rect_size(ITEM_AREA_W, height));
                    sprite.color = match items.get(row) {
                        Some(item) if has_item(save, item) => ROW_OWNED_COLOR,
                        Some(_) if overlay.hover == Some(row) => ROW_HOVER_COLOR,
                        _ => ROW_COLOR,
                    };
                }
                set_center(
                    &mut transform,
                    layout.rect_center(ITEM_AREA_X, top, ITEM_AREA_W, height),
                );
            }
            StoreUiPart::RowLabel(row) => {
                let Some((top, height)) = row_clip(row, overlay.scroll) else {
                    *visibility = Visibility::Hidden;
                    continue;
                };
                *visibility = Visibility::Inherited;
                let Some(item) = items.get(row) else { continue };
                let owned = has_item(save, item);
                if let Some(mut text) = text {
                    let price_line = if owned {
                        "Owned".to_string()
                    } else {
                        format!("Price: {}", item.price)
                    };
                    let label = format!("{}\n{}\n{}", item.name, item.desc, price_line);
                    if text.0 != label {
                        *text = Text2d::new(label);
                    }
                }
                if let Some(mut text_color) = text_color {
                    text_color.0 = if owned { OWNED_LABEL_COLOR } else { LABEL_COLOR };
                }
                set_center(
                    &mut transform,
                    layout.norm_to_world(Point::new(ITEM_AREA_X + PAD, top + height * 0.5)),
                );
            }
            StoreUiPart::FeedbackFloat => {
                let Some(float) = overlay.float else {
                    *visibility = Visibility::Hidden;
                    continue;
                };
                *visibility = Visibility::Inherited;
                let (label, color) = match float.kind {
                    Feedback::Purchased(row) => (
                        items
                            .get(row)
                            .map(|item| format!("+{}", item.name))
                            .unwrap_or_default(),
                        PURCHASED_COLOR,
                    ),
                    Feedback::InsufficientFunds => {
                        ("Insufficient funds".to_string(), REFUSED_COLOR)
                    }
                    Feedback::AlreadyOwned => ("Already owned".to_string(), REFUSED_COLOR),
                };
                if let Some(mut text) = text
                    && text.0 != label
                {
                    *text = Text2d::new(label);
                }
                if let Some(mut text_color) = text_color {
                    text_color.0 = color.with_alpha(float.alpha());
                }
                set_center(
                    &mut transform,
                    layout.norm_to_world(Point::new(
                        float.anchor.x,
                        float.anchor.y - float.rise(),
                    )),
                );
            }
        }
    }
}

/// Visible slice of a row's backing rect at the current scroll: normalized
/// top edge and height after clipping to the item area, `None` when the row
/// lies fully outside. Partially scrolled rows stay visible, so anything the
/// pointer can hit is also drawn.
fn row_clip(row: usize, scroll: i32) -> Option<(f32, f32)> {
    let top = ITEM_AREA_Y + row as f32 * ITEM_H - scroll as f32 * SCROLL_SCALAR;
    let clipped_top = top.max(ITEM_AREA_Y);
    let clipped_bottom = (top + ITEM_H - PAD).min(ITEM_AREA_Y + ITEM_AREA_H);
    let height = clipped_bottom - clipped_top;
    (height > 1e-4).then_some((clipped_top, height))
}

fn set_center(transform: &mut Transform, center: Vec2) {
    transform.translation = center.extend(transform.translation.z);
}
