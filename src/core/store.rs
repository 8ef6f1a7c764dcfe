use crate::data::{Config, ItemKind, StoreItem};
use crate::save::{SaveData, Savefile};

use super::{Point, SoundCue};

pub const PAD: f32 = 0.01;
pub const WINDOW_W: f32 = 0.7;
pub const WINDOW_H: f32 = 0.9;
pub const WINDOW_X: f32 = (1.0 - WINDOW_W) / 2.0;
pub const WINDOW_Y: f32 = (1.0 - WINDOW_H) / 2.0;
pub const TITLE_TEXT_H: f32 = 0.08;
pub const ITEM_AREA_X: f32 = WINDOW_X + PAD;
pub const ITEM_AREA_Y: f32 = WINDOW_Y + PAD + TITLE_TEXT_H + PAD;
pub const ITEM_AREA_W: f32 = WINDOW_W - 2.0 * PAD;
pub const ITEM_AREA_H: f32 = WINDOW_H - 2.0 * PAD - TITLE_TEXT_H - PAD;
pub const ITEM_H: f32 = ITEM_AREA_H / 5.5;
pub const SCROLL_SCALAR: f32 = 0.05;
pub const FLOAT_LIFETIME: f32 = 5.0;
pub const FLOAT_DISTANCE: f32 = 0.5;

/// Outcome of a purchase attempt, shown as a rising, fading text float.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    InsufficientFunds,
    AlreadyOwned,
    Purchased(usize),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackFloat {
    pub kind: Feedback,
    pub timer: f32,
    pub anchor: Point,
}

impl FeedbackFloat {
    fn new(kind: Feedback, anchor: Point) -> Self {
        Self {
            kind,
            timer: 0.0,
            anchor,
        }
    }

    pub fn alpha(&self) -> f32 {
        1.0 - self.timer / FLOAT_LIFETIME
    }

    pub fn rise(&self) -> f32 {
        self.timer / FLOAT_LIFETIME * FLOAT_DISTANCE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    None,
    Close,
    EndGame,
}

/// Catalog entries shown for the given save, in catalog order. The position
/// within this sequence is the on-screen row index.
pub fn visible_items<'a>(
    config: &'a Config,
    save: &SaveData,
) -> impl Iterator<Item = &'a StoreItem> {
    let prestige = save.prestige;
    config.store.iter().filter(move |item| item.prestige <= prestige)
}

/// Highest legal scroll for a catalog of `visible_count` rows: just enough
/// steps to bring the last row fully inside the item area, zero when the
/// catalog already fits.
pub fn max_scroll(visible_count: usize) -> i32 {
    let overflow = visible_count as f32 * ITEM_H - ITEM_AREA_H;
    if overflow <= 0.0 {
        0
    } else {
        (overflow / SCROLL_SCALAR).ceil() as i32
    }
}

pub fn has_item(save: &SaveData, item: &StoreItem) -> bool {
    if save.prestige < item.prestige {
        return false;
    }
    match item.kind {
        ItemKind::Lube { tier } => save.lube_tier >= tier,
        ItemKind::Gravity { tier } => save.gravity_tier >= tier,
        ItemKind::Oxy { tier } => save.oxy_tier >= tier,
        ItemKind::EndGame => false,
    }
}

/// Modal store overlay state. Purchases mutate the save handed into `click`;
/// while the overlay is topmost it is the only writer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreOverlay {
    pub hover: Option<usize>,
    pub float: Option<FeedbackFloat>,
    pub scroll: i32,
    cues: Vec<SoundCue>,
}

impl StoreOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    /// Resolves the pointer to a row index. The index is not checked against
    /// the visible item count; `hovered_item` does the bounds check.
    pub fn update_hover(&mut self, pos: Point) {
        if pos.x < ITEM_AREA_X
            || pos.x >= ITEM_AREA_X + ITEM_AREA_W
            || pos.y < ITEM_AREA_Y
            || pos.y >= ITEM_AREA_Y + ITEM_AREA_H
        {
            self.hover = None;
            return;
        }
        let offset = pos.y + self.scroll as f32 * SCROLL_SCALAR - ITEM_AREA_Y;
        self.hover = Some((offset / ITEM_H).floor() as usize);
    }

    pub fn hovered_item<'a>(&self, config: &'a Config, save: &SaveData) -> Option<&'a StoreItem> {
        visible_items(config, save).nth(self.hover?)
    }

    pub fn scroll_by(&mut self, delta: i32, visible_count: usize) {
        self.scroll = (self.scroll + delta).clamp(0, max_scroll(visible_count));
    }

    pub fn tick(&mut self, delta: f32) {
        if let Some(float) = self.float.as_mut() {
            float.timer += delta;
            if float.timer >= FLOAT_LIFETIME {
                self.float = None;
            }
        }
    }

    pub fn click(&mut self, pos: Point, config: &Config, save: &mut Savefile) -> StoreEvent {
        if pos.x < WINDOW_X
            || pos.x > WINDOW_X + WINDOW_W
            || pos.y < WINDOW_Y
            || pos.y > WINDOW_Y + WINDOW_H
        {
            return StoreEvent::Close;
        }
        self.update_hover(pos);
        let Some(row) = self.hover else {
            return StoreEvent::None;
        };
        let Some(item) = visible_items(config, &save.data).nth(row) else {
            return StoreEvent::None;
        };
        self.acquire(row, item, pos, save)
    }

    fn acquire(
        &mut self,
        row: usize,
        item: &StoreItem,
        anchor: Point,
        save: &mut Savefile,
    ) -> StoreEvent {
        if has_item(&save.data, item) {
            self.float = Some(FeedbackFloat::new(Feedback::AlreadyOwned, anchor));
            self.cues.push(SoundCue::Broke);
            return StoreEvent::None;
        }

        if save.data.score < item.price {
            self.float = Some(FeedbackFloat::new(Feedback::InsufficientFunds, anchor));
            self.cues.push(SoundCue::Broke);
            return StoreEvent::None;
        }

        save.data.score -= item.price;
        save.dirty = true;
        match item.kind {
            // Tiers merge with max so a purchase can never lower one.
            ItemKind::Lube { tier } => save.data.lube_tier = save.data.lube_tier.max(tier),
            ItemKind::Gravity { tier } => {
                save.data.gravity_tier = save.data.gravity_tier.max(tier);
            }
            ItemKind::Oxy { tier } => save.data.oxy_tier = save.data.oxy_tier.max(tier),
            ItemKind::EndGame => return StoreEvent::EndGame,
        }
        self.float = Some(FeedbackFloat::new(Feedback::Purchased(row), anchor));
        self.hover = None;
        self.cues.push(SoundCue::Buy);
        StoreEvent::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::test_support::minimal_config;
    use crate::save::Savefile;

    fn row_point(row: usize) -> Point {
        Point::new(
            ITEM_AREA_X + ITEM_AREA_W / 2.0,
            ITEM_AREA_Y + (row as f32 + 0.5) * ITEM_H,
        )
    }

    fn funded_save(score: i64) -> Savefile {
        let mut save = Savefile::default();
        save.data.score = score;
        save
    }

    #[test]
    fn insufficient_funds_mutates_nothing() {
        let config = minimal_config();
        let mut save = funded_save(0);
        let mut overlay = StoreOverlay::new();

        let event = overlay.click(row_point(0), &config, &mut save);

        assert_eq!(event, StoreEvent::None);
        assert_eq!(save.data.score, 0);
        assert_eq!(save.data.lube_tier, 0);
        assert!(!save.dirty);
        assert_eq!(
            overlay.float.map(|float| float.kind),
            Some(Feedback::InsufficientFunds)
        );
        assert_eq!(overlay.take_cues(), vec![SoundCue::Broke]);
    }

    #[test]
    fn purchase_deducts_exactly_the_price_and_merges_the_tier() {
        let config = minimal_config();
        let price = config.store[0].price;
        let mut save = funded_save(price + 7);
        let mut overlay = StoreOverlay::new();

        let event = overlay.click(row_point(0), &config, &mut save);

        assert_eq!(event, StoreEvent::None);
        assert_eq!(save.data.score, 7);
        assert_eq!(save.data.lube_tier, 1);
        assert!(save.dirty);
        assert_eq!(
            overlay.float.map(|float| float.kind),
            Some(Feedback::Purchased(0))
        );
        assert_eq!(overlay.hover, None);
        assert_eq!(overlay.take_cues(), vec![SoundCue::Buy]);
    }

    #[test]
    fn repeating_a_purchase_reports_already_owned_and_spends_nothing() {
        let config = minimal_config();
        let price = config.store[0].price;
        let mut save = funded_save(price * 3);
        let mut overlay = StoreOverlay::new();

        overlay.click(row_point(0), &config, &mut save);
        let score_after_first = save.data.score;
        overlay.take_cues();
        save.dirty = false;

        let event = overlay.click(row_point(0), &config, &mut save);

        assert_eq!(event, StoreEvent::None);
        assert_eq!(save.data.score, score_after_first);
        assert_eq!(save.data.lube_tier, 1);
        assert!(!save.dirty);
        assert_eq!(
            overlay.float.map(|float| float.kind),
            Some(Feedback::AlreadyOwned)
        );
        assert_eq!(overlay.take_cues(), vec![SoundCue::Broke]);
    }

    #[test]
    fn owning_a_higher_tier_counts_as_owned() {
        let config = minimal_config();
        let mut save = funded_save(1000);
        save.data.lube_tier = 3;

        assert!(has_item(&save.data, &config.store[0]));
    }

    #[test]
    fn end_game_items_are_never_owned_and_trigger_the_transition() {
        let config = minimal_config();
        let end_row = visible_items_with_prestige(&config, 1)
            .iter()
            .position(|item| item.kind == ItemKind::EndGame)
            .expect("catalog should carry an end-game item");
        let mut save = funded_save(10_000);
        save.data.prestige = 1;
        let end_item = visible_items(&config, &save.data)
            .nth(end_row)
            .expect("end-game item visible at prestige 1");
        assert!(!has_item(&save.data, end_item));
        let price = end_item.price;

        let mut overlay = StoreOverlay::new();
        let event = overlay.click(row_point(end_row), &config, &mut save);

        assert_eq!(event, StoreEvent::EndGame);
        assert_eq!(save.data.score, 10_000 - price);
        assert!(save.dirty);
        // No float, no sound; control transfers immediately.
        assert_eq!(overlay.float, None);
        assert!(overlay.take_cues().is_empty());
    }

    fn visible_items_with_prestige(config: &Config, prestige: i16) -> Vec<&StoreItem> {
        let mut save = SaveData::default();
        save.prestige = prestige;
        visible_items(config, &save).collect()
    }

    #[test]
    fn prestige_gates_visibility_and_row_indices() {
        let config = minimal_config();

        let base_rows = visible_items_with_prestige(&config, 0);
        assert!(base_rows.iter().all(|item| item.prestige == 0));

        let unlocked_rows = visible_items_with_prestige(&config, 1);
        assert!(unlocked_rows.len() > base_rows.len());
        // Base items keep their rows; unlocked ones slot in catalog order.
        for (row, item) in base_rows.iter().enumerate() {
            let unlocked_row = unlocked_rows
                .iter()
                .position(|candidate| candidate.name == item.name)
                .expect("base item stays visible");
            assert!(unlocked_row >= row);
        }
    }

    #[test]
    fn gated_items_are_not_hit_testable_below_their_prestige() {
        let config = minimal_config();
        let save = SaveData::default();
        let visible = visible_items(&config, &save).count();

        let mut overlay = StoreOverlay::new();
        overlay.update_hover(row_point(visible));
        assert_eq!(overlay.hover, Some(visible));
        assert!(overlay.hovered_item(&config, &save).is_none());
    }

    #[test]
    fn hover_is_cleared_outside_the_item_area() {
        let mut overlay = StoreOverlay::new();
        overlay.update_hover(row_point(1));
        assert_eq!(overlay.hover, Some(1));
        overlay.update_hover(Point::new(0.01, 0.5));
        assert_eq!(overlay.hover, None);
    }

    #[test]
    fn scroll_shifts_hover_rows() {
        let mut overlay = StoreOverlay::new();
        overlay.scroll = 2;
        overlay.update_hover(row_point(0));
        let shifted = ((0.5 * ITEM_H + 2.0 * SCROLL_SCALAR) / ITEM_H).floor() as usize;
        assert_eq!(overlay.hover, Some(shifted));
    }

    #[test]
    fn scroll_is_clamped_for_any_cumulative_delta() {
        let mut overlay = StoreOverlay::new();
        for _ in 0..100 {
            overlay.scroll_by(3, 9);
        }
        assert_eq!(overlay.scroll, max_scroll(9));
        for _ in 0..100 {
            overlay.scroll_by(-5, 9);
        }
        assert_eq!(overlay.scroll, 0);
    }

    #[test]
    fn a_catalog_that_fits_the_item_area_never_scrolls() {
        let config = minimal_config();
        let rows = visible_items(&config, &SaveData::default()).count();
        assert_eq!(max_scroll(rows), 0);

        let mut overlay = StoreOverlay::new();
        overlay.scroll_by(5, rows);
        assert_eq!(overlay.scroll, 0);
    }

    #[test]
    fn every_row_of_a_deep_catalog_is_hoverable_at_some_legal_scroll() {
        let rows = 9;
        for row in 0..rows {
            let reachable = (0..=max_scroll(rows)).any(|scroll| {
                let mut overlay = StoreOverlay::new();
                overlay.scroll = scroll;
                let top =
                    ITEM_AREA_Y + row as f32 * ITEM_H - scroll as f32 * SCROLL_SCALAR;
                overlay.update_hover(Point::new(
                    ITEM_AREA_X + ITEM_AREA_W / 2.0,
                    top + ITEM_H / 2.0,
                ));
                overlay.hover == Some(row)
            });
            assert!(reachable, "row {row} is unreachable at every legal scroll");
        }
    }

    #[test]
    fn click_outside_the_window_closes_without_side_effects() {
        let config = minimal_config();
        let mut save = funded_save(50);
        let mut overlay = StoreOverlay::new();

        let event = overlay.click(Point::new(0.05, 0.5), &config, &mut save);

        assert_eq!(event, StoreEvent::Close);
        assert_eq!(save.data.score, 50);
        assert!(!save.dirty);
        assert_eq!(overlay.float, None);
    }

    #[test]
    fn feedback_float_ages_and_expires() {
        let config = minimal_config();
        let mut save = funded_save(0);
        let mut overlay = StoreOverlay::new();
        overlay.click(row_point(0), &config, &mut save);

        overlay.tick(FLOAT_LIFETIME / 2.0);
        let float = overlay.float.expect("float still alive");
        assert!((float.alpha() - 0.5).abs() < 1e-5);
        assert!((float.rise() - FLOAT_DISTANCE / 2.0).abs() < 1e-5);

        overlay.tick(FLOAT_LIFETIME);
        assert_eq!(overlay.float, None);
    }
}
