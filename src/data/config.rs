use serde::Deserialize;

/// Tunables loaded once at startup. Every field is mandatory; a missing or
/// mistyped key fails the whole load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub lube: LubeConfig,
    pub gravity: GravityConfig,
    pub oxy: OxyConfig,
    pub store: Vec<StoreItem>,
    pub toilet: ToiletConfig,
    pub brick: BrickConfig,
    pub water: WaterConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LubeConfig {
    pub base: f32,
    pub upgrade: f32,
    pub max_tier: i16,
}

impl LubeConfig {
    /// Progress decay rate at the given tier; upgrades lower it.
    pub fn decay_for_tier(&self, tier: i16) -> f32 {
        self.base - f32::from(tier) * self.upgrade
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GravityConfig {
    pub base: f32,
    pub upgrade: f32,
    pub threshold: f32,
    pub max_tier: i16,
}

impl GravityConfig {
    /// Pull applied past the threshold; upgrades raise it.
    pub fn pull_for_tier(&self, tier: i16) -> f32 {
        self.base + f32::from(tier) * self.upgrade
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct OxyConfig {
    pub regen: f32,
    pub drain: f32,
    pub min: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToiletConfig {
    pub x_pos: f32,
    pub y_pos: f32,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrickConfig {
    pub x_pos: f32,
    pub start_y: f32,
    pub end_y: f32,
    pub fall_speed: f32,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterConfig {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
    pub width: f32,
    pub height: f32,
    pub scissor_x: f32,
    pub scissor_y: f32,
    pub scissor_w: f32,
    pub scissor_h: f32,
}

/// What a purchase grants. The tier payload is the target tier; the save
/// merges it with max, so tiers never decrease.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Lube { tier: i16 },
    Gravity { tier: i16 },
    Oxy { tier: i16 },
    EndGame,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawStoreItem")]
pub struct StoreItem {
    pub name: String,
    pub desc: String,
    pub price: i64,
    pub icon: i16,
    /// Minimum prestige at which the item is shown at all.
    pub prestige: i16,
    pub kind: ItemKind,
}

/// Wire shape of a catalog entry: the kind is encoded as exactly one of the
/// `lubeTier`/`gravityTier`/`oxyTier`/`endGame` keys.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStoreItem {
    name: String,
    desc: String,
    price: i64,
    icon: i16,
    #[serde(default)]
    prestige: i16,
    lube_tier: Option<i16>,
    gravity_tier: Option<i16>,
    oxy_tier: Option<i16>,
    end_game: Option<bool>,
}

impl TryFrom<RawStoreItem> for StoreItem {
    type Error = String;

    fn try_from(raw: RawStoreItem) -> Result<Self, Self::Error> {
        let kind = match (raw.lube_tier, raw.gravity_tier, raw.oxy_tier, raw.end_game) {
            (Some(tier), None, None, None) => ItemKind::Lube { tier },
            (None, Some(tier), None, None) => ItemKind::Gravity { tier },
            (None, None, Some(tier), None) => ItemKind::Oxy { tier },
            (None, None, None, Some(_)) => ItemKind::EndGame,
            (None, None, None, None) => {
                return Err(format!(
                    "store item `{}` defines none of `lubeTier`, `gravityTier`, `oxyTier` or `endGame`",
                    raw.name
                ));
            }
            _ => {
                return Err(format!(
                    "store item `{}` defines more than one of `lubeTier`, `gravityTier`, `oxyTier` and `endGame`",
                    raw.name
                ));
            }
        };

        Ok(Self {
            name: raw.name,
            desc: raw.desc,
            price: raw.price,
            icon: raw.icon,
            prestige: raw.prestige,
            kind,
        })
    }
}
