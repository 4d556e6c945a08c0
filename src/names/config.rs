use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::styles::{
    NamePattern, NamingStyle, builtin_geographic, builtin_tables, builtin_terrain_styles,
};
use crate::config::load_json_or_default;
use crate::model::Terrain;

/// Component lists and allowed patterns for one cultural style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub prefixes: Vec<String>,
    pub middles: Vec<String>,
    pub suffixes: Vec<String>,
    pub patterns: Vec<NamePattern>,
}

impl StyleConfig {
    fn builtin(style: &NamingStyle) -> Option<StyleConfig> {
        let tables = builtin_tables(style)?;
        Some(StyleConfig {
            prefixes: to_strings(tables.prefixes),
            middles: to_strings(tables.middles),
            suffixes: to_strings(tables.suffixes),
            patterns: vec![NamePattern::PrefixSuffix, NamePattern::PrefixMiddleSuffix],
        })
    }
}

/// Adjectives and size-tiered feature nouns for naming a terrain cluster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeographicConfig {
    pub adjectives: Vec<String>,
    pub small: Vec<String>,
    pub medium: Vec<String>,
    pub large: Vec<String>,
    /// Chance that a style-composed proper name replaces the adjective
    /// ("Thornwick Hills" instead of "Grey Hills").
    pub proper_name_chance: f64,
}

impl Default for GeographicConfig {
    fn default() -> Self {
        Self {
            adjectives: Vec::new(),
            small: Vec::new(),
            medium: Vec::new(),
            large: Vec::new(),
            proper_name_chance: 0.3,
        }
    }
}

impl GeographicConfig {
    /// `proper_name_chance` clamped to a valid probability (NaN counts as 0).
    pub fn proper_name_probability(&self) -> f64 {
        if self.proper_name_chance.is_nan() {
            0.0
        } else {
            self.proper_name_chance.clamp(0.0, 1.0)
        }
    }

    fn builtin(terrain: Terrain) -> GeographicConfig {
        let tables = builtin_geographic(terrain);
        GeographicConfig {
            adjectives: to_strings(tables.adjectives),
            small: to_strings(tables.small),
            medium: to_strings(tables.medium),
            large: to_strings(tables.large),
            ..GeographicConfig::default()
        }
    }
}

/// Minimum cluster sizes for the medium and large noun tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    pub medium: usize,
    pub large: usize,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            medium: 4,
            large: 10,
        }
    }
}

/// Naming configuration. Any field left out of a loaded document takes the
/// built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub styles: BTreeMap<NamingStyle, StyleConfig>,
    pub terrain_styles: BTreeMap<Terrain, Vec<NamingStyle>>,
    pub geographic: BTreeMap<Terrain, GeographicConfig>,
    pub tiers: TierThresholds,
}

impl Default for NamingConfig {
    fn default() -> Self {
        let styles = NamingStyle::BUILTIN
            .iter()
            .filter_map(|s| StyleConfig::builtin(s).map(|cfg| (s.clone(), cfg)))
            .collect();
        let terrain_styles = Terrain::ALL
            .iter()
            .map(|&t| (t, builtin_terrain_styles(t)))
            .collect();
        let geographic = Terrain::ALL
            .iter()
            .map(|&t| (t, GeographicConfig::builtin(t)))
            .collect();
        Self {
            styles,
            terrain_styles,
            geographic,
            tiers: TierThresholds::default(),
        }
    }
}

impl NamingConfig {
    /// Load from a JSON file, falling back to built-ins when the file is
    /// missing or malformed, then repair whatever is left incomplete.
    pub fn load(path: &Path) -> NamingConfig {
        load_json_or_default::<NamingConfig>(path).validated()
    }

    /// Repair the configuration so that every lookup made during naming
    /// succeeds:
    /// - styles without prefixes or suffixes are dropped;
    /// - a style with no usable pattern gets `prefix+suffix`;
    /// - the `fantasy` style always exists;
    /// - every terrain maps to at least one existing style (built-in
    ///   preferences for terrains left out, `fantasy` as the last resort);
    /// - every terrain has geographic tables.
    pub fn validated(mut self) -> NamingConfig {
        self.styles.retain(|style, cfg| {
            let usable = !cfg.prefixes.is_empty() && !cfg.suffixes.is_empty();
            if !usable {
                tracing::warn!(%style, "naming style lacks prefixes or suffixes, dropping");
            }
            usable
        });
        for cfg in self.styles.values_mut() {
            if cfg.middles.is_empty() {
                cfg.patterns.retain(|p| *p != NamePattern::PrefixMiddleSuffix);
            }
            if cfg.patterns.is_empty() {
                cfg.patterns.push(NamePattern::PrefixSuffix);
            }
        }
        if !self.styles.contains_key(&NamingStyle::Fantasy) {
            if let Some(fantasy) = StyleConfig::builtin(&NamingStyle::Fantasy) {
                self.styles.insert(NamingStyle::Fantasy, fantasy);
            }
        }

        for &terrain in Terrain::ALL {
            let styles = self
                .terrain_styles
                .entry(terrain)
                .or_insert_with(|| builtin_terrain_styles(terrain));
            styles.retain(|s| self.styles.contains_key(s));
            if styles.is_empty() {
                tracing::warn!(%terrain, "no usable naming style for terrain, using fantasy");
                styles.push(NamingStyle::Fantasy);
            }
            self.geographic
                .entry(terrain)
                .or_insert_with(|| GeographicConfig::builtin(terrain));
        }

        if self.tiers.medium > self.tiers.large {
            std::mem::swap(&mut self.tiers.medium, &mut self.tiers.large);
        }
        self
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
