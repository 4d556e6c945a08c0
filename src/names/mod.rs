//! Settlement and geographic naming.
//!
//! A [`NameGenerator`] lives for one world-generation run and guarantees that
//! every name it hands out is unique within that run.

pub mod config;
pub mod styles;

use std::collections::HashSet;

use rand::{Rng, RngCore};

use crate::model::{SettlementKind, Terrain};

pub use config::{GeographicConfig, NamingConfig, StyleConfig, TierThresholds};
pub use styles::{NamePattern, NamingStyle};

/// Fresh compositions tried before falling back to a numeric suffix.
const MAX_ATTEMPTS: usize = 30;

/// Highest numeric disambiguator tried ("Name 2" .. "Name N").
const MAX_DISAMBIGUATOR: u32 = 1_000;

const FALLBACK_PREFIXES: &[&str] = &["New", "Old", "North", "South", "East", "West", "High", "Low"];

pub struct NameGenerator<'a> {
    config: &'a NamingConfig,
    used: HashSet<String>,
}

impl<'a> NameGenerator<'a> {
    pub fn new(config: &'a NamingConfig) -> Self {
        Self {
            config,
            used: HashSet::new(),
        }
    }

    /// Forget every name handed out so far.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    pub fn used_count(&self) -> usize {
        self.used.len()
    }

    /// Mark a name handed out elsewhere as taken. Empty names are ignored.
    pub fn reserve(&mut self, name: &str) {
        if !name.is_empty() {
            self.used.insert(name.to_string());
        }
    }

    /// Pick one of the terrain's preferred styles uniformly; `fantasy` when
    /// the terrain is unmapped.
    pub fn pick_style(&self, terrain: Terrain, rng: &mut dyn RngCore) -> NamingStyle {
        match self.config.terrain_styles.get(&terrain) {
            Some(styles) if !styles.is_empty() => {
                styles[rng.random_range(0..styles.len())].clone()
            }
            _ => NamingStyle::Fantasy,
        }
    }

    /// Compose a proper name in one of the terrain's styles, without any
    /// uniqueness check. `None` when no usable style tables exist.
    pub fn compose_proper_name(&self, terrain: Terrain, rng: &mut dyn RngCore) -> Option<String> {
        let style = self.pick_style(terrain, rng);
        let cfg = self
            .config
            .styles
            .get(&style)
            .or_else(|| self.config.styles.get(&NamingStyle::Fantasy))?;
        if cfg.prefixes.is_empty() || cfg.suffixes.is_empty() {
            return None;
        }

        let pattern = if cfg.patterns.is_empty() {
            NamePattern::PrefixSuffix
        } else {
            cfg.patterns[rng.random_range(0..cfg.patterns.len())]
        };
        let prefix = pick(&cfg.prefixes, rng);
        let name = match pattern {
            NamePattern::PrefixMiddleSuffix if !cfg.middles.is_empty() => {
                let middle = pick(&cfg.middles, rng);
                let suffix = pick(&cfg.suffixes, rng);
                format!("{prefix}{middle}{suffix}")
            }
            _ => {
                let suffix = pick(&cfg.suffixes, rng);
                format!("{prefix}{suffix}")
            }
        };
        Some(name)
    }

    /// Compose a cluster name ("Grey Hills") without any uniqueness check.
    pub fn compose_geographic(
        &self,
        terrain: Terrain,
        cluster_size: usize,
        rng: &mut dyn RngCore,
    ) -> String {
        let Some(geo) = self.config.geographic.get(&terrain) else {
            return format!("{} Region", terrain.title());
        };
        let tiers = self.config.tiers;
        let tiered: Vec<&Vec<String>> = if cluster_size >= tiers.large {
            vec![&geo.large, &geo.medium, &geo.small]
        } else if cluster_size >= tiers.medium {
            vec![&geo.medium, &geo.small]
        } else {
            vec![&geo.small]
        };
        let Some(nouns) = tiered.iter().find(|list| !list.is_empty()) else {
            return format!("{} Region", terrain.title());
        };
        let noun = pick(nouns, rng);

        if rng.random_bool(geo.proper_name_probability())
            && let Some(proper) = self.compose_proper_name(terrain, rng)
        {
            return format!("{proper} {noun}");
        }
        if geo.adjectives.is_empty() {
            return noun.to_string();
        }
        format!("{} {noun}", pick(&geo.adjectives, rng))
    }

    /// A unique settlement name for `terrain`.
    pub fn settlement_name(
        &mut self,
        terrain: Terrain,
        kind: SettlementKind,
        rng: &mut dyn RngCore,
    ) -> String {
        let mut last = None;
        for _ in 0..MAX_ATTEMPTS {
            let Some(name) = self.compose_proper_name(terrain, rng) else {
                break;
            };
            if !self.used.contains(&name) {
                return self.claim(name);
            }
            last = Some(name);
        }
        let base = last.unwrap_or_else(|| fallback_settlement_name(kind, rng));
        self.claim_disambiguated(base, rng, |rng| fallback_settlement_name(kind, rng))
    }

    /// A unique name for a terrain cluster of `cluster_size` cells.
    pub fn geographic_name(
        &mut self,
        terrain: Terrain,
        cluster_size: usize,
        rng: &mut dyn RngCore,
    ) -> String {
        let mut last = String::new();
        for _ in 0..MAX_ATTEMPTS {
            let name = self.compose_geographic(terrain, cluster_size, rng);
            if !self.used.contains(&name) {
                return self.claim(name);
            }
            last = name;
        }
        self.claim_disambiguated(last, rng, |rng| fallback_geographic_name(terrain, rng))
    }

    fn claim(&mut self, name: String) -> String {
        self.used.insert(name.clone());
        name
    }

    /// Append " 2", " 3", ... until free. If every counter is taken, use the
    /// random fallback; the result is then claimed even if it collides.
    fn claim_disambiguated(
        &mut self,
        base: String,
        rng: &mut dyn RngCore,
        fallback: impl Fn(&mut dyn RngCore) -> String,
    ) -> String {
        if !self.used.contains(&base) {
            return self.claim(base);
        }
        for n in 2..=MAX_DISAMBIGUATOR {
            let candidate = format!("{base} {n}");
            if !self.used.contains(&candidate) {
                return self.claim(candidate);
            }
        }
        tracing::warn!(%base, "name disambiguators exhausted, using fallback");
        let mut name = fallback(rng);
        for _ in 0..MAX_ATTEMPTS {
            if !self.used.contains(&name) {
                break;
            }
            name = fallback(rng);
        }
        self.claim(name)
    }
}

fn pick<'s>(items: &'s [String], rng: &mut dyn RngCore) -> &'s str {
    &items[rng.random_range(0..items.len())]
}

/// `"<Prefix><Kind><1-999>"`, e.g. "NorthVillage417".
pub fn fallback_settlement_name(kind: SettlementKind, rng: &mut dyn RngCore) -> String {
    let prefix = FALLBACK_PREFIXES[rng.random_range(0..FALLBACK_PREFIXES.len())];
    let n: u32 = rng.random_range(1..=999);
    format!("{prefix}{}{n}", kind.title())
}

/// `"<Terrain> Region <1-999>"`, e.g. "Hills Region 42".
pub fn fallback_geographic_name(terrain: Terrain, rng: &mut dyn RngCore) -> String {
    let n = rng.random_range(1..=999);
    format!("{} Region {n}", terrain.title())
}
