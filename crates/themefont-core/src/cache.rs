//! Memoized system font resolution
//!
//! [`SystemFontCache`] owns one slot per [`SystemFontRole`]. Every slot starts
//! out unresolved; the first lookup of a role asks the platform resolver once,
//! stores the answer and seals the slot. Sealed slots are returned as copies
//! and never change again.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::config::SystemFontConfig;
use crate::description::{FontDescription, GenericFamily};
use crate::error::FontError;
use crate::font::platform_resolver;
use crate::role::SystemFontRole;
use crate::traits::PlatformFontResolver;

static GLOBAL_CACHE: OnceLock<SystemFontCache> = OnceLock::new();

/// Per-role cache of resolved system font descriptions
pub struct SystemFontCache {
    /// One slot per role, indexed by raw role id
    slots: [Mutex<FontDescription>; SystemFontRole::COUNT],
    resolver: Box<dyn PlatformFontResolver>,
    config: SystemFontConfig,
}

impl SystemFontCache {
    /// Create a cache over `resolver` with the default configuration
    pub fn new<R: PlatformFontResolver + 'static>(resolver: R) -> Self {
        Self::with_config(resolver, SystemFontConfig::default())
    }

    pub fn with_config<R: PlatformFontResolver + 'static>(resolver: R, config: SystemFontConfig) -> Self {
        Self::with_boxed(Box::new(resolver), config)
    }

    /// Create a cache over an already boxed resolver
    pub fn with_boxed(resolver: Box<dyn PlatformFontResolver>, config: SystemFontConfig) -> Self {
        Self {
            slots: std::array::from_fn(|_| Mutex::new(FontDescription::new())),
            resolver,
            config,
        }
    }

    /// Install the process-wide cache
    ///
    /// Only the first installation wins; later calls hand the rejected cache
    /// back. Installing after [`SystemFontCache::global`] has been called also
    /// fails, since that call already built the default cache.
    pub fn install_global(cache: SystemFontCache) -> Result<(), SystemFontCache> {
        GLOBAL_CACHE.set(cache)
    }

    /// The process-wide cache
    ///
    /// Built lazily over the platform resolver when nothing was installed.
    /// It lives until process exit.
    pub fn global() -> &'static SystemFontCache {
        GLOBAL_CACHE.get_or_init(|| {
            let config = SystemFontConfig::default();
            let resolver = platform_resolver(&config);
            tracing::debug!("Initializing global system font cache");
            SystemFontCache::with_boxed(resolver, config)
        })
    }

    pub fn config(&self) -> &SystemFontConfig {
        &self.config
    }

    /// Resolve the font description for `role`
    ///
    /// The first call for a role invokes the resolver exactly once, even when
    /// several threads race on it; every later call returns the sealed copy.
    /// A failing resolver seals the configured fallback description instead,
    /// so it is never retried.
    ///
    /// The resolver runs under the role's slot lock and must not call back
    /// into this cache for the same role.
    pub fn resolve(&self, role: SystemFontRole) -> FontDescription {
        let mut slot = self.lock_slot(role);
        if slot.is_absolute_size {
            return slot.clone();
        }

        tracing::debug!("Resolving system font for {}", role);
        match self.resolver.query(role) {
            Ok(font) if font.is_complete() => {
                slot.style = font.style;
                slot.weight = font.weight;
                slot.specified_size = font.pixel_size;
                slot.family = font.family;
                slot.generic_family = GenericFamily::None;
                slot.is_absolute_size = true;
            }
            Ok(font) => {
                let err = FontError::InvalidFontData {
                    role,
                    message: format!("size={} family={:?}", font.pixel_size, font.family),
                };
                tracing::warn!("{}; sealing fallback font", err);
                *slot = self.config.fallback_description();
            }
            Err(e) => {
                tracing::warn!("System font lookup for {} failed: {}; sealing fallback font", role, e);
                *slot = self.config.fallback_description();
            }
        }

        tracing::debug!("Sealed system font {}: {}", role, *slot);
        slot.clone()
    }

    /// Resolve a raw role id, degrading unrecognized ids to [`SystemFontRole::Default`]
    pub fn resolve_raw(&self, id: u16) -> FontDescription {
        if SystemFontRole::from_raw(id).is_none() {
            self.flag_unknown_role(&id.to_string());
        }
        self.resolve(SystemFontRole::from_raw_or_default(id))
    }

    /// Resolve a CSS system font keyword, degrading unknown keywords to
    /// [`SystemFontRole::Default`]
    pub fn resolve_keyword(&self, keyword: &str) -> FontDescription {
        let role = match keyword.parse::<SystemFontRole>() {
            Ok(role) => role,
            Err(_) => {
                self.flag_unknown_role(keyword);
                SystemFontRole::Default
            }
        };
        self.resolve(role)
    }

    fn flag_unknown_role(&self, value: &str) {
        tracing::warn!("Unrecognized system font role {:?}, using default", value);
        debug_assert!(
            !self.config.strict_roles,
            "unrecognized system font role {:?}",
            value
        );
    }

    /// Whether `role` has already been resolved
    pub fn is_sealed(&self, role: SystemFontRole) -> bool {
        self.lock_slot(role).is_absolute_size
    }

    /// Roles resolved so far, in slot order
    pub fn sealed_roles(&self) -> Vec<SystemFontRole> {
        SystemFontRole::ALL
            .into_iter()
            .filter(|role| self.is_sealed(*role))
            .collect()
    }

    /// Return every slot to the unresolved state
    ///
    /// The next lookup of each role queries the resolver again.
    pub fn clear(&self) {
        for slot in &self.slots {
            *slot.lock().unwrap_or_else(PoisonError::into_inner) = FontDescription::new();
        }
        tracing::debug!("Cleared system font cache");
    }

    // Slots are only ever assigned whole, so a poisoned slot is still consistent
    fn lock_slot(&self, role: SystemFontRole) -> MutexGuard<'_, FontDescription> {
        self.slots[role.slot()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for SystemFontCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemFontCache")
            .field("sealed", &self.sealed_roles())
            .field("config", &self.config)
            .finish()
    }
}

/// Resolve `role` through the process-wide cache
pub fn system_font(role: SystemFontRole) -> FontDescription {
    SystemFontCache::global().resolve(role)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::{FontStyle, FontWeight};
    use crate::dummy_resolver::ScriptedResolver;
    use crate::traits::PlatformFont;

    fn scripted() -> ScriptedResolver {
        ScriptedResolver::new()
            .with_font(SystemFontRole::Caption, PlatformFont::new(12.0, "Arial"))
            .with_font(SystemFontRole::Menu, PlatformFont::new(13.0, "Menu Sans"))
            .with_font(
                SystemFontRole::StatusBar,
                PlatformFont::new(11.0, "Status Sans").with_style(FontStyle::Italic),
            )
    }

    #[test]
    fn test_first_resolve_seals_slot() {
        let resolver = scripted();
        let cache = SystemFontCache::new(resolver.clone());

        assert!(!cache.is_sealed(SystemFontRole::Caption));
        let desc = cache.resolve(SystemFontRole::Caption);

        assert!(desc.is_absolute_size);
        assert_eq!(desc.family, "Arial");
        assert_eq!(desc.specified_size, 12.0);
        assert_eq!(desc.generic_family, GenericFamily::None);
        assert!(cache.is_sealed(SystemFontRole::Caption));
        assert_eq!(resolver.calls(SystemFontRole::Caption), 1);
    }

    #[test]
    fn test_sealed_slot_skips_resolver() {
        let resolver = scripted();
        let cache = SystemFontCache::new(resolver.clone());

        let first = cache.resolve(SystemFontRole::Menu);
        resolver.set_font(
            SystemFontRole::Menu,
            PlatformFont::new(20.0, "Georgia").with_weight(FontWeight::Bold),
        );
        let second = cache.resolve(SystemFontRole::Menu);

        assert_eq!(first, second);
        assert_eq!(second.family, "Menu Sans");
        assert_eq!(resolver.calls(SystemFontRole::Menu), 1);
    }

    #[test]
    fn test_roles_are_isolated() {
        let resolver = scripted();
        let cache = SystemFontCache::new(resolver.clone());

        let menu = cache.resolve(SystemFontRole::Menu);
        assert_eq!(cache.sealed_roles(), vec![SystemFontRole::Menu]);

        let status = cache.resolve(SystemFontRole::StatusBar);
        assert_eq!(status.style, FontStyle::Italic);
        assert_eq!(cache.resolve(SystemFontRole::Menu), menu);
        assert_eq!(resolver.calls(SystemFontRole::Caption), 0);
    }

    #[test]
    fn test_resolver_failure_seals_fallback() {
        let resolver = ScriptedResolver::new().with_failure(
            SystemFontRole::Icon,
            FontError::PlatformNotSupported,
        );
        let config = SystemFontConfig::new()
            .with_fallback_family("Fallback Sans")
            .with_fallback_size(10.0);
        let cache = SystemFontCache::with_config(resolver.clone(), config);

        let desc = cache.resolve(SystemFontRole::Icon);
        assert!(desc.is_absolute_size);
        assert_eq!(desc.family, "Fallback Sans");
        assert_eq!(desc.specified_size, 10.0);

        resolver.set_font(SystemFontRole::Icon, PlatformFont::new(16.0, "Icon Sans"));
        assert_eq!(cache.resolve(SystemFontRole::Icon), desc);
        assert_eq!(resolver.calls(SystemFontRole::Icon), 1);
    }

    #[test]
    fn test_incomplete_answer_seals_fallback() {
        let resolver = ScriptedResolver::new()
            .with_font(SystemFontRole::Control, PlatformFont::new(-1.0, "Broken"))
            .with_font(SystemFontRole::SmallControl, PlatformFont::new(11.0, ""));
        let cache = SystemFontCache::new(resolver);

        let fallback = cache.config().fallback_description();
        assert_eq!(cache.resolve(SystemFontRole::Control), fallback);
        assert_eq!(cache.resolve(SystemFontRole::SmallControl), fallback);
    }

    #[test]
    fn test_unknown_raw_role_uses_default_slot() {
        let resolver = scripted();
        let cache = SystemFontCache::new(resolver.clone());

        let unknown = cache.resolve_raw(999);
        assert_eq!(unknown, cache.resolve(SystemFontRole::Default));
        assert_eq!(cache.sealed_roles(), vec![SystemFontRole::Default]);
        assert_eq!(resolver.calls(SystemFontRole::Default), 1);
    }

    #[test]
    fn test_known_raw_role_uses_its_own_slot() {
        let resolver = scripted();
        let cache = SystemFontCache::new(resolver.clone());

        let menu = cache.resolve_raw(SystemFontRole::Menu.raw());
        assert_eq!(menu.family, "Menu Sans");
        assert_eq!(cache.sealed_roles(), vec![SystemFontRole::Menu]);
        assert_eq!(resolver.calls(SystemFontRole::Default), 0);
    }

    #[test]
    fn test_unknown_role_without_strict_roles_does_not_assert() {
        let cache = SystemFontCache::new(scripted());
        assert!(!cache.config().strict_roles);
        assert_eq!(cache.resolve_raw(4096), cache.resolve(SystemFontRole::Default));
        assert_eq!(cache.resolve_keyword("-moz-window"), cache.resolve(SystemFontRole::Default));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unrecognized system font role")]
    fn test_strict_roles_flag_unknown_id() {
        let config = SystemFontConfig::new().with_strict_roles(true);
        let cache = SystemFontCache::with_config(scripted(), config);
        cache.resolve_raw(999);
    }

    #[test]
    fn test_keyword_lookup() {
        let cache = SystemFontCache::new(scripted());

        assert_eq!(cache.resolve_keyword("caption").family, "Arial");
        assert_eq!(
            cache.resolve_keyword("-moz-dialog"),
            cache.resolve(SystemFontRole::Default)
        );
    }

    #[test]
    fn test_clear_resets_slots() {
        let resolver = scripted();
        let cache = SystemFontCache::new(resolver.clone());

        cache.resolve(SystemFontRole::Caption);
        cache.clear();
        assert!(cache.sealed_roles().is_empty());

        resolver.set_font(SystemFontRole::Caption, PlatformFont::new(14.0, "Georgia"));
        assert_eq!(cache.resolve(SystemFontRole::Caption).family, "Georgia");
        assert_eq!(resolver.calls(SystemFontRole::Caption), 2);
    }
}
