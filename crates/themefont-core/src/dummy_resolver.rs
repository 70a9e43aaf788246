//! Scripted resolver for testing and headless use without a platform font system

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::constants::{DEFAULT_FONT_FAMILY, DEFAULT_FONT_SIZE};
use crate::error::{FontError, FontResult};
use crate::role::SystemFontRole;
use crate::traits::{PlatformFont, PlatformFontResolver};

#[derive(Debug, Default)]
struct Script {
    answers: HashMap<SystemFontRole, FontResult<PlatformFont>>,
    calls: HashMap<SystemFontRole, usize>,
}

/// Resolver answering from a per-role script
///
/// Clones share the same script and call counters, so a test can keep one
/// handle while the cache owns another, then re-script answers or inspect how
/// often each role was queried. Unscripted roles answer with
/// [`DEFAULT_FONT_FAMILY`] at [`DEFAULT_FONT_SIZE`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedResolver {
    script: Arc<Mutex<Script>>,
}

impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font(self, role: SystemFontRole, font: PlatformFont) -> Self {
        self.set_font(role, font);
        self
    }

    pub fn with_failure(self, role: SystemFontRole, error: FontError) -> Self {
        self.set_failure(role, error);
        self
    }

    /// Script the answer for `role`
    pub fn set_font(&self, role: SystemFontRole, font: PlatformFont) {
        self.script().answers.insert(role, Ok(font));
    }

    /// Make queries for `role` fail
    pub fn set_failure(&self, role: SystemFontRole, error: FontError) {
        self.script().answers.insert(role, Err(error));
    }

    /// How many times `role` has been queried
    pub fn calls(&self, role: SystemFontRole) -> usize {
        self.script().calls.get(&role).copied().unwrap_or(0)
    }

    /// Total queries across all roles
    pub fn total_calls(&self) -> usize {
        self.script().calls.values().sum()
    }

    fn script(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PlatformFontResolver for ScriptedResolver {
    fn query(&self, role: SystemFontRole) -> FontResult<PlatformFont> {
        let mut script = self.script();
        *script.calls.entry(role).or_insert(0) += 1;
        script
            .answers
            .get(&role)
            .cloned()
            .unwrap_or_else(|| Ok(PlatformFont::new(DEFAULT_FONT_SIZE, DEFAULT_FONT_FAMILY)))
    }
}
