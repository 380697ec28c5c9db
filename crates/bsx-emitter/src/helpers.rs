//! Runtime support helpers referenced by lowered output.
//!
//! The helpers themselves live in the support library linked at packaging
//! time; the emitter only records which ones a file calls.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuntimeHelper {
    SimpleTernary,
    ScopeSafeTernary,
    SimpleCoalesce,
    ScopeSafeCoalesce,
    ToString,
}

impl RuntimeHelper {
    pub const ALL: [RuntimeHelper; 5] = [
        RuntimeHelper::SimpleTernary,
        RuntimeHelper::ScopeSafeTernary,
        RuntimeHelper::SimpleCoalesce,
        RuntimeHelper::ScopeSafeCoalesce,
        RuntimeHelper::ToString,
    ];

    /// Helper name without the library prefix.
    pub const fn base_name(self) -> &'static str {
        match self {
            RuntimeHelper::SimpleTernary => "simpleTernary",
            RuntimeHelper::ScopeSafeTernary => "scopeSafeTernary",
            RuntimeHelper::SimpleCoalesce => "simpleCoalesce",
            RuntimeHelper::ScopeSafeCoalesce => "scopeSafeCoalesce",
            RuntimeHelper::ToString => "toString",
        }
    }

    /// Callable name, e.g. `bslib_simpleTernary`.
    pub fn name(self, prefix: &str) -> String {
        if prefix.is_empty() {
            self.base_name().to_string()
        } else {
            format!("{prefix}_{}", self.base_name())
        }
    }
}

/// Which runtime helpers a transpiled file calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HelpersNeeded {
    pub simple_ternary: bool,
    pub scope_safe_ternary: bool,
    pub simple_coalesce: bool,
    pub scope_safe_coalesce: bool,
    pub to_string: bool,
}

impl HelpersNeeded {
    pub fn mark(&mut self, helper: RuntimeHelper) {
        *self.flag_mut(helper) = true;
    }

    pub fn needs(&self, helper: RuntimeHelper) -> bool {
        match helper {
            RuntimeHelper::SimpleTernary => self.simple_ternary,
            RuntimeHelper::ScopeSafeTernary => self.scope_safe_ternary,
            RuntimeHelper::SimpleCoalesce => self.simple_coalesce,
            RuntimeHelper::ScopeSafeCoalesce => self.scope_safe_coalesce,
            RuntimeHelper::ToString => self.to_string,
        }
    }

    pub fn any(&self) -> bool {
        RuntimeHelper::ALL.iter().any(|h| self.needs(*h))
    }

    /// Helpers in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = RuntimeHelper> + '_ {
        RuntimeHelper::ALL.into_iter().filter(|h| self.needs(*h))
    }

    pub fn merge(&mut self, other: &HelpersNeeded) {
        for helper in other.iter() {
            self.mark(helper);
        }
    }

    fn flag_mut(&mut self, helper: RuntimeHelper) -> &mut bool {
        match helper {
            RuntimeHelper::SimpleTernary => &mut self.simple_ternary,
            RuntimeHelper::ScopeSafeTernary => &mut self.scope_safe_ternary,
            RuntimeHelper::SimpleCoalesce => &mut self.simple_coalesce,
            RuntimeHelper::ScopeSafeCoalesce => &mut self.scope_safe_coalesce,
            RuntimeHelper::ToString => &mut self.to_string,
        }
    }
}
