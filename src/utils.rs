//! Utility functions

use once_cell::sync::OnceCell;

use crate::features::ChartError;

// ============================================================================
// Host Context
// ============================================================================

/// Application flag marking a debuggable build
pub const FLAG_DEBUGGABLE: u32 = 1 << 1;

/// Application metadata exposed by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppInfo {
    pub flags: u32,
}

/// Whatever the host hands a widget to describe the running application
pub trait HostContext {
    fn app_info(&self) -> Option<AppInfo>;
}

/// Context of the running desktop process.
///
/// Debug builds report themselves as debuggable.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopContext;

impl HostContext for DesktopContext {
    fn app_info(&self) -> Option<AppInfo> {
        let flags = if cfg!(debug_assertions) {
            FLAG_DEBUGGABLE
        } else {
            0
        };
        Some(AppInfo { flags })
    }
}

// ============================================================================
// Debug Probe
// ============================================================================

/// Answers whether the host application is debuggable.
///
/// The first answer is cached, later calls do not consult the context again.
#[derive(Debug, Default)]
pub struct DebugProbe {
    cached: OnceCell<bool>,
}

impl DebugProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_debug(&self, context: Option<&dyn HostContext>) -> Result<bool, ChartError> {
        let context = context.ok_or_else(|| {
            ChartError::InvalidArgument("host context must not be missing".to_string())
        })?;

        Ok(*self.cached.get_or_init(|| {
            context
                .app_info()
                .is_some_and(|info| info.flags & FLAG_DEBUGGABLE != 0)
        }))
    }
}
