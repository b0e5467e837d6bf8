//! Advisory diagnostics sink.
//!
//! The best-effort encoder verifies its own output in debug builds and
//! reports mismatches here. Reports never alter written bytes or returned
//! values; they exist so that a silently-truncated value shows up in logs
//! during development instead of going unnoticed.
//!
//! By default reports go to `log::warn!`, deduplicated per distinct message
//! so a hot loop cannot flood the log. Tests (or embedders) can install a
//! hook with [`set_diag_hook`]; the hook receives every report undeduped.

use std::collections::HashSet;

use lazy_static::lazy_static;
use log::warn;
use parking_lot::Mutex;

/// Callback type for an installed diagnostics hook.
pub type DiagHook = Box<dyn Fn(&str) + Send + Sync>;

lazy_static! {
    static ref HOOK: Mutex<Option<DiagHook>> = Mutex::new(None);
    static ref WARNED: Mutex<HashSet<String>> = Mutex::new(HashSet::new());
}

/// Installs (or with `None`, removes) the diagnostics hook.
///
/// While a hook is installed it replaces the default `log::warn!` sink and
/// receives every report, including repeats of the same message.
pub fn set_diag_hook(hook: Option<DiagHook>) {
    *HOOK.lock() = hook;
}

/// Routes one diagnostic message to the installed hook, or warn-once to the
/// log facade when no hook is installed.
pub(crate) fn report(msg: &str) {
    let guard = HOOK.lock();
    if let Some(hook) = guard.as_ref() {
        hook(msg);
        return;
    }
    drop(guard);
    if WARNED.lock().insert(msg.to_string()) {
        warn!("{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn test_hook_receives_every_report() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        set_diag_hook(Some(Box::new(move |msg| sink.lock().push(msg.to_string()))));
        report("first");
        report("first");
        report("second");
        set_diag_hook(None);
        assert_eq!(*seen.lock(), vec!["first", "first", "second"]);
    }

    #[test]
    #[serial]
    fn test_default_sink_dedupes() {
        set_diag_hook(None);
        // Goes through the warn-once path; nothing to observe without a
        // logger, but it must not panic and must not loop.
        report("dedup check");
        report("dedup check");
    }
}
