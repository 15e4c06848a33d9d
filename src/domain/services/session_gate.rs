//! Run-once session gate
//!
//! Whole-tree audits must run at most once per analysis session, no matter
//! how many files trigger them. The gate is an explicit context object the
//! host creates once per run; `SessionRegistry` keeps one gate per
//! `SessionId` for hosts that cannot pass a context through.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

use crate::domain::value_objects::RuleId;

/// Identifies one analysis session: process id plus working directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(pid: u32, cwd: &Path) -> Self {
        Self(format!("{}_{}", pid, cwd.display()))
    }

    /// Session of the running process in its current directory.
    pub fn current() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::new(std::process::id(), &cwd)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Set of rules that already ran in this session.
#[derive(Debug, Default)]
pub struct SessionGate {
    seen: Mutex<HashSet<RuleId>>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    fn seen(&self) -> MutexGuard<'_, HashSet<RuleId>> {
        // A panic while holding the lock leaves the set itself intact.
        self.seen.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns true exactly once per rule until `reset`. Check and insert
    /// happen under one lock, so concurrent callers cannot both win.
    pub fn run_once(&self, rule: RuleId) -> bool {
        let first = self.seen().insert(rule);
        if !first {
            tracing::debug!(rule = %rule, "rule already ran this session, skipping");
        }
        first
    }

    pub fn has_run(&self, rule: RuleId) -> bool {
        self.seen().contains(&rule)
    }

    pub fn reset(&self) {
        self.seen().clear();
    }
}

/// Process-wide map from session id to its gate. Created lazily.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<SessionId, Arc<SessionGate>>>,
}

impl SessionRegistry {
    pub fn global() -> &'static SessionRegistry {
        static REGISTRY: OnceLock<SessionRegistry> = OnceLock::new();
        REGISTRY.get_or_init(SessionRegistry::default)
    }

    pub fn gate(&self, id: &SessionId) -> Arc<SessionGate> {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(sessions.entry(id.clone()).or_default())
    }

    /// Gate for `SessionId::current()`.
    pub fn current(&self) -> Arc<SessionGate> {
        self.gate(&SessionId::current())
    }

    /// Forget every session, e.g. between independent test runs.
    pub fn reset(&self) {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn runs_once_per_rule() {
        let gate = SessionGate::new();
        assert!(gate.run_once(RuleId::FsdLayers));
        assert!(!gate.run_once(RuleId::FsdLayers));
        assert!(gate.run_once(RuleId::PublicApi));
        assert!(gate.has_run(RuleId::FsdLayers));
    }

    #[test]
    fn reset_reopens_the_gate() {
        let gate = SessionGate::new();
        assert!(gate.run_once(RuleId::NoUiInApp));
        gate.reset();
        assert!(!gate.has_run(RuleId::NoUiInApp));
        assert!(gate.run_once(RuleId::NoUiInApp));
    }

    #[test]
    fn concurrent_callers_get_exactly_one_win() {
        let gate = Arc::new(SessionGate::new());
        let handles: Vec<_> = (0..16)
            .map(|_| {
                let gate = Arc::clone(&gate);
                thread::spawn(move || gate.run_once(RuleId::PublicApi))
            })
            .collect();
        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|won| *won)
            .count();
        assert_eq!(wins, 1);
    }

    #[test]
    fn registry_shares_gate_per_session() {
        let registry = SessionRegistry::default();
        let id = SessionId::new(42, Path::new("/work"));
        assert!(registry.gate(&id).run_once(RuleId::FsdLayers));
        assert!(!registry.gate(&id).run_once(RuleId::FsdLayers));

        let other = SessionId::new(43, Path::new("/work"));
        assert!(registry.gate(&other).run_once(RuleId::FsdLayers));

        registry.reset();
        assert!(registry.gate(&id).run_once(RuleId::FsdLayers));
    }

    #[test]
    fn session_id_format() {
        let id = SessionId::new(7, Path::new("/tmp/project"));
        assert_eq!(id.as_str(), "7_/tmp/project");
    }
}
